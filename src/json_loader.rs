// json_loader.rs
use serde::Deserialize;
use std::collections::BTreeMap;
use crate::error::{EditorError, Result};
use crate::landmark::Landmark;

/// On-disk shape of `skeleton.json`: default pose plus the static tables.
#[derive(Debug, Deserialize, Clone)]
pub struct SkeletonDef {
    pub landmarks:   BTreeMap<Landmark, [f32; 2]>,
    pub connections: Vec<(Landmark, Landmark)>,
    #[serde(default)] pub hierarchy: BTreeMap<Landmark, Vec<Landmark>>,
    #[serde(default)] pub max_reach: BTreeMap<Landmark, f32>,
}

// include_str! requires compile-time paths; all assets must be listed here.
fn asset(name: &str) -> Result<&'static str> {
    match name {
        "skeleton.json" => Ok(include_str!("../assets/skeleton.json")),
        _ => Err(EditorError::MissingAsset(name.to_string())),
    }
}

pub fn load<T: for<'de> Deserialize<'de>>(name: &str) -> Result<T> {
    parse(name, asset(name)?)
}

pub fn parse<T: for<'de> Deserialize<'de>>(name: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|source| EditorError::Parse { name: name.to_string(), source })
}
