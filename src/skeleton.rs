// skeleton.rs — current landmark positions plus the static topology that constrains them.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{EnumCount, IntoEnumIterator};
use crate::error::{EditorError, Result};
use crate::json_loader::{self, SkeletonDef};
use crate::landmark::{Landmark, Point};

/// Position of every landmark. Always complete: there is no "missing" landmark.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Landmark, Point>", try_from = "BTreeMap<Landmark, Point>")]
pub struct Skeleton {
    points: [Point; Landmark::COUNT],
}

impl Skeleton {
    pub fn get(&self, landmark: Landmark) -> Point { self.points[landmark.index()] }

    pub fn set(&mut self, landmark: Landmark, p: Point) { self.points[landmark.index()] = p; }

    pub fn iter(&self) -> impl Iterator<Item = (Landmark, Point)> + '_ {
        Landmark::iter().map(move |l| (l, self.points[l.index()]))
    }
}

impl From<Skeleton> for BTreeMap<Landmark, Point> {
    fn from(s: Skeleton) -> Self { s.iter().collect() }
}

impl TryFrom<BTreeMap<Landmark, Point>> for Skeleton {
    type Error = EditorError;

    fn try_from(map: BTreeMap<Landmark, Point>) -> Result<Self> {
        let mut points = [Point::ZERO; Landmark::COUNT];
        for l in Landmark::iter() {
            points[l.index()] = *map.get(&l).ok_or(EditorError::MissingLandmark(l))?;
        }
        Ok(Self { points })
    }
}

/// Connections, hierarchy forest, derived parent map and max-reach table.
/// Immutable after construction, so the forest invariant cannot be broken later.
#[derive(Clone, Debug)]
pub struct Topology {
    connections: Vec<(Landmark, Landmark)>,
    children:    [Vec<Landmark>; Landmark::COUNT],
    parents:     [Option<Landmark>; Landmark::COUNT],
    max_reach:   [Option<f32>; Landmark::COUNT],
}

impl Topology {
    pub fn connections(&self) -> &[(Landmark, Landmark)] { &self.connections }

    pub fn children(&self, landmark: Landmark) -> &[Landmark] { &self.children[landmark.index()] }

    pub fn parent(&self, landmark: Landmark) -> Option<Landmark> { self.parents[landmark.index()] }

    /// `None` means unconstrained.
    pub fn max_reach(&self, landmark: Landmark) -> Option<f32> { self.max_reach[landmark.index()] }

    pub fn roots(&self) -> impl Iterator<Item = Landmark> + '_ {
        Landmark::iter().filter(|l| self.parent(*l).is_none() && !self.children(*l).is_empty())
    }

    /// Every landmark below `landmark`, excluding itself.
    pub fn descendants(&self, landmark: Landmark) -> Vec<Landmark> {
        let mut out = Vec::new();
        let mut stack: Vec<Landmark> = self.children(landmark).to_vec();
        while let Some(l) = stack.pop() {
            out.push(l);
            stack.extend_from_slice(self.children(l));
        }
        out
    }

    pub fn from_def(def: &SkeletonDef) -> Result<Self> {
        let mut children: [Vec<Landmark>; Landmark::COUNT] = std::array::from_fn(|_| Vec::new());
        let mut parents = [None; Landmark::COUNT];

        for (&parent, kids) in &def.hierarchy {
            for &child in kids {
                if child == parent { return Err(EditorError::Cycle(child)); }
                if let Some(first) = parents[child.index()] {
                    return Err(EditorError::DuplicateParent { child, first, second: parent });
                }
                parents[child.index()] = Some(parent);
                children[parent.index()].push(child);
            }
        }

        // With one parent per node, a cycle shows up as a parent chain longer than the vocabulary.
        for l in Landmark::iter() {
            let (mut cur, mut steps) = (parents[l.index()], 0);
            while let Some(p) = cur {
                steps += 1;
                if steps > Landmark::COUNT { return Err(EditorError::Cycle(l)); }
                cur = parents[p.index()];
            }
        }

        let mut max_reach = [None; Landmark::COUNT];
        for (&l, &reach) in &def.max_reach {
            if !reach.is_finite() || reach < 0.0 { return Err(EditorError::InvalidReach(l, reach)); }
            max_reach[l.index()] = Some(reach);
        }

        Ok(Self { connections: def.connections.clone(), children, parents, max_reach })
    }
}

impl SkeletonDef {
    pub fn default_pose(&self) -> Result<Skeleton> {
        let map: BTreeMap<Landmark, Point> = self.landmarks.iter().map(|(l, p)| (*l, Point::from(*p))).collect();
        Skeleton::try_from(map)
    }
}

/// Default pose and topology from the embedded `skeleton.json`.
pub fn initialize() -> Result<(Skeleton, Topology)> {
    let def: SkeletonDef = json_loader::load("skeleton.json")?;
    let topology = Topology::from_def(&def)?;
    let skeleton = def.default_pose()?;
    tracing::debug!(
        landmarks = Landmark::COUNT,
        connections = topology.connections().len(),
        roots = topology.roots().count(),
        "skeleton initialised"
    );
    Ok((skeleton, topology))
}
