//! Skeletal pose editor: a labelled 2D landmark set with a parent/child forest,
//! reach-constrained dragging with rigid subtree propagation, and joint angle measurement.

pub mod angles;
pub mod config;
pub mod drag;
pub mod editor;
pub mod error;
pub mod json_loader;
pub mod landmark;
pub mod mover;
pub mod scene;
pub mod skeleton;
pub mod svg;
pub mod view;

pub use editor::PoseEditor;
pub use error::{EditorError, Result};
pub use landmark::{Landmark, Point};
