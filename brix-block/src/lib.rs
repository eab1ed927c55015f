//! Block rendering: a template is rendered once into a live tree while the
//! positions of its dynamic props are recorded as an edit list. Updates
//! replay the edit list against cached node handles instead of re-diffing
//! the tree.

pub mod block;
pub mod edit;
pub mod hole;
pub mod render;
pub mod value;

pub use block::{define, Block, BlockDef, BlockError};
pub use edit::Edit;
pub use hole::{probe_template, Hole, Probe};
pub use render::{render_template, resolve};
pub use value::{PropMap, Value};
