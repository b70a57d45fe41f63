//! # Scene Providers
//!
//! File formats that produce or consume a [`Scene`](crate::scene::Scene).
//! COLLADA import and export belong to an external asset library; the OBJ
//! provider here covers loading, baking and saving without one.

pub mod obj;

pub use obj::{load_obj, load_obj_from_reader, save_obj, write_obj, ImportOptions};
