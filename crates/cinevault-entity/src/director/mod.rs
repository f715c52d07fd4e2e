//! Director entity.

pub mod model;

pub use model::{CreateDirector, Director, UpdateDirector};
