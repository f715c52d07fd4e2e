//! Actor entity.

pub mod model;

pub use model::{Actor, CreateActor, UpdateActor};
