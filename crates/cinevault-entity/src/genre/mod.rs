//! Genre entity.

pub mod model;

pub use model::{CreateGenre, Genre, UpdateGenre};
