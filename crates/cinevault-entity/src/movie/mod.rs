//! Movie entity and its hydrated relation graph.

pub mod model;

pub use model::{CreateMovie, Movie, MovieFilter, MovieWithRelations, UpdateMovie};
