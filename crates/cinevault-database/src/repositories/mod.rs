//! Repository implementations for all CineVault entities.

pub mod actor;
pub mod director;
pub mod genre;
pub mod movie;

pub use actor::ActorRepository;
pub use director::DirectorRepository;
pub use genre::GenreRepository;
pub use movie::MovieRepository;
