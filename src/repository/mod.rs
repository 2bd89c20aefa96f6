mod error;
mod students;

pub use error::RepositoryError;
pub use students::StudentRepository;
