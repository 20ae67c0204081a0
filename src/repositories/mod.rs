mod in_memory_repository;
mod json_file_repository;
mod traits;

pub use in_memory_repository::InMemoryRepository;
pub use json_file_repository::{JsonFileRepository, DEFAULT_DATA_FILE};
pub use traits::ContactRepository;
