mod json_file_repository;
mod traits;

pub use json_file_repository::JsonFileBookRepository;
pub use traits::BookRepository;
