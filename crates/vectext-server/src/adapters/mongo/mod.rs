//! MongoDB Adapters

mod text_repository;

pub use text_repository::MongoTextRepository;
