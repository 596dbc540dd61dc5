pub mod server_repository;

pub use server_repository::{
    InMemoryServerRepository, RepositoryError, RepositoryResult, ServerRepository,
};
