//! Infrastructure Layer - Repository implementations

pub mod memory;
pub mod postgres;

pub use memory::InMemoryTaskRepository;
pub use postgres::PgTaskRepository;
