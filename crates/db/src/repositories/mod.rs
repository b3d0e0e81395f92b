//! Repository layer: one zero-sized struct per table, async methods taking
//! the pool or an executor.

pub mod post_repo;

pub use post_repo::PostRepo;
