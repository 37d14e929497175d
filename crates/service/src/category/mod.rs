//! Flat category CRUD.

pub mod repository;
pub mod service;
pub mod repo;

pub use service::{CategoryInput, CategoryService};
