//! Q&A entries with view and like counters.

pub mod repository;
pub mod service;
pub mod repo;

pub use service::{QaInput, QaService, MOCK_USER_ID};
