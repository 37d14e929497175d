//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration, login and token handling for the `users` table.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod token;
pub mod repo;

pub use service::AuthService;
