//! Service layer for the QA knowledge base.
//! - One service per resource, each generic over a repository trait.
//! - SeaORM repositories for production, in-memory ones for tests.
//! - Reuses validation and entity definitions from the `models` crate.

pub mod errors;
pub mod pagination;
pub mod auth;
pub mod category;
pub mod qa;
#[cfg(test)]
pub mod test_support;
