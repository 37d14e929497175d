pub mod errors;
pub mod db;
pub mod user;
pub mod category;
pub mod qa;
pub mod document;
pub mod attachment;

#[cfg(test)]
mod tests;
