//! Entity models for the catalog API and their stored-document form.

pub mod errors;
pub mod db;
pub mod document;
pub mod codec;
pub mod query;
pub mod resource;
pub mod product;
pub mod rental;
pub mod article;
pub mod service;

pub use codec::Document;
pub use query::Filter;
pub use resource::{Identity, Resource, SingleLookup};

#[cfg(test)]
mod tests;
