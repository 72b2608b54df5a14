//! Service layer: document persistence and the per-family resource operations.
//! - `storage` hides which document store is in use.
//! - `resource` implements create/list/get once for every entity family.
//! - `catalog` bundles the families into one piece of application state.

pub mod errors;
pub mod storage;
pub mod resource;
pub mod catalog;
#[cfg(test)]
pub mod test_support;

pub use catalog::Catalog;
pub use resource::{ResourceService, LIST_LIMIT};
pub use storage::{DocumentStore, FileDocumentStore, SeaOrmDocumentStore};
