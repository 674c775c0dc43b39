//! SecureVault client core: the in-memory list-view engine behind the
//! document dashboards, the canonical data model it runs over, and the
//! offline fallback store used when the backend is unreachable.
//!
//! The engine itself performs no I/O and has no failure modes: folder
//! scoping, search and type filtering, stable sorting and pagination are
//! total functions over well-typed inputs. All I/O lives at the edges:
//! the ingestion boundary that normalizes raw backend records, and the
//! JSON-backed offline store.

pub mod catalog;
pub mod common;
pub mod offline;
pub mod utils;
pub mod view;

pub use catalog::{Catalog, CatalogError};
pub use common::{EntryId, FileEntry, FolderEntry, UserRecord};
pub use view::{FileView, ViewState};

#[cfg(test)]
mod tests;
