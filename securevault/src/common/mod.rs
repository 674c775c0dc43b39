pub mod constants;
pub mod entry;
pub mod id;
pub mod ingest;

pub use entry::{FileEntry, FolderEntry, UserRecord};
pub use id::EntryId;
pub use ingest::{RawFileRecord, RawFolderRecord};
