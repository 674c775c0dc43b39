use std::io;
use std::path::PathBuf;
use thiserror::Error;

use securevault::catalog::CatalogError;
use securevault::offline::store::StoreError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Vault not found at path: {0} (run 'securevault init' first)")]
    VaultNotFound(PathBuf),

    #[error("A vault already exists at: {0}")]
    VaultAlreadyExists(PathBuf),

    #[error("The specified entry was not found in the vault: {0}")]
    EntryNotFound(String),

    #[error("The specified folder was not found: {0}")]
    FolderNotFound(String),

    #[error("The provided path is not a file: {0}")]
    NotAFile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read vault document: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Offline store error: {0}")]
    Store(#[from] StoreError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
