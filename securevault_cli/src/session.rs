use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use securevault::catalog::Catalog;
use securevault::common::constants::CATALOG_FILE;
use securevault::common::entry::{FileEntry, FolderEntry};
use securevault::offline::store::OfflineStore;

use crate::errors::CliError;

/// The on-disk shape of `catalog.json`: the two collections a dashboard
/// owns, in their canonical (already normalized) form.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CatalogDocument {
    files: Vec<FileEntry>,
    folders: Vec<FolderEntry>,
}

/// One CLI invocation's working set: the catalog plus the offline store of
/// a vault directory. Plays the role the dashboard container plays in the
/// web client: it owns the collections, everything else borrows them.
pub struct Session {
    pub root: PathBuf,
    pub catalog: Catalog,
    pub store: OfflineStore,
}

impl Session {
    /// Creates an empty vault in `root`.
    pub fn init(root: &Path) -> Result<Session, CliError> {
        if root.join(CATALOG_FILE).is_file() {
            return Err(CliError::VaultAlreadyExists(root.to_path_buf()));
        }
        fs::create_dir_all(root)?;
        let session = Session {
            root: root.to_path_buf(),
            catalog: Catalog::new(),
            store: OfflineStore::open(root)?,
        };
        session.save()?;
        Ok(session)
    }

    /// Opens an existing vault and folds the offline protection flags into
    /// the freshly loaded catalog, as every offline-mode reload does.
    pub fn open(root: &Path) -> Result<Session, CliError> {
        let catalog_path = root.join(CATALOG_FILE);
        if !catalog_path.is_file() {
            return Err(CliError::VaultNotFound(root.to_path_buf()));
        }
        let document: CatalogDocument = serde_json::from_str(&fs::read_to_string(&catalog_path)?)?;
        let store = OfflineStore::open(root)?;

        let mut catalog = Catalog {
            files: document.files,
            folders: document.folders,
        };
        catalog.apply_protection_overlay(&store.state);

        Ok(Session {
            root: root.to_path_buf(),
            catalog,
            store,
        })
    }

    /// Persists the catalog and the offline store.
    pub fn save(&self) -> Result<(), CliError> {
        let document = CatalogDocument {
            files: self.catalog.files.clone(),
            folders: self.catalog.folders.clone(),
        };
        fs::write(
            self.root.join(CATALOG_FILE),
            serde_json::to_string_pretty(&document)?,
        )?;
        self.store.save()?;
        Ok(())
    }
}
