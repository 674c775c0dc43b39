/// File name of the catalog document inside a vault directory.
pub const CATALOG_FILE: &str = "catalog.json";

/// File name of the offline fallback store inside a vault directory.
pub const OFFLINE_STORE_FILE: &str = "offline.json";

// --- 离线口令记录 ---
/// Prefix marking a salted one-way password record. Records without this
/// prefix are legacy reversible-base64 entries kept for verification only.
pub const SALTED_HASH_PREFIX: &str = "sha256:";

// --- 列表视图默认值 ---
/// Default page size of every dashboard list view.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The page sizes the UI offers in its selector.
pub const PAGE_SIZE_CHOICES: [usize; 4] = [10, 15, 20, 25];

/// The user name recorded on activity entries written in offline mode.
pub const OFFLINE_USER: &str = "offline";
