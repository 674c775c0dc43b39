use clap::{Parser, Subcommand};
use std::path::PathBuf;

use securevault::view::filter::TypeFilter;
use securevault::view::sort::{SortDirection, SortField};

#[derive(Parser, Debug)]
#[command(name = "securevault", author, version, about = "Offline browser for a SecureVault catalog", long_about = None)]
pub struct Cli {
    /// Vault directory (defaults to the current directory)
    #[arg(short = 'v', long = "vault", value_name = "DIR", global = true)]
    pub vault: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty vault in the target directory
    Init,

    /// List the folders and a page of files of one scope
    #[command(visible_alias = "ls")]
    List {
        /// Folder to open (id or name); omitted means the root
        #[arg(short = 'f', long = "folder")]
        folder: Option<String>,

        /// Case-insensitive substring matched against names and types
        #[arg(short = 's', long = "search")]
        search: Option<String>,

        /// Type filter: "all" or one category (e.g. PDF, Image)
        #[arg(short = 't', long = "type", default_value = "all")]
        type_filter: TypeFilter,

        /// Sort key: name, size, uploadDate, status, storageUsed
        #[arg(long = "sort", default_value = "uploadDate")]
        sort: SortField,

        /// Sort direction: asc or desc
        #[arg(long = "order", default_value = "desc")]
        order: SortDirection,

        /// 1-based page to show
        #[arg(short = 'p', long = "page", default_value_t = 1)]
        page: usize,

        #[arg(long = "page-size", default_value_t = 10)]
        page_size: usize,

        /// Show ids and protection flags
        #[arg(short = 'd', long = "detail")]
        detail: bool,
    },

    /// Show the type-filter values present in the catalog
    Types,

    /// Register a local file's metadata in the catalog
    Add {
        #[arg(required = true)]
        local_path: PathBuf,

        /// Destination folder (id or name)
        #[arg(short = 'f', long = "folder")]
        folder: Option<String>,

        /// Register under this name instead of the file's own
        #[arg(short = 'n', long = "name")]
        name: Option<String>,
    },

    /// Create a folder
    Mkdir {
        name: String,

        /// Parent folder (id or name); omitted means the root
        #[arg(short = 'f', long = "folder")]
        parent: Option<String>,
    },

    /// Remove a file (or, with --folder, a folder) by id
    Rm {
        id: String,

        #[arg(long)]
        folder: bool,
    },

    /// Rename a file (or, with --folder, a folder) by id
    Rename {
        id: String,
        name: String,

        #[arg(long)]
        folder: bool,
    },

    /// Password-protect a file (or, with --folder, a folder)
    Protect {
        id: String,
        password: String,

        #[arg(long)]
        folder: bool,
    },

    /// Remove password protection
    Unprotect {
        id: String,

        #[arg(long)]
        folder: bool,
    },

    /// Check a password against the gate for one entry
    Unlock {
        id: String,
        password: String,

        #[arg(long)]
        folder: bool,
    },

    /// Show recent activity, newest first
    Log {
        #[arg(short = 'n', long = "limit", default_value_t = 20)]
        limit: usize,
    },
}
