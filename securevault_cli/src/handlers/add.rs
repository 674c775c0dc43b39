use std::fs;
use std::path::PathBuf;

use securevault::common::constants::OFFLINE_USER;
use securevault::common::id::EntryId;
use securevault::utils::size::format_file_size;

use crate::errors::CliError;
use crate::session::Session;

/// Registers a local file's metadata in the catalog. Only metadata moves:
/// offline mode records what the user "uploaded", it does not copy bytes.
pub fn handle_add(
    session: &mut Session,
    local_path: PathBuf,
    folder: Option<String>,
    name: Option<String>,
) -> Result<(), CliError> {
    if !local_path.is_file() {
        return Err(CliError::NotAFile(local_path));
    }
    let size = fs::metadata(&local_path)?.len();
    let parent = resolve_parent(session, folder)?;

    let display_name = name.unwrap_or_else(|| {
        local_path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let entry = session.catalog.insert_local_file(display_name, size, parent);
    let entry_name = entry.name.clone();
    let entry_id = entry.id.clone();
    let details = format!("{} ({})", entry_name, format_file_size(size));

    session.store.state.log_activity("upload", details, OFFLINE_USER);
    session.save()?;

    println!("Added '{}' with id {}.", entry_name, entry_id);
    Ok(())
}

/// 将 "--folder" 参数解析为父文件夹 id；缺省表示根。
pub(crate) fn resolve_parent(
    session: &Session,
    folder: Option<String>,
) -> Result<Option<EntryId>, CliError> {
    match folder {
        Some(key) => {
            let target = session
                .catalog
                .resolve_folder(&key)
                .ok_or(CliError::FolderNotFound(key))?;
            Ok(Some(target.id.clone()))
        }
        None => Ok(None),
    }
}
