use securevault::common::constants::OFFLINE_USER;
use securevault::common::id::EntryId;

use crate::errors::CliError;
use crate::handlers::add::resolve_parent;
use crate::session::Session;

pub fn handle_mkdir(
    session: &mut Session,
    name: String,
    parent: Option<String>,
) -> Result<(), CliError> {
    let parent_id = resolve_parent(session, parent)?;
    let entry = session.catalog.insert_local_folder(name, parent_id);
    let entry_name = entry.name.clone();
    let entry_id = entry.id.clone();

    session
        .store
        .state
        .log_activity("create_folder", entry_name.clone(), OFFLINE_USER);
    session.save()?;

    println!("Created folder '{}' with id {}.", entry_name, entry_id);
    Ok(())
}

pub fn handle_rm(session: &mut Session, id: String, folder: bool) -> Result<(), CliError> {
    let entry_id = EntryId::from(id.as_str());
    let removed_name = if folder {
        session
            .catalog
            .remove_folder(&entry_id)
            .map_err(|_| CliError::EntryNotFound(id))?
            .name
    } else {
        session
            .catalog
            .remove_file(&entry_id)
            .map_err(|_| CliError::EntryNotFound(id))?
            .name
    };

    // 删除同时清掉遗留的保护记录
    if folder {
        session.store.state.unprotect_folder(&entry_id);
    } else {
        session.store.state.unprotect_file(&entry_id);
    }

    session
        .store
        .state
        .log_activity("delete", removed_name.clone(), OFFLINE_USER);
    session.save()?;

    println!("Removed '{}'.", removed_name);
    Ok(())
}

pub fn handle_rename(
    session: &mut Session,
    id: String,
    name: String,
    folder: bool,
) -> Result<(), CliError> {
    let entry_id = EntryId::from(id.as_str());
    let previous = if folder {
        session
            .catalog
            .rename_folder(&entry_id, name.clone())
            .map_err(|_| CliError::EntryNotFound(id))?
    } else {
        session
            .catalog
            .rename_file(&entry_id, name.clone())
            .map_err(|_| CliError::EntryNotFound(id))?
    };

    session.store.state.log_activity(
        "rename",
        format!("{} -> {}", previous, name),
        OFFLINE_USER,
    );
    session.save()?;

    println!("Renamed '{}' to '{}'.", previous, name);
    Ok(())
}
