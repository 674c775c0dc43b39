use securevault::common::constants::OFFLINE_USER;
use securevault::common::id::EntryId;
use securevault::offline::gate::{GateState, PasswordGate};

use crate::errors::CliError;
use crate::session::Session;

pub fn handle_protect(
    session: &mut Session,
    id: String,
    password: String,
    folder: bool,
) -> Result<(), CliError> {
    let entry_id = EntryId::from(id.as_str());

    // 先乐观更新目录中的标志，再写离线存储的口令记录
    let name = if folder {
        session
            .catalog
            .set_folder_protected(&entry_id, true)
            .map_err(|_| CliError::EntryNotFound(id))?;
        let name = folder_name(session, &entry_id);
        session.store.state.protect_folder(entry_id, &password);
        name
    } else {
        session
            .catalog
            .set_file_protected(&entry_id, true)
            .map_err(|_| CliError::EntryNotFound(id))?;
        let name = file_name(session, &entry_id);
        session.store.state.protect_file(entry_id, &password);
        name
    };

    session
        .store
        .state
        .log_activity("protect", name.clone(), OFFLINE_USER);
    session.save()?;

    println!("Protection enabled for '{}'.", name);
    Ok(())
}

pub fn handle_unprotect(session: &mut Session, id: String, folder: bool) -> Result<(), CliError> {
    let entry_id = EntryId::from(id.as_str());

    let name = if folder {
        session
            .catalog
            .set_folder_protected(&entry_id, false)
            .map_err(|_| CliError::EntryNotFound(id))?;
        session.store.state.unprotect_folder(&entry_id);
        folder_name(session, &entry_id)
    } else {
        session
            .catalog
            .set_file_protected(&entry_id, false)
            .map_err(|_| CliError::EntryNotFound(id))?;
        session.store.state.unprotect_file(&entry_id);
        file_name(session, &entry_id)
    };

    session
        .store
        .state
        .log_activity("unprotect", name.clone(), OFFLINE_USER);
    session.save()?;

    println!("Protection removed from '{}'.", name);
    Ok(())
}

/// Runs one gate verification the way a password modal does:
/// locked → verifying → unlocked on success, back to locked on failure.
pub fn handle_unlock(
    session: &Session,
    id: String,
    password: String,
    folder: bool,
) -> Result<(), CliError> {
    let entry_id = EntryId::from(id.as_str());

    let mut gate = PasswordGate::new();
    gate.begin_verify(&entry_id);
    let ok = if folder {
        session.store.state.verify_folder(&entry_id, &password)
    } else {
        session.store.state.verify_file(&entry_id, &password)
    };

    match gate.complete_verify(&entry_id, ok) {
        GateState::Unlocked => println!("Unlocked for this session."),
        _ => println!("Wrong password; entry stays locked."),
    }
    Ok(())
}

fn file_name(session: &Session, id: &EntryId) -> String {
    session
        .catalog
        .file(id)
        .map(|f| f.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn folder_name(session: &Session, id: &EntryId) -> String {
    session
        .catalog
        .folder(id)
        .map(|f| f.name.clone())
        .unwrap_or_else(|| id.to_string())
}
