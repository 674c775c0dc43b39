mod cli;
mod errors;
mod handlers;
mod session;
mod ui;

use std::env;
use std::process;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::errors::CliError;
use crate::session::Session;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let root = match cli.vault {
        Some(path) => path,
        None => env::current_dir()?,
    };

    if let Commands::Init = cli.command {
        Session::init(&root)?;
        println!("Initialized empty vault at {}", root.display());
        return Ok(());
    }

    let mut session = Session::open(&root)?;
    match cli.command {
        Commands::Init => unreachable!(),
        Commands::List {
            folder,
            search,
            type_filter,
            sort,
            order,
            page,
            page_size,
            detail,
        } => handlers::list::handle_list(
            &session,
            folder,
            search,
            type_filter,
            sort,
            order,
            page,
            page_size,
            detail,
        ),
        Commands::Types => handlers::list::handle_types(&session),
        Commands::Add {
            local_path,
            folder,
            name,
        } => handlers::add::handle_add(&mut session, local_path, folder, name),
        Commands::Mkdir { name, parent } => {
            handlers::folder::handle_mkdir(&mut session, name, parent)
        }
        Commands::Rm { id, folder } => handlers::folder::handle_rm(&mut session, id, folder),
        Commands::Rename { id, name, folder } => {
            handlers::folder::handle_rename(&mut session, id, name, folder)
        }
        Commands::Protect {
            id,
            password,
            folder,
        } => handlers::protect::handle_protect(&mut session, id, password, folder),
        Commands::Unprotect { id, folder } => {
            handlers::protect::handle_unprotect(&mut session, id, folder)
        }
        Commands::Unlock {
            id,
            password,
            folder,
        } => handlers::protect::handle_unlock(&session, id, password, folder),
        Commands::Log { limit } => handlers::activity::handle_log(&session, limit),
    }
}
