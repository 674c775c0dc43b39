use crate::errors::CliError;
use crate::session::Session;
use crate::ui::printer;

pub fn handle_log(session: &Session, limit: usize) -> Result<(), CliError> {
    let recent = session.store.state.recent_activity(limit);
    if recent.is_empty() {
        println!("No activity recorded.");
        return Ok(());
    }
    for record in recent {
        printer::print_activity(record);
    }
    Ok(())
}
