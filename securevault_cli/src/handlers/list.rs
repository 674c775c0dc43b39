use securevault::view::filter::{TypeFilter, available_types};
use securevault::view::sort::{SortDirection, SortField};
use securevault::view::{FileView, ViewState};

use crate::errors::CliError;
use crate::session::Session;
use crate::ui::printer;

#[allow(clippy::too_many_arguments)]
pub fn handle_list(
    session: &Session,
    folder: Option<String>,
    search: Option<String>,
    type_filter: TypeFilter,
    sort: SortField,
    order: SortDirection,
    page: usize,
    page_size: usize,
    detail: bool,
) -> Result<(), CliError> {
    // 像仪表盘的控件一样装配视图状态；页码最后设置，
    // 因为改变过滤维度的操作都会把它重置为 1。
    let mut state = ViewState::new();
    if let Some(key) = folder {
        let target = session
            .catalog
            .resolve_folder(&key)
            .ok_or(CliError::FolderNotFound(key))?;
        let target_id = target.id.clone();
        state.open_folder(&target_id, &session.catalog.folders);
    }
    if let Some(term) = search {
        state.set_search_term(term);
    }
    state.set_type_filter(type_filter);
    state.set_sort(sort, order);
    state.set_page_size(page_size);
    state.set_page(page);

    let view = FileView::build(&session.catalog.files, &session.catalog.folders, &state);

    printer::print_breadcrumb(&state);
    for folder in &view.folders {
        printer::print_folder_row(folder, detail);
    }
    for file in &view.files.items {
        printer::print_file_row(file, detail);
    }
    printer::print_page_footer(&view.files);
    Ok(())
}

pub fn handle_types(session: &Session) -> Result<(), CliError> {
    let types = available_types(&session.catalog.files);
    if types.is_empty() {
        println!("No file types in the catalog.");
        return Ok(());
    }
    println!("all");
    for label in types {
        println!("{}", label);
    }
    Ok(())
}
