//! Search, replace and file commands.
//!
//! `ReplaceAll` is a recorded edit; afterwards the replacement text is
//! searched so the new occurrences are highlighted. `Open` and `New` swap the
//! whole buffer and clear history. `Write` without a path reuses the path of
//! the last load or save; when there is none it logs and does nothing.

use super::DispatchResult;
use crate::intent;
use core_state::{EditorError, EditorState};
use std::path::Path;

pub(crate) fn handle_search(pattern: &str, state: &mut EditorState) -> DispatchResult {
    let hits = state.search_all(pattern).len();
    tracing::trace!(target: "actions.dispatch", op = "search", pattern, hits, "search");
    DispatchResult::dirty()
}

pub(crate) fn handle_clear_search(state: &mut EditorState) -> DispatchResult {
    if state.matches().is_empty() {
        return DispatchResult::clean();
    }
    state.clear_matches();
    DispatchResult::dirty()
}

pub(crate) fn handle_replace_all(
    search: &str,
    replace: &str,
    state: &mut EditorState,
) -> Result<DispatchResult, EditorError> {
    let depth = state.undo_depth();
    state.apply(intent::replace_all(search, replace), true)?;
    let highlighted = state.search_all(replace).len();
    tracing::debug!(
        target: "actions.dispatch",
        op = "replace_all",
        search,
        replace,
        recorded = state.undo_depth() > depth,
        highlighted,
        "replace_all"
    );
    Ok(DispatchResult::buffer_replaced())
}

pub(crate) fn handle_open(path: &Path, state: &mut EditorState) -> Result<DispatchResult, EditorError> {
    let loaded = state.load(path)?;
    tracing::info!(target: "actions.dispatch", op = "open", file = %loaded.display(), lines = state.buffer().line_count(), "open");
    Ok(DispatchResult::buffer_replaced())
}

pub(crate) fn handle_write(
    path: Option<&Path>,
    state: &mut EditorState,
) -> Result<DispatchResult, EditorError> {
    let Some(target) = path.map(Path::to_path_buf).or_else(|| state.file_name.clone()) else {
        tracing::error!(target: "actions.dispatch", "write_no_filename");
        return Ok(DispatchResult::clean());
    };
    state.save(&target)?;
    tracing::info!(target: "actions.dispatch", op = "write", file = %target.display(), "write");
    Ok(DispatchResult::dirty())
}

pub(crate) fn handle_new(state: &mut EditorState) -> DispatchResult {
    state.clear();
    state.file_name = None;
    tracing::info!(target: "actions.dispatch", op = "new", "new");
    DispatchResult::buffer_replaced()
}
