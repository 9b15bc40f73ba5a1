//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use apprepo::{ConsoleError, RepoId, RepoPage, ReviewSubmission, WorkspaceName};

/// Writes one page of repositories to the given writer.
pub fn write_repo_listing<W: Write>(
    writer: &mut W,
    page: &RepoPage,
    workspace: &WorkspaceName,
    keyword: Option<&str>,
) -> Result<(), ConsoleError> {
    let filter = keyword.map_or_else(String::new, |value| format!(" matching \"{value}\""));
    writeln!(
        writer,
        "App repositories in workspace {}{filter}:",
        workspace.as_str()
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    if page.items.is_empty() {
        writeln!(writer, "  No app repositories found.").map_err(|e| io_error(&e))?;
    }
    for record in &page.items {
        writeln!(
            writer,
            "  {} [{}] {} ({})",
            record.display_name(),
            record.status,
            record.url,
            record.id.as_str()
        )
        .map_err(|e| io_error(&e))?;
    }

    let page_info = &page.page_info;
    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Page {} of {} ({} total)",
        page_info.current_page(),
        page_info.total_pages().max(1),
        page.total_items
    )
    .map_err(|e| io_error(&e))?;

    if page_info.has_next() {
        writeln!(writer, "More pages available.").map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Writes a confirmation of deleted repositories.
pub fn write_delete_summary<W: Write>(
    writer: &mut W,
    workspace: &WorkspaceName,
    ids: &[RepoId],
) -> Result<(), ConsoleError> {
    let names: Vec<&str> = ids.iter().map(RepoId::as_str).collect();
    writeln!(
        writer,
        "Deleted {} app repositories from workspace {}: {}",
        ids.len(),
        workspace.as_str(),
        names.join(", ")
    )
    .map_err(|e| io_error(&e))
}

/// Writes a confirmation of a submitted review.
pub fn write_review_summary<W: Write>(
    writer: &mut W,
    submission: &ReviewSubmission,
) -> Result<(), ConsoleError> {
    let action = submission
        .data
        .get("action")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("review");
    writeln!(
        writer,
        "Submitted {action} for app {} version {}",
        submission.app_id.as_str(),
        submission.version_id.as_str()
    )
    .map_err(|e| io_error(&e))
}

fn io_error(error: &io::Error) -> ConsoleError {
    ConsoleError::Io {
        message: error.to_string(),
    }
}
