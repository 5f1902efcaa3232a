//! Plain-text widgets printed by the dashboard.

use std::fmt::Write;

use notebook_core::defaults::DISPLAY_TIME_FORMAT;
use notebook_core::Note;

fn header(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
}

/// "All Notes": every note with content, creation time, and timestamped comments.
pub fn all_notes(notes: &[Note]) -> String {
    let mut out = String::new();
    header(&mut out, "All Notes");

    if notes.is_empty() {
        out.push_str("No notes yet.\n");
        return out;
    }

    for note in notes {
        let _ = writeln!(out, "\n{} (ID: {})", note.title, note.id);
        let _ = writeln!(out, "  {}", note.content);
        let _ = writeln!(
            out,
            "  Created at: {}",
            note.date_created.format(DISPLAY_TIME_FORMAT)
        );
        out.push_str("  Comments:\n");
        for comment in &note.comments {
            let _ = writeln!(
                out,
                "  - {} (Created at: {})",
                comment.content,
                comment.date_created.format(DISPLAY_TIME_FORMAT)
            );
        }
    }
    out
}

/// "Search Notes": each hit with its comments and their ids.
pub fn search_results(notes: &[Note]) -> String {
    let mut out = String::new();
    header(&mut out, "Search Notes");

    if notes.is_empty() {
        out.push_str("No notes found.\n");
        return out;
    }

    for note in notes {
        let _ = writeln!(out, "\n{} (ID: {})", note.title, note.id);
        let _ = writeln!(out, "  {}", note.content);
        out.push_str("  Comments:\n");
        for comment in &note.comments {
            let _ = writeln!(out, "  - {} (ID: {})", comment.content, comment.id);
        }
    }
    out
}
