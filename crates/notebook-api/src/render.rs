//! HTML rendering for the form UI.
//!
//! Everything user-supplied goes through [`html_escape`] before it reaches the
//! page.

use notebook_core::defaults::DISPLAY_TIME_FORMAT;
use notebook_core::{Comment, Note};

/// What the home page should show besides the note list.
#[derive(Debug, Default)]
pub struct PageContext<'a> {
    /// Banner shown above the notes after a rejected form submission.
    pub error: Option<&'a str>,
    /// Query and hits for the "Search Results" section.
    pub search: Option<(&'a str, &'a [Note])>,
}

/// Simple HTML escaping for security.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn render_comment(comment: &Comment) -> String {
    format!(
        r#"<li class="comment">{content} <small>{date}</small></li>"#,
        content = html_escape(&comment.content),
        date = comment.date_created.format(DISPLAY_TIME_FORMAT),
    )
}

fn render_comments(comments: &[Comment]) -> String {
    if comments.is_empty() {
        return r#"<p class="muted">No comments yet.</p>"#.to_string();
    }
    let items: String = comments.iter().map(render_comment).collect();
    format!(r#"<ul class="comments">{}</ul>"#, items)
}

/// A note card with its delete and add-comment forms.
fn render_note(note: &Note) -> String {
    format!(
        r#"<article class="note" id="note-{id}">
  <h3>{title}</h3>
  <small>Created {date}</small>
  <p>{content}</p>
  <form action="/delete_note/{id}" method="post">
    <button type="submit">Delete Note</button>
  </form>
  <h4>Comments</h4>
  {comments}
  <form action="/add_comment/{id}" method="post">
    <input type="text" name="comment_content" placeholder="Add a comment" required>
    <button type="submit">Add Comment</button>
  </form>
</article>
"#,
        id = note.id,
        title = html_escape(&note.title),
        date = note.date_created.format(DISPLAY_TIME_FORMAT),
        content = html_escape(&note.content),
        comments = render_comments(&note.comments),
    )
}

/// Read-only card used in search results.
fn render_hit(note: &Note) -> String {
    format!(
        r#"<article class="hit">
  <h3>{title} <small>(ID: {id})</small></h3>
  <p>{content}</p>
  {comments}
</article>
"#,
        id = note.id,
        title = html_escape(&note.title),
        content = html_escape(&note.content),
        comments = render_comments(&note.comments),
    )
}

fn render_search_results(query: &str, hits: &[Note]) -> String {
    let body = if hits.is_empty() {
        r#"<p class="muted">No notes found.</p>"#.to_string()
    } else {
        hits.iter().map(render_hit).collect()
    };
    format!(
        r#"<section id="search-results">
<h2>Search Results for "{query}"</h2>
{body}</section>
"#,
        query = html_escape(query),
        body = body,
    )
}

/// Render the single page of the form UI.
pub fn render_home(notes: &[Note], ctx: &PageContext<'_>) -> String {
    let banner = ctx
        .error
        .map(|msg| format!(r#"<div class="error" role="alert">{}</div>"#, html_escape(msg)))
        .unwrap_or_default();

    let notes_html = if notes.is_empty() {
        r#"<p class="muted">No notes yet.</p>"#.to_string()
    } else {
        notes.iter().map(render_note).collect()
    };

    let query_value = ctx.search.map(|(q, _)| html_escape(q)).unwrap_or_default();
    let results = ctx
        .search
        .map(|(q, hits)| render_search_results(q, hits))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Notebook</title>
<style>
  body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }}
  .note, .hit {{ border: 1px solid #ddd; border-radius: 4px; padding: 0.75rem; margin-bottom: 1rem; }}
  .error {{ background: #fdd; border: 1px solid #c00; padding: 0.5rem; margin-bottom: 1rem; }}
  .muted {{ color: #777; }}
</style>
</head>
<body>
<h1>Notebook</h1>
{banner}
<section id="notes">
<h2>All Notes</h2>
{notes_html}</section>
<section id="add-note">
<h2>Add Note</h2>
<form action="/add_note" method="post">
  <input type="text" name="title" placeholder="Title" required>
  <textarea name="content" placeholder="Content" required></textarea>
  <button type="submit">Add Note</button>
</form>
</section>
<section id="search">
<h2>Search Notes</h2>
<form action="/search" method="get">
  <input type="text" name="query" value="{query_value}" placeholder="Search">
  <button type="submit">Search</button>
</form>
</section>
{results}</body>
</html>
"#,
    )
}
