//! Substring search across titles, contents, and comments.

mod helpers;

use helpers::TestDatabase;
use notebook_core::{CreateCommentRequest, CreateNoteRequest, NoteRepository};

#[tokio::test]
async fn test_groceries_scenario() {
    let test_db = TestDatabase::new().await;
    let repo = &test_db.db.notes;

    let note = repo
        .create_note(CreateNoteRequest::new("Groceries", "milk, eggs"))
        .await
        .unwrap();
    assert_eq!(note.id, 1);

    let comment = repo
        .add_comment(CreateCommentRequest::new(1, "buy oat milk"))
        .await
        .unwrap();
    assert_eq!(comment.id, 1);

    let hits = repo.search("milk").await.unwrap();
    assert_eq!(hits.len(), 1, "content and comment match must not duplicate");
    assert_eq!(hits[0].id, 1);
    assert_eq!(hits[0].comments.len(), 1);
}

#[tokio::test]
async fn test_matches_title_content_and_comment() {
    let test_db = TestDatabase::new().await;
    let repo = &test_db.db.notes;

    let by_title = repo
        .create_note(CreateNoteRequest::new("abc in title", "nothing"))
        .await
        .unwrap();
    let by_content = repo
        .create_note(CreateNoteRequest::new("second", "xxabcxx"))
        .await
        .unwrap();
    let by_comment = repo
        .create_note(CreateNoteRequest::new("third", "plain"))
        .await
        .unwrap();
    let unrelated = repo
        .create_note(CreateNoteRequest::new("fourth", "plain too"))
        .await
        .unwrap();

    repo.add_comment(CreateCommentRequest::new(by_comment.id, "see abc"))
        .await
        .unwrap();
    repo.add_comment(CreateCommentRequest::new(unrelated.id, "ab c"))
        .await
        .unwrap();

    let ids: Vec<i64> = repo
        .search("abc")
        .await
        .unwrap()
        .iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(ids, vec![by_title.id, by_content.id, by_comment.id]);
}

#[tokio::test]
async fn test_comment_match_returns_full_comment_set() {
    let test_db = TestDatabase::new().await;
    let repo = &test_db.db.notes;

    let note = repo.create_note(CreateNoteRequest::new("n", "c")).await.unwrap();
    for text in ["first", "needle here", "third"] {
        repo.add_comment(CreateCommentRequest::new(note.id, text))
            .await
            .unwrap();
    }

    let hits = repo.search("needle").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].comments.len(), 3);
}

#[tokio::test]
async fn test_note_matching_everywhere_appears_once() {
    let test_db = TestDatabase::new().await;
    let repo = &test_db.db.notes;

    let note = repo
        .create_note(CreateNoteRequest::new("tea", "green tea"))
        .await
        .unwrap();
    repo.add_comment(CreateCommentRequest::new(note.id, "more tea"))
        .await
        .unwrap();
    repo.add_comment(CreateCommentRequest::new(note.id, "tea again"))
        .await
        .unwrap();

    let hits = repo.search("tea").await.unwrap();
    assert_eq!(hits.len(), 1);
}

#[tokio::test]
async fn test_search_is_case_sensitive() {
    let test_db = TestDatabase::new().await;
    let repo = &test_db.db.notes;

    repo.create_note(CreateNoteRequest::new("Milk", "Dairy"))
        .await
        .unwrap();

    assert!(repo.search("milk").await.unwrap().is_empty());
    assert_eq!(repo.search("Milk").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_like_wildcards_are_literal() {
    let test_db = TestDatabase::new().await;
    let repo = &test_db.db.notes;

    repo.create_note(CreateNoteRequest::new("plain", "nothing special"))
        .await
        .unwrap();
    let percent = repo
        .create_note(CreateNoteRequest::new("discount", "50% off"))
        .await
        .unwrap();

    let hits = repo.search("%").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, percent.id);
    assert!(repo.search("_").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_no_match() {
    let test_db = TestDatabase::new().await;
    let repo = &test_db.db.notes;

    repo.create_note(CreateNoteRequest::new("a", "b")).await.unwrap();
    assert!(repo.search("zzz").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_query_matches_everything() {
    let test_db = TestDatabase::new().await;
    let repo = &test_db.db.notes;

    repo.create_note(CreateNoteRequest::new("a", "b")).await.unwrap();
    repo.create_note(CreateNoteRequest::new("c", "d")).await.unwrap();

    assert_eq!(repo.search("").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_unicode_substring() {
    let test_db = TestDatabase::new().await;
    let repo = &test_db.db.notes;

    repo.create_note(CreateNoteRequest::new("Café", "crème brûlée"))
        .await
        .unwrap();

    assert_eq!(repo.search("brûl").await.unwrap().len(), 1);
    assert_eq!(repo.search("é").await.unwrap().len(), 1);
}
