//! NotebookClient against a mock API.

use notebook_dashboard::{ClientError, NotebookClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn note_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "content": "milk, eggs",
        "date_created": "2024-05-01T09:30:00Z",
        "comments": [
            {
                "id": 1,
                "note_id": id,
                "content": "buy oat milk",
                "date_created": "2024-05-01T10:00:00Z"
            }
        ]
    })
}

#[tokio::test]
async fn test_list_notes_decodes_comments() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([note_json(1, "Groceries")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = NotebookClient::new(mock_server.uri()).unwrap();
    let notes = client.list_notes().await.unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Groceries");
    assert_eq!(notes[0].comments[0].content, "buy oat milk");
}

#[tokio::test]
async fn test_create_note_sends_query_params() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/notes/"))
        .and(query_param("title", "Groceries"))
        .and(query_param("content", "milk & eggs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Note 'Groceries' added successfully!",
            "id": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = NotebookClient::new(mock_server.uri()).unwrap();
    let created = client.create_note("Groceries", "milk & eggs").await.unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.message, "Note 'Groceries' added successfully!");
}

#[tokio::test]
async fn test_api_error_carries_detail() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/notes/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"detail": "Note with this title already exists."})),
        )
        .mount(&mock_server)
        .await;

    let client = NotebookClient::new(mock_server.uri()).unwrap();
    let err = client.create_note("dup", "x").await.unwrap_err();

    match err {
        ClientError::Api { status, detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail, "Note with this title already exists.");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_api_error_with_plain_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/notes/3"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    let client = NotebookClient::new(mock_server.uri()).unwrap();
    let err = client.delete_note(3).await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 502, ref detail } if detail == "bad gateway"));
}

#[tokio::test]
async fn test_non_json_success_is_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = NotebookClient::new(mock_server.uri()).unwrap();
    let err = client.search("milk").await.unwrap_err();

    match err {
        ClientError::Decode { body } => assert_eq!(body, "<html>oops</html>"),
        other => panic!("expected Decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_and_comment_paths() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/"))
        .and(query_param("query", "milk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([note_json(1, "Groceries")])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/notes/1/comments"))
        .and(query_param("content", "more"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Comment added successfully!",
            "comment_id": 2
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = NotebookClient::new(format!("{}/", mock_server.uri())).unwrap();
    assert_eq!(client.search("milk").await.unwrap().len(), 1);
    assert_eq!(client.add_comment(1, "more").await.unwrap().comment_id, 2);
}

#[tokio::test]
async fn test_delete_note_path() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/notes/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Note 'x' and its comments deleted!"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = NotebookClient::new(mock_server.uri()).unwrap();
    let deleted = client.delete_note(3).await.unwrap();
    assert_eq!(deleted.message, "Note 'x' and its comments deleted!");
}

#[tokio::test]
async fn test_unreachable_server_is_connect_error() {
    // Grab a free port, then release it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = NotebookClient::new(url.clone()).unwrap();
    let err = client.list_notes().await.unwrap_err();

    assert!(err.is_connect(), "got {:?}", err);
    assert_eq!(
        err.to_string(),
        format!(
            "Unable to connect to the backend server. Please ensure that the API server is running at {}.",
            url
        )
    );
}
