//! `HttpBackend` against a mock backend: wire format and error decoding.

use pretty_assertions::assert_eq;
use serde_json::json;
use sift_client::{ApiError, HttpBackend, IndexBackend, SessionStore, UploadFile};
use sift_core::ids::{FileId, IndexId};
use sift_core::search::SearchHit;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

async fn backend() -> (MockServer, HttpBackend) {
    let server = MockServer::start().await;
    let backend = HttpBackend::with_base_url(server.uri()).expect("mock uri is valid");
    (server, backend)
}

fn body(request: &Request) -> String {
    String::from_utf8_lossy(&request.body).into_owned()
}

fn field_count(request: &Request, name: &str) -> usize {
    body(request).matches(&format!("name=\"{name}\"")).count()
}

async fn requests_to(server: &MockServer, route: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path() == route)
        .collect()
}

#[tokio::test]
async fn upload_sends_file_part_and_parses_splits() {
    let (server, backend) = backend().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(body_string_contains("filename=\"notes.md\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "File uploaded and processed successfully",
            "file_id": "notes.md",
            "split_results": [
                {"original_text": "One. Two.", "chunks": ["One.", "Two."]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = backend
        .upload(UploadFile::from_bytes("notes.md", "One. Two."))
        .await
        .unwrap();

    assert_eq!(resp.file_id, FileId::new("notes.md"));
    assert_eq!(resp.split_results[0].chunks, vec!["One.", "Two."]);
    let sent = requests_to(&server, "/api/upload").await;
    assert!(body(&sent[0]).to_lowercase().contains("content-type: text/markdown"));
}

#[tokio::test]
async fn error_detail_is_decoded() {
    let (server, backend) = backend().await;
    Mock::given(method("POST"))
        .and(path("/api/create-index"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "File not found: a.txt"})),
        )
        .mount(&server)
        .await;

    let err = backend.create_index(&FileId::new("a.txt")).await.unwrap_err();

    match err {
        ApiError::Api { status, detail } => {
            assert_eq!(status, 404);
            assert_eq!(detail.as_deref(), Some("File not found: a.txt"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_without_json_body_has_no_detail() {
    let (server, backend) = backend().await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = backend
        .search(&IndexId::new("idx_1"), "q", 5)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Api { status: 502, detail: None }));
}

#[tokio::test]
async fn malformed_success_body_is_parse_error() {
    let (server, backend) = backend().await;
    Mock::given(method("POST"))
        .and(path("/api/create-index"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = backend.create_index(&FileId::new("a.txt")).await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn search_sends_index_query_and_top_k() {
    let (server, backend) = backend().await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Search completed successfully",
            "results": [
                {"text": "Rust is a systems language.", "similarity": 0.91},
                {"answer": "A systems language.", "is_direct_answer": true, "source_texts": []}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = backend
        .search(&IndexId::new("idx_7"), "what is rust", 5)
        .await
        .unwrap();

    assert_eq!(resp.results.len(), 2);
    assert!(matches!(resp.results[0], SearchHit::Passage(_)));
    assert!(matches!(resp.results[1], SearchHit::Answer { .. }));

    let sent = requests_to(&server, "/api/search").await;
    let sent = body(&sent[0]);
    assert!(sent.contains("idx_7"));
    assert!(sent.contains("what is rust"));
    assert!(sent.contains("name=\"top_k\"\r\n\r\n5\r\n"));
}

#[tokio::test]
async fn search_many_repeats_index_ids() {
    let (server, backend) = backend().await;
    Mock::given(method("POST"))
        .and(path("/api/semantic-search-multi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"text": "hit", "similarity": 0.5, "index_id": "b"}]
        })))
        .mount(&server)
        .await;

    let resp = backend
        .search_many(&[IndexId::new("a"), IndexId::new("b")], "query", 3)
        .await
        .unwrap();

    let SearchHit::Passage(passage) = &resp.results[0] else {
        panic!("expected passage hit");
    };
    assert_eq!(passage.index_id, Some(IndexId::new("b")));
    let sent = requests_to(&server, "/api/semantic-search-multi").await;
    assert_eq!(field_count(&sent[0], "index_ids"), 2);
}

#[tokio::test]
async fn lists_indices_and_reads_banner() {
    let (server, backend) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/list-indices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Found 1 indices",
            "indices": [{
                "index_id": "idx_1",
                "file_id": "notes.md",
                "created_at": "2025-03-01T10:15:30",
                "texts": ["a"],
                "embedding_type": "llm"
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Document Indexing API"})),
        )
        .mount(&server)
        .await;

    let list = backend.list_indices().await.unwrap();
    assert_eq!(list.indices[0].index_id, IndexId::new("idx_1"));
    assert_eq!(list.indices[0].text_count(), 1);

    let banner = backend.banner().await.unwrap();
    assert_eq!(banner.message, "Document Indexing API");
}

#[tokio::test]
async fn remote_config_round_trip() {
    let (server, backend) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "config": {"llm_type": "none", "embedding_model": {"type": "tfidf"}}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/config"))
        .and(body_string_contains("\"llm_type\":\"openai\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Configuration updated",
            "config": {"llm_type": "openai", "embedding_model": {"type": "tfidf"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let current = backend.remote_config().await.unwrap();
    assert_eq!(current.config["llm_type"], "none");

    let updated = backend
        .update_remote_config(&json!({"llm_type": "openai"}))
        .await
        .unwrap();
    assert_eq!(updated.config["llm_type"], "openai");
}

#[tokio::test]
async fn store_submits_1200_chunks_in_three_requests() {
    let (server, backend) = backend().await;
    let chunks: Vec<String> = (0..1200).map(|i| format!("sentence {i}.")).collect();
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "file_id": "big.txt",
            "split_results": [{"original_text": chunks.concat(), "chunks": chunks}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/select-chunks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Chunks selected", "file_id": "big.txt"})),
        )
        .expect(3)
        .mount(&server)
        .await;

    let store = SessionStore::new(backend);
    let cancel = CancellationToken::new();
    store
        .upload_file(UploadFile::from_bytes("big.txt", "..."), &cancel)
        .await
        .unwrap();
    assert_eq!(store.select_all_chunks(), 1200);

    let summary = store.submit_selected_chunks(&cancel).await.unwrap().unwrap();

    assert_eq!(summary.total_processed, 1200);
    assert_eq!(summary.batch_count, 3);
    assert_eq!(summary.last_response["file_id"], "big.txt");
    let sizes: Vec<usize> = requests_to(&server, "/api/select-chunks")
        .await
        .iter()
        .map(|request| field_count(request, "selected_chunks"))
        .collect();
    assert_eq!(sizes, vec![500, 500, 200]);
}
