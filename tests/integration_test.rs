//! Integration tests for the quiz server
//!
//! The completion endpoint is a one-shot HTTP stub on a local port.

use base64::Engine;
use pdf_quiz_server::config::{CompletionConfig, ServerConfig};
use pdf_quiz_server::pdf::{
    extract_text, MediaTypePolicy, PageText, PdfReader, TextExtractor, UploadedDocument,
    PDF_MEDIA_TYPE,
};
use pdf_quiz_server::quiz::{
    parse_completion, Difficulty, ParsedQuiz, QuestionType, QuizClient, QuizGenerator,
    QuizParameters, Variant, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, NO_QUIZ_GENERATED,
    PLACEHOLDER_ANSWERS,
};
use pdf_quiz_server::shell::{Event, QuizPage, SHOW_ANSWERS_BUTTON};
use pdf_quiz_server::source::{resolve_base64, resolve_path, TextCache};
use pdf_quiz_server::Error;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// What the stub saw
#[derive(Debug)]
struct CapturedRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: Value,
}

impl CapturedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Serve exactly one request with the given status and body
async fn stub_endpoint(status: u16, body: &str) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let body = body.to_string();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let mut lines = head.split("\r\n");
        let request_line = lines.next().unwrap_or_default().to_string();
        let headers: Vec<(String, String)> = lines
            .filter_map(|l| l.split_once(':'))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();
        let content_length = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.parse::<usize>().ok())
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let request_body =
            serde_json::from_slice(&buf[header_end..header_end + content_length]).unwrap();

        let reason = if status == 200 { "OK" } else { "Error" };
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        let _ = tx.send(CapturedRequest {
            request_line,
            headers,
            body: request_body,
        });
    });

    (format!("http://{}", addr), rx)
}

fn client(base_url: String, variant: Variant) -> QuizClient {
    let mut config = CompletionConfig::new("test-key");
    config.base_url = base_url;
    config.variant = variant;
    QuizClient::new(config)
}

#[tokio::test]
async fn test_chat_request_shape_and_reply() {
    let reply = json!({"choices": [{"message": {"role": "assistant", "content": "Q1\n\nA1"}}]});
    let (base_url, captured) = stub_endpoint(200, &reply.to_string()).await;
    let client = client(base_url, Variant::Chat);

    let params = QuizParameters::new(Difficulty::Hard, QuestionType::CaseScenario);
    let text = client.generate_quiz("Ownership moves values", &params).await.unwrap();
    assert_eq!(text, "Q1\n\nA1");

    let request = captured.await.unwrap();
    assert_eq!(request.request_line, "POST /chat/completions HTTP/1.1");
    assert_eq!(request.header("authorization"), Some("Bearer test-key"));
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.body["model"], DEFAULT_MODEL);
    assert_eq!(request.body["max_tokens"], DEFAULT_MAX_TOKENS);
    assert_eq!(request.body["messages"][0]["role"], "system");
    assert_eq!(request.body["messages"][1]["role"], "user");

    let prompt = request.body["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.contains("The difficulty level is Hard."));
    assert!(prompt.contains("The type of quiz question is Case Scenario."));
    assert!(prompt.contains("Ownership moves values"));
}

#[tokio::test]
async fn test_chat_reply_without_content() {
    let (base_url, _captured) = stub_endpoint(200, r#"{"choices": []}"#).await;
    let client = client(base_url, Variant::Chat);

    let text = client
        .generate_quiz("text", &QuizParameters::default())
        .await
        .unwrap();
    assert_eq!(text, NO_QUIZ_GENERATED);
}

#[tokio::test]
async fn test_completion_request_shape_and_parse() {
    let (base_url, captured) =
        stub_endpoint(200, r#"{"text": "Q1\n\nA1\n\nQ2\n\nA2"}"#).await;
    let client = client(base_url, Variant::Completion);

    let text = client
        .generate_quiz("Traits", &QuizParameters::default())
        .await
        .unwrap();

    let request = captured.await.unwrap();
    assert_eq!(request.request_line, "POST /generate HTTP/1.1");
    assert_eq!(request.body["max_tokens"], 1500);
    assert!(request.body["prompt"].as_str().unwrap().contains("Traits"));
    assert!(request.body.get("messages").is_none());

    match parse_completion(Variant::Completion, &text) {
        ParsedQuiz::Alternating { questions, answers } => {
            assert_eq!(questions, vec!["Q1", "Q2"]);
            assert_eq!(answers, vec!["A1", "A2"]);
        }
        other => panic!("unexpected parse {:?}", other),
    }
}

#[tokio::test]
async fn test_completion_reply_missing_text() {
    let (base_url, _captured) = stub_endpoint(200, r#"{"output": "Q1"}"#).await;
    let client = client(base_url, Variant::Completion);

    let result = client.generate_quiz("text", &QuizParameters::default()).await;
    assert!(matches!(result, Err(Error::MalformedCompletion { .. })));
}

#[tokio::test]
async fn test_remote_failure_keeps_status_and_body() {
    let (base_url, _captured) = stub_endpoint(500, "server error").await;
    let client = client(base_url, Variant::Chat);

    let err = client
        .generate_quiz("text", &QuizParameters::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RemoteRequest { status: 500, .. }));
    assert_eq!(err.to_string(), "Error: 500 - server error");
    assert_eq!(err.client_message(), "Error: 500 - server error");
}

/// Upload bytes stand in for the document text
struct PlainText;

impl TextExtractor for PlainText {
    fn extract(&self, document: &UploadedDocument) -> pdf_quiz_server::Result<String> {
        Ok(String::from_utf8_lossy(&document.data).into_owned())
    }
}

#[tokio::test]
async fn test_page_against_stub_endpoint() {
    let reply = json!({"choices": [{"message": {"content": "What is a borrow?"}}]});
    let (base_url, captured) = stub_endpoint(200, &reply.to_string()).await;
    let generator: Arc<dyn QuizGenerator> = Arc::new(client(base_url, Variant::Chat));

    let mut page = QuizPage::new(
        Variant::Chat,
        Arc::new(PlainText),
        generator,
        Arc::new(TextCache::new(4, 1024 * 1024)),
    );

    let encoded = base64::engine::general_purpose::STANDARD.encode("Borrowing");
    let document = resolve_base64(&encoded, None).unwrap();
    assert_eq!(document.media_type, PDF_MEDIA_TYPE);

    page.dispatch(Event::Upload(document)).await;
    page.dispatch(Event::SelectQuestionType(QuestionType::Mcq)).await;
    let view = page.dispatch(Event::GenerateQuiz).await;
    assert_eq!(view.text_area("Quiz Questions"), Some("What is a borrow?"));
    assert!(view.has_button(SHOW_ANSWERS_BUTTON));

    let request = captured.await.unwrap();
    let prompt = request.body["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.contains("The type of quiz question is MCQ."));

    // Revealing answers reuses the stored quiz; the stub would refuse a second request
    let view = page.dispatch(Event::ShowAnswers).await;
    assert_eq!(view.text_area("Quiz Answers"), Some(PLACEHOLDER_ANSWERS));
    assert_eq!(view.text_area("Quiz Questions"), Some("What is a borrow?"));
}

#[test]
fn test_resolve_path_infers_media_type() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("lecture.PDF");
    let notes = dir.path().join("notes.txt");
    std::fs::write(&pdf, b"%PDF-1.4").unwrap();
    std::fs::write(&notes, b"notes").unwrap();

    assert_eq!(resolve_path(&pdf).unwrap().media_type, PDF_MEDIA_TYPE);
    assert_ne!(resolve_path(&notes).unwrap().media_type, PDF_MEDIA_TYPE);
    assert!(matches!(
        resolve_path(dir.path().join("missing.pdf")),
        Err(Error::PdfNotFound { .. })
    ));
}

#[test]
fn test_server_config_defaults() {
    let config = ServerConfig::default();
    assert!(config.resource_dirs.is_empty());
    assert!(!config.allow_private_urls);
    assert_eq!(config.max_download_bytes, 100 * 1024 * 1024);
}

fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

/// Whether the PDFium library could not be bound on this machine
fn pdfium_unavailable(result: &pdf_quiz_server::Result<impl Sized>) -> bool {
    match result {
        Err(Error::Pdfium { reason }) if reason.starts_with("Failed to initialize PDFium") => {
            eprintln!("skipping: {}", reason);
            true
        }
        _ => false,
    }
}

#[test]
fn test_extract_two_page_pdf_in_order() {
    let document = resolve_path(fixture_path("two_pages.pdf")).unwrap();
    assert_eq!(document.media_type, PDF_MEDIA_TYPE);

    let reader = PdfReader::open_bytes(&document.data);
    if pdfium_unavailable(&reader) {
        return;
    }
    let reader = reader.expect("Failed to open two_pages.pdf");
    assert_eq!(reader.page_count(), 2);
    assert_eq!(reader.page_text(0).unwrap().trim(), "Ownership");
    assert_eq!(reader.page_text(1).unwrap().trim(), "Borrowing");

    let text = extract_text(&document, MediaTypePolicy::Strict).unwrap();
    assert_eq!(
        text,
        format!("{}{}", reader.page_text(0).unwrap(), reader.page_text(1).unwrap())
    );
    let first = text.find("Ownership").unwrap();
    let second = text.find("Borrowing").unwrap();
    assert!(first < second);
}

#[test]
fn test_malformed_pdf_body_fails_extraction() {
    let document = UploadedDocument::new(
        b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog".to_vec(),
        PDF_MEDIA_TYPE,
        "broken.pdf",
    );
    for policy in [MediaTypePolicy::Strict, MediaTypePolicy::Trusting] {
        let err = extract_text(&document, policy).unwrap_err();
        assert!(err.is_extraction_failure(), "unexpected error: {}", err);
    }
}

#[test]
fn test_strict_policy_rejects_real_pdf_declared_as_text() {
    let data = std::fs::read(fixture_path("two_pages.pdf")).unwrap();
    let document = UploadedDocument::new(data, "text/plain", "two_pages.txt");
    assert!(matches!(
        extract_text(&document, MediaTypePolicy::Strict),
        Err(Error::WrongFileType { .. })
    ));
}
