//! MCP Server implementation using rmcp

use crate::config::{AppConfig, ServerConfig};
use crate::pdf::{PdfiumExtractor, TextExtractor, UploadedDocument};
use crate::quiz::{
    parse_completion, Difficulty, ParsedQuiz, QuestionType, QuizClient, QuizGenerator,
    QuizParameters, Variant,
};
use crate::shell::{Event, QuizPage, View};
use crate::source::{resolve_base64, resolve_path, resolve_url, TextCache};
use anyhow::Result;
use lru::LruCache;
use parking_lot::Mutex;
use rmcp::{
    handler::server::tool::ToolRouter, handler::server::wrapper::Parameters, model::*,
    schemars::JsonSchema, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Where an uploaded document comes from
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum QuizSource {
    /// File path (absolute or relative)
    Path {
        /// Path to the file
        path: String,
    },
    /// Base64 encoded file data
    Base64 {
        /// Base64 encoded content
        base64: String,
        /// Declared media type (default: application/pdf)
        #[serde(skip_serializing_if = "Option::is_none")]
        media_type: Option<String>,
    },
    /// URL to download the file from
    Url {
        /// URL of the file
        url: String,
    },
}

impl<'de> serde::Deserialize<'de> for QuizSource {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;

        let Some(obj) = value.as_object() else {
            return Err(serde::de::Error::custom(format!(
                "Invalid source: expected an object with one of \"path\", \"base64\", or \"url\", but got {}",
                match &value {
                    serde_json::Value::Array(_) => "an array",
                    serde_json::Value::String(_) => "a string",
                    serde_json::Value::Number(_) => "a number",
                    serde_json::Value::Bool(_) => "a boolean",
                    serde_json::Value::Null => "null",
                    _ => "unknown type",
                }
            )));
        };

        let string_field = |key: &str| -> std::result::Result<Option<String>, D::Error> {
            match obj.get(key) {
                None => Ok(None),
                Some(v) => v
                    .as_str()
                    .map(|s| Some(s.to_string()))
                    .ok_or_else(|| serde::de::Error::custom(format!("\"{}\" must be a string", key))),
            }
        };

        if let Some(path) = string_field("path")? {
            return Ok(QuizSource::Path { path });
        }
        if let Some(base64) = string_field("base64")? {
            return Ok(QuizSource::Base64 {
                base64,
                media_type: string_field("media_type")?,
            });
        }
        if let Some(url) = string_field("url")? {
            return Ok(QuizSource::Url { url });
        }

        let keys: Vec<&String> = obj.keys().collect();
        Err(serde::de::Error::custom(format!(
            "Invalid source: expected an object with one of \"path\", \"base64\", or \"url\", but got keys: {:?}",
            keys
        )))
    }
}

// ============================================================================
// Request/Response types for extract_text
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExtractTextParams {
    /// Document to extract text from
    pub source: QuizSource,
}

#[derive(Debug, Serialize)]
pub struct ExtractTextResult {
    pub source: String,
    pub text: String,
    pub char_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// Request/Response types for generate_quiz
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GenerateQuizParams {
    /// Course document to build the quiz from
    pub source: QuizSource,
    /// Easy, Medium or Hard (default: Easy)
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Direct, Case Scenario, MCQ or Essay (default: Direct)
    #[serde(default)]
    pub question_type: QuestionType,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuizResult {
    pub source: String,
    pub variant: Variant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<ParsedQuiz>,
    /// Completion text exactly as returned by the endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// Request/Response types for quiz_page
// ============================================================================

/// Interaction with the quiz page
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageAction {
    /// Upload a document (replaces the current one)
    Upload { source: QuizSource },
    /// Remove the current document
    ClearUpload,
    /// Change the difficulty selector
    SelectDifficulty { difficulty: Difficulty },
    /// Change the question type selector
    SelectQuestionType { question_type: QuestionType },
    /// Press "Generate Quiz"
    GenerateQuiz,
    /// Press "Show Answers"
    ShowAnswers,
    /// Re-render without interacting
    Refresh,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct QuizPageParams {
    /// Session returned by an earlier call; omit to open a new page
    #[serde(default)]
    pub session_id: Option<String>,
    /// Interaction to apply before re-rendering
    pub action: PageAction,
}

#[derive(Debug, Serialize)]
pub struct QuizPageResult {
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,
    /// Plain-text rendering of the view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

type SharedPage = Arc<tokio::sync::Mutex<QuizPage>>;

/// Quiz MCP Server
#[derive(Clone)]
pub struct QuizServer {
    texts: Arc<TextCache>,
    sessions: Arc<Mutex<LruCache<String, SharedPage>>>,
    extractor: Arc<dyn TextExtractor>,
    generator: Arc<dyn QuizGenerator>,
    variant: Variant,
    tool_router: ToolRouter<Self>,
    config: Arc<ServerConfig>,
}

// ============================================================================
// Tool implementations
// ============================================================================

#[tool_router]
impl QuizServer {
    /// Create a server talking to the configured completion endpoint
    pub fn new(config: AppConfig) -> Self {
        let extractor = Arc::new(PdfiumExtractor::new(config.completion.media_type_policy()));
        let variant = config.completion.variant;
        let client = Arc::new(QuizClient::new(config.completion));
        Self::with_components(config.server, variant, extractor, client)
    }

    /// Create a server from explicit extraction and generation components
    pub fn with_components(
        config: ServerConfig,
        variant: Variant,
        extractor: Arc<dyn TextExtractor>,
        generator: Arc<dyn QuizGenerator>,
    ) -> Self {
        let texts = TextCache::new(config.cache_max_entries, config.cache_max_bytes);
        let sessions = NonZeroUsize::new(config.max_sessions).unwrap_or(NonZeroUsize::MIN);
        Self {
            texts: Arc::new(texts),
            sessions: Arc::new(Mutex::new(LruCache::new(sessions))),
            extractor,
            generator,
            variant,
            tool_router: Self::tool_router(),
            config: Arc::new(config),
        }
    }

    /// Extract plain text from a PDF
    #[tool(
        description = "Extract the plain text of a PDF, all pages concatenated in order.

Source format: one of {\"path\": \"/absolute/path.pdf\"}, {\"url\": \"https://...\"}, or {\"base64\": \"...\", \"media_type\": \"application/pdf\"}"
    )]
    async fn extract_text(&self, Parameters(params): Parameters<ExtractTextParams>) -> String {
        let result = self
            .process_extract_text(&params)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "extract_text failed");
                ExtractTextResult {
                    source: Self::source_name(&params.source),
                    text: String::new(),
                    char_count: 0,
                    error: Some(e.client_message()),
                }
            });

        serde_json::to_string_pretty(&result).unwrap_or_default()
    }

    /// Generate quiz questions from a PDF in one call
    #[tool(
        description = "Generate quiz questions (and, depending on the server's variant, answers) from a course PDF.

difficulty: Easy | Medium | Hard. question_type: Direct | Case Scenario | MCQ | Essay."
    )]
    async fn generate_quiz(&self, Parameters(params): Parameters<GenerateQuizParams>) -> String {
        let result = self
            .process_generate_quiz(&params)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "generate_quiz failed");
                GenerateQuizResult {
                    source: Self::source_name(&params.source),
                    variant: self.variant,
                    quiz: None,
                    raw: None,
                    error: Some(e.client_message()),
                }
            });

        serde_json::to_string_pretty(&result).unwrap_or_default()
    }

    /// Drive the interactive quiz page
    #[tool(
        description = "Interact with the quiz page: upload a PDF, pick difficulty and question type, press Generate Quiz or Show Answers. Every call re-renders the whole page and returns it.

Omit session_id to open a new page; pass the returned session_id on later calls.
action examples: {\"type\": \"upload\", \"source\": {\"path\": \"/course.pdf\"}}, {\"type\": \"select_difficulty\", \"difficulty\": \"Hard\"}, {\"type\": \"generate_quiz\"}, {\"type\": \"show_answers\"}"
    )]
    async fn quiz_page(&self, Parameters(params): Parameters<QuizPageParams>) -> String {
        let session_id = params.session_id.clone();
        let result = self.process_quiz_page(params).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "quiz_page failed");
            QuizPageResult {
                session_id,
                view: None,
                rendered: None,
                error: Some(e.client_message()),
            }
        });

        serde_json::to_string_pretty(&result).unwrap_or_default()
    }
}

impl QuizServer {
    fn source_name(source: &QuizSource) -> String {
        match source {
            QuizSource::Path { path } => path.clone(),
            QuizSource::Base64 { .. } => "<base64>".to_string(),
            QuizSource::Url { url } => url.clone(),
        }
    }

    async fn resolve_source(&self, source: &QuizSource) -> crate::error::Result<UploadedDocument> {
        match source {
            QuizSource::Path { path } => {
                let path = self.validate_path_access(path)?;
                resolve_path(path)
            }
            QuizSource::Base64 { base64, media_type } => {
                resolve_base64(base64, media_type.as_deref())
            }
            QuizSource::Url { url } => {
                resolve_url(
                    url,
                    self.config.allow_private_urls,
                    self.config.max_download_bytes,
                )
                .await
            }
        }
    }

    /// Validate that a path is within allowed resource directories.
    /// If no resource_dirs are configured, all paths are allowed.
    fn validate_path_access(&self, path: &str) -> crate::error::Result<std::path::PathBuf> {
        if self.config.resource_dirs.is_empty() {
            return Ok(std::path::PathBuf::from(path));
        }

        let canonical = std::fs::canonicalize(path).map_err(|_| {
            crate::error::Error::PathAccessDenied {
                path: path.to_string(),
            }
        })?;

        for dir in &self.config.resource_dirs {
            if let Ok(canonical_dir) = std::fs::canonicalize(dir) {
                if canonical.starts_with(&canonical_dir) {
                    return Ok(canonical);
                }
            }
        }

        Err(crate::error::Error::PathAccessDenied {
            path: path.to_string(),
        })
    }

    async fn process_extract_text(
        &self,
        params: &ExtractTextParams,
    ) -> crate::error::Result<ExtractTextResult> {
        let document = self.resolve_source(&params.source).await?;
        let text = self.texts.get_or_extract(&document, &self.extractor).await?;

        Ok(ExtractTextResult {
            source: document.name,
            char_count: text.chars().count(),
            text,
            error: None,
        })
    }

    async fn process_generate_quiz(
        &self,
        params: &GenerateQuizParams,
    ) -> crate::error::Result<GenerateQuizResult> {
        let document = self.resolve_source(&params.source).await?;
        let text = self.texts.get_or_extract(&document, &self.extractor).await?;
        let quiz_params = QuizParameters::new(params.difficulty, params.question_type);

        let completion = self.generator.generate(&text, quiz_params).await?;
        let quiz = parse_completion(self.variant, &completion);

        Ok(GenerateQuizResult {
            source: document.name,
            variant: self.variant,
            quiz: Some(quiz),
            raw: Some(completion),
            error: None,
        })
    }

    async fn process_quiz_page(
        &self,
        params: QuizPageParams,
    ) -> crate::error::Result<QuizPageResult> {
        // Resolve before touching the session so a bad source leaves it unchanged
        let event = match params.action {
            PageAction::Upload { source } => Event::Upload(self.resolve_source(&source).await?),
            PageAction::ClearUpload => Event::ClearUpload,
            PageAction::SelectDifficulty { difficulty } => Event::SelectDifficulty(difficulty),
            PageAction::SelectQuestionType { question_type } => {
                Event::SelectQuestionType(question_type)
            }
            PageAction::GenerateQuiz => Event::GenerateQuiz,
            PageAction::ShowAnswers => Event::ShowAnswers,
            PageAction::Refresh => Event::Refresh,
        };

        let (session_id, page) = self.session(params.session_id)?;
        let view = page.lock().await.dispatch(event).await;

        Ok(QuizPageResult {
            session_id: Some(session_id),
            rendered: Some(view.to_string()),
            view: Some(view),
            error: None,
        })
    }

    /// Look up an existing page session, or open a new one
    fn session(&self, session_id: Option<String>) -> crate::error::Result<(String, SharedPage)> {
        let mut sessions = self.sessions.lock();

        if let Some(id) = session_id {
            return sessions
                .get(&id)
                .cloned()
                .map(|page| (id.clone(), page))
                .ok_or(crate::error::Error::SessionNotFound { session_id: id });
        }

        let id = loop {
            let key = uuid::Uuid::new_v4().to_string();
            if !sessions.contains(&key) {
                break key;
            }
        };
        let page = Arc::new(tokio::sync::Mutex::new(QuizPage::new(
            self.variant,
            Arc::clone(&self.extractor),
            Arc::clone(&self.generator),
            Arc::clone(&self.texts),
        )));
        if let Some((evicted, _)) = sessions.push(id.clone(), Arc::clone(&page)) {
            tracing::debug!(session_id = %evicted, "evicted page session");
        }
        tracing::info!(session_id = %id, "opened page session");

        Ok((id, page))
    }
}

#[tool_handler]
impl ServerHandler for QuizServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Quiz server: extracts text from course PDFs and generates quiz questions from it. \
                 Use generate_quiz for one-shot generation or quiz_page for the interactive page."
                    .into(),
            ),
        }
    }
}

/// Run the MCP server with full configuration
pub async fn run_server_with_config(config: AppConfig) -> Result<()> {
    tracing::info!(
        variant = %config.completion.variant,
        base_url = %config.completion.base_url,
        "Quiz server ready, waiting for connections..."
    );

    let server = QuizServer::new(config);
    let service = server.serve(rmcp::transport::io::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::pdf::{MediaTypePolicy, PDF_MEDIA_TYPE};
    use crate::shell::{Widget, SHOW_ANSWERS_BUTTON};
    use base64::Engine;
    use futures_util::future::BoxFuture;

    /// Upload bytes are the document text
    struct PlainTextExtractor;

    impl TextExtractor for PlainTextExtractor {
        fn extract(&self, document: &UploadedDocument) -> crate::error::Result<String> {
            if !document.is_declared_pdf() {
                return Err(Error::WrongFileType {
                    media_type: document.media_type.clone(),
                });
            }
            Ok(String::from_utf8_lossy(&document.data).into_owned())
        }
    }

    struct FixedCompletion(&'static str);

    impl QuizGenerator for FixedCompletion {
        fn generate<'a>(
            &'a self,
            text: &'a str,
            params: QuizParameters,
        ) -> BoxFuture<'a, crate::error::Result<String>> {
            let reply = format!("{} [{} {} on {}]", self.0, params.difficulty, params.question_type, text);
            Box::pin(async move { Ok(reply) })
        }
    }

    fn test_server(variant: Variant) -> QuizServer {
        QuizServer::with_components(
            ServerConfig::default(),
            variant,
            Arc::new(PlainTextExtractor),
            Arc::new(FixedCompletion("Q1\n\nA1\n\nQ2")),
        )
    }

    fn base64_source(text: &str, media_type: Option<&str>) -> QuizSource {
        QuizSource::Base64 {
            base64: base64::engine::general_purpose::STANDARD.encode(text),
            media_type: media_type.map(str::to_string),
        }
    }

    #[test]
    fn test_source_name() {
        assert_eq!(
            QuizServer::source_name(&QuizSource::Path {
                path: "/course.pdf".to_string()
            }),
            "/course.pdf"
        );
        assert_eq!(QuizServer::source_name(&base64_source("x", None)), "<base64>");
        assert_eq!(
            QuizServer::source_name(&QuizSource::Url {
                url: "https://example.com/c.pdf".to_string()
            }),
            "https://example.com/c.pdf"
        );
    }

    #[test]
    fn test_source_deserialization() {
        let source: QuizSource = serde_json::from_str(r#"{"path": "/c.pdf"}"#).unwrap();
        assert!(matches!(source, QuizSource::Path { .. }));

        let source: QuizSource =
            serde_json::from_str(r#"{"base64": "JVBERi0xLjQ=", "media_type": "text/plain"}"#)
                .unwrap();
        match source {
            QuizSource::Base64 { media_type, .. } => {
                assert_eq!(media_type.as_deref(), Some("text/plain"))
            }
            other => panic!("unexpected source {:?}", other),
        }

        let source: QuizSource = serde_json::from_str(r#"{"url": "https://x.org/c.pdf"}"#).unwrap();
        assert!(matches!(source, QuizSource::Url { .. }));

        assert!(serde_json::from_str::<QuizSource>(r#"{"cache_key": "abc"}"#).is_err());
        assert!(serde_json::from_str::<QuizSource>(r#"{"path": 42}"#).is_err());
        assert!(serde_json::from_str::<QuizSource>(r#""/c.pdf""#).is_err());
    }

    #[test]
    fn test_page_action_deserialization() {
        let params: QuizPageParams = serde_json::from_str(
            r#"{"action": {"type": "select_question_type", "question_type": "Case Scenario"}}"#,
        )
        .unwrap();
        assert!(params.session_id.is_none());
        assert!(matches!(
            params.action,
            PageAction::SelectQuestionType {
                question_type: QuestionType::CaseScenario
            }
        ));

        let params: QuizPageParams = serde_json::from_str(
            r#"{"session_id": "s1", "action": {"type": "upload", "source": {"path": "/c.pdf"}}}"#,
        )
        .unwrap();
        assert_eq!(params.session_id.as_deref(), Some("s1"));
        assert!(matches!(params.action, PageAction::Upload { .. }));
    }

    #[test]
    fn test_generate_params_defaults() {
        let params: GenerateQuizParams =
            serde_json::from_str(r#"{"source": {"path": "/c.pdf"}}"#).unwrap();
        assert_eq!(params.difficulty, Difficulty::Easy);
        assert_eq!(params.question_type, QuestionType::Direct);
    }

    #[tokio::test]
    async fn test_process_extract_text() {
        let server = test_server(Variant::Chat);
        let params = ExtractTextParams {
            source: base64_source("Pattern matching", None),
        };

        let result = server.process_extract_text(&params).await.unwrap();
        assert_eq!(result.text, "Pattern matching");
        assert_eq!(result.char_count, 16);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_process_generate_quiz_alternating() {
        let server = test_server(Variant::Completion);
        let params = GenerateQuizParams {
            source: base64_source("Closures", Some(PDF_MEDIA_TYPE)),
            difficulty: Difficulty::Medium,
            question_type: QuestionType::Essay,
        };

        let result = server.process_generate_quiz(&params).await.unwrap();
        match result.quiz {
            Some(ParsedQuiz::Alternating { questions, answers }) => {
                assert_eq!(questions[0], "Q1");
                assert_eq!(questions[1], "Q2 [Medium Essay on Closures]");
                assert_eq!(answers, vec!["A1".to_string()]);
            }
            other => panic!("unexpected quiz {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_quiz_tool_reports_wrong_type() {
        let server = test_server(Variant::Chat);
        let params = GenerateQuizParams {
            source: base64_source("notes", Some("text/plain")),
            difficulty: Difficulty::Easy,
            question_type: QuestionType::Direct,
        };

        let json = server.generate_quiz(Parameters(params)).await;
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "Please upload a PDF file.");
        assert!(value.get("quiz").is_none());
    }

    #[tokio::test]
    async fn test_quiz_page_session_flow() {
        let server = test_server(Variant::Chat);

        let opened = server
            .process_quiz_page(QuizPageParams {
                session_id: None,
                action: PageAction::Upload {
                    source: base64_source("Iterators", None),
                },
            })
            .await
            .unwrap();
        let session_id = opened.session_id.clone().unwrap();

        let generated = server
            .process_quiz_page(QuizPageParams {
                session_id: Some(session_id.clone()),
                action: PageAction::GenerateQuiz,
            })
            .await
            .unwrap();
        let view = generated.view.unwrap();
        assert!(view.has_button(SHOW_ANSWERS_BUTTON));
        assert!(view
            .text_area("Quiz Questions")
            .unwrap()
            .contains("[Easy Direct on Iterators]"));

        let revealed = server
            .process_quiz_page(QuizPageParams {
                session_id: Some(session_id),
                action: PageAction::ShowAnswers,
            })
            .await
            .unwrap();
        assert!(revealed.rendered.unwrap().contains("Quiz Answers:"));
    }

    #[tokio::test]
    async fn test_quiz_page_unknown_session() {
        let server = test_server(Variant::Chat);
        let result = server
            .process_quiz_page(QuizPageParams {
                session_id: Some("missing".to_string()),
                action: PageAction::Refresh,
            })
            .await;
        assert!(matches!(result, Err(Error::SessionNotFound { .. })));
    }

    #[tokio::test]
    async fn test_new_page_prompts_for_upload() {
        let server = test_server(Variant::Chat);
        let result = server
            .process_quiz_page(QuizPageParams {
                session_id: None,
                action: PageAction::Refresh,
            })
            .await
            .unwrap();
        let view = result.view.unwrap();
        assert!(view
            .main
            .contains(&Widget::markdown(crate::shell::UPLOAD_PROMPT)));
    }

    #[tokio::test]
    async fn test_path_sandbox() {
        let allowed = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        let inside_file = allowed.path().join("course.pdf");
        let outside_file = outside.path().join("secret.pdf");
        std::fs::write(&inside_file, "Modules").unwrap();
        std::fs::write(&outside_file, "Secrets").unwrap();

        let server = QuizServer::with_components(
            ServerConfig {
                resource_dirs: vec![allowed.path().to_string_lossy().to_string()],
                ..ServerConfig::default()
            },
            Variant::Chat,
            Arc::new(PlainTextExtractor),
            Arc::new(FixedCompletion("Q1")),
        );

        let ok = server
            .process_extract_text(&ExtractTextParams {
                source: QuizSource::Path {
                    path: inside_file.to_string_lossy().to_string(),
                },
            })
            .await
            .unwrap();
        assert_eq!(ok.text, "Modules");

        let denied = server
            .process_extract_text(&ExtractTextParams {
                source: QuizSource::Path {
                    path: outside_file.to_string_lossy().to_string(),
                },
            })
            .await;
        assert!(matches!(denied, Err(Error::PathAccessDenied { .. })));
    }

    #[test]
    fn test_pdfium_extractor_policy_follows_variant() {
        let mut config = AppConfig::from_lookup(|name| {
            (name == "QUIZ_API_KEY").then(|| "secret".to_string())
        })
        .unwrap();
        assert_eq!(
            config.completion.media_type_policy(),
            MediaTypePolicy::Strict
        );
        config.completion.variant = Variant::Completion;
        assert_eq!(
            config.completion.media_type_policy(),
            MediaTypePolicy::Trusting
        );
    }
}
