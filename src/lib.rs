//! Course Quiz MCP Server Library
//!
//! Turns course PDFs into quiz questions with an LLM completion endpoint:
//! - `extract_text`: Extract the plain text of a PDF
//! - `generate_quiz`: Generate quiz questions (and answers) from a PDF
//! - `quiz_page`: Drive the interactive upload/generate/reveal page

pub mod config;
pub mod error;
pub mod pdf;
pub mod quiz;
pub mod server;
pub mod shell;
pub mod source;

pub use config::{AppConfig, CompletionConfig, ServerConfig};
pub use error::{Error, Result};
pub use server::{
    run_server_with_config, ExtractTextParams, ExtractTextResult, GenerateQuizParams,
    GenerateQuizResult, PageAction, QuizPageParams, QuizPageResult, QuizServer, QuizSource,
};
