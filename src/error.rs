//! Error types for the quiz server

use thiserror::Error;

/// Result type alias for the quiz server
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the quiz server
#[derive(Error, Debug)]
pub enum Error {
    /// Uploaded file was not declared as a PDF
    #[error("Wrong file type: {media_type}")]
    WrongFileType { media_type: String },

    /// PDF file not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDF is password protected
    #[error("PDF is password protected")]
    PasswordRequired,

    /// PDFium error
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// Completion endpoint answered with a non-200 status
    #[error("Error: {status} - {body}")]
    RemoteRequest { status: u16, body: String },

    /// Completion response is missing the expected fields
    #[error("Malformed completion response: {reason}")]
    MalformedCompletion { reason: String },

    /// Source resolution error
    #[error("Failed to resolve source: {reason}")]
    SourceResolution { reason: String },

    /// Page session does not exist (or was evicted)
    #[error("Session not found: {session_id}")]
    SessionNotFound { session_id: String },

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Base64 decode error
    #[error("Invalid base64 data: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Path access denied (outside allowed resource directories)
    #[error("Path access denied: {path}")]
    PathAccessDenied { path: String },

    /// SSRF blocked (URL resolves to private/reserved IP)
    #[error("SSRF blocked: {url}")]
    SsrfBlocked { url: String },

    /// Download too large
    #[error("Download too large: {size} bytes (max: {max_size} bytes)")]
    DownloadTooLarge { size: u64, max_size: u64 },
}

impl Error {
    /// Return a sanitized error message safe to send to clients.
    /// Internal details (paths, library errors, file sizes) are omitted,
    /// except for remote completion failures, which are shown verbatim.
    pub fn client_message(&self) -> String {
        match self {
            Error::WrongFileType { .. } => "Please upload a PDF file.".to_string(),
            Error::PdfNotFound { .. } => "PDF not found".to_string(),
            Error::InvalidPdf { .. } => "Invalid PDF file".to_string(),
            Error::PasswordRequired => "PDF is password protected".to_string(),
            Error::Pdfium { .. } => "PDF processing error".to_string(),
            Error::RemoteRequest { .. } => self.to_string(),
            Error::MalformedCompletion { .. } => "Malformed completion response".to_string(),
            Error::SourceResolution { .. } => "Failed to resolve PDF source".to_string(),
            Error::SessionNotFound { session_id } => format!("Session not found: {}", session_id),
            Error::Config(_) => "Server is misconfigured".to_string(),
            Error::Base64Decode(_) => "Invalid base64 data".to_string(),
            Error::HttpRequest(_) => "HTTP request failed".to_string(),
            Error::Io(_) => "I/O error".to_string(),
            Error::Serialization(_) => "Serialization error".to_string(),
            Error::PathAccessDenied { .. } => "Access denied".to_string(),
            Error::SsrfBlocked { .. } => "URL not allowed".to_string(),
            Error::DownloadTooLarge { max_size, .. } => {
                format!("Download exceeds maximum size of {} bytes", max_size)
            }
        }
    }

    /// Whether this error stems from reading the PDF itself
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            Error::InvalidPdf { .. } | Error::PasswordRequired | Error::Pdfium { .. }
        )
    }
}
