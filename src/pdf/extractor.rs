//! Uploaded document text extraction

use crate::error::{Error, Result};
use crate::pdf::reader::{concat_pages, PdfReader};
use sha2::{Digest, Sha256};

/// Media type every accepted upload must declare under the strict policy
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Raw upload bytes together with the media type declared for them
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub data: Vec<u8>,
    pub media_type: String,
    /// Display name (file name, URL, or `<base64>`)
    pub name: String,
}

impl UploadedDocument {
    pub fn new(data: Vec<u8>, media_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            data,
            media_type: media_type.into(),
            name: name.into(),
        }
    }

    /// Hex SHA-256 of the content; identifies the upload for memoization
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.data))
    }

    /// Memo key for the extracted text.
    ///
    /// Includes the declared media type, since the same bytes may be
    /// accepted under one declaration and rejected under another.
    pub fn memo_key(&self) -> String {
        format!("{}:{}", self.digest(), self.media_type.to_ascii_lowercase())
    }

    /// Whether the declared media type is `application/pdf`
    pub fn is_declared_pdf(&self) -> bool {
        is_pdf_media_type(&self.media_type)
    }
}

/// `application/pdf`, ignoring case and any `;`-parameters
pub fn is_pdf_media_type(media_type: &str) -> bool {
    media_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(PDF_MEDIA_TYPE))
        .unwrap_or(false)
}

/// How much the extractor trusts the declared media type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaTypePolicy {
    /// Reject anything not declared as a PDF before opening it
    Strict,
    /// Hand the bytes straight to the PDF parser
    Trusting,
}

/// Extract the plain text of every page, concatenated in page order.
///
/// CPU-bound; async callers run it on the blocking pool.
pub fn extract_text(document: &UploadedDocument, policy: MediaTypePolicy) -> Result<String> {
    if policy == MediaTypePolicy::Strict && !document.is_declared_pdf() {
        return Err(Error::WrongFileType {
            media_type: document.media_type.clone(),
        });
    }

    let reader = PdfReader::open_bytes(&document.data)?;
    concat_pages(&reader)
}

/// Text extraction seam used by the page runtime
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &UploadedDocument) -> Result<String>;
}

/// PDFium-backed extractor
#[derive(Debug, Clone, Copy)]
pub struct PdfiumExtractor {
    policy: MediaTypePolicy,
}

impl PdfiumExtractor {
    pub fn new(policy: MediaTypePolicy) -> Self {
        Self { policy }
    }
}

impl TextExtractor for PdfiumExtractor {
    fn extract(&self, document: &UploadedDocument) -> Result<String> {
        extract_text(document, self.policy)
    }
}
