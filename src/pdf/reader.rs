//! PDF reader wrapper for PDFium

use crate::error::{Error, Result};
use pdfium_render::prelude::*;

/// Paginated text source.
///
/// Page indices are zero-based and must be visited in increasing order to
/// reproduce the document's reading order.
pub trait PageText {
    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// Plain text of the page at `index`
    fn page_text(&self, index: usize) -> Result<String>;
}

/// Concatenate every page's text in page order, with nothing inserted
/// between pages.
pub fn concat_pages<P: PageText + ?Sized>(pages: &P) -> Result<String> {
    let mut text = String::new();
    for index in 0..pages.page_count() {
        text.push_str(&pages.page_text(index)?);
    }
    Ok(text)
}

/// Get PDFium instance (creates new instance each time - PDFium is not thread-safe)
fn create_pdfium() -> Result<Pdfium> {
    // Try to bind to system library or use static linking
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}

/// Check for the `%PDF` magic bytes
pub fn has_pdf_header(data: &[u8]) -> bool {
    data.len() >= 4 && &data[0..4] == b"%PDF"
}

/// PDF reader using PDFium.
///
/// All page text is pulled out when the document is opened, so the reader
/// does not keep the PDFium bindings alive.
pub struct PdfReader {
    page_texts: Vec<String>,
}

impl PdfReader {
    /// Open a PDF from bytes
    pub fn open_bytes(data: &[u8]) -> Result<Self> {
        if !has_pdf_header(data) {
            return Err(Error::InvalidPdf {
                reason: "Not a valid PDF file".to_string(),
            });
        }

        let pdfium = create_pdfium()?;
        let document = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(Self::map_pdfium_error)?;

        let page_texts = Self::extract_all_page_texts(&document)?;
        tracing::debug!(pages = page_texts.len(), "opened PDF");

        Ok(Self { page_texts })
    }

    fn extract_all_page_texts(document: &PdfDocument) -> Result<Vec<String>> {
        let pages = document.pages();
        let mut texts = Vec::with_capacity(pages.len() as usize);

        for index in 0..pages.len() {
            let page = pages.get(index).map_err(|e| Error::Pdfium {
                reason: format!("Failed to get page {}: {}", index + 1, e),
            })?;

            let text = page.text().map_err(|e| Error::Pdfium {
                reason: format!("Failed to read text of page {}: {}", index + 1, e),
            })?;
            texts.push(text.all());
        }

        Ok(texts)
    }

    fn map_pdfium_error(err: PdfiumError) -> Error {
        match err {
            PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
                Error::PasswordRequired
            }
            _ => Error::Pdfium {
                reason: format!("{}", err),
            },
        }
    }
}

impl PageText for PdfReader {
    fn page_count(&self) -> usize {
        self.page_texts.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        self.page_texts
            .get(index)
            .cloned()
            .ok_or_else(|| Error::Pdfium {
                reason: format!(
                    "Page {} out of bounds (total: {})",
                    index + 1,
                    self.page_texts.len()
                ),
            })
    }
}
