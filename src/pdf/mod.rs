//! PDF processing layer
//!
//! Text extraction is delegated to PDFium; this module only fixes the
//! page order and the upload checks around it.

mod extractor;
mod reader;

pub use extractor::{
    extract_text, is_pdf_media_type, MediaTypePolicy, PdfiumExtractor, TextExtractor,
    UploadedDocument, PDF_MEDIA_TYPE,
};
pub use reader::{concat_pages, has_pdf_header, PageText, PdfReader};
