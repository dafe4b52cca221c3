//! Source resolution and caching

pub mod cache;
pub mod resolver;

pub use cache::TextCache;
pub use resolver::{media_type_from_name, resolve_base64, resolve_path, resolve_url};
