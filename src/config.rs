//! Configuration read once from the environment at start-up

use crate::error::{Error, Result};
use crate::pdf::MediaTypePolicy;
use crate::quiz::Variant;
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://integrate.api.nvidia.com/v1";

/// Everything the completion client needs
#[derive(Clone)]
pub struct CompletionConfig {
    /// Bearer token for the completion endpoint
    pub api_key: String,
    pub base_url: String,
    pub variant: Variant,
}

impl CompletionConfig {
    /// Defaults for everything except the secret
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            variant: Variant::default(),
        }
    }

    /// Upload check that goes with the variant
    pub fn media_type_policy(&self) -> MediaTypePolicy {
        match self.variant {
            Variant::Chat => MediaTypePolicy::Strict,
            Variant::Completion => MediaTypePolicy::Trusting,
        }
    }
}

// Hand-written so the secret never reaches logs
impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("variant", &self.variant)
            .finish()
    }
}

/// Security and resource limits for the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directories `path` sources may read from (empty: any path)
    pub resource_dirs: Vec<String>,
    /// Allow URLs that resolve to private/reserved IPs (default: false)
    pub allow_private_urls: bool,
    /// Maximum download size in bytes for URL sources (default: 100MB)
    pub max_download_bytes: u64,
    /// Maximum total bytes of memoized text (default: 64MB)
    pub cache_max_bytes: usize,
    /// Maximum number of memoized documents (default: 100)
    pub cache_max_entries: usize,
    /// Maximum number of live page sessions (default: 64)
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            resource_dirs: Vec::new(),
            allow_private_urls: false,
            max_download_bytes: 100 * 1024 * 1024, // 100MB
            cache_max_bytes: 64 * 1024 * 1024,     // 64MB
            cache_max_entries: 100,
            max_sessions: 64,
        }
    }
}

/// Full application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub completion: CompletionConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load from the process environment, after reading `.env` if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("QUIZ_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::Config("Missing environment variable: QUIZ_API_KEY".into()))?;

        let mut completion = CompletionConfig::new(api_key);
        if let Some(base_url) = lookup("QUIZ_API_BASE_URL") {
            completion.base_url = base_url;
        }
        if let Some(variant) = parse_var(&lookup, "QUIZ_VARIANT")? {
            completion.variant = variant;
        }

        let mut server = ServerConfig::default();
        if let Some(dirs) = lookup("QUIZ_RESOURCE_DIRS") {
            server.resource_dirs = dirs
                .split(':')
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(allow) = parse_var(&lookup, "QUIZ_ALLOW_PRIVATE_URLS")? {
            server.allow_private_urls = allow;
        }
        if let Some(max) = parse_var(&lookup, "QUIZ_MAX_DOWNLOAD_BYTES")? {
            server.max_download_bytes = max;
        }

        Ok(Self { completion, server })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
        })
        .transpose()
}
