//! Turns tool arguments into uploaded documents

use crate::error::{Error, Result};
use crate::pdf::{UploadedDocument, PDF_MEDIA_TYPE};
use base64::Engine;
use futures_util::StreamExt;
use std::net::IpAddr;
use std::path::Path;

const OCTET_STREAM: &str = "application/octet-stream";

/// Guess a media type from a file name's extension
pub fn media_type_from_name(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pdf") => PDF_MEDIA_TYPE,
        Some("txt") => "text/plain",
        _ => OCTET_STREAM,
    }
}

/// Read a local file as an upload
pub fn resolve_path<P: AsRef<Path>>(path: P) -> Result<UploadedDocument> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::PdfNotFound {
            path: path.display().to_string(),
        });
    }

    let data = std::fs::read(path)?;
    let name = path.display().to_string();
    let media_type = media_type_from_name(&name);

    Ok(UploadedDocument::new(data, media_type, name))
}

/// Decode base64 data as an upload; the media type defaults to PDF
pub fn resolve_base64(base64_data: &str, media_type: Option<&str>) -> Result<UploadedDocument> {
    let engine = base64::engine::general_purpose::STANDARD;
    let data = engine.decode(base64_data)?;

    Ok(UploadedDocument::new(
        data,
        media_type.unwrap_or(PDF_MEDIA_TYPE),
        "<base64>",
    ))
}

/// Check if an IP address is private/reserved (loopback, link-local, private ranges, etc.)
fn is_private_ip(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            v4.is_loopback()
                || v4.is_private()
                || v4.is_link_local()
                || v4.is_broadcast()
                || v4.is_unspecified()
                // CGNAT 100.64/10
                || v4.octets()[0] == 100 && (v4.octets()[1] & 0xC0) == 64
        }
        IpAddr::V6(v6) => {
            let first = v6.segments()[0];
            v6.is_loopback()
                || v6.is_unspecified()
                || (first & 0xFE00) == 0xFC00
                || (first & 0xFFC0) == 0xFE80
        }
    }
}

/// Check URL for SSRF by resolving DNS and verifying IPs are public
async fn check_ssrf(url_str: &str) -> Result<()> {
    let parsed = url::Url::parse(url_str).map_err(|e| Error::SourceResolution {
        reason: format!("Invalid URL: {}", e),
    })?;

    let host = parsed.host_str().ok_or_else(|| Error::SourceResolution {
        reason: "URL has no host".to_string(),
    })?;

    let port = parsed.port_or_known_default().unwrap_or(443);
    let addr_str = format!("{}:{}", host, port);

    let addrs = tokio::net::lookup_host(&addr_str)
        .await
        .map_err(|e| Error::SourceResolution {
            reason: format!("DNS resolution failed for {}: {}", host, e),
        })?;

    for addr in addrs {
        if is_private_ip(&addr.ip()) {
            return Err(Error::SsrfBlocked {
                url: url_str.to_string(),
            });
        }
    }

    Ok(())
}

/// Download a URL as an upload, with SSRF protection and download size limits.
///
/// The declared media type comes from the `Content-Type` header, falling
/// back to the URL path's extension.
pub async fn resolve_url(
    url: &str,
    allow_private_urls: bool,
    max_download_bytes: u64,
) -> Result<UploadedDocument> {
    if !allow_private_urls {
        check_ssrf(url).await?;
    }

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()
        .map_err(Error::HttpRequest)?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(Error::SourceResolution {
            reason: format!("HTTP request failed with status: {}", response.status()),
        });
    }

    if let Some(content_length) = response.content_length() {
        if content_length > max_download_bytes {
            return Err(Error::DownloadTooLarge {
                size: content_length,
                max_size: max_download_bytes,
            });
        }
    }

    let media_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| media_type_from_url(url).to_string());

    // Stream the body with incremental size checking
    let mut data = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(Error::HttpRequest)?;
        data.extend_from_slice(&chunk);
        if data.len() as u64 > max_download_bytes {
            return Err(Error::DownloadTooLarge {
                size: data.len() as u64,
                max_size: max_download_bytes,
            });
        }
    }

    tracing::debug!(url, bytes = data.len(), %media_type, "downloaded upload");

    Ok(UploadedDocument::new(data, media_type, url))
}

fn media_type_from_url(url: &str) -> &'static str {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.path_segments().and_then(|s| s.last().map(media_type_from_name)))
        .unwrap_or(OCTET_STREAM)
}
