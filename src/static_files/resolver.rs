//! Static file resolution.
//!
//! # Responsibilities
//! - Map a request path to a regular file under the configured root
//! - Guess Content-Type from the file extension
//! - Reject traversal outside the root
//!
//! # Design Decisions
//! - Paths are rebuilt segment by segment; any `..` segment rejects the
//!   request before the filesystem is touched
//! - Unknown extensions fall back to `text/plain`
//! - HEAD reports the file's size without reading it

use std::path::{Component, Path, PathBuf};

use crate::http::{Method, ProxyResponse};

/// Resolves request paths against a static root directory.
#[derive(Debug, Clone)]
pub struct StaticResolver {
    root: PathBuf,
}

impl StaticResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve `path` to a response.
    ///
    /// Methods other than GET/HEAD get 405; missing files, directories
    /// and traversal attempts get 404.
    pub async fn resolve(&self, method: Method, path: &str) -> ProxyResponse {
        if !matches!(method, Method::Get | Method::Head) {
            return ProxyResponse::text(405, "Bad Request");
        }

        let Some(file_path) = self.join_sanitized(path) else {
            tracing::warn!(path = %path, "Rejected unsafe static path");
            return not_found();
        };

        let metadata = match tokio::fs::metadata(&file_path).await {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => return not_found(),
        };

        let content_type = mime_guess::from_path(&file_path)
            .first_raw()
            .unwrap_or("text/plain");

        // GET reports the length of the bytes actually read; the file
        // may have changed size since the stat above.
        let (content_length, body) = match method {
            Method::Head => (metadata.len(), None),
            _ => match tokio::fs::read(&file_path).await {
                Ok(bytes) => (bytes.len() as u64, Some(bytes)),
                // File vanished between stat and read.
                Err(_) => return not_found(),
            },
        };

        ProxyResponse::file(content_type, content_length, body)
    }

    /// Join `path` onto the root, refusing `..` segments and any segment
    /// that is not a single normal path component.
    fn join_sanitized(&self, path: &str) -> Option<PathBuf> {
        let mut resolved = self.root.clone();
        let mut pushed = false;
        for segment in path.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return None,
                segment => {
                    let mut components = Path::new(segment).components();
                    match (components.next(), components.next()) {
                        (Some(Component::Normal(_)), None) => {}
                        _ => return None,
                    }
                    resolved.push(segment);
                    pushed = true;
                }
            }
        }
        pushed.then_some(resolved)
    }
}

fn not_found() -> ProxyResponse {
    ProxyResponse::text(404, "Not Found")
}
