//! File-backed post store.
//!
//! Each generated post becomes one pretty-printed JSON file under `posts_dir`
//! and one standalone HTML page under `html_dir`, sharing a file stem of
//! `{prefix}{slug}_{YYYYMMDD-HHMMSS}`. Listing re-reads the whole directory.

pub mod html;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::post::{BlogPost, StoredPost};

const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Longest keyword slug kept in a file name, in bytes. Leaves room for the
/// prefix, timestamp and extension under the 255-byte file name limit.
const MAX_SLUG_BYTES: usize = 120;

/// Names of the two files written for one post.
#[derive(Debug, Clone, Serialize)]
pub struct SavedPost {
    pub json_filename: String,
    pub html_filename: String,
}

#[derive(Debug, Clone)]
pub struct PostStore {
    posts_dir: PathBuf,
    html_dir: PathBuf,
}

impl PostStore {
    pub fn new(posts_dir: impl Into<PathBuf>, html_dir: impl Into<PathBuf>) -> Self {
        Self {
            posts_dir: posts_dir.into(),
            html_dir: html_dir.into(),
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    pub fn html_dir(&self) -> &Path {
        &self.html_dir
    }

    /// Writes the JSON and HTML files for `post`, stamped with the current local time.
    pub async fn save(&self, post: &BlogPost, prefix: &str) -> Result<SavedPost, AppError> {
        self.save_at(post, prefix, Local::now()).await
    }

    async fn save_at(
        &self,
        post: &BlogPost,
        prefix: &str,
        now: DateTime<Local>,
    ) -> Result<SavedPost, AppError> {
        let stem = file_stem(prefix, &post.keyword, now);
        let saved = SavedPost {
            json_filename: format!("{stem}.json"),
            html_filename: format!("{stem}.html"),
        };

        let json = serde_json::to_string_pretty(post)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize post: {e}")))?;

        // Listings only read the JSON file, so it is written last.
        let html_path = self.html_dir.join(&saved.html_filename);
        tokio::fs::create_dir_all(&self.html_dir).await?;
        tokio::fs::write(&html_path, html::render_post_html(post)).await?;

        if let Err(e) = self.write_json(&saved.json_filename, json).await {
            if let Err(cleanup) = tokio::fs::remove_file(&html_path).await {
                warn!("Failed to remove {}: {cleanup}", html_path.display());
            }
            return Err(e.into());
        }

        info!(
            "Saved post for '{}' as {} and {}",
            post.keyword, saved.json_filename, saved.html_filename
        );
        Ok(saved)
    }

    async fn write_json(&self, filename: &str, json: String) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.posts_dir).await?;
        tokio::fs::write(self.posts_dir.join(filename), json).await
    }

    /// Reads every `*.json` file in the posts directory, newest first.
    ///
    /// Files that cannot be read or parsed are logged and skipped.
    /// A missing directory is an empty listing.
    pub async fn list_posts(&self) -> Result<Vec<StoredPost>, AppError> {
        let mut dir = match tokio::fs::read_dir(&self.posts_dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut posts = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            match read_post(&path).await {
                Ok(data) => posts.push(StoredPost {
                    filename: filename.to_string(),
                    data,
                }),
                Err(e) => warn!("Skipping unreadable post {}: {e}", path.display()),
            }
        }

        posts.sort_by(|a, b| b.filename.cmp(&a.filename));
        Ok(posts)
    }

    /// Reads a single post by its JSON file name.
    pub async fn get_post(&self, filename: &str) -> Result<BlogPost, AppError> {
        if !is_safe_filename(filename) {
            return Err(AppError::Validation(format!(
                "Invalid post filename: {filename}"
            )));
        }

        let path = self.posts_dir.join(filename);
        match read_post(&path).await {
            Ok(post) => Ok(post),
            Err(ReadError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                Err(AppError::NotFound(format!("Post {filename} not found")))
            }
            Err(ReadError::Io(e)) => Err(e.into()),
            Err(ReadError::Parse(e)) => Err(AppError::Internal(anyhow::anyhow!(
                "Post {filename} is malformed: {e}"
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ReadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

async fn read_post(path: &Path) -> Result<BlogPost, ReadError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Builds `{prefix}{slug}_{timestamp}`.
fn file_stem(prefix: &str, keyword: &str, now: DateTime<Local>) -> String {
    format!(
        "{}{}_{}",
        slugify(prefix),
        truncate_on_char_boundary(&slugify(keyword), MAX_SLUG_BYTES),
        now.format(TIMESTAMP_FORMAT)
    )
}

/// Spaces become `_`; anything outside `[A-Za-z0-9_-]` also becomes `_`.
pub fn slugify(keyword: &str) -> String {
    keyword
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn truncate_on_char_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains(['/', '\\'])
        && !filename.contains("..")
        && filename.ends_with(".json")
}
