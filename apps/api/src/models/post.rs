use serde::{Deserialize, Serialize};

use crate::seo::SeoMetrics;

/// A generated blog post as persisted to disk.
///
/// Written once at generation time and never mutated. The on-disk JSON has
/// exactly the keys `keyword`, `seo`, `content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub keyword: String,
    pub seo: SeoMetrics,
    pub content: String,
}

/// A post read back from the posts directory, paired with its file name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPost {
    pub filename: String,
    pub data: BlogPost,
}
