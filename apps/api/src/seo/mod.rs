//! SEO metrics lookup: a fixed table of known keywords with a default fallback.

use serde::{Deserialize, Serialize};

/// Marketing metrics for a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeoMetrics {
    pub search_volume: u64,
    pub keyword_difficulty: u32,
    pub avg_cpc: f64,
}

/// Returned for any keyword not in `KNOWN_KEYWORDS`.
pub const DEFAULT_METRICS: SeoMetrics = SeoMetrics {
    search_volume: 1000,
    keyword_difficulty: 35,
    avg_cpc: 0.50,
};

/// Keys are lowercase.
const KNOWN_KEYWORDS: &[(&str, SeoMetrics)] = &[
    (
        "wireless earbuds",
        SeoMetrics {
            search_volume: 120_000,
            keyword_difficulty: 37,
            avg_cpc: 1.25,
        },
    ),
    (
        "standing desk",
        SeoMetrics {
            search_volume: 90_000,
            keyword_difficulty: 42,
            avg_cpc: 2.10,
        },
    ),
    (
        "ai blog generator",
        SeoMetrics {
            search_volume: 1200,
            keyword_difficulty: 28,
            avg_cpc: 0.75,
        },
    ),
];

/// Looks up metrics for `keyword`, case-insensitively.
pub fn fetch_seo_metrics(keyword: &str) -> SeoMetrics {
    let key = keyword.to_lowercase();
    KNOWN_KEYWORDS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, metrics)| *metrics)
        .unwrap_or(DEFAULT_METRICS)
}
