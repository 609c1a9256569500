//! Standalone HTML rendering for a saved post.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::post::BlogPost;

fn url_regex() -> &'static Regex {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    URL_RE.get_or_init(|| Regex::new(r#"https?://[^\s<>"'()\[\]]+"#).expect("valid URL regex"))
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes `text` and wraps every `http(s)://` run in an anchor opening a new tab.
pub fn linkify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in url_regex().find_iter(text) {
        out.push_str(&escape_html(&text[last..m.start()]));
        let url = escape_html(m.as_str());
        out.push_str(&format!(r#"<a href="{url}" target="_blank">{url}</a>"#));
        last = m.end();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

/// Renders the page written alongside each post's JSON file.
pub fn render_post_html(post: &BlogPost) -> String {
    let keyword = escape_html(&post.keyword);
    let body = linkify(&post.content).replace('\n', "<br>\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Blog Post: {keyword}</title>
</head>
<body>
    <h1>{keyword}</h1>
    <p><strong>Search Volume:</strong> {search_volume}</p>
    <p><strong>Keyword Difficulty:</strong> {difficulty}</p>
    <p><strong>Avg CPC:</strong> ${avg_cpc:.2}</p>
    <hr>
    <div>{body}</div>
</body>
</html>
"#,
        search_volume = post.seo.search_volume,
        difficulty = post.seo.keyword_difficulty,
        avg_cpc = post.seo.avg_cpc,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::fetch_seo_metrics;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_linkify_wraps_urls() {
        let html = linkify("Buy here: https://example.com/product1 today");
        assert_eq!(
            html,
            r#"Buy here: <a href="https://example.com/product1" target="_blank">https://example.com/product1</a> today"#
        );
    }

    #[test]
    fn test_linkify_stops_at_markdown_link_paren() {
        let html = linkify("[Earbuds](https://example.com/product2)");
        assert!(html.contains(r#"<a href="https://example.com/product2" target="_blank">"#));
        assert!(html.ends_with("</a>)"));
    }

    #[test]
    fn test_linkify_escapes_surrounding_text() {
        let html = linkify("<script>alert(1)</script> http://a.test");
        assert!(html.starts_with("&lt;script&gt;"));
        assert!(html.contains(r#"<a href="http://a.test""#));
    }

    #[test]
    fn test_render_post_html_contains_metrics_and_breaks() {
        let post = BlogPost {
            keyword: "standing desk".to_string(),
            seo: fetch_seo_metrics("standing desk"),
            content: "# Title\nSee https://example.com/product1".to_string(),
        };
        let html = render_post_html(&post);
        assert!(html.contains("<title>Blog Post: standing desk</title>"));
        assert!(html.contains("<h1>standing desk</h1>"));
        assert!(html.contains("<strong>Search Volume:</strong> 90000"));
        assert!(html.contains("<strong>Keyword Difficulty:</strong> 42"));
        assert!(html.contains("<strong>Avg CPC:</strong> $2.10"));
        assert!(html.contains("# Title<br>"));
        assert!(html.contains(r#"<a href="https://example.com/product1" target="_blank">"#));
    }
}
