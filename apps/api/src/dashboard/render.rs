//! HTML rendering for the dashboard page.

use pulldown_cmark::{html, Event, Options, Parser};

use crate::models::post::StoredPost;
use crate::storage::html::escape_html;

/// Number of content lines shown before the full-content toggle.
const PREVIEW_LINES: usize = 10;

/// Dashboard page. Replace `{posts}` before serving.
const DASHBOARD_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>AI Blog Generator</title>
    <style>
        body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1200px; padding: 1rem 2rem; }
        .layout { display: grid; grid-template-columns: 1fr 2fr; gap: 2rem; }
        .post { border: 1px solid #ddd; border-radius: 6px; margin-bottom: 1rem; padding: 0.5rem 1rem; }
        .post > summary { cursor: pointer; font-weight: 600; }
        .metrics { display: flex; gap: 2rem; }
        .metric .value { font-size: 1.4rem; }
        .error { color: #b00020; }
        .success { color: #1b5e20; }
        .pending { color: #555; }
    </style>
</head>
<body>
    <h1>AI Blog Generator</h1>
    <hr>
    <div class="layout">
        <section>
            <h2>Generate New Blog</h2>
            <form id="keyword-form">
                <h3>Enter a keyword to generate a blog post</h3>
                <label for="keyword">Keyword</label>
                <input id="keyword" name="keyword" type="text"
                       placeholder="e.g., wireless earbuds, smart watches, etc."
                       title="Enter a keyword or phrase for blog generation">
                <button id="generate" type="submit">Generate Blog Post</button>
            </form>
            <p id="status"></p>
        </section>
        <section>
            <h2>Existing Blog Posts</h2>
            {posts}
        </section>
    </div>
    <script>
        const form = document.getElementById('keyword-form');
        const button = document.getElementById('generate');
        const statusLine = document.getElementById('status');

        function setStatus(kind, text) {
            statusLine.className = kind;
            statusLine.textContent = text;
        }

        async function waitForPost(filename) {
            for (let attempt = 0; attempt < 20; attempt++) {
                const response = await fetch('/api/posts');
                if (response.ok) {
                    const posts = await response.json();
                    if (posts.some((p) => p.filename === filename)) {
                        return;
                    }
                }
                await new Promise((resolve) => setTimeout(resolve, 500));
            }
        }

        form.addEventListener('submit', async (event) => {
            event.preventDefault();
            const keyword = document.getElementById('keyword').value.trim();
            if (!keyword) {
                setStatus('error', 'Please enter a keyword');
                return;
            }

            button.disabled = true;
            setStatus('pending', `Generating blog post for '${keyword}'...`);
            try {
                const response = await fetch('/api/generate', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ keyword }),
                });
                const result = await response.json();
                if (!result.success) {
                    throw new Error(result.error || 'Unknown error occurred');
                }
                setStatus('success', `Blog post generated successfully! Saved as: ${result.filename}`);
                await waitForPost(result.filename);
                window.location.reload();
            } catch (err) {
                setStatus('error', `Error: ${err.message}`);
            } finally {
                button.disabled = false;
            }
        });
    </script>
</body>
</html>
"#;

/// Renders the whole dashboard for `posts`, which are expected newest first.
pub fn render_dashboard(posts: &[StoredPost]) -> String {
    let list = if posts.is_empty() {
        r#"<p class="info">No blog posts found. Generate your first blog post!</p>"#.to_string()
    } else {
        posts.iter().map(render_post_card).collect::<Vec<_>>().join("\n")
    };
    DASHBOARD_TEMPLATE.replace("{posts}", &list)
}

fn render_post_card(post: &StoredPost) -> String {
    let filename = escape_html(&post.filename);
    let seo = &post.data.seo;

    let mut card = format!(
        r#"<details class="post">
    <summary>{title} - {filename}</summary>
    <div class="metrics">
        <div class="metric"><div>Search Volume</div><div class="value">{volume}</div></div>
        <div class="metric"><div>Keyword Difficulty</div><div class="value">{difficulty}</div></div>
        <div class="metric"><div>Avg CPC</div><div class="value">${cpc:.2}</div></div>
    </div>
    <hr>
    <div class="preview">{preview}</div>
"#,
        title = escape_html(&title_case(&post.data.keyword)),
        volume = format_thousands(seo.search_volume),
        difficulty = seo.keyword_difficulty,
        cpc = seo.avg_cpc,
        preview = markdown_to_html(&preview(&post.data.content)),
    );

    card.push_str(&format!(
        r#"    <details>
        <summary>View Full Content</summary>
        <h3>Full Content:</h3>
        {full}
    </details>
    <p><a href="/api/posts/{path}" download="{filename}">Download JSON</a></p>
</details>"#,
        full = markdown_to_html(&post.data.content),
        path = urlencoding::encode(&post.filename),
    ));
    card
}

/// First `PREVIEW_LINES` lines, with a truncation note when there are more.
pub fn preview(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut out = lines[..lines.len().min(PREVIEW_LINES)].join("\n");
    if lines.len() > PREVIEW_LINES {
        out.push_str("\n\n... (content truncated)");
    }
    out
}

/// Renders Markdown, escaping any raw HTML in the source.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// `120000` → `120,000`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
