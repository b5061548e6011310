//! Post listings returned by `/posts` and `/feed`.
//!
//! The API is not consistent about how it wraps a list of posts, so the
//! body is decoded into [`FeedResponse`]. The shape is chosen by what the
//! body is and which keys it has, in this order:
//!
//! 1. a bare JSON array of posts,
//! 2. an object with a `data` key,
//! 3. an object with a `posts` key,
//! 4. anything else, which is treated as an empty listing.
//!
//! A present `data` key wins even when it holds no list; `posts` is not
//! consulted then. Entries that are not JSON objects are skipped.

use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::io::{self, Write};

/// Content longer than this many characters is cut in the listing.
pub const CONTENT_PREVIEW_CHARS: usize = 100;

const SEPARATOR_WIDTH: usize = 40;

#[derive(Debug)]
pub enum FeedResponse {
    List(Vec<Post>),
    Data(Vec<Post>),
    Posts(Vec<Post>),
    Other(Value),
}

impl FeedResponse {
    /// Decode a response body. Never fails: unknown shapes become `Other`.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => FeedResponse::List(decode_posts(items)),
            Value::Object(mut map) => {
                if let Some(data) = map.remove("data") {
                    FeedResponse::Data(decode_list(data))
                } else if let Some(posts) = map.remove("posts") {
                    FeedResponse::Posts(decode_list(posts))
                } else {
                    FeedResponse::Other(Value::Object(map))
                }
            }
            other => FeedResponse::Other(other),
        }
    }

    pub fn into_posts(self) -> Vec<Post> {
        match self {
            FeedResponse::List(posts) | FeedResponse::Data(posts) | FeedResponse::Posts(posts) => posts,
            FeedResponse::Other(_) => Vec::new(),
        }
    }
}

fn decode_list(value: Value) -> Vec<Post> {
    match value {
        Value::Array(items) => decode_posts(items),
        _ => Vec::new(),
    }
}

fn decode_posts(items: Vec<Value>) -> Vec<Post> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(_) => serde_json::from_value(item).ok(),
            other => {
                debug!("skipping non-object feed entry: {}", other);
                None
            }
        })
        .collect()
}

/// One entry of a listing. Every field is optional and may hold any JSON
/// value; the server decides which ones it sends and how.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Post {
    pub id: Option<Value>,
    pub title: Option<Value>,
    pub author_name: Option<Value>,
    pub author: Option<Value>,
    pub submolt: Option<Value>,
    pub score: Option<Value>,
    pub content: Option<Value>,
    pub url: Option<Value>,
}

impl Post {
    /// Flat `author_name`, then nested `author.name`, then `unknown`.
    pub fn author(&self) -> String {
        if let Some(name) = text(&self.author_name) {
            return name;
        }
        self.author
            .as_ref()
            .and_then(|a| a.get("name"))
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string()
    }

    /// Content cut to [`CONTENT_PREVIEW_CHARS`] characters with `...`
    /// appended, or `None` when there is no content.
    pub fn preview(&self) -> Option<String> {
        let content = text(&self.content)?;
        let mut preview: String = content.chars().take(CONTENT_PREVIEW_CHARS).collect();
        preview.push_str("...");
        Some(preview)
    }

    fn score(&self) -> String {
        match &self.score {
            None | Some(Value::Null) => "0".to_string(),
            Some(v) => scalar(v),
        }
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "none".to_string(),
        other => other.to_string(),
    }
}

/// Non-empty display text of an optional field; null and `""` are absent.
fn text(field: &Option<Value>) -> Option<String> {
    match field {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(v) => Some(scalar(v)),
    }
}

fn or_none(field: &Option<Value>) -> String {
    field.as_ref().map(scalar).unwrap_or_else(|| "none".into())
}

/// Write the listing, or `No posts found.` when it is empty.
pub fn render_posts<W: Write>(posts: &[Post], out: &mut W) -> io::Result<()> {
    if posts.is_empty() {
        writeln!(out, "No posts found.")?;
        return Ok(());
    }

    for post in posts {
        writeln!(
            out,
            "[{}] {} (by {})",
            or_none(&post.id),
            or_none(&post.title),
            post.author()
        )?;
        writeln!(
            out,
            "   Submolt: {} | Score: {}",
            or_none(&post.submolt),
            post.score()
        )?;
        if let Some(preview) = post.preview() {
            writeln!(out, "   Content: {}", preview)?;
        }
        if let Some(url) = text(&post.url) {
            writeln!(out, "   URL: {}", url)?;
        }
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: Value) -> String {
        let posts = FeedResponse::from_value(value).into_posts();
        let mut out = Vec::new();
        render_posts(&posts, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample() -> Value {
        json!([
            {"id": 1, "title": "First", "author_name": "alice", "submolt": "general",
             "score": 5, "content": "hello"},
            {"id": "p2", "title": "Second", "author": {"name": "bob"}, "submolt": "news",
             "url": "https://example.com"}
        ])
    }

    #[test]
    fn list_data_and_posts_shapes_render_the_same() {
        let plain = render(sample());
        assert_eq!(render(json!({"data": sample()})), plain);
        assert_eq!(render(json!({"posts": sample(), "total": 2})), plain);
        assert!(plain.contains("[1] First (by alice)"));
        assert!(plain.contains("[p2] Second (by bob)"));
    }

    #[test]
    fn data_wins_over_posts() {
        let posts = FeedResponse::from_value(json!({
            "data": [{"title": "from data"}],
            "posts": [{"title": "from posts"}]
        }))
        .into_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, Some(json!("from data")));
    }

    #[test]
    fn present_data_key_wins_even_when_null() {
        let body = json!({"data": null, "posts": [{"id": 1, "title": "hidden"}]});
        assert_eq!(render(body), "No posts found.\n");
    }

    #[test]
    fn odd_field_types_do_not_drop_the_listing() {
        let body = json!({"data": [
            {"id": 1, "title": "Normal", "author_name": "alice", "submolt": "general"},
            {"id": 2, "title": 2024, "author_name": "bob", "submolt": "general"},
            {"id": 3, "title": "Nested", "submolt": {"name": "general"}, "score": 1.5,
             "content": 42, "url": null}
        ]});
        let posts = FeedResponse::from_value(body.clone()).into_posts();
        assert_eq!(posts.len(), 3);

        let out = render(body);
        assert!(out.contains("[1] Normal (by alice)"));
        assert!(out.contains("[2] 2024 (by bob)"));
        assert!(out.contains("[3] Nested (by unknown)"));
        assert!(out.contains("Submolt: {\"name\":\"general\"} | Score: 1.5"));
        assert!(out.contains("   Content: 42..."));
        assert!(!out.contains("URL:"));
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let posts = FeedResponse::from_value(json!([{"id": 1}, "junk", 7, [1, 2]])).into_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, Some(json!(1)));
    }

    #[test]
    fn unknown_shapes_are_empty() {
        for body in [json!({"message": "ok"}), json!("text"), json!(42), json!(null)] {
            assert_eq!(render(body), "No posts found.\n");
        }
        assert_eq!(render(json!([])), "No posts found.\n");
    }

    #[test]
    fn author_fallbacks() {
        let nested: Post = serde_json::from_value(json!({"author": {"name": "bob"}})).unwrap();
        assert_eq!(nested.author(), "bob");

        let neither: Post = serde_json::from_value(json!({"title": "x"})).unwrap();
        assert_eq!(neither.author(), "unknown");

        let both: Post =
            serde_json::from_value(json!({"author_name": "alice", "author": {"name": "bob"}}))
                .unwrap();
        assert_eq!(both.author(), "alice");

        let empty_flat: Post =
            serde_json::from_value(json!({"author_name": "", "author": {"name": "bob"}})).unwrap();
        assert_eq!(empty_flat.author(), "bob");
    }

    #[test]
    fn long_content_is_truncated() {
        let long = "a".repeat(150);
        let post = Post {
            content: Some(Value::String(long)),
            ..Post::default()
        };
        assert_eq!(post.preview().unwrap(), format!("{}...", "a".repeat(100)));

        let short = Post {
            content: Some(json!("short")),
            ..Post::default()
        };
        assert_eq!(short.preview().unwrap(), "short...");
        assert!(Post::default().preview().is_none());
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let post = Post {
            content: Some(Value::String("é".repeat(120))),
            ..Post::default()
        };
        assert_eq!(post.preview().unwrap().chars().count(), 103);
    }

    #[test]
    fn full_entry_layout() {
        let out = render(json!([{
            "id": 3, "title": "T", "author_name": "al", "submolt": "general",
            "content": "body", "url": "https://x.y"
        }]));
        let expected = "[3] T (by al)\n   Submolt: general | Score: 0\n   Content: body...\n   URL: https://x.y\n----------------------------------------\n";
        assert_eq!(out, expected);
    }
}
