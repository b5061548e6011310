// Command handlers: one function per subcommand. Each builds at most two
// requests through `ApiClient` and writes its output to `out`. Errors are
// returned, never printed, so `main` stays the only place that exits.

use crate::api::{ApiClient, NewComment, NewPost, RegisterRequest};
use crate::cli::{Commands, Sort};
use crate::error::Result;
use crate::feed::{render_posts, FeedResponse};
use crate::token::TokenStore;
use log::info;
use reqwest::Method;
use serde_json::Value;
use std::io::Write;

/// Whether `command` talks to an authenticated endpoint. `register` is the
/// only one that does not, and it must keep working with a broken token file.
pub fn needs_token(command: &Commands) -> bool {
    !matches!(command, Commands::Register { .. })
}

/// Build the API client for `command`, loading the stored key only when
/// the command needs it.
pub fn client_for(command: &Commands, base_url: &str, store: &TokenStore) -> Result<ApiClient> {
    let token = if needs_token(command) { store.load()? } else { None };
    ApiClient::new(base_url, token)
}

/// Dispatch a parsed subcommand to its handler.
pub fn run<W: Write>(command: Commands, api: &ApiClient, store: &TokenStore, out: &mut W) -> Result<()> {
    match command {
        Commands::Register { name, description } => register(api, store, &name, &description, out),
        Commands::Post {
            title,
            content,
            submolt,
        } => post(api, &title, &content, &submolt, out),
        Commands::Read {
            limit,
            sort,
            personal,
        } => read(api, limit, sort, personal, out),
        Commands::Reply {
            post_id,
            content,
            parent_id,
        } => reply(api, &post_id, &content, parent_id, out),
        Commands::View { post_id } => view(api, &post_id, out),
    }
}

/// Register an agent and keep its API key for later calls.
pub fn register<W: Write>(
    api: &ApiClient,
    store: &TokenStore,
    name: &str,
    description: &str,
    out: &mut W,
) -> Result<()> {
    let req = RegisterRequest {
        name: name.to_string(),
        description: description.to_string(),
    };
    let response = api.send(Method::POST, "/agents/register", Some(&req), false)?;
    write_json(out, &response)?;

    if let Some(api_key) = api_key(&response) {
        store.save(api_key)?;
        info!("registered agent {}", name);
        writeln!(out, "Token saved to {}", store.path().display())?;
        writeln!(out, "\nRegistration successful! API Key has been saved automatically.")?;
    }
    Ok(())
}

fn api_key(response: &Value) -> Option<&str> {
    response
        .get("agent")
        .and_then(|agent| agent.get("api_key"))
        .and_then(Value::as_str)
        .filter(|key| !key.is_empty())
}

pub fn post<W: Write>(api: &ApiClient, title: &str, content: &str, submolt: &str, out: &mut W) -> Result<()> {
    let new_post = NewPost::new(title, content, submolt);
    if new_post.is_link() {
        writeln!(out, "Detected URL, creating link post...")?;
    }
    let response = api.post("/posts", &new_post)?;
    write_json(out, &response)
}

/// Path and query for a listing: the personal feed or the global posts.
pub fn feed_path(limit: u32, sort: Sort, personal: bool) -> String {
    let base = if personal { "/feed" } else { "/posts" };
    format!("{}?limit={}&sort={}", base, limit, sort)
}

pub fn read<W: Write>(api: &ApiClient, limit: u32, sort: Sort, personal: bool, out: &mut W) -> Result<()> {
    let response = api.get(&feed_path(limit, sort, personal))?;
    let posts = FeedResponse::from_value(response).into_posts();
    render_posts(&posts, out)?;
    Ok(())
}

pub fn reply<W: Write>(
    api: &ApiClient,
    post_id: &str,
    content: &str,
    parent_id: Option<String>,
    out: &mut W,
) -> Result<()> {
    let comment = NewComment {
        content: content.to_string(),
        parent_id,
    };
    let response = api.post(&format!("/posts/{}/comments", post_id), &comment)?;
    write_json(out, &response)
}

/// Show a post, then its comments sorted by top. The post is written
/// before the comments are requested.
pub fn view<W: Write>(api: &ApiClient, post_id: &str, out: &mut W) -> Result<()> {
    let post = api.get(&format!("/posts/{}", post_id))?;
    writeln!(out, "=== POST DETAILS ===")?;
    write_json(out, &post)?;

    writeln!(out, "\n=== COMMENTS ===")?;
    let comments = api.get(&format!("/posts/{}/comments?sort=top", post_id))?;
    write_json(out, &comments)
}

fn write_json<W: Write>(out: &mut W, value: &Value) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}
