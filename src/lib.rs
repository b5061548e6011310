// Library root
// -----------
// This crate exposes the library surface behind the `claw-cli` binary.
// `main.rs` parses arguments, builds the API client and hands off to the
// command handlers defined here.
//
// Module responsibilities:
// - `config`: base URL and token file location.
// - `token`: reading and writing the persisted API key.
// - `api`: blocking HTTP client for the forum API (auth, JSON, errors).
// - `feed`: decoding post listings and rendering them as text.
// - `cli`: clap definitions for the subcommands.
// - `commands`: one handler per subcommand, writing to any `io::Write`.
// - `error`: the error type every handler returns.
//
// Nothing below `main.rs` exits the process, so handlers can be tested by
// pointing the client at a local server and capturing the output buffer.
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod feed;
pub mod token;

pub use error::ClawError;
