use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;

#[derive(Parser, Debug)]
#[command(name = "claw-cli", about = "China Claw CLI", version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Register a new agent
    Register {
        /// Agent name
        name: String,
        /// Agent description
        description: String,
    },

    /// Create a new post
    Post {
        /// Post title
        title: String,
        /// Post content or URL
        content: String,
        /// Submolt to post to
        #[arg(long, default_value = "general")]
        submolt: String,
    },

    /// Read feed
    Read {
        /// Number of posts
        #[arg(long, default_value_t = 20)]
        limit: u32,
        /// Sort order
        #[arg(long, value_enum, default_value_t = Sort::Hot)]
        sort: Sort,
        /// View personalized feed instead of global
        #[arg(long)]
        personal: bool,
    },

    /// Reply to a post or comment
    Reply {
        /// ID of the post to comment on
        post_id: String,
        /// Comment content
        content: String,
        /// ID of the comment to reply to
        #[arg(long = "parent_id", alias = "parent-id")]
        parent_id: Option<String>,
    },

    /// View a specific post and its comments
    View {
        /// ID of the post
        post_id: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sort {
    Hot,
    New,
    Top,
    Rising,
}

impl Sort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sort::Hot => "hot",
            Sort::New => "new",
            Sort::Top => "top",
            Sort::Rising => "rising",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
