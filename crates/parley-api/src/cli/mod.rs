//! CLI command definitions for the `parley` binary.
//!
//! Uses clap derive macros for argument parsing. Verb-noun pattern:
//! `parley channels list`, `parley post`, `parley watch`, `parley serve`.

pub mod channel;
pub mod message;
pub mod watch;

use clap::{Parser, Subcommand};

/// Multi-channel text chat backed by a keyed store.
#[derive(Parser)]
#[command(name = "parley", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Post a message to a channel.
    Post {
        /// Channel to post to.
        channel: String,

        /// Sender name.
        user: String,

        /// Message text.
        message: String,

        /// Avatar URL to attach.
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Manage channels.
    Channels {
        #[command(subcommand)]
        action: channel::ChannelCommand,
    },

    /// Follow a channel by polling for new messages.
    Watch {
        /// Channel to follow.
        #[arg(default_value = "general")]
        channel: String,

        /// Poll interval in seconds.
        #[arg(short, long, default_value = "2")]
        interval: u64,
    },
}
