//! Channel management CLI subcommands.

use anyhow::Result;
use clap::Subcommand;
use comfy_table::{presets, Cell, ContentArrangement, Table};
use console::style;

use crate::state::AppState;

/// Channel subcommands.
#[derive(Subcommand)]
pub enum ChannelCommand {
    /// List all registered channels.
    #[command(alias = "ls")]
    List,

    /// Register a new channel.
    Create {
        /// Channel name (must be non-empty after trimming).
        name: String,
    },

    /// Delete a channel and discard its messages.
    #[command(alias = "rm")]
    Delete {
        /// Channel name.
        name: String,
    },
}

/// Handle a channel subcommand.
pub async fn handle_channel_command(
    cmd: ChannelCommand,
    state: &AppState,
    json: bool,
) -> Result<()> {
    match cmd {
        ChannelCommand::List => list_channels(state, json).await,
        ChannelCommand::Create { name } => create_channel(state, &name, json).await,
        ChannelCommand::Delete { name } => delete_channel(state, &name, json).await,
    }
}

async fn list_channels(state: &AppState, json: bool) -> Result<()> {
    let channels = state.chat_service.list_channels().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&channels)?);
        return Ok(());
    }

    if channels.is_empty() {
        println!();
        println!("  No channels registered yet.");
        println!(
            "  Create one with {}",
            style("parley channels create <name>").cyan()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Channel")]);
    for name in &channels {
        table.add_row(vec![Cell::new(name)]);
    }

    println!();
    println!("{table}");
    println!();
    Ok(())
}

async fn create_channel(state: &AppState, name: &str, json: bool) -> Result<()> {
    let channel = state.chat_service.create_channel(name).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "channel": channel }))?
        );
    } else {
        println!();
        println!(
            "  {} Channel '{}' registered",
            style("ok").green(),
            style(&channel).cyan()
        );
        println!();
    }

    Ok(())
}

async fn delete_channel(state: &AppState, name: &str, json: bool) -> Result<()> {
    state.chat_service.delete_channel(name).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "deleted": name }))?
        );
    } else {
        println!();
        println!(
            "  {} Channel '{}' deleted",
            style("ok").green(),
            style(name).cyan()
        );
        println!();
    }

    Ok(())
}
