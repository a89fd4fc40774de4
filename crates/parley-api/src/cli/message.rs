//! Message posting CLI subcommand.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Post a message to a channel.
pub async fn post_message(
    state: &AppState,
    channel: &str,
    user: &str,
    message: &str,
    avatar: Option<String>,
    json: bool,
) -> Result<()> {
    let msg = state
        .chat_service
        .post_message(channel, user, message, avatar)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&msg)?);
    } else {
        println!();
        println!(
            "  {} Posted to '{}' as {}",
            style("ok").green(),
            style(channel).cyan(),
            style(user).cyan()
        );
        println!();
    }

    Ok(())
}
