//! Polling watcher: follow a channel from the terminal.
//!
//! Lists channels once at startup, then re-fetches the channel's recent
//! window on a fixed interval and prints entries not yet displayed. There is
//! no push path; this is the polling read model end to end. A failed poll is
//! logged and skipped -- the next tick simply tries again.

use std::time::Duration;

use anyhow::Result;
use chrono::{Local, TimeZone};
use console::style;
use tracing::warn;

use parley_types::message::LogEntry;

use crate::state::AppState;

/// Poll a channel and print new messages until interrupted.
pub async fn watch(state: &AppState, channel: &str, interval_secs: u64) -> Result<()> {
    let channels = state.chat_service.list_channels().await?;
    println!();
    println!(
        "  Watching '{}' every {}s (channels: {})",
        style(channel).cyan(),
        interval_secs,
        if channels.is_empty() {
            "none registered".to_string()
        } else {
            channels.join(", ")
        }
    );
    println!("  {}", style("Press Ctrl+C to stop").dim());
    println!();

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
    // Snapshot reconciliation: messages at or before this timestamp have
    // already been printed. Raw (undecodable) entries only render on the
    // first snapshot since they carry no timestamp to reconcile on.
    let mut last_seen: i64 = 0;
    let mut first_snapshot = true;

    loop {
        ticker.tick().await;

        let entries = match state.chat_service.fetch_messages(Some(channel)).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(channel = %channel, error = %e, "poll failed, skipping tick");
                continue;
            }
        };

        for entry in &entries {
            match entry {
                LogEntry::Message(msg) => {
                    if msg.timestamp > last_seen {
                        println!("  {} {}: {}", dim_time(msg.timestamp), style(&msg.user).cyan(), msg.message);
                        last_seen = msg.timestamp;
                    }
                }
                LogEntry::Raw(raw) => {
                    if first_snapshot {
                        println!("  {} {}", style("??:??:??").dim(), style(raw).dim());
                    }
                }
            }
        }

        first_snapshot = false;
    }
}

fn dim_time(timestamp_millis: i64) -> String {
    let formatted = Local
        .timestamp_millis_opt(timestamp_millis)
        .single()
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "??:??:??".to_string());
    style(formatted).dim().to_string()
}
