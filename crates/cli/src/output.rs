// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use backlog_core::GameRecord;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print a backlog in the specified format
pub fn print_games(games: &[GameRecord], format: OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => {
            if games.is_empty() {
                println!("Backlog is empty");
                return Ok(());
            }
            println!(
                "{:<30} {:<15} {:<6} {:<12} {:<10} PRIORITY",
                "TITLE", "GENRE", "YEAR", "ADDED", "TIME"
            );
            for game in games {
                let time = if game.time_to_beat.is_unknown() {
                    "-".to_string()
                } else {
                    game.time_to_beat.to_string()
                };
                println!(
                    "{:<30} {:<15} {:<6} {:<12} {:<10} {}",
                    truncate(&game.title, 30),
                    truncate(&game.genre, 15),
                    game.release_year,
                    game.date_added,
                    time,
                    game.priority
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(games)?);
        }
    }
    Ok(())
}

fn truncate(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
