// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Game commands against a user's backlog

use crate::output::{self, OutputFormat};
use backlog_core::{GameDraft, SortDirection, SortKey, ValidationPolicy};
use backlog_storage::{BacklogStore, UserSession};
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct GameArgs {
    #[command(subcommand)]
    pub command: GameCommand,
}

#[derive(Subcommand)]
pub enum GameCommand {
    /// Add a game to a user's backlog
    Add {
        /// Game title
        title: String,
        /// Owning user
        #[arg(long)]
        user: String,
        /// Genre label
        #[arg(long)]
        genre: String,
        /// Release year
        #[arg(long)]
        year: i32,
        /// Date added (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Estimated time to beat (HH:MM or whole hours)
        #[arg(long = "time-to-beat")]
        time_to_beat: Option<String>,
        /// Priority: low, medium, high or 1..=3 (defaults to low)
        #[arg(long)]
        priority: Option<String>,
    },
    /// Remove a game from a user's backlog
    Remove {
        /// Game title (case-insensitive)
        title: String,
        /// Owning user
        #[arg(long)]
        user: String,
    },
    /// List a user's backlog, optionally re-sorting it
    List {
        /// Owning user
        #[arg(long)]
        user: String,
        /// Sort key: title, genre, year, date, time or priority
        #[arg(long)]
        sort: Option<SortKey>,
        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

pub fn handle(args: GameArgs, store: &BacklogStore) -> anyhow::Result<()> {
    let policy = ValidationPolicy::default();

    match args.command {
        GameCommand::Add {
            title,
            user,
            genre,
            year,
            date,
            time_to_beat,
            priority,
        } => {
            let mut session = UserSession::load(store, &user)?;
            let draft = GameDraft {
                title: title.clone(),
                genre,
                release_year: year,
                date_added: date,
                time_to_beat,
                priority,
            };
            session.add_game(draft, &policy)?;
            println!("Added '{}' to {}'s backlog", title.trim(), user);
        }

        GameCommand::Remove { title, user } => {
            let mut session = UserSession::load(store, &user)?;
            let removed = session.remove_game(&title)?;
            println!("Removed '{}' from {}'s backlog", removed.title, user);
        }

        GameCommand::List {
            user,
            sort,
            desc,
            format,
        } => {
            let mut session = UserSession::load(store, &user)?;
            if let Some(key) = sort {
                let direction = if desc {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                };
                // The sorted order is persisted as the new display order
                session.sort(key, direction)?;
            }
            output::print_games(session.backlog().games(), format)?;
        }
    }
    Ok(())
}
