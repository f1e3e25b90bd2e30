// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! backlog - personal video-game backlog manager CLI

mod commands;
mod output;

use anyhow::Result;
use backlog_storage::BacklogStore;
use clap::{Parser, Subcommand};
use commands::{game, user};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "backlog",
    version,
    about = "Personal video-game backlog manager"
)]
struct Cli {
    /// Base directory for persisted backlogs
    #[arg(long, global = true, default_value = ".backlog")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User profile management
    User(user::UserArgs),
    /// Game management within a user's backlog
    Game(game::GameArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(data_dir = %cli.data_dir.display(), "opening store");
    let store = BacklogStore::open(&cli.data_dir)?;

    match cli.command {
        Commands::User(args) => user::handle(args, &store),
        Commands::Game(args) => game::handle(args, &store),
    }
}
