// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User profile commands

use backlog_storage::{BacklogStore, UserSession};
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Create a new user profile
    Create {
        /// Username (must not already be taken)
        name: String,
    },
    /// List known users
    List,
    /// Delete a user along with their persisted backlog
    Delete {
        /// Username to delete
        name: String,
    },
}

pub fn handle(args: UserArgs, store: &BacklogStore) -> anyhow::Result<()> {
    match args.command {
        UserCommand::Create { name } => {
            UserSession::create(store, &name)?;
            println!("Created user profile '{}'", name);
        }
        UserCommand::List => {
            let users = store.list_users()?;
            if users.is_empty() {
                println!("No users");
            } else {
                for user in users {
                    println!("{}", user);
                }
            }
        }
        UserCommand::Delete { name } => {
            store.delete_user(&name)?;
            println!("Deleted user '{}'", name);
        }
    }
    Ok(())
}
