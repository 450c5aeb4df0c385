//! Command-line interface definition

use auth::OAuthProvider;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "medialogger", version, about = "Log the movies and books you finish, with a rating")]
pub struct Cli {
    /// Backend base URL, overriding configuration
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show whether a session is stored
    Status,
    /// List your entries
    List,
    /// Log a new movie or book
    Add {
        #[arg(long)]
        title: String,
        /// movie or book
        #[arg(long = "type", default_value = "movie")]
        media_type: String,
        /// Whole number from 1 to 5
        #[arg(long)]
        rating: String,
    },
    /// Change an entry; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long = "type")]
        media_type: Option<String>,
        #[arg(long)]
        rating: Option<String>,
    },
    /// Delete an entry
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the page that starts a social login
    SocialLogin {
        #[arg(default_value = "google")]
        provider: OAuthProvider,
    },
    /// Finish a social login from the final redirect URL
    CompleteLogin { url: String },
}
