//! Postbox CLI
//!
//! Offline administration of a data directory. Opens the backing file
//! directly, so do not point it at a directory a running server owns.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use postbox::query::{search_posts, sort_posts};
use postbox::{NewPost, PostStore, PostUpdate, Result};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Postbox CLI
#[derive(Parser, Debug)]
#[command(name = "postbox-cli")]
#[command(about = "CLI for a Postbox data directory")]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./postbox_data")]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List posts, optionally sorted
    List {
        /// Sort field (title or content)
        #[arg(long)]
        sort: Option<String>,

        /// Sort direction (asc or desc)
        #[arg(long)]
        direction: Option<String>,
    },

    /// Show one post
    Show {
        /// Post id
        id: u64,
    },

    /// Create a post
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        content: String,
    },

    /// Update a post's title and/or content
    Update {
        /// Post id
        id: u64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a post
    Del {
        /// Post id
        id: u64,
    },

    /// Search titles and/or contents
    Search {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Insert the sample posts into an empty store
    Seed,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let store = PostStore::open_path(args.data_dir.as_ref())?;

    match args.command {
        Commands::List { sort, direction } => {
            let posts = sort_posts(store.list(), sort.as_deref(), direction.as_deref())?;
            print_json(&posts)
        }
        Commands::Show { id } => print_json(&store.get(id)?),
        Commands::Create { title, content } => {
            print_json(&store.create(NewPost::new(title, content))?)
        }
        Commands::Update { id, title, content } => {
            print_json(&store.update(id, PostUpdate { title, content })?)
        }
        Commands::Del { id } => {
            store.delete(id)?;
            println!("Post with id {} has been deleted successfully.", id);
            Ok(())
        }
        Commands::Search { title, content } => {
            let posts = search_posts(&store.list(), title.as_deref(), content.as_deref());
            print_json(&posts)
        }
        Commands::Seed => {
            let count = store.seed(postbox::post::sample_posts())?;
            println!("Seeded {} posts", count);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
