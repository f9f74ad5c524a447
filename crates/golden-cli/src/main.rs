//! Golden Catalogue CLI
//!
//! Command-line interface for Golden Catalogue - fan-fiction stories,
//! authors and read lists.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use golden_core::{
    Catalogue, CatalogueError, Category, Config, NewStory, Platform, Repository, SortKey,
    SortOrder, StorageError, StoryPatch, StoryQuery, StoryStatus,
};

mod commands;
mod editor;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "golden")]
#[command(about = "Golden Catalogue - your fan-fiction library")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to config file (default: ~/.config/golden-catalogue/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage stories
    Story {
        #[command(subcommand)]
        command: StoryCommands,
    },
    /// Manage authors
    Author {
        #[command(subcommand)]
        command: AuthorCommands,
    },
    /// Manage read lists
    #[command(name = "readlist", alias = "lists")]
    ReadList {
        #[command(subcommand)]
        command: ReadListCommands,
    },
    /// Show dashboard statistics
    Stats,
    /// Export the whole catalogue as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum StoryCommands {
    /// Add a new story
    #[command(alias = "create")]
    Add {
        /// Story title
        title: String,
        /// Author (id, id prefix or name)
        #[arg(short, long)]
        author: String,
        /// Where the story is published
        #[arg(long, default_value = "ao3")]
        source: Platform,
        /// Ship (repeatable)
        #[arg(long = "ship")]
        ships: Vec<String>,
        /// Genre or trope tag (repeatable)
        #[arg(long = "type")]
        types: Vec<String>,
        #[arg(short, long, default_value = "one-shot")]
        category: Category,
        #[arg(long, default_value_t = 1)]
        chapters: u32,
        #[arg(long, default_value = "completed")]
        status: StoryStatus,
        #[arg(long)]
        summary: Option<String>,
        /// Link to the story
        #[arg(short, long)]
        link: Option<String>,
    },
    /// List stories
    #[command(alias = "ls")]
    List {
        /// Search titles, author names and ships
        #[arg(short, long)]
        search: Option<String>,
        /// Only stories by this author
        #[arg(short, long)]
        author: Option<String>,
        #[arg(long)]
        source: Option<Platform>,
        #[arg(long)]
        status: Option<StoryStatus>,
        #[arg(short, long)]
        category: Option<Category>,
        /// Only stories in this read list
        #[arg(long)]
        list: Option<String>,
        /// Sort by: title, author, created, updated, chapters
        #[arg(long, default_value = "title")]
        sort: SortKey,
        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// Show story details
    Show {
        /// Story (id, id prefix or title)
        id: String,
    },
    /// Edit a story (prompts for fields when none are given)
    Edit {
        /// Story (id, id prefix or title)
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// Move the story to another author
        #[arg(short, long)]
        author: Option<String>,
        #[arg(long)]
        source: Option<Platform>,
        /// Replace ships (repeatable)
        #[arg(long = "ship")]
        ships: Option<Vec<String>>,
        /// Replace genre or trope tags (repeatable)
        #[arg(long = "type")]
        types: Option<Vec<String>>,
        #[arg(short, long)]
        category: Option<Category>,
        #[arg(long)]
        chapters: Option<u32>,
        #[arg(long)]
        status: Option<StoryStatus>,
        #[arg(long)]
        summary: Option<String>,
        #[arg(short, long, conflicts_with = "clear_link")]
        link: Option<String>,
        /// Remove the story link
        #[arg(long)]
        clear_link: bool,
    },
    /// Delete a story
    #[command(alias = "rm")]
    Delete {
        /// Story (id, id prefix or title)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Mark a story as read (moves it from Pending to Done)
    Read {
        /// Story (id, id prefix or title)
        id: String,
    },
}

#[derive(Subcommand)]
enum AuthorCommands {
    /// Add a new author
    #[command(alias = "create")]
    Add {
        /// Author name
        name: String,
        /// Social profile as platform:handle (repeatable)
        #[arg(short, long = "social")]
        socials: Vec<String>,
    },
    /// List authors
    #[command(alias = "ls")]
    List,
    /// Show an author with their stories
    Show {
        /// Author (id, id prefix or name)
        id: String,
    },
    /// Delete an author with no stories
    #[command(alias = "rm")]
    Delete {
        /// Author (id, id prefix or name)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Manage an author's social links
    Social {
        #[command(subcommand)]
        command: SocialCommands,
    },
}

#[derive(Subcommand)]
enum SocialCommands {
    /// Add a social link
    Add {
        /// Author (id, id prefix or name)
        author: String,
        /// Profile as platform:handle
        social: String,
        /// Explicit profile URL
        #[arg(short, long)]
        link: Option<String>,
    },
    /// Remove a social link
    #[command(alias = "rm")]
    Remove {
        /// Author (id, id prefix or name)
        author: String,
        /// Social link id, id prefix or platform
        social: String,
    },
}

#[derive(Subcommand)]
enum ReadListCommands {
    /// Create a read list
    Create {
        /// List name
        name: String,
        /// Display color, e.g. #8b5cf6
        #[arg(long)]
        color: Option<String>,
    },
    /// List all read lists
    #[command(alias = "ls")]
    List,
    /// Show the stories in a read list
    Show {
        /// Read list (id, id prefix or name)
        id: String,
    },
    /// Rename a read list
    Rename {
        /// Read list (id, id prefix or name)
        id: String,
        /// New name
        name: String,
        /// New color ("none" to clear)
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a read list (default lists are protected)
    #[command(alias = "rm")]
    Delete {
        /// Read list (id, id prefix or name)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Add a story to a read list
    Add {
        /// Read list (id, id prefix or name)
        list: String,
        /// Story (id, id prefix or title)
        story: String,
    },
    /// Remove a story from a read list
    Remove {
        /// Read list (id, id prefix or name)
        list: String,
        /// Story (id, id prefix or title)
        story: String,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, backend, seed_sample_data, username, email, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    if let Err(err) = run(cli, &output) {
        eprintln!("Error: {:?}", err);
        if let Some(hint) = storage_error(&err).and_then(StorageError::recovery_suggestion) {
            eprintln!("\nHint: {}", hint);
        }
        std::process::exit(1);
    }
}

/// The storage failure behind `err`, if any
fn storage_error(err: &anyhow::Error) -> Option<&StorageError> {
    err.chain().find_map(|cause| {
        cause
            .downcast_ref::<StorageError>()
            .or_else(|| match cause.downcast_ref::<CatalogueError>() {
                Some(CatalogueError::Storage(storage)) => Some(storage),
                _ => None,
            })
    })
}

fn run(cli: Cli, output: &Output) -> Result<()> {
    // Config commands don't need the catalogue
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), cli.config.as_ref(), output);
    }

    let config =
        Config::load_with_cli_override(cli.config.as_ref()).context("Failed to load configuration")?;
    init_logging(&config);
    debug!(data_dir = ?config.data_dir, backend = %config.backend, "opening catalogue");

    let mut catalogue =
        Catalogue::open_with_config(&config).context("Failed to open catalogue")?;

    match cli.command {
        Commands::Story { command } => handle_story_command(command, &mut catalogue, output),
        Commands::Author { command } => handle_author_command(command, &mut catalogue, output),
        Commands::ReadList { command } => {
            handle_read_list_command(command, &mut catalogue, output)
        }
        Commands::Stats => commands::stats::show(&catalogue, output),
        Commands::Export { output: path } => commands::export::export(&catalogue, path, output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_story_command<R: Repository>(
    command: StoryCommands,
    catalogue: &mut Catalogue<R>,
    output: &Output,
) -> Result<()> {
    match command {
        StoryCommands::Add {
            title,
            author,
            source,
            ships,
            types,
            category,
            chapters,
            status,
            summary,
            link,
        } => {
            let new = NewStory {
                title,
                author_id: author,
                source,
                ships,
                types,
                category,
                chapters_count: chapters,
                status,
                summary: summary.unwrap_or_default(),
                link,
            };
            commands::story::add(catalogue, new, output)
        }
        StoryCommands::List {
            search,
            author,
            source,
            status,
            category,
            list,
            sort,
            desc,
        } => {
            let query = StoryQuery {
                search,
                author_id: author,
                source,
                status,
                category,
                sort_by: sort,
                sort_order: if desc { SortOrder::Desc } else { SortOrder::Asc },
            };
            commands::story::list(catalogue, query, list, output)
        }
        StoryCommands::Show { id } => commands::story::show(catalogue, id, output),
        StoryCommands::Edit {
            id,
            title,
            author,
            source,
            ships,
            types,
            category,
            chapters,
            status,
            summary,
            link,
            clear_link,
        } => {
            let patch = StoryPatch {
                title,
                author_id: author,
                source,
                ships,
                types,
                category,
                chapters_count: chapters,
                status,
                summary,
                link: if clear_link { Some(None) } else { link.map(Some) },
            };
            commands::story::edit(catalogue, id, patch, output)
        }
        StoryCommands::Delete { id, yes } => commands::story::delete(catalogue, id, yes, output),
        StoryCommands::Read { id } => commands::story::read(catalogue, id, output),
    }
}

fn handle_author_command<R: Repository>(
    command: AuthorCommands,
    catalogue: &mut Catalogue<R>,
    output: &Output,
) -> Result<()> {
    match command {
        AuthorCommands::Add { name, socials } => {
            commands::author::add(catalogue, name, socials, output)
        }
        AuthorCommands::List => commands::author::list(catalogue, output),
        AuthorCommands::Show { id } => commands::author::show(catalogue, id, output),
        AuthorCommands::Delete { id, yes } => commands::author::delete(catalogue, id, yes, output),
        AuthorCommands::Social { command } => match command {
            SocialCommands::Add {
                author,
                social,
                link,
            } => commands::author::add_social(catalogue, author, social, link, output),
            SocialCommands::Remove { author, social } => {
                commands::author::remove_social(catalogue, author, social, output)
            }
        },
    }
}

fn handle_read_list_command<R: Repository>(
    command: ReadListCommands,
    catalogue: &mut Catalogue<R>,
    output: &Output,
) -> Result<()> {
    match command {
        ReadListCommands::Create { name, color } => {
            commands::readlist::create(catalogue, name, color, output)
        }
        ReadListCommands::List => commands::readlist::list(catalogue, output),
        ReadListCommands::Show { id } => commands::readlist::show(catalogue, id, output),
        ReadListCommands::Rename { id, name, color } => {
            commands::readlist::rename(catalogue, id, name, color, output)
        }
        ReadListCommands::Delete { id, yes } => {
            commands::readlist::delete(catalogue, id, yes, output)
        }
        ReadListCommands::Add { list, story } => {
            commands::readlist::add(catalogue, list, story, output)
        }
        ReadListCommands::Remove { list, story } => {
            commands::readlist::remove(catalogue, list, story, output)
        }
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

/// Initialize logging
///
/// Level comes from GOLDEN_LOG (default: warn). Logs go to stderr, or are
/// appended to config.log_file when set.
fn init_logging(config: &Config) {
    let log_level = std::env::var("GOLDEN_LOG").unwrap_or_else(|_| "warn".to_string());
    let env_filter = EnvFilter::new(format!("golden_core={},golden={}", log_level, log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    // Ignore errors if a subscriber is already installed
    match &config.log_file {
        Some(path) => match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                let _ = builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init();
            }
            Err(e) => {
                eprintln!("Warning: Could not open log file {:?}: {}", path, e);
                let _ = builder.with_writer(std::io::stderr).try_init();
            }
        },
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
}
