use anyhow::Result;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;
use thinker_core::{ExportFormat, ThoughtFilter};
use tracing_subscriber::EnvFilter;

mod commands;
mod context;

use commands::thought::{AddArgs, EditArgs};
use context::AppContext;

#[derive(Parser)]
#[command(name = "thinker")]
#[command(about = "Thinker - organize thoughts into sessions and export them", long_about = None)]
struct Cli {
    /// Session data file (overrides the configured one)
    #[arg(long, global = true, value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// Config file (default: <config dir>/thinker/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Act on this session without changing the saved selection
    #[arg(long, global = true, value_name = "ID")]
    session: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Add a thought to the current session
    Add {
        content: String,
        #[arg(short, long)]
        category: Option<String>,
        /// 1 (low) to 5 (high); out-of-range values are clamped
        #[arg(short, long, allow_negative_numbers = true)]
        priority: Option<i64>,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },
    /// List thoughts of the current session, highest priority first
    List(ListArgs),
    /// Mark a thought as completed
    Complete { id: String },
    /// Change fields of a thought
    Edit {
        id: String,
        #[arg(long)]
        content: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long, allow_negative_numbers = true)]
        priority: Option<i64>,
        /// Comma-separated tags; an empty string clears them
        #[arg(short, long)]
        tags: Option<String>,
    },
    /// Delete a thought
    Delete { id: String },
    /// Export the current session as text or markdown
    Export {
        /// `txt` or `md`
        #[arg(default_value = "txt", value_parser = ExportFormat::parse)]
        format: ExportFormat,
        /// Directory to write into (overrides the configured one)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Print the report instead of writing a file
        #[arg(long, conflicts_with = "output_dir")]
        stdout: bool,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Create a session and select it
    New {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List all sessions
    List,
    /// Select the session later commands act on
    Select { id: String },
    /// Delete a session and all of its thoughts
    Delete { id: String },
}

#[derive(Args)]
#[command(group(ArgGroup::new("status").args(["completed", "pending"])))]
struct ListArgs {
    /// Only thoughts in this category (case-insensitive)
    #[arg(short, long)]
    category: Option<String>,
    /// Only completed thoughts
    #[arg(long)]
    completed: bool,
    /// Only open thoughts
    #[arg(long)]
    pending: bool,
}

impl ListArgs {
    fn filter(&self) -> ThoughtFilter {
        let mut filter = ThoughtFilter::new();
        if let Some(category) = &self.category {
            filter = filter.category(category.as_str());
        }
        if self.completed {
            filter = filter.completed(true);
        } else if self.pending {
            filter = filter.completed(false);
        }
        filter
    }
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let ctx = AppContext::new(cli.config.as_deref(), cli.data_file, cli.session)?;

    match cli.command {
        Commands::Session { action } => match action {
            SessionAction::New { title, description } => {
                commands::session::new(&ctx, &title, &description)?
            }
            SessionAction::List => commands::session::list(&ctx)?,
            SessionAction::Select { id } => commands::session::select(&ctx, &id)?,
            SessionAction::Delete { id } => commands::session::delete(&ctx, &id)?,
        },
        Commands::Add {
            content,
            category,
            priority,
            tags,
        } => commands::thought::add(
            &ctx,
            AddArgs {
                content,
                category,
                priority,
                tags,
            },
        )?,
        Commands::List(args) => commands::thought::list(&ctx, args.filter())?,
        Commands::Complete { id } => commands::thought::complete(&ctx, &id)?,
        Commands::Edit {
            id,
            content,
            category,
            priority,
            tags,
        } => commands::thought::edit(
            &ctx,
            &id,
            EditArgs {
                content,
                category,
                priority,
                tags,
            },
        )?,
        Commands::Delete { id } => commands::thought::delete(&ctx, &id)?,
        Commands::Export {
            format,
            output_dir,
            stdout,
        } => commands::export::run(&ctx, format, output_dir, stdout)?,
    }

    Ok(())
}
