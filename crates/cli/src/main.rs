use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cli::prompt::TerminalPrompt;
use cli::report::Reporter;
use dialoguer::console::Term;
use performer_import_core::config::{self, AppConfig, Overrides};
use performer_import_core::pipeline::{self, AssumeYes, ConfirmPrompt, Importer};
use performer_import_core::scanner::{self, Blacklist};
use std::io;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import { source, options } => {
            let cfg = config::load_with(cli.config.as_deref(), &options.overrides(&source))?;
            run_import(cfg, options.json).await
        }
        Commands::List { source, json } => {
            let overrides = Overrides {
                root: source.root,
                blacklist: source.blacklist,
                ..Overrides::default()
            };
            let cfg = config::load_with(cli.config.as_deref(), &overrides)?;
            run_list(&cfg, json)
        }
    }
}

#[derive(Parser)]
#[command(name = "performer-import")]
#[command(about = "Create Stash performers from a folder-per-performer library", long_about = None)]
struct Cli {
    /// Path to config TOML
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create missing performers for each folder under the root
    Import {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        options: ImportArgs,
    },
    /// Show the performer folders that would be considered, without contacting Stash
    List {
        #[command(flatten)]
        source: SourceArgs,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Performer root directory
    #[arg(long)]
    root: Option<String>,
    /// Blacklisted name fragments (comma-separated), replaces the configured list
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    blacklist: Option<Vec<String>>,
}

#[derive(Args)]
struct ImportArgs {
    /// Stash GraphQL endpoint
    #[arg(long)]
    endpoint: Option<String>,
    /// Do not ask before adding each performer
    #[arg(short = 'y', long)]
    yes: bool,
    /// Queue an auto-tag job for every performer
    #[arg(long, conflicts_with = "no_autotag")]
    autotag: bool,
    /// Never queue auto-tag jobs
    #[arg(long)]
    no_autotag: bool,
    /// Leave the terminal contents alone at startup
    #[arg(long)]
    no_clear: bool,
    /// Output JSON summary
    #[arg(long)]
    json: bool,
}

impl ImportArgs {
    fn overrides(&self, source: &SourceArgs) -> Overrides {
        Overrides {
            root: source.root.clone(),
            endpoint: self.endpoint.clone(),
            blacklist: source.blacklist.clone(),
            skip_confirmation: self.yes.then_some(true),
            autotag: match (self.autotag, self.no_autotag) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            clear_screen: self.no_clear.then_some(false),
        }
    }
}

async fn run_import(cfg: AppConfig, json: bool) -> Result<()> {
    if cfg.import.clear_screen {
        let term = Term::stdout();
        if term.is_term() {
            term.clear_screen().context("failed to clear terminal")?;
        }
    }

    info!(
        root = %cfg.performers.root,
        endpoint = %cfg.stash.endpoint,
        autotag = cfg.import.autotag,
        "starting import"
    );
    let importer = Importer::from_config(&cfg);
    let prompt: Box<dyn ConfirmPrompt> = if cfg.import.skip_confirmation {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalPrompt)
    };

    let mut reporter = Reporter::new(json, io::stdout(), io::stderr());
    let summary = pipeline::run_from_root(
        &importer,
        Path::new(&cfg.performers.root),
        prompt.as_ref(),
        |outcome| {
            if let Err(e) = reporter.outcome(outcome) {
                warn!(error = %e, "failed to write status line");
            }
        },
    )
    .await?;

    reporter.finish(&summary)
}

fn run_list(cfg: &AppConfig, json: bool) -> Result<()> {
    let names = scanner::list_subdirectories(Path::new(&cfg.performers.root))?;
    let blacklist = Blacklist::new(&cfg.performers.blacklist);
    if json {
        let rows: Vec<serde_json::Value> = names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "name": name,
                    "blacklisted": blacklist.matches(name),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for name in &names {
            if blacklist.matches(name) {
                println!("{name} (blacklisted)");
            } else {
                println!("{name}");
            }
        }
        println!("{} folder(s) under {}", names.len(), cfg.performers.root);
    }
    Ok(())
}
