//! Termo - CLI
//!
//! Portuguese word game in the terminal, plus the JSON service behind the web UI.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::sync::Arc;
use termo::{
    commands::{evaluate_words, fallback_snapshot, load_dictionary, pick_word, run_play},
    config::Settings,
    dictionary::{DictionaryError, DictionarySnapshot, SnapshotCache},
    fetch::Fetcher,
    output::{print_dictionary_report, print_feedback, print_solution, print_word_check},
    server::{AppState, serve},
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "termo",
    about = "Portuguese Wordle-style word game with accent-insensitive scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    settings: Settings,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play,

    /// Score one guess against a solution
    Evaluate {
        /// The guessed word
        guess: String,

        /// The solution word
        solution: String,
    },

    /// Build the dictionary and print statistics
    Dictionary {
        /// Check whether a word is in the dictionary (accents ignored)
        #[arg(short, long)]
        check: Option<String>,
    },

    /// Pick a solution word and print it with its source
    Pick {
        /// Words to avoid, as if already played
        #[arg(short = 'x', long)]
        exclude: Vec<String>,
    },

    /// Run the HTTP service
    Serve,
}

fn init_tracing(default_directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    match &command {
        Commands::Serve => init_tracing("termo=info,tower_http=info,warn"),
        _ => init_tracing("termo=warn,warn"),
    }

    match command {
        Commands::Play => run_play_command(&cli.settings),
        Commands::Evaluate { guess, solution } => {
            let feedback = evaluate_words(&guess, &solution)
                .with_context(|| format!("cannot evaluate '{guess}' against '{solution}'"))?;
            print_feedback(&feedback);
            Ok(())
        }
        Commands::Dictionary { check } => run_dictionary_command(&cli.settings, check.as_deref()),
        Commands::Pick { exclude } => run_pick_command(&cli.settings, &exclude),
        Commands::Serve => run_serve_command(&cli.settings),
    }
}

/// Load the dictionary, or the fallback list when every source failed
fn dictionary_or_fallback(cache: &SnapshotCache) -> Arc<DictionarySnapshot> {
    match load_dictionary(cache) {
        Ok(snapshot) => snapshot,
        Err(DictionaryError::Empty) => {
            warn!("Dictionary unavailable, playing with the fallback list");
            Arc::new(fallback_snapshot())
        }
    }
}

fn run_play_command(settings: &Settings) -> Result<()> {
    let fetcher: Arc<dyn Fetcher> = settings.http_fetcher()?;
    let cache = settings.snapshot_cache(fetcher.clone());
    let snapshot = dictionary_or_fallback(&cache);
    let selector = settings.selector(fetcher);

    let summary = run_play(&selector, &snapshot, settings.games, &mut io::stdin().lock())
        .map_err(|e| anyhow::anyhow!(e))?;
    println!("Jogos: {}  Vitórias: {}", summary.games, summary.wins);
    Ok(())
}

fn run_dictionary_command(settings: &Settings, check: Option<&str>) -> Result<()> {
    let fetcher: Arc<dyn Fetcher> = settings.http_fetcher()?;
    let cache = settings.snapshot_cache(fetcher);
    let snapshot = load_dictionary(&cache)?;

    print_dictionary_report(&snapshot);
    if let Some(word) = check {
        println!();
        print_word_check(&snapshot, word);
    }
    Ok(())
}

fn run_pick_command(settings: &Settings, exclude: &[String]) -> Result<()> {
    let fetcher: Arc<dyn Fetcher> = settings.http_fetcher()?;
    let cache = settings.snapshot_cache(fetcher.clone());
    let snapshot = load_dictionary(&cache).unwrap_or_else(|e| {
        warn!(error = %e, "Dictionary unavailable, picking from the fallback list");
        Arc::new(DictionarySnapshot::empty())
    });

    let solution = pick_word(&settings.selector(fetcher), &snapshot, exclude)?;
    print_solution(&solution);
    Ok(())
}

fn run_serve_command(settings: &Settings) -> Result<()> {
    // Blocking HTTP clients must be created and dropped outside the async runtime
    let fetcher: Arc<dyn Fetcher> = settings.http_fetcher()?;
    let state = Arc::new(AppState {
        cache: Arc::new(settings.snapshot_cache(fetcher.clone())),
        selector: Arc::new(settings.selector(fetcher.clone())),
        lookup: Arc::new(settings.lookup_validator(fetcher)),
    });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let served = runtime.block_on(serve(
        Arc::clone(&state),
        settings.bind,
        settings.refresh_interval(),
    ));
    drop(runtime);
    drop(state);

    served.with_context(|| format!("server on {} failed", settings.bind))
}
