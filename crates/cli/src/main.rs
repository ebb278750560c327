use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use data_loader::{InputHeader, write_synthetic_input};
use engine::{EngineConfig, RecommendationEngine};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// BookRecs - personalized book recommendations from sparse ratings
#[derive(Parser)]
#[command(name = "book-recs")]
#[command(about = "Book recommendation engine using latent-factor matrix factorization", long_about = None)]
struct Cli {
    /// JSON config file (flags below override its values)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ConfigOverrides {
    /// Seed for reproducible runs (default: OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of training epochs
    #[arg(long, global = true)]
    epochs: Option<usize>,

    /// Latent features per user/book
    #[arg(long, global = true)]
    features: Option<usize>,

    /// SGD learning rate
    #[arg(long, global = true)]
    learning_rate: Option<f64>,

    /// Recommendations per user
    #[arg(long, global = true)]
    top_k: Option<usize>,

    /// Rank users in parallel
    #[arg(long, global = true)]
    parallel: bool,

    /// Stop after this many epochs without improvement
    #[arg(long, global = true)]
    early_stop_patience: Option<usize>,

    /// Smallest error drop that counts as an improvement
    #[arg(long, global = true)]
    early_stop_min_delta: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on a rating stream and print recommendations for every user
    Recommend {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Train on a rating stream and show the per-epoch error
    Train {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a synthetic rating stream
    Generate {
        /// Number of ratings (distinct user/book pairs)
        #[arg(long, default_value = "60000")]
        ratings: usize,

        /// Number of users
        #[arg(long, default_value = "500")]
        users: usize,

        /// Number of books
        #[arg(long, default_value = "200")]
        books: usize,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr: stdout carries the recommendations
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(cli.config.as_deref(), &cli.overrides)?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend { input, output } => {
            handle_recommend(config, input.as_deref(), output.as_deref())?
        }
        Commands::Train { input, json } => handle_train(config, input.as_deref(), json)?,
        Commands::Generate {
            ratings,
            users,
            books,
            output,
        } => handle_generate(&config, ratings, users, books, output.as_deref())?,
    }

    Ok(())
}

/// Start from the config file (or defaults) and apply command-line overrides
fn build_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };

    let training = &mut config.training;
    if overrides.seed.is_some() {
        training.seed = overrides.seed;
    }
    if let Some(epochs) = overrides.epochs {
        training.max_epochs = epochs;
    }
    if let Some(features) = overrides.features {
        training.n_features = features;
    }
    if let Some(learning_rate) = overrides.learning_rate {
        training.learning_rate = learning_rate;
    }
    if overrides.early_stop_patience.is_some() || overrides.early_stop_min_delta.is_some() {
        let mut early_stop = training.early_stop.unwrap_or_default();
        if let Some(patience) = overrides.early_stop_patience {
            early_stop.patience = patience;
        }
        if let Some(min_delta) = overrides.early_stop_min_delta {
            early_stop.min_delta = min_delta;
        }
        training.early_stop = Some(early_stop);
    }

    if let Some(top_k) = overrides.top_k {
        config.top_k = top_k;
    }
    if overrides.parallel {
        config.parallel = true;
    }

    Ok(config)
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Handle the 'recommend' command
fn handle_recommend(config: EngineConfig, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let engine = RecommendationEngine::new(config);
    let reader = open_input(input)?;
    let mut writer = open_output(output)?;

    let summary = engine.run(reader, &mut writer)?;
    info!(
        "Done: {} users, {} books, {} ratings, final training error {:?}",
        summary.users,
        summary.items,
        summary.ratings,
        summary.report.final_error()
    );
    Ok(())
}

/// Handle the 'train' command
fn handle_train(config: EngineConfig, input: Option<&Path>, json: bool) -> Result<()> {
    let engine = RecommendationEngine::new(config);

    let start = Instant::now();
    let store = engine.load(open_input(input)?)?;
    let (_model, report) = engine.train(&store)?;
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let (users, items, ratings) = store.counts();
    println!("{}", "Training Report:".bold().blue());
    println!(
        "{}{} users, {} books, {} ratings",
        "• ".green(),
        users,
        items,
        ratings
    );
    println!("{:>7}  {:>16}  {:>10}", "Epoch", "Total error", "Time (ms)");
    for epoch in &report.epochs {
        println!(
            "{:>7}  {:>16.6}  {:>10}",
            epoch.epoch.to_string().cyan(),
            epoch.total_error,
            epoch.elapsed_ms
        );
    }

    if let (Some(first), Some(last)) = (report.first_error(), report.final_error()) {
        let change = if last <= first {
            format!("{:.6} -> {:.6}", first, last).green()
        } else {
            format!("{:.6} -> {:.6}", first, last).red()
        };
        println!("{}Error: {}", "• ".green(), change);
    }
    if report.stopped_early {
        println!("{}Stopped early after {} epochs", "• ".yellow(), report.epochs_run());
    }
    println!("{} Trained in {:?}", "✓".green(), elapsed);
    Ok(())
}

/// Handle the 'generate' command
fn handle_generate(
    config: &EngineConfig,
    ratings: usize,
    users: usize,
    books: usize,
    output: Option<&Path>,
) -> Result<()> {
    let header = InputHeader {
        n_ratings: ratings,
        n_users: users,
        n_items: books,
    };
    let mut rng = model::build_rng(config.training.seed);
    let mut writer = open_output(output)?;

    write_synthetic_input(&mut writer, &header, &mut rng).context("Failed to generate input")?;
    writer.flush()?;

    info!("Generated {} ratings for {} users and {} books", ratings, users, books);
    Ok(())
}
