use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use backoffice_query::{
    config::Config,
    range::QuickRange,
    store::{QueryParams, QueryStateStore, SqliteStore},
    SchemaCatalog,
};

/// Query-state toolbox for the back-office dashboard.
#[derive(Parser)]
#[command(name = "backoffice-query", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a quick-range keyword to start/end dates
    Resolve {
        /// Keyword: today, yesterday, week, month, last7, last30
        keyword: String,
        /// Reference date (YYYY-MM-DD), defaults to the local date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print a page's filter schema as JSON
    Schema {
        /// Page identifier (e.g. bets, players)
        page: String,
    },
    /// List registered report pages
    Pages,
    /// Inspect or mutate remembered filter state
    State {
        #[command(subcommand)]
        action: StateAction,
    },
}

#[derive(Subcommand)]
enum StateAction {
    /// Print a page's remembered filters
    Get {
        /// Session identifier
        #[arg(long)]
        session: String,
        /// Page identifier
        #[arg(long)]
        page: String,
    },
    /// Save filter parameters for a page
    Set {
        /// Session identifier; generated when omitted
        #[arg(long)]
        session: Option<String>,
        /// Page identifier
        #[arg(long)]
        page: String,
        /// Parameters as a JSON object of string values
        params: String,
    },
    /// Forget a page's remembered filters
    Clear {
        /// Session identifier
        #[arg(long)]
        session: String,
        /// Page identifier
        #[arg(long)]
        page: String,
    },
    /// Drop everything a session remembered
    End {
        /// Session identifier
        #[arg(long)]
        session: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    let cli = Cli::parse();

    match cli.command {
        Command::Resolve { keyword, date } => {
            let quick_range = QuickRange::parse(&keyword);
            let range = match date {
                Some(reference) => quick_range.resolve(reference, config.query.week_start),
                None => quick_range.resolve_now(config.query.week_start),
            };
            println!("{}", serde_json::to_string_pretty(&range)?);
        }
        Command::Schema { page } => {
            let catalog = SchemaCatalog::new();
            match catalog.get(&page) {
                Some(schema) => println!("{}", serde_json::to_string_pretty(&schema)?),
                None => {
                    eprintln!("Unknown page: {}", page);
                    std::process::exit(1);
                }
            }
        }
        Command::Pages => {
            let catalog = SchemaCatalog::new();
            println!("{}", serde_json::to_string_pretty(&catalog.summaries())?);
        }
        Command::State { action } => {
            let backend = SqliteStore::new(&config.database).await?;
            info!(path = %config.database.path.display(), "Database initialized");
            let store = QueryStateStore::with_namespace(backend, config.query.namespace.clone());

            match action {
                StateAction::Get { session, page } => {
                    let params = store.restore(&session, &page).await.into_params();
                    println!("{}", serde_json::to_string_pretty(&params)?);
                }
                StateAction::Set {
                    session,
                    page,
                    params,
                } => {
                    let session = session.unwrap_or_else(|| Uuid::new_v4().to_string());
                    let params: QueryParams = serde_json::from_str(&params)?;
                    let outcome = store.save(&session, &page, &params).await;
                    if outcome.is_degraded() {
                        anyhow::bail!("storage degraded, filters not saved");
                    }
                    println!("{}", serde_json::json!({ "session": session, "page": page }));
                }
                StateAction::Clear { session, page } => {
                    store.clear(&session, &page).await;
                }
                StateAction::End { session } => {
                    store.end_session(&session).await;
                }
            }
        }
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        backoffice_query::config::LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        backoffice_query::config::LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
