/// Command line entry point for the habit tracker store
///
/// This file sets up logging, parses command line arguments, and runs one
/// maintenance command against a SQLite-backed store: inspect, migrate,
/// export/import, clear, print week ranges or schemas, or probe an API.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::info;

use habit_tracker_store::{
    days_in_week_starting, diagnostics, open_store, parse_date, AppError, AppSettings, Category,
    Collection, Habit, HabitLog, HabitStore, SqliteMedium, StoreConfig, StoreSnapshot, UserBadge,
};

/// Get the default database path with robust fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        dirs::home_dir().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
        dirs::data_dir().map(|mut p| {
            p.push("habit_tracker");
            p
        }),
        dirs::config_dir().map(|mut p| {
            p.push("habit_tracker");
            p
        }),
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if let Ok(()) = std::fs::create_dir_all(potential_path) {
            // Test if we can write to this directory
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(potential_path.join("store.db"));
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habit_tracker");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("store.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the habit tracker store
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Key namespace, e.g. "habit-tracker"
    #[arg(long, default_value = habit_tracker_store::storage::config::DEFAULT_NAMESPACE)]
    namespace: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one stored collection as JSON
    Show { collection: Collection },

    /// Copy legacy per-user keys into empty canonical keys
    Migrate,

    /// Write every collection to a JSON snapshot
    Export {
        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Overwrite every collection from a JSON snapshot
    Import { file: PathBuf },

    /// Remove every canonical key (legacy keys are kept)
    Clear,

    /// Print the seven dates of a week
    Week {
        /// Any date in the week, YYYY-MM-DD; today when omitted
        #[arg(long)]
        date: Option<String>,

        /// First day of the week (0 = Sunday); stored settings when omitted
        #[arg(long)]
        week_starts_on: Option<u8>,
    },

    /// Print the JSON schema of a stored collection
    Schema { collection: Collection },

    /// Check that an API answers GET /health and POST /auth/login
    Probe {
        /// Base URL, e.g. http://localhost:3001/api
        base_url: String,

        #[arg(long, default_value_t = 5)]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker_store={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for command output
        .init();

    let config = StoreConfig::new(args.namespace.clone());

    match args.command {
        Command::Schema { collection } => print_schema(collection)?,
        Command::Probe {
            base_url,
            timeout_secs,
        } => {
            let report = diagnostics::probe_api(&base_url, Duration::from_secs(timeout_secs)).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.all_reachable() {
                std::process::exit(1);
            }
        }
        command => {
            let db_path = match args.database {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        if !parent.as_os_str().is_empty() && !parent.exists() {
                            std::fs::create_dir_all(parent)?;
                        }
                    }
                    path
                }
                None => get_default_database_path()?,
            };

            info!("Using database at: {}", db_path.display());
            let store = open_store(&db_path, config)?;
            run_store_command(&store, command)?;
        }
    }

    Ok(())
}

fn run_store_command(store: &HabitStore<SqliteMedium>, command: Command) -> Result<(), AppError> {
    match command {
        Command::Show { collection } => {
            let json = match collection {
                Collection::Categories => serde_json::to_string_pretty(&store.get_categories()?)?,
                Collection::Habits => serde_json::to_string_pretty(&store.get_habits()?)?,
                Collection::Logs => serde_json::to_string_pretty(&store.get_logs()?)?,
                Collection::Badges => serde_json::to_string_pretty(&store.get_badges()?)?,
                Collection::Settings => serde_json::to_string_pretty(&store.get_settings()?)?,
            };
            println!("{}", json);
        }
        Command::Migrate => {
            // `open_store` already ran a pass; report it along with a fresh one
            let mut report = store.migration_report().clone();
            report.migrated.extend(store.migrate_legacy_keys()?.migrated);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Export { output } => {
            let json = serde_json::to_string_pretty(&store.export()?)?;
            match output {
                Some(path) => std::fs::write(path, json)?,
                None => println!("{}", json),
            }
        }
        Command::Import { file } => {
            let text = std::fs::read_to_string(file)?;
            let snapshot: StoreSnapshot = serde_json::from_str(&text)?;
            store.import(&snapshot)?;
            info!(
                "Imported {} habits, {} logs",
                snapshot.habits.len(),
                snapshot.logs.len()
            );
        }
        Command::Clear => store.clear()?,
        Command::Week {
            date,
            week_starts_on,
        } => {
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => Local::now().date_naive(),
            };
            let week_starts_on = match week_starts_on {
                Some(day) => day,
                None => store.get_settings()?.week_starts_on,
            };
            for day in days_in_week_starting(date, week_starts_on) {
                println!("{}", day);
            }
        }
        // Handled in `main` before a store is opened
        Command::Schema { .. } | Command::Probe { .. } => {}
    }

    Ok(())
}

fn print_schema(collection: Collection) -> Result<(), AppError> {
    let schema = match collection {
        Collection::Categories => schemars::schema_for!(Vec<Category>),
        Collection::Habits => schemars::schema_for!(Vec<Habit>),
        Collection::Logs => schemars::schema_for!(Vec<HabitLog>),
        Collection::Badges => schemars::schema_for!(Vec<UserBadge>),
        Collection::Settings => schemars::schema_for!(AppSettings),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
