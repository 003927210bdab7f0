//! Command-line interface for the classroom platform.
//!
//! Commands:
//! - migrate: Apply the database schema
//! - seed: Insert sample teachers and students
//! - add-teacher / add-student: Provision identities
//! - register: Register students to a teacher
//! - common-students: List students shared by all given teachers
//! - suspend: Suspend a student
//! - notify: Resolve the recipients of a notification
//!
//! Configuration via environment:
//! - DATABASE_URL, or DB_HOST / DB_PORT / DB_USER / DB_PASSWORD / DB_NAME
//! - LOG_LEVEL: Log filter when RUST_LOG is unset (default: warn)

mod commands;

use clap::{Parser, Subcommand};
use classroom_store::{Store, StoreConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::{
    common::CommonStudentsArgs, notify::NotifyArgs, provision::ProvisionArgs,
    register::RegisterArgs, seed::SeedArgs, suspend::SuspendArgs,
};

/// Classroom platform CLI
///
/// Manage teacher/student registrations and resolve notification
/// recipients. Prints JSON by default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "classroom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Database connection URL
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    database_url: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply database migrations
    Migrate,

    /// Insert sample teachers and students
    Seed(SeedArgs),

    /// Create a teacher
    AddTeacher(ProvisionArgs),

    /// Create a student
    AddStudent(ProvisionArgs),

    /// Register students to a teacher
    Register(RegisterArgs),

    /// List students registered to every given teacher
    CommonStudents(CommonStudentsArgs),

    /// Suspend a student
    Suspend(SuspendArgs),

    /// List the recipients of a notification
    Notify(NotifyArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let store = match connect(cli.database_url.clone()).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let human = cli.human;
    let result = match cli.command {
        Commands::Migrate => commands::migrate::execute(&store, human).await,
        Commands::Seed(args) => commands::seed::execute(&store, human, args).await,
        Commands::AddTeacher(args) => {
            commands::provision::execute_teacher(&store, human, args).await
        }
        Commands::AddStudent(args) => {
            commands::provision::execute_student(&store, human, args).await
        }
        Commands::Register(args) => commands::register::execute(&store, human, args).await,
        Commands::CommonStudents(args) => commands::common::execute(&store, human, args).await,
        Commands::Suspend(args) => commands::suspend::execute(&store, human, args).await,
        Commands::Notify(args) => commands::notify::execute(&store, human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber. Logs go to stderr so JSON output on
/// stdout stays machine-readable.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the store configuration, letting `--database-url` override the
/// environment.
///
/// Connecting never changes the schema; only the `migrate` command does.
fn store_config(database_url: Option<String>) -> anyhow::Result<StoreConfig> {
    let config = StoreConfig::from_lookup(|key| match key {
        "DATABASE_URL" => database_url.clone(),
        _ => std::env::var(key).ok(),
    })?;

    Ok(StoreConfig {
        run_migrations: false,
        ..config
    })
}

async fn connect(database_url: Option<String>) -> anyhow::Result<Store> {
    Ok(Store::connect(store_config(database_url)?).await?)
}
