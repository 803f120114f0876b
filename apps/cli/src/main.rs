//! # Ventas Text Menu Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr, `warn` unless `RUST_LOG` says otherwise)
//! 2. Resolve the database path (`VENTAS_DB_PATH` or `./ventas.db`)
//! 3. Open the database & run migrations
//! 4. Run the menu over stdin/stdout
//! 5. Close the database
//!
//! The menu takes no command-line flags. `VENTAS_DB_PATH` and `RUST_LOG` are
//! the only environment variables read, and both are optional.

use std::io;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

use ventas_cli::{ShellResult, TextShell};
use ventas_db::{Database, DbConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Text shell aborted");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ShellResult<()> {
    let db = Database::new(DbConfig::from_env()).await?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = TextShell::new(db.clone(), stdin.lock(), stdout.lock());

    let result = shell.run().await;
    db.close().await;
    result
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
/// - `RUST_LOG=debug` - Show every store call
/// - Default: WARN level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
