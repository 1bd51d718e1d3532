//! Command execution against the results store.

use std::path::Path;

use crate::commands::Command;
use crate::formatter::Formatter;
use thiserror::Error;
use unires_client::{Client, ClientConfig};

/// Execution errors.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// Invalid command arguments.
    #[error("{0}")]
    Usage(#[from] unires_core::Error),

    /// Store or pool failure.
    #[error("{0}")]
    Client(#[from] unires_client::Error),
}

impl ExecuteError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExecuteError::Usage(_) => 2,
            ExecuteError::Client(e) if e.is_not_found() => 3,
            ExecuteError::Client(_) => 1,
        }
    }
}

/// Open a client suited to `command`: read-write for `init`, read-only otherwise.
///
/// Arguments are validated first so usage errors win over store errors.
pub async fn open(db: &Path, command: &Command) -> Result<Client, ExecuteError> {
    command.result_filter()?;

    let config = ClientConfig::new(db);
    let config = if command.writes() { config } else { config.read_only() };
    Ok(Client::open(config).await?)
}

/// Execute a command and return formatted output.
pub async fn execute(
    client: &Client,
    command: &Command,
    formatter: &dyn Formatter,
) -> Result<String, ExecuteError> {
    let filter = command.result_filter()?;

    let output = match command {
        Command::Init => {
            let version = client.init_schema().await?;
            let path = client.pool().config().client_config.path.display().to_string();
            formatter.format_message(&format!("Schema version {} ready at {}", version, path))
        }
        Command::Universities => formatter.format_universities(&client.universities().await?),
        Command::Results { .. } => {
            let rows = client.results(filter.unwrap_or_default()).await?;
            tracing::debug!(rows = rows.len(), "results listed");
            formatter.format_results(&rows)
        }
        Command::Scorecard { reg_no } => {
            formatter.format_scorecard(&client.scorecard(reg_no.as_str()).await?)
        }
        Command::Stats => formatter.format_stats(&client.stats().await?),
    };

    Ok(output)
}
