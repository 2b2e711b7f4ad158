//! Dispatches a parsed command to its handler.

use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;

/// Runs the command selected by `cli` with merged `settings`.
pub async fn execute_command(cli: &Cli, settings: Settings) -> anyhow::Result<()> {
    match cli.command() {
        Commands::Serve { dry_run, .. } => {
            ServeCommandHandler::new(settings).execute(dry_run).await
        }
        Commands::Migrate { dry_run, rollback } => {
            if let Some(steps) = rollback {
                tracing::warn!(steps, "Reverting migrations");
            }
            MigrateCommandHandler::new(settings)
                .execute(dry_run, rollback)
                .await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn create_valid_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/pager".to_string();
        config
    }

    #[tokio::test]
    async fn test_execute_serve_dry_run() {
        let cli = Cli::try_parse_from(["pager-rs", "serve", "--dry-run"]).unwrap();
        assert!(execute_command(&cli, create_valid_config()).await.is_ok());
    }

    #[tokio::test]
    async fn test_execute_migrate_zero_steps() {
        let cli = Cli {
            command: Some(Commands::Migrate {
                dry_run: false,
                rollback: Some(0),
            }),
            config: None,
            env: None,
            verbose: false,
            quiet: false,
        };
        let err = execute_command(&cli, create_valid_config()).await.unwrap_err();
        assert!(err.to_string().contains("rollback_steps"));
    }
}
