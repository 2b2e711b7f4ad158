//! Migrate command handler

use crate::config::Settings;
use crate::db::MigrationRunner;
use crate::error::AppResult;

/// Handler for the migrate command
pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Applies pending migrations, lists them with `dry_run`, or reverts
    /// `rollback` steps.
    ///
    /// # Errors
    /// - Database configuration validation errors
    /// - Connection or migration errors
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.config.database.validate()?;
        let runner = MigrationRunner::new(self.config.database.url.clone());

        match (dry_run, rollback) {
            (true, _) => {
                let pending = runner.pending().await?;
                if pending.is_empty() {
                    println!("✓ No pending migrations - database is up to date");
                } else {
                    println!("Found {} pending migration(s):", pending.len());
                    print_names(&pending);
                    println!("\nRun without --dry-run to apply these migrations");
                }
            }
            (false, Some(steps)) => {
                let reverted = runner.revert(steps).await?;
                println!("✓ Rolled back {} migration(s):", reverted.len());
                print_names(&reverted);
            }
            (false, None) => {
                let applied = runner.run_pending().await?;
                if applied.is_empty() {
                    println!("✓ No migrations to apply - database is up to date");
                } else {
                    println!("✓ Applied {} migration(s):", applied.len());
                    print_names(&applied);
                }
            }
        }

        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}

fn print_names(names: &[String]) {
    for name in names {
        println!("  - {name}");
    }
}
