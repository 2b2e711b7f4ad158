//! Serve command handler

use crate::config::Settings;
use crate::error::AppResult;
use crate::server::Server;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Runs the server until shutdown, or only validates with `dry_run`.
    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            return self.validate_only().map_err(Into::into);
        }
        Server::new(self.config).run().await
    }

    /// Validates configuration and prints what the server would do.
    pub fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;

        let pagination = &self.config.pagination;
        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", self.config.server.address());
        println!(
            "✓ Database pool: {}..{} connections, auto-migrate {}",
            self.config.database.min_connections,
            self.config.database.max_connections,
            if self.config.database.auto_migrate { "on" } else { "off" }
        );
        println!(
            "✓ Page size: at least {}, at most {}",
            pagination.min_size(),
            pagination.effective_max_size()
        );
        println!("Dry run completed successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn create_valid_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/pager".to_string();
        config
    }

    #[tokio::test]
    async fn test_serve_handler_dry_run() {
        let handler = ServeCommandHandler::new(create_valid_config());
        assert!(handler.execute(true).await.is_ok());
    }

    #[test]
    fn test_validate_only_rejects_bad_pagination() {
        let mut config = create_valid_config();
        config.pagination.min_size = 0;

        match ServeCommandHandler::new(config).validate_only() {
            Err(AppError::Configuration { key, .. }) => assert_eq!(key, "pagination.min_size"),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }
}
