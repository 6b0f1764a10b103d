use crate::client::{DatabaseClient, SheetClient};
use crate::config::{
    get_database_credentials, get_sheet_url, load_config, save_config, DatabaseCredentials,
};
use crate::error::{AdminError, AdminResult};
use std::sync::Arc;

/// Central context for CLI operations, managing credentials and client instances
pub struct CliContext {
    database_credentials: Option<DatabaseCredentials>,
    sheet_url: Option<String>,
    database: Option<Arc<DatabaseClient>>,
    sheet: Option<Arc<SheetClient>>,
}

impl CliContext {
    /// Create an empty context; credentials are resolved on first use
    pub fn new() -> Self {
        Self {
            database_credentials: None,
            sheet_url: None,
            database: None,
            sheet: None,
        }
    }

    /// Load context from the environment and saved configuration
    pub fn load() -> Self {
        Self {
            database_credentials: get_database_credentials().ok(),
            sheet_url: get_sheet_url().ok(),
            database: None,
            sheet: None,
        }
    }

    /// Get or create the database client
    pub fn database_client(&mut self) -> AdminResult<Arc<DatabaseClient>> {
        if let Some(client) = &self.database {
            return Ok(client.clone());
        }

        let credentials = self.database_credentials()?.clone();
        let client = Arc::new(DatabaseClient::new(&credentials)?);
        self.database = Some(client.clone());
        Ok(client)
    }

    /// Get or create the feedback sheet client
    pub fn sheet_client(&mut self) -> AdminResult<Arc<SheetClient>> {
        if let Some(client) = &self.sheet {
            return Ok(client.clone());
        }

        let url = self.sheet_url()?.clone();
        let client = Arc::new(SheetClient::new(&url)?);
        self.sheet = Some(client.clone());
        Ok(client)
    }

    pub fn database_credentials(&mut self) -> AdminResult<&DatabaseCredentials> {
        if self.database_credentials.is_none() {
            self.database_credentials = Some(get_database_credentials()?);
        }

        self.database_credentials.as_ref().ok_or(AdminError::CredentialsNotFound)
    }

    pub fn sheet_url(&mut self) -> AdminResult<&String> {
        if self.sheet_url.is_none() {
            self.sheet_url = Some(get_sheet_url()?);
        }

        self.sheet_url.as_ref().ok_or(AdminError::CredentialsNotFound)
    }

    /// Persist database credentials and rebuild the client
    pub fn set_database_credentials(&mut self, credentials: DatabaseCredentials) -> AdminResult<()> {
        let mut config = load_config();
        config.database_url = Some(credentials.url.clone());
        config.database_key = Some(credentials.key.clone());
        save_config(&config)?;
        self.database = Some(Arc::new(DatabaseClient::new(&credentials)?));
        self.database_credentials = Some(credentials);
        Ok(())
    }

    /// Persist the sheet URL and rebuild the client
    pub fn set_sheet_url(&mut self, url: String) -> AdminResult<()> {
        let client = SheetClient::new(&url)?;
        let mut config = load_config();
        config.sheet_url = Some(url.clone());
        save_config(&config)?;
        self.sheet = Some(Arc::new(client));
        self.sheet_url = Some(url);
        Ok(())
    }

    pub fn has_database_credentials(&self) -> bool {
        self.database_credentials.is_some() || get_database_credentials().is_ok()
    }

    pub fn has_sheet_url(&self) -> bool {
        self.sheet_url.is_some() || get_sheet_url().is_ok()
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for contexts with explicit credentials, bypassing the config file
pub struct CliContextBuilder {
    database_credentials: Option<DatabaseCredentials>,
    sheet_url: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            database_credentials: None,
            sheet_url: None,
        }
    }

    pub fn with_database(mut self, url: impl Into<String>, key: impl Into<String>) -> Self {
        self.database_credentials = Some(DatabaseCredentials {
            url: url.into(),
            key: key.into(),
        });
        self
    }

    pub fn with_sheet_url(mut self, url: impl Into<String>) -> Self {
        self.sheet_url = Some(url.into());
        self
    }

    pub fn build(self) -> CliContext {
        let loaded = if self.database_credentials.is_none() || self.sheet_url.is_none() {
            Some(CliContext::load())
        } else {
            None
        };

        CliContext {
            database_credentials: self
                .database_credentials
                .or_else(|| loaded.as_ref().and_then(|c| c.database_credentials.clone())),
            sheet_url: self
                .sheet_url
                .or_else(|| loaded.as_ref().and_then(|c| c.sheet_url.clone())),
            database: None,
            sheet: None,
        }
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
