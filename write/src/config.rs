use std::env::{self, VarError};

/// Settings the handler is constructed with, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Destination bucket for the test object
    pub bucket: String,
    /// Shared secret expected in the `token` field of the request body.
    /// When absent, requests are not checked.
    pub token: Option<String>,
}

impl Config {
    pub fn new(bucket: impl Into<String>) -> Self {
        Config {
            bucket: bucket.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Reads `bucket` (required) and `slackToken` (optional) from the environment
    pub fn from_env() -> Result<Self, VarError> {
        Self::from_vars(|name| env::var(name))
    }

    fn from_vars<F>(var: F) -> Result<Self, VarError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let config = Config::new(var("bucket")?);
        match var("slackToken") {
            Ok(token) if !token.is_empty() => Ok(config.with_token(token)),
            Ok(_) | Err(VarError::NotPresent) => Ok(config),
            Err(err) => Err(err),
        }
    }
}
