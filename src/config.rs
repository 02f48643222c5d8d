//! # Configuration
//!
//! Gateway selection shared by the CLI subcommands. Values come from flags,
//! falling back to the environment:
//!
//! | Flag | Environment | Default |
//! |------|-------------|---------|
//! | `--catalog-file` | | |
//! | `--gateway-url` | | |
//! | `--square-token` | `SQUARE_ACCESS_TOKEN` | |
//! | `--square-environment` | `SQUARE_ENVIRONMENT` | `sandbox` |
//!
//! When several sources are given, the catalog file wins, then the gateway
//! URL, then Square.

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::{CatalogGateway, HttpGateway, SquareEnvironment, SquareGateway, StaticGateway};
use crate::error::ShelfError;

#[derive(Args, Debug, Clone, Default)]
pub struct GatewayArgs {
    /// Serve searches from a local JSON catalog
    #[arg(long, value_name = "FILE")]
    pub catalog_file: Option<PathBuf>,

    /// Forward searches to another server's search endpoint
    #[arg(long, value_name = "URL")]
    pub gateway_url: Option<String>,

    /// Square access token
    #[arg(long, env = "SQUARE_ACCESS_TOKEN", hide_env_values = true)]
    pub square_token: Option<String>,

    /// Square environment ("production" or "sandbox")
    #[arg(long, env = "SQUARE_ENVIRONMENT", default_value = "sandbox")]
    pub square_environment: String,
}

/// Resolved gateway choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayConfig {
    Static(PathBuf),
    Http(String),
    Square {
        token: String,
        environment: SquareEnvironment,
    },
}

impl GatewayArgs {
    pub fn resolve(&self) -> Result<GatewayConfig, ShelfError> {
        if let Some(path) = &self.catalog_file {
            return Ok(GatewayConfig::Static(path.clone()));
        }
        if let Some(url) = &self.gateway_url {
            return Ok(GatewayConfig::Http(url.clone()));
        }
        match self.square_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(GatewayConfig::Square {
                token: token.to_string(),
                environment: SquareEnvironment::parse(&self.square_environment),
            }),
            _ => Err(ShelfError::Config(
                "no catalog configured: pass --catalog-file, --gateway-url or set SQUARE_ACCESS_TOKEN"
                    .to_string(),
            )),
        }
    }
}

impl GatewayConfig {
    /// Build the gateway.
    pub fn connect(&self) -> Result<Arc<dyn CatalogGateway>, ShelfError> {
        let gateway: Arc<dyn CatalogGateway> = match self {
            Self::Static(path) => Arc::new(StaticGateway::load(path)?),
            Self::Http(url) => Arc::new(HttpGateway::new(url.clone())?),
            Self::Square { token, environment } => {
                Arc::new(SquareGateway::new(token.clone(), *environment)?)
            }
        };
        Ok(gateway)
    }

    /// One-line description for startup logs. Never includes the token.
    pub fn describe(&self) -> String {
        match self {
            Self::Static(path) => format!("static catalog {}", path.display()),
            Self::Http(url) => format!("http gateway {}", url),
            Self::Square { environment, .. } => format!("square ({:?})", environment),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON lines
    Json,
}
