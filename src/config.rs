//! Configuration management for the mock API
//!
//! Configuration is loaded from environment variables.

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Origins served by the frontend dev servers (Vite and CRA defaults)
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";

/// How the randomized endpoints pick between their data and empty branches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchMode {
    /// Fair coin per request
    Random,
    /// Reproducible sequence from a fixed seed
    Seeded(u64),
    /// Always return data
    Always,
    /// Always return the empty branch
    Never,
}

impl FromStr for BranchMode {
    type Err = anyhow::Error;

    /// Parses everything except `seeded`, which needs a seed from elsewhere.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(anyhow!("Unknown branch mode: {other}")),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Origins allowed by the CORS layer
    pub cors_origins: Vec<String>,

    /// Branch selection for personas and brand design lookups
    pub branch_mode: BranchMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            branch_mode: BranchMode::Random,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let branch_mode = match env::var("MOCK_API_BRANCHES") {
            Ok(mode) if mode.trim().eq_ignore_ascii_case("seeded") => {
                let seed = env::var("MOCK_API_SEED")
                    .context("MOCK_API_SEED must be set when MOCK_API_BRANCHES=seeded")?
                    .parse()
                    .context("Invalid MOCK_API_SEED")?;
                BranchMode::Seeded(seed)
            }
            Ok(mode) => mode.parse().context("Invalid MOCK_API_BRANCHES")?,
            Err(_) => BranchMode::Random,
        };

        Ok(Self {
            host: env::var("MOCK_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("MOCK_API_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("Invalid MOCK_API_PORT")?,

            cors_origins: parse_origins(
                &env::var("MOCK_API_CORS_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
            ),

            branch_mode,
        })
    }
}

/// Split a comma-separated origin list, dropping blanks
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
