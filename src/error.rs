//! Error types for the FPL league client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Please enter a valid league ID (positive integer), got {input:?}")]
    InvalidLeagueId { input: String },

    #[error("Invalid ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("No gameweek is currently active")]
    NoCurrentGameweek,

    #[error("Failed to load game data: {message}")]
    Bootstrap { message: String },

    #[error("Player not found in league: {name}")]
    PlayerNotFound { name: String },
}
