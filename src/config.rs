use anyhow::{Context, Result};
use serde::Deserialize;
use std::{env, time::Duration};

use crate::models::GameRules;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub rack_size: usize,
    pub starting_seconds: u32,
    pub tick_interval_ms: u64,
    /// Fixed seed for letter draws, for reproducible games
    pub letter_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "./public".to_string()),
        };

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            rack_size: env::var("RACK_SIZE")
                .unwrap_or_else(|_| "9".to_string())
                .parse()
                .context("RACK_SIZE must be a number")?,
            starting_seconds: env::var("STARTING_SECONDS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("STARTING_SECONDS must be a number")?,
            tick_interval_ms: env::var("TICK_INTERVAL_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .context("TICK_INTERVAL_MS must be a number")?,
            letter_seed: match env::var("LETTER_SEED") {
                Ok(seed) => Some(seed.parse().context("LETTER_SEED must be a number")?),
                Err(_) => None,
            },
        };

        let config = Config { server, game };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.game.rack_size > 0, "RACK_SIZE must be at least 1");
        anyhow::ensure!(
            self.game.tick_interval_ms > 0,
            "TICK_INTERVAL_MS must be at least 1"
        );
        Ok(())
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl GameConfig {
    pub fn rules(&self) -> GameRules {
        GameRules {
            rack_size: self.rack_size,
            starting_seconds: self.starting_seconds,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        let rules = GameRules::default();
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                static_dir: "./public".to_string(),
            },
            game: GameConfig {
                dictionary_path: "./dictionary.txt".to_string(),
                rack_size: rules.rack_size,
                starting_seconds: rules.starting_seconds,
                tick_interval_ms: 1000,
                letter_seed: None,
            },
        }
    }
}
