use serde::Deserialize;
use std::env;
use thiserror::Error;

use crate::game::SessionSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be a number")]
    InvalidNumber(&'static str),
    #[error("{0} must be true or false")]
    InvalidBool(&'static str),
    #[error("GRID_SIZE must be at least 1")]
    GridSizeTooSmall,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub grid_size: usize,
    pub min_word_length: usize,
    pub reset_ledger_on_new_game: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            grid_size: parse_number("GRID_SIZE", 4)?,
            min_word_length: parse_number("MIN_WORD_LENGTH", 1)?,
            reset_ledger_on_new_game: parse_bool("RESET_LEDGER_ON_NEW_GAME", false)?,
        };

        if game.grid_size < 1 {
            return Err(ConfigError::GridSizeTooSmall);
        }

        Ok(Config { game })
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            grid_size: self.game.grid_size,
            min_word_length: self.game.min_word_length,
            reset_ledger_on_new_game: self.game.reset_ledger_on_new_game,
        }
    }
}

fn parse_number(name: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidNumber(name)),
        Err(_) => Ok(default),
    }
}

fn parse_bool(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidBool(name)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state; keep them serialized on distinct
    // variable names to avoid cross-test interference.

    // Single test so the GRID_SIZE reads and writes cannot race each other
    // under the parallel test runner.
    #[test]
    fn test_defaults_and_grid_size_floor() {
        env::remove_var("GRID_SIZE");
        env::remove_var("MIN_WORD_LENGTH");
        env::remove_var("RESET_LEDGER_ON_NEW_GAME");
        let config = Config::from_env().unwrap();
        assert_eq!(config.game.grid_size, 4);
        assert_eq!(config.game.min_word_length, 1);
        assert!(!config.game.reset_ledger_on_new_game);

        env::set_var("GRID_SIZE", "0");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::GridSizeTooSmall)
        ));
        env::remove_var("GRID_SIZE");
    }

    #[test]
    fn test_missing_var_falls_back_to_default() {
        env::remove_var("WORD_TRAIL_TEST_MISSING");
        assert_eq!(parse_number("WORD_TRAIL_TEST_MISSING", 7).unwrap(), 7);
    }

    #[test]
    fn test_invalid_number_is_classified() {
        env::set_var("WORD_TRAIL_TEST_BAD_NUMBER", "four");
        let err = parse_number("WORD_TRAIL_TEST_BAD_NUMBER", 4).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNumber("WORD_TRAIL_TEST_BAD_NUMBER")
        ));
        env::remove_var("WORD_TRAIL_TEST_BAD_NUMBER");
    }

    #[test]
    fn test_bool_parsing() {
        env::set_var("WORD_TRAIL_TEST_BOOL", "true");
        assert!(parse_bool("WORD_TRAIL_TEST_BOOL", false).unwrap());
        env::set_var("WORD_TRAIL_TEST_BOOL", "maybe");
        assert!(parse_bool("WORD_TRAIL_TEST_BOOL", false).is_err());
        env::remove_var("WORD_TRAIL_TEST_BOOL");
    }
}
