pub mod config;
pub mod dictionary;
pub mod game;
pub mod models;
pub mod utils;
