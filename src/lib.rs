// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod gamedata;
pub mod log;
pub mod operator;
pub mod progress;
pub mod report;
pub mod specs;

pub use error::ScrapeError;
