pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod observability;
pub mod sample;
pub mod tui;
