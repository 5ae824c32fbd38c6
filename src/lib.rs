pub mod args;
pub mod config;
pub mod console;
pub mod engine;
pub mod logging;
pub mod rules;
pub mod scores;
pub mod store;
pub mod ui;
