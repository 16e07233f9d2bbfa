pub mod annotate;
pub mod cli;
pub mod config;
pub mod detector;
pub mod history;
pub mod pipeline;
pub mod progress;
pub mod selector;
