pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod forms;
pub mod input;
pub mod sorting;
