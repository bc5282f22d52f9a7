pub mod cli;
pub mod config;
pub mod present;
pub mod shell;
