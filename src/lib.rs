pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod keyword_source;
pub mod reader;
pub mod report;
pub mod runner;
pub mod scanner;
