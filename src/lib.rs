pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod logging;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod types;

// Port for the fetch stage and its reqwest adapter
pub mod app;
pub mod infra;
