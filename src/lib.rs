pub mod analysis;
pub mod api;
pub mod cli;
pub mod core;
pub mod generator;
pub mod models;
pub mod pipeline;
pub mod wordlist;
