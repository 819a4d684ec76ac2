// src/analysis/mod.rs
pub mod cracktime;
pub mod entropy;
pub mod heuristic;
