// src/api/handlers/mod.rs
pub mod password;
pub mod system;
