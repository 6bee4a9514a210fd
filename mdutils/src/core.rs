// src/core.rs
pub mod exclude;
pub mod formatter;
pub mod formatting;
pub mod scanner;
pub mod stats;
