// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod diff;
pub mod log;
pub mod notify;
pub mod progress;
pub mod runner;
pub mod specs;
pub mod store;
