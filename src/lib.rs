pub mod config;
pub mod core;
pub mod telemetry;
pub mod web;
