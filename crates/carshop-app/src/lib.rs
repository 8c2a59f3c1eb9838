//! Application service layer - config and store wiring

pub mod config;
pub mod repository;
