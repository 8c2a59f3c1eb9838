//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_record_gateway;

pub use file_record_gateway::FileRecordGateway;
