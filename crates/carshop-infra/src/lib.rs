//! Infrastructure layer - line codec and file-backed persistence

pub mod codec;
pub mod persistence;
