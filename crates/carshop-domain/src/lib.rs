//! Repository traits and domain services

pub mod repository;
pub mod service;

pub use repository::RecordGateway;
