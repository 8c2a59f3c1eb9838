//! In-memory vehicle record store
//!
//! The store owns the record collection, keeps ids unique and rewrites the
//! whole collection through its [`RecordGateway`] after every mutation.

pub mod vehicles;

pub use vehicles::RecordStore;
