//! Repository trait definitions for data persistence

use carshop_types::{Result, VehicleRecord};

/// Whole-collection persistence for vehicle records
///
/// Implementations never write deltas: `save` replaces everything previously
/// stored with `records`, in the order given.
pub trait RecordGateway {
    /// Load every stored record in stored order
    ///
    /// An absent backing store yields an empty list.
    fn load(&self) -> Result<Vec<VehicleRecord>>;

    /// Replace the stored collection with `records`
    fn save(&self, records: &[VehicleRecord]) -> Result<()>;
}
