//! Record store for vehicles

use tracing::{info, warn};

use carshop_domain::RecordGateway;
use carshop_types::{CarDetail, CarSummary, Error, ManufacturerListing, Result, VehicleRecord};

/// Ordered, persistent collection of vehicle records
///
/// Records keep insertion order: `add` appends, `update` replaces in place.
/// If a save fails the in-memory change stays applied and the error is
/// returned to the caller.
pub struct RecordStore<G: RecordGateway> {
    gateway: G,
    records: Vec<VehicleRecord>,
}

impl<G: RecordGateway> RecordStore<G> {
    /// Load the store through `gateway`
    pub fn open(gateway: G) -> Result<Self> {
        let records = gateway.load()?;
        Ok(Self { gateway, records })
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn persist(&self) -> Result<()> {
        self.gateway.save(&self.records).map_err(|e| {
            warn!(error = %e, "vehicle records changed in memory but were not saved");
            e
        })
    }

    fn position(&self, id: i32) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Dates outside the four-digit year range would be written in a form load rejects
    fn ensure_storable(record: &VehicleRecord) -> Result<()> {
        if record.has_storable_date() {
            Ok(())
        } else {
            Err(Error::DateOutOfRange(record.production_date))
        }
    }

    /// Add a new vehicle
    pub fn add(&mut self, record: VehicleRecord) -> Result<()> {
        Self::ensure_storable(&record)?;
        if self.position(record.id).is_some() {
            return Err(Error::DuplicateKey(record.id));
        }
        let id = record.id;
        self.records.push(record);
        self.persist()?;
        info!(id, "New car added successfully.");
        Ok(())
    }

    /// Replace the vehicle `old_id` with `record`, keeping its position
    ///
    /// The id may change as long as no other vehicle already holds it.
    pub fn update(&mut self, old_id: i32, record: VehicleRecord) -> Result<()> {
        Self::ensure_storable(&record)?;
        let idx = self.position(old_id).ok_or(Error::NotFound(old_id))?;
        if record.id != old_id && self.position(record.id).is_some() {
            return Err(Error::DuplicateKey(record.id));
        }
        let new_id = record.id;
        self.records[idx] = record;
        self.persist()?;
        info!(old_id, new_id, "Car updated successfully.");
        Ok(())
    }

    /// Remove a vehicle by ID
    ///
    /// Returns whether anything was removed. The collection is saved either way.
    pub fn delete(&mut self, id: i32) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        self.persist()?;
        if removed {
            info!(id, "Car deleted successfully.");
        }
        Ok(removed)
    }

    /// Get a vehicle's details by ID
    pub fn get_by_id(&self, id: i32) -> Option<CarDetail> {
        self.records.iter().find(|r| r.id == id).map(VehicleRecord::to_detail)
    }

    /// Vehicles whose manufacturer matches `name`, ignoring case
    pub fn query_by_manufacturer(&self, name: &str) -> Vec<ManufacturerListing> {
        let name = name.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.manufacturer.to_lowercase() == name)
            .map(VehicleRecord::to_manufacturer_listing)
            .collect()
    }

    /// Vehicles strictly cheaper than `max_price`
    pub fn query_by_price_below(&self, max_price: i64) -> Vec<CarSummary> {
        self.records
            .iter()
            .filter(|r| r.price < max_price)
            .map(VehicleRecord::to_summary)
            .collect()
    }

    /// All vehicles in store order
    pub fn list_all(&self) -> Vec<CarSummary> {
        self.records.iter().map(VehicleRecord::to_summary).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
