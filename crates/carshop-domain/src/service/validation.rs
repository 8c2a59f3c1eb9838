//! Input checks applied before a record is handed to the store

use chrono::NaiveDate;

use carshop_types::{Error, Result, VehicleRecord};

/// Check a record built from user input
///
/// `today` is passed in so callers (and tests) control the clock.
pub fn validate_record(record: &VehicleRecord, today: NaiveDate) -> Result<()> {
    if record.manufacturer.trim().is_empty() {
        return Err(Error::InvalidRecord("Manufacturer must not be empty.".to_string()));
    }
    if record.model.trim().is_empty() {
        return Err(Error::InvalidRecord("Model must not be empty.".to_string()));
    }
    if record.price < 0 {
        return Err(Error::InvalidRecord(format!(
            "Price must not be negative (got {}).",
            record.price
        )));
    }
    if record.horsepower == 0 {
        return Err(Error::InvalidRecord("Horsepower must be a positive value.".to_string()));
    }
    if record.production_date > today {
        return Err(Error::InvalidRecord(
            "Production date cannot be in the future. Please enter a valid date.".to_string(),
        ));
    }
    Ok(())
}
