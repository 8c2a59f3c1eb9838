//! Vehicle record and the read-only projections handed to callers

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Production date format used on disk and in rendered output (DD.MM.YYYY)
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Years `DATE_FORMAT` renders as exactly four digits; chrono signs the rest
pub const STORABLE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Parse a strict DD.MM.YYYY date
///
/// chrono alone accepts unpadded days and months, so the shape is checked first.
pub fn parse_production_date(s: &str) -> Result<NaiveDate, FormatError> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(FormatError::InvalidDate(s.to_string()));
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| FormatError::InvalidDate(s.to_string()))
}

/// Serde adapter rendering a `NaiveDate` as DD.MM.YYYY
pub mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Fuel type of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Gasoline,
        FuelType::Diesel,
        FuelType::Hybrid,
        FuelType::Electric,
    ];

    /// Upper-case enumeration name, as written to the data file
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "GASOLINE",
            FuelType::Diesel => "DIESEL",
            FuelType::Hybrid => "HYBRID",
            FuelType::Electric => "ELECTRIC",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = FormatError;

    /// Case-insensitive match against the enumeration names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormatError::UnknownFuelType(s.to_string()))
    }
}

/// A single vehicle in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Unique key, supplied by the caller
    pub id: i32,
    pub manufacturer: String,
    pub model: String,
    /// Price in whole currency units
    pub price: i64,
    #[serde(with = "date_format")]
    pub production_date: NaiveDate,
    pub fuel_type: FuelType,
    pub horsepower: u32,
}

impl VehicleRecord {
    pub fn new(
        id: i32,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        price: i64,
        production_date: NaiveDate,
        fuel_type: FuelType,
        horsepower: u32,
    ) -> Self {
        Self {
            id,
            manufacturer: manufacturer.into(),
            model: model.into(),
            price,
            production_date,
            fuel_type,
            horsepower,
        }
    }

    /// Whether the production date survives a write/read cycle through the data file
    pub fn has_storable_date(&self) -> bool {
        STORABLE_YEARS.contains(&self.production_date.year())
    }

    pub fn to_summary(&self) -> CarSummary {
        CarSummary {
            id: self.id,
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
            price: self.price,
        }
    }

    pub fn to_detail(&self) -> CarDetail {
        CarDetail {
            id: self.id,
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
            price: self.price,
            production_date: self.production_date,
            fuel_type: self.fuel_type,
            horsepower: self.horsepower,
        }
    }

    pub fn to_manufacturer_listing(&self) -> ManufacturerListing {
        ManufacturerListing {
            id: self.id,
            model: self.model.clone(),
            price: self.price,
        }
    }
}

/// Summary view: id, manufacturer, model and price
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarSummary {
    pub id: i32,
    pub manufacturer: String,
    pub model: String,
    pub price: i64,
}

impl fmt::Display for CarSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car ID: {}, Manufacturer: {}, Model: {}, Price: {}",
            self.id, self.manufacturer, self.model, self.price
        )
    }
}

/// Full view of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarDetail {
    pub id: i32,
    pub manufacturer: String,
    pub model: String,
    pub price: i64,
    #[serde(serialize_with = "date_format::serialize")]
    pub production_date: NaiveDate,
    pub fuel_type: FuelType,
    pub horsepower: u32,
}

impl CarDetail {
    /// Production date rendered as DD.MM.YYYY
    pub fn production_date_text(&self) -> String {
        self.production_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for CarDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car ID: {}, Manufacturer: {}, Model: {}, Price (€): {}, Production Date: {}, Fuel Type: {}, Horsepower: {}",
            self.id,
            self.manufacturer,
            self.model,
            self.price,
            self.production_date_text(),
            self.fuel_type,
            self.horsepower
        )
    }
}

impl From<CarDetail> for VehicleRecord {
    fn from(detail: CarDetail) -> Self {
        Self {
            id: detail.id,
            manufacturer: detail.manufacturer,
            model: detail.model,
            price: detail.price,
            production_date: detail.production_date,
            fuel_type: detail.fuel_type,
            horsepower: detail.horsepower,
        }
    }
}

/// Result row of a manufacturer query; the manufacturer is the query key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManufacturerListing {
    pub id: i32,
    pub model: String,
    pub price: i64,
}

impl fmt::Display for ManufacturerListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Car ID: {}, Model: {}, Price: {}", self.id, self.model, self.price)
    }
}
