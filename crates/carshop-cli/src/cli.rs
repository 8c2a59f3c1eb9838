//! CLI definition using clap

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use carshop_types::{parse_production_date, FuelType, OutputFormat, VehicleRecord};

#[derive(Parser)]
#[command(name = "carshop")]
#[command(version)]
#[command(about = "Vehicle inventory kept in a flat text file")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data file to use. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new car
    Add(NewCarArgs),

    /// Update fields of an existing car
    Update {
        /// ID of the car to update
        #[arg(value_name = "ID")]
        target: i32,

        #[command(flatten)]
        changes: CarChanges,
    },

    /// Delete a car
    Delete {
        /// ID of the car to delete
        id: i32,
    },

    /// Show car details by ID
    Show {
        /// ID of the car
        id: i32,
    },

    /// List cars from a given manufacturer (case-insensitive)
    ByManufacturer {
        /// Manufacturer name
        name: String,
    },

    /// List cars with a price lower than the given value
    CheaperThan {
        /// Exclusive price limit
        max_price: i64,
    },

    /// List all cars
    List,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the data file path
        #[arg(long)]
        set_data_file: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Every field of a new car
#[derive(Args, Debug, Clone)]
pub struct NewCarArgs {
    /// ID of the vehicle (must not be taken)
    #[arg(long)]
    pub id: i32,

    #[arg(long)]
    pub manufacturer: String,

    #[arg(long)]
    pub model: String,

    #[arg(long)]
    pub price: i64,

    /// Production date (DD.MM.YYYY)
    #[arg(long, value_parser = parse_date)]
    pub date: NaiveDate,

    /// Fuel type (gasoline, diesel, hybrid, electric)
    #[arg(long, ignore_case = true)]
    pub fuel: FuelType,

    #[arg(long)]
    pub horsepower: u32,
}

impl NewCarArgs {
    pub fn into_record(self) -> VehicleRecord {
        VehicleRecord::new(
            self.id,
            self.manufacturer,
            self.model,
            self.price,
            self.date,
            self.fuel,
            self.horsepower,
        )
    }
}

/// Fields to change on an existing car; omitted fields keep their value
#[derive(Args, Debug, Clone, Default)]
pub struct CarChanges {
    /// New ID (must not be taken by another car)
    #[arg(long)]
    pub id: Option<i32>,

    #[arg(long)]
    pub manufacturer: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub price: Option<i64>,

    /// Production date (DD.MM.YYYY)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Fuel type (gasoline, diesel, hybrid, electric)
    #[arg(long, ignore_case = true)]
    pub fuel: Option<FuelType>,

    #[arg(long)]
    pub horsepower: Option<u32>,
}

impl CarChanges {
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.manufacturer.is_none()
            && self.model.is_none()
            && self.price.is_none()
            && self.date.is_none()
            && self.fuel.is_none()
            && self.horsepower.is_none()
    }

    /// Apply the given changes on top of `record`
    pub fn apply(self, mut record: VehicleRecord) -> VehicleRecord {
        if let Some(id) = self.id {
            record.id = id;
        }
        if let Some(manufacturer) = self.manufacturer {
            record.manufacturer = manufacturer;
        }
        if let Some(model) = self.model {
            record.model = model;
        }
        if let Some(price) = self.price {
            record.price = price;
        }
        if let Some(date) = self.date {
            record.production_date = date;
        }
        if let Some(fuel) = self.fuel {
            record.fuel_type = fuel;
        }
        if let Some(horsepower) = self.horsepower {
            record.horsepower = horsepower;
        }
        record
    }
}

/// Same strict DD.MM.YYYY shape the data file uses
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    parse_production_date(s.trim())
        .map_err(|_| "Invalid date format. Please use the format DD.MM.YYYY.".to_string())
}
