//! Output formatting module

use std::fmt::Display;

use serde::Serialize;

use carshop_types::{CarDetail, OutputFormat, Result};

/// Print a status message
pub fn output_message(output_format: OutputFormat, message: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&serde_json::json!({ "message": message }))?;
        println!("{}", content);
    } else {
        println!("{}", message);
    }
    Ok(())
}

/// Print a list of projections, or `empty_message` when there is nothing to show
pub fn output_list<T>(output_format: OutputFormat, items: &[T], empty_message: &str) -> Result<()>
where
    T: Serialize + Display,
{
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(items)?;
        println!("{}", content);
        return Ok(());
    }

    if items.is_empty() {
        println!("{}", empty_message);
        return Ok(());
    }

    for item in items {
        println!("{}", item);
    }
    println!("\n{} car(s)", items.len());
    Ok(())
}

pub fn output_detail(output_format: OutputFormat, detail: &CarDetail) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(detail)?;
        println!("{}", content);
    } else {
        println!("\nCar Details");
        println!("===========");
        println!("ID:              {}", detail.id);
        println!("Manufacturer:    {}", detail.manufacturer);
        println!("Model:           {}", detail.model);
        println!("Price (€):       {}", detail.price);
        println!("Production date: {}", detail.production_date_text());
        println!("Fuel type:       {}", detail.fuel_type);
        println!("Horsepower:      {}", detail.horsepower);
    }

    Ok(())
}
