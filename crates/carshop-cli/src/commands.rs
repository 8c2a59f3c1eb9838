//! Command handlers

use chrono::Local;
use tracing::debug;

use carshop_app::config::Config;
use carshop_app::repository::{open_store, FileRecordStore};
use carshop_domain::service::validate_record;
use carshop_types::{Error, OutputFormat, Result, VehicleRecord};

use crate::cli::{Cli, Commands};
use crate::output::{output_detail, output_list, output_message};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    match cli.command {
        Commands::Config {
            show,
            set_data_file,
            set_output,
            reset,
        } => manage_config(config, show, set_data_file, set_output, reset),
        command => {
            // Override from CLI args
            if let Some(path) = cli.data_file {
                config.data_file = Some(path);
            }
            let format = cli.format.unwrap_or(config.output_format);

            let mut store = open_store(&config)?;
            debug!(count = store.len(), "vehicle store ready");

            run(&mut store, command, format)
        }
    }
}

fn run(store: &mut FileRecordStore, command: Commands, format: OutputFormat) -> Result<()> {
    match command {
        Commands::Add(args) => {
            let record = args.into_record();
            check(&record)?;
            store.add(record)?;
            output_message(format, "New car added successfully.")
        }
        Commands::Update { target, changes } => {
            if changes.is_empty() {
                return Err(Error::InvalidRecord(
                    "No fields to update were given.".to_string(),
                ));
            }
            let Some(current) = store.get_by_id(target) else {
                return output_message(format, &format!("Car with ID {} not found.", target));
            };
            let record = changes.apply(VehicleRecord::from(current));
            check(&record)?;
            store.update(target, record)?;
            output_message(format, "Car updated successfully.")
        }
        Commands::Delete { id } => {
            if store.delete(id)? {
                output_message(format, &format!("Car with ID {} deleted successfully.", id))
            } else {
                output_message(format, &format!("Car with ID {} not found.", id))
            }
        }
        Commands::Show { id } => match store.get_by_id(id) {
            Some(detail) => output_detail(format, &detail),
            None => output_message(format, &format!("Car with ID {} not found.", id)),
        },
        Commands::ByManufacturer { name } => output_list(
            format,
            &store.query_by_manufacturer(&name),
            &format!("No cars found for manufacturer {}", name),
        ),
        Commands::CheaperThan { max_price } => output_list(
            format,
            &store.query_by_price_below(max_price),
            &format!("No cars found with price lower than {}", max_price),
        ),
        Commands::List => output_list(format, &store.list_all(), "No cars in the inventory."),
        Commands::Config { .. } => unreachable!("config is handled before the store is opened"),
    }
}

fn check(record: &VehicleRecord) -> Result<()> {
    validate_record(record, Local::now().date_naive())
}

fn manage_config(
    mut config: Config,
    show: bool,
    set_data_file: Option<std::path::PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
    }

    let mut changed = false;
    if let Some(path) = set_data_file {
        config.data_file = Some(path);
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if changed {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || (!reset && !changed) {
        print!("{}", config);
    }

    Ok(())
}
