use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use catering_scaler::config::Settings;
use catering_scaler::controllers::{generate_report, load_ingredients_from_path};
use catering_scaler::models::api::ScaleRequest;
use catering_scaler::models::{Guests, Variant};
use catering_scaler::observability::init_logging;
use catering_scaler::sample::{SAMPLE_FILE_NAME, csv_download_link, sample_menu};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "catering",
    version,
    about = "Scale a catering ingredient list from 10 guests to any number of guests"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ingredient sheet flavour, overrides the configured one
    #[arg(long, value_enum, global = true)]
    variant: Option<Variant>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a CSV menu, scale it and print the shopping list and recipe
    Scale {
        /// CSV file with Ingredient, Quantity, Type (and Unit) columns
        #[arg(short, long)]
        file: PathBuf,

        /// Number of guests (defaults to the configured value)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        guests: Option<u32>,
    },
    /// Print the example menu, write it to a file, or print it as a download link
    Sample {
        /// Write the sample to a file instead of printing it
        #[arg(
            short,
            long,
            num_args = 0..=1,
            default_missing_value = SAMPLE_FILE_NAME,
            conflicts_with = "link"
        )]
        output: Option<PathBuf>,

        /// Print an inline base64 download link
        #[arg(long)]
        link: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&settings.log_level)?;

    let variant = cli.variant.unwrap_or(settings.variant);

    match cli.command {
        Command::Scale { file, guests } => {
            let guests = match guests {
                Some(count) => Guests::new(count)?,
                None => settings.default_guests()?,
            };

            // A failed load stops here, before anything is scaled or printed
            let ingredients = load_ingredients_from_path(&file, variant)
                .with_context(|| format!("Failed to load ingredients from {}", file.display()))?;

            match generate_report(&ScaleRequest::new(ingredients, guests)) {
                Some(report) => {
                    println!("== Shopping List ==");
                    print!("{}", report.shopping_list);
                    println!();
                    println!("== Generated Recipe ==");
                    print!("{}", report.recipe);
                }
                None => info!(file = %file.display(), "No ingredients found, nothing to generate"),
            }
        }
        Command::Sample { output, link } => {
            let sample = sample_menu(variant);

            if link {
                println!("{}", csv_download_link(sample, SAMPLE_FILE_NAME));
            } else if let Some(path) = output {
                fs::write(&path, sample)
                    .with_context(|| format!("Failed to write sample to {}", path.display()))?;
                info!(path = %path.display(), ?variant, "Wrote sample menu");
            } else {
                print!("{}", sample);
            }
        }
    }

    Ok(())
}
