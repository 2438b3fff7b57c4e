//! `orderno` - command-line front end for the order number generator.
//!
//! Settings come from `ORDER_NUMBER_*` environment variables (a `.env` file is
//! loaded first); command flags override them per invocation.

mod cli;
mod logger;

use anyhow::Context;
use clap::Parser;
use cli::{Args, Command};
use order_number::{GeneratorSettings, OrderNumberGenerator, detect_format};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();
    logger::init_logger(args.log_level.as_deref());

    let settings = GeneratorSettings::try_from_env().context("Invalid ORDER_NUMBER_* settings")?;
    tracing::debug!(?settings, "Loaded settings");
    let generator = OrderNumberGenerator::with_settings(settings);

    match args.command {
        Command::Generate(generate) => {
            let config = generate.to_config(generator.settings())?;
            for _ in 0..generate.count {
                println!("{}", generator.generate(&config));
            }
        }
        Command::Business { seller } => {
            println!(
                "{}",
                generator.generate_business_order_number(seller.as_deref())
            );
        }
        Command::Validate { candidates } => {
            let mut invalid = 0usize;
            for candidate in &candidates {
                match detect_format(candidate) {
                    Some(format) => println!("{candidate}\tvalid ({format})"),
                    None => {
                        invalid += 1;
                        println!("{candidate}\tinvalid");
                    }
                }
            }
            if invalid > 0 {
                anyhow::bail!("{invalid} of {} candidates invalid", candidates.len());
            }
        }
        Command::Formats { json } => {
            let formats = generator.suggested_formats();
            if json {
                println!("{}", serde_json::to_string_pretty(&formats)?);
            } else {
                for f in &formats {
                    println!("{:<10} {:<28} {}", f.format, f.example, f.description);
                }
            }
        }
    }

    Ok(())
}
