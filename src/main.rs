use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use fieldbook_client::config::ClientConfig;
use fieldbook_client::FieldbookClient;
use fieldbook_core::models::field::{BranchId, FieldId};
use fieldbook_core::slots;
use std::env;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "fieldbook", version, about = "Slot availability client for the field booking backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the fields attached to a branch
    Fields {
        /// Branch id to list
        #[arg(long)]
        branch: BranchId,
    },
    /// List every configured field type
    Types,
    /// Check one field's hourly availability for a date
    Check {
        /// Field id to check
        #[arg(long)]
        field: FieldId,
        /// Date to check (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
    /// Show booked hours for every field of a branch on a date
    Booked {
        /// Branch id to inspect
        #[arg(long)]
        branch: BranchId,
        /// Date to inspect (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    // Load configuration
    let config = ClientConfig::from_env()?;
    let client = FieldbookClient::new(config);

    match cli.command {
        Commands::Fields { branch } => {
            let fields = client.branch_fields(branch).await?;
            for field in fields {
                println!("#{:<4} {}", field.id, field.name);
            }
        }
        Commands::Types => {
            for field_type in client.field_types().await? {
                println!("#{:<4} {}", field_type.id, field_type.name);
            }
        }
        Commands::Check { field, date } => {
            let availability = client.field_availability(field, date).await;
            for slot in availability.slots {
                let mark = if slot.available { "open" } else { "booked" };
                println!("{}  {}", slot.time, mark);
            }
        }
        Commands::Booked { branch, date } => {
            let fields = client.branch_fields(branch).await?;
            let times = slots::slot_catalog();
            let booked = client.booked_slots(branch, date, &fields, &times).await;
            for field in &fields {
                match booked.get(&field.id) {
                    Some(hours) if !hours.is_empty() => {
                        let joined = hours.iter().cloned().collect::<Vec<_>>().join(", ");
                        println!("#{:<4} {:<24} booked: {}", field.id, field.name, joined);
                    }
                    _ => println!("#{:<4} {:<24} no booked hours", field.id, field.name),
                }
            }
        }
    }

    Ok(())
}

fn log_level() -> Level {
    match env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
