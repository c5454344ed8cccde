//! Remittance CLI
//!
//! Command-line interface for the remittance API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use remittance_client::RemittanceClient;
use remittance_types::{ClientId, TransactionId};

#[derive(Parser)]
#[command(name = "remittance")]
#[command(author, version, about = "Remittance API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the remittance API
    #[arg(
        long,
        env = "REMITTANCE_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction operations
    Transaction {
        #[command(subcommand)]
        action: TransactionCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum TransactionCommands {
    /// Get transaction details
    Get {
        /// Transaction ID
        id: i64,
    },
    /// Create a transaction
    Create {
        /// Amount the sender pays
        #[arg(long)]
        sending: Decimal,
        /// Amount the beneficiary receives
        #[arg(long)]
        payout: Decimal,
        #[arg(long)]
        sender: i64,
        #[arg(long)]
        beneficiary: i64,
    },
    /// Mark a transaction as paid out
    Payout {
        /// Transaction ID
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = RemittanceClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Transaction { action } => match action {
            TransactionCommands::Get { id } => {
                let tx = client.get_transaction(TransactionId::new(id)).await?;
                println!("{}", serde_json::to_string_pretty(&tx)?);
            }
            TransactionCommands::Create {
                sending,
                payout,
                sender,
                beneficiary,
            } => {
                let tx = client
                    .create_transaction(
                        sending,
                        payout,
                        ClientId::new(sender),
                        ClientId::new(beneficiary),
                    )
                    .await?;
                println!("{}", serde_json::to_string_pretty(&tx)?);
            }
            TransactionCommands::Payout { id } => {
                let tx = client.payout(TransactionId::new(id)).await?;
                println!("{}", serde_json::to_string_pretty(&tx)?);
            }
        },
    }

    Ok(())
}
