use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use server_inventory::{client::InventoryClient, models::ServerPayload};

#[derive(Parser)]
#[command(name = "inventory-cli")]
#[command(about = "CLI tool for managing servers in a running inventory service", long_about = None)]
struct Cli {
    /// Base URL of the inventory service
    #[arg(short, long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all servers
    List,

    /// Show one server
    Get {
        /// Server ID
        id: i64,
    },

    /// Register a new server
    Create(ServerFields),

    /// Replace the fields of an existing server
    Update {
        /// Server ID
        id: i64,

        #[command(flatten)]
        fields: ServerFields,
    },

    /// Remove a server
    Delete {
        /// Server ID
        id: i64,
    },
}

#[derive(Args)]
struct ServerFields {
    /// Host name
    #[arg(long)]
    host_name: String,

    /// IP address
    #[arg(long)]
    ip_address: String,

    /// Status, e.g. "up" or "down"
    #[arg(long)]
    status: String,
}

impl From<ServerFields> for ServerPayload {
    fn from(fields: ServerFields) -> Self {
        ServerPayload::new(&fields.host_name, &fields.ip_address, &fields.status)
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let url = cli
        .url
        .or_else(|| std::env::var("INVENTORY_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:46664".to_string());
    let client = InventoryClient::new(&url)?;

    match cli.command {
        Commands::List => {
            let servers = client.list().await.context("Failed to list servers")?;
            print_json(&servers)?;
        }

        Commands::Get { id } => {
            let server = client
                .get(id)
                .await
                .with_context(|| format!("Failed to fetch server {id}"))?;
            print_json(&server)?;
        }

        Commands::Create(fields) => {
            let server = client
                .create(&fields.into())
                .await
                .context("Failed to create server")?;
            print_json(&server)?;
        }

        Commands::Update { id, fields } => {
            let server = client
                .update(id, &fields.into())
                .await
                .with_context(|| format!("Failed to update server {id}"))?;
            print_json(&server)?;
        }

        Commands::Delete { id } => {
            let message = client
                .delete(id)
                .await
                .with_context(|| format!("Failed to delete server {id}"))?;
            println!("{message}");
        }
    }

    Ok(())
}
