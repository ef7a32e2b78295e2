mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use grocery_core::KrogerConfig;
use grocery_kroger::KrogerClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "grocery-cli")]
#[command(about = "Query Kroger store locations and products from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List stores of the configured chain near a zip code.
    Locations {
        #[arg(long)]
        zip: String,
        /// Maximum number of stores (0 = API default).
        #[arg(long, default_value_t = 0)]
        limit: i32,
    },
    /// Search products by term, optionally at one store.
    Products {
        #[arg(long)]
        term: String,
        #[arg(long)]
        location_id: Option<String>,
        #[arg(long, default_value_t = 0)]
        offset: i32,
        #[arg(long, default_value_t = 0)]
        limit: i32,
    },
    /// Find the nearest store to a zip code and list matching products there.
    Retrieve {
        #[arg(long, default_value = "97224")]
        zip: String,
        #[arg(long, default_value = "milk")]
        term: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = grocery_core::load_kroger_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(grocery_core::log_level()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = connect(&config).await?;

    match cli.command {
        Commands::Locations { zip, limit } => {
            let response = client.get_locations(&zip, limit).await?;
            for location in &response.data {
                println!("{}", output::location_line(location));
            }
        }
        Commands::Products {
            term,
            location_id,
            offset,
            limit,
        } => {
            let response = client
                .get_products(&term, location_id.as_deref(), offset, limit)
                .await?;
            for product in &response.data {
                println!("{}", output::product_line(product));
            }
        }
        Commands::Retrieve { zip, term } => retrieve(&client, &zip, &term).await?,
    }

    Ok(())
}

async fn connect(config: &KrogerConfig) -> anyhow::Result<KrogerClient> {
    let mut client = KrogerClient::with_timeout(
        &config.base_url,
        &config.client_id,
        &config.client_secret,
        &config.chain,
        config.timeout_secs,
    )
    .context("failed to initialize client")?;
    client
        .authenticate()
        .await
        .context("failed to get auth token")?;
    Ok(client)
}

async fn retrieve(client: &KrogerClient, zip: &str, term: &str) -> anyhow::Result<()> {
    let locations = client
        .get_locations(zip, 1)
        .await
        .context("failed to get locations")?;
    let Some(location) = locations.data.first() else {
        anyhow::bail!("no stores found near {zip}");
    };
    tracing::info!(location_id = %location.location_id, name = %location.name, "using nearest store");
    println!("{}", output::location_line(location));

    let products = client
        .get_products(term, Some(location.location_id.as_str()), 0, 50)
        .await
        .context("failed to get products")?;
    for product in &products.data {
        println!("{}", output::product_line(product));
    }
    Ok(())
}
