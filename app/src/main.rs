//! Obras Inventory - demo runner
//!
//! Builds the three pages with their demo data, logs the dashboard figures and
//! the filtered totals, then loads the material catalog through the cached
//! store (local files first, HTTP snapshot otherwise).

use obras_inventory::{catalog_service, Config};
use shared::{inventory_value, DashboardSummary, MaterialsPage, MovementsPage, ObrasPage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Obras Inventory");
    tracing::info!("Environment: {}", config.environment);

    let materials = MaterialsPage::with_demo_data();
    let obras = ObrasPage::with_demo_data();
    let movements = MovementsPage::with_demo_data();

    let summary = DashboardSummary::collect(&materials, &obras, &movements)?;
    tracing::info!(
        materials = summary.materials,
        obras = summary.obras,
        active_obras = summary.active_obras,
        movements = summary.movements,
        inventory_value = %summary.inventory_value,
        "Dashboard"
    );

    let budget = obras.totals()?;
    tracing::info!(
        budget = %budget.budget,
        spent = %budget.spent,
        balance = %budget.balance,
        "Obra totals"
    );

    let stock = movements.totals()?;
    tracing::info!(
        entries = %stock.entries_quantity,
        exits = %stock.exits_quantity,
        net = %stock.net_quantity,
        net_value = %stock.net_value,
        "Movement totals"
    );

    // Load the material catalog
    tracing::info!("Loading material catalog from {}", config.storage.dir.display());
    let mut catalog = catalog_service(&config)?;
    let loaded = catalog.load().await?;
    let value = inventory_value(loaded)?;
    tracing::info!(
        count = loaded.len(),
        value = %value,
        "Material catalog ready"
    );

    Ok(())
}
