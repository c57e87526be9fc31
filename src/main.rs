use canteen_ledger::config::{database, menu, seed};
use canteen_ledger::errors::Result;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Load the menu catalog
    let menu = menu::load_default_config()?;
    info!("Loaded menu with {} items", menu.items.len());

    // 4. Initialize the ledger store and seed demo accounts
    let db = database::create_connection().await?;
    database::create_tables(&db).await?;
    seed::seed_demo_accounts(&db).await?;

    let accounts = canteen_ledger::core::account::get_all_accounts(&db).await?;
    info!("Ledger ready with {} accounts", accounts.len());

    let today = chrono::Local::now().date_naive();
    let offer = menu::day_offer(chrono::Datelike::weekday(&today));
    info!("Today's offer: {} ({})", offer.title, offer.discount);

    Ok(())
}
