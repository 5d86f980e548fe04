use tracing::{Level, info};

use voyage_schema::config::AppConfig;
use voyage_schema::{database, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;
    info!(url = %config.database.url, "Connecting");

    let db = database::init_db(&config.database.url).await?;
    seed::seed_all(&db).await?;

    info!("Database seeding complete");
    Ok(())
}
