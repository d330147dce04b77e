use anyhow::Context;
use coffeeshop::{configuration::Settings, schema_reset::reset_schema, seed::seed_all, telemetry::{get_subscriber, init_subscriber}, utils::get_connection_pool};

#[tokio::main]
async fn main() -> anyhow::Result<()>{
    let subscriber = get_subscriber("Coffeeshop-db".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = Settings::get();

    // The pool is dropped on every exit path, releasing its connections
    let pool = get_connection_pool(&config.database)
        .context("Failed to build database connection pool")?;

    reset_schema(&pool).await
        .context("Failed to reset database schema")?;

    seed_all(&pool).await
        .context("Failed to populate initial data")?;

    Ok(())
}
