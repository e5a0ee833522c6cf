use std::sync::Arc;

use clap::Parser;
use poem::{listener::TcpListener, EndpointExt, Server};

use inventory_app::api;
use inventory_app::app_data::AppData;
use inventory_app::cli::{populate, Cli, Commands};
use inventory_app::config::{init_database, init_logging, migrate_database, Settings};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let cli = Cli::parse();
    let settings = Settings::from_env();

    // Store lifecycle is owned here: open at startup, close at shutdown
    let db = init_database(&settings)
        .await
        .expect("Failed to connect to database");

    migrate_database(&db)
        .await
        .expect("Failed to run migrations");

    let app_data = Arc::new(AppData::init(db));

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Migrate => {
            // Migrations already ran above as part of startup
            tracing::info!("Database migrations completed");
        }
        Commands::Populate => {
            populate::populate(&app_data)
                .await
                .expect("Failed to populate sample data");
        }
        Commands::Serve => {
            let app = api::routes().data(app_data.clone());

            tracing::info!("Listening on {}", settings.bind_address);
            Server::new(TcpListener::bind(settings.bind_address))
                .run(app)
                .await?;
        }
    }

    if let Err(e) = app_data.db.clone().close().await {
        tracing::warn!(error = %e, "failed to close database connection");
    }

    Ok(())
}
