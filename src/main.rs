use std::error::Error;

use actix_web::{web, App, HttpServer};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod routes;
mod services;
mod state;
mod structs;
#[cfg(test)]
mod test_support;

use config::Config;
use services::lol_service::DataDragon;
use services::populate_service::update_database;
use services::store_service::{LolStore, Partition};
use state::AppContext;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();

    let store = LolStore::open(&config.db_path).map_err(|e| {
        error!(path = %config.db_path.display(), error = %e, "could not open store");
        e
    })?;

    if config.populate_on_startup {
        let provider = DataDragon::new(
            &config.ddragon_url,
            &config.locale,
            config.riot_key.clone(),
        );
        let report = update_database(&store, &provider, &config.populate_options())
            .await
            .map_err(|e| {
                error!(version = %config.game_version, error = %e, "population failed");
                e
            })?;
        info!(
            version = %config.game_version,
            champions = report.champions,
            items = report.items,
            splashes = report.splashes,
            skipped = report.skipped,
            "population finished"
        );
    } else {
        let champions = store.keys(Partition::Champs)?.len();
        let items = store.keys(Partition::Items)?.len();
        info!(
            champions,
            items, "population on startup disabled, serving existing store"
        );
    }

    let ctx = web::Data::new(AppContext::new(store));

    info!(host = %config.host, port = config.port, "listening");
    HttpServer::new(move || {
        App::new()
            .app_data(ctx.clone())
            .configure(routes::index::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
