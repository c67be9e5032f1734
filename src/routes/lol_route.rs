use actix_web::{web, HttpResponse};
use serde::de::DeserializeOwned;
use tracing::error;

use crate::services::formula_service::underscore_to_space;
use crate::services::render_service::{not_found, render_page, ChampPage, HomePage, ItemPage};
use crate::services::store_service::{storage_key, LolStore, Partition};
use crate::state::AppContext;
use crate::structs::riot_champion_struct::RiotChampionData;
use crate::structs::riot_items_struct::RiotItem;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/champ/{name}", web::get().to(champ))
        .route("/item/{name}", web::get().to(item));
}

/// Store key for a `{name}` path segment. Listing links replace spaces with
/// underscores; `storage_key` drops both, so a link and the stored name
/// resolve to the same key.
pub fn resolve_key(segment: &str) -> String {
    storage_key(&underscore_to_space(segment))
}

pub async fn home(ctx: web::Data<AppContext>) -> HttpResponse {
    let champs = scan_or_empty(&ctx.store, Partition::Champs);
    let items = scan_or_empty(&ctx.store, Partition::Items);
    render_page(&HomePage { champs, items })
}

pub async fn champ(ctx: web::Data<AppContext>, name: web::Path<String>) -> HttpResponse {
    match lookup::<RiotChampionData>(&ctx.store, Partition::Champs, &resolve_key(&name)) {
        Some(champion) => render_page(&ChampPage { champion }),
        None => not_found(),
    }
}

pub async fn item(ctx: web::Data<AppContext>, name: web::Path<String>) -> HttpResponse {
    match lookup::<RiotItem>(&ctx.store, Partition::Items, &resolve_key(&name)) {
        Some(item) => render_page(&ItemPage { item }),
        None => not_found(),
    }
}

fn lookup<T: DeserializeOwned>(store: &LolStore, partition: Partition, key: &str) -> Option<T> {
    store.get(partition, key).unwrap_or_else(|e| {
        error!(partition = partition.name(), key, error = %e, "store read failed");
        None
    })
}

fn scan_or_empty<T: DeserializeOwned>(store: &LolStore, partition: Partition) -> Vec<T> {
    store.scan_all(partition).unwrap_or_else(|e| {
        error!(partition = partition.name(), error = %e, "store scan failed");
        Vec::new()
    })
}
