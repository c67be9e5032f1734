use base64::{engine::general_purpose::STANDARD, Engine};
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info, warn};

use super::{
    lol_service::StaticDataProvider,
    store_service::{storage_key, LolStore, Partition, StoreBatch},
};
use crate::{
    error::{PopulateError, ProviderError},
    structs::{riot_champion_struct::RiotChampionData, riot_items_struct::RiotItem},
};

const DEFAULT_SKIN: u8 = 0;

#[derive(Debug, Clone)]
pub struct PopulateOptions {
    pub version: String,
    pub fetch_splash: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PopulateReport {
    pub champions: usize,
    pub items: usize,
    pub splashes: usize,
    pub skipped: usize,
}

struct PreparedChampion {
    key: String,
    champion: RiotChampionData,
    splash: Option<String>,
}

struct PreparedItem {
    key: String,
    item: RiotItem,
}

/// Fetches every champion and item for `options.version`, embeds their
/// images and writes them into the store. Only failing to fetch the lists
/// or to commit aborts the run; anything per-entity is logged and skipped.
pub async fn update_database<P: StaticDataProvider>(
    store: &LolStore,
    provider: &P,
    options: &PopulateOptions,
) -> Result<PopulateReport, PopulateError> {
    let version = options.version.as_str();
    let (champions, items) =
        tokio::try_join!(provider.champions(version), provider.items(version))?;
    info!(
        version,
        champions = champions.len(),
        items = items.len(),
        "fetched static data"
    );

    let mut report = PopulateReport::default();

    let mut futures: FuturesUnordered<_> = champions
        .into_iter()
        .map(|champion| prepare_champion(provider, options, champion))
        .collect();
    let mut prepared_champions = Vec::new();
    while let Some(result) = futures.next().await {
        match result {
            Some(prepared) => prepared_champions.push(prepared),
            None => report.skipped += 1,
        }
    }

    let mut futures: FuturesUnordered<_> = items
        .into_iter()
        .map(|item| prepare_item(provider, version, item))
        .collect();
    let mut prepared_items = Vec::new();
    while let Some(result) = futures.next().await {
        match result {
            Some(prepared) => prepared_items.push(prepared),
            None => report.skipped += 1,
        }
    }

    let mut batch = store.begin_batch()?;
    for prepared in prepared_champions {
        write_champion(&mut batch, prepared, &mut report);
    }
    for prepared in prepared_items {
        if put_logged(&mut batch, Partition::Items, &prepared.key, &prepared.item) {
            report.items += 1;
        } else {
            report.skipped += 1;
        }
    }
    batch.commit()?;

    Ok(report)
}

async fn prepare_champion<P: StaticDataProvider>(
    provider: &P,
    options: &PopulateOptions,
    mut champion: RiotChampionData,
) -> Option<PreparedChampion> {
    let key = storage_key(&champion.name);
    if key.is_empty() {
        warn!(id = %champion.id, "champion has no usable name, skipping");
        return None;
    }

    if let Err(e) = encode_champion_images(provider, &options.version, &mut champion).await {
        warn!(champion = %champion.name, error = %e, "could not encode champion images, skipping");
        return None;
    }

    let splash = if options.fetch_splash {
        match provider.splash(&champion.id, DEFAULT_SKIN).await {
            Ok(bytes) => Some(STANDARD.encode(bytes)),
            Err(e) => {
                warn!(champion = %champion.name, error = %e, "could not fetch splash");
                None
            }
        }
    } else {
        None
    };

    debug!(champion = %champion.name, key = %key, "champion prepared");
    Some(PreparedChampion {
        key,
        champion,
        splash,
    })
}

async fn encode_champion_images<P: StaticDataProvider>(
    provider: &P,
    version: &str,
    champion: &mut RiotChampionData,
) -> Result<(), ProviderError> {
    for image in champion.images_mut() {
        let bytes = provider.image(version, image).await?;
        image.encode(&bytes);
    }
    Ok(())
}

async fn prepare_item<P: StaticDataProvider>(
    provider: &P,
    version: &str,
    mut item: RiotItem,
) -> Option<PreparedItem> {
    let key = storage_key(&item.name);
    if key.is_empty() {
        warn!(image = %item.image.full, "item has no usable name, skipping");
        return None;
    }

    match provider.image(version, &item.image).await {
        Ok(bytes) => item.image.encode(&bytes),
        Err(e) => {
            warn!(item = %item.name, error = %e, "could not encode item image, skipping");
            return None;
        }
    }

    Some(PreparedItem { key, item })
}

fn write_champion(batch: &mut StoreBatch, prepared: PreparedChampion, report: &mut PopulateReport) {
    if !put_logged(batch, Partition::Champs, &prepared.key, &prepared.champion) {
        report.skipped += 1;
        return;
    }
    report.champions += 1;

    if let Some(splash) = &prepared.splash {
        if put_logged(batch, Partition::Splash, &prepared.key, splash) {
            report.splashes += 1;
        }
    }
}

fn put_logged<T: serde::Serialize>(
    batch: &mut StoreBatch,
    partition: Partition,
    key: &str,
    value: &T,
) -> bool {
    match batch.put(partition, key, value) {
        Ok(()) => true,
        Err(e) => {
            warn!(partition = partition.name(), key, error = %e, "write failed, skipping");
            false
        }
    }
}
