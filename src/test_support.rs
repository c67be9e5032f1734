//! Fixtures shared by the unit tests: sample entities, a throwaway store and
//! an in-memory provider standing in for Data Dragon.

use std::{
    collections::HashSet,
    sync::atomic::{AtomicUsize, Ordering},
};

use tempfile::TempDir;

use crate::{
    error::ProviderError,
    services::{lol_service::StaticDataProvider, store_service::LolStore},
    structs::{
        riot_champion_struct::{
            RiotChampionData, RiotChampionPassive, RiotChampionSpell, RiotChampionStats,
        },
        riot_image_struct::RiotImage,
        riot_items_struct::RiotItem,
    },
};

pub fn temp_store() -> (TempDir, LolStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LolStore::open(dir.path().join("champs.db")).unwrap();
    (dir, store)
}

fn image(group: &str, full: String) -> RiotImage {
    RiotImage {
        full,
        group: group.to_string(),
        ..Default::default()
    }
}

pub fn champion(name: &str, title: &str) -> RiotChampionData {
    let spells = ["Q", "W", "E", "R"]
        .iter()
        .enumerate()
        .map(|(slot, letter)| RiotChampionSpell {
            id: format!("{name}{letter}"),
            name: format!("{name} spell {letter}"),
            description: format!("Description of {letter}."),
            cooldown: vec![10.0 - slot as f64, 9.0, 8.5],
            image: image("spell", format!("{name}{letter}.png")),
        })
        .collect();

    RiotChampionData {
        id: storage_id(name),
        key: "1".to_string(),
        name: name.to_string(),
        title: title.to_string(),
        blurb: format!("{name} blurb."),
        tags: vec!["Marksman".to_string(), "Assassin".to_string()],
        image: image("champion", format!("{name}.png")),
        stats: RiotChampionStats {
            hp: 525.0,
            hpperlevel: 88.0,
            hpregen: 3.5,
            hpregenperlevel: 0.55,
            mp: 344.88,
            mpperlevel: 38.0,
            armor: 25.0,
            armorperlevel: 3.5,
            spellblock: 30.0,
            attackdamage: 59.0,
            attackdamageperlevel: 2.0,
            attackspeedoffset: -0.04,
            attackspeedperlevel: 1.8,
            attackrange: 525.0,
            movespeed: 335.0,
            ..Default::default()
        },
        spells,
        passive: RiotChampionPassive {
            name: format!("{name} passive"),
            description: "Passive description.".to_string(),
            image: image("passive", format!("{name}_P.png")),
        },
    }
}

fn storage_id(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

pub fn item(name: &str) -> RiotItem {
    RiotItem {
        name: name.to_string(),
        plaintext: format!("{name} plaintext"),
        image: image("item", format!("{name}.png")),
        ..Default::default()
    }
}

/// Serves the given entities; images answer with `version/group/full` as bytes.
pub struct FixtureProvider {
    champions: Vec<RiotChampionData>,
    items: Vec<RiotItem>,
    pub missing_images: HashSet<String>,
    pub fail_splash: bool,
    pub fail_lists: bool,
    splash_requests: AtomicUsize,
}

impl FixtureProvider {
    pub fn new(champions: Vec<RiotChampionData>, items: Vec<RiotItem>) -> Self {
        Self {
            champions,
            items,
            missing_images: HashSet::new(),
            fail_splash: false,
            fail_lists: false,
            splash_requests: AtomicUsize::new(0),
        }
    }

    pub fn splash_requests(&self) -> usize {
        self.splash_requests.load(Ordering::SeqCst)
    }

    fn outage(&self) -> Result<(), ProviderError> {
        if self.fail_lists {
            return Err(ProviderError::Status {
                url: "fixture".to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

impl StaticDataProvider for FixtureProvider {
    async fn champions(&self, _version: &str) -> Result<Vec<RiotChampionData>, ProviderError> {
        self.outage()?;
        Ok(self.champions.clone())
    }

    async fn items(&self, _version: &str) -> Result<Vec<RiotItem>, ProviderError> {
        self.outage()?;
        Ok(self.items.clone())
    }

    async fn image(&self, version: &str, image: &RiotImage) -> Result<Vec<u8>, ProviderError> {
        if self.missing_images.contains(&image.full) {
            return Err(ProviderError::MissingAsset(image.full.clone()));
        }
        Ok(format!("{}/{}/{}", version, image.group, image.full).into_bytes())
    }

    async fn splash(&self, champion_id: &str, skin: u8) -> Result<Vec<u8>, ProviderError> {
        self.splash_requests.fetch_add(1, Ordering::SeqCst);
        if self.fail_splash {
            return Err(ProviderError::MissingAsset(format!("{champion_id}_{skin}.jpg")));
        }
        Ok(format!("splash/{champion_id}_{skin}").into_bytes())
    }
}
