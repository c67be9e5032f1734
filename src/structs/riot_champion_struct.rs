use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::riot_image_struct::RiotImage;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RiotChampionStats {
    pub hp: f64,
    pub hpperlevel: f64,
    pub hpregen: f64,
    pub hpregenperlevel: f64,
    pub mp: f64,
    pub mpperlevel: f64,
    pub mpregen: f64,
    pub mpregenperlevel: f64,
    pub armor: f64,
    pub armorperlevel: f64,
    pub spellblock: f64,
    pub spellblockperlevel: f64,
    pub attackdamage: f64,
    pub attackdamageperlevel: f64,
    pub attackspeedoffset: f64,
    pub attackspeedperlevel: f64,
    pub attackspeed: f64,
    pub crit: f64,
    pub critperlevel: f64,
    pub attackrange: f64,
    pub movespeed: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RiotChampionPassive {
    pub name: String,
    pub description: String,
    pub image: RiotImage,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RiotChampionSpell {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cooldown: Vec<f64>,
    pub image: RiotImage,
}

/// One champion as served by the provider and as persisted in `champs`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RiotChampionData {
    pub id: String,
    pub key: String,
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub tags: Vec<String>,
    pub image: RiotImage,
    pub stats: RiotChampionStats,
    pub spells: Vec<RiotChampionSpell>,
    pub passive: RiotChampionPassive,
}

/// `championFull.json` envelope.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RiotChampion {
    pub data: HashMap<String, RiotChampionData>,
}

impl RiotChampionData {
    /// Every image the champion page embeds: portrait, passive, then spells
    /// in slot order.
    pub fn images_mut(&mut self) -> impl Iterator<Item = &mut RiotImage> {
        std::iter::once(&mut self.image)
            .chain(std::iter::once(&mut self.passive.image))
            .chain(self.spells.iter_mut().map(|spell| &mut spell.image))
    }
}
