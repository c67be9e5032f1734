use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::riot_image_struct::RiotImage;

/// One item as served by the provider and as persisted in `items`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Serialize)]
#[serde(default)]
pub struct RiotItem {
    pub name: String,
    pub description: String,
    pub plaintext: String,
    pub image: RiotImage,
}

/// `item.json` envelope, keyed by item id.
#[derive(Debug, Deserialize, Default, Serialize)]
#[serde(default)]
pub struct RiotItems {
    pub data: HashMap<String, RiotItem>,
}
