use reqwest::{Client, Response};
use tracing::debug;

use crate::{
    error::ProviderError,
    structs::{
        riot_champion_struct::{RiotChampion, RiotChampionData},
        riot_image_struct::RiotImage,
        riot_items_struct::{RiotItem, RiotItems},
    },
};

/// Source of static game data for a population run.
#[allow(async_fn_in_trait)]
pub trait StaticDataProvider {
    async fn champions(&self, version: &str) -> Result<Vec<RiotChampionData>, ProviderError>;

    async fn items(&self, version: &str) -> Result<Vec<RiotItem>, ProviderError>;

    /// Raw bytes of a champion, passive, spell or item image.
    async fn image(&self, version: &str, image: &RiotImage) -> Result<Vec<u8>, ProviderError>;

    /// Raw bytes of a champion's splash art for the given skin number.
    async fn splash(&self, champion_id: &str, skin: u8) -> Result<Vec<u8>, ProviderError>;
}

/// Riot's Data Dragon CDN.
pub struct DataDragon {
    client: Client,
    base_url: String,
    locale: String,
    api_key: Option<String>,
}

impl DataDragon {
    pub fn new(base_url: &str, locale: &str, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            locale: locale.to_string(),
            api_key,
        }
    }

    fn champions_url(&self, version: &str) -> String {
        format!(
            "{}/cdn/{}/data/{}/championFull.json",
            self.base_url, version, self.locale
        )
    }

    fn items_url(&self, version: &str) -> String {
        format!("{}/cdn/{}/data/{}/item.json", self.base_url, version, self.locale)
    }

    fn image_url(&self, version: &str, image: &RiotImage) -> String {
        format!(
            "{}/cdn/{}/img/{}/{}",
            self.base_url, version, image.group, image.full
        )
    }

    fn splash_url(&self, champion_id: &str, skin: u8) -> String {
        format!(
            "{}/cdn/img/champion/splash/{}_{}.jpg",
            self.base_url, champion_id, skin
        )
    }

    async fn get(&self, url: &str) -> Result<Response, ProviderError> {
        debug!(url, "provider request");
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.header("X-Riot-Token", key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        let bytes = self.get(url).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

impl StaticDataProvider for DataDragon {
    async fn champions(&self, version: &str) -> Result<Vec<RiotChampionData>, ProviderError> {
        let body = self.get(&self.champions_url(version)).await?.bytes().await?;
        let champions: RiotChampion = serde_json::from_slice(&body)?;
        Ok(champions.data.into_values().collect())
    }

    async fn items(&self, version: &str) -> Result<Vec<RiotItem>, ProviderError> {
        let body = self.get(&self.items_url(version)).await?.bytes().await?;
        let items: RiotItems = serde_json::from_slice(&body)?;
        Ok(items.data.into_values().collect())
    }

    async fn image(&self, version: &str, image: &RiotImage) -> Result<Vec<u8>, ProviderError> {
        if image.full.is_empty() || image.group.is_empty() {
            return Err(ProviderError::MissingAsset(format!(
                "image reference '{}/{}' is incomplete",
                image.group, image.full
            )));
        }
        self.get_bytes(&self.image_url(version, image)).await
    }

    async fn splash(&self, champion_id: &str, skin: u8) -> Result<Vec<u8>, ProviderError> {
        if champion_id.is_empty() {
            return Err(ProviderError::MissingAsset(
                "splash requested without a champion id".to_string(),
            ));
        }
        self.get_bytes(&self.splash_url(champion_id, skin)).await
    }
}
