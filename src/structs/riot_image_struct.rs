use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

/// Image reference as the provider describes it, plus the base64 payload
/// the pages embed. `encoded` is empty until the image has been fetched
/// for a specific game version.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RiotImage {
    pub full: String,
    pub group: String,
    pub encoded: String,
}

impl RiotImage {
    pub fn encode(&mut self, bytes: &[u8]) {
        self.encoded = STANDARD.encode(bytes);
    }
}
