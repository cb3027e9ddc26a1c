//! Pokemon proxy API client

use serde::Deserialize;

use crate::sprite::{self, SpriteImage};
use crate::state::{Ability, CreatureDetail, CreatureSummary, SpriteSet, StatEntry};

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("response parse error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct IndexResponse {
    results: Vec<IndexEntry>,
}

#[derive(Debug, Deserialize)]
struct IndexEntry {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct CreatureResponse {
    id: u32,
    name: String,
    weight: u32,
    height: u32,
    base_experience: Option<u32>,
    order: Option<i32>,
    #[serde(default)]
    sprites: serde_json::Value,
    #[serde(default)]
    abilities: Vec<AbilitySlot>,
    stats: Vec<StatSlot>,
    types: Vec<TypeSlot>,
}

#[derive(Debug, Deserialize)]
struct AbilitySlot {
    ability: NamedResource,
    #[serde(default)]
    is_hidden: bool,
}

#[derive(Debug, Deserialize)]
struct StatSlot {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    type_info: NamedResource,
}

pub fn parse_index(bytes: &[u8]) -> Result<Vec<CreatureSummary>, ApiError> {
    let response: IndexResponse = serde_json::from_slice(bytes)?;
    Ok(response
        .results
        .into_iter()
        .map(|entry| CreatureSummary {
            name: entry.name,
            url: entry.url,
        })
        .collect())
}

pub fn parse_creature(bytes: &[u8]) -> Result<CreatureDetail, ApiError> {
    let response: CreatureResponse = serde_json::from_slice(bytes)?;
    let sprites = SpriteSet {
        official_artwork: pointer_string(
            &response.sprites,
            "/other/official-artwork/front_default",
        ),
        dream_world: pointer_string(&response.sprites, "/other/dream_world/front_default"),
        home: pointer_string(&response.sprites, "/other/home/front_default"),
        front_default: pointer_string(&response.sprites, "/front_default"),
    };

    Ok(CreatureDetail {
        id: response.id,
        name: response.name,
        weight: response.weight,
        height: response.height,
        base_experience: response.base_experience,
        order: response.order,
        sprites,
        abilities: response
            .abilities
            .into_iter()
            .map(|slot| Ability {
                name: slot.ability.name,
                is_hidden: slot.is_hidden,
            })
            .collect(),
        stats: response
            .stats
            .into_iter()
            .map(|slot| StatEntry {
                name: slot.stat.name,
                base_stat: slot.base_stat,
            })
            .collect(),
        types: response
            .types
            .into_iter()
            .map(|slot| slot.type_info.name)
            .collect(),
    })
}

fn pointer_string(value: &serde_json::Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}

// ============================================================================
// Client
// ============================================================================

/// Thin wrapper over a shared `reqwest::Client`. Cheap to clone.
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// `GET {api_base}/{term}`
    pub async fn fetch_creature(&self, url: &str) -> Result<CreatureDetail, ApiError> {
        let bytes = self.get_bytes(url).await?;
        let detail = parse_creature(&bytes)?;
        tracing::debug!(id = detail.id, name = %detail.name, "creature loaded");
        Ok(detail)
    }

    /// `GET {api_base}`. The proxy returns the whole list in one page.
    pub async fn fetch_index(&self, url: &str) -> Result<Vec<CreatureSummary>, ApiError> {
        let bytes = self.get_bytes(url).await?;
        let entries = parse_index(&bytes)?;
        tracing::info!(count = entries.len(), "index loaded");
        Ok(entries)
    }

    pub async fn fetch_sprite(
        &self,
        url: &str,
        max_width: u32,
        max_height: u32,
    ) -> Result<SpriteImage, ApiError> {
        let bytes = self.get_bytes(url).await?;
        Ok(sprite::decode_sprite(&bytes, max_width, max_height)?)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(response.bytes().await?.to_vec())
    }
}
