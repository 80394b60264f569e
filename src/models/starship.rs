use super::provided;
use crate::controller::{CreatePayload, Resource};
use crate::state::AppState;
use crate::store::Collection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Declared shape of a starship record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Starship {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_in_credits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_atmosphering_speed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passengers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo_capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumables: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperdrive_rating: Option<f64>,
    #[serde(rename = "MGLT", skip_serializing_if = "Option::is_none")]
    pub mglt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starship_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited: Option<String>,
}

/// Create payload: the required subset of [`Starship`].
#[derive(Debug, Deserialize)]
pub struct NewStarship {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl CreatePayload for NewStarship {
    fn has_required(&self) -> bool {
        provided(&self.name) && provided(&self.model)
    }
}

impl Resource for Starship {
    const SINGULAR: &'static str = "starship";
    const TITLE: &'static str = "Starship";
    const PLURAL: &'static str = "starships";

    type Create = NewStarship;

    fn collection(state: &AppState) -> &Collection {
        &state.starships
    }
}
