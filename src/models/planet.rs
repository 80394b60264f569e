use super::{provided, provided_number};
use crate::controller::{CreatePayload, Resource};
use crate::state::AppState;
use crate::store::Collection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Declared shape of a planet record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Planet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_period: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbital_period: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_water: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited: Option<String>,
}

/// Create payload: the required subset of [`Planet`].
#[derive(Debug, Deserialize)]
pub struct NewPlanet {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub diameter: Option<f64>,
    #[serde(default)]
    pub terrain: Option<String>,
}

impl CreatePayload for NewPlanet {
    fn has_required(&self) -> bool {
        provided(&self.name) && provided_number(&self.diameter) && provided(&self.terrain)
    }
}

impl Resource for Planet {
    const SINGULAR: &'static str = "planet";
    const TITLE: &'static str = "Planet";
    const PLURAL: &'static str = "planets";

    type Create = NewPlanet;

    fn collection(state: &AppState) -> &Collection {
        &state.planets
    }
}
