use super::provided;
use crate::controller::{CreatePayload, Resource};
use crate::state::AppState;
use crate::store::Collection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Declared shape of a film record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Film {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_id: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_crawl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited: Option<String>,
}

/// Create payload: the required subset of [`Film`].
#[derive(Debug, Deserialize)]
pub struct NewFilm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl CreatePayload for NewFilm {
    fn has_required(&self) -> bool {
        provided(&self.title) && provided(&self.director) && provided(&self.release_date)
    }
}

impl Resource for Film {
    const SINGULAR: &'static str = "film";
    const TITLE: &'static str = "Film";
    const PLURAL: &'static str = "films";

    type Create = NewFilm;

    fn collection(state: &AppState) -> &Collection {
        &state.films
    }
}
