//! Startup data seeding.
//!
//! Loads fixture data into empty collections once at process startup. The
//! guard is the films collection: if it already holds records, seeding is a
//! no-op and never overwrites or duplicates existing data. The three fixture
//! reads fan out concurrently and join before the inserts, which run
//! sequentially (films, then planets, then starships). A failure anywhere
//! aborts the remaining steps; the service keeps serving regardless.

use crate::models::{Film, Planet, Starship};
use crate::state::AppState;
use crate::store::{Document, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// How many records each collection received.
#[derive(Debug, PartialEq, Eq)]
pub struct SeedReport {
    pub films: usize,
    pub planets: usize,
    pub starships: usize,
}

/// Startup entry point, spawned fire-and-forget before the server starts
/// listening. Failures are logged and swallowed.
pub async fn run(state: AppState) {
    match seed_if_empty(&state).await {
        Ok(Some(report)) => tracing::info!(
            films = report.films,
            planets = report.planets,
            starships = report.starships,
            "fixture data loaded"
        ),
        Ok(None) => tracing::debug!("films collection already populated, skipping fixture load"),
        Err(error) => tracing::error!(error = %error, "fixture seeding failed"),
    }
}

/// Seed all three collections from fixture files if the films collection is
/// empty. Returns `None` when the guard skips seeding.
pub async fn seed_if_empty(state: &AppState) -> Result<Option<SeedReport>, SeedError> {
    if !state.films.is_empty().await? {
        return Ok(None);
    }

    let dir = state.config.fixtures_path();
    let (films, planets, starships) = tokio::try_join!(
        load_fixture::<Film>(dir.join("films.json")),
        load_fixture::<Planet>(dir.join("planets.json")),
        load_fixture::<Starship>(dir.join("starships.json")),
    )?;

    let report = SeedReport {
        films: state.films.insert_many(films).await?,
        planets: state.planets.insert_many(planets).await?,
        starships: state.starships.insert_many(starships).await?,
    };
    Ok(Some(report))
}

/// Read one fixture file and parse it as a sequence of typed records,
/// returning them as store documents.
async fn load_fixture<T>(path: PathBuf) -> Result<Vec<Document>, SeedError>
where
    T: DeserializeOwned + Serialize,
{
    let bytes = tokio::fs::read(&path).await.map_err(|source| SeedError::Read {
        path: path.clone(),
        source,
    })?;
    let records: Vec<T> = serde_json::from_slice(&bytes).map_err(|source| SeedError::Parse {
        path: path.clone(),
        source,
    })?;

    let mut docs = Vec::with_capacity(records.len());
    for record in records {
        let value = serde_json::to_value(&record).map_err(|source| SeedError::Parse {
            path: path.clone(),
            source,
        })?;
        if let Value::Object(doc) = value {
            docs.push(doc);
        }
    }
    Ok(docs)
}
