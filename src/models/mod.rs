//! Resource schemas.
//!
//! One module per resource type. Each defines the declared field set (every
//! field optional — the store does not enforce shapes beyond the create-time
//! required subset), a create payload carrying just the required subset, and
//! the [`Resource`](crate::controller::Resource) descriptor wiring the type
//! into the generic controller.

mod film;
mod planet;
mod starship;

pub use film::{Film, NewFilm};
pub use planet::{NewPlanet, Planet};
pub use starship::{NewStarship, Starship};

/// Required string fields must be present and non-empty.
pub(crate) fn provided(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}

/// Required numeric fields must be present and non-zero; a zero value is
/// rejected the same as a missing one.
pub(crate) fn provided_number(field: &Option<f64>) -> bool {
    field.is_some_and(|value| value != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::CreatePayload;
    use serde_json::json;

    fn new_film(value: serde_json::Value) -> NewFilm {
        serde_json::from_value(value).unwrap()
    }

    fn new_planet(value: serde_json::Value) -> NewPlanet {
        serde_json::from_value(value).unwrap()
    }

    fn new_starship(value: serde_json::Value) -> NewStarship {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn film_requires_title_director_release_date() {
        let complete = new_film(json!({
            "title": "A New Hope",
            "director": "George Lucas",
            "release_date": "1977-05-25",
        }));
        assert!(complete.has_required());

        for missing in ["title", "director", "release_date"] {
            let mut body = json!({
                "title": "A New Hope",
                "director": "George Lucas",
                "release_date": "1977-05-25",
            });
            body.as_object_mut().unwrap().remove(missing);
            assert!(!new_film(body).has_required(), "missing {missing}");
        }
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let payload = new_film(json!({
            "title": "",
            "director": "George Lucas",
            "release_date": "1977-05-25",
        }));
        assert!(!payload.has_required());
    }

    #[test]
    fn planet_requires_nonzero_diameter() {
        let complete = new_planet(json!({
            "name": "Tatooine",
            "diameter": 10465,
            "terrain": "desert",
        }));
        assert!(complete.has_required());

        let zero_diameter = new_planet(json!({
            "name": "Tatooine",
            "diameter": 0,
            "terrain": "desert",
        }));
        assert!(!zero_diameter.has_required());

        let no_diameter = new_planet(json!({"name": "Tatooine", "terrain": "desert"}));
        assert!(!no_diameter.has_required());
    }

    #[test]
    fn starship_requires_name_and_model() {
        assert!(new_starship(json!({"name": "X-wing", "model": "T-65 X-wing"})).has_required());
        assert!(!new_starship(json!({"name": "X-wing"})).has_required());
        assert!(!new_starship(json!({"model": "T-65 X-wing"})).has_required());
        assert!(!new_starship(json!({})).has_required());
    }

    #[test]
    fn unknown_fields_do_not_break_create_payloads() {
        let payload = new_film(json!({
            "title": "A New Hope",
            "director": "George Lucas",
            "release_date": "1977-05-25",
            "url": "https://example.com/films/1",
        }));
        assert!(payload.has_required());
    }

    #[test]
    fn schema_round_trips_fixture_shape() {
        let film: Film = serde_json::from_value(json!({
            "title": "A New Hope",
            "episode_id": 4,
            "opening_crawl": "It is a period of civil war...",
            "director": "George Lucas",
            "producer": "Gary Kurtz, Rick McCallum",
            "release_date": "1977-05-25",
            "created": "2014-12-10T14:23:31.880000Z",
            "edited": "2014-12-20T19:49:45.256000Z",
        }))
        .unwrap();

        assert_eq!(film.title.as_deref(), Some("A New Hope"));
        assert_eq!(film.episode_id, Some(4.0));

        let value = serde_json::to_value(&film).unwrap();
        assert_eq!(value["director"], json!("George Lucas"));
        // Absent fields stay absent instead of serializing as null.
        assert!(value.get("unknown").is_none());
    }
}
