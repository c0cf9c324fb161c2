use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single film in the repository.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    /// The ID of the film. Assigned on creation, never reassigned.
    pub id: Uuid,

    /// The title provided.
    pub title: String,

    /// The year of release.
    pub year: i32,

    /// The country of origin.
    pub country: String,

    /// The director's name.
    pub director: String,

    /// The score out of ten. Always zero on a freshly created film.
    pub rating: f32,

    /// The running time in minutes.
    pub duration: i32,

    /// The age-rating category. The repository treats this as opaque
    /// text; the request schemas restrict it to the known set.
    pub age_rating: String,

    /// The names of the actors, in billing order. Always empty on a
    /// freshly created film.
    pub actors: Vec<String>,
}

/// The fields accepted when creating a film. `rating` and `actors` are
/// deliberately absent: creation forces them to zero and empty.
#[derive(Clone, Debug)]
pub struct NewFilm {
    pub title: String,
    pub year: i32,
    pub country: String,
    pub director: String,
    pub duration: i32,
    pub age_rating: String,
}

/// A full replacement for every mutable field of a film. Callers that
/// want to keep a field must re-supply its current value.
#[derive(Clone, Debug)]
pub struct FilmUpdate {
    pub title: String,
    pub year: i32,
    pub country: String,
    pub director: String,
    pub rating: f32,
    pub duration: i32,
    pub age_rating: String,
    pub actors: Vec<String>,
}

/// An age-rating category. Deserialization rejects anything outside
/// this set, so validation happens at the edge and the stored value
/// stays free-form text.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub enum AgeRating {
    #[serde(rename = "0+")]
    ZeroPlus,
    #[serde(rename = "6+")]
    SixPlus,
    #[serde(rename = "12+")]
    TwelvePlus,
    #[serde(rename = "16+")]
    SixteenPlus,
    #[serde(rename = "18+")]
    EighteenPlus,
}

impl AgeRating {
    pub fn as_str(&self) -> &'static str {
        use AgeRating::*;

        match self {
            ZeroPlus => "0+",
            SixPlus => "6+",
            TwelvePlus => "12+",
            SixteenPlus => "16+",
            EighteenPlus => "18+",
        }
    }
}

impl fmt::Display for AgeRating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AgeRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use AgeRating::*;

        match s {
            "0+" => Ok(ZeroPlus),
            "6+" => Ok(SixPlus),
            "12+" => Ok(TwelvePlus),
            "16+" => Ok(SixteenPlus),
            "18+" => Ok(EighteenPlus),
            other => Err(format!("unknown age rating: {}", other)),
        }
    }
}

/// The body of a film-creation request.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilmRequest {
    pub title: String,
    pub year: i32,
    pub country: String,
    pub director: String,
    pub duration: i32,
    pub age_rating: AgeRating,
}

impl From<CreateFilmRequest> for NewFilm {
    fn from(request: CreateFilmRequest) -> Self {
        NewFilm {
            title: request.title,
            year: request.year,
            country: request.country,
            director: request.director,
            duration: request.duration,
            age_rating: request.age_rating.to_string(),
        }
    }
}

/// The body of a film-update request. Every mutable field is required.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilmRequest {
    pub title: String,
    pub year: i32,
    pub country: String,
    pub director: String,
    pub rating: f32,
    pub duration: i32,
    pub age_rating: AgeRating,
    pub actors: Vec<String>,
}

impl From<UpdateFilmRequest> for FilmUpdate {
    fn from(request: UpdateFilmRequest) -> Self {
        FilmUpdate {
            title: request.title,
            year: request.year,
            country: request.country,
            director: request.director,
            rating: request.rating,
            duration: request.duration,
            age_rating: request.age_rating.to_string(),
            actors: request.actors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AgeRating;

    #[test]
    fn age_ratings_serialize_to_their_labels() {
        assert_eq!(
            serde_json::to_string(&AgeRating::TwelvePlus).unwrap(),
            "\"12+\""
        );
        assert_eq!(
            serde_json::from_str::<AgeRating>("\"18+\"").unwrap(),
            AgeRating::EighteenPlus
        );
    }

    #[test]
    fn unknown_age_ratings_are_rejected() {
        assert!(serde_json::from_str::<AgeRating>("\"21+\"").is_err());
        assert!("13+".parse::<AgeRating>().is_err());
        assert_eq!("0+".parse::<AgeRating>().unwrap(), AgeRating::ZeroPlus);
    }
}
