use uuid::Uuid;

use crate::film::{Film, FilmUpdate, NewFilm};

/// The number of films returned by a listing when the caller does not
/// supply a usable limit.
pub const DEFAULT_LIST_LIMIT: i64 = 20;

/// The film store. All operations are synchronous: they are pure
/// computation over an in-memory structure and never block on I/O.
///
/// Absence is a normal outcome, represented in the return types, never
/// an error and never a panic.
pub trait Repository: Send + Sync {
    /// Creates a film under a fresh ID. The stored film always starts
    /// with a zero rating and no actors, whatever the caller intended.
    fn create(&self, new: NewFilm) -> Film;

    /// Returns the current film for `id`, if any.
    fn get(&self, id: &Uuid) -> Option<Film>;

    /// Returns up to `limit` films after skipping `offset`, in creation
    /// order. Missing or non-positive values fall back to a limit of
    /// [`DEFAULT_LIST_LIMIT`] and an offset of zero.
    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Vec<Film>;

    /// Replaces every mutable field of the film for `id` and returns
    /// the result, or returns `None` and changes nothing.
    ///
    /// This is a full replacement, not a patch: a caller that wants to
    /// keep a field must re-supply its current value.
    fn update(&self, id: &Uuid, update: FilmUpdate) -> Option<Film>;

    /// Removes the film for `id`, reporting whether a removal occurred.
    /// Deleting an absent ID is not an error; it returns `false`.
    fn delete(&self, id: &Uuid) -> bool;
}

pub use self::memory::*;

mod memory {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use uuid::Uuid;

    use crate::film::{Film, FilmUpdate, NewFilm};

    use super::{Repository, DEFAULT_LIST_LIMIT};

    /// An in-memory film store.
    ///
    /// A single reader/writer lock guards the map and the order index
    /// together. Writers exclude all other access, so a film is never
    /// observable with only part of an update applied.
    ///
    /// Listing follows creation order. This is a deliberate deviation
    /// from the unordered enumeration of earlier versions, which made
    /// offset pagination drift between calls.
    #[derive(Default)]
    pub struct MemoryRepository {
        inner: RwLock<Inner>,
    }

    #[derive(Default)]
    struct Inner {
        films: HashMap<Uuid, Film>,
        // creation-ordered IDs; every entry has a film and vice versa
        order: Vec<Uuid>,
    }

    impl MemoryRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Repository for MemoryRepository {
        fn create(&self, new: NewFilm) -> Film {
            let mut inner = self.inner.write().unwrap();

            // Redraw on the astronomically unlikely v4 collision
            // rather than overwrite an existing film.
            let id = loop {
                let candidate = Uuid::new_v4();
                if !inner.films.contains_key(&candidate) {
                    break candidate;
                }
            };

            let film = Film {
                id,
                title: new.title,
                year: new.year,
                country: new.country,
                director: new.director,
                rating: 0.0,
                duration: new.duration,
                age_rating: new.age_rating,
                actors: vec![],
            };

            inner.films.insert(id, film.clone());
            inner.order.push(id);

            film
        }

        fn get(&self, id: &Uuid) -> Option<Film> {
            let inner = self.inner.read().unwrap();

            inner.films.get(id).cloned()
        }

        fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Vec<Film> {
            let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIST_LIMIT) as usize;
            let offset = offset.filter(|o| *o > 0).unwrap_or(0) as usize;

            let inner = self.inner.read().unwrap();

            inner
                .order
                .iter()
                .skip(offset)
                .take(limit)
                .map(|id| inner.films[id].clone())
                .collect()
        }

        fn update(&self, id: &Uuid, update: FilmUpdate) -> Option<Film> {
            let mut inner = self.inner.write().unwrap();

            let film = inner.films.get_mut(id)?;

            film.title = update.title;
            film.year = update.year;
            film.country = update.country;
            film.director = update.director;
            film.rating = update.rating;
            film.duration = update.duration;
            film.age_rating = update.age_rating;
            film.actors = update.actors;

            Some(film.clone())
        }

        fn delete(&self, id: &Uuid) -> bool {
            let mut inner = self.inner.write().unwrap();

            if inner.films.remove(id).is_some() {
                inner.order.retain(|existing| existing != id);
                true
            } else {
                false
            }
        }
    }
}
