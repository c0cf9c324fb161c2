use url::Url;
use uuid::Uuid;

/// Convenience wrapper for URL generation functions.
#[derive(Clone)]
pub struct Urls {
    /// Top-level URL, including trailing slash.
    base: Url,

    /// Path for all film-related actions.
    pub(crate) films_path: String,

    /// Prefix for all film-related actions.
    films_prefix: String,
}

impl Urls {
    /// Create a new instance. `films_prefix` should *not* include a trailing slash.
    pub fn new(base: impl AsRef<str>, films_prefix: impl Into<String>) -> Self {
        let base =
            Url::parse(base.as_ref()).unwrap_or_else(|_| panic!("parse {} as URL", base.as_ref()));
        let films_path = films_prefix.into();
        let films_prefix = format!("{}/", films_path);

        Urls {
            base,
            films_path,
            films_prefix,
        }
    }

    pub fn films(&self) -> Url {
        self.base.join(&self.films_prefix).expect("get films URL")
    }

    pub fn film(&self, id: &Uuid) -> Url {
        let id = format!("{}", id);
        self.films()
            .join(&id)
            .unwrap_or_else(|_| panic!("get URL for film {}", id))
    }
}
