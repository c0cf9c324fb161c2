use std::error::Error;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use reqwest::{Client, StatusCode};
use structopt::StructOpt;
use url::Url;
use uuid::Uuid;

use films::film::{AgeRating, CreateFilmRequest, Film, UpdateFilmRequest};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "films-client",
    about = "Interactive terminal client for the films server"
)]
struct Opt {
    /// The base URL of the films server
    #[structopt(long, default_value = "http://localhost:8001/")]
    base_url: Url,

    /// The path segment the film routes live under
    #[structopt(long, default_value = "films")]
    films_path: String,
}

struct Api {
    client: Client,
    films_url: Url,
}

impl Api {
    fn new(opt: &Opt) -> Result<Self, url::ParseError> {
        let films_url = opt.base_url.join(&format!("{}/", opt.films_path))?;

        Ok(Api {
            client: Client::new(),
            films_url,
        })
    }

    fn film_url(&self, id: &Uuid) -> Url {
        self.films_url
            .join(&id.to_string())
            .expect("join film ID onto films URL")
    }

    async fn list(&self) -> Result<Vec<Film>, reqwest::Error> {
        self.client
            .get(self.films_url.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Film>, reqwest::Error> {
        let response = self.client.get(self.film_url(id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(response.error_for_status()?.json().await?))
    }

    async fn create(&self, request: &CreateFilmRequest) -> Result<Film, reqwest::Error> {
        self.client
            .post(self.films_url.clone())
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn update(
        &self,
        id: &Uuid,
        request: &UpdateFilmRequest,
    ) -> Result<Option<Film>, reqwest::Error> {
        let response = self
            .client
            .put(self.film_url(id))
            .json(request)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(response.error_for_status()?.json().await?))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, reqwest::Error> {
        let response = self.client.delete(self.film_url(id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        response.error_for_status()?;

        Ok(true)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let opt = Opt::from_args();
    let api = Api::new(&opt)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("=== Film Management System ===");
        println!("1. List all films");
        println!("2. Get film by ID");
        println!("3. Create new film");
        println!("4. Update film");
        println!("5. Delete film");
        println!("6. Exit");

        let choice = prompt(&mut input, "Choose an option: ")?;

        let result = match choice.as_str() {
            "1" => list_films(&api).await,
            "2" => get_film(&api, &mut input).await,
            "3" => create_film(&api, &mut input).await,
            "4" => update_film(&api, &mut input).await,
            "5" => delete_film(&api, &mut input).await,
            "6" => return Ok(()),
            _ => {
                println!("Invalid option. Please try again.");
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("Error: {}", e);
        }
    }
}

async fn list_films(api: &Api) -> Result<(), Box<dyn Error>> {
    println!("\n--- Listing all films ---");

    let films = api.list().await?;

    if films.is_empty() {
        println!("No films found.");
        return Ok(());
    }

    println!("Found {} films:", films.len());
    for (i, film) in films.iter().enumerate() {
        println!("{}. {} ({}) - {}", i + 1, film.title, film.year, film.director);
        println!(
            "   ID: {}, Rating: {:.1}, Duration: {} min",
            film.id, film.rating, film.duration
        );
        println!(
            "   Country: {}, Age Rating: {}",
            film.country, film.age_rating
        );
        if !film.actors.is_empty() {
            println!("   Actors: {}", film.actors.join(", "));
        }
        println!();
    }

    Ok(())
}

async fn get_film(api: &Api, input: &mut impl BufRead) -> Result<(), Box<dyn Error>> {
    let id = match prompt_id(input, "\nEnter film ID: ")? {
        Some(id) => id,
        None => return Ok(()),
    };

    println!("\n--- Getting film {} ---", id);

    match api.get(&id).await? {
        Some(film) => print_film_details(&film),
        None => println!("Film not found"),
    }

    Ok(())
}

async fn create_film(api: &Api, input: &mut impl BufRead) -> Result<(), Box<dyn Error>> {
    println!("\n--- Creating new film ---");

    let title = prompt(input, "Title: ")?;
    let year = prompt_parse(input, "Year: ")?;
    let country = prompt(input, "Country: ")?;
    let director = prompt(input, "Director: ")?;
    let duration = prompt_parse(input, "Duration (minutes): ")?;

    println!("Age Rating: 0+, 6+, 12+, 16+, 18+");
    let age_rating: AgeRating = prompt_parse(input, "Choose age rating: ")?;

    let request = CreateFilmRequest {
        title,
        year,
        country,
        director,
        duration,
        age_rating,
    };

    let film = api.create(&request).await?;

    println!("\nFilm created successfully!");
    print_film_details(&film);

    Ok(())
}

async fn update_film(api: &Api, input: &mut impl BufRead) -> Result<(), Box<dyn Error>> {
    let id = match prompt_id(input, "\nEnter film ID to update: ")? {
        Some(id) => id,
        None => return Ok(()),
    };

    println!("\n--- Getting current film data ---");
    let current = match api.get(&id).await? {
        Some(film) => film,
        None => {
            println!("Film not found");
            return Ok(());
        }
    };

    println!("Current film data:");
    print_film_details(&current);

    println!("\n--- Updating film (leave blank to keep current value) ---");

    // the update contract replaces every field, so unchanged ones are
    // re-submitted with their current values
    let title = prompt_or_keep(input, &format!("Title [{}]: ", current.title))?
        .unwrap_or_else(|| current.title.clone());
    let year = prompt_parse_or_keep(input, &format!("Year [{}]: ", current.year))?
        .unwrap_or(current.year);
    let country = prompt_or_keep(input, &format!("Country [{}]: ", current.country))?
        .unwrap_or_else(|| current.country.clone());
    let director = prompt_or_keep(input, &format!("Director [{}]: ", current.director))?
        .unwrap_or_else(|| current.director.clone());
    let rating = prompt_parse_or_keep(input, &format!("Rating [{:.1}]: ", current.rating))?
        .unwrap_or(current.rating);
    let duration = prompt_parse_or_keep(input, &format!("Duration [{}]: ", current.duration))?
        .unwrap_or(current.duration);
    let age_rating = prompt_parse_or_keep(input, &format!("Age Rating [{}]: ", current.age_rating))?
        .map(Ok)
        .unwrap_or_else(|| current.age_rating.parse::<AgeRating>())?;
    let actors = prompt_or_keep(input, &format!("Actors [{}]: ", current.actors.join(", ")))?
        .map(|raw| parse_actors(&raw))
        .unwrap_or_else(|| current.actors.clone());

    let request = UpdateFilmRequest {
        title,
        year,
        country,
        director,
        rating,
        duration,
        age_rating,
        actors,
    };

    match api.update(&id, &request).await? {
        Some(film) => {
            println!("\nFilm updated successfully!");
            print_film_details(&film);
        }
        None => println!("Film not found"),
    }

    Ok(())
}

async fn delete_film(api: &Api, input: &mut impl BufRead) -> Result<(), Box<dyn Error>> {
    let id = match prompt_id(input, "\nEnter film ID to delete: ")? {
        Some(id) => id,
        None => return Ok(()),
    };

    let confirm = prompt(
        input,
        &format!("Are you sure you want to delete film {}? (y/N): ", id),
    )?;
    if confirm.to_lowercase() != "y" && confirm.to_lowercase() != "yes" {
        println!("Deletion cancelled.");
        return Ok(());
    }

    println!("\n--- Deleting film {} ---", id);

    if api.delete(&id).await? {
        println!("Film deleted successfully");
    } else {
        println!("Film not found");
    }

    Ok(())
}

fn print_film_details(film: &Film) {
    println!("ID: {}", film.id);
    println!("Title: {}", film.title);
    println!("Year: {}", film.year);
    println!("Country: {}", film.country);
    println!("Director: {}", film.director);
    println!("Rating: {:.1}/10", film.rating);
    println!("Duration: {} minutes", film.duration);
    println!("Age Rating: {}", film.age_rating);
    if film.actors.is_empty() {
        println!("Actors: None");
    } else {
        println!("Actors: {}", film.actors.join(", "));
    }
}

fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim().to_owned())
}

/// Prompts once; an empty answer means "keep the current value".
fn prompt_or_keep(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    let raw = prompt(input, label)?;

    Ok(if raw.is_empty() { None } else { Some(raw) })
}

/// Prompts until the answer parses.
fn prompt_parse<T: FromStr>(input: &mut impl BufRead, label: &str) -> io::Result<T> {
    loop {
        match prompt(input, label)?.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid value. Please try again."),
        }
    }
}

/// Prompts until the answer parses or is left blank.
fn prompt_parse_or_keep<T: FromStr>(
    input: &mut impl BufRead,
    label: &str,
) -> io::Result<Option<T>> {
    loop {
        let raw = prompt(input, label)?;

        if raw.is_empty() {
            return Ok(None);
        }

        match raw.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid value. Please try again."),
        }
    }
}

fn prompt_id(input: &mut impl BufRead, label: &str) -> io::Result<Option<Uuid>> {
    let raw = prompt(input, label)?;

    match Uuid::parse_str(&raw) {
        Ok(id) => Ok(Some(id)),
        Err(e) => {
            println!("Invalid ID format: {}", e);
            Ok(None)
        }
    }
}

fn parse_actors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
