use std::sync::Arc;

use serde_json::{json, Value};
use warp::filters::BoxedFilter;
use warp::http::StatusCode;
use warp::Filter;
use warp::Reply;

use films::environment::Environment;
use films::repository::MemoryRepository;
use films::routes;
use films::urls::Urls;
use log::discard_logger;

const FILMS_PATH: &str = "films";
const BASE_URL: &str = "http://localhost:8001/";

fn make_api() -> BoxedFilter<(impl Reply,)> {
    let logger = Arc::new(discard_logger());
    let repository = Arc::new(MemoryRepository::new());
    let urls = Arc::new(Urls::new(BASE_URL, FILMS_PATH));

    let environment = Environment::new(logger.clone(), repository, urls);

    routes::make_list_route(environment.clone())
        .or(routes::make_create_route(environment.clone()))
        .or(routes::make_retrieve_route(environment.clone()))
        .or(routes::make_update_route(environment.clone()))
        .or(routes::make_delete_route(environment))
        .recover(move |r| routes::format_rejection(logger.clone(), r))
        .boxed()
}

fn matrix_body() -> Value {
    json!({
        "title": "The Matrix",
        "year": 1999,
        "country": "USA",
        "director": "Lana Wachowski",
        "duration": 136,
        "ageRating": "16+",
    })
}

async fn create_film(api: &BoxedFilter<(impl Reply + 'static,)>, body: &Value) -> Value {
    let response = warp::test::request()
        .path("/films")
        .method("POST")
        .json(body)
        .reply(api)
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    serde_json::from_slice(response.body()).expect("parse created film")
}

#[tokio::test]
async fn crud_lifecycle_works() {
    let api = make_api();

    // nothing exists yet
    let response = warp::test::request().path("/films").reply(&api).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(String::from_utf8_lossy(response.body()), "[]");

    // create
    let created = create_film(&api, &matrix_body()).await;
    let id = created["id"].as_str().expect("created film has an ID");
    assert_eq!(created["title"], "The Matrix");
    assert_eq!(created["rating"], 0.0);
    assert_eq!(created["actors"], json!([]));
    assert_eq!(created["ageRating"], "16+");

    // retrieve the same record
    let response = warp::test::request()
        .path(&format!("/films/{}", id))
        .reply(&api)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let retrieved: Value = serde_json::from_slice(response.body()).expect("parse film");
    assert_eq!(retrieved, created);

    // full update, including a rating and actors
    let update = json!({
        "title": "The Matrix",
        "year": 1999,
        "country": "USA",
        "director": "Lana Wachowski",
        "rating": 8.5,
        "duration": 136,
        "ageRating": "16+",
        "actors": ["Keanu Reeves", "Carrie-Anne Moss"],
    });
    let response = warp::test::request()
        .path(&format!("/films/{}", id))
        .method("PUT")
        .json(&update)
        .reply(&api)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = serde_json::from_slice(response.body()).expect("parse film");
    assert_eq!(updated["id"].as_str(), Some(id));
    assert_eq!(updated["rating"], 8.5);
    assert_eq!(updated["actors"], json!(["Keanu Reeves", "Carrie-Anne Moss"]));

    let response = warp::test::request()
        .path(&format!("/films/{}", id))
        .reply(&api)
        .await;
    let retrieved: Value = serde_json::from_slice(response.body()).expect("parse film");
    assert_eq!(retrieved["rating"], 8.5);

    // delete, then the record is gone
    let response = warp::test::request()
        .path(&format!("/films/{}", id))
        .method("DELETE")
        .reply(&api)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = warp::test::request()
        .path(&format!("/films/{}", id))
        .method("DELETE")
        .reply(&api)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = warp::test::request()
        .path(&format!("/films/{}", id))
        .reply(&api)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn creation_answers_with_a_location_header() {
    let api = make_api();

    let response = warp::test::request()
        .path("/films")
        .method("POST")
        .json(&matrix_body())
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Value = serde_json::from_slice(response.body()).expect("parse created film");
    let id = created["id"].as_str().expect("created film has an ID");

    let location = response
        .headers()
        .get("location")
        .expect("location header present")
        .to_str()
        .expect("location header is a string");
    assert_eq!(location, format!("{}{}/{}", BASE_URL, FILMS_PATH, id));
}

#[tokio::test]
async fn creation_ignores_caller_supplied_rating_and_actors() {
    let api = make_api();

    let mut body = matrix_body();
    body["rating"] = json!(9.9);
    body["actors"] = json!(["Somebody"]);

    let created = create_film(&api, &body).await;
    assert_eq!(created["rating"], 0.0);
    assert_eq!(created["actors"], json!([]));
}

#[tokio::test]
async fn listing_paginates_in_creation_order() {
    let api = make_api();

    let mut ids = vec![];
    for i in 0..25 {
        let mut body = matrix_body();
        body["title"] = json!(format!("Film {}", i));
        let created = create_film(&api, &body).await;
        ids.push(created["id"].as_str().expect("ID").to_owned());
    }

    // default limit
    let response = warp::test::request().path("/films").reply(&api).await;
    let films: Vec<Value> = serde_json::from_slice(response.body()).expect("parse films");
    assert_eq!(films.len(), 20);
    assert_eq!(films[0]["id"].as_str(), Some(ids[0].as_str()));

    // explicit limit and offset
    let response = warp::test::request()
        .path("/films?limit=3&offset=10")
        .reply(&api)
        .await;
    let films: Vec<Value> = serde_json::from_slice(response.body()).expect("parse films");
    assert_eq!(films.len(), 3);
    assert_eq!(films[0]["title"], "Film 10");

    // offset past the end yields an empty page, not an error
    let response = warp::test::request()
        .path("/films?offset=100")
        .reply(&api)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(String::from_utf8_lossy(response.body()), "[]");
}

#[tokio::test]
async fn malformed_ids_are_rejected() {
    let api = make_api();

    for &method in &["GET", "PUT", "DELETE"] {
        let mut request = warp::test::request()
            .path("/films/not-a-uuid")
            .method(method);

        if method == "PUT" {
            request = request.json(&json!({
                "title": "x",
                "year": 2000,
                "country": "x",
                "director": "x",
                "rating": 1.0,
                "duration": 90,
                "ageRating": "0+",
                "actors": [],
            }));
        }

        let response = request.reply(&api).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "{} on a malformed ID",
            method
        );

        let body: Value = serde_json::from_slice(response.body()).expect("parse error body");
        assert_eq!(body["code"], 400);
        assert!(body["message"]
            .as_str()
            .expect("message is a string")
            .contains("invalid film ID"));
    }
}

#[tokio::test]
async fn updating_a_missing_film_answers_not_found() {
    let api = make_api();

    let response = warp::test::request()
        .path("/films/00000000-0000-4000-8000-000000000000")
        .method("PUT")
        .json(&json!({
            "title": "Ghost",
            "year": 2000,
            "country": "x",
            "director": "x",
            "rating": 1.0,
            "duration": 90,
            "ageRating": "0+",
            "actors": [],
        }))
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = serde_json::from_slice(response.body()).expect("parse error body");
    assert_eq!(body["code"], 404);
    assert!(body["message"]
        .as_str()
        .expect("message is a string")
        .contains("not found"));
}

#[tokio::test]
async fn unknown_age_ratings_fail_validation() {
    let api = make_api();

    let mut body = matrix_body();
    body["ageRating"] = json!("21+");

    let response = warp::test::request()
        .path("/films")
        .method("POST")
        .json(&body)
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
