use std::time::{Duration, Instant};

use log::debug;
use uuid::Uuid;
use warp::{
    http::StatusCode,
    reject,
    reply::{json, with_header, with_status, Reply},
};

use crate::environment::Environment;
use crate::errors::BackendError;
use crate::film::{CreateFilmRequest, UpdateFilmRequest};
use crate::routes::{
    query::ListQuery,
    rejection::{Context, Rejection},
};

const SERVER_TIMING_HEADER: &str = "server-timing";
type RouteResult = Result<Box<dyn Reply>, reject::Rejection>;

macro_rules! timed {
    ($($expression:stmt);+) => {
        let start = Instant::now();

        let result = { $($expression)+ };

        Ok(Box::new(with_header(
            result,
            SERVER_TIMING_HEADER,
            format_server_timing(start.elapsed()),
        )) as Box<dyn Reply>)
    };
}

pub async fn list(environment: Environment, query: ListQuery) -> RouteResult {
    timed! {
        debug!(environment.logger, "Listing films..."; "limit" => ?query.limit, "offset" => ?query.offset);

        let films = environment.repository.list(query.limit, query.offset);

        json(&films)
    }
}

pub async fn create(environment: Environment, request: CreateFilmRequest) -> RouteResult {
    timed! {
        debug!(environment.logger, "Creating film..."; "title" => &request.title);

        let film = environment.repository.create(request.into());

        with_header(
            with_status(json(&film), StatusCode::CREATED),
            "location",
            environment.urls.film(&film.id).as_str(),
        )
    }
}

pub async fn retrieve(environment: Environment, id: String) -> RouteResult {
    timed! {
        let error_handler = |e: BackendError| Rejection::new(Context::retrieve(id.clone()), e);

        let id = Uuid::parse_str(&id)
            .map_err(|_| BackendError::InvalidId(id.clone()))
            .map_err(error_handler)?;
        debug!(environment.logger, "Retrieving film..."; "id" => format!("{}", &id));

        let option = environment.repository.get(&id);

        match option {
            Some(film) => with_status(json(&film), StatusCode::OK),
            None => with_status(json(&()), StatusCode::NOT_FOUND),
        }
    }
}

pub async fn update(
    environment: Environment,
    id: String,
    request: UpdateFilmRequest,
) -> RouteResult {
    timed! {
        let error_handler = |e: BackendError| Rejection::new(Context::update(id.clone()), e);

        let id = Uuid::parse_str(&id)
            .map_err(|_| BackendError::InvalidId(id.clone()))
            .map_err(error_handler)?;
        debug!(environment.logger, "Updating film..."; "id" => format!("{}", &id));

        let film = environment
            .repository
            .update(&id, request.into())
            .ok_or(BackendError::NotFound(id))
            .map_err(error_handler)?;

        json(&film)
    }
}

pub async fn delete(environment: Environment, id: String) -> RouteResult {
    timed! {
        let error_handler = |e: BackendError| Rejection::new(Context::delete(id.clone()), e);

        let id = Uuid::parse_str(&id)
            .map_err(|_| BackendError::InvalidId(id.clone()))
            .map_err(error_handler)?;
        debug!(environment.logger, "Deleting film..."; "id" => format!("{}", &id));

        if environment.repository.delete(&id) {
            Box::new(StatusCode::NO_CONTENT) as Box<dyn Reply>
        } else {
            Box::new(with_status(json(&()), StatusCode::NOT_FOUND)) as Box<dyn Reply>
        }
    }
}

fn format_server_timing(seconds: Duration) -> String {
    format!("handler;dur={}", seconds.as_secs_f64() * 1000.0)
}
