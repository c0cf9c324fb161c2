use std::sync::Arc;

use log::{error, Logger};
use warp::http::StatusCode;
use warp::reject;
use warp::reply::{json, with_status, Json, WithStatus};

use crate::errors::BackendError;

pub mod admin;
mod handlers;
mod query;
mod rejection;
mod response;

pub use internal::*;

use response::ErrorBody;

/// The maximum request body size to accept. This should be enforced by
/// the HTTP gateway, so on the Rust side it’s set to a generous number.
const MAX_CONTENT_LENGTH: u64 = 1024 * 1024;

pub async fn format_rejection(
    logger: Arc<Logger>,
    rej: reject::Rejection,
) -> Result<WithStatus<Json>, reject::Rejection> {
    if let Some(r) = rej.find::<rejection::Rejection>() {
        let e = &r.error;
        let status = status_code_for(e);
        error!(logger, "Backend error"; "context" => ?r.context, "error" => ?r.error, "status" => %status, "message" => %r.error);

        return Ok(with_status(
            json(&ErrorBody::new(status.as_u16(), format!("{}", e))),
            status,
        ));
    }

    Err(rej)
}

fn status_code_for(e: &BackendError) -> StatusCode {
    use BackendError::*;

    match e {
        NotFound(..) => StatusCode::NOT_FOUND,
        InvalidId(..) => StatusCode::BAD_REQUEST,
    }
}

mod internal {
    use warp::body::{content_length_limit, json};
    use warp::filters::BoxedFilter;
    use warp::path::end;
    use warp::Filter;
    use warp::Reply;
    use warp::{delete, get as g, path as p, path::param as par, post, put, query};

    use super::{handlers, query as q, MAX_CONTENT_LENGTH};
    use crate::environment::Environment;

    type Route = BoxedFilter<(Box<dyn Reply>,)>;

    macro_rules! route_filter {
    ($route_variable:ident; $first:expr) => (let $route_variable = $route_variable.and($first););
    ($route_variable:ident; $first:expr, $($rest:expr),+) => (
        let $route_variable = $route_variable.and($first);
        route_filter!($route_variable; $($rest),+);
    )
}

    macro_rules! route {
    ($name:ident => $handler:ident, $route_variable:ident; $($filters:expr),+) => (
        pub fn $name(environment: Environment) -> Route {
            let r = environment.urls.films_path.clone();

            let $route_variable = warp::any()
                .map(move || environment.clone())
                .and(p(r));

            route_filter!($route_variable; $($filters),+);

            $route_variable.and_then(handlers::$handler)
                .boxed()
        }
    );
}

    route!(make_list_route => list, rt; query::<q::ListQuery>(), end(), g());
    route!(make_create_route => create, rt; end(), post(), content_length_limit(MAX_CONTENT_LENGTH).and(json()));
    route!(make_retrieve_route => retrieve, rt; par::<String>(), end(), g());
    route!(make_update_route => update, rt; par::<String>(), end(), put(), content_length_limit(MAX_CONTENT_LENGTH).and(json()));
    route!(make_delete_route => delete, rt; par::<String>(), end(), delete());
}
