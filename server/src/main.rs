use std::error::Error;
use std::sync::Arc;

use warp::Filter;

use films::config::get_variable;
use films::environment::Environment;
use films::repository::MemoryRepository;
use films::routes;
use films::urls::Urls;
use futures::future::FutureExt;
use log::{info, initialize_logger};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let logger = initialize_logger();

    let main_port: u16 = get_variable("FILMS_PORT")
        .parse()
        .expect("parse FILMS_PORT as u16");
    let admin_port: u16 = get_variable("FILMS_ADMIN_PORT")
        .parse()
        .expect("parse FILMS_ADMIN_PORT as u16");

    info!(logger, "Starting..."; "main_port" => main_port, "admin_port" => admin_port);
    let logger = Arc::new(logger);

    let repository = Arc::new(MemoryRepository::new());

    let urls = Arc::new(Urls::new(
        get_variable("FILMS_BASE_URL"),
        get_variable("FILMS_PATH"),
    ));

    let environment = Environment::new(logger.clone(), repository, urls);

    let (termination_sender, mut termination_receiver) = mpsc::channel::<()>(1);

    let terminate = Arc::new(move || {
        let termination_sender = termination_sender.clone();

        async move {
            let termination_sender = termination_sender.clone();
            termination_sender.send(()).await.unwrap();
        }
        .boxed()
    });

    let should_terminate = async move {
        termination_receiver.recv().await;
    }
    .shared();

    let ctrlc = {
        let should_terminate = should_terminate.clone();
        let terminate = terminate.clone();

        let signal = tokio::signal::ctrl_c();

        async move {
            let terminate = terminate.clone();

            tokio::select! {
                _ = should_terminate => {},
                _ = signal => {
                    terminate().await;
                }
            }
        }
    };

    let main_server = {
        let should_terminate = should_terminate.clone();

        let logger2 = logger.clone();

        let list_route = routes::make_list_route(environment.clone());
        let create_route = routes::make_create_route(environment.clone());
        let retrieve_route = routes::make_retrieve_route(environment.clone());
        let update_route = routes::make_update_route(environment.clone());
        let delete_route = routes::make_delete_route(environment.clone());

        let routes = list_route
            .or(create_route)
            .or(retrieve_route)
            .or(update_route)
            .or(delete_route)
            .recover(move |r| routes::format_rejection(logger2.clone(), r));

        let (_, main_server) =
            warp::serve(routes).bind_with_graceful_shutdown(([0, 0, 0, 0], main_port), async {
                should_terminate.await;
            });

        main_server
    };

    let admin_server = {
        let should_terminate = should_terminate.clone();
        let terminate = terminate.clone();

        let routes = routes::admin::make_healthz_route(environment.clone()).or(
            routes::admin::make_termination_route(environment.clone(), terminate),
        );

        let (_, admin_server) =
            warp::serve(routes).bind_with_graceful_shutdown(([0, 0, 0, 0], admin_port), async {
                should_terminate.await;
            });

        admin_server
    };

    tokio::join!(ctrlc, main_server, admin_server);

    info!(logger, "Exiting gracefully...");

    Ok(())
}
