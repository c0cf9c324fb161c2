use std::sync::Mutex;

use slog::Drain;
use slog::Fuse;
use slog_async::Async;
use slog_json::Json;

pub use slog::{debug, error, info, o, trace, warn, Logger};

/// Creates the root logger: JSON records on stderr, written from a
/// background thread, annotated with the build information.
pub fn initialize_logger() -> slog::Logger {
    let drain = Mutex::new(Json::default(std::io::stderr())).map(Fuse);
    let drain = Async::new(drain).build().fuse();

    Logger::root(
        drain,
        o!("version" => info::VERSION, "revision" => info::REVISION, "build_timestamp" => info::BUILD_TIMESTAMP),
    )
}

/// Creates a logger that swallows everything. Meant for tests that
/// exercise logging code paths without wanting their output.
pub fn discard_logger() -> slog::Logger {
    Logger::root(slog::Discard, o!())
}
