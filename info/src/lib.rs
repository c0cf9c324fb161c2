/// The version of the workspace, as recorded in the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The VCS revision the binaries were built from, when the build
/// pipeline provides it.
pub const REVISION: Option<&str> = option_env!("FILMS_REVISION");

/// The time the binaries were built, when the build pipeline provides it.
pub const BUILD_TIMESTAMP: Option<&str> = option_env!("BUILD_TIMESTAMP");
