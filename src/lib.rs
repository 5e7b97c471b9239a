#[macro_use]
extern crate rocket;

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use rocket::{Build, Rocket};

pub mod api;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod model;

pub use config::Config;

use config::{ConfigFairing, EngineFairing};
use discovery::DiscoveryFairing;
use logging::LoggerFairing;

/// Build the server from the default figment (`Rocket.toml` + `ROCKET_*`
/// environment variables).
pub fn build() -> Rocket<Build> {
    assemble(rocket::build())
}

/// Mount the routes and attach the fairings. `ConfigFairing` must come
/// first; the engine is constructed from its managed state.
fn assemble(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket
        .mount("/", api::routes())
        .attach(ConfigFairing)
        .attach(EngineFairing)
        .attach(DiscoveryFairing)
        .attach(LoggerFairing)
}

/// The authority identity every test runs with.
#[cfg(test)]
pub(crate) const TEST_AUTHORITY: &str = "returning-officer";

/// A local client over a fresh engine, configured for tests.
///
/// Built from the default config rather than `Rocket.toml`, so tests never
/// pick up a deployment's election (or write its discovery file).
#[cfg(test)]
pub(crate) async fn test_client() -> rocket::local::asynchronous::Client {
    let figment = rocket::figment::Figment::from(rocket::Config::default())
        .merge(("election_name", "Test Election"))
        .merge(("authority", TEST_AUTHORITY));
    rocket::local::asynchronous::Client::tracked(assemble(rocket::custom(figment)))
        .await
        .unwrap()
}
