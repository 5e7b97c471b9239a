use chrono::{DateTime, Utc};
use rocket::{
    fairing::{Fairing, Info, Kind},
    serde::json::serde_json,
    Orbit, Rocket,
};
use serde::Serialize;

use crate::config::Config;

/// The discovery record: everything a client needs to find this engine.
///
/// Consumers read this file instead of hard-coding the server location;
/// `deployed_at` lets them tell a redeploy from a restart of the same one.
#[derive(Debug, Serialize)]
pub struct DiscoveryRecord {
    pub address: String,
    pub port: u16,
    pub election_name: String,
    pub deployed_at: DateTime<Utc>,
}

/// A fairing that writes the discovery record once the server is live.
///
/// Does nothing unless `discovery_file` is configured. Failure to write is
/// logged but does not take the server down; discovery is a convenience,
/// not a dependency.
pub struct DiscoveryFairing;

#[rocket::async_trait]
impl Fairing for DiscoveryFairing {
    fn info(&self) -> Info {
        Info {
            name: "Deployment discovery",
            kind: Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        // Unwrap is safe as `Config` is always managed.
        let config = rocket.state::<Config>().unwrap();
        let path = match config.discovery_file() {
            Some(path) => path,
            None => return,
        };

        let record = DiscoveryRecord {
            address: rocket.config().address.to_string(),
            port: rocket.config().port,
            election_name: config.election_name().to_string(),
            deployed_at: Utc::now(),
        };

        let json = serde_json::to_string_pretty(&record)
            .expect("Serialisation of the discovery record is infallible");
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Failed to create discovery directory {parent:?}: {e}");
                return;
            }
        }
        match std::fs::write(path, json) {
            Ok(()) => info!("Discovery record written to {path:?}"),
            Err(e) => warn!("Failed to write discovery record to {path:?}: {e}"),
        }
    }
}
