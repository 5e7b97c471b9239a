use std::path::{Path, PathBuf};

use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

use crate::model::election::{Election, Identity, SharedElection};

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Debug, Deserialize)]
pub struct Config {
    election_name: String,
    authority: Identity,
    discovery_file: Option<PathBuf>,
}

impl Config {
    /// The name of the election this server administers.
    pub fn election_name(&self) -> &str {
        &self.election_name
    }

    /// The one identity permitted to perform administrative operations.
    pub fn authority(&self) -> &Identity {
        &self.authority
    }

    /// Where to write the deployment discovery record, if anywhere.
    pub fn discovery_file(&self) -> Option<&Path> {
        self.discovery_file.as_deref()
    }
}

/// A fairing that loads the application config and puts it in managed state.
/// This could easily be achieved using `AdHoc::config`, but is written out
/// explicitly for symmetry with the other fairings and control over error
/// messages.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };

        // Manage the state.
        rocket = rocket.manage(config);
        Ok(rocket)
    }
}

/// A fairing that constructs the election engine from the loaded config and
/// places it into managed state behind its lock.
///
/// Runs after [`ConfigFairing`], which is attached first.
pub struct EngineFairing;

#[rocket::async_trait]
impl Fairing for EngineFairing {
    fn info(&self) -> Info {
        Info {
            name: "Election engine",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        let (name, authority) = match rocket.state::<Config>() {
            Some(config) => (
                config.election_name().to_string(),
                config.authority().clone(),
            ),
            None => {
                error!("Config not loaded; cannot construct the election engine");
                return Err(rocket);
            }
        };

        info!("Election \"{name}\" ready, administered by \"{authority}\"");
        let election = Election::new(authority, name);

        rocket = rocket.manage(SharedElection::new(election));
        Ok(rocket)
    }
}
