//! Configuration loader with multi-source merging.
//!
//! Priority (highest to lowest):
//! 1. `COUNCIL_*` environment variables (e.g. `COUNCIL_QUORUM=3`)
//! 2. `council.toml` in the working directory, one table per role
//! 3. Built-in defaults

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::settings::{ChairmanSettings, OrchestratorSettings, WorkerSettings};

const CONFIG_FILE: &str = "council.toml";
const ENV_PREFIX: &str = "COUNCIL_";

/// Loads role settings from defaults, file, and environment
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn worker() -> Result<WorkerSettings, Box<figment::Error>> {
        Self::load("worker", WorkerSettings::default())
    }

    pub fn chairman() -> Result<ChairmanSettings, Box<figment::Error>> {
        Self::load("chairman", ChairmanSettings::default())
    }

    pub fn orchestrator() -> Result<OrchestratorSettings, Box<figment::Error>> {
        Self::load("orchestrator", OrchestratorSettings::default())
    }

    fn load<S>(role: &str, defaults: S) -> Result<S, Box<figment::Error>>
    where
        S: Serialize + DeserializeOwned,
    {
        Figment::new()
            .merge(Serialized::defaults(defaults))
            .merge(Toml::file(CONFIG_FILE).nested())
            .merge(Env::prefixed(ENV_PREFIX).global())
            .select(role)
            .extract()
            .map_err(Box::new)
    }
}
