use anyhow::{Context, Result};
use folder_hub_core::OrgId;
use std::path::PathBuf;

/// Runtime settings taken from the environment. Command-line flags override
/// these.
#[derive(Clone, Debug)]
pub struct Config {
    /// JSON file holding the folder collection; sample data is generated when unset.
    pub data_path: Option<PathBuf>,
    pub default_org: OrgId,
    pub sample_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            default_org: OrgId::default_org(),
            sample_seed: 2022,
        }
    }
}

pub fn load_config() -> Result<Config> {
    from_lookup(|key| std::env::var(key).ok())
}

pub(crate) fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let defaults = Config::default();
    Ok(Config {
        data_path: var("FOLDER_HUB_DATA")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from),
        default_org: match var("FOLDER_HUB_ORG") {
            Some(org) => org
                .parse()
                .with_context(|| format!("FOLDER_HUB_ORG is not a valid org id: {org}"))?,
            None => defaults.default_org,
        },
        sample_seed: match var("FOLDER_HUB_SEED") {
            Some(seed) => seed
                .parse()
                .with_context(|| format!("FOLDER_HUB_SEED is not a number: {seed}"))?,
            None => defaults.sample_seed,
        },
    })
}
