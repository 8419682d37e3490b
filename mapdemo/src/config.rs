use std::error::Error;
use std::path::Path;

use common::collection::pool::ReleaseStrategy;
use serde::Deserialize;

use crate::constant::DEFAULT_POOL_SIZE;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pool : PoolConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    /// omitted inside a `[pool]` table means unbounded
    pub max_size : Option<usize>,
    #[serde(default)]
    pub release_strategy : ReleaseStrategy,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            max_size : Some(DEFAULT_POOL_SIZE),
            release_strategy : ReleaseStrategy::default()
        }
    }
}

pub fn parse_toml<P : AsRef<Path>>(path : P) -> Result<Config, Box<dyn Error>> {
    common::parser::toml::load(path)
}

pub fn parse_toml_str(conf : &'_ str) -> Result<Config, Box<dyn Error>> {
    common::parser::toml::load_str(conf)
}
