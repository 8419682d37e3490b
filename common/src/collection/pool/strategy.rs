use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Deserialize;

use crate::collection::pool::ResourcePool;

/// When a consumer going off screen hands its resource back to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseStrategy {
    Always,
    /// Only when somebody else could be starved: the pool is full and idle-less.
    #[default]
    OnShortage,
    Never
}

impl ReleaseStrategy {
    pub fn should_release<T, P : ResourcePool<T> + ?Sized>(&self, pool : &P) -> bool {
        match self {
            ReleaseStrategy::Always => true,
            ReleaseStrategy::OnShortage => pool.has_shortage(),
            ReleaseStrategy::Never => false
        }
    }
}

impl Display for ReleaseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReleaseStrategy::Always => "always",
            ReleaseStrategy::OnShortage => "on_shortage",
            ReleaseStrategy::Never => "never"
        };
        f.write_str(s)
    }
}

impl FromStr for ReleaseStrategy {
    type Err = String;

    fn from_str(s : &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(ReleaseStrategy::Always),
            "on_shortage" | "on-shortage" => Ok(ReleaseStrategy::OnShortage),
            "never" => Ok(ReleaseStrategy::Never),
            _ => Err(format!("unknown release strategy '{}' (always, on_shortage, never)", s))
        }
    }
}
