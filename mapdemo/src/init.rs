use std::error::Error;

use common::collection::pool::ReleaseStrategy;
use common::init::logger;

use crate::args::{self, Args};
use crate::config::{self, Config};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub depth : usize,
    pub max_size : Option<usize>,
    pub strategy : ReleaseStrategy
}

pub(crate) fn init_common_lib(proc_args : &Args) -> Result<(), Box<dyn Error>> {
    logger::init_once(proc_args.log_level.as_str(), proc_args.log_file.as_deref())
}

/// Command line flags win over the config file.
pub fn merge_settings(proc_args : &Args, cfg : Config) -> Settings {
    let max_size = if proc_args.unbounded {
        None
    } else {
        proc_args.max_size.or(cfg.pool.max_size)
    };

    Settings {
        depth : proc_args.depth,
        max_size,
        strategy : proc_args.strategy.unwrap_or(cfg.pool.release_strategy)
    }
}

pub fn init_process() -> Result<Settings, Box<dyn Error>> {
    let proc_args = args::parsing();
    init_common_lib(&proc_args)?;

    let cfg = match proc_args.config.as_ref() {
        Some(path) => config::parse_toml(path)?,
        None => Config::default()
    };

    Ok(merge_settings(&proc_args, cfg))
}
