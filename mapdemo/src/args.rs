use std::path::PathBuf;

use clap::Parser;
use common::collection::pool::ReleaseStrategy;

use crate::constant::DEFAULT_DEPTH;

#[derive(Parser, Debug)]
#[clap(name = "mapdemo", about = "Walks a stack of map previews that share a bounded pool of map views")]
pub struct Args {
    #[clap(long)]
    pub config : Option<PathBuf>,
    #[clap(long, default_value = "info")]
    pub log_level : String,
    #[clap(long)]
    pub log_file : Option<String>,
    /// how many preview screens to open before walking back
    #[clap(long, default_value_t = DEFAULT_DEPTH)]
    pub depth : usize,
    #[clap(long, conflicts_with = "unbounded")]
    pub max_size : Option<usize>,
    #[clap(long)]
    pub unbounded : bool,
    /// always | on_shortage | never
    #[clap(long)]
    pub strategy : Option<ReleaseStrategy>,
}

pub fn parsing() -> Args {
    Args::parse()
}
