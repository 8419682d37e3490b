pub mod args;
pub mod config;
pub mod constant;
pub mod init;
pub mod map_view;
pub mod navigation;
