use std::error::Error;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::err::define::system::{ApiCallError, ParsingError};
use crate::make_err_msg;

pub use ::toml::*;

pub fn load<T : DeserializeOwned, P: AsRef<Path>>(filepath : P) -> Result<T, Box<dyn Error>> {
    let path = filepath.as_ref();
    let conf = fs::read_to_string(path).map_err(|e| {
        ApiCallError::new(make_err_msg!("{} : {}", path.display(), e))
    })?;

    load_str(conf.as_str())
}

pub fn load_str<T : DeserializeOwned>(conf : &'_ str) -> Result<T, Box<dyn Error>> {
    match ::toml::from_str::<T>(conf) {
        Ok(ok) => Ok(ok),
        Err(e) => Err(ParsingError::new(make_err_msg!(
            "{}", e
        )))
    }
}
