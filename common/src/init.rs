pub mod logger {
    use std::error::Error;
    use std::sync::OnceLock;

    use ftail::Ftail;
    use log::LevelFilter;

    use crate::err::define::system::ApiCallError;
    use crate::make_err_msg;

    pub fn convert_str_to_log_level(log_level : &'_ str) -> LevelFilter {
        match log_level {
            "debug" => LevelFilter::Debug,
            "warn" => LevelFilter::Warn,
            "trace" => LevelFilter::Trace,
            "info" => LevelFilter::Info,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Error
        }
    }

    static LOGGER_INIT_RET : OnceLock<Result<(), String>> = OnceLock::new();

    fn init(log_level : &'_ str, log_file : Option<&'_ str>) -> Result<(), String> {
        let level = convert_str_to_log_level(log_level);
        let mut ftail = Ftail::new()
        .console(level);

        if let Some(file) = log_file {
            if let Err(e) = std::fs::OpenOptions::new().create(true).append(true).open(file) {
                return Err(make_err_msg!("log file {} : {}", file, e));
            }

            ftail = ftail.single_file(file, true, level);
        }

        ftail.init().map_err(|e| make_err_msg!("{}", e))
    }

    /// Installs the process logger. Only the first call does any work, later
    /// calls get the first call's result back.
    pub fn init_once(log_level : &'_ str, log_file : Option<&'_ str>) -> Result<(), Box<dyn Error>> {
        let ret = LOGGER_INIT_RET.get_or_init(|| init(log_level, log_file));

        match ret {
            Ok(_) => Ok(()),
            Err(msg) => Err(ApiCallError::new(msg.clone()))
        }
    }

}
