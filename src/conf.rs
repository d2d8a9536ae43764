use crate::Result;
use std::env;
use std::path::PathBuf;

/// Runtime settings which don't belong in the database.
#[derive(Clone)]
pub struct Conf {
    /// Converted log files land in a logs/ subdirectory of this path.
    pub log_files_base_dir: PathBuf,
}

impl Conf {
    pub fn from_env() -> Result<Conf> {
        let log_files_base_dir = match env::var("CDNLOG_LOG_FILES_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => env::current_dir()?,
        };
        Ok(Conf { log_files_base_dir })
    }
}
