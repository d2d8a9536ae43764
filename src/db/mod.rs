pub mod migration;
pub mod origin_log;

use crate::service::filesystem::data_dir_file_path;
use crate::{Error, Result};
use deadpool_sqlite::{Config, Hook, Pool, Runtime};
use rusqlite::Connection;
use std::fs::remove_file;

const DB_FILE_NAME: &str = "cdnlog.db";

pub fn run(args: &[String]) -> Result<()> {
    let first_arg = match args.first() {
        Some(some) => some,
        None => Err(Error::CLI("No db actions passed".into()))?,
    };

    match first_arg.as_str() {
        "migrate" => migration::run(&mut open_connection()?)?,
        "drop" => remove_file(data_dir_file_path(DB_FILE_NAME)?)?,
        _ => Err(Error::CLI(format!("Unknown db action: {first_arg}")))?,
    }

    Ok(())
}

pub fn open_connection() -> Result<Connection> {
    let conn = Connection::open(data_dir_file_path(DB_FILE_NAME)?)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    Ok(conn)
}

pub fn pool() -> Result<Pool> {
    let pool_size = std::thread::available_parallelism()
        .map(|n| n.get() * 2)
        .unwrap_or(8);
    Ok(Config::new(data_dir_file_path(DB_FILE_NAME)?)
        .builder(Runtime::Tokio1)?
        .max_size(pool_size)
        .post_create(Hook::Fn(Box::new(|conn, _| {
            let mut conn = conn.lock().unwrap();
            conn.pragma_update(None, "journal_mode", "WAL").unwrap();
            conn.pragma_update(None, "synchronous", "NORMAL").unwrap();
            migration::run(&mut conn).unwrap();
            Ok(())
        })))
        .build()?)
}
