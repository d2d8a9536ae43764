use crate::db;
use deadpool_sqlite::{Config, Pool, Runtime};
use rusqlite::Connection;
use std::sync::atomic::{AtomicUsize, Ordering};

static MEM_DB_COUNTER: AtomicUsize = AtomicUsize::new(1);

pub struct Db {
    pub pool: Pool,
    pub conn: Connection,
}

pub fn mock_conn() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::migration::run(&mut conn).unwrap();
    conn
}

// Shared-cache memory db so the pool and the test's own connection see the
// same data. Keeping conn alive also keeps the db alive.
pub fn mock_db() -> Db {
    let uri = format!(
        "file::testdb_{}:?mode=memory&cache=shared",
        MEM_DB_COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    let mut conn = Connection::open(&uri).unwrap();
    db::migration::run(&mut conn).unwrap();
    let pool = Config::new(uri).create_pool(Runtime::Tokio1).unwrap();
    Db { pool, conn }
}
