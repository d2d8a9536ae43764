use crate::Result;
use include_dir::{include_dir, Dir};
use rusqlite::Connection;
use std::fmt;
use tracing::{info, warn};

static MIGRATIONS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/migrations");

struct Migration(i16, String);

impl fmt::Display for Migration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            self.0,
            self.1.split_whitespace().collect::<Vec<_>>().join(" "),
        )
    }
}

pub fn run(conn: &mut Connection) -> Result<()> {
    apply(&load()?, conn)
}

fn load() -> Result<Vec<Migration>> {
    let mut index = 1;
    let mut res = vec![];

    while let Some(file) = MIGRATIONS_DIR.get_file(format!("{index}.sql")) {
        let sql = file.contents_utf8().ok_or(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Can't read {index}.sql in UTF-8"),
        ))?;
        res.push(Migration(index, sql.to_string()));
        index += 1;
    }

    Ok(res)
}

fn apply(migrations: &[Migration], conn: &mut Connection) -> Result<()> {
    let mut schema_ver: i16 =
        conn.query_row("SELECT user_version FROM pragma_user_version", [], |row| {
            row.get(0)
        })?;

    for migration in migrations.iter().filter(move |it| it.0 > schema_ver) {
        warn!(%migration, "Found new migration");
        let tx = conn.transaction()?;
        tx.execute_batch(&migration.1)?;
        tx.execute_batch(&format!("PRAGMA user_version={}", migration.0))?;
        tx.commit()?;
        schema_ver = migration.0;
    }

    info!(schema_ver, "Database schema is up to date");

    Ok(())
}
