use super::schema::{self, Columns, OriginLog};
use crate::Result;
use rusqlite::{named_params, Connection};

pub fn insert(
    response_size: i64,
    status_code: i64,
    cache_status: &str,
    http_method: &str,
    uri_path: &str,
    time_taken: f64,
    conn: &Connection,
) -> Result<OriginLog> {
    let sql = format!(
        r#"
            INSERT INTO {table} (
                {response_size},
                {status_code},
                {cache_status},
                {http_method},
                {uri_path},
                {time_taken}
            ) VALUES (
                :response_size,
                :status_code,
                :cache_status,
                :http_method,
                :uri_path,
                :time_taken
            )
        "#,
        table = schema::TABLE_NAME,
        response_size = Columns::ResponseSize.as_str(),
        status_code = Columns::StatusCode.as_str(),
        cache_status = Columns::CacheStatus.as_str(),
        http_method = Columns::HttpMethod.as_str(),
        uri_path = Columns::UriPath.as_str(),
        time_taken = Columns::TimeTaken.as_str(),
    );
    conn.execute(
        &sql,
        named_params! {
            ":response_size": response_size,
            ":status_code": status_code,
            ":cache_status": cache_status,
            ":http_method": http_method,
            ":uri_path": uri_path,
            ":time_taken": time_taken,
        },
    )?;
    select_by_id(conn.last_insert_rowid(), conn)
}

pub fn select_all(conn: &Connection) -> Result<Vec<OriginLog>> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            ORDER BY {id}
        "#,
        projection = OriginLog::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
    );
    Ok(conn
        .prepare(&sql)?
        .query_map([], OriginLog::mapper())?
        .collect::<Result<Vec<_>, _>>()?)
}

pub fn select_by_id(id: i64, conn: &Connection) -> Result<OriginLog> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {id} = :id
        "#,
        projection = OriginLog::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
    );
    conn.prepare(&sql)?
        .query_row(named_params! { ":id": id }, OriginLog::mapper())
        .map_err(Into::into)
}

#[cfg(test)]
mod test {
    use crate::test::mock_conn;
    use crate::Result;

    #[test]
    fn insert() -> Result<()> {
        let conn = mock_conn();
        let log = super::insert(312, 200, "HIT", "GET", "/robots.txt", 100.2, &conn)?;
        assert_eq!(1, log.id);
        assert_eq!(312, log.response_size);
        assert_eq!(200, log.status_code);
        assert_eq!("HIT", log.cache_status);
        assert_eq!("GET", log.http_method);
        assert_eq!("/robots.txt", log.uri_path);
        assert_eq!(100.2, log.time_taken);
        Ok(())
    }

    #[test]
    fn insert_does_not_validate_fields() -> Result<()> {
        let conn = mock_conn();
        let log = super::insert(0, -1, "", "", "", -0.5, &conn)?;
        assert_eq!("", log.cache_status);
        assert_eq!(-1, log.status_code);
        Ok(())
    }

    #[test]
    fn select_all() -> Result<()> {
        let conn = mock_conn();
        assert!(super::select_all(&conn)?.is_empty());
        super::insert(312, 200, "HIT", "GET", "/robots.txt", 100.2, &conn)?;
        super::insert(101, 200, "MISS", "POST", "/myImages", 319.4, &conn)?;
        super::insert(199, 404, "MISS", "GET", "/not-found", 142.9, &conn)?;
        let logs = super::select_all(&conn)?;
        assert_eq!(3, logs.len());
        assert_eq!(vec![1, 2, 3], logs.iter().map(|it| it.id).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn select_by_id() -> Result<()> {
        let conn = mock_conn();
        let log = super::insert(312, 200, "INVALIDATE", "GET", "/robots.txt", 245.1, &conn)?;
        assert_eq!(log, super::select_by_id(log.id, &conn)?);
        assert!(super::select_by_id(404, &conn).is_err());
        Ok(())
    }
}
