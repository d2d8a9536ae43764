use rusqlite::Row;
use std::sync::OnceLock;

pub const TABLE_NAME: &str = "origin_log";

pub enum Columns {
    Id,
    ResponseSize,
    StatusCode,
    CacheStatus,
    HttpMethod,
    UriPath,
    TimeTaken,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::Id => "id",
            Columns::ResponseSize => "response_size",
            Columns::StatusCode => "status_code",
            Columns::CacheStatus => "cache_status",
            Columns::HttpMethod => "http_method",
            Columns::UriPath => "uri_path",
            Columns::TimeTaken => "time_taken",
        }
    }
}

/// Access log record in the origin provider's field layout, exactly as it was
/// submitted. Field values are not validated, they are stored verbatim.
#[derive(Debug, PartialEq)]
pub struct OriginLog {
    pub id: i64,
    pub response_size: i64,
    pub status_code: i64,
    pub cache_status: String,
    pub http_method: String,
    pub uri_path: String,
    pub time_taken: f64,
}

impl OriginLog {
    pub fn projection() -> &'static str {
        static PROJECTION: OnceLock<String> = OnceLock::new();
        PROJECTION.get_or_init(|| {
            [
                Columns::Id,
                Columns::ResponseSize,
                Columns::StatusCode,
                Columns::CacheStatus,
                Columns::HttpMethod,
                Columns::UriPath,
                Columns::TimeTaken,
            ]
            .iter()
            .map(Columns::as_str)
            .collect::<Vec<_>>()
            .join(", ")
        })
    }

    pub const fn mapper() -> fn(&Row) -> rusqlite::Result<OriginLog> {
        |row: &_| {
            Ok(OriginLog {
                id: row.get(Columns::Id.as_str())?,
                response_size: row.get(Columns::ResponseSize.as_str())?,
                status_code: row.get(Columns::StatusCode.as_str())?,
                cache_status: row.get(Columns::CacheStatus.as_str())?,
                http_method: row.get(Columns::HttpMethod.as_str())?,
                uri_path: row.get(Columns::UriPath.as_str())?,
                time_taken: row.get(Columns::TimeTaken.as_str())?,
            })
        }
    }
}
