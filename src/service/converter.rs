use crate::db::origin_log::schema::OriginLog;
use time::OffsetDateTime;

/// The origin provider keeps its own name in converted records, there is only
/// one input format.
pub const PROVIDER: &str = "MINHA CDN";

/// The same access log record re-expressed in the normalized provider's field
/// layout. Never persisted, it is built fresh on every conversion and either
/// returned to the caller or handed to the log file writer.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedLog {
    pub provider: String,
    pub http_method: String,
    pub status_code: i64,
    pub uri_path: String,
    pub time_taken: i64,
    pub response_size: i64,
    pub cache_status: String,
    pub created_at: OffsetDateTime,
}

pub fn convert(origin: &OriginLog) -> NormalizedLog {
    convert_at(origin, OffsetDateTime::now_utc())
}

/// Every well-typed input converts, unusual field values pass through as-is.
/// Midpoints in time_taken round half away from zero, so 100.5 becomes 101.
pub fn convert_at(origin: &OriginLog, created_at: OffsetDateTime) -> NormalizedLog {
    NormalizedLog {
        provider: PROVIDER.into(),
        http_method: origin.http_method.clone(),
        status_code: origin.status_code,
        uri_path: origin.uri_path.clone(),
        time_taken: origin.time_taken.round() as i64,
        response_size: origin.response_size,
        cache_status: remap_cache_status(&origin.cache_status),
        created_at,
    }
}

// Exact case-sensitive match, unknown values are kept verbatim
fn remap_cache_status(cache_status: &str) -> String {
    match cache_status {
        "HIT" => "HIT".into(),
        "MISS" => "MISS".into(),
        "INVALIDATE" => "REFRESH_HIT".into(),
        other => other.into(),
    }
}
