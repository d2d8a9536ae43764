use crate::conf::Conf;
use crate::db;
use crate::db::origin_log::schema::OriginLog;
use crate::rest::error::RestApiError;
use crate::rest::error::RestResult;
use crate::service::converter::{self, NormalizedLog};
use crate::service::log_file;
use crate::Error;
use actix_web::get;
use actix_web::post;
use actix_web::web::Data;
use actix_web::web::Json;
use actix_web::web::Path;
use deadpool_sqlite::Pool;
use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Item {
    pub id: i64,
    pub response_size: i64,
    pub status_code: i64,
    pub cache_status: String,
    pub http_method: String,
    pub uri_path: String,
    pub time_taken: f64,
}

impl From<OriginLog> for Item {
    fn from(val: OriginLog) -> Self {
        Item {
            id: val.id,
            response_size: val.response_size,
            status_code: val.status_code,
            cache_status: val.cache_status,
            http_method: val.http_method,
            uri_path: val.uri_path,
            time_taken: val.time_taken,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct NormalizedItem {
    pub provider: String,
    pub http_method: String,
    pub status_code: i64,
    pub uri_path: String,
    pub time_taken: i64,
    pub response_size: i64,
    pub cache_status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<NormalizedLog> for NormalizedItem {
    fn from(val: NormalizedLog) -> Self {
        NormalizedItem {
            provider: val.provider,
            http_method: val.http_method,
            status_code: val.status_code,
            uri_path: val.uri_path,
            time_taken: val.time_taken,
            response_size: val.response_size,
            cache_status: val.cache_status,
            created_at: val.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct PostArgs {
    pub response_size: i64,
    pub status_code: i64,
    pub cache_status: String,
    pub http_method: String,
    pub uri_path: String,
    pub time_taken: f64,
}

impl PostArgs {
    // Records arriving in a request body have no store-assigned id yet
    fn into_unsaved_log(self) -> OriginLog {
        OriginLog {
            id: 0,
            response_size: self.response_size,
            status_code: self.status_code,
            cache_status: self.cache_status,
            http_method: self.http_method,
            uri_path: self.uri_path,
            time_taken: self.time_taken,
        }
    }
}

#[get("")]
pub async fn get(pool: Data<Pool>) -> RestResult<Vec<Item>> {
    let logs = db::origin_log::queries_async::select_all(&pool)
        .await
        .map_err(|_| RestApiError::database())?;
    Ok(Json(logs.into_iter().map(Into::into).collect()))
}

#[get("{id}")]
pub async fn get_by_id(id: Path<i64>, pool: Data<Pool>) -> RestResult<Item> {
    db::origin_log::queries_async::select_by_id(id.into_inner(), &pool)
        .await
        .map(|it| Json(it.into()))
        .map_err(|e| match e {
            Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows) => RestApiError::not_found(),
            _ => RestApiError::database(),
        })
}

#[post("")]
pub async fn post(args: Json<PostArgs>, pool: Data<Pool>) -> RestResult<Item> {
    let args = args.into_inner();
    db::origin_log::queries_async::insert(
        args.response_size,
        args.status_code,
        args.cache_status,
        args.http_method,
        args.uri_path,
        args.time_taken,
        &pool,
    )
    .await
    .map(|it| Json(it.into()))
    .map_err(|_| RestApiError::database())
}

#[get("transform/{id}")]
pub async fn get_transformed_by_id(id: Path<i64>, pool: Data<Pool>) -> RestResult<NormalizedItem> {
    db::origin_log::queries_async::select_by_id(id.into_inner(), &pool)
        .await
        .map(|it| Json(converter::convert(&it).into()))
        .map_err(|e| match e {
            Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows) => RestApiError::not_found(),
            _ => RestApiError::database(),
        })
}

#[derive(Serialize, Deserialize)]
pub struct TransformResponse {
    pub log: NormalizedItem,
    pub file_path: String,
}

#[post("transform")]
pub async fn post_transform(
    args: Json<PostArgs>,
    conf: Data<Conf>,
) -> RestResult<TransformResponse> {
    let origin = args.into_inner().into_unsaved_log();
    let log = converter::convert(&origin);
    let file_path = log_file::write(&log, &conf.log_files_base_dir)
        .map_err(|_| RestApiError::storage())?;
    Ok(Json(TransformResponse {
        log: log.into(),
        file_path: file_path.display().to_string(),
    }))
}

#[derive(Serialize, Deserialize)]
pub struct TransformedList {
    pub origin_logs: Vec<Item>,
    pub normalized_logs: Vec<NormalizedItem>,
}

#[get("transformed")]
pub async fn get_transformed(pool: Data<Pool>) -> RestResult<TransformedList> {
    let logs = db::origin_log::queries_async::select_all(&pool)
        .await
        .map_err(|_| RestApiError::database())?;
    if logs.is_empty() {
        return Err(RestApiError::not_found());
    }
    let normalized_logs = logs
        .iter()
        .map(|it| converter::convert(it).into())
        .collect();
    Ok(Json(TransformedList {
        origin_logs: logs.into_iter().map(Into::into).collect(),
        normalized_logs,
    }))
}
