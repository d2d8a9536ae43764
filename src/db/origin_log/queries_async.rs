use super::{queries, schema::OriginLog};
use crate::Result;
use deadpool_sqlite::Pool;

pub async fn insert(
    response_size: i64,
    status_code: i64,
    cache_status: String,
    http_method: String,
    uri_path: String,
    time_taken: f64,
    pool: &Pool,
) -> Result<OriginLog> {
    pool.get()
        .await?
        .interact(move |conn| {
            queries::insert(
                response_size,
                status_code,
                &cache_status,
                &http_method,
                &uri_path,
                time_taken,
                conn,
            )
        })
        .await?
}

pub async fn select_all(pool: &Pool) -> Result<Vec<OriginLog>> {
    pool.get()
        .await?
        .interact(|conn| queries::select_all(conn))
        .await?
}

pub async fn select_by_id(id: i64, pool: &Pool) -> Result<OriginLog> {
    pool.get()
        .await?
        .interact(move |conn| queries::select_by_id(id, conn))
        .await?
}
