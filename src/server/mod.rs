use crate::conf::Conf;
use crate::rest;
use crate::{db, Result};
use actix_web::dev::Service;
use actix_web::middleware::{Compress, NormalizePath};
use actix_web::web::{scope, Data};
use actix_web::{App, HttpServer};
use futures_util::future::FutureExt;
use time::OffsetDateTime;
use tracing::info;

pub async fn run() -> Result<()> {
    // All the worker threads are sharing a single connection pool
    let pool = db::pool()?;
    let conf = Conf::from_env()?;

    HttpServer::new(move || {
        App::new()
            .wrap_fn(|req, srv| {
                let req_method = req.method().as_str().to_string();
                let req_path = req.path().to_string();
                let req_time = OffsetDateTime::now_utc();
                srv.call(req).map(move |res| {
                    if let Ok(res) = res.as_ref() {
                        let res_status = res.status().as_u16();
                        let res_time_sec = (OffsetDateTime::now_utc() - req_time).as_seconds_f64();
                        info!(req_method, req_path, res_status, res_time_sec);
                    }
                    res
                })
            })
            .wrap(NormalizePath::trim())
            .wrap(Compress::default())
            .app_data(Data::new(pool.clone()))
            .app_data(Data::new(conf.clone()))
            .service(
                scope("v1").service(
                    scope("logs")
                        .service(rest::v1::logs::get_transformed)
                        .service(rest::v1::logs::get_transformed_by_id)
                        .service(rest::v1::logs::post_transform)
                        .service(rest::v1::logs::get)
                        .service(rest::v1::logs::get_by_id)
                        .service(rest::v1::logs::post),
                ),
            )
    })
    .bind(("127.0.0.1", 8000))?
    .run()
    .await?;

    Ok(())
}
