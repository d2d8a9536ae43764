pub use error::Error;
mod conf;
mod db;
mod error;
mod rest;
mod server;
mod service;
#[cfg(test)]
mod test;

use std::env;
use tracing_subscriber::EnvFilter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[actix_web::main]
async fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();

    let command = match args.get(1) {
        Some(some) => some,
        None => Err(Error::CLI("No actions passed".into()))?,
    };

    match command.as_str() {
        "server" => server::run().await?,
        "db" => db::run(&args[2..])?,
        first_arg => Err(Error::CLI(format!("Unknown command: {first_arg}")))?,
    }

    Ok(())
}

fn init_logging() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());

    if cfg!(debug_assertions) {
        builder.init();
    } else {
        builder.json().init();
    }
}
