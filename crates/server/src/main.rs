mod config;
mod doc;
mod dtos;
mod routes;
mod startup;
mod state;
mod utils;

use config::Config;
use log::{error, info};
use startup::StartupError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting course catalog microservices");

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    startup::serve(config).await
}
