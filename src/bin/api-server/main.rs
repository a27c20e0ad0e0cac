use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use food_guide::{api, config::Config, dataset::Dataset};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_ansi(true)
        .with_file(false)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")?;

    let dataset = match &config.data {
        Some(path) => Dataset::load(path)?,
        None => Dataset::embedded()?,
    };
    tracing::info!("serving {} venues on {}", dataset.venues().len(), config.bind);

    let state = web::Data::new(api::ApiState::new(Arc::new(dataset)));
    let origin = config.allowed_origin.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allowed_origin(&origin)
                    .allowed_methods(vec!["GET", "POST"])
                    .allow_any_header(),
            )
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(&config.bind)
    .with_context(|| format!("fail to bind {}", config.bind))?
    .run()
    .await?;
    Ok(())
}
