include!("../../lib.rs");
use lambda_http::{run, Error};
use tracing::info;
use crate::catalog::controller::build_router;
use crate::catalog::factory::create_catalog_service;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::utils::db::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env()?;
    let catalog_service = create_catalog_service(&config).await?;
    let state = AppState::new(catalog_service);

    match config.listen_addr {
        Some(addr) => {
            info!(%addr, environment = %config.environment, "serving books api");
            let app = build_router(state);
            axum::Server::bind(&addr).serve(app.into_make_service()).await?;
            Ok(())
        }
        None => {
            info!(environment = %config.environment, "serving books api on lambda runtime");
            let app = build_router(state);
            run(app).await
        }
    }
}
