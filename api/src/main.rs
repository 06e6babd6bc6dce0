use std::sync::Arc;

use clap::Parser;
use dietwatch_api::application::http::server::http_server::{router, state};
use dietwatch_api::args::Args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();
    let args = Arc::new(Args::parse());

    init_logger(&args);

    let state = state(args.clone()).await?;
    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_logger(args: &Args) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log.log_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if args.log.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}
