use f1_explorer::{
    routes::{init_tracing, make_app},
    utils::config::Config,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let config = Config::init();
    init_tracing(&config.log_level);

    let bind_addr = config.bind_addr.clone();
    let app = match make_app(config).await {
        Ok(app) => app,
        Err(err) => {
            error!("failed to start: {err}");
            return Err(err);
        }
    };

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Listening on http://{bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
