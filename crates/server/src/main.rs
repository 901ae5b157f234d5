#[tokio::main]
async fn main() {
    shopwindow_observability::init();

    let config = shopwindow_server::config::ServerConfig::from_env();
    let app = shopwindow_server::app::router(&config.dist_dir);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind listen address");

    tracing::info!(
        "serving {} on {}",
        config.dist_dir.display(),
        listener.local_addr().unwrap()
    );

    axum::serve(listener, app).await.unwrap();
}
