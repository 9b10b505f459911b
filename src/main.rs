use keshav::server::{
    config::Config, feed::AttendanceFeed, model::app::AppState, router, startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing();

    let db = startup::connect_to_database(&config).await.unwrap();
    let feed = AttendanceFeed::new();

    let router = router::routes().with_state(AppState { db, feed });

    tracing::info!("Starting server on {}", config.listen_address);

    let listener = tokio::net::TcpListener::bind(&config.listen_address)
        .await
        .expect("Failed to bind listen address");

    axum::serve(listener, router)
        .await
        .expect("Server exited with an error");
}
