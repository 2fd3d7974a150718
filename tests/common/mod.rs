#![allow(dead_code)]

use kondate::AppState;
use tokio::net::TcpListener;

/// Serve the router on a random local port and return its base URL.
pub async fn spawn_app(state: AppState) -> String {
    let _ = env_logger::builder().is_test(true).try_init();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        kondate::server::run(listener, state)
            .await
            .expect("server error");
    });

    address
}
