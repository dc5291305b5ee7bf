//! The local liveness endpoint consumed by the registry's checker.

use std::time::Duration;

use mesh_agent::http::LivenessServer;
use mesh_agent::lifecycle::Shutdown;

#[tokio::test]
async fn health_route_answers_ok_and_shuts_down_gracefully() {
    let server = LivenessServer::bind("127.0.0.1", 0).await.unwrap();
    let addr = server.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let task = tokio::spawn(async move {
        server.run(rx).await.unwrap();
    });

    let response = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");

    // Unknown routes are not liveness.
    let response = reqwest::get(format!("http://{addr}/other")).await.unwrap();
    assert_eq!(response.status(), 404);

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .expect("server should exit after shutdown signal")
        .unwrap();
}
