//! Shared utilities for integration testing.
#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn status_line(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        502 => "502 Bad Gateway",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    }
}

/// Start a programmable mock HTTP server on an ephemeral port.
///
/// The closure decides the status and body of every response. Returns the
/// bound address.
pub async fn start_programmable_server<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        // Drain the request before answering.
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let (status, body) = f().await;
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_line(status),
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// A mock registry whose catalog response can be swapped between cycles.
pub struct MockRegistry {
    pub addr: SocketAddr,
    body: Arc<Mutex<String>>,
    status: Arc<Mutex<u16>>,
}

impl MockRegistry {
    pub async fn start() -> Self {
        let body = Arc::new(Mutex::new("[]".to_string()));
        let status = Arc::new(Mutex::new(200));
        let body_for_server = body.clone();
        let status_for_server = status.clone();

        let addr = start_programmable_server(move || {
            let body = body_for_server.lock().unwrap().clone();
            let status = *status_for_server.lock().unwrap();
            async move { (status, body) }
        })
        .await;

        Self { addr, body, status }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Publish a catalog of nodes, Consul catalog-entry shaped.
    pub fn set_nodes(&self, nodes: &[(&str, SocketAddr)]) {
        let entries: Vec<String> = nodes
            .iter()
            .map(|(id, addr)| {
                format!(
                    r#"{{"ServiceID":"{}","ServiceAddress":"{}","ServicePort":{}}}"#,
                    id,
                    addr.ip(),
                    addr.port()
                )
            })
            .collect();
        *self.body.lock().unwrap() = format!("[{}]", entries.join(","));
    }

    /// Make every registry call answer with the given status.
    pub fn set_status(&self, status: u16) {
        *self.status.lock().unwrap() = status;
    }
}

/// A mock node whose liveness responses can be flipped between statuses.
pub struct MockNode {
    pub addr: SocketAddr,
    status: Arc<Mutex<u16>>,
}

impl MockNode {
    pub async fn start(initial_status: u16) -> Self {
        let status = Arc::new(Mutex::new(initial_status));
        let status_for_server = status.clone();

        let addr = start_programmable_server(move || {
            let status = *status_for_server.lock().unwrap();
            async move { (status, "OK".to_string()) }
        })
        .await;

        Self { addr, status }
    }

    pub fn set_status(&self, status: u16) {
        *self.status.lock().unwrap() = status;
    }
}
