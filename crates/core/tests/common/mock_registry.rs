//! A one-route HTTP server standing in for the schema registry.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A running mock registry. Requests are recorded as raw header blocks.
#[allow(dead_code)]
pub struct MockRegistry {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockRegistry {
    /// Base URL of the server, e.g. `http://127.0.0.1:41234`.
    #[allow(dead_code)]
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Header blocks of the requests received so far.
    #[allow(dead_code)]
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

/// Start a mock registry answering every request with `status` and `body`.
#[allow(dead_code)]
pub async fn start_mock_registry(status: u16, body: &'static str) -> MockRegistry {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock registry");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let recorded = Arc::clone(&recorded);
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                recorded
                    .lock()
                    .await
                    .push(String::from_utf8_lossy(&buf).into_owned());

                let reason = match status {
                    200 => "OK",
                    401 => "Unauthorized",
                    404 => "Not Found",
                    _ => "Internal Server Error",
                };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/vnd.schemaregistry.v1+json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    MockRegistry { addr, requests }
}
