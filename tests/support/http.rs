//! One-shot HTTP stub for exercising the CoinGecko client.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Serves a single canned response on a random local port.
pub struct StubServer {
    pub base_url: String,
    handle: JoinHandle<Option<String>>,
}

impl StubServer {
    /// Answer the first request with `status` and a JSON `body`.
    pub async fn respond(status: u16, reason: &str, body: &str) -> Self {
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        Self::spawn(move |mut socket, target| async move {
            socket.write_all(response.as_bytes()).await.ok()?;
            let _ = socket.shutdown().await;
            Some(target)
        })
        .await
    }

    /// Accept the first request and never answer it.
    pub async fn silent() -> Self {
        Self::spawn(|socket, target| async move {
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
            Some(target)
        })
        .await
    }

    /// Request target (path and query) of the request that was served.
    pub async fn request_target(self) -> Option<String> {
        self.handle.await.ok().flatten()
    }

    async fn spawn<F, Fut>(serve: F) -> Self
    where
        F: FnOnce(TcpStream, String) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Option<String>> + Send,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub address");
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.ok()?;
            let head = read_head(&mut socket).await?;
            let target = head
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .map(str::to_string)?;
            serve(socket, target).await
        });

        Self {
            base_url: format!("http://{addr}/api/v3"),
            handle,
        }
    }
}

/// Base URL of a port with nothing listening on it.
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}/api/v3")
}

async fn read_head(socket: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8(buf).ok()
}
