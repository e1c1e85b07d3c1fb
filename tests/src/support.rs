//! A throwaway HTTP/1.1 gateway on `127.0.0.1:0`.

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use proxylist_core::network::GatewayClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const USERS: &str = "/proxy/users_service/users/";
pub const PRODUCTS: &str = "/proxy/products_service/products/";
pub const HEALTH: &str = "/gateway/health";

/// One canned answer.
#[derive(Clone)]
pub struct Reply {
    status: u16,
    reason: &'static str,
    body: String,
    delay: Duration,
}

impl Reply {
    pub fn json(body: &str) -> Self {
        Self::status(200, "OK", body)
    }

    pub fn status(status: u16, reason: &'static str, body: &str) -> Self {
        Self {
            status,
            reason,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Routes = Arc<Mutex<HashMap<String, VecDeque<Reply>>>>;

pub struct MockGateway {
    addr: SocketAddr,
    routes: Routes,
    hits: Arc<Mutex<Vec<String>>>,
}

impl MockGateway {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let routes: Routes = Arc::default();
        let hits: Arc<Mutex<Vec<String>>> = Arc::default();

        let (accept_routes, accept_hits) = (routes.clone(), hits.clone());
        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    continue;
                };
                let (routes, hits) = (accept_routes.clone(), accept_hits.clone());
                tokio::spawn(async move {
                    let _ = serve(socket, routes, hits).await;
                });
            }
        });

        Ok(Self { addr, routes, hits })
    }

    /// Queues `reply` for `path`. The last queued reply of a path keeps answering.
    pub fn route(&self, path: &str, reply: Reply) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    pub fn client(&self) -> GatewayClient {
        gateway_client(&self.base_url(), Duration::from_secs(5))
    }
}

pub fn gateway_client(base_url: &str, timeout: Duration) -> GatewayClient {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .unwrap();
    GatewayClient::with_client(client, base_url)
}

/// A base URL nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub async fn wait_for_hits(gateway: &MockGateway, count: usize) {
    while gateway.hits().len() < count {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

async fn serve(
    mut socket: TcpStream,
    routes: Routes,
    hits: Arc<Mutex<Vec<String>>>,
) -> std::io::Result<()> {
    let mut buf: Vec<u8> = Vec::with_capacity(2048);
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf);
    let path: String = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    hits.lock().unwrap().push(path.clone());

    let reply: Reply = {
        let mut routes = routes.lock().unwrap();
        match routes.get_mut(&path) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| Reply::status(404, "Not Found", "")),
            None => Reply::status(404, "Not Found", r#"{"message": "not found"}"#),
        }
    };

    tokio::time::sleep(reply.delay).await;
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reply.reason,
        reply.body.len(),
        reply.body
    );
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}
