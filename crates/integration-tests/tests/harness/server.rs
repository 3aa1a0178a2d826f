//! Serves a handler router over real TCP so adapter responses are seen as clients see them

use std::net::SocketAddr;

use axum::Router;
use tokio_util::sync::CancellationToken;

/// Router under test plus a client to call it
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Serve `router` on a loopback port chosen by the OS
    ///
    /// The server stops when the returned value is dropped
    pub async fn start(router: Router) -> anyhow::Result<Self> {
        let shutdown = CancellationToken::new();
        let stop = shutdown.child_token();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    stop.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Absolute URL for `path` on this server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Client for issuing requests
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
