//! Fetching the upstream spot summary.
//!
//! `SpotSource` is the seam between the network and the rest of the
//! pipeline; `HttpSource` is the only production implementation.
use log::{debug, info};
use reqwest::blocking::Client;
use spot_common::net::{REQUEST_TIMEOUT, SPOT_URL};
use spot_common::{Result, SpotError};

/// Anything that can produce an upstream summary body.
pub trait SpotSource {
    /// Returns the raw response body.
    fn fetch(&self) -> Result<String>;
}

/// Blocking HTTP source for the fixed summary endpoint.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Builds the HTTP client with the request timeout applied.
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: SPOT_URL.to_string(),
        })
    }

    #[cfg(test)]
    fn with_url(url: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).no_proxy().build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

impl SpotSource for HttpSource {
    fn fetch(&self) -> Result<String> {
        info!("Requesting spot summary from {}", self.url);
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        debug!("Upstream status: {}", status);
        if !status.is_success() {
            return Err(SpotError::HttpStatus(status.as_u16()));
        }

        let body = response.text()?;
        debug!("Received {} bytes", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spot_common::SpotBoard;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves one canned HTTP response on a local port and returns its URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/summary.USD.json", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        (url, handle)
    }

    #[test]
    fn client_builds() {
        let source = HttpSource::new().unwrap();
        assert_eq!(source.url, SPOT_URL);
    }

    #[test]
    fn non_success_status_is_http_status_error() {
        let (url, server) = serve_once("503 Service Unavailable", "busy");
        let err = HttpSource::with_url(&url).unwrap().fetch().unwrap_err();
        server.join().unwrap();
        assert!(matches!(err, SpotError::HttpStatus(503)), "{err:?}");
        assert_eq!(err.kind(), "fetch");
    }

    #[test]
    fn success_returns_body() {
        let body = r#"[{"rate": 1, "delta": 0, "effective_at": "t"}]"#;
        let (url, server) = serve_once("200 OK", body);
        let fetched = HttpSource::with_url(&url).unwrap().fetch().unwrap();
        server.join().unwrap();
        assert_eq!(fetched, body);
    }

    #[test]
    fn refused_connection_is_fetch_error() {
        let url = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}/", listener.local_addr().unwrap())
        };
        let err = HttpSource::with_url(&url).unwrap().fetch().unwrap_err();
        assert!(matches!(err, SpotError::Fetch(_)), "{err:?}");
    }

    // Hits the real endpoint:
    // cargo test -p spot_client -- --ignored
    #[test]
    #[ignore]
    fn live_summary_has_gold_and_silver() {
        let body = HttpSource::new()
            .and_then(|source| source.fetch())
            .expect("fetch failed");
        let board = SpotBoard::from_json(&body).expect("unexpected upstream shape");
        assert!(board.gold.rate > board.silver.rate);
        assert!(!board.silver.effective_at.is_empty());
    }
}
