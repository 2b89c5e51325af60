use super::{decode_products, ProductSource};
use crate::error::{CatviewError, Result};
use crate::model::Product;
use std::io::Read;
use std::time::Duration;

const USER_AGENT: &str = concat!("catview/", env!("CARGO_PKG_VERSION"));

pub struct HttpSource {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ProductSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Product>> {
        tracing::debug!(endpoint = %self.endpoint, "requesting products");
        let resp = self
            .agent
            .get(&self.endpoint)
            .set("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => {
                    CatviewError::Network(format!("{} responded with status {}", self.endpoint, code))
                }
                ureq::Error::Transport(t) => {
                    CatviewError::Network(format!("failed to reach {}: {}", self.endpoint, t))
                }
            })?;

        let mut body = Vec::new();
        resp.into_reader()
            .read_to_end(&mut body)
            .map_err(|e| CatviewError::Network(format!("failed to read response body: {}", e)))?;
        decode_products(&body)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;

    /// Serves a single 200 response with `body`, returns the endpoint URL.
    fn serve_once(body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(head.as_bytes()).unwrap();
            stream.write_all(body).unwrap();
        });
        format!("http://{}/products", addr)
    }

    #[test]
    fn decodes_served_envelope() {
        let endpoint = serve_once(
            br#"{"products": [{"id": 1, "title": "Phone", "brand": "A", "category": "X", "price": 50, "rating": 4.5}], "total": 1}"#,
        );
        let products = HttpSource::new(endpoint, Duration::from_secs(5))
            .fetch()
            .unwrap();
        assert_eq!(products, vec![Product::new(1, "Phone", "A", "X", 50.0, 4.5)]);
    }

    #[test]
    fn non_utf8_body_is_a_parse_error() {
        let endpoint = serve_once(b"{\"products\": [\xff\xfe]}");
        let source = HttpSource::new(endpoint, Duration::from_secs(5));
        assert!(matches!(source.fetch(), Err(CatviewError::Parse(_))));
    }

    #[test]
    fn unreachable_endpoint_is_a_network_error() {
        // Port 1 is reserved and nothing listens on it locally
        let source = HttpSource::new("http://127.0.0.1:1/products", Duration::from_secs(2));
        assert!(matches!(source.fetch(), Err(CatviewError::Network(_))));
    }

    #[test]
    fn user_agent_names_the_tool() {
        assert!(USER_AGENT.starts_with("catview/"));
    }
}
