//! Mock HTTP server serving source images.

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Wrapper around wiremock MockServer with convenience methods
pub struct MockImageServer {
    pub server: MockServer,
}

impl MockImageServer {
    /// Start a new mock HTTP server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get URL for a specific path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }

    /// Serve a PNG at `endpoint`
    pub async fn mock_png(&self, endpoint: &str, body: Vec<u8>) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(body)
                    .insert_header("content-type", "image/png"),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock an endpoint returning an error status
    pub async fn mock_status(&self, endpoint: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Mock an endpoint that must never be called
    pub async fn mock_never_called(&self, endpoint: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&self.server)
            .await;
    }
}
