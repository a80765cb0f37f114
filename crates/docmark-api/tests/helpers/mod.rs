use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;

use docmark_api::state::AppState;
use docmark_core::models::{ConversionResult, UploadEntry};
use docmark_core::policy::DEFAULT_ACCEPTED_CONTENT_TYPES;
use docmark_core::{Config, FormatPolicy};
use docmark_gateway::{GatewayError, MarkdownGateway};

/// Gateway stub: echoes one result per entry (`# {name}`), or fails
/// wholesale, while counting invocations.
pub struct StubGateway {
    calls: AtomicUsize,
    fail: bool,
}

impl StubGateway {
    pub fn echo() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: true,
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarkdownGateway for StubGateway {
    async fn to_markdown(
        &self,
        entries: &[UploadEntry],
    ) -> Result<Vec<ConversionResult>, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(GatewayError::Service {
                status: 502,
                detail: "stubbed transport failure".to_string(),
            });
        }

        Ok(entries
            .iter()
            .map(|entry| ConversionResult {
                name: entry.name.clone(),
                mime_type: entry.media_type.clone(),
                tokens: 1,
                data: format!("# {}", entry.name),
            })
            .collect())
    }
}

/// Test application state
pub struct TestApp {
    pub server: TestServer,
    pub gateway: Arc<StubGateway>,
}

impl TestApp {
    /// Get the HTTP test client
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn test_config() -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        conversion_api_url: "http://conversion.invalid/tomarkdown".to_string(),
        conversion_api_token: "test-token".to_string(),
        conversion_timeout_seconds: 5,
        accepted_content_types: DEFAULT_ACCEPTED_CONTENT_TYPES
            .iter()
            .map(|s| s.to_string())
            .collect(),
        max_file_size_bytes: 10 * 1024 * 1024,
        http_concurrency_limit: 100,
    }
}

/// Setup a test application with an echoing gateway stub
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(StubGateway::echo()).await
}

/// Setup a test application with the given gateway stub
pub async fn setup_test_app_with(gateway: Arc<StubGateway>) -> TestApp {
    let config = test_config();
    let policy = Arc::new(FormatPolicy::new(config.accepted_content_types.iter()));
    let state = Arc::new(AppState {
        config: config.clone(),
        policy,
        gateway: gateway.clone(),
    });

    let router = docmark_api::setup::routes::setup_routes(&config, state)
        .await
        .expect("Failed to build router");

    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp { server, gateway }
}
