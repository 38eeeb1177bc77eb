use crate::harness::{CapturedEvent, MockLoki, MockSettings, init_test_tracing};
use logway_core::conf::LogwayConfig;
use logway_core::conf::validation::{ValidatedConfig, validate_config};
use logway_core::server::{build_service, serve};
use reqwest::blocking::{Client, RequestBuilder};
use std::net::TcpStream;
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

/// Handle to a running logway instance backed by a mock Loki.
pub struct TestServer {
    base_url: String,
    client: Client,
    pub loki: MockLoki,
}

impl TestServer {
    pub fn start(settings: MockSettings) -> Self {
        Self::start_with(settings, |_| {})
    }

    /// Start with a config tweak applied after the backend URLs are patched in.
    ///
    /// Ports are allocated dynamically, so tests can run in parallel.
    pub fn start_with(settings: MockSettings, tweak: impl FnOnce(&mut LogwayConfig)) -> Self {
        init_test_tracing(events());

        let mock_listener = bind_local();
        let api_listener = bind_local();
        let mock_url = local_url(&mock_listener);
        let base_url = local_url(&api_listener);

        let mut config = LogwayConfig::default();
        config.server.listen = base_url.trim_start_matches("http://").to_string();
        config.backend.loki_url = mock_url.clone();
        config.backend.grafana_url = mock_url;
        config.backend.request_timeout_seconds = 1;
        config.backend.probe_timeout_seconds = 1;
        tweak(&mut config);

        let report = validate_config(&config);
        assert!(!report.has_errors(), "invalid test config: {:?}", report.errors);
        let validated = ValidatedConfig {
            registry: config.registry(),
            config,
            report,
        };

        let loki = MockLoki::default();
        let mock_app = loki.router(settings);
        let service = build_service(&validated).expect("failed to build log service");

        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("failed to build test runtime");

            rt.block_on(async move {
                let mock_listener = tokio::net::TcpListener::from_std(mock_listener).unwrap();
                let api_listener = tokio::net::TcpListener::from_std(api_listener).unwrap();

                tokio::spawn(async move {
                    axum::serve(mock_listener, mock_app).await.unwrap();
                });

                serve(api_listener, service, std::future::pending())
                    .await
                    .unwrap();
            });
        });

        wait_for_server(&base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("failed to build client");

        Self {
            base_url,
            client,
            loki,
        }
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}{}", self.base_url, path))
    }

    pub fn events(&self) -> Vec<CapturedEvent> {
        events().lock().unwrap().clone()
    }
}

fn bind_local() -> std::net::TcpListener {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind port");
    listener
        .set_nonblocking(true)
        .expect("failed to set non-blocking");
    listener
}

fn local_url(listener: &std::net::TcpListener) -> String {
    format!("http://{}", listener.local_addr().unwrap())
}

/// Poll until the server accepts connections (or panic).
fn wait_for_server(base_url: &str) {
    let addr = base_url.strip_prefix("http://").unwrap_or(base_url);
    let deadline = Instant::now() + Duration::from_secs(2);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {}", base_url);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

static EVENTS: OnceLock<Arc<Mutex<Vec<CapturedEvent>>>> = OnceLock::new();

fn events() -> Arc<Mutex<Vec<CapturedEvent>>> {
    EVENTS
        .get_or_init(|| Arc::new(Mutex::new(Vec::new())))
        .clone()
}
