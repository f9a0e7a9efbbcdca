use biblio_ui::BiblioApp;
use biblio_ui::state::State;
use egui_kittest::Harness;
use wiremock::Mock;
use wiremock::matchers::{method, path};
use wiremock::{MockServer, ResponseTemplate};

/// How long tests wait for `ehttp` background requests to land.
#[allow(unused)]
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 200;

/// Yield to the runtime while the `ehttp` worker thread talks to the mock.
#[allow(unused)]
pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, BiblioApp>,
}

impl<'a> TestCtx<'a> {
    /// App harness against a mock backend with empty list endpoints.
    #[allow(unused)]
    pub async fn new_app() -> Self {
        let mock_server = empty_backend().await;
        let state = State::test(mock_server.uri());
        let app = BiblioApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    /// App harness against a mock backend seeded with a few records.
    #[allow(unused)]
    pub async fn new_app_with_data() -> Self {
        let mock_server = seeded_backend().await;
        let state = State::test(mock_server.uri());
        let app = BiblioApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, BiblioApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }
}

async fn empty_backend() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    for endpoint in ["/api/books", "/api/authors", "/api/borrows"] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;
    }

    mock_server
}

async fn seeded_backend() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "title": "Dune", "author_id": 3, "published_at": "1965-08-01"},
            {"id": 2, "title": "The Dispossessed", "author_id": 4, "published_at": "1974-05-01"}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/authors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 3, "name": "Frank Herbert"},
            {"id": 4, "name": "Ursula K. Le Guin"}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/borrows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 10, "book_id": 1, "user_id": 1, "borrowed_at": "2026-02-01T09:00:00Z"}
        ])))
        .mount(&mock_server)
        .await;

    mock_server
}
