//! Integration tests for the trigger cycle
//!
//! A recording surface captures every call the controller makes so the
//! loading/trigger guarantees can be checked on each exit path.

use listing_console::config::Config;
use listing_console::job::{JobRequest, SubmitError};
use listing_console::render::{RenderError, RenderedOutput};
use listing_console::ui::{Controller, UiSurface};
use listing_console::ConsoleError;
use serde_json::json;
use std::sync::Mutex;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Loading(bool),
    Trigger(bool),
    ResultsVisible(bool),
    Shown(usize),
    Notified(String),
}

struct RecordingSurface {
    form: Mutex<JobRequest>,
    events: Mutex<Vec<Event>>,
}

impl RecordingSurface {
    fn new(request: JobRequest) -> Self {
        Self {
            form: Mutex::new(request),
            events: Mutex::new(Vec::new()),
        }
    }

    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn set_form_workers(&self, workers: u32) {
        self.form.lock().unwrap().workers = workers;
    }

    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    fn loading_shown(&self) -> bool {
        self.events()
            .iter()
            .rev()
            .find_map(|e| match e {
                Event::Loading(on) => Some(*on),
                _ => None,
            })
            .unwrap_or(false)
    }

    fn trigger_enabled(&self) -> bool {
        self.events()
            .iter()
            .rev()
            .find_map(|e| match e {
                Event::Trigger(on) => Some(*on),
                _ => None,
            })
            .unwrap_or(true)
    }

    fn notifications(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Notified(message) => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl UiSurface for RecordingSurface {
    fn job_request(&self) -> JobRequest {
        self.form.lock().unwrap().clone()
    }

    fn set_loading(&self, loading: bool) {
        self.record(Event::Loading(loading));
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        self.record(Event::Trigger(enabled));
    }

    fn set_results_visible(&self, visible: bool) {
        self.record(Event::ResultsVisible(visible));
    }

    fn show_results(&self, output: &RenderedOutput) -> Result<(), RenderError> {
        self.record(Event::Shown(output.cards.len()));
        Ok(())
    }

    fn notify(&self, message: &str) {
        self.record(Event::Notified(message.to_string()));
    }
}

fn controller_for(base_url: String, request: JobRequest) -> Controller<RecordingSurface> {
    let config = Config::with_base_url(base_url);
    Controller::from_config(&config, RecordingSurface::new(request))
        .expect("Failed to create controller")
}

async fn mount_success(server: &MockServer, delay: Duration) {
    Mock::given(method("POST"))
        .and(path("/crawl"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "success": true,
                    "properties": [
                        {"title": "A", "price": "Rp 800 Ribu", "location": "A", "images": []},
                        {"title": "B", "price": "Hubungi Agen", "location": "B",
                         "images": ["https://img.example/b1.jpg", "https://img.example/b2.jpg"]},
                        {"title": "C", "price": "Rp 2 Juta", "location": "A",
                         "images": ["https://img.example/c1.jpg"]}
                    ]
                }))
                .set_delay(delay),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// Returns a URL on a local port with nothing listening
fn unused_local_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_successful_job_renders_and_returns_to_idle() {
    let server = MockServer::start().await;
    mount_success(&server, Duration::ZERO).await;

    let controller = controller_for(server.uri(), JobRequest::new("kos", 2, 5));
    let output = controller.activate().await.expect("Job should succeed");

    assert_eq!(output.stats.count, 3);
    assert_eq!(output.stats.workers, 5);
    assert_eq!(output.stats.with_price, 2);
    assert_eq!(output.stats.unique_locations, 2);
    assert_eq!(output.cards[0].badge, "0 Photo");
    assert!(output.cards[0].image_is_fallback);
    assert_eq!(output.cards[1].badge, "2 Photos");

    let surface = controller.surface();
    assert_eq!(
        surface.events(),
        vec![
            Event::Trigger(false),
            Event::Loading(true),
            Event::ResultsVisible(false),
            Event::Shown(3),
            Event::Loading(false),
            Event::ResultsVisible(true),
            Event::Trigger(true),
        ]
    );
    assert!(controller.is_idle());
}

#[tokio::test]
async fn test_job_error_shows_literal_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/crawl"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "success": false, "error": "rate limited" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller_for(server.uri(), JobRequest::new("kos", 2, 5));
    let result = controller.activate().await;

    assert!(matches!(
        result,
        Err(ConsoleError::Submit(SubmitError::Job(ref m))) if m == "rate limited"
    ));

    let surface = controller.surface();
    let notes = surface.notifications();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].contains("rate limited"));
    assert!(!surface.loading_shown());
    assert!(surface.trigger_enabled());
    assert!(!surface.events().contains(&Event::ResultsVisible(true)));
}

#[tokio::test]
async fn test_transport_error_uses_distinct_message_and_resets() {
    let base_url = unused_local_url();

    let controller = controller_for(base_url, JobRequest::new("kos", 2, 5));
    let result = controller.activate().await;

    assert!(matches!(
        result,
        Err(ConsoleError::Submit(SubmitError::Transport(_)))
    ));

    let surface = controller.surface();
    let notes = surface.notifications();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].starts_with("Error connecting to server:"));
    assert!(!surface.loading_shown());
    assert!(surface.trigger_enabled());
    assert!(controller.is_idle());
}

#[tokio::test]
async fn test_second_activation_while_pending_is_rejected() {
    let server = MockServer::start().await;
    mount_success(&server, Duration::from_millis(200)).await;

    let controller = controller_for(server.uri(), JobRequest::new("kos", 2, 5));

    let (first, second) = tokio::join!(controller.activate(), controller.activate());

    assert!(first.is_ok());
    assert!(matches!(second, Err(ConsoleError::Busy)));
    assert!(controller.is_idle());
}

#[tokio::test]
async fn test_trigger_can_fire_again_after_completion() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/crawl"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "properties": [] })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let controller = controller_for(server.uri(), JobRequest::new("kos", 2, 5));

    assert!(controller.activate().await.is_ok());
    assert!(controller.activate().await.is_ok());
}

#[tokio::test]
async fn test_worker_count_is_taken_from_submitted_request() {
    let server = MockServer::start().await;
    mount_success(&server, Duration::from_millis(200)).await;

    let controller = controller_for(server.uri(), JobRequest::new("kos", 2, 4));

    let adjust = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.surface().set_form_workers(19);
    };

    let (output, ()) = tokio::join!(controller.activate(), adjust);

    assert_eq!(output.unwrap().stats.workers, 4);
    assert_eq!(controller.surface().job_request().workers, 19);
}

#[tokio::test]
async fn test_abandoned_activation_returns_to_idle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/crawl"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "properties": [] }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let controller = controller_for(server.uri(), JobRequest::new("kos", 2, 5));

    let result = tokio::time::timeout(Duration::from_millis(50), controller.activate()).await;
    assert!(result.is_err(), "activation should still be pending");

    let surface = controller.surface();
    assert!(controller.is_idle());
    assert!(surface.trigger_enabled());
    assert!(!surface.loading_shown());
    assert!(surface.notifications().is_empty());
    assert!(!surface.events().contains(&Event::ResultsVisible(true)));
}
