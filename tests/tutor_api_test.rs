use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use gatto::error::LlmError;
use gatto::services::llm_service::TextGenerator;
use gatto::services::tutor_service::RETRY_WARNING;
use gatto::AppState;
use tower::ServiceExt;

enum Reply {
    Text(&'static str),
    Fail,
}

struct StubGenerator {
    reply: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(vec![]),
        })
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str, _timeout: Duration) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Fail => Err(LlmError::Malformed("stub failure".into())),
        }
    }
}

fn setup_app(generator: Arc<StubGenerator>) -> Router {
    let state = AppState::new(generator, Duration::from_secs(30)).unwrap();
    gatto::routes::app(state, "static")
}

fn buscar_request(duda: &str) -> Request<Body> {
    let body: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("duda", duda)
        .finish();
    Request::builder()
        .method("POST")
        .uri("/buscar")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn answer_is_rendered_for_valid_question() {
    let generator = StubGenerator::new(Reply::Text("<h3>1) Explicación más técnica</h3><p>Las plantas usan luz.</p>"));
    let app = setup_app(generator.clone());

    let resp = app.oneshot(buscar_request("¿Qué es la fotosíntesis?")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("¿Qué es la fotosíntesis?"));
    assert!(html.contains("<h3>1) Explicación más técnica</h3><p>Las plantas usan luz.</p>"));

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].ends_with("Duda del alumno: ¿Qué es la fotosíntesis?"));
}

#[tokio::test]
async fn question_is_trimmed_before_use() {
    let generator = StubGenerator::new(Reply::Text("<p>ok</p>"));
    let app = setup_app(generator.clone());

    let resp = app.oneshot(buscar_request("   ¿Por qué llueve?   ")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let prompts = generator.prompts.lock().unwrap();
    assert!(prompts[0].ends_with("Duda del alumno: ¿Por qué llueve?"));
}

#[tokio::test]
async fn out_of_range_questions_redirect_home_without_calling_model() {
    let generator = StubGenerator::new(Reply::Text("<p>no debería usarse</p>"));
    let app = setup_app(generator.clone());

    let too_long = "a".repeat(501);
    for duda in ["", "    ", "ab", "  ab  ", too_long.as_str()] {
        let resp = app.clone().oneshot(buscar_request(duda)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FOUND, "duda={:?}", duda);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    }
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn boundary_lengths_are_accepted() {
    let generator = StubGenerator::new(Reply::Text("<p>ok</p>"));
    let app = setup_app(generator.clone());

    let longest = "a".repeat(500);
    for duda in ["abc", longest.as_str()] {
        let resp = app.clone().oneshot(buscar_request(duda)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
    assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn missing_field_redirects_home() {
    let app = setup_app(StubGenerator::new(Reply::Text("<p>ok</p>")));
    let req = Request::builder()
        .method("POST")
        .uri("/buscar")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn provider_failure_shows_unescaped_warning() {
    let app = setup_app(StubGenerator::new(Reply::Fail));

    let resp = app.oneshot(buscar_request("¿Qué es un ecosistema?")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains(RETRY_WARNING));
    assert!(html.contains("¿Qué es un ecosistema?"));
}

#[tokio::test]
async fn empty_answer_shows_warning() {
    let app = setup_app(StubGenerator::new(Reply::Text("   ")));

    let resp = app.oneshot(buscar_request("¿Qué es un ecosistema?")).await.unwrap();
    let html = body_text(resp).await;
    assert!(html.contains(RETRY_WARNING));
}

#[tokio::test]
async fn fenced_html_answer_is_unwrapped() {
    let app = setup_app(StubGenerator::new(Reply::Text("```html\n<p>Sin fence</p>\n```")));

    let resp = app.oneshot(buscar_request("¿Qué es un ecosistema?")).await.unwrap();
    let html = body_text(resp).await;
    assert!(html.contains("<p>Sin fence</p>"));
    assert!(!html.contains("```"));
}

#[tokio::test]
async fn code_block_inside_answer_keeps_every_section() {
    let answer = "<h3>1) Explicación más técnica</h3><p>Un programa:</p>\n```\nprint('hola')\n```\n<h3>2) Explicación simple</h3><p>Le decís algo a la compu.</p>";
    let app = setup_app(StubGenerator::new(Reply::Text(answer)));

    let resp = app.oneshot(buscar_request("¿Qué es programar?")).await.unwrap();
    let html = body_text(resp).await;
    assert!(html.contains("<h3>1) Explicación más técnica</h3>"));
    assert!(html.contains("print('hola')"));
    assert!(html.contains("<h3>2) Explicación simple</h3><p>Le decís algo a la compu.</p>"));
}

#[tokio::test]
async fn unreadable_form_body_redirects_home() {
    let generator = StubGenerator::new(Reply::Text("<p>no debería usarse</p>"));
    let app = setup_app(generator.clone());

    let no_content_type = Request::builder()
        .method("POST")
        .uri("/buscar")
        .body(Body::from("duda="))
        .unwrap();
    let json_body = Request::builder()
        .method("POST")
        .uri("/buscar")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"duda": "¿Qué es la fotosíntesis?"}"#))
        .unwrap();

    for req in [no_content_type, json_body] {
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    }
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn user_markup_is_escaped_in_echo() {
    let app = setup_app(StubGenerator::new(Reply::Text("<p>ok</p>")));

    let resp = app.oneshot(buscar_request("<script>x</script>")).await.unwrap();
    let html = body_text(resp).await;
    assert!(html.contains("&lt;script&gt;x&lt;&#x2F;script&gt;"));
    assert!(!html.contains("<script>x</script>"));
}

#[tokio::test]
async fn home_and_health_respond() {
    let app = setup_app(StubGenerator::new(Reply::Fail));

    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("GATTO"));

    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(json, serde_json::json!({"status": "ok"}));
}
