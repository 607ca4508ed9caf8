use axum::Router;
use axum::body::Body;
use chrono::NaiveDateTime;
use http::{Request, Response, StatusCode, header};
use print_server::{Config, ServerState, build_app};
use tower::ServiceExt;

const INTENT_SUFFIX: &str = "#Intent;scheme=rawbt;package=ru.a402d.rawbtprinter;end";

fn app() -> Router {
    let config = Config::new(0, "test-secret");
    let state = ServerState::initialize(&config).unwrap();
    build_app(state)
}

fn post_print(body: &'static str) -> Request<Body> {
    Request::post("/print")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// `name=value` part of the Set-Cookie header
fn flash_cookie(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Receipt text carried by an intent URI
fn decode_receipt(uri: &str) -> String {
    let payload = uri
        .strip_prefix("intent:")
        .and_then(|rest| rest.strip_suffix(INTENT_SUFFIX))
        .expect("RawBT intent wrapper");
    urlencoding::decode(payload).unwrap().into_owned()
}

fn is_receipt_timestamp(line: &str) -> bool {
    line.len() == "DD.MM.YYYY HH:MM".len()
        && NaiveDateTime::parse_from_str(line, "%d.%m.%Y %H:%M").is_ok()
}

#[tokio::test]
async fn test_print_redirects_to_rawbt_intent() {
    let response = app()
        .oneshot(post_print("mode=BET&amount=100%2C50"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);

    let uri = location(&response);
    assert!(uri.starts_with("intent:"));
    assert!(uri.ends_with(INTENT_SUFFIX));
    assert!(!uri.contains('\n'));

    let receipt = decode_receipt(&uri);
    let lines: Vec<&str> = receipt.lines().collect();
    assert!(lines.contains(&"BET"));
    assert!(lines.contains(&"100,50 zł"));
    assert!(lines.iter().any(|line| is_receipt_timestamp(line)));
    assert!(receipt.starts_with("IgoCheap\nCasino printer\n\n"));
    assert!(receipt.ends_with("No refunds.\n\n"));
}

#[tokio::test]
async fn test_mode_is_case_insensitive() {
    let response = app()
        .oneshot(post_print("mode=out&amount=12.3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    let receipt = decode_receipt(&location(&response));
    let lines: Vec<&str> = receipt.lines().collect();
    assert_eq!(lines[3], "OUT");
    assert_eq!(lines[4], "12,30 zł");
}

#[tokio::test]
async fn test_invalid_mode_flashes_and_returns_to_form() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_print("mode=XYZ&amount=100"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");
    let cookie = flash_cookie(&response);
    assert!(cookie.starts_with("flash="));

    let form = app
        .oneshot(
            Request::get("/")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(form.status(), StatusCode::OK);
    let cleared = form
        .headers()
        .get(header::SET_COOKIE)
        .expect("flash cleared")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cleared.contains("Max-Age=0"));

    let html = body_text(form).await;
    assert!(html.contains("Nieprawidłowy wybór. Wybierz BET lub OUT."));
}

#[tokio::test]
async fn test_invalid_mode_wins_over_invalid_amount() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_print("mode=XYZ&amount=-5"))
        .await
        .unwrap();
    let cookie = flash_cookie(&response);

    let html = body_text(
        app.oneshot(
            Request::get("/")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap(),
    )
    .await;

    assert!(html.contains("Nieprawidłowy wybór"));
    assert!(!html.contains("Kwota nie może być ujemna"));
}

#[tokio::test]
async fn test_invalid_amounts_flash_their_reason() {
    let cases = [
        ("mode=BET&amount=-5", "Kwota nie może być ujemna"),
        ("mode=BET&amount=abc", "Nieprawidłowa kwota"),
        ("mode=BET&amount=++", "Kwota nie może być pusta"),
        ("mode=BET", "Kwota nie może być pusta"),
    ];

    for (body, message) in cases {
        let app = app();
        let response = app.clone().oneshot(post_print(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::FOUND, "{body}");
        assert_eq!(location(&response), "/", "{body}");

        let html = body_text(
            app.oneshot(
                Request::get("/")
                    .header(header::COOKIE, flash_cookie(&response))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap(),
        )
        .await;
        assert!(html.contains(message), "{body}: expected {message}");
    }
}

#[tokio::test]
async fn test_form_without_flash() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let html = body_text(response).await;
    assert!(html.contains(r#"action="/print""#));
    assert!(html.contains(r#"value="BET" checked"#));
    assert!(html.contains(r#"value="OUT""#));
    assert!(html.contains(r#"name="amount""#));
    assert!(!html.contains(r#"<div class="msg">"#));
}

#[tokio::test]
async fn test_forged_flash_cookie_is_ignored() {
    let response = app()
        .oneshot(
            Request::get("/")
                .header(header::COOKIE, "flash=W10.deadbeef")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(!html.contains(r#"<div class="msg">"#));
}

#[tokio::test]
async fn test_flash_from_other_secret_is_ignored() {
    let other = ServerState::initialize(&Config::new(0, "other-secret")).unwrap();
    let response = build_app(other)
        .oneshot(post_print("mode=XYZ"))
        .await
        .unwrap();
    let cookie = flash_cookie(&response);

    let html = body_text(
        app()
            .oneshot(
                Request::get("/")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap(),
    )
    .await;
    assert!(!html.contains("Nieprawidłowy wybór"));
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_body_without_form_content_type_is_flashed() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::post("/print")
                .body(Body::from("mode=BET&amount=100"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");
    let cookie = flash_cookie(&response);
    assert!(cookie.starts_with("flash="));

    let html = body_text(
        app.oneshot(
            Request::get("/")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap(),
    )
    .await;
    assert!(html.contains("Nieprawidłowy wybór. Wybierz BET lub OUT."));
}

#[tokio::test]
async fn test_duplicated_fields_are_flashed() {
    let response = app()
        .oneshot(post_print("mode=BET&mode=OUT&amount=1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");
    assert!(flash_cookie(&response).starts_with("flash="));
}
