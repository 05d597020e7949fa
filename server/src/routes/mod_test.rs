use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("learnora").site_root("target/site").build()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_is_routed() {
    let request = Request::get("/healthz").body(Body::empty()).expect("request");
    let response = app(test_options()).oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn site_root_override_replaces_leptos_site_root() {
    let config = ServerConfig { site_root: Some("/srv/site".into()), ..ServerConfig::default() };
    let options = with_overrides(test_options(), &config);
    assert_eq!(options.site_root.as_ref(), "/srv/site");
}

#[test]
fn leptos_site_root_kept_without_override() {
    let options = with_overrides(test_options(), &ServerConfig::default());
    assert_eq!(options.site_root.as_ref(), "target/site");
}
