use glframe_embed::EmbedConfig;
use glframe_host::serve::{router, AppState};

/// Serve the shell router on an ephemeral port and return its base URL.
async fn spawn_shell(embed: EmbedConfig) -> String {
    let app = router(AppState { embed });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("Server error: {e}");
        }
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_root_serves_shell() {
    let base = spawn_shell(EmbedConfig::default()).await;

    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["content-type"], "text/html");

    let body = resp.text().await.unwrap();
    assert!(body.contains("viewer-slot"));
    assert!(body.contains("theme-toggle"));
}

#[tokio::test]
async fn test_config_js_injects_embed_url() {
    let base = spawn_shell(EmbedConfig::with_url("https://builds.example.com/game/")).await;

    let resp = reqwest::get(format!("{base}/config.js")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["content-type"], "application/javascript");

    let body = resp.text().await.unwrap();
    assert_eq!(
        body,
        "window.GLFRAME_CONFIG = { \"embedUrl\": \"https://builds.example.com/game/\" };"
    );
}

#[tokio::test]
async fn test_config_js_null_when_unconfigured() {
    let base = spawn_shell(EmbedConfig::default()).await;

    let body = reqwest::get(format!("{base}/config.js"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "window.GLFRAME_CONFIG = { \"embedUrl\": null };");
}

#[tokio::test]
async fn test_config_js_escapes_configured_url() {
    // A quote in the URL must not be able to break out of the script.
    let base = spawn_shell(EmbedConfig::with_url("https://x.example/\";alert(1);//")).await;

    let body = reqwest::get(format!("{base}/config.js"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains(r#"\";alert(1);//"#));
    assert!(body.ends_with("};"));
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_shell() {
    let base = spawn_shell(EmbedConfig::default()).await;

    let resp = reqwest::get(format!("{base}/some/client/route")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["content-type"], "text/html");
}

#[tokio::test]
async fn test_health_reports_ok() {
    let base = spawn_shell(EmbedConfig::default()).await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let base = spawn_shell(EmbedConfig::default()).await;

    let client = reqwest::Client::new();
    let resp = client
        .get(format!("{base}/health"))
        .header("Origin", "https://somewhere.example")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}
