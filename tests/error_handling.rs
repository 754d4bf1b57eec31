//! Error envelope tests: unmatched paths and methods.

use serde_json::Value;

mod common;

#[tokio::test]
async fn unknown_path_returns_404_envelope() {
    let (addr, shutdown) = common::start_server(28421).await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/unknown"))
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(
        body,
        serde_json::json!({
            "status": 404,
            "message": "Not Found",
            "path": "/unknown",
            "method": "GET",
        })
    );

    shutdown.trigger();
}

#[tokio::test]
async fn unmatched_method_on_known_path_returns_404() {
    let (addr, shutdown) = common::start_server(28422).await;
    let client = common::client();

    let res = client
        .post(format!("http://{addr}/hello"))
        .body("ignored")
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["path"], "/hello");
    assert_eq!(body["method"], "POST");

    shutdown.trigger();
}

#[tokio::test]
async fn envelope_echoes_nested_paths_and_other_methods() {
    let (addr, shutdown) = common::start_server(28423).await;
    let client = common::client();

    let res = client
        .delete(format!("http://{addr}/nope/deeper"))
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "Not Found");
    assert_eq!(body["path"], "/nope/deeper");
    assert_eq!(body["method"], "DELETE");

    shutdown.trigger();
}

#[tokio::test]
async fn error_envelope_leaks_no_internal_detail() {
    let (addr, shutdown) = common::start_server(28424).await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/does-not-exist"))
        .send()
        .await
        .expect("server unreachable");

    let body: Value = res.json().await.expect("json body");
    let object = body.as_object().expect("object");
    assert_eq!(object.len(), 4);
    for key in ["stack", "trace", "error", "detail"] {
        assert!(!object.contains_key(key));
    }

    shutdown.trigger();
}
