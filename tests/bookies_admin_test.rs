use bookie_admin::{AdminConfig, AdminError, BookieInfo, BookiesAdmin, RestClient};
use httpmock::prelude::*;
use std::sync::Arc;

fn admin_for(server: &MockServer) -> BookiesAdmin<RestClient> {
    let config = AdminConfig::new(server.base_url());
    BookiesAdmin::new(Arc::new(RestClient::new(&config).unwrap()))
}

#[tokio::test]
async fn test_racks_info_returns_full_configuration() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/admin/v2/bookies/racks-info");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "group-a": {
                    "bk1:3181": {"rack": "rack-1", "hostname": "bk1.example.com"},
                    "bk2:3181": {"rack": "rack-2"}
                }
            }));
    });

    let admin = admin_for(&server);
    let racks = admin.racks_info_async().await.unwrap();

    api_mock.assert();
    assert_eq!(racks.len(), 2);
    assert_eq!(racks.bookie("bk1:3181").unwrap().rack, "rack-1");
    assert_eq!(
        racks.bookie("bk1:3181").unwrap().hostname.as_deref(),
        Some("bk1.example.com")
    );
    assert_eq!(racks.bookie("bk2:3181").unwrap().hostname, None);
}

#[tokio::test]
async fn test_bookie_rack_info_for_one_address() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/admin/v2/bookies/racks-info/bk1:3181");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"rack": "rack-1"}));
    });

    let admin = admin_for(&server);
    let info = admin.bookie_rack_info_async("bk1:3181").await.unwrap();

    api_mock.assert();
    assert_eq!(info, BookieInfo::new("rack-1"));
}

#[tokio::test]
async fn test_update_sends_group_query_and_json_body() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/admin/v2/bookies/racks-info/bk1:3181")
            .query_param("group", "group-a")
            .json_body(serde_json::json!({
                "rack": "rack-1",
                "hostname": "bk1.example.com"
            }));
        then.status(204);
    });

    let admin = admin_for(&server);
    let info = BookieInfo::new("rack-1").with_hostname("bk1.example.com");
    admin
        .update_bookie_rack_info_async("bk1:3181", "group-a", &info)
        .await
        .unwrap();

    api_mock.assert();
}

#[tokio::test]
async fn test_delete_bookie_rack_info() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/admin/v2/bookies/racks-info/bk1:3181");
        then.status(204);
    });

    let admin = admin_for(&server);
    admin
        .delete_bookie_rack_info_async("bk1:3181")
        .await
        .unwrap();

    api_mock.assert();
}

#[tokio::test]
async fn test_missing_bookie_surfaces_not_found() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/admin/v2/bookies/racks-info/bk-missing:3181");
        then.status(404).body("bookie bk-missing:3181 not found");
    });

    let admin = admin_for(&server);
    let err = admin
        .bookie_rack_info_async("bk-missing:3181")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    match err {
        AdminError::NotFound { message } => {
            assert_eq!(message, "bookie bk-missing:3181 not found")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_missing_bookie_surfaces_not_found() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(DELETE)
            .path("/admin/v2/bookies/racks-info/bk-missing:3181");
        then.status(404);
    });

    let admin = admin_for(&server);
    let err = admin
        .delete_bookie_rack_info_async("bk-missing:3181")
        .await
        .unwrap_err();

    assert!(matches!(err, AdminError::NotFound { .. }));
}

#[tokio::test]
async fn test_server_failure_is_mapped_not_raw() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/admin/v2/bookies/racks-info");
        then.status(500).body("something broke");
    });

    let admin = admin_for(&server);
    let err = admin.racks_info_async().await.unwrap_err();

    match err {
        AdminError::Server { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "something broke");
        }
        other => panic!("expected mapped server error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_forbidden_surfaces_not_authorized() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/admin/v2/bookies/racks-info");
        then.status(403);
    });

    let admin = admin_for(&server);
    let err = admin.racks_info_async().await.unwrap_err();

    assert!(matches!(err, AdminError::NotAuthorized { .. }));
}
