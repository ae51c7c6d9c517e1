//! Transport and authentication tests against a local mock server.

use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shoehorn_cli::auth::login_with_pat;
use shoehorn_cli::catalog::ListEntitiesOpts;
use shoehorn_cli::client::{ApiClient, ApiError, ErrorCategory};
use shoehorn_cli::config::{Config, ConfigStore, Profile, ProviderType};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri()).unwrap().with_token("t-123")
}

#[tokio::test]
async fn requests_carry_the_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams"))
        .and(bearer_token("t-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "teams": [{"id": "1", "name": "Platform", "slug": "platform"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let teams = client(&server).list_teams().await.unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].slug, "platform");
}

#[tokio::test]
async fn missing_resource_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/entities/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"message": "entity not found", "code": "not_found"}
        })))
        .mount(&server)
        .await;

    let err = client(&server).get_entity("nope").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "entity not found");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn rejected_token_maps_to_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let err = client(&server).list_users().await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Auth);
}

#[tokio::test]
async fn server_failure_maps_to_server_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/groups"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = client(&server).list_groups().await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Server);
}

#[tokio::test]
async fn entity_filters_become_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/entities"))
        .and(query_param("type", "service"))
        .and(query_param("owner", "platform"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"entities": []})))
        .expect(1)
        .mount(&server)
        .await;

    let opts = ListEntitiesOpts {
        entity_type: "service".to_string(),
        owner: "platform".to_string(),
        ..Default::default()
    };
    let entities = client(&server).list_entities(&opts).await.unwrap();
    assert!(entities.is_empty());
}

fn entity_page(ids: &[&str]) -> serde_json::Value {
    let entities: Vec<_> = ids
        .iter()
        .map(|id| json!({"service": {"id": id, "name": id, "type": "service"}}))
        .collect();
    json!({ "entities": entities })
}

#[tokio::test]
async fn owned_entities_merge_teams_without_duplicates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "a@b.com",
            "name": "A B",
            "teams": ["platform", "tools"]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/entities"))
        .and(query_param("owner", "platform"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entity_page(&["svc-a", "svc-b"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/entities"))
        .and(query_param("owner", "tools"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entity_page(&["svc-b", "svc-c"])))
        .mount(&server)
        .await;

    let entities = client(&server).list_owned_entities().await.unwrap().unwrap();
    let ids: Vec<&str> = entities.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["svc-a", "svc-b", "svc-c"]);
}

#[tokio::test]
async fn owned_entities_skip_a_failing_team() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "a@b.com",
            "name": "A B",
            "teams": ["broken", "tools"]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/entities"))
        .and(query_param("owner", "broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/entities"))
        .and(query_param("owner", "tools"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entity_page(&["svc-c"])))
        .mount(&server)
        .await;

    let entities = client(&server).list_owned_entities().await.unwrap().unwrap();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].id, "svc-c");
}

#[tokio::test]
async fn owned_entities_without_teams_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "a@b.com",
            "name": "A B",
            "teams": []
        })))
        .mount(&server)
        .await;

    let owned = client(&server).list_owned_entities().await.unwrap();
    assert!(owned.is_none());
}

#[tokio::test]
async fn invalid_manifest_is_a_result_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/manifests/validate"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "valid": false,
            "errors": [
                {"field": "metadata.name", "message": "is required"},
                {"field": "spec.owner", "message": "unknown team"}
            ]
        })))
        .mount(&server)
        .await;

    let result = client(&server).validate_manifest("kind: Entity").await.unwrap();
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.errors[0].field, "metadata.name");
}

#[tokio::test]
async fn validation_endpoint_still_surfaces_server_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/manifests/validate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client(&server).validate_manifest("kind: Entity").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Server);
}

#[tokio::test]
async fn conversion_request_carries_target_and_validate_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/manifests/convert"))
        .and(body_json(json!({
            "content": "kind: Entity",
            "targetType": "backstage",
            "validate": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "content": "apiVersion: backstage.io/v1alpha1\n",
            "format": "backstage"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server)
        .convert_manifest("kind: Entity", "backstage", true)
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.format, "backstage");
}

#[tokio::test]
async fn pat_login_verifies_and_persists_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .and(bearer_token("shp_abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "a@b.com",
            "name": "A B",
            "tenant_id": "acme"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.yaml"));

    let me = login_with_pat(&store, &server.uri(), "default", "shp_abc")
        .await
        .unwrap();
    assert_eq!(me.id, "u1");
    assert_eq!(me.name, "A B");

    let config = store.load().unwrap();
    assert!(config.is_authenticated());
    assert!(config.is_pat_auth());
    assert!(!config.is_token_expired());
    let auth = config.current_profile().unwrap().auth.as_ref().unwrap();
    assert_eq!(auth.provider_type, ProviderType::Pat);
    assert_eq!(auth.access_token, "shp_abc");
    assert_eq!(auth.user.as_ref().unwrap().email, "a@b.com");
    assert_eq!(auth.user.as_ref().unwrap().tenant_id, "acme");
}

#[tokio::test]
async fn pat_login_rejected_by_server_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.yaml"));

    let err = login_with_pat(&store, &server.uri(), "default", "shp_bad")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("401") || err.to_string().contains("bad token"));
    assert!(!store.path().exists());
}

#[tokio::test]
async fn pat_login_lands_on_the_selected_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .and(bearer_token("shp_stg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u2",
            "email": "a@b.com",
            "name": "A B",
            "tenant_id": "acme"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.yaml"));

    let mut seeded = Config::default_config();
    seeded.profiles.insert(
        "staging".to_string(),
        Profile {
            name: "staging".to_string(),
            server: server.uri(),
            auth: None,
        },
    );
    store.save(&seeded).unwrap();

    login_with_pat(&store, &server.uri(), "staging", "shp_stg")
        .await
        .unwrap();

    let config = store.load().unwrap();
    assert_eq!(config.current_profile, "staging");
    let auth = config.profiles.get("staging").unwrap().auth.as_ref().unwrap();
    assert_eq!(auth.access_token, "shp_stg");
    assert!(config.profiles.get("default").unwrap().auth.is_none());
}
