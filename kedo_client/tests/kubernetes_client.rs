use ::std::{collections::BTreeMap, time::Duration};

use ::httpmock::prelude::*;
use ::kedo_client::{
    kubernetes::{ClusterStatus, CreateClusterRequest, KubernetesCluster, NodePoolRequest},
    DigitalOceanClient,
};
use ::kedo_common::{
    serde_json::json,
    time::{format_description::well_known::Rfc3339, OffsetDateTime},
    tokio,
};
use ::reqwest::StatusCode;

fn create_request() -> CreateClusterRequest {
    CreateClusterRequest {
        name: "prod".to_owned(),
        region: "nyc1".to_owned(),
        version: "1.31.1-do.0".to_owned(),
        vpc_uuid: None,
        tags: vec!["team:web".to_owned()],
        auto_upgrade: Some(true),
        node_pools: vec![NodePoolRequest {
            name: "workers".to_owned(),
            size: "s-2vcpu-4gb".to_owned(),
            count: 3,
            tags: vec![],
            labels: BTreeMap::from([("env".to_owned(), "prod".to_owned())]),
            auto_scale: Some(true),
            min_nodes: Some(2),
            max_nodes: Some(5),
        }],
    }
}

#[tokio::test]
async fn create_cluster_success() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/kubernetes/clusters")
            .header("Authorization", "Bearer secret")
            .json_body(json!({
                "name": "prod",
                "region": "nyc1",
                "version": "1.31.1-do.0",
                "tags": ["team:web"],
                "auto_upgrade": true,
                "node_pools": [{
                    "name": "workers",
                    "size": "s-2vcpu-4gb",
                    "count": 3,
                    "tags": [],
                    "labels": {"env": "prod"},
                    "auto_scale": true,
                    "min_nodes": 2,
                    "max_nodes": 5
                }]
            }));
        then.status(201)
            .header("content-type", "application/json")
            .json_body(json!({
                "kubernetes_cluster": {
                    "id": "bd5f5959-5e1e-4205-a714-a914373942af",
                    "name": "prod",
                    "region": "nyc1",
                    "version": "1.31.1-do.0",
                    "vpc_uuid": "c33931f2-a26a-4e61-b85c-4e95a2ec431b",
                    "ipv4": "",
                    "status": {"state": "provisioning", "message": "provisioning"},
                    "created_at": "2024-11-15T16:00:11Z"
                }
            }));
    });
    let base_url = server.base_url();
    let client = DigitalOceanClient::new(&base_url, "secret", None).unwrap();
    let cluster = client.create_cluster(&create_request()).await.unwrap();

    mock.assert();
    assert_eq!(
        cluster,
        KubernetesCluster {
            id: "bd5f5959-5e1e-4205-a714-a914373942af".to_owned(),
            name: "prod".to_owned(),
            region: "nyc1".to_owned(),
            version: "1.31.1-do.0".to_owned(),
            vpc_uuid: "c33931f2-a26a-4e61-b85c-4e95a2ec431b".to_owned(),
            status: ClusterStatus {
                state: "provisioning".to_owned(),
                message: Some("provisioning".to_owned()),
            },
            created_at: OffsetDateTime::parse("2024-11-15T16:00:11Z", &Rfc3339).unwrap(),
        }
    );
}

#[tokio::test]
async fn create_cluster_rejected() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/kubernetes/clusters")
            .header_exists("Authorization");
        then.status(422).json_body(json!({
            "id": "unprocessable_entity",
            "message": "validation error: invalid version slug"
        }));
    });
    let base_url = server.base_url();
    let client = DigitalOceanClient::new(&base_url, "secret", None).unwrap();
    let err = client.create_cluster(&create_request()).await.unwrap_err();

    mock.assert();
    assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
}

#[tokio::test]
async fn create_cluster_server_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v2/kubernetes/clusters");
        then.status(500);
    });
    let base_url = server.base_url();
    let client = DigitalOceanClient::new(&base_url, "secret", None).unwrap();
    let err = client.create_cluster(&create_request()).await.unwrap_err();

    mock.assert();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn create_cluster_with_unexpected_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v2/kubernetes/clusters");
        then.status(201)
            .header("content-type", "application/json")
            .json_body(json!({"id": "abc"}));
    });
    let base_url = server.base_url();
    let client = DigitalOceanClient::new(&base_url, "secret", None).unwrap();
    let err = client.create_cluster(&create_request()).await.unwrap_err();

    mock.assert();
    assert!(err.is_decode());
}

#[tokio::test]
async fn trailing_slash_in_base_url() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v2/kubernetes/clusters");
        then.status(500);
    });
    let base_url = format!("{}/", server.base_url());
    let client =
        DigitalOceanClient::new(&base_url, "secret", Some(Duration::from_secs(5))).unwrap();
    let _ = client.create_cluster(&create_request()).await;

    mock.assert();
}
