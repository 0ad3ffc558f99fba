use patient_service::server::{ServerConfig, ServerNode};
use patient_service::store::PatientStore;
use rocket::data::ByteUnit;
use rocket::local::blocking::Client;
use std::sync::Arc;

pub const ADA: &str = r#"{"name":"Ada Lovelace","dateOfBirth":"1815-12-10","gender":"Female","illness":"None","email":"ada@example.com"}"#;

pub fn launch_server_node() -> (ServerNode, Client) {
    let node = ServerNode::new(ServerConfig::default());
    let client = Client::tracked(node.build()).expect("valid rocket instance");
    (node, client)
}

pub fn launch_empty_server_node() -> (ServerNode, Client) {
    let node = ServerNode::with_store(ServerConfig::default(), Arc::new(PatientStore::new()));
    let client = Client::tracked(node.build()).expect("valid rocket instance");
    (node, client)
}

pub fn launch_server_node_with_json_limit(json_limit: ByteUnit) -> (ServerNode, Client) {
    let config = ServerConfig {
        json_limit,
        ..ServerConfig::default()
    };
    let node = ServerNode::new(config);
    let client = Client::tracked(node.build()).expect("valid rocket instance");
    (node, client)
}
