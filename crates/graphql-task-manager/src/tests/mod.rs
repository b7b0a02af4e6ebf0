mod path;

use crate::JsonRecord;

#[ctor::ctor]
fn setup_logging() {
    let filter = tracing_subscriber::filter::EnvFilter::builder()
        .parse(std::env::var("RUST_LOG").unwrap_or("graphql_task_manager=debug".to_string()))
        .unwrap();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(true)
        .without_time()
        .init();
}

fn rows(value: serde_json::Value) -> Vec<JsonRecord> {
    serde_json::from_value(value).unwrap()
}
