#![allow(unused_crate_dependencies)]

use graphql_query_builder::{Arguments, Leaf, Query, enum_value};
use graphql_task_manager::{JsonRecord, MutationConfig, MutationPath, TaskManager};
use serde_json::json;

fn rows(value: serde_json::Value) -> Vec<JsonRecord> {
    serde_json::from_value(value).unwrap()
}

fn input(record: &JsonRecord) -> Arguments {
    record
        .iter()
        .filter(|(key, _)| key.as_str() != "id")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[test]
fn edited_list_becomes_one_mutation() {
    let initial = rows(json!([
        { "id": 4, "title": "Backlog", "position": 0 },
        { "id": 5, "title": "Doing", "position": 1 },
        { "id": 6, "title": "Done", "position": 2 }
    ]));
    let current = rows(json!([
        { "id": 4, "title": "Backlog", "position": 0 },
        { "id": 6, "title": "Shipped", "position": 1 },
        { "title": "Review", "position": 2 }
    ]));

    let mut tasks = TaskManager::new();
    tasks.build_diff(&initial, &current);

    let path: MutationPath = "board.columns".parse().unwrap();
    let config = MutationConfig::new(path)
        .on_update(|record: &JsonRecord, id| {
            Some(
                Query::aliased(format!("update_{id}"), "update")
                    .with_arguments(Arguments::new().with("id", id).with("input", input(record)))
                    .select(["id", "title"]),
            )
        })
        .on_create(|record: &JsonRecord, index| {
            Some(
                Query::aliased(format!("create_{index}"), "create")
                    .with_arguments([("input", input(record))])
                    .select([Leaf::new("id"), Leaf::aliased("name", "title")]),
            )
        })
        .on_remove(|ids| {
            Some(
                Query::new("remove")
                    .with_arguments(
                        Arguments::new()
                            .with("ids", ids.to_vec())
                            .with("mode", enum_value("SOFT")),
                    )
                    .without_body(),
            )
        });

    let document = tasks.build_mutation_document(&config).unwrap();

    assert_eq!(
        document.as_str(),
        r#"mutation { board{columns{update_6: update(id: 6, input: {title: "Shipped", position: 1}){id title} create_2: create(input: {title: "Review", position: 2}){id name: title} remove(ids: [5], mode: SOFT)}} }"#
    );

    // building is read-only, so it can be retried until the queues are reset
    assert!(!tasks.is_empty());
    tasks.reset_queues();
    assert!(tasks.build_mutation_document(&config).unwrap().is_empty());
}
