//! Integration test for model parsing and translation

use sdkdocs_generator_parser::{
    discover_model_files, extract_endpoint_prefix, JsonModelTranslator, ModelTranslator,
};
use std::fs;
use tempfile::TempDir;

const SQS_MODEL: &str = r#"{
    "metadata": {
        "apiVersion": "2012-11-05",
        "endpointPrefix": "sqs",
        "serviceFullName": "Amazon Simple Queue Service",
        "protocol": "query"
    },
    "operations": {
        "CreateQueue": {
            "documentation": "Creates a new standard or FIFO queue.",
            "input": {"shape": "CreateQueueRequest"},
            "output": {"shape": "CreateQueueResult"}
        },
        "DeleteQueue": {
            "documentation": "Deletes the queue specified by the QueueUrl.",
            "input": {"shape": "DeleteQueueRequest"}
        }
    },
    "shapes": {
        "CreateQueueRequest": {
            "type": "structure",
            "required": ["QueueName"],
            "members": {
                "QueueName": {"shape": "String", "documentation": "The name of the new queue."},
                "Attributes": {"shape": "QueueAttributeMap"}
            }
        },
        "CreateQueueResult": {
            "type": "structure",
            "members": {
                "QueueUrl": {"shape": "String", "documentation": "The URL of the created queue."}
            }
        },
        "DeleteQueueRequest": {
            "type": "structure",
            "required": ["QueueUrl"],
            "members": {
                "QueueUrl": {"shape": "String"}
            }
        },
        "String": {"type": "string"},
        "QueueAttributeMap": {"type": "map"}
    },
    "waiters": {
        "__default__": {"interval": 20, "maxAttempts": 10}
    }
}"#;

#[test]
fn test_translate_discovered_model_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sqs-2012-11-05.json"), SQS_MODEL).unwrap();

    let groups = discover_model_files(dir.path()).unwrap();
    let file = &groups.get("sqs").unwrap()[0];

    let model = JsonModelTranslator.translate(file).unwrap();

    assert_eq!(model.metadata.endpoint_prefix, "sqs");
    assert_eq!(model.metadata.api_version, "2012-11-05");
    assert_eq!(
        model.metadata.service_full_name,
        "Amazon Simple Queue Service"
    );
    assert_eq!(model.metadata.protocol.as_deref(), Some("query"));
    assert_eq!(model.operations.len(), 2);

    let create_queue = model.operations.get("CreateQueue").unwrap();
    assert_eq!(create_queue.input.len(), 2);
    assert_eq!(create_queue.input[0].name, "QueueName");
    assert!(create_queue.input[0].required);
    assert_eq!(create_queue.input[1].type_name, "map");
    assert_eq!(create_queue.output.len(), 1);

    assert_eq!(model.waiters.len(), 1);
}

#[test]
fn test_translate_version_falls_back_to_filename() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("mystery-2019-06-30.json"),
        r#"{"operations": {"Ping": {}}}"#,
    )
    .unwrap();

    let groups = discover_model_files(dir.path()).unwrap();
    let file = &groups.get("mystery").unwrap()[0];

    let model = JsonModelTranslator.translate(file).unwrap();
    assert_eq!(model.metadata.api_version, "2019-06-30");
}

#[test]
fn test_translate_malformed_model_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad-2020-01-01.json"), "{not json").unwrap();

    let groups = discover_model_files(dir.path()).unwrap();
    let file = &groups.get("bad").unwrap()[0];

    assert!(JsonModelTranslator.translate(file).is_err());
}

#[test]
fn test_endpoint_prefix_text_search_matches_model() {
    assert_eq!(extract_endpoint_prefix(SQS_MODEL), Some("sqs".to_string()));
}
