//! Integration test for reference page generation

use sdkdocs_generator_common::{DocBuildOptions, MemoryRegistry};
use sdkdocs_generator_generator::{ApiDocumentor, DocSetWriter};
use sdkdocs_generator_parser::JsonModelTranslator;
use std::fs;
use tempfile::TempDir;

const S3_2006: &str = r#"{
    "metadata": {
        "apiVersion": "2006-03-01",
        "endpointPrefix": "s3",
        "serviceFullName": "Amazon Simple Storage Service",
        "protocol": "rest-xml"
    },
    "operations": {
        "HeadBucket": {
            "documentation": "Determines whether a bucket exists.",
            "input": {"shape": "HeadBucketRequest"}
        }
    },
    "shapes": {
        "HeadBucketRequest": {
            "type": "structure",
            "required": ["Bucket"],
            "members": {
                "Bucket": {"shape": "BucketName", "documentation": "The bucket name."}
            }
        },
        "BucketName": {"type": "string"}
    },
    "waiters": {
        "__default__": {"interval": 15, "maxAttempts": 40},
        "BucketExists": {"operation": "HeadBucket", "maxAttempts": 20}
    }
}"#;

const S3_2015: &str = r#"{
    "metadata": {
        "apiVersion": "2015-09-17",
        "endpointPrefix": "s3",
        "serviceFullName": "Amazon Simple Storage Service",
        "protocol": "rest-xml"
    },
    "operations": {
        "HeadBucket": {},
        "ListBuckets": {"documentation": "Returns a list of all buckets owned by the sender."}
    }
}"#;

const SQS_2012: &str = r#"{
    "metadata": {
        "apiVersion": "2012-11-05",
        "endpointPrefix": "sqs",
        "serviceFullName": "Amazon Simple Queue Service"
    },
    "operations": {
        "ListQueues": {}
    }
}"#;

fn write_models(dir: &TempDir) {
    fs::write(dir.path().join("s3-2006-03-01.json"), S3_2006).unwrap();
    fs::write(dir.path().join("s3-2015-09-17.json"), S3_2015).unwrap();
    fs::write(dir.path().join("sqs-2012-11-05.json"), SQS_2012).unwrap();
    // Malformed model: documented services must be unaffected
    fs::write(dir.path().join("broken-2020-01-01.json"), "{oops").unwrap();
    // Not a model filename: silently ignored
    fs::write(dir.path().join("notes.txt"), "scratch").unwrap();
}

#[test]
fn test_generate_reference_pages() {
    let models = TempDir::new().unwrap();
    write_models(&models);

    let documentor = ApiDocumentor::new(JsonModelTranslator, DocBuildOptions::default());
    let mut registry = MemoryRegistry::new();
    let report = documentor
        .document_directory(models.path(), &mut registry)
        .unwrap();

    // s3 (two versions) + sqs; broken skipped
    assert_eq!(report.classes, 3);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].service, "broken");
    assert_eq!(report.waiters, 1);
    assert!(report.waiter_failures.is_empty());

    // The latest s3 model is the unsuffixed current alias
    let current = registry.get("s3").unwrap();
    assert!(current
        .tags
        .iter()
        .any(|tag| tag.name == "api_version" && tag.value == "2015-09-17"));
    assert!(!current.tags.iter().any(|tag| tag.name == "superseded"));

    let superseded = registry.get("s3_2006_03_01").unwrap();
    assert!(superseded
        .tags
        .iter()
        .any(|tag| tag.name == "superseded" && tag.value == "true"));
    assert!(superseded
        .methods
        .iter()
        .any(|m| m.method.name == "wait_until_bucket_exists"));

    // Render to disk
    let output = TempDir::new().unwrap();
    let writer = DocSetWriter::new("Test Reference").unwrap();
    writer
        .write_to_directory(&registry, output.path())
        .unwrap();

    assert!(output.path().join("index.md").exists());
    assert!(output.path().join("s3.md").exists());
    assert!(output.path().join("s3_2006_03_01.md").exists());
    assert!(output.path().join("sqs.md").exists());

    let index = fs::read_to_string(output.path().join("index.md")).unwrap();
    assert!(index.contains("Test Reference"));
    assert!(index.contains("`s3`"));
    assert!(index.contains("2012-11-05"));

    let s3_page = fs::read_to_string(output.path().join("s3_2006_03_01.md")).unwrap();
    assert!(s3_page.contains("head_bucket(Bucket)"));
    assert!(s3_page.contains("wait_until_bucket_exists()"));
    assert!(s3_page.contains("Polls HeadBucket until the BucketExists state is reached."));
    assert!(s3_page.contains("every 15 seconds"));
    assert!(s3_page.contains("giving up after 20 attempts"));
}

#[test]
fn test_generate_latest_only() {
    let models = TempDir::new().unwrap();
    write_models(&models);

    let options = DocBuildOptions {
        document_superseded: false,
        ..DocBuildOptions::default()
    };
    let documentor = ApiDocumentor::new(JsonModelTranslator, options);
    let mut registry = MemoryRegistry::new();
    let report = documentor
        .document_directory(models.path(), &mut registry)
        .unwrap();

    assert_eq!(report.classes, 2);
    assert!(registry.get("s3").is_some());
    assert!(registry.get("s3_2006_03_01").is_none());
}

#[test]
fn test_generate_with_service_filter() {
    let models = TempDir::new().unwrap();
    write_models(&models);

    let options = DocBuildOptions {
        include: vec!["sqs".to_string()],
        ..DocBuildOptions::default()
    };
    let documentor = ApiDocumentor::new(JsonModelTranslator, options);
    let mut registry = MemoryRegistry::new();
    let report = documentor
        .document_directory(models.path(), &mut registry)
        .unwrap();

    assert_eq!(report.classes, 1);
    assert!(registry.get("sqs").is_some());
    assert!(registry.get("s3").is_none());
    // Filtered-out services are not reported as skipped
    assert!(report.skipped.is_empty());
}

#[test]
fn test_generate_without_waiters() {
    let models = TempDir::new().unwrap();
    write_models(&models);

    let options = DocBuildOptions {
        include_waiters: false,
        ..DocBuildOptions::default()
    };
    let documentor = ApiDocumentor::new(JsonModelTranslator, options);
    let mut registry = MemoryRegistry::new();
    let report = documentor
        .document_directory(models.path(), &mut registry)
        .unwrap();

    assert_eq!(report.waiters, 0);
    let superseded = registry.get("s3_2006_03_01").unwrap();
    assert!(!superseded
        .methods
        .iter()
        .any(|m| m.method.name.starts_with("wait_until")));
}
