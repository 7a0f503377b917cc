use std::fs::write;
use tempfile::NamedTempFile;

use topics_uploader::topics::load_topics;

#[test]
fn loads_an_array_of_topics_with_passthrough_fields() {
    let file = NamedTempFile::new().expect("temp file");
    write(
        file.path(),
        br#"[
            {"id":"t1","title":"Algebra","description":"Linear equations","difficulty":3},
            {"id":"t2","title":"Geometry"}
        ]"#,
    )
    .unwrap();

    let topics = load_topics(file.path()).expect("Topics should load");

    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0].id, "t1");
    assert_eq!(topics[0].title, "Algebra");
    assert_eq!(
        topics[0].extra.get("description"),
        Some(&serde_json::json!("Linear equations"))
    );
    assert_eq!(
        topics[0].extra.get("difficulty"),
        Some(&serde_json::json!(3))
    );
    assert!(topics[1].extra.is_empty());
}

#[test]
fn preserves_input_order() {
    let file = NamedTempFile::new().expect("temp file");
    write(
        file.path(),
        br#"[{"id":"z","title":"Z"},{"id":"a","title":"A"},{"id":"m","title":"M"}]"#,
    )
    .unwrap();

    let topics = load_topics(file.path()).expect("Topics should load");

    let ids: Vec<&str> = topics.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["z", "a", "m"]);
}

#[test]
fn an_empty_array_is_valid_input() {
    let file = NamedTempFile::new().expect("temp file");
    write(file.path(), b"[]").unwrap();

    let topics = load_topics(file.path()).expect("Empty array should load");
    assert!(topics.is_empty());
}

#[test]
fn errors_on_missing_file() {
    let err = load_topics("no/such/topics_data.json").unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("Failed to read"),
        "Read error expected, got: {msg}"
    );
}

#[test]
fn errors_on_invalid_json() {
    let file = NamedTempFile::new().expect("temp file");
    write(file.path(), b"not json at all {{{").unwrap();

    let err = load_topics(file.path()).unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("parse"),
        "Parse error expected, got: {msg}"
    );
}

#[test]
fn errors_when_top_level_is_not_an_array() {
    let file = NamedTempFile::new().expect("temp file");
    write(file.path(), br#"{"id":"t1","title":"Algebra"}"#).unwrap();

    let err = load_topics(file.path()).unwrap_err();
    assert!(err.to_string().contains("parse"));
}
