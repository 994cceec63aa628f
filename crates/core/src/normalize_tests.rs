use serde_json::json;

use crate::{AuthorSummary, SearchError, fetch_detail, summarize};

#[test]
fn test_summary_fields() {
    let raw = json!({"authorid": "2917", "authorfirst": "Stephen", "authorlast": "King"});
    assert_eq!(
        summarize(&raw).unwrap(),
        AuthorSummary { id: 2917, first_name: "Stephen".to_owned(), last_name: "King".to_owned() }
    );
}

#[test]
fn test_missing_names_default_to_empty() {
    let raw = json!({"authorid": "5"});
    let summary = summarize(&raw).unwrap();
    assert_eq!(summary.first_name, "");
    assert_eq!(summary.last_name, "");
}

#[test]
fn test_non_string_name_defaults_to_empty() {
    let raw = json!({"authorid": "5", "authorfirst": 12, "authorlast": null});
    let summary = summarize(&raw).unwrap();
    assert_eq!(summary.first_name, "");
    assert_eq!(summary.last_name, "");
}

#[test]
fn test_missing_author_id_is_malformed() {
    let raw = json!({"authorfirst": "Anon"});
    let err = summarize(&raw).unwrap_err();
    assert!(matches!(err, SearchError::Malformed("authorid")));
}

#[test]
fn test_non_numeric_author_id_is_malformed() {
    for id in [json!("abc"), json!(""), json!(" 12"), json!(true), json!(1.5)] {
        let raw = json!({"authorid": id});
        assert_eq!(summarize(&raw).unwrap_err().field(), Some("authorid"));
    }
}

#[test]
fn test_numeric_author_id_accepted() {
    let raw = json!({"authorid": 77});
    assert_eq!(summarize(&raw).unwrap().id, 77);
}

#[test]
fn test_works_absent_yields_empty() {
    let raw = json!({"authorid": "1"});
    assert!(fetch_detail(&raw).unwrap().work_ids.is_empty());
}

#[test]
fn test_single_work_string() {
    let raw = json!({"authorid": "1", "works": {"works": "42"}});
    assert_eq!(fetch_detail(&raw).unwrap().work_ids, vec![42]);
}

#[test]
fn test_work_list_keeps_order() {
    let raw = json!({"authorid": "1", "works": {"works": ["42", "7"]}});
    assert_eq!(fetch_detail(&raw).unwrap().work_ids, vec![42, 7]);
}

#[test]
fn test_bad_work_id_fails_whole_record() {
    let raw = json!({"authorid": "1", "works": {"works": ["abc"]}});
    assert!(matches!(fetch_detail(&raw), Err(SearchError::Malformed("workIds"))));

    let raw = json!({"authorid": "1", "works": {"works": ["3", "x", "4"]}});
    assert!(matches!(fetch_detail(&raw), Err(SearchError::Malformed("workIds"))));
}

#[test]
fn test_spotlight_to_plain_text() {
    let raw = json!({"authorid": "1", "spotlight": "<p>Hi <b>there</b></p>"});
    let detail = fetch_detail(&raw).unwrap();
    assert_eq!(detail.spotlight_html, "<p>Hi <b>there</b></p>");
    assert_eq!(detail.biography_plain_text, "Hi there");
    assert!(detail.has_biography());
}

#[test]
fn test_missing_spotlight() {
    let raw = json!({"authorid": "1"});
    let detail = fetch_detail(&raw).unwrap();
    assert_eq!(detail.spotlight_html, "");
    assert_eq!(detail.biography_plain_text, "");
    assert!(!detail.has_biography());
}

#[test]
fn test_fetch_detail_is_idempotent() {
    let raw = json!({
        "authorid": "3",
        "authorfirst": "Anne",
        "authorlast": "Rice",
        "spotlight": "<p>Born in <i>New Orleans</i>.</p>",
        "works": {"works": ["10", "20", "30"]}
    });
    let first = fetch_detail(&raw).unwrap();
    let second = fetch_detail(&raw).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.full_name(), "Anne Rice");
    assert_eq!(first.id(), 3);
}
