//! Integration tests for loading, filtering and exporting real export files

use chatsift::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

const JSON_EXPORT: &str = r#"{
  "name": "Release Chat",
  "type": "private_group",
  "id": 123456789,
  "messages": [
    {"id": 1, "type": "message", "date": "2024-01-15T10:30:00", "from": "Alice", "text": "Release is out"},
    {"id": 2, "type": "message", "date": "2024-01-15T10:31:00", "from": "Bob", "text": "Great news!", "reply_to_message_id": 1},
    {"id": 3, "type": "message", "date": "2024-01-15T10:32:00", "from": "Alice", "text": [
      "Notes: ",
      {"type": "link", "text": "https://example.com/release"}
    ]},
    {"id": 4, "type": "service", "date": "2024-01-15T10:33:00", "action": "pin_message"}
  ]
}"#;

const HTML_EXPORT: &str = r##"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>Exported Data</title></head>
<body><div class="history">
  <div class="message default clearfix" id="message1">
    <div class="body">
      <div class="pull_right date details" title="16.01.2024 09:00:00 UTC+03:00">09:00</div>
      <div class="from_name">Carol</div>
      <div class="text">Did the RELEASE ship?</div>
    </div>
  </div>
  <div class="message default clearfix" id="message2">
    <div class="body">
      <div class="pull_right date details" title="16.01.2024 09:01:00 UTC+03:00">09:01</div>
      <div class="from_name">Dave</div>
      <div class="reply_to details">In reply to <a href="#go_to_message1" onclick="return GoToMessage(1)">this message</a></div>
      <div class="text">Yes</div>
    </div>
  </div>
</div></body></html>"##;

struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("result.json"), JSON_EXPORT).unwrap();
        fs::write(dir.path().join("messages.html"), HTML_EXPORT).unwrap();
        fs::write(dir.path().join("broken.json"), "{\"messages\": [").unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn id(&self, name: &str) -> String {
        self.path(name).display().to_string()
    }
}

#[test]
fn test_load_json_file() {
    let fixtures = Fixtures::new();
    let mut session = Session::new();

    let count = session.load_file(fixtures.path("result.json"), None).unwrap();
    assert_eq!(count, 4);

    let records = session.records();
    assert_eq!(records[0].sender, "Alice");
    assert_eq!(records[1].reply_to_id, Some(1));
    assert_eq!(records[2].text, "Notes: https://example.com/release");
    assert_eq!(records[3].sender, "Unknown");
    assert_eq!(records[3].text, "");
    assert!(records.iter().all(|r| r.source_id == fixtures.id("result.json")));
}

#[test]
fn test_load_html_file_by_extension() {
    let fixtures = Fixtures::new();
    let mut session = Session::new();

    let count = session.load_file(fixtures.path("messages.html"), None).unwrap();
    assert_eq!(count, 2);

    let dave = &session.records()[1];
    assert_eq!(dave.id, Some(2));
    assert_eq!(dave.sender, "Dave");
    assert_eq!(dave.timestamp, "16.01.2024 09:01:00 UTC+03:00");
    assert_eq!(dave.reply_to_id, Some(1));
}

#[test]
fn test_forced_format_overrides_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("export.txt");
    fs::write(&path, HTML_EXPORT).unwrap();

    let mut session = Session::new();
    assert!(session.load_file(&path, None).unwrap_err().is_parse());
    assert_eq!(session.load_file(&path, Some(SourceFormat::Html)).unwrap(), 2);
}

#[test]
fn test_batch_mixed_sources() {
    let fixtures = Fixtures::new();
    let mut session = Session::new();

    let report = session.load_batch(
        [
            fixtures.path("result.json"),
            fixtures.path("broken.json"),
            fixtures.path("messages.html"),
        ],
        None,
    );

    assert_eq!(report.loaded_count(), 2);
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.outcomes[1].source_id(), fixtures.id("broken.json"));
    assert_eq!(
        session.available_sources(),
        [fixtures.id("result.json"), fixtures.id("messages.html")]
    );
    assert_eq!(session.records().len(), 6);
}

#[test]
fn test_filter_across_sources() {
    let fixtures = Fixtures::new();
    let mut session = Session::new();
    session.load_batch([fixtures.path("result.json"), fixtures.path("messages.html")], None);

    let config = FilterConfig::new()
        .with_sender("Alice")
        .with_reply_id(1)
        .with_keyword("release");
    let result = session.apply_filters(config).unwrap();

    assert_eq!(result.sender_matches.len(), 2);
    // Reply ids match regardless of which source the target lives in
    let repliers: Vec<&str> = result.reply_matches.iter().map(|r| r.sender()).collect();
    assert_eq!(repliers, ["Bob", "Dave"]);
    let keyword: Vec<Option<i64>> = result.keyword_matches.iter().map(|r| r.id).collect();
    assert_eq!(keyword, [Some(1), Some(3), Some(1)]);
    assert_eq!(result.total(), 7);
}

#[test]
fn test_scope_restricts_filter_and_queries() {
    let fixtures = Fixtures::new();
    let mut session = Session::new();
    session.load_batch([fixtures.path("result.json"), fixtures.path("messages.html")], None);

    let html = fixtures.id("messages.html");
    let result = session
        .apply_filters(FilterConfig::new().with_reply_id(1).with_scope(html.clone()))
        .unwrap();
    assert_eq!(result.reply_matches.len(), 1);
    assert_eq!(result.reply_matches[0].sender, "Dave");

    assert_eq!(session.available_senders(Some(&html)), ["Carol", "Dave"]);
    assert_eq!(session.available_ids(Some(&html)), [1, 2]);
    assert_eq!(session.available_ids(None), [1, 2, 3, 4]);
}

#[test]
fn test_same_ids_in_two_sources_stay_distinct() {
    let mut session = Session::new();
    session
        .load_str(r#"{"messages":[{"id":1,"from":"Ann","text":"a"}]}"#, "a", SourceFormat::Json)
        .unwrap();
    session
        .load_str(r#"{"messages":[{"id":1,"from":"Ann","text":"b"}]}"#, "b", SourceFormat::Json)
        .unwrap();

    assert_eq!(session.records().len(), 2);
    assert!(session.store().aggregate("a").unwrap().record_ids.contains(&1));
    assert!(session.store().aggregate("b").unwrap().record_ids.contains(&1));
}

#[test]
fn test_keyword_example() {
    let mut session = Session::new();
    session
        .load_str(
            r#"{"messages":[{"id":5,"from":"Ann","text":"hello world","date":"t1"}]}"#,
            "a",
            SourceFormat::Json,
        )
        .unwrap();

    let record = &session.records()[0];
    assert_eq!(record.id, Some(5));
    assert_eq!(record.sender, "Ann");
    assert_eq!(record.text, "hello world");
    assert_eq!(record.reply_to_id, None);
    assert_eq!(record.source_id, "a");
    let expected = record.clone();

    let result = session.apply_filters(FilterConfig::new().with_keyword("WORLD")).unwrap();
    assert_eq!(result.keyword_matches, [expected]);
    assert!(result.sender_matches.is_empty());
    assert!(result.reply_matches.is_empty());
}

#[test]
fn test_full_workflow_exports() {
    let fixtures = Fixtures::new();
    let mut session = Session::new();
    session.load_batch([fixtures.path("result.json"), fixtures.path("messages.html")], None);
    session
        .apply_filters(FilterConfig::new().with_keyword("release"))
        .unwrap();

    let json_path = fixtures.path("out.json");
    session
        .export(json_path.to_str().unwrap(), ExportFormat::Json, &ExportConfig::new())
        .unwrap();
    let exported: FilterResult =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(&exported, session.result().unwrap());

    let html_path = fixtures.path("out.html");
    session
        .export(html_path.to_str().unwrap(), ExportFormat::Html, &ExportConfig::new())
        .unwrap();
    let html = fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("Keyword matches <span class=\"count\">3</span>"));
    assert!(html.contains("<span class=\"total\">3</span>"));
    assert!(!html.contains("Messages from sender"));
}

#[test]
fn test_stats_after_filter() {
    let fixtures = Fixtures::new();
    let mut session = Session::new();
    session.load_batch([fixtures.path("result.json"), fixtures.path("messages.html")], None);
    session
        .apply_filters(FilterConfig::new().with_sender("Alice").with_scope(fixtures.id("result.json")))
        .unwrap();

    let stats = session.stats().unwrap();
    assert_eq!(stats.source_count(), 2);
    assert_eq!(stats.total_records, 6);
    assert_eq!(stats.distinct_senders, 5);
    assert_eq!(stats.scope, Some((fixtures.id("result.json"), 4)));
    assert_eq!(stats.result.unwrap().sender_matches, 2);

    let text = stats.to_string();
    assert!(text.contains("Per source:"));
    assert!(text.contains("Sender matches:   2"));
}

#[test]
fn test_reset_then_reload_matches_fresh_load() {
    let fixtures = Fixtures::new();

    let mut fresh = Session::new();
    fresh.load_file(fixtures.path("result.json"), None).unwrap();

    let mut session = Session::new();
    session.load_file(fixtures.path("messages.html"), None).unwrap();
    session.reset();
    session.load_file(fixtures.path("result.json"), None).unwrap();
    session.load_file(fixtures.path("result.json"), None).unwrap();

    assert_eq!(session.records(), fresh.records());
    assert_eq!(session.store().aggregates(), fresh.store().aggregates());
}
