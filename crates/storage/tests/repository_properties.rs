// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end behavior of the repository against a real file

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sdb_storage::{ExclusiveQueue, JsonStore, Query, Record, Repository};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use tempfile::TempDir;

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

fn fresh_repo(doc: Value) -> (TempDir, Repository) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
    let repo = Repository::new(JsonStore::with_queue(path, Arc::new(ExclusiveQueue::new())));
    (dir, repo)
}

fn ids(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn sensor_lifecycle_scenario() {
    let (_dir, repo) = fresh_repo(json!({"sensors": []}));

    let temp = repo.create("sensors", record(json!({"name": "Temp"}))).await.unwrap();
    assert_eq!(temp["id"], json!("1"));
    let hum = repo.create("sensors", record(json!({"name": "Hum"}))).await.unwrap();
    assert_eq!(hum["id"], json!("2"));

    let patched = repo
        .patch("sensors", "1", record(json!({"name": "TempA"})))
        .await
        .unwrap();
    assert_eq!(patched, Some(record(json!({"name": "TempA", "id": "1"}))));

    assert!(repo.remove("sensors", "2").await.unwrap());

    let remaining = repo.list("sensors", &Query::new()).await.unwrap();
    assert_eq!(remaining, vec![record(json!({"name": "TempA", "id": "1"}))]);
}

#[tokio::test]
async fn created_record_reads_back_with_its_id() {
    let (_dir, repo) = fresh_repo(json!({}));
    let data = record(json!({"sensorId": "3", "thresholdValue": "21.5", "condition": ">"}));

    let created = repo.create("alarmThresholds", data.clone()).await.unwrap();
    let fetched = repo
        .get_by_id("alarmThresholds", created["id"].as_str().unwrap())
        .await
        .unwrap()
        .unwrap();

    let mut expected = data;
    expected.insert("id".into(), json!("1"));
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn generated_id_follows_existing_maximum() {
    let (_dir, repo) = fresh_repo(json!({"measurements": [
        {"id": "3"}, {"id": 10}, {"id": "sensor-x"}, {"id": "7"},
    ]}));

    let created = repo.create("measurements", Record::new()).await.unwrap();
    assert_eq!(created["id"], json!("11"));
}

#[tokio::test]
async fn list_preserves_stored_order_and_filters_exactly() {
    let (_dir, repo) = fresh_repo(json!({"sensors": [
        {"id": "3", "type": "humidity"},
        {"id": "1", "type": "temperature"},
        {"id": "2", "type": "humidity"},
    ]}));

    let all = repo.list("sensors", &Query::new()).await.unwrap();
    assert_eq!(ids(&all), vec!["3", "1", "2"]);

    let humidity = repo
        .list("sensors", &Query::new().eq("type", "humidity"))
        .await
        .unwrap();
    assert_eq!(ids(&humidity), vec!["3", "2"]);
}

#[tokio::test]
async fn remove_touches_exactly_one_record() {
    let (_dir, repo) = fresh_repo(json!({"recommendations": [
        {"id": "1", "text": "a"}, {"id": "2", "text": "b"}, {"id": "3", "text": "c"},
    ]}));
    let before = repo.list("recommendations", &Query::new()).await.unwrap();

    assert!(repo.remove("recommendations", "2").await.unwrap());
    let after = repo.list("recommendations", &Query::new()).await.unwrap();

    assert_eq!(after.len(), before.len() - 1);
    assert_eq!(after, vec![before[0].clone(), before[2].clone()]);

    let raw_before = std::fs::read(repo.store().path()).unwrap();
    assert!(!repo.remove("recommendations", "2").await.unwrap());
    assert_eq!(std::fs::read(repo.store().path()).unwrap(), raw_before);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_consecutive_ids() {
    const K: usize = 40;
    let (_dir, repo) = fresh_repo(json!({"sensors": []}));

    let handles: Vec<_> = (0..K)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.create("sensors", record(json!({"name": format!("s{i}")})))
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut assigned = HashSet::new();
    for handle in handles {
        let created = handle.await.unwrap();
        assigned.insert(created["id"].as_str().unwrap().parse::<usize>().unwrap());
    }
    assert_eq!(assigned, (1..=K).collect::<HashSet<_>>());

    let raw = std::fs::read_to_string(repo.store().path()).unwrap();
    let doc: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["sensors"].as_array().unwrap().len(), K);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn writes_to_different_tables_share_one_queue() {
    let (dir, _) = fresh_repo(json!({}));
    let path = dir.path().join("db.json");
    let queue = Arc::new(ExclusiveQueue::new());

    // Two independent handles over the same file and queue
    let sensors = Repository::new(JsonStore::with_queue(&path, Arc::clone(&queue)));
    let recommendations = Repository::new(JsonStore::with_queue(&path, Arc::clone(&queue)));

    let a = {
        let repo = sensors.clone();
        tokio::spawn(async move {
            for _ in 0..15 {
                repo.create("sensors", Record::new()).await.unwrap();
            }
        })
    };
    let b = {
        let repo = recommendations.clone();
        tokio::spawn(async move {
            for _ in 0..15 {
                repo.create("recommendations", Record::new()).await.unwrap();
            }
        })
    };
    a.await.unwrap();
    b.await.unwrap();

    assert_eq!(sensors.list("sensors", &Query::new()).await.unwrap().len(), 15);
    assert_eq!(
        sensors.list("recommendations", &Query::new()).await.unwrap().len(),
        15
    );
    assert_eq!(queue.completed(), 30);
}
