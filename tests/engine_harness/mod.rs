//! Shared test harness for query engine and REST testing
//!
//! Provides record builders for both kinds, a diverse seed batch for
//! windowing and sort testing, a `TestServer` factory, and a store double
//! that fails every call for outage-path testing.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod engine_harness;
//! use engine_harness::*;
//! ```

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use uuid::Uuid;

use reliefdesk::config::ServiceConfig;
use reliefdesk::core::error::StoreError;
use reliefdesk::core::query::RecordQuery;
use reliefdesk::core::record::{CallStatus, Record, RecordKind};
use reliefdesk::server::{build_router, AppState};
use reliefdesk::storage::{InMemoryRecordStore, RecordStore};

// ---------------------------------------------------------------------------
// Record builders
// ---------------------------------------------------------------------------

/// Create a relief need with sensible defaults.
///
/// Status is left empty (normalizes to "Not yet received"), call status is
/// not-called, one phone number is attached so masking is observable.
pub fn need_record(name: &str, district: &str, priority: u8, created: i64) -> Record {
    Record {
        id: Uuid::new_v4(),
        kind: RecordKind::Need,
        name: name.to_string(),
        phone: vec!["01712345678".to_string()],
        district: district.to_string(),
        location: format!("{} sadar", district),
        tags: vec!["Dry food".to_string()],
        people_count: Some(4),
        priority: Some(priority),
        verified: false,
        status: String::new(),
        call_status: CallStatus::NotCalled,
        notes: String::new(),
        created_instant: created,
        raw_timestamp: None,
    }
}

/// Create a support provider with sensible defaults.
///
/// Providers carry no priority and no headcount.
pub fn provider_record(name: &str, district: &str, created: i64) -> Record {
    Record {
        id: Uuid::new_v4(),
        kind: RecordKind::SupportProvider,
        name: name.to_string(),
        phone: vec!["01898765432".to_string()],
        district: district.to_string(),
        location: format!("{} ghat", district),
        tags: vec!["Boat rescue".to_string()],
        people_count: None,
        priority: None,
        verified: false,
        status: String::new(),
        call_status: CallStatus::NotCalled,
        notes: String::new(),
        created_instant: created,
        raw_timestamp: None,
    }
}

/// Generate a batch of `n` diverse needs with varied field values.
///
/// Useful for windowing/sort/search testing. Districts, priorities,
/// verification, and call statuses all cycle so every filter has matches
/// and non-matches in any reasonably sized batch.
pub fn need_batch(n: usize) -> Vec<Record> {
    const DISTRICTS: [&str; 4] = ["Feni", "Noakhali", "Cumilla", "Lakshmipur"];
    const CALLS: [CallStatus; 3] = [
        CallStatus::NotCalled,
        CallStatus::Answered,
        CallStatus::NotAnswered,
    ];

    (0..n)
        .map(|i| {
            let mut record = need_record(
                &format!("Need_{}", i),
                DISTRICTS[i % DISTRICTS.len()],
                (i % 5) as u8 + 1,                // priorities: 1, 2, 3, 4, 5, 1, ...
                (i as i64 + 1) * 1_000,           // strictly increasing instants
            );
            record.verified = i % 2 == 0;         // alternating verified
            record.call_status = CALLS[i % CALLS.len()];
            record.people_count = Some(i as u32 % 10);
            record
        })
        .collect()
}

/// Seed a fresh store with `records`.
pub fn seeded_store(records: Vec<Record>) -> InMemoryRecordStore {
    let store = InMemoryRecordStore::new();
    for record in records {
        store.add(record).expect("Seeding store should succeed");
    }
    store
}

// ---------------------------------------------------------------------------
// Server factory
// ---------------------------------------------------------------------------

/// Spin up a `TestServer` over the given store with default configuration.
///
/// The store is cloned into the server; both clones share state, so tests
/// can keep mutating the store after the server is running.
pub fn spawn_server(store: &InMemoryRecordStore) -> TestServer {
    spawn_server_with_config(store, ServiceConfig::default())
}

pub fn spawn_server_with_config(store: &InMemoryRecordStore, config: ServiceConfig) -> TestServer {
    let state = AppState::new(Arc::new(store.clone()), config);
    let app = build_router(state);
    TestServer::new(app)
}

// ---------------------------------------------------------------------------
// FailingStore: store double for outage-path testing
// ---------------------------------------------------------------------------

/// A store whose every call fails, for exercising the 503 path.
#[derive(Clone, Default)]
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn scan(
        &self,
        _query: &RecordQuery,
        _skip: usize,
        _limit: usize,
    ) -> Result<Vec<Record>, StoreError> {
        Err(StoreError::Scan {
            message: "backend offline".to_string(),
        })
    }

    async fn count(&self, _query: &RecordQuery) -> Result<usize, StoreError> {
        Err(StoreError::Count {
            message: "backend offline".to_string(),
        })
    }

    async fn scan_all(&self, _query: &RecordQuery) -> Result<Vec<Record>, StoreError> {
        Err(StoreError::Unavailable {
            message: "backend offline".to_string(),
        })
    }
}

/// Spin up a `TestServer` whose store fails every call.
pub fn spawn_failing_server() -> TestServer {
    let state = AppState::new(Arc::new(FailingStore), ServiceConfig::default());
    let app = build_router(state);
    TestServer::new(app)
}

// ---------------------------------------------------------------------------
// Assertion helpers
// ---------------------------------------------------------------------------

/// Assert the records' names appear in exactly this order.
pub fn assert_names(records: &[Record], expected: &[&str]) {
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, expected, "Record order mismatch");
}

/// Assert that a list contains exactly `n` records.
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}
