use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use counter_core::{CounterTypeSet, Vocabulary};
use counter_engine::{
    harvest_cards, CardRecord, ChannelProgressSink, EngineEvent, FailureKind, FetchError,
    FetchSettings, Harvester, PageFetcher, SearchPage, Stage,
};
use pretty_assertions::assert_eq;
use serde_json::json;

/// Serves canned pages keyed by URL.
struct StaticFetcher {
    pages: HashMap<String, serde_json::Value>,
}

#[async_trait::async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch_page(&self, url: &str) -> Result<SearchPage, FetchError> {
        let value = self.pages.get(url).cloned().ok_or_else(|| FetchError {
            kind: FailureKind::HttpStatus(404),
            message: url.to_string(),
        })?;
        Ok(serde_json::from_value(value).expect("valid page"))
    }
}

fn settings() -> FetchSettings {
    FetchSettings {
        request_interval: Duration::ZERO,
        ..FetchSettings::default()
    }
}

fn two_page_fetcher() -> Arc<StaticFetcher> {
    let mut pages = HashMap::new();
    pages.insert(
        "mem://1".to_string(),
        json!({
            "has_more": true,
            "next_page": "mem://2",
            "total_cards": 3,
            "data": [
                {"name": "Frankenstein's Monster",
                 "oracle_text": "enters with X +2/+0, +1/+1, or +0/+2 counters on it"},
                {"name": "Split",
                 "card_faces": [
                    {"oracle_text": "put a fade counter on it"},
                    {"oracle_text": "remove all counters from it"}
                 ]}
            ]
        }),
    );
    pages.insert(
        "mem://2".to_string(),
        json!({
            "has_more": false,
            "data": [{"name": "Walker", "oracle_text": "+1: Put a loyalty counter on it"}]
        }),
    );
    Arc::new(StaticFetcher { pages })
}

#[tokio::test]
async fn harvester_scans_every_page() {
    engine_logging::initialize_for_tests();
    let harvester = Harvester::with_fetcher(two_page_fetcher(), settings());
    let (tx, rx) = mpsc::channel();
    let sink = ChannelProgressSink::new(tx);

    let report = harvester.run("mem://1", &sink).await.expect("harvest");

    assert_eq!(report.pages, 2);
    assert_eq!(report.cards, 3);
    assert_eq!(report.faces, 4);
    assert_eq!(
        report.counters.sorted(),
        vec!["+0/+2", "+1/+1", "+2/+0", "fade", "loyalty"]
    );

    let stages: Vec<Stage> = rx
        .try_iter()
        .filter_map(|event| match event {
            EngineEvent::Progress(progress) => Some(progress.stage),
            _ => None,
        })
        .collect();
    assert_eq!(stages, vec![Stage::Fetching, Stage::Fetching, Stage::Scanning]);
}

#[tokio::test]
async fn harvester_applies_custom_vocabulary() {
    let harvester = Harvester::with_fetcher(two_page_fetcher(), settings())
        .with_vocabulary(Vocabulary::with_extra_forbidden(["fade", "loyalty"]));
    let (tx, _rx) = mpsc::channel();

    let report = harvester
        .run("mem://1", &ChannelProgressSink::new(tx))
        .await
        .expect("harvest");

    assert!(!report.counters.contains("fade"));
    assert!(!report.counters.contains("loyalty"));
    assert!(report.counters.contains("+1/+1"));
}

#[tokio::test]
async fn harvester_propagates_fetch_failure() {
    let harvester = Harvester::with_fetcher(two_page_fetcher(), settings());
    let (tx, rx) = mpsc::channel();

    let err = harvester
        .run("mem://missing", &ChannelProgressSink::new(tx))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert!(matches!(
        rx.try_recv(),
        Ok(EngineEvent::PageFailed { .. })
    ));
}

#[test]
fn harvest_cards_scans_loaded_cards() {
    let cards: Vec<CardRecord> = serde_json::from_value(json!([
        {"oracle_text": "Put an age counter on it."},
        {"oracle_text": "Put a shield counter on it."},
        {"oracle_text": null}
    ]))
    .unwrap();

    let report = harvest_cards(&cards, Vocabulary::standard());

    assert_eq!(report.cards, 3);
    assert_eq!(report.faces, 3);
    assert_eq!(
        report.counters,
        ["age", "shield"].into_iter().collect::<CounterTypeSet>()
    );
}
