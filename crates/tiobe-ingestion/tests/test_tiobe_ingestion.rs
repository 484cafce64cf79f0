//! Test the ranking service against the real TIOBE site.
//!
//! Run with: cargo test --package tiobe-ingestion --test test_tiobe_ingestion -- --ignored --nocapture

use tiobe_common::IndexPeriod;
use tiobe_config::Config;
use tiobe_ingestion::{IndexService, Origin};

#[tokio::test]
#[ignore] // Requires network access
async fn test_current_index_is_live() {
    let service = IndexService::from_config(&Config::default()).expect("service");

    let rankings = service.rankings(None).await;
    println!("Origin: {}", rankings.origin.as_str());
    for lang in rankings.languages.iter().take(5) {
        println!("{:>2}. {:<20} {:>8} {:>8}", lang.rank, lang.name, lang.rating, lang.change);
    }

    assert_eq!(rankings.origin, Origin::Live, "live page should parse");
    assert_eq!(service.rankings(None).await.origin, Origin::Cached);
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_historical_index() {
    let service = IndexService::from_config(&Config::default()).expect("service");

    let rankings = service.rankings(Some(IndexPeriod { year: 2020, month: 1 })).await;
    println!("Origin: {}, {} rows", rankings.origin.as_str(), rankings.languages.len());

    assert!(!rankings.languages.is_empty());
}
