//! End-to-end screening passes over preset and offline-generated history.

use pennyscan_core::{screen, Period, ScreenerCriteria, Symbol, YahooHistory};
use pennyscan_tests::{bar_at, series_from, StaticHistory};

fn symbols(names: &[&str]) -> Vec<Symbol> {
    names
        .iter()
        .map(|name| Symbol::parse(name).expect("symbol"))
        .collect()
}

#[tokio::test]
async fn worked_example_produces_expected_metrics() {
    // 14 flat closes at $1 then a current bar opening at 1.50 and closing
    // at 2.00 on 1M volume against a 500k trailing mean.
    let mut bars: Vec<_> = (0..12).map(|i| bar_at(i, 1.0, 1.0, 500_000)).collect();
    bars.push(bar_at(12, 1.0, 1.0, 250_000));
    bars.push(bar_at(13, 1.0, 1.0, 250_000));
    bars.push(bar_at(14, 1.5, 2.0, 1_000_000));

    let source = StaticHistory::new().with_series(series_from("X", bars));
    let criteria = ScreenerCriteria::new(
        symbols(&["X"]),
        Period::OneYear,
        2.0,
        1_000_000,
        100.0,
    )
    .expect("criteria");

    let report = screen(&source, &criteria).await;

    assert_eq!(report.results.len(), 1);
    let row = &report.results[0];
    assert_eq!(row.symbol.as_str(), "X");
    assert_eq!(row.price, 2.0);
    assert_eq!(row.volume, 1_000_000);
    assert!((row.relative_volume - 2.0).abs() < 1e-9);
    assert!((row.change_pct - 33.33).abs() < 0.01);
    assert!(row.rsi <= 100.0);
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn worked_example_is_excluded_once_any_threshold_tightens() {
    let mut bars: Vec<_> = (0..14).map(|i| bar_at(i, 1.0, 1.0, 500_000)).collect();
    bars.push(bar_at(14, 1.5, 2.0, 1_000_000));

    let source = StaticHistory::new().with_series(series_from("X", bars));
    let criteria = ScreenerCriteria::new(
        symbols(&["X"]),
        Period::OneYear,
        1.99, // just below the last close
        1_000_000,
        100.0,
    )
    .expect("criteria");

    let report = screen(&source, &criteria).await;
    assert!(report.results.is_empty());
}

#[tokio::test]
async fn offline_yahoo_source_screens_full_watchlist() {
    // Offline series are penny-priced and period-sized, so open thresholds
    // pass every ticker deterministically.
    let source = YahooHistory::default();
    let criteria = ScreenerCriteria::new(
        symbols(&["SNDL", "NOK", "ZOM"]),
        Period::ThreeMonths,
        6.0,
        0,
        100.0,
    )
    .expect("criteria");

    let report = screen(&source, &criteria).await;

    assert_eq!(report.results.len(), 3);
    assert!(report.warnings.is_empty());
    for row in &report.results {
        assert!(row.price > 0.0 && row.price <= 6.0);
        assert!((0.0..=100.0).contains(&row.rsi));
        assert!(row.relative_volume > 0.0);
    }

    let order: Vec<&str> = report
        .results
        .iter()
        .map(|row| row.symbol.as_str())
        .collect();
    assert_eq!(order, vec!["SNDL", "NOK", "ZOM"]);
}
