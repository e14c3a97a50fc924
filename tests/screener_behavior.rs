//! Behavior of the screening pass: skip policy, AND-filtering, ordering.

use pennyscan_core::{screen, Period, ScreenerCriteria, Symbol};
use pennyscan_tests::{flat_series, StaticHistory};

fn symbols(names: &[&str]) -> Vec<Symbol> {
    names
        .iter()
        .map(|name| Symbol::parse(name).expect("symbol"))
        .collect()
}

/// 20 flat bars at $2.00 with 1M volume: rsi 50, relvol 1, change 0.
fn qualifying_series(symbol: &str) -> pennyscan_core::BarSeries {
    flat_series(symbol, &[2.0; 20], &[1_000_000; 20])
}

fn base_criteria(names: &[&str]) -> ScreenerCriteria {
    ScreenerCriteria::new(symbols(names), Period::OneYear, 5.0, 500_000, 70.0)
        .expect("criteria")
}

#[tokio::test]
async fn short_history_ticker_never_appears_even_with_open_thresholds() {
    let source = StaticHistory::new()
        .with_series(flat_series("STUB", &[0.5; 14], &[9_000_000; 14]));
    let criteria = ScreenerCriteria::new(
        symbols(&["STUB"]),
        Period::OneYear,
        1_000_000.0,
        0,
        100.0,
    )
    .expect("criteria");

    let report = screen(&source, &criteria).await;

    assert!(report.results.is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("insufficient history"));
}

#[tokio::test]
async fn qualifying_ticker_passes_all_three_thresholds() {
    let source = StaticHistory::new().with_series(qualifying_series("AMC"));

    let report = screen(&source, &base_criteria(&["AMC"])).await;

    assert_eq!(report.results.len(), 1);
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn price_above_max_price_excludes_even_when_volume_and_rsi_qualify() {
    let source = StaticHistory::new().with_series(qualifying_series("AMC"));
    let criteria =
        ScreenerCriteria::new(symbols(&["AMC"]), Period::OneYear, 1.0, 500_000, 70.0)
            .expect("criteria");

    let report = screen(&source, &criteria).await;
    assert!(report.results.is_empty());
}

#[tokio::test]
async fn volume_below_min_volume_excludes_even_when_price_and_rsi_qualify() {
    let source = StaticHistory::new().with_series(qualifying_series("AMC"));
    let criteria =
        ScreenerCriteria::new(symbols(&["AMC"]), Period::OneYear, 5.0, 2_000_000, 70.0)
            .expect("criteria");

    let report = screen(&source, &criteria).await;
    assert!(report.results.is_empty());
}

#[tokio::test]
async fn rsi_above_max_rsi_excludes_even_when_price_and_volume_qualify() {
    // Flat series scores rsi 50; a 10 cap must exclude it.
    let source = StaticHistory::new().with_series(qualifying_series("AMC"));
    let criteria =
        ScreenerCriteria::new(symbols(&["AMC"]), Period::OneYear, 5.0, 500_000, 10.0)
            .expect("criteria");

    let report = screen(&source, &criteria).await;
    assert!(report.results.is_empty());
}

#[tokio::test]
async fn results_preserve_input_symbol_order() {
    let source = StaticHistory::new()
        .with_series(qualifying_series("ZOM"))
        .with_series(qualifying_series("AMC"))
        .with_series(qualifying_series("NOK"));

    let report = screen(&source, &base_criteria(&["ZOM", "AMC", "NOK"])).await;

    let order: Vec<&str> = report
        .results
        .iter()
        .map(|row| row.symbol.as_str())
        .collect();
    assert_eq!(order, vec!["ZOM", "AMC", "NOK"]);
}

#[tokio::test]
async fn only_ticker_with_enough_history_can_appear() {
    let source = StaticHistory::new()
        .with_series(flat_series("TEN", &[2.0; 10], &[1_000_000; 10]))
        .with_series(flat_series("TWENTY", &[2.0; 20], &[1_000_000; 20]));

    let report = screen(&source, &base_criteria(&["TEN", "TWENTY"])).await;

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].symbol.as_str(), "TWENTY");
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].starts_with("TEN:"));
}

#[tokio::test]
async fn failing_fetch_skips_ticker_and_continues_pass() {
    // "GONE" has no entry, so the source errors for it.
    let source = StaticHistory::new().with_series(qualifying_series("AMC"));

    let report = screen(&source, &base_criteria(&["GONE", "AMC"])).await;

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].symbol.as_str(), "AMC");
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("GONE: skipped"));
}
