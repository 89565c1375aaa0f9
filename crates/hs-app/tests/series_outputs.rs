//! Integration test: the single-condition time series end to end.

use hs_app::{SeriesConfig, run_series};
use hs_sim::Termination;

#[test]
fn default_series_settles_and_writes_minute_rows() {
    let mut out = Vec::new();
    let report = run_series(&SeriesConfig::default(), &mut out).expect("series should run");

    println!(
        "series: {} steps, terminal core = {} C, skin = {} C",
        report.steps, report.terminal_core_c, report.terminal_skin_c
    );

    assert_eq!(report.termination, Termination::Equilibrium);
    // Saturated 35 C air warms the skin toward the core without ever
    // pushing the core to the limit
    assert!(report.terminal_core_c > 36.0 && report.terminal_core_c < 37.0);
    assert!(report.terminal_skin_c > 31.3);
    assert!(report.terminal_skin_c < report.terminal_core_c);

    let text = String::from_utf8(out).expect("series output is utf-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0].split_whitespace().collect::<Vec<_>>(),
        vec!["time(min)", "Tc", "Ts"]
    );
    // One row per sampled minute, starting at minute zero
    assert_eq!(lines.len(), (report.steps - 1) / 600 + 2);
    for (i, line) in lines[1..].iter().enumerate() {
        let cells: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(cells.len(), 3, "row {i}");
        let minute: f64 = cells[0].parse().expect("numeric minute");
        assert_eq!(minute, i as f64);
    }
}

#[test]
fn series_skin_warms_in_saturated_air() {
    let mut out = Vec::new();
    run_series(&SeriesConfig::default(), &mut out).expect("series should run");

    let text = String::from_utf8(out).expect("series output is utf-8");
    let skin: Vec<f64> = text
        .lines()
        .skip(1)
        .map(|line| {
            line.split_whitespace()
                .nth(2)
                .expect("Ts column")
                .parse()
                .expect("numeric Ts")
        })
        .collect();

    assert!(skin.len() >= 2, "expected multiple sampled minutes");
    // The first sample sits one step past the 31.3 C starting point
    assert!((skin[0] - 31.3).abs() < 0.01, "skin[0] = {}", skin[0]);
    let last = *skin.last().expect("at least one row");
    assert!(
        last > 34.0,
        "skin should approach the saturated air temperature, got {last}"
    );
}
