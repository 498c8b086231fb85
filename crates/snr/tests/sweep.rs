use approx::assert_relative_eq;
use helios_snr::{SnrError, SnrRange, snr_binsize_sweep};
use helios_spectrum::{Segment, SpectralTable};

fn make_table(n: usize) -> SpectralTable {
    let wavelength: Vec<f64> = (0..n).map(|i| 1400.0 + i as f64).collect();
    let seg = Segment::new(
        wavelength,
        vec![2e-14; n],
        vec![1e-15; n],
        vec![5e-16; n],
        vec![1.0; n],
        vec![100.0; n],
        100.0,
    )
    .unwrap();
    SpectralTable::new(vec![seg]).unwrap()
}

#[test]
fn sweep_has_one_row_per_bin_size() {
    let table = make_table(200);
    let window = SnrRange::window(1450.0, 1470.0);
    let points = snr_binsize_sweep(&table, window, 10, false).unwrap();
    assert_eq!(points.len(), 10);
    for (i, p) in points.iter().enumerate() {
        assert_eq!(p.bin_size, i + 1);
    }
}

#[test]
fn baseline_matches_unbinned_estimate() {
    let table = make_table(200);
    let window = SnrRange::window(1450.0, 1470.0);
    let points = snr_binsize_sweep(&table, window, 4, false).unwrap();
    // Unbinned: sqrt(100) = 10; flux/error = 20; flux/error_lower = 40.
    assert_relative_eq!(points[0].counts_snr.unwrap(), 10.0, epsilon = 1e-12);
    assert_relative_eq!(points[0].flux_error_snr.unwrap(), 20.0, epsilon = 1e-9);
    assert_relative_eq!(
        points[0].flux_error_lower_snr.unwrap(),
        40.0,
        epsilon = 1e-9
    );
}

#[test]
fn counts_snr_grows_as_sqrt_bin_size() {
    let table = make_table(600);
    let window = SnrRange::window(1500.0, 1560.0);
    let points = snr_binsize_sweep(&table, window, 9, false).unwrap();
    // Flat 100 counts per pixel: binning by B gives sqrt(100 * B).
    for p in &points {
        let expected = (100.0 * p.bin_size as f64).sqrt();
        assert_relative_eq!(p.counts_snr.unwrap(), expected, epsilon = 1e-9);
    }
}

#[test]
fn oversized_bins_record_empty_points() {
    // 20-pixel table: bin sizes above 20 cannot form a single bin.
    let table = make_table(20);
    let window = SnrRange::window(1405.0, 1412.0);
    let points = snr_binsize_sweep(&table, window, 25, false).unwrap();
    assert_eq!(points.len(), 25);
    let last = &points[24];
    assert_eq!(last.bin_size, 25);
    assert!(last.counts_snr.is_none());
    assert!(last.flux_error_snr.is_none());
    assert!(last.flux_error_lower_snr.is_none());
}

#[test]
fn window_lost_to_binning_records_none_counts_snr() {
    // A narrow window near the segment edge stops being strictly contained
    // once binning pulls the first bin centre past it.
    let table = make_table(60);
    let window = SnrRange::window(1400.5, 1404.0);
    let points = snr_binsize_sweep(&table, window, 10, false).unwrap();
    assert!(points[0].counts_snr.is_some());
    assert!(points.last().unwrap().counts_snr.is_none());
}

#[test]
fn error_max_bin_below_two() {
    let table = make_table(60);
    let window = SnrRange::window(1410.0, 1420.0);
    let result = snr_binsize_sweep(&table, window, 1, false);
    assert!(matches!(result, Err(SnrError::InvalidConfig { .. })));
}

#[test]
fn error_full_range() {
    let table = make_table(60);
    let result = snr_binsize_sweep(&table, SnrRange::Full, 10, false);
    assert!(matches!(result, Err(SnrError::InvalidConfig { .. })));
}

#[test]
fn sweep_points_serialize() {
    let table = make_table(100);
    let window = SnrRange::window(1420.0, 1440.0);
    let points = snr_binsize_sweep(&table, window, 3, true).unwrap();
    let json = serde_json::to_string(&points).unwrap();
    assert!(json.contains("\"bin_size\":1"));
    assert!(json.contains("\"counts_snr\""));
}
