use approx::assert_relative_eq;
use helios_resample::{ErrorCombination, ReselConfig, bin_by_resel};
use helios_spectrum::{Segment, SpectralTable};

/// Helper: one segment of `n` pixels with a linear wavelength ramp and flat
/// count columns.
fn make_segment(n: usize, start_wvln: f64, gcounts: f64, exptime: f64) -> Segment {
    let wavelength: Vec<f64> = (0..n).map(|i| start_wvln + i as f64 * 0.01).collect();
    let flux: Vec<f64> = (0..n).map(|i| 1e-14 + i as f64 * 1e-16).collect();
    let error = vec![2e-15; n];
    let error_lower = vec![1e-15; n];
    let gross: Vec<f64> = vec![gcounts / exptime; n];
    let gcounts_col = vec![gcounts; n];
    Segment::new(
        wavelength,
        flux,
        error,
        error_lower,
        gross,
        gcounts_col,
        exptime,
    )
    .unwrap()
}

fn make_table(n: usize) -> SpectralTable {
    SpectralTable::new(vec![make_segment(n, 1400.0, 100.0, 250.0)]).unwrap()
}

#[test]
fn output_lengths_follow_floor_division() {
    let table = make_table(20);
    let config = ReselConfig::new();
    let binned = bin_by_resel(&table, &config).unwrap();
    // 20 / 6 = 3 bins, 2 trailing pixels cropped.
    assert_eq!(binned.segments()[0].len(), 3);
}

#[test]
fn exptime_passes_through_unchanged() {
    let table = make_table(18);
    let binned = bin_by_resel(&table, &ReselConfig::new()).unwrap();
    assert_relative_eq!(binned.segments()[0].exptime(), 250.0, epsilon = 1e-12);
}

#[test]
fn counts_are_sum_preserved_minus_crop() {
    let table = make_table(20);
    let binned = bin_by_resel(&table, &ReselConfig::new()).unwrap();
    let seg = &table.segments()[0];
    let binned_seg = &binned.segments()[0];

    // 18 of 20 pixels survive the crop.
    let kept_gcounts: f64 = seg.gcounts()[..18].iter().sum();
    let kept_gross: f64 = seg.gross()[..18].iter().sum();
    assert_relative_eq!(
        binned_seg.gcounts().iter().sum::<f64>(),
        kept_gcounts,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        binned_seg.gross().iter().sum::<f64>(),
        kept_gross,
        epsilon = 1e-9
    );
}

#[test]
fn wavelength_is_bin_centre_for_uniform_weights() {
    let table = make_table(12);
    let binned = bin_by_resel(&table, &ReselConfig::new()).unwrap();
    let seg = &table.segments()[0];
    let expected: f64 = seg.wavelength()[..6].iter().sum::<f64>() / 6.0;
    assert_relative_eq!(
        binned.segments()[0].wavelength()[0],
        expected,
        epsilon = 1e-9
    );
}

#[test]
fn weighted_and_unweighted_agree_for_flat_weights() {
    // Uniform gcounts/gross give identical per-pixel weights, so the
    // weighted mean collapses to the plain mean.
    let table = make_table(24);
    let weighted = bin_by_resel(&table, &ReselConfig::new().with_weighted(true)).unwrap();
    let unweighted = bin_by_resel(&table, &ReselConfig::new().with_weighted(false)).unwrap();
    for (w, u) in weighted.segments()[0]
        .flux()
        .iter()
        .zip(unweighted.segments()[0].flux())
    {
        assert_relative_eq!(w, u, epsilon = 1e-9);
    }
}

#[test]
fn mean_over_sqrt_bin_errors() {
    let table = make_table(12);
    let config = ReselConfig::new().with_error_combination(ErrorCombination::MeanOverSqrtBin);
    let binned = bin_by_resel(&table, &config).unwrap();
    // Constant error of 2e-15 over a 6-pixel bin: mean / sqrt(6).
    let expected = 2e-15 / 6.0_f64.sqrt();
    assert_relative_eq!(binned.segments()[0].error()[0], expected, epsilon = 1e-24);
    let expected_lower = 1e-15 / 6.0_f64.sqrt();
    assert_relative_eq!(
        binned.segments()[0].error_lower()[0],
        expected_lower,
        epsilon = 1e-24
    );
}

#[test]
fn quadrature_sum_errors() {
    let table = make_table(12);
    let config = ReselConfig::new().with_error_combination(ErrorCombination::QuadratureSum);
    let binned = bin_by_resel(&table, &config).unwrap();
    // Constant error of 2e-15 over a 6-pixel bin: sqrt(6 * (2e-15)^2).
    let expected = 2e-15 * 6.0_f64.sqrt();
    assert_relative_eq!(binned.segments()[0].error()[0], expected, epsilon = 1e-24);
}

#[test]
fn error_conventions_differ_by_bin_size() {
    // For constant input the two strategies differ by exactly a factor
    // of bin_size.
    let table = make_table(12);
    let mean_sqrt = bin_by_resel(
        &table,
        &ReselConfig::new().with_error_combination(ErrorCombination::MeanOverSqrtBin),
    )
    .unwrap();
    let quad = bin_by_resel(
        &table,
        &ReselConfig::new().with_error_combination(ErrorCombination::QuadratureSum),
    )
    .unwrap();
    assert_relative_eq!(
        quad.segments()[0].error()[0] / mean_sqrt.segments()[0].error()[0],
        6.0,
        epsilon = 1e-9
    );
}

#[test]
fn segment_order_preserved() {
    let table = SpectralTable::new(vec![
        make_segment(12, 1600.0, 50.0, 100.0),
        make_segment(12, 1400.0, 80.0, 100.0),
    ])
    .unwrap();
    let binned = bin_by_resel(&table, &ReselConfig::new()).unwrap();
    assert_eq!(binned.n_segments(), 2);
    assert!(binned.segments()[0].wavelength()[0] > binned.segments()[1].wavelength()[0]);
}

#[test]
fn segments_of_different_lengths() {
    let table = SpectralTable::new(vec![
        make_segment(13, 1600.0, 50.0, 100.0),
        make_segment(25, 1400.0, 80.0, 100.0),
    ])
    .unwrap();
    let binned = bin_by_resel(&table, &ReselConfig::new()).unwrap();
    assert_eq!(binned.segments()[0].len(), 2);
    assert_eq!(binned.segments()[1].len(), 4);
}

#[test]
fn all_zero_counts_bin_still_averages() {
    // gross == gcounts == 0 everywhere: each weight becomes the 1e-30
    // floor, and the weighted mean degrades to a plain mean.
    let n = 6;
    let seg = Segment::new(
        (0..n).map(|i| 1400.0 + i as f64).collect(),
        vec![3e-14; n],
        vec![1e-15; n],
        vec![1e-15; n],
        vec![0.0; n],
        vec![0.0; n],
        100.0,
    )
    .unwrap();
    let table = SpectralTable::new(vec![seg]).unwrap();
    let binned = bin_by_resel(&table, &ReselConfig::new()).unwrap();
    assert_relative_eq!(binned.segments()[0].flux()[0], 3e-14, epsilon = 1e-24);
}
