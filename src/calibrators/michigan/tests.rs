// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::{Cursor, Write};

use approx::assert_abs_diff_eq;
use hifitime::Epoch;
use indoc::indoc;

use super::*;
use crate::constants::DEFAULT_SPEC_INDEX;

// Flux density = 10 + 0.01 (MJD - 56000) - 0.2 f
const TABLE: &str = indoc! {"
    UMRAO monitoring data
    2251+158
    MJD       DATE     FREQ  UT     FLUX    SIG
    56000     2012.00   4.8  0.00   9.040  0.050
    56000     2012.00   8.0  0.00   8.400  0.050
    56000     2012.00  14.5  0.00   7.100  0.050
    56010     2012.01   4.8  0.00   9.140  0.050
    56010     2012.01   8.0  0.00   8.500  0.050
    56010     2012.01  14.5  0.00   7.200  0.050
    56020.5   2012.02   4.8 12.00   9.245  0.050
    56020.5   2012.02   8.0 12.00   8.605  0.050
    56020.5   2012.02  14.5 12.00   7.305  0.050
    56030     2012.03   8.0  0.00   8.700  0.050
    56030     2012.03   4.8  0.00   9.340  0.050
    56030     2012.03  14.5  0.00   7.400  0.050
    56040     2012.04   4.8  0.00   9.440  0.050
    56040     2012.04   8.0  0.00   8.800  0.050
    56040     2012.04  14.5  0.00   7.500  0.050
    56060     2012.06   4.8  0.00   9.640  0.050
    56060     2012.06   8.0  0.00   9.000  0.050
    56060     2012.06  14.5  0.00   7.700  0.050
    56050     2012.05   4.8  0.00   9.540  0.050
    56050     2012.05   8.0  0.00   8.900  0.050
    56050     2012.05  14.5  0.00   7.600  0.050

"};

fn table() -> MichiganTable {
    MichiganTable::parse("2251+158", &mut Cursor::new(TABLE)).unwrap()
}

#[test]
fn test_parse_table() {
    let t = table();
    assert_eq!(t.source_name, "2251+158");
    let freqs: Vec<f64> = t.series.iter().map(|s| s.freq_ghz).collect();
    assert_eq!(freqs, [4.8, 8.0, 14.5]);
    for s in &t.series {
        assert_eq!(s.times_mjd.len(), 7);
        assert_eq!(s.fluxes_jy.len(), 7);
        assert!(s.sigmas_jy.iter().all(|&sig| sig == 0.05));
        // Sorted by time, even though the table isn't.
        assert!(s.times_mjd.windows(2).all(|w| w[0] < w[1]));
    }
    // The hour column is added to the day.
    assert_abs_diff_eq!(t.series[0].times_mjd[2], 56020.5);
}

#[test]
fn test_parse_bad_tables() {
    let header = "header\nheader\nheader\n";
    let result = MichiganTable::parse("x", &mut Cursor::new(header));
    assert!(matches!(result, Err(MichiganError::NoData(_))));

    let short_row = format!("{header}56000 2012.00 4.8 0.00\n");
    let result = MichiganTable::parse("x", &mut Cursor::new(short_row));
    assert!(matches!(
        result,
        Err(MichiganError::IncompleteRow {
            line_num: 4,
            found: 4
        })
    ));

    let bad_float = format!("{header}56000 2012.00 4.8 0.00 lots 0.05\n");
    let result = MichiganTable::parse("x", &mut Cursor::new(bad_float));
    assert!(matches!(result, Err(MichiganError::ParseFloat { line_num: 4, .. })));

    // A short row after some measurements ends the table.
    let trailer = format!("{header}56000 2012.00 4.8 0.00 1.0 0.05\nend of data\n");
    let t = MichiganTable::parse("x", &mut Cursor::new(trailer)).unwrap();
    assert_eq!(t.series.len(), 1);
}

#[test]
fn test_frequencies_written_differently() {
    let table = indoc! {"
        UMRAO monitoring data
        0316+413
        MJD       DATE     FREQ  UT     FLUX    SIG
        56000     2012.00   4.8  0.00  20.000  0.050
        56000     2012.00  8.00  0.00  16.000  0.050
        56010     2012.01  4.80  0.00  20.000  0.050
        56010     2012.01   8.0  0.00  16.000  0.050
    "};
    let t = MichiganTable::parse("0316+413", &mut Cursor::new(table)).unwrap();
    let freqs: Vec<f64> = t.series.iter().map(|s| s.freq_ghz).collect();
    assert_eq!(freqs, [4.8, 8.0]);
    assert!(t.series.iter().all(|s| s.times_mjd.len() == 2));
    assert_eq!(t.freq_range(), (4.8, 8.0));

    let epoch = Epoch::from_mjd_utc(56005.0);
    assert_abs_diff_eq!(t.flux_at(epoch, 8.0), 16.0, epsilon = 1e-9);
    // Outside of the monitoring, spectral indices are used.
    let spec_index = (16.0_f64 / 20.0).ln() / (8.0_f64 / 4.8).ln();
    assert_abs_diff_eq!(
        t.flux_at(epoch, 16.0),
        16.0 * 2_f64.powf(spec_index),
        epsilon = 1e-9
    );
    assert!(t.covers(4.8));
    assert!(!t.covers(16.0));
}

#[test]
fn test_interpolate_in_time_and_frequency() {
    let t = table();
    assert_abs_diff_eq!(t.series[1].flux_at(56045.0), 8.85, epsilon = 1e-9);

    let epoch = Epoch::from_mjd_utc(56045.0);
    assert_abs_diff_eq!(t.flux_at(epoch, 10.0), 8.45, epsilon = 1e-6);
    assert_abs_diff_eq!(t.flux_at(epoch, 8.0), 8.85, epsilon = 1e-6);
}

#[test]
fn test_extrapolate_in_time() {
    let t = table();
    // Forwards and backwards.
    assert_abs_diff_eq!(
        t.flux_at(Epoch::from_mjd_utc(56100.0), 10.0),
        9.0,
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(
        t.flux_at(Epoch::from_mjd_utc(55980.0), 10.0),
        7.8,
        epsilon = 1e-6
    );
}

#[test]
fn test_local_fits() {
    // A step in flux density; fits only use nearby measurements.
    let times: Vec<f64> = (0..21).map(f64::from).collect();
    let fluxes: Vec<f64> = times.iter().map(|&t| if t < 10.0 { 1.0 } else { 5.0 }).collect();
    let s = MonitoringSeries {
        freq_ghz: 8.0,
        sigmas_jy: vec![0.1; times.len()],
        times_mjd: times,
        fluxes_jy: fluxes,
    };
    assert_abs_diff_eq!(s.flux_at(2.0), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(s.flux_at(18.0), 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(s.flux_at(25.0), 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(s.flux_at(-3.0), 1.0, epsilon = 1e-12);

    let single = MonitoringSeries {
        freq_ghz: 8.0,
        times_mjd: vec![5.0],
        fluxes_jy: vec![2.5],
        sigmas_jy: vec![0.1],
    };
    assert_abs_diff_eq!(single.flux_at(100.0), 2.5);
}

#[test]
fn test_single_frequency_uses_spectral_index() {
    let t = MichiganTable {
        source_name: "0316+413".to_string(),
        series: vec![MonitoringSeries {
            freq_ghz: 8.0,
            times_mjd: vec![56000.0, 56010.0],
            fluxes_jy: vec![20.0, 20.0],
            sigmas_jy: vec![0.1, 0.1],
        }],
    };
    let epoch = Epoch::from_mjd_utc(56005.0);
    assert_abs_diff_eq!(
        t.flux_at(epoch, 16.0),
        20.0 * 2_f64.powf(DEFAULT_SPEC_INDEX),
        epsilon = 1e-9
    );
}

#[test]
fn test_catalogue_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut f = std::fs::File::create(dir.path().join("2251+158.txt")).unwrap();
    f.write_all(TABLE.as_bytes()).unwrap();
    let mut f = std::fs::File::create(dir.path().join("broken.txt")).unwrap();
    f.write_all(b"nothing\nto\nsee\n").unwrap();
    drop(f);

    let cat = MichiganCatalogue::read_dir(dir.path()).unwrap();
    assert_eq!(cat.len(), 1);
    assert!(cat.get("2251+158").is_some());
    assert!(cat.get("B2251+158").is_some());
    assert!(cat.get("b2251+158").is_some());
    assert!(cat.get("0316+413").is_none());
}
