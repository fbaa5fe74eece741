// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests of the smaller subcommands.

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use crate::{get_cal_dir, get_cmd_output, get_value, radio_astronomy, VENUS_TRANSIT};

#[test]
fn test_band() {
    let cmd = radio_astronomy()
        .args(["band", "X", "ku", "8.4GHz", "3.6cm", "500MHz"])
        .ok();
    assert!(cmd.is_ok(), "band failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("X band (8-12 GHz, nominally 8.45 GHz)"), "{stdout}");
    assert!(stdout.contains("Ku band (12-18 GHz, nominally 15 GHz)"), "{stdout}");
    assert!(stdout.contains("8.4 GHz is in X band"), "{stdout}");
    assert!(stdout.contains("0.5 GHz isn't in a named band"), "{stdout}");

    let cmd = radio_astronomy().args(["band", "Z"]).ok();
    assert!(cmd.is_err());
}

#[test]
fn test_planet() {
    #[rustfmt::skip]
    let cmd = radio_astronomy()
        .args(["planet", "venus", "-t", VENUS_TRANSIT, "-f", "8.4", "100"])
        .ok();
    assert!(cmd.is_ok(), "planet failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert_abs_diff_eq!(
        get_value(&stdout, "Distance from Earth:"),
        0.2887,
        epsilon = 0.005
    );
    assert!(get_value(&stdout, "Illuminated fraction:") < 1e-3);
    assert!(stdout.contains("Tb = 351.00 ± 5.0 K [model]"), "{stdout}");

    let cmd = radio_astronomy().args(["planet", "Vulcan"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("isn't a solar-system body"), "{stderr}");
}

#[test]
fn test_galactic_bg() {
    #[rustfmt::skip]
    let cmd = radio_astronomy()
        .args([
            "galactic-bg", "100MHz", "0.3",
            "--bandwidth", "1e6",
            "--integration-time", "10",
        ])
        .ok();
    assert!(cmd.is_ok(), "galactic-bg failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("100 MHz: I = "), "{stdout}");
    assert!(stdout.contains("300 MHz: I = "), "{stdout}");
    assert!(stdout.contains("kTB = "), "{stdout}");
    assert!(stdout.contains("ΔT = "), "{stdout}");
}

#[test]
fn test_catalogue_convert() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let listing = get_cal_dir().join("csource.txt");
    let json = tmp_dir.path().join("vla_calibrators.json");

    let cmd = radio_astronomy()
        .args([
            "catalogue-convert",
            &listing.display().to_string(),
            &json.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "catalogue-convert failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("3 sources"), "{stdout}");
    assert!(stdout.contains("2 with 3C names"), "{stdout}");
    assert!(json.exists());

    // The converted catalogue is found in a calibrator directory.
    #[rustfmt::skip]
    let cmd = radio_astronomy()
        .args([
            "calibrator-flux",
            "-s", "3C48",
            "-f", "1.4GHz",
            "-t", VENUS_TRANSIT,
            "--cal-dir", &tmp_dir.path().display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "calibrator-flux failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("3C48 (0137+331, VLA)"), "{stdout}");

    // Writing the listing format isn't possible.
    let txt = tmp_dir.path().join("out.txt");
    let cmd = radio_astronomy()
        .args([
            "catalogue-convert",
            &json.display().to_string(),
            &txt.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_err());
}
