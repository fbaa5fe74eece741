// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use approx::assert_abs_diff_eq;
use serde_json::Value;
use tempfile::TempDir;

use crate::{get_cal_dir, get_cmd_output, radio_astronomy, VENUS_TRANSIT};

#[test]
fn test_bodies_and_radio_stars() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("fluxes.json");
    #[rustfmt::skip]
    let cmd = radio_astronomy()
        .args([
            "calibrator-flux",
            "--sources", "Venus", "Jupiter", "Virgo A",
            "--freqs", "8.4", "32GHz",
            "--epoch", VENUS_TRANSIT,
            "--output", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "calibrator-flux failed: {}", cmd.err().unwrap());

    let json: Value = serde_json::from_reader(std::fs::File::open(&output).unwrap()).unwrap();
    let fluxes = json.as_array().unwrap();
    assert_eq!(fluxes.len(), 6);
    assert_eq!(fluxes[0]["name"], "Venus");
    assert_eq!(fluxes[0]["origin"], "Planet");
    assert_abs_diff_eq!(fluxes[0]["freq_ghz"].as_f64().unwrap(), 8.4);
    assert_eq!(fluxes[5]["name"], "Virgo");
    assert_eq!(fluxes[5]["origin"], "RadioStar");
    assert_abs_diff_eq!(fluxes[5]["freq_ghz"].as_f64().unwrap(), 32.0);
    for f in fluxes {
        assert!(f["flux_jy"].as_f64().unwrap() > 0.0, "{f}");
    }
}

#[test]
fn test_catalogues() {
    let cal_dir = get_cal_dir();
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("fluxes.yaml");
    #[rustfmt::skip]
    let cmd = radio_astronomy()
        .args([
            "calibrator-flux",
            "-s", "3C286", "3C48", "J0137-245",
            "-f", "8.4",
            "-t", VENUS_TRANSIT,
            "--cal-dir", &cal_dir.display().to_string(),
            "-o", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "calibrator-flux failed: {}", cmd.err().unwrap());

    let yaml: serde_yaml::Value =
        serde_yaml::from_reader(std::fs::File::open(&output).unwrap()).unwrap();
    let fluxes = yaml.as_sequence().unwrap();
    assert_eq!(fluxes.len(), 3);
    assert_eq!(fluxes[0]["name"].as_str(), Some("1331+305"));
    assert_eq!(fluxes[0]["origin"].as_str(), Some("Vla"));
    assert_abs_diff_eq!(
        fluxes[0]["flux_jy"].as_f64().unwrap(),
        5.102108768305416,
        epsilon = 1e-9
    );
    // 3C48 has monitoring data.
    assert_eq!(fluxes[1]["origin"].as_str(), Some("Michigan"));
    assert_eq!(fluxes[2]["name"].as_str(), Some("0137-245"));
}

#[test]
fn test_cal_dir_from_the_environment() {
    #[rustfmt::skip]
    let cmd = radio_astronomy()
        .env("RADIO_ASTRONOMY_CAL_DIR", get_cal_dir())
        .args([
            "calibrator-flux",
            "-s", "3C286",
            "-f", "8.4",
            "-t", VENUS_TRANSIT,
            "--interpolation", "linear-fit",
        ])
        .ok();
    assert!(cmd.is_ok(), "calibrator-flux failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("10.8696 Jy"), "{stdout}");
}

#[test]
fn test_unknown_calibrator() {
    let cmd = radio_astronomy()
        .args(["calibrator-flux", "-s", "3C286", "-f", "8.4", "-t", "now"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Unknown calibrator '3C286'"), "{stderr}");

    let cmd = radio_astronomy()
        .args(["calibrator-flux", "-s", "Moon", "-f", "8.4", "-t", "now"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No ephemeris"), "{stderr}");
}

#[test]
fn test_json_arguments_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let args_file = tmp_dir.path().join("args.json");
    let mut f = std::fs::File::create(&args_file).unwrap();
    write!(
        f,
        r#"{{"sources": ["Saturn"], "freqs": ["15"], "calibrators": {{"epoch": "56084"}}}}"#
    )
    .unwrap();
    drop(f);

    let cmd = radio_astronomy()
        .args(["calibrator-flux", &args_file.display().to_string()])
        .ok();
    assert!(cmd.is_ok(), "calibrator-flux failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Saturn (Saturn, Planet)"), "{stdout}");

    let bad_file = tmp_dir.path().join("args.txt");
    std::fs::File::create(&bad_file).unwrap();
    let cmd = radio_astronomy()
        .args(["calibrator-flux", &bad_file.display().to_string()])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("recognised file extension"), "{stderr}");
}
