// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use crate::{get_cmd_output, get_value, radio_astronomy, VENUS_TRANSIT};

#[test]
fn test_venus_with_a_34m_dish() {
    #[rustfmt::skip]
    let cmd = radio_astronomy()
        .args([
            "antenna-temp",
            "--source", "Venus",
            "--freq", "8.4GHz",
            "--efficiency", "0.7",
            "--diameter", "34",
            "--epoch", VENUS_TRANSIT,
        ])
        .ok();
    assert!(cmd.is_ok(), "antenna-temp failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);

    let gain = get_value(&stdout, "Gain:");
    assert_abs_diff_eq!(gain, 0.2302, epsilon = 1e-3);
    let t_a = get_value(&stdout, "Antenna temperature:");
    assert!((15.0..25.0).contains(&t_a), "{t_a}");
}

#[test]
fn test_wavelength_and_area_are_accepted() {
    #[rustfmt::skip]
    let cmd = radio_astronomy()
        .args([
            "antenna-temp",
            "-s", "Jupiter",
            "-f", "3.6cm",
            "-e", "0.6",
            "-a", "100",
            "-t", "56084",
        ])
        .ok();
    assert!(cmd.is_ok(), "antenna-temp failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(get_value(&stdout, "Antenna temperature:") > 0.0);
}

#[test]
fn test_missing_arguments() {
    let cmd = radio_astronomy()
        .args(["antenna-temp", "-s", "Venus", "-f", "8.4", "-e", "0.7"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("collecting area"), "{stderr}");

    let cmd = radio_astronomy()
        .args(["antenna-temp", "-s", "Venus", "-f", "8.4", "-e", "1.7", "-d", "34", "-t", "56084"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("efficiency"), "{stderr}");
}

#[test]
fn test_arguments_file_and_save_toml() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let args_file = tmp_dir.path().join("args.toml");
    let mut f = std::fs::File::create(&args_file).unwrap();
    writeln!(
        f,
        r#"
source = "Venus"
freq = "8.4"
efficiency = 0.5
diameter = 34.0

[calibrators]
epoch = "{VENUS_TRANSIT}"
"#
    )
    .unwrap();
    drop(f);

    // The CLI efficiency overrides the file's.
    let saved = tmp_dir.path().join("saved.toml");
    #[rustfmt::skip]
    let cmd = radio_astronomy()
        .args([
            "antenna-temp",
            &args_file.display().to_string(),
            "--efficiency", "0.7",
            "--save-toml", &saved.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "antenna-temp failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    let t_a = get_value(&stdout, "Antenna temperature:");
    assert!((15.0..25.0).contains(&t_a), "{t_a}");

    // The saved arguments reproduce the run.
    let contents = std::fs::read_to_string(&saved).unwrap();
    assert!(contents.contains("efficiency = 0.7"), "{contents}");
    let cmd = radio_astronomy()
        .args(["antenna-temp", &saved.display().to_string()])
        .ok();
    assert!(cmd.is_ok(), "antenna-temp failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert_abs_diff_eq!(
        get_value(&stdout, "Antenna temperature:"),
        t_a,
        epsilon = 1e-4
    );
}

#[test]
fn test_dry_run() {
    #[rustfmt::skip]
    let cmd = radio_astronomy()
        .args([
            "antenna-temp", "--dry-run",
            "-s", "Venus", "-f", "8.4", "-e", "0.7", "-d", "34", "-t", "56084",
        ])
        .ok();
    assert!(cmd.is_ok(), "antenna-temp failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Gain:"));
    assert!(!stdout.contains("Antenna temperature:"));
}
