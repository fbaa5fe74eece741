// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use crate::{get_cal_dir, get_cmd_output, radio_astronomy, VENUS_TRANSIT};

#[test]
fn test_antenna_temp_no_stderr() {
    #[rustfmt::skip]
    let cmd = radio_astronomy()
        .args([
            "antenna-temp",
            "-s", "Venus", "-f", "8.4", "-e", "0.7", "-d", "34",
            "-t", VENUS_TRANSIT,
            "-vv",
        ])
        .ok();
    assert!(cmd.is_ok(), "antenna-temp failed: {}", cmd.err().unwrap());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_calibrator_flux_no_stderr() {
    #[rustfmt::skip]
    let cmd = radio_astronomy()
        .args([
            "calibrator-flux",
            "-s", "3C286", "3C48", "Mars",
            "-f", "1.4", "43",
            "-t", VENUS_TRANSIT,
            "--cal-dir", &get_cal_dir().display().to_string(),
            "-vvv",
        ])
        .ok();
    assert!(cmd.is_ok(), "calibrator-flux failed: {}", cmd.err().unwrap());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}
