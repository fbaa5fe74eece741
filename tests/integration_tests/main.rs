// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod antenna_temp;
mod calibrator_flux;
mod no_stderr;
mod utilities;

use std::{path::PathBuf, process::Output, str::from_utf8};

use assert_cmd::{output::OutputError, Command};

/// Venus was transiting the Sun at this time.
const VENUS_TRANSIT: &str = "2012-06-06T01:00:00 UTC";

fn radio_astronomy() -> Command {
    let mut cmd = Command::cargo_bin("radio-astronomy").unwrap();
    cmd.env_remove("RADIO_ASTRONOMY_CAL_DIR").env_remove("RUST_LOG");
    cmd
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

/// The calibrator directory inside the repo: a small excerpt of the VLA
/// calibrator manual and a Michigan table for 3C48.
fn get_cal_dir() -> PathBuf {
    let cal_dir = PathBuf::from("test_files/calibrators")
        .canonicalize()
        .unwrap();
    assert!(
        cal_dir.join("csource.txt").exists(),
        "Could not find {}/csource.txt, which is required for this test",
        cal_dir.display()
    );
    cal_dir
}

/// Get the number after `label` on the first line of stdout that has it.
fn get_value(stdout: &str, label: &str) -> f64 {
    let line = stdout
        .lines()
        .find(|l| l.contains(label))
        .unwrap_or_else(|| panic!("'{label}' not in output:\n{stdout}"));
    let rest = &line[line.find(label).unwrap() + label.len()..];
    rest.split_whitespace().next().unwrap().parse().unwrap()
}
