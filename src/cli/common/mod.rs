// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common arguments for command-line interfaces. e.g. the `antenna-temp` and
//! `calibrator-flux` subcommands both look up calibrators at an epoch, so the
//! same calibrator arguments are shared between them.

mod printers;

pub(super) use printers::InfoPrinter;
pub(crate) use printers::{display_warnings, Warn};

use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use hifitime::Epoch;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::RadioAstronomyError;
use crate::{calibrators::CalibratorCatalogue, flux_density::FluxInterpolation};

/// The environment variable that may hold the calibrator data directory.
pub(super) const CAL_DIR_ENV: &str = "RADIO_ASTRONOMY_CAL_DIR";

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    pub(super) static ref CAL_DIR_HELP: String =
        format!("A directory containing calibrator catalogues: a VLA calibrator list (one of {}) and/or a 'michigan' directory of UMRAO monitoring tables. Without it, only solar-system bodies and radio stars are available. Can also be set with {CAL_DIR_ENV}",
                crate::calibrators::VLA_CATALOGUE_FILES.join(", "));

    pub(super) static ref INTERPOLATION_HELP: String =
        format!("How VLA flux densities are interpolated to the requested frequency. Supported methods: {}. Default: {}",
                FluxInterpolation::iter().join(", "), FluxInterpolation::default());
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(RadioAstronomyError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(RadioAstronomyError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            _ => {
                return Err(RadioAstronomyError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}

/// Parse a user-supplied time. "now" is the current time, a plain number is
/// an MJD (UTC), and anything else is handed to hifitime, e.g.
/// "2012-06-06T01:00:00 UTC" or "JD 2456084.5".
pub(super) fn parse_epoch(s: &str) -> Result<Epoch, RadioAstronomyError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("now") {
        return Epoch::now()
            .map_err(|e| RadioAstronomyError::Epoch(format!("Couldn't get the current time: {e}")));
    }
    if let Ok(mjd) = s.parse::<f64>() {
        return Ok(Epoch::from_mjd_utc(mjd));
    }
    Epoch::from_str(s)
        .map_err(|e| RadioAstronomyError::Epoch(format!("Couldn't parse '{s}' as a time: {e}")))
}

/// Arguments for looking up calibrators.
#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct CalibratorArgs {
    #[clap(long, env = CAL_DIR_ENV, help = CAL_DIR_HELP.as_str(), help_heading = "CALIBRATORS")]
    pub(super) cal_dir: Option<PathBuf>,

    /// The time at which to evaluate flux densities. May be "now", an MJD
    /// (UTC) or a date like "2012-06-06T01:00:00 UTC". Default: now
    #[clap(short = 't', long, help_heading = "CALIBRATORS")]
    pub(super) epoch: Option<String>,

    #[clap(long, help = INTERPOLATION_HELP.as_str(), help_heading = "CALIBRATORS")]
    pub(super) interpolation: Option<String>,
}

impl CalibratorArgs {
    pub(super) fn merge(self, other: Self) -> Self {
        Self {
            cal_dir: self.cal_dir.or(other.cal_dir),
            epoch: self.epoch.or(other.epoch),
            interpolation: self.interpolation.or(other.interpolation),
        }
    }

    pub(super) fn parse(self) -> Result<(CalibratorCatalogue, Epoch), RadioAstronomyError> {
        let Self {
            cal_dir,
            epoch,
            interpolation,
        } = self;

        let epoch = parse_epoch(epoch.as_deref().unwrap_or("now"))?;
        let interpolation = match interpolation {
            Some(s) => FluxInterpolation::from_str(&s.to_lowercase()).map_err(|_| {
                RadioAstronomyError::Generic(format!(
                    "Unrecognised interpolation method '{s}'. Supported methods: {}",
                    FluxInterpolation::iter().join(", ")
                ))
            })?,
            None => FluxInterpolation::default(),
        };

        let catalogue = match cal_dir {
            Some(dir) => {
                if !dir.is_dir() {
                    return Err(RadioAstronomyError::Generic(format!(
                        "Calibrator directory '{}' doesn't exist",
                        dir.display()
                    )));
                }
                debug!("Loading calibrator catalogues from {}", dir.display());
                let cat = CalibratorCatalogue::from_dir(&dir)?;
                if cat.vla.is_none() && cat.michigan.is_none() {
                    format!(
                        "No calibrator catalogues were found in '{}'; only solar-system bodies and radio stars are available",
                        dir.display()
                    )
                    .warn();
                }
                cat
            }
            None => CalibratorCatalogue::new(),
        };

        Ok((catalogue.with_interpolation(interpolation), epoch))
    }
}
