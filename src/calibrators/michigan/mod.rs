// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Flux densities from the University of Michigan Radio Astronomy Observatory
//! (UMRAO) monitoring database.
//!
//! Each monitored source has a table of measurements keyed by its B1950 name.
//! After three header lines, every row is
//!
//! ```text
//! MJD  DATE  FREQ_GHZ  HOUR_UT  FLUX_JY  SIGMA_JY
//! ```
//!
//! Variable sources need their flux densities estimated at an epoch; this is
//! done with local straight-line fits in time at each monitoring frequency,
//! then a straight-line fit across the frequencies.

#[cfg(test)]
mod tests;

use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use hifitime::Epoch;
use indexmap::IndexMap;
use log::{debug, trace, warn};

use super::MichiganError;
use crate::{
    constants::MONITORING_FIT_HALF_WIDTH,
    flux_density::{FluxDensity, FluxDensityModel},
    math::{linear_fit, nearest_index},
};

/// The number of lines before the measurements in a table.
const NUM_HEADER_LINES: u32 = 3;

/// All monitoring measurements of a source at one frequency, sorted by time.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitoringSeries {
    /// \[GHz\]
    pub freq_ghz: f64,

    /// Times of the measurements \[MJD, UTC\]
    pub times_mjd: Vec<f64>,

    /// \[Jy\]
    pub fluxes_jy: Vec<f64>,

    /// \[Jy\]
    pub sigmas_jy: Vec<f64>,
}

impl MonitoringSeries {
    /// Estimate the flux density \[Jy\] at a time \[MJD\] from a straight line
    /// fitted to nearby measurements. Beyond either end of the series, the
    /// line is fitted to the measurements that span the same length of time
    /// as the extrapolation.
    pub fn flux_at(&self, time_mjd: f64) -> f64 {
        let times = &self.times_mjd;
        let n = times.len();
        if n < 2 {
            return self.fluxes_jy.first().copied().unwrap_or(0.0);
        }
        let (first_t, last_t) = (times[0], times[n - 1]);

        // Inclusive index range of measurements to fit.
        let (start, end) = if time_mjd > last_t {
            let reference = last_t - (time_mjd - last_t);
            let ref_index = nearest_index(times, reference).unwrap_or(0);
            (ref_index.min(n - 2), n - 1)
        } else if time_mjd < first_t {
            let reference = first_t + (first_t - time_mjd);
            let ref_index = nearest_index(times, reference).unwrap_or(n - 1);
            (0, ref_index.max(1))
        } else {
            let ref_index = nearest_index(times, time_mjd).unwrap_or(0);
            (
                ref_index.saturating_sub(MONITORING_FIT_HALF_WIDTH),
                (ref_index + MONITORING_FIT_HALF_WIDTH).min(n - 1),
            )
        };

        let window_times = &times[start..=end];
        let window_fluxes = &self.fluxes_jy[start..=end];
        match linear_fit(window_times, window_fluxes) {
            Some((slope, intercept)) => slope * time_mjd + intercept,
            // All measurements at the same time.
            None => window_fluxes.iter().sum::<f64>() / window_fluxes.len() as f64,
        }
    }
}

/// The UMRAO monitoring table of one source.
#[derive(Debug, Clone, PartialEq)]
pub struct MichiganTable {
    pub source_name: String,

    /// One series per monitoring frequency, in order of first appearance.
    pub series: Vec<MonitoringSeries>,
}

impl MichiganTable {
    /// Parse a UMRAO table. Rows with fewer than six columns end the table.
    pub fn parse<T: std::io::BufRead>(
        source_name: &str,
        buf: &mut T,
    ) -> Result<MichiganTable, MichiganError> {
        // Measurements grouped by frequency. "4.8" and "4.80" are the same
        // series.
        let mut grouped: IndexMap<u64, Vec<(f64, f64, f64)>> = IndexMap::new();
        let mut line = String::new();
        let mut line_num: u32 = 0;

        let parse_float = |string: &str, line_num: u32| -> Result<f64, MichiganError> {
            string.parse().map_err(|_| MichiganError::ParseFloat {
                line_num,
                string: string.to_string(),
            })
        };

        while buf.read_line(&mut line)? > 0 {
            line_num += 1;
            if line_num <= NUM_HEADER_LINES || line.trim().is_empty() {
                line.clear();
                continue;
            }

            let items: Vec<&str> = line.split_whitespace().collect();
            let &[mjd, _date, freq, hour, flux, sigma, ..] = items.as_slice() else {
                if grouped.is_empty() {
                    return Err(MichiganError::IncompleteRow {
                        line_num,
                        found: items.len(),
                    });
                }
                debug!(
                    "Michigan table {source_name} line {line_num}: only {} columns; stopping",
                    items.len()
                );
                break;
            };

            let time_mjd =
                parse_float(mjd, line_num)?.floor() + parse_float(hour, line_num)? / 24.0;
            let freq_ghz = parse_float(freq, line_num)?;
            grouped.entry(freq_ghz.to_bits()).or_insert_with(Vec::new).push((
                time_mjd,
                parse_float(flux, line_num)?,
                parse_float(sigma, line_num)?,
            ));

            line.clear();
        }

        if grouped.is_empty() {
            return Err(MichiganError::NoData(source_name.to_string()));
        }

        let series = grouped
            .into_iter()
            .map(|(freq_bits, mut measurements)| {
                measurements.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));
                MonitoringSeries {
                    freq_ghz: f64::from_bits(freq_bits),
                    times_mjd: measurements.iter().map(|m| m.0).collect(),
                    fluxes_jy: measurements.iter().map(|m| m.1).collect(),
                    sigmas_jy: measurements.iter().map(|m| m.2).collect(),
                }
            })
            .collect::<Vec<_>>();
        trace!(
            "Michigan table {source_name}: {} frequencies, {} measurements",
            series.len(),
            series.iter().map(|s| s.times_mjd.len()).sum::<usize>()
        );

        Ok(MichiganTable {
            source_name: source_name.to_string(),
            series,
        })
    }

    /// The lowest and highest monitoring frequencies \[GHz\].
    pub fn freq_range(&self) -> (f64, f64) {
        self.series.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), s| {
            (low.min(s.freq_ghz), high.max(s.freq_ghz))
        })
    }

    /// Is this frequency \[GHz\] between the monitoring frequencies
    /// (inclusive)?
    pub fn covers(&self, freq_ghz: f64) -> bool {
        let (low, high) = self.freq_range();
        (low..=high).contains(&freq_ghz)
    }

    /// Estimate the flux density \[Jy\] at an epoch and frequency \[GHz\].
    ///
    /// Between the monitoring frequencies, a straight line is fitted across
    /// frequency. Outside of them (or if the line isn't positive there),
    /// spectral indices between the monitoring frequencies are used instead.
    pub fn flux_at(&self, epoch: Epoch, freq_ghz: f64) -> f64 {
        let time_mjd = epoch.to_mjd_utc_days();
        let fds: Vec<FluxDensity> = self
            .series
            .iter()
            .map(|s| FluxDensity {
                freq_ghz: s.freq_ghz,
                flux_jy: s.flux_at(time_mjd),
            })
            .collect();
        trace!("{} at MJD {time_mjd}: {fds:?}", self.source_name);

        if self.covers(freq_ghz) {
            let freqs: Vec<f64> = fds.iter().map(|fd| fd.freq_ghz).collect();
            let fluxes: Vec<f64> = fds.iter().map(|fd| fd.flux_jy).collect();
            // `None` with only one monitoring frequency.
            if let Some((slope, intercept)) = linear_fit(&freqs, &fluxes) {
                let flux_jy = slope * freq_ghz + intercept;
                if flux_jy > 0.0 {
                    return flux_jy;
                }
                trace!(
                    "{}: straight line gives {flux_jy} Jy at {freq_ghz} GHz; using spectral indices",
                    self.source_name
                );
            }
        }

        match FluxDensityModel::from_unsorted(fds) {
            Some(model) => model.estimate_at_freq(freq_ghz).flux_jy,
            None => 0.0,
        }
    }
}

/// Monitoring tables keyed by B1950 name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MichiganCatalogue {
    tables: HashMap<String, MichiganTable>,
}

impl MichiganCatalogue {
    pub fn new(tables: impl IntoIterator<Item = MichiganTable>) -> MichiganCatalogue {
        MichiganCatalogue {
            tables: tables
                .into_iter()
                .map(|t| (t.source_name.to_uppercase(), t))
                .collect(),
        }
    }

    /// Read every table in a directory. Each file is named after the B1950
    /// name of its source, e.g. "2251+158.txt"; tables that can't be read
    /// are skipped with a warning.
    pub fn read_dir<P: AsRef<Path>>(dir: P) -> Result<MichiganCatalogue, MichiganError> {
        let mut tables = vec![];
        for entry in std::fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(source_name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let mut f = BufReader::new(File::open(&path)?);
            match MichiganTable::parse(source_name, &mut f) {
                Ok(t) => tables.push(t),
                Err(e) => warn!("Couldn't read Michigan table {}: {e}", path.display()),
            }
        }
        debug!(
            "Read {} Michigan tables from {}",
            tables.len(),
            dir.as_ref().display()
        );
        Ok(MichiganCatalogue::new(tables))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Get a table by B1950 name, with or without the leading "B".
    pub fn get(&self, b_name: &str) -> Option<&MichiganTable> {
        let name = b_name.trim().to_uppercase();
        self.tables
            .get(&name)
            .or_else(|| name.strip_prefix('B').and_then(|n| self.tables.get(n)))
    }
}
