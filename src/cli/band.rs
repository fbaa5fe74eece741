// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str::FromStr;

use clap::Parser;
use log::debug;

use super::common::InfoPrinter;
use crate::{bands::Band, unit_parsing::parse_freq_ghz, RadioAstronomyError};

#[derive(Parser, Debug, Clone, Default)]
pub(super) struct BandArgs {
    /// Band letters (e.g. X, Ku) or frequencies (e.g. 8.4GHz, 3.6cm). Band
    /// letters are described; frequencies are assigned a band.
    #[clap(name = "QUERY", required = true)]
    queries: Vec<String>,
}

impl BandArgs {
    pub(super) fn run(self) -> Result<(), RadioAstronomyError> {
        debug!("{:#?}", self);
        let mut printer = InfoPrinter::new("Bands".into());
        for query in self.queries {
            let line = match Band::from_str(query.trim()) {
                Ok(band) => describe(band),
                Err(_) => {
                    let freq_ghz = parse_freq_ghz(&query)?;
                    match Band::from_frequency(freq_ghz) {
                        Some(band) => format!("{freq_ghz} GHz is in {}", describe(band)),
                        None => format!("{freq_ghz} GHz isn't in a named band"),
                    }
                }
            };
            printer.push_line(line.into());
        }
        printer.display();
        Ok(())
    }
}

fn describe(band: Band) -> String {
    let range = match band.frequency_range() {
        (low, Some(high)) => format!("{low}-{high} GHz"),
        (low, None) => format!(">= {low} GHz"),
    };
    match band.nominal_frequency() {
        Some(f) => format!("{band} band ({range}, nominally {f} GHz)"),
        None => format!("{band} band ({range})"),
    }
}
