// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Where a solar-system body is, and how bright it is.

use std::str::FromStr;

use clap::Parser;
use itertools::Itertools;
use log::debug;
use strum::IntoEnumIterator;

use super::common::{display_warnings, parse_epoch, InfoPrinter};
use crate::{
    calibrators::{planet_flux, planets::planet_brightness},
    ephemeris::{observe, SolarSystemBody},
    unit_parsing::parse_freq_ghz,
    RadioAstronomyError,
};

lazy_static::lazy_static! {
    static ref BODY_HELP: String =
        format!("The solar-system body. Supported bodies: {}", SolarSystemBody::iter().join(", "));
}

#[derive(Parser, Debug, Clone, Default)]
pub(super) struct PlanetArgs {
    #[clap(name = "BODY", help = BODY_HELP.as_str())]
    body: String,

    /// The time of the observation. May be "now", an MJD (UTC) or a date like
    /// "2012-06-06T01:00:00 UTC". Default: now
    #[clap(short = 't', long)]
    epoch: Option<String>,

    /// Also report brightness temperatures and flux densities at these
    /// frequencies. Plain numbers are GHz.
    #[clap(short, long, multiple_values(true))]
    freqs: Option<Vec<String>>,
}

impl PlanetArgs {
    pub(super) fn run(self) -> Result<(), RadioAstronomyError> {
        debug!("{:#?}", self);
        let body = SolarSystemBody::from_str(self.body.trim()).map_err(|_| {
            RadioAstronomyError::Calibrator(format!("'{}' isn't a solar-system body", self.body))
        })?;
        let epoch = parse_epoch(self.epoch.as_deref().unwrap_or("now"))?;
        let freqs_ghz = self
            .freqs
            .unwrap_or_default()
            .iter()
            .map(|f| parse_freq_ghz(f))
            .collect::<Result<Vec<_>, _>>()?;

        let obs = observe(body, epoch)?;
        display_warnings();

        let mut printer = InfoPrinter::new(format!("{body} at {epoch}").into());
        printer.push_block(vec![
            format!(
                "RA, Dec (J2000):      {:.4}°, {:.4}°",
                obs.ra_rad.to_degrees(),
                obs.dec_rad.to_degrees()
            )
            .into(),
            format!("Distance from Earth:  {:.6} AU", obs.earth_distance_au).into(),
            format!("Distance from Sun:    {:.6} AU", obs.sun_distance_au).into(),
        ]);
        printer.push_line(
            format!(
                "Angular diameter:     {:.3}\"",
                obs.angular_diameter_rad().to_degrees() * 3600.0
            )
            .into(),
        );
        printer.push_block(vec![
            format!("Phase angle:          {:.3}°", obs.phase_angle_rad.to_degrees()).into(),
            format!("Illuminated fraction: {:.4}", obs.illuminated_fraction).into(),
            format!("Elongation:           {:.3}°", obs.elongation_rad.to_degrees()).into(),
        ]);
        printer.display();

        if freqs_ghz.is_empty() {
            return Ok(());
        }
        let mut printer = InfoPrinter::new(format!("{body} brightness").into());
        for freq_ghz in freqs_ghz {
            let tb = planet_brightness(freq_ghz, &obs)?;
            let flux = planet_flux(body, freq_ghz, epoch)?;
            let sigma = match tb.sigma_k {
                Some(s) => format!(" ± {s:.1}"),
                None => String::new(),
            };
            let reference = match tb.reference {
                "" => String::new(),
                r => format!(" [{r}]"),
            };
            printer.push_line(
                format!(
                    "{freq_ghz:>9.4} GHz: Tb = {:.2}{sigma} K{reference}, S = {:.4} Jy",
                    tb.tb_k, flux.flux_jy
                )
                .into(),
            );
        }
        printer.display();

        Ok(())
    }
}
