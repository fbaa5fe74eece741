// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::Parser;
use log::debug;

use super::common::{display_warnings, InfoPrinter, Warn};
use crate::{
    noise::{
        galactic_background_intensity, galactic_background_temperature, noise_power,
        radiometer_sensitivity,
    },
    unit_parsing::parse_freq_ghz,
    RadioAstronomyError,
};

#[derive(Parser, Debug, Clone, Default)]
pub(super) struct GalacticBgArgs {
    /// Frequencies at which to evaluate the galactic background. Plain numbers
    /// are GHz; the model is meant for frequencies below a few GHz.
    #[clap(name = "FREQUENCIES", required = true)]
    freqs: Vec<String>,

    /// Bandwidth of the receiver [Hz]. If given, the noise power of the
    /// background is reported.
    #[clap(short, long)]
    bandwidth: Option<f64>,

    /// Integration time [seconds]. With --bandwidth, the radiometer
    /// sensitivity to the background is reported.
    #[clap(short, long)]
    integration_time: Option<f64>,
}

impl GalacticBgArgs {
    pub(super) fn run(self) -> Result<(), RadioAstronomyError> {
        debug!("{:#?}", self);
        let Self {
            freqs,
            bandwidth,
            integration_time,
        } = self;
        if bandwidth.is_none() && integration_time.is_some() {
            "An integration time without a bandwidth has no effect".warn();
        }

        let mut printer = InfoPrinter::new("Galactic background".into());
        for freq in freqs {
            let freq_ghz = parse_freq_ghz(&freq)?;
            if freq_ghz > 10.0 {
                format!("{freq_ghz} GHz is well above where the galactic background model applies")
                    .warn();
            }
            let freq_mhz = freq_ghz * 1e3;
            let intensity = galactic_background_intensity(freq_mhz)?;
            let temperature = galactic_background_temperature(freq_mhz)?;
            let mut block = vec![
                format!("{freq_mhz} MHz: I = {intensity:.4e} W m^-2 Hz^-1 sr^-1").into(),
                format!("{:>width$}  T = {temperature:.4} K", "", width = format!("{freq_mhz} MHz").len())
                    .into(),
            ];
            if let Some(b) = bandwidth {
                let power = noise_power(temperature, b)?;
                block.push(format!("  kTB = {power:.4e} W").into());
                if let Some(t) = integration_time {
                    let sigma = radiometer_sensitivity(temperature, b, t)?;
                    block.push(format!("  ΔT = {sigma:.4e} K").into());
                }
            }
            printer.push_block(block);
        }
        display_warnings();
        printer.display();
        Ok(())
    }
}
