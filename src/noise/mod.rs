// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Noise: the galactic background and receiver noise relations.


use crate::{
    constants::{K_BOLTZMANN, VEL_C},
    formulas::{check_positive, FormulaError},
};

/// Brightness of the non-thermal galactic background averaged over the sky.
const GALACTIC_INTENSITY: f64 = 2.48e-20;
/// Brightness of the extragalactic background.
const EXTRAGALACTIC_INTENSITY: f64 = 1.06e-20;

/// Optical depth of the Galaxy at a frequency \[MHz\].
fn galactic_optical_depth(freq_mhz: f64) -> f64 {
    5.0 * freq_mhz.powf(-2.1)
}

/// Average galactic background specific intensity \[W m^-2 Hz^-1 sr^-1\].
///
/// Zarka et al., JGR, 109, A09S15 (2004). Note that the frequency is in MHz;
/// the expression is intended for low frequencies.
pub fn galactic_background_intensity(freq_mhz: f64) -> Result<f64, FormulaError> {
    let f = check_positive("Frequency", freq_mhz)?;
    let tau = galactic_optical_depth(f);
    Ok(GALACTIC_INTENSITY * f.powf(-0.52) * (-(-tau).exp_m1()) / tau
        + EXTRAGALACTIC_INTENSITY * f.powf(-0.8) * (-tau).exp())
}

/// Rayleigh-Jeans brightness temperature of the galactic background at a
/// frequency \[MHz\].
pub fn galactic_background_temperature(freq_mhz: f64) -> Result<f64, FormulaError> {
    let intensity = galactic_background_intensity(freq_mhz)?;
    let nu = freq_mhz * 1e6;
    Ok(intensity * VEL_C.powi(2) / (2.0 * K_BOLTZMANN * nu.powi(2)))
}

/// Thermal noise power k T B \[W\].
pub fn noise_power(temperature_k: f64, bandwidth_hz: f64) -> Result<f64, FormulaError> {
    let t = check_positive("Noise temperature", temperature_k)?;
    let b = check_positive("Bandwidth", bandwidth_hz)?;
    Ok(K_BOLTZMANN * t * b)
}

/// The ideal radiometer equation: the RMS temperature fluctuation \[K\] after
/// integrating for `integration_s` seconds over `bandwidth_hz`.
pub fn radiometer_sensitivity(
    tsys_k: f64,
    bandwidth_hz: f64,
    integration_s: f64,
) -> Result<f64, FormulaError> {
    let tsys = check_positive("System temperature", tsys_k)?;
    let b = check_positive("Bandwidth", bandwidth_hz)?;
    let t = check_positive("Integration time", integration_s)?;
    Ok(tsys / (b * t).sqrt())
}
