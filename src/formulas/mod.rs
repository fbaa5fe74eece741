// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Closed-form radio-astronomy formulae.
//!
//! Every function here is pure. Frequencies are in GHz, angles in radians,
//! flux densities in janskys and temperatures in kelvin; the unit of each
//! argument is part of its name.

mod error;

pub use error::FormulaError;

use ndarray::{Array1, ArrayView1};

use crate::constants::{H_PLANCK, JANSKY, K_BOLTZMANN, PI, VEL_C};

fn check_finite(quantity: &'static str, value: f64) -> Result<f64, FormulaError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::NotFinite { quantity, value })
    }
}

pub(crate) fn check_positive(quantity: &'static str, value: f64) -> Result<f64, FormulaError> {
    if check_finite(quantity, value)? > 0.0 {
        Ok(value)
    } else {
        Err(FormulaError::NonPositive { quantity, value })
    }
}

fn check_non_negative(quantity: &'static str, value: f64) -> Result<f64, FormulaError> {
    if check_finite(quantity, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(FormulaError::Negative { quantity, value })
    }
}

fn check_efficiency(efficiency: f64) -> Result<f64, FormulaError> {
    if (0.0..=1.0).contains(&efficiency) {
        Ok(efficiency)
    } else {
        Err(FormulaError::EfficiencyOutOfRange(efficiency))
    }
}

/// The geometric area of a circular aperture \[m^2\].
pub fn dish_area(diameter_m: f64) -> Result<f64, FormulaError> {
    let d = check_positive("Dish diameter", diameter_m)?;
    Ok(PI * (d / 2.0).powi(2))
}

/// The effective collecting area of an aperture \[m^2\].
pub fn effective_area(efficiency: f64, area_m2: f64) -> Result<f64, FormulaError> {
    Ok(check_efficiency(efficiency)? * check_positive("Aperture area", area_m2)?)
}

/// Antenna gain \[K/Jy\], i.e. the antenna temperature produced by one jansky
/// of unpolarised flux density:
///
/// G = η A / (2 k)
///
/// The factor of two accounts for a single-polarisation receiver.
pub fn antenna_gain(efficiency: f64, area_m2: f64) -> Result<f64, FormulaError> {
    let a_eff = effective_area(efficiency, area_m2)?;
    Ok(a_eff * JANSKY / (2.0 * K_BOLTZMANN))
}

/// Antenna temperature \[K\] of a source with the given flux density seen by an
/// antenna with the given gain \[K/Jy\].
pub fn antenna_temperature(gain_k_per_jy: f64, flux_jy: f64) -> f64 {
    gain_k_per_jy * flux_jy
}

/// Forward gain of an aperture relative to an isotropic radiator \[dBi\]:
/// 4π A_eff / λ^2.
pub fn antenna_gain_dbi(efficiency: f64, area_m2: f64, freq_ghz: f64) -> Result<f64, FormulaError> {
    let a_eff = effective_area(efficiency, area_m2)?;
    let wavelength = freq_to_wavelength_m(freq_ghz)?;
    ratio_to_db(4.0 * PI * a_eff / wavelength.powi(2))
}

/// Wavelength \[m\] from frequency \[GHz\].
pub fn freq_to_wavelength_m(freq_ghz: f64) -> Result<f64, FormulaError> {
    Ok(VEL_C / (check_positive("Frequency", freq_ghz)? * 1e9))
}

/// Frequency \[GHz\] from wavelength \[m\].
pub fn wavelength_to_freq_ghz(wavelength_m: f64) -> Result<f64, FormulaError> {
    Ok(VEL_C / check_positive("Wavelength", wavelength_m)? / 1e9)
}

/// Janskys to W m^-2 Hz^-1.
pub fn jy_to_si(flux_jy: f64) -> f64 {
    flux_jy * JANSKY
}

/// W m^-2 Hz^-1 to janskys.
pub fn si_to_jy(flux_si: f64) -> f64 {
    flux_si / JANSKY
}

/// Decibels to a power ratio.
pub fn db_to_ratio(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

/// A power ratio to decibels.
pub fn ratio_to_db(ratio: f64) -> Result<f64, FormulaError> {
    Ok(10.0 * check_positive("Power ratio", ratio)?.log10())
}

/// Black-body specific intensity B_ν(T) \[W m^-2 Hz^-1 sr^-1\].
pub fn planck_intensity(temperature_k: f64, freq_ghz: f64) -> Result<f64, FormulaError> {
    let t = check_non_negative("Temperature", temperature_k)?;
    let nu = check_positive("Frequency", freq_ghz)? * 1e9;
    if t == 0.0 {
        return Ok(0.0);
    }
    let x = H_PLANCK * nu / (K_BOLTZMANN * t);
    Ok(2.0 * H_PLANCK * nu.powi(3) / VEL_C.powi(2) / x.exp_m1())
}

/// Rayleigh-Jeans approximation of the black-body specific intensity
/// \[W m^-2 Hz^-1 sr^-1\]. Valid when hν << kT, i.e. almost always at radio
/// frequencies.
pub fn rayleigh_jeans_intensity(temperature_k: f64, freq_ghz: f64) -> Result<f64, FormulaError> {
    let t = check_non_negative("Temperature", temperature_k)?;
    let nu = check_positive("Frequency", freq_ghz)? * 1e9;
    Ok(2.0 * K_BOLTZMANN * t * nu.powi(2) / VEL_C.powi(2))
}

/// Solid angle of a disc with the given angular diameter \[sr\]. Small-angle
/// approximation.
pub fn disc_solid_angle(angular_diameter_rad: f64) -> f64 {
    PI * (angular_diameter_rad / 2.0).powi(2)
}

/// Flux density \[Jy\] of a uniformly bright disc with brightness temperature
/// `tb_k`.
pub fn disc_flux(tb_k: f64, freq_ghz: f64, angular_diameter_rad: f64) -> Result<f64, FormulaError> {
    let diameter = check_positive("Angular diameter", angular_diameter_rad)?;
    let intensity = rayleigh_jeans_intensity(tb_k, freq_ghz)?;
    Ok(si_to_jy(intensity * disc_solid_angle(diameter)))
}

/// Brightness temperature \[K\] of a uniformly bright disc with the given flux
/// density. The inverse of [`disc_flux`].
pub fn brightness_temperature(
    flux_jy: f64,
    freq_ghz: f64,
    angular_diameter_rad: f64,
) -> Result<f64, FormulaError> {
    let flux = check_finite("Flux density", flux_jy)?;
    let diameter = check_positive("Angular diameter", angular_diameter_rad)?;
    let nu = check_positive("Frequency", freq_ghz)? * 1e9;
    let intensity = jy_to_si(flux) / disc_solid_angle(diameter);
    Ok(intensity * VEL_C.powi(2) / (2.0 * K_BOLTZMANN * nu.powi(2)))
}

/// [`planck_intensity`] over many frequencies \[GHz\].
pub fn planck_intensity_array(
    temperature_k: f64,
    freqs_ghz: ArrayView1<f64>,
) -> Result<Array1<f64>, FormulaError> {
    let intensities = freqs_ghz
        .iter()
        .map(|&f| planck_intensity(temperature_k, f))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Array1::from(intensities))
}

/// [`disc_flux`] over many frequencies \[GHz\].
pub fn disc_flux_array(
    tb_k: f64,
    freqs_ghz: ArrayView1<f64>,
    angular_diameter_rad: f64,
) -> Result<Array1<f64>, FormulaError> {
    let fluxes = freqs_ghz
        .iter()
        .map(|&f| disc_flux(tb_k, f, angular_diameter_rad))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Array1::from(fluxes))
}
