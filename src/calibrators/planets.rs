// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Brightness-temperature models of solar-system bodies, and the flux
//! densities they produce.

use hifitime::Epoch;
use lazy_static::lazy_static;
use log::{debug, trace};
use ndarray::{Array1, ArrayView1};
use serde::Serialize;

use super::CalibratorError;
use crate::{
    ephemeris::{observe, Observation},
    formulas::{check_positive, disc_flux},
    math::{polyval, weighted_polyfit},
    SolarSystemBody,
};

/// Venus brightness-temperature measurements: frequency \[GHz\], Tb \[K\] and
/// the uncertainty on Tb \[K\].
///
/// Butler et al. (2001) for 4.86-22.46 GHz, Ulich et al. (1980) for 86.1 GHz,
/// Yefanov et al. (1970) for 37.5 and 138.9 GHz, Baars et al. (1965) for
/// 14.5 GHz. The last three have inflated uncertainties.
const VENUS_MEASUREMENTS: [(f64, f64, f64); 8] = [
    (22.46, 505.2, 25.3),
    (14.94, 565.9, 17.0),
    (8.44, 657.5, 13.2),
    (4.86, 679.9, 13.6),
    (14.5, 480.0, 100.0),
    (86.1, 357.5, 13.1),
    (37.5, 495.0, 100.0),
    (138.9, 290.0, 100.0),
];

/// The Venus model doesn't fit the data below this frequency \[GHz\].
const VENUS_LOW_FREQ_GHZ: f64 = 4.0;
const VENUS_LOW_FREQ_TB: f64 = 686.0;
/// Above this frequency \[GHz\] the Venus model is held constant.
const VENUS_HIGH_FREQ_GHZ: f64 = 75.0;
const VENUS_HIGH_FREQ_TB: f64 = 351.0;

const JUPITER_TB: f64 = 157.0;
const JUPITER_SIGMA_TB: f64 = 14.0;
/// Saturn's brightness relative to Jupiter's.
const SATURN_JUPITER_RATIO: f64 = 0.94;
const SUN_TB: f64 = 5800.0;
const SUN_SIGMA_TB: f64 = 100.0;
const MARS_TB: f64 = 190.0;
const MARS_SIGMA_TB: f64 = 12.0;
/// Mars' mean distance from the Sun \[AU\].
const MARS_MEAN_SUN_DISTANCE_AU: f64 = 1.524;
const MERCURY_TB: f64 = 330.0;

lazy_static! {
    /// Coefficients of a cubic in log10(frequency \[GHz\]), fitted to
    /// [`VENUS_MEASUREMENTS`] with weights 1/σ^4.
    static ref VENUS_FIT: Option<[f64; 4]> = {
        let log_freqs: Vec<f64> = VENUS_MEASUREMENTS.iter().map(|m| m.0.log10()).collect();
        let tbs: Vec<f64> = VENUS_MEASUREMENTS.iter().map(|m| m.1).collect();
        let weights: Vec<f64> = VENUS_MEASUREMENTS.iter().map(|m| m.2.powi(-4)).collect();
        let fit = weighted_polyfit::<4>(&log_freqs, &tbs, &weights);
        debug!("Venus brightness-temperature fit coefficients: {fit:?}");
        fit
    };
}

/// A brightness temperature with its uncertainty and literature source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrightnessTemperature {
    /// \[K\]
    pub tb_k: f64,

    /// \[K\]
    pub sigma_k: Option<f64>,

    /// Where the value comes from.
    pub reference: &'static str,
}

/// The flux density of a solar-system body, and what went into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetFlux {
    /// \[Jy\]
    pub flux_jy: f64,

    pub brightness: BrightnessTemperature,

    pub observation: Observation,
}

/// The Venus brightness-temperature model at a frequency \[GHz\].
pub fn venus_brightness(freq_ghz: f64) -> Result<f64, CalibratorError> {
    let freq_ghz = check_positive("Frequency", freq_ghz)?;
    if freq_ghz <= VENUS_LOW_FREQ_GHZ {
        Ok(VENUS_LOW_FREQ_TB)
    } else if freq_ghz > VENUS_HIGH_FREQ_GHZ {
        Ok(VENUS_HIGH_FREQ_TB)
    } else {
        let coeffs = VENUS_FIT
            .as_ref()
            .ok_or(CalibratorError::NoBrightnessModel(SolarSystemBody::Venus))?;
        Ok(polyval(coeffs, freq_ghz.log10()))
    }
}

/// Brightness temperature of a body at a frequency \[GHz\], as seen in
/// `observation`. Mars and Mercury depend on their geometry; the other bodies
/// don't.
pub fn planet_brightness(
    freq_ghz: f64,
    observation: &Observation,
) -> Result<BrightnessTemperature, CalibratorError> {
    let freq_ghz = check_positive("Frequency", freq_ghz)?;
    let tb = match observation.body {
        SolarSystemBody::Venus => BrightnessTemperature {
            tb_k: venus_brightness(freq_ghz)?,
            sigma_k: Some(5.0),
            reference: "model",
        },

        SolarSystemBody::Jupiter => BrightnessTemperature {
            tb_k: JUPITER_TB,
            sigma_k: Some(JUPITER_SIGMA_TB),
            reference: "Baars1965",
        },

        SolarSystemBody::Saturn => BrightnessTemperature {
            tb_k: SATURN_JUPITER_RATIO * JUPITER_TB,
            sigma_k: Some(SATURN_JUPITER_RATIO * JUPITER_SIGMA_TB),
            reference: "Welch1966",
        },

        SolarSystemBody::Sun => BrightnessTemperature {
            tb_k: SUN_TB,
            sigma_k: Some(SUN_SIGMA_TB),
            reference: "",
        },

        // Insolation scales with the inverse square of the distance from the
        // Sun.
        SolarSystemBody::Mars => {
            let scale = (MARS_MEAN_SUN_DISTANCE_AU / observation.sun_distance_au).powi(2);
            BrightnessTemperature {
                tb_k: MARS_TB * scale,
                sigma_k: Some(MARS_SIGMA_TB * scale),
                reference: "Dent1965",
            }
        }

        // Depends on how much of the disc is lit.
        SolarSystemBody::Mercury => {
            let wavelength_mm = 300.0 / freq_ghz;
            let exponent = (0.1 - 0.4 * observation.illuminated_fraction) / wavelength_mm;
            BrightnessTemperature {
                tb_k: MERCURY_TB * 10_f64.powf(exponent),
                sigma_k: None,
                reference: "Klein1970",
            }
        }

        body @ (SolarSystemBody::Moon
        | SolarSystemBody::Uranus
        | SolarSystemBody::Neptune
        | SolarSystemBody::Pluto) => return Err(CalibratorError::NoBrightnessModel(body)),
    };
    trace!("{} Tb at {freq_ghz} GHz: {tb:?}", observation.body);
    Ok(tb)
}

/// Flux density of a solar-system body at a frequency \[GHz\] and epoch.
pub fn planet_flux(
    body: SolarSystemBody,
    freq_ghz: f64,
    epoch: Epoch,
) -> Result<PlanetFlux, CalibratorError> {
    let observation = observe(body, epoch)?;
    let brightness = planet_brightness(freq_ghz, &observation)?;
    let flux_jy = disc_flux(
        brightness.tb_k,
        freq_ghz,
        observation.angular_diameter_rad(),
    )?;
    debug!("{body} at {freq_ghz} GHz: {flux_jy} Jy");
    Ok(PlanetFlux {
        flux_jy,
        brightness,
        observation,
    })
}

/// [`planet_brightness`] over many frequencies \[GHz\].
pub fn planet_brightness_array(
    freqs_ghz: ArrayView1<f64>,
    observation: &Observation,
) -> Result<Array1<f64>, CalibratorError> {
    let tbs = freqs_ghz
        .iter()
        .map(|&f| planet_brightness(f, observation).map(|tb| tb.tb_k))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Array1::from(tbs))
}
