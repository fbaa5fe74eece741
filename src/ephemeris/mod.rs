// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Low-precision solar-system ephemerides.
//!
//! Positions come from Keplerian mean elements, which give planetary
//! positions to within a few arcminutes between 1800 and 2050. This is more
//! than enough to get the apparent sizes and distances that calibrator flux
//! densities depend on. Light-time, aberration and nutation are ignored.

mod elements;

use hifitime::Epoch;
use log::{trace, warn};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

use crate::constants::{
    radii, AU_KM, DAYS_PER_JULIAN_CENTURY, J2000_JD, OBLIQUITY_J2000_DEG, TAU,
};
use elements::OrbitalElements;

/// The first and last Julian dates for which the orbital elements are valid.
const VALID_JD_RANGE: (f64, f64) = (2_378_496.5, 2_469_807.5);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("No ephemeris is available for {0}")]
    NoEphemeris(SolarSystemBody),
}

/// Solar-system bodies that may be used as calibrators.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum SolarSystemBody {
    Sun,
    Mercury,
    Venus,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl SolarSystemBody {
    /// Equatorial radius \[km\].
    pub fn radius_km(self) -> f64 {
        match self {
            SolarSystemBody::Sun => radii::SUN_KM,
            SolarSystemBody::Mercury => radii::MERCURY_KM,
            SolarSystemBody::Venus => radii::VENUS_KM,
            SolarSystemBody::Moon => radii::MOON_KM,
            SolarSystemBody::Mars => radii::MARS_KM,
            SolarSystemBody::Jupiter => radii::JUPITER_KM,
            SolarSystemBody::Saturn => radii::SATURN_KM,
            SolarSystemBody::Uranus => radii::URANUS_KM,
            SolarSystemBody::Neptune => radii::NEPTUNE_KM,
            SolarSystemBody::Pluto => radii::PLUTO_KM,
        }
    }

    fn elements(self) -> Option<&'static OrbitalElements> {
        match self {
            SolarSystemBody::Mercury => Some(&elements::MERCURY),
            SolarSystemBody::Venus => Some(&elements::VENUS),
            SolarSystemBody::Mars => Some(&elements::MARS),
            SolarSystemBody::Jupiter => Some(&elements::JUPITER),
            SolarSystemBody::Saturn => Some(&elements::SATURN),
            SolarSystemBody::Uranus => Some(&elements::URANUS),
            SolarSystemBody::Neptune => Some(&elements::NEPTUNE),
            SolarSystemBody::Pluto => Some(&elements::PLUTO),
            SolarSystemBody::Sun | SolarSystemBody::Moon => None,
        }
    }
}

/// Where a body is as seen from the Earth at an epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    pub body: SolarSystemBody,

    /// Distance from the Earth \[AU\]
    pub earth_distance_au: f64,

    /// Distance from the Sun \[AU\] (zero for the Sun itself)
    pub sun_distance_au: f64,

    /// Apparent equatorial angular radius \[radians\]
    pub angular_radius_rad: f64,

    /// The Sun-body-Earth angle \[radians\]
    pub phase_angle_rad: f64,

    /// Fraction of the visible disc that is illuminated (0 to 1)
    pub illuminated_fraction: f64,

    /// The Sun-Earth-body angle \[radians\]
    pub elongation_rad: f64,

    /// Geocentric right ascension (J2000) \[radians\]
    pub ra_rad: f64,

    /// Geocentric declination (J2000) \[radians\]
    pub dec_rad: f64,
}

impl Observation {
    /// Apparent angular diameter \[radians\].
    pub fn angular_diameter_rad(&self) -> f64 {
        2.0 * self.angular_radius_rad
    }
}

fn julian_centuries_tt(epoch: Epoch) -> f64 {
    let jd = epoch.to_jde_tt_days();
    if jd < VALID_JD_RANGE.0 || jd > VALID_JD_RANGE.1 {
        warn!("Epoch {epoch} is outside of 1800-2050; solar-system positions will be inaccurate");
    }
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Heliocentric ecliptic (J2000) position of a body \[AU\]. The Sun is at the
/// origin.
pub fn heliocentric_position(
    body: SolarSystemBody,
    epoch: Epoch,
) -> Result<[f64; 3], EphemerisError> {
    match (body, body.elements()) {
        (SolarSystemBody::Sun, _) => Ok([0.0; 3]),
        (_, Some(elements)) => Ok(elements.heliocentric_position(julian_centuries_tt(epoch))),
        (_, None) => Err(EphemerisError::NoEphemeris(body)),
    }
}

/// Heliocentric ecliptic (J2000) position of the Earth(-Moon barycentre)
/// \[AU\].
pub fn earth_position(epoch: Epoch) -> [f64; 3] {
    elements::EARTH.heliocentric_position(julian_centuries_tt(epoch))
}

/// Work out where a body is, and how it appears, from the Earth at an epoch.
pub fn observe(body: SolarSystemBody, epoch: Epoch) -> Result<Observation, EphemerisError> {
    let body_pos = heliocentric_position(body, epoch)?;
    let earth_pos = earth_position(epoch);
    let geocentric = [
        body_pos[0] - earth_pos[0],
        body_pos[1] - earth_pos[1],
        body_pos[2] - earth_pos[2],
    ];

    let delta = norm(geocentric);
    let r = norm(body_pos);
    let r_earth = norm(earth_pos);

    let (phase_angle_rad, elongation_rad) = if body == SolarSystemBody::Sun {
        (0.0, 0.0)
    } else {
        let cos_phase = (r * r + delta * delta - r_earth * r_earth) / (2.0 * r * delta);
        let cos_elong = (r_earth * r_earth + delta * delta - r * r) / (2.0 * r_earth * delta);
        (
            cos_phase.clamp(-1.0, 1.0).acos(),
            cos_elong.clamp(-1.0, 1.0).acos(),
        )
    };

    // Rotate the ecliptic vector into the equatorial frame.
    let (sin_eps, cos_eps) = OBLIQUITY_J2000_DEG.to_radians().sin_cos();
    let x = geocentric[0];
    let y = geocentric[1] * cos_eps - geocentric[2] * sin_eps;
    let z = geocentric[1] * sin_eps + geocentric[2] * cos_eps;
    let ra_rad = y.atan2(x).rem_euclid(TAU);
    let dec_rad = (z / delta).asin();

    let angular_radius_rad = (body.radius_km() / (delta * AU_KM)).asin();

    let obs = Observation {
        body,
        earth_distance_au: delta,
        sun_distance_au: r,
        angular_radius_rad,
        phase_angle_rad,
        illuminated_fraction: (1.0 + phase_angle_rad.cos()) / 2.0,
        elongation_rad,
        ra_rad,
        dec_rad,
    };
    trace!("{body} at {epoch}: {obs:?}");
    Ok(obs)
}
