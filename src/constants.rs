// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. Physical constants are CODATA 2018
values in SI units unless the name says otherwise.
 */

pub use std::f64::consts::{PI, TAU};

/// Speed of light \[metres/second\]
pub const VEL_C: f64 = 299_792_458.0;

/// Boltzmann constant \[J/K\]
pub const K_BOLTZMANN: f64 = 1.380_649e-23;

/// Planck constant \[J s\]
pub const H_PLANCK: f64 = 6.626_070_15e-34;

/// One jansky \[W m^-2 Hz^-1\]
pub const JANSKY: f64 = 1e-26;

/// One astronomical unit \[km\]
pub const AU_KM: f64 = 149_597_870.7;

/// Julian date of the J2000.0 epoch (TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Obliquity of the ecliptic at J2000.0 \[degrees\]
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_28;

/// When a source's flux densities are listed at a single frequency, this
/// spectral index is assumed for extrapolation.
pub const DEFAULT_SPEC_INDEX: f64 = -0.8;

/// Spectral indices steeper than this are reported when tracing; they usually
/// indicate poorly-behaved catalogue entries.
pub const SPEC_INDEX_CAP: f64 = -2.0;

/// Number of catalogue points on either side of the requested epoch used when
/// interpolating monitoring data in time.
pub const MONITORING_FIT_HALF_WIDTH: usize = 4;

/// Equatorial radii of solar-system bodies \[km\]
pub mod radii {
    pub const SUN_KM: f64 = 695_700.0;
    pub const MERCURY_KM: f64 = 2_439.7;
    pub const VENUS_KM: f64 = 6_051.8;
    pub const MOON_KM: f64 = 1_737.4;
    pub const MARS_KM: f64 = 3_396.2;
    pub const JUPITER_KM: f64 = 71_492.0;
    pub const SATURN_KM: f64 = 60_268.0;
    pub const URANUS_KM: f64 = 25_559.0;
    pub const NEPTUNE_KM: f64 = 24_764.0;
    pub const PLUTO_KM: f64 = 1_188.3;
}
