// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Radio-astronomy formulae and calibrator flux densities.

```
use radio_astronomy::{antenna_gain, antenna_temperature, calibrator_flux, PI};
use hifitime::Epoch;

// A 34 m dish with 70% aperture efficiency.
let gain = antenna_gain(0.7, PI * 17.0_f64.powi(2)).unwrap();
let epoch = Epoch::from_gregorian_utc_hms(2012, 6, 6, 1, 0, 0);
let venus = calibrator_flux("Venus", 8.4, epoch).unwrap();
let t_a = antenna_temperature(gain, venus.flux_jy);
assert!(t_a > 15.0 && t_a < 25.0);
```
 */

pub mod bands;
pub mod calibrators;
mod cli;
pub mod constants;
pub mod ephemeris;
pub mod flux_density;
pub mod formulas;
pub(crate) mod math;
pub mod noise;
pub mod unit_parsing;

// Re-exports.
pub use bands::Band;
pub use calibrators::{
    calibrator_flux, CalibratorCatalogue, CalibratorError, CalibratorFlux, FluxOrigin,
};
pub use cli::{RadioAstronomy, RadioAstronomyError};
pub use constants::{PI, TAU};
pub use ephemeris::{observe, EphemerisError, Observation, SolarSystemBody};
pub use flux_density::{FluxDensity, FluxDensityModel, FluxInterpolation};
pub use formulas::*;
pub use noise::*;
pub use unit_parsing::{parse_freq_ghz, UnitParseError};
