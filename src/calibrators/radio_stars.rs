// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Flux-density expressions for bright "radio stars" used in antenna gain
//! measurements.
//!
//! Ekelman, "Radio Star Flux Density Expressions for Accurate Antenna Gain
//! Measurements", IEEE 1999:
//!
//! log10(S) = p1 + p2 log10(f \[MHz\])

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::flux_density::{FluxDensity, FluxDensityModel};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr, Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum RadioStar {
    #[strum(to_string = "Virgo", serialize = "Virgo A", serialize = "VirgoA")]
    Virgo,

    #[strum(to_string = "Omega", serialize = "M17")]
    Omega,

    #[strum(to_string = "Orion", serialize = "Orion A", serialize = "OrionA")]
    Orion,
}

impl RadioStar {
    /// The (p1, p2) coefficients of the flux-density expression.
    fn coefficients(self) -> (f64, f64) {
        match self {
            RadioStar::Virgo => (6.541, -1.289),
            RadioStar::Omega => (4.056, -0.378),
            RadioStar::Orion => (3.317, -0.204),
        }
    }

    /// Flux density \[Jy\] at a frequency \[GHz\].
    pub fn flux(self, freq_ghz: f64) -> f64 {
        let (p1, p2) = self.coefficients();
        10_f64.powf(p1 + p2 * (1000.0 * freq_ghz).log10())
    }

    /// The expression as a power law referenced to 1 GHz.
    pub fn flux_model(self) -> FluxDensityModel {
        let (_, p2) = self.coefficients();
        FluxDensityModel::PowerLaw {
            si: p2,
            fd: FluxDensity {
                freq_ghz: 1.0,
                flux_jy: self.flux(1.0),
            },
        }
    }
}
