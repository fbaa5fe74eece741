// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversion between waveguide band letters and frequencies.


use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// A named microwave band.
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
pub enum Band {
    L,
    S,
    C,
    X,
    Ku,
    K,
    Ka,
    Q,
    V,
    W,
    D,
}

impl Band {
    /// The band containing this frequency \[GHz\]. Frequencies below 1 GHz
    /// (and non-finite frequencies) aren't in any band.
    pub fn from_frequency(freq_ghz: f64) -> Option<Band> {
        if !freq_ghz.is_finite() || freq_ghz < 1.0 {
            return None;
        }
        let band = match freq_ghz {
            f if f < 2.0 => Band::L,
            f if f < 4.0 => Band::S,
            f if f < 8.0 => Band::C,
            f if f < 12.0 => Band::X,
            f if f < 18.0 => Band::Ku,
            f if f < 26.5 => Band::K,
            f if f < 40.0 => Band::Ka,
            f if f < 50.0 => Band::Q,
            f if f < 75.0 => Band::V,
            f if f < 115.0 => Band::W,
            _ => Band::D,
        };
        Some(band)
    }

    /// The nominal centre frequency used for this band \[GHz\]. V and D bands
    /// have no nominal frequency.
    pub fn nominal_frequency(self) -> Option<f64> {
        match self {
            Band::L => Some(1.7),
            Band::S => Some(2.3),
            Band::C => Some(5.0),
            Band::X => Some(8.45),
            Band::Ku => Some(15.0),
            Band::K => Some(22.0),
            Band::Ka => Some(34.0),
            Band::Q => Some(42.0),
            Band::W => Some(90.0),
            Band::V | Band::D => None,
        }
    }

    /// The lower (inclusive) and upper (exclusive) edges of this band \[GHz\].
    /// D band has no upper edge.
    pub fn frequency_range(self) -> (f64, Option<f64>) {
        match self {
            Band::L => (1.0, Some(2.0)),
            Band::S => (2.0, Some(4.0)),
            Band::C => (4.0, Some(8.0)),
            Band::X => (8.0, Some(12.0)),
            Band::Ku => (12.0, Some(18.0)),
            Band::K => (18.0, Some(26.5)),
            Band::Ka => (26.5, Some(40.0)),
            Band::Q => (40.0, Some(50.0)),
            Band::V => (50.0, Some(75.0)),
            Band::W => (75.0, Some(115.0)),
            Band::D => (115.0, None),
        }
    }
}
