// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to parse strings into plain numbers or some quantity with a unit.

mod error;

pub use error::UnitParseError;

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::constants::VEL_C;

#[derive(Debug, Clone, Copy, PartialEq, EnumIter, EnumString, IntoStaticStr)]
#[allow(non_camel_case_types)]
pub(crate) enum FreqFormat {
    /// Hertz
    Hz,

    /// kiloHertz
    kHz,

    /// MegaHertz
    MHz,

    /// GigaHertz
    GHz,

    /// Metres
    m,

    /// Centimetres
    cm,

    /// Millimetres
    mm,

    NoUnit,
}

impl FreqFormat {
    /// Convert a number in this unit to a frequency \[GHz\]. Wavelengths are
    /// converted with the speed of light. Numbers without a unit are assumed
    /// to already be in GHz.
    fn to_ghz(self, number: f64) -> f64 {
        match self {
            FreqFormat::Hz => number / 1e9,
            FreqFormat::kHz => number / 1e6,
            FreqFormat::MHz => number / 1e3,
            FreqFormat::GHz | FreqFormat::NoUnit => number,
            FreqFormat::m => VEL_C / number / 1e9,
            FreqFormat::cm => VEL_C / (number / 1e2) / 1e9,
            FreqFormat::mm => VEL_C / (number / 1e3) / 1e9,
        }
    }
}

/// Parse a string that may have a unit of frequency (or wavelength) attached
/// to it.
pub(crate) fn parse_freq(s: &str) -> Result<(f64, FreqFormat), UnitParseError> {
    // Try to parse a naked number.
    let maybe_number: Option<f64> = s.trim().parse().ok();
    if let Some(number) = maybe_number {
        return Ok((number, FreqFormat::NoUnit));
    };

    // That didn't work; let's search over our supported formats. Units are
    // matched case-sensitively first so that "mm" and "Mm" aren't confused,
    // then case-insensitively.
    let suffix = s
        .trim()
        .trim_start_matches(|c: char| c.is_numeric() || c == '.' || c == '-' || c == '+' || c == 'e')
        .trim();
    let prefix = s.trim().trim_end_matches(char::is_alphabetic).trim();
    let format = FreqFormat::iter()
        .filter(|&ff| ff != FreqFormat::NoUnit)
        .find(|&ff| <&'static str>::from(ff) == suffix)
        .or_else(|| {
            FreqFormat::iter()
                .filter(|&ff| ff != FreqFormat::NoUnit)
                .find(|&ff| <&'static str>::from(ff).eq_ignore_ascii_case(suffix))
        });

    match format {
        Some(freq_format) => match prefix.parse() {
            Ok(number) => Ok((number, freq_format)),
            Err(_) => Err(UnitParseError::GotFreqUnitButCantParse(s.to_string())),
        },

        // If we made it this far, we don't know how to parse the string.
        None => Err(UnitParseError::Unknown {
            input: s.to_string(),
            unit_type: "frequency",
        }),
    }
}

/// Parse a frequency or wavelength string into a frequency \[GHz\]. The
/// result must be positive and finite.
pub fn parse_freq_ghz(s: &str) -> Result<f64, UnitParseError> {
    let (number, format) = parse_freq(s)?;
    let ghz = format.to_ghz(number);
    if !ghz.is_finite() || ghz <= 0.0 {
        return Err(UnitParseError::NonPositive(s.to_string()));
    }
    Ok(ghz)
}
