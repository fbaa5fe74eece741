// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all radio-astronomy CLI errors. This should be the *only*
//! error enum that the binary sees.

use thiserror::Error;

use super::{
    antenna_temp::AntennaTempArgsError, calibrator_flux::CalibratorFluxArgsError,
    catalogue_convert::CatalogueConvertArgsError,
};
use crate::{
    calibrators::{CalibratorError, MichiganError, VlaCatalogueError},
    ephemeris::EphemerisError,
    formulas::FormulaError,
    unit_parsing::UnitParseError,
};

/// The publicly visible error from the CLI. Errors that have a likely fix
/// carry a hint.
#[derive(Error, Debug)]
pub enum RadioAstronomyError {
    /// A formula was given an input outside of its physical domain.
    #[error("{0}")]
    Formula(String),

    /// An error related to solar-system positions.
    #[error("{0}\n\nPositions are only available for the Sun and the planets (including Pluto) between 1800 and 2050.")]
    Ephemeris(String),

    /// An error related to looking up a calibrator.
    #[error("{0}\n\nKnown calibrators are the Sun, planets, radio stars (Virgo, Omega, Orion) and anything in the catalogues of --cal-dir.")]
    Calibrator(String),

    /// An error related to calibrator catalogue files.
    #[error("{0}")]
    Catalogue(String),

    /// An error related to frequencies and other quantities with units.
    #[error("{0}\n\nFrequencies may be given in Hz, kHz, MHz or GHz (the default), or as a wavelength in m, cm or mm.")]
    Units(String),

    /// An error related to times.
    #[error("{0}\n\nTimes may be 'now', an MJD (UTC) or a date like '2012-06-06T01:00:00 UTC'.")]
    Epoch(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files may be toml or json.")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

// Binary sub-command errors.

impl From<AntennaTempArgsError> for RadioAstronomyError {
    fn from(e: AntennaTempArgsError) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<CalibratorFluxArgsError> for RadioAstronomyError {
    fn from(e: CalibratorFluxArgsError) -> Self {
        match e {
            CalibratorFluxArgsError::NoSources | CalibratorFluxArgsError::NoFrequencies => {
                Self::Generic(e.to_string())
            }
            CalibratorFluxArgsError::UnknownOutputType(_) => Self::Catalogue(e.to_string()),
        }
    }
}

impl From<CatalogueConvertArgsError> for RadioAstronomyError {
    fn from(e: CatalogueConvertArgsError) -> Self {
        Self::Catalogue(e.to_string())
    }
}

// Library code errors.

impl From<FormulaError> for RadioAstronomyError {
    fn from(e: FormulaError) -> Self {
        Self::Formula(e.to_string())
    }
}

impl From<EphemerisError> for RadioAstronomyError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e.to_string())
    }
}

impl From<CalibratorError> for RadioAstronomyError {
    fn from(e: CalibratorError) -> Self {
        match e {
            CalibratorError::UnknownSource(_)
            | CalibratorError::NoBrightnessModel(_)
            | CalibratorError::NoFluxDensities(_)
            | CalibratorError::NonPositiveFlux { .. } => Self::Calibrator(e.to_string()),
            CalibratorError::Ephemeris(e) => Self::from(e),
            CalibratorError::Formula(e) => Self::from(e),
            CalibratorError::Vla(e) => Self::from(e),
            CalibratorError::Michigan(e) => Self::from(e),
        }
    }
}

impl From<VlaCatalogueError> for RadioAstronomyError {
    fn from(e: VlaCatalogueError) -> Self {
        match e {
            VlaCatalogueError::IO(e) => Self::from(e),
            _ => Self::Catalogue(e.to_string()),
        }
    }
}

impl From<MichiganError> for RadioAstronomyError {
    fn from(e: MichiganError) -> Self {
        match e {
            MichiganError::IO(e) => Self::from(e),
            _ => Self::Catalogue(e.to_string()),
        }
    }
}

impl From<UnitParseError> for RadioAstronomyError {
    fn from(e: UnitParseError) -> Self {
        Self::Units(e.to_string())
    }
}

impl From<std::io::Error> for RadioAstronomyError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<serde_json::Error> for RadioAstronomyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<serde_yaml::Error> for RadioAstronomyError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<toml::ser::Error> for RadioAstronomyError {
    fn from(e: toml::ser::Error) -> Self {
        Self::ArgFile(e.to_string())
    }
}
