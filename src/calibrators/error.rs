// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::{ephemeris::EphemerisError, formulas::FormulaError, SolarSystemBody};

/// Errors associated with looking up the flux density of a calibrator.
#[derive(Error, Debug)]
pub enum CalibratorError {
    #[error("Unknown calibrator '{0}'")]
    UnknownSource(String),

    #[error("{0} has no brightness-temperature model")]
    NoBrightnessModel(SolarSystemBody),

    #[error("Calibrator '{0}' has no usable flux densities")]
    NoFluxDensities(String),

    #[error("The flux density of '{name}' at {freq_ghz} GHz was estimated as {flux_jy} Jy; refusing to use it")]
    NonPositiveFlux {
        name: String,
        freq_ghz: f64,
        flux_jy: f64,
    },

    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),

    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error(transparent)]
    Vla(#[from] VlaCatalogueError),

    #[error(transparent)]
    Michigan(#[from] MichiganError),
}

/// Errors associated with reading or writing the VLA calibrator catalogue.
#[derive(Error, Debug)]
pub enum VlaCatalogueError {
    #[error("VLA catalogue line {line_num}: Couldn't parse '{string}' as a right ascension")]
    BadRa { line_num: u32, string: String },

    #[error("VLA catalogue line {line_num}: Couldn't parse '{string}' as a declination")]
    BadDec { line_num: u32, string: String },

    #[error("VLA catalogue line {0}: A J2000 line needs a name and coordinates")]
    IncompleteJ2000Line(u32),

    #[error("VLA catalogue line {line_num}: Couldn't parse '{string}' as a band wavelength")]
    BadWavelength { line_num: u32, string: String },

    #[error("VLA catalogue line {0}: Found catalogue data outside of a source block")]
    OutsideSource(u32),

    #[error("Catalogue file '{0}' must have a json, yaml or yml extension")]
    UnknownCacheType(String),

    #[error("Could not deserialise the contents as yaml or json.\n\nyaml error: {yaml_err}\n\njson error: {json_err}")]
    FailedToDeserialise { yaml_err: String, json_err: String },

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// Errors associated with University of Michigan monitoring tables.
#[derive(Error, Debug)]
pub enum MichiganError {
    #[error("Michigan table line {line_num}: Expected 6 columns, but found {found}")]
    IncompleteRow { line_num: u32, found: usize },

    #[error("Michigan table line {line_num}: Couldn't parse '{string}' as a number")]
    ParseFloat { line_num: u32, string: String },

    #[error("Michigan table for {0} contains no measurements")]
    NoData(String),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
