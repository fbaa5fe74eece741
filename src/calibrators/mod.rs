// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Flux densities of calibrators.
//!
//! A calibrator is looked up by name. Solar-system bodies are tried first,
//! then the radio stars, then the Michigan monitoring tables and finally the
//! VLA calibrator manual. A Michigan table is skipped outside of its
//! monitoring frequencies if the VLA manual has flux densities for the same
//! source. The catalogues are optional; without them, only bodies and radio
//! stars can be used.
//!
//! Estimated flux densities are always positive; a lookup that can't
//! manage this is an error.

mod error;
pub mod michigan;
pub mod planets;
pub mod radio_stars;
#[cfg(test)]
mod tests;
pub mod vla;

pub use error::{CalibratorError, MichiganError, VlaCatalogueError};
pub use michigan::MichiganCatalogue;
pub use planets::{planet_flux, BrightnessTemperature, PlanetFlux};
pub use radio_stars::RadioStar;
pub use vla::VlaCatalogue;

use std::{path::Path, str::FromStr};

use hifitime::Epoch;
use log::{debug, trace};
use serde::Serialize;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::{flux_density::FluxInterpolation, formulas::check_positive, SolarSystemBody};

/// Names of VLA catalogue files looked for in a calibrator directory, in order
/// of preference.
pub const VLA_CATALOGUE_FILES: [&str; 4] = [
    "vla_calibrators.json",
    "vla_calibrators.yaml",
    "csource.html",
    "csource.txt",
];

/// The subdirectory of a calibrator directory containing Michigan tables.
pub const MICHIGAN_DIR: &str = "michigan";

/// Where a calibrator flux density came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr, Serialize)]
pub enum FluxOrigin {
    Planet,
    #[strum(serialize = "Radio star")]
    RadioStar,
    Michigan,
    #[strum(serialize = "VLA")]
    Vla,
}

/// The flux density of a calibrator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalibratorFlux {
    /// The name the calibrator was found under, e.g. "Venus" or "1331+305".
    pub name: String,

    /// \[GHz\]
    pub freq_ghz: f64,

    /// \[Jy\]
    pub flux_jy: f64,

    pub origin: FluxOrigin,
}

/// Calibrator reference data.
#[derive(Debug, Clone, Default)]
pub struct CalibratorCatalogue {
    pub vla: Option<VlaCatalogue>,

    pub michigan: Option<MichiganCatalogue>,

    /// How VLA flux densities are interpolated.
    pub interpolation: FluxInterpolation,
}

impl CalibratorCatalogue {
    /// A catalogue that only knows about solar-system bodies and radio stars.
    pub fn new() -> CalibratorCatalogue {
        CalibratorCatalogue::default()
    }

    pub fn with_vla(mut self, vla: VlaCatalogue) -> CalibratorCatalogue {
        self.vla = Some(vla);
        self
    }

    pub fn with_michigan(mut self, michigan: MichiganCatalogue) -> CalibratorCatalogue {
        self.michigan = Some(michigan);
        self
    }

    pub fn with_interpolation(mut self, interpolation: FluxInterpolation) -> CalibratorCatalogue {
        self.interpolation = interpolation;
        self
    }

    /// Load whatever catalogues are in a calibrator directory. The first of
    /// [`VLA_CATALOGUE_FILES`] that exists is used for the VLA catalogue, and
    /// Michigan tables are read from [`MICHIGAN_DIR`]. Neither has to exist.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<CalibratorCatalogue, CalibratorError> {
        fn inner(dir: &Path) -> Result<CalibratorCatalogue, CalibratorError> {
            let mut cat = CalibratorCatalogue::new();

            match VLA_CATALOGUE_FILES
                .iter()
                .map(|f| dir.join(f))
                .find(|p| p.is_file())
            {
                Some(path) => cat.vla = Some(vla::read_catalogue_file(path, None)?),
                None => debug!("No VLA catalogue in {}", dir.display()),
            }

            let michigan_dir = dir.join(MICHIGAN_DIR);
            if michigan_dir.is_dir() {
                cat.michigan = Some(MichiganCatalogue::read_dir(michigan_dir)?);
            } else {
                debug!("No Michigan tables in {}", dir.display());
            }

            Ok(cat)
        }
        inner(dir.as_ref())
    }

    /// Get the flux density of a calibrator at a frequency \[GHz\] and epoch.
    pub fn flux(
        &self,
        source: &str,
        freq_ghz: f64,
        epoch: Epoch,
    ) -> Result<CalibratorFlux, CalibratorError> {
        let freq_ghz = check_positive("Frequency", freq_ghz)?;
        let source = source.trim();
        debug!("Looking up {source} at {freq_ghz} GHz for {epoch}");

        if let Ok(body) = SolarSystemBody::from_str(source) {
            let pf = planet_flux(body, freq_ghz, epoch)?;
            return Ok(CalibratorFlux {
                name: body.to_string(),
                freq_ghz,
                flux_jy: pf.flux_jy,
                origin: FluxOrigin::Planet,
            });
        }

        if let Ok(star) = RadioStar::from_str(source) {
            return Ok(CalibratorFlux {
                name: star.to_string(),
                freq_ghz,
                flux_jy: star.flux(freq_ghz),
                origin: FluxOrigin::RadioStar,
            });
        }

        let vla_entry = self.vla.as_ref().and_then(|vla| vla.get(source));
        trace!("VLA entry for {source}: {vla_entry:?}");
        let vla_model = vla_entry.and_then(|(j_name, src)| Some((j_name, src.flux_model()?)));

        // The Michigan tables are keyed by B1950 name. Outside of the
        // monitoring frequencies, the VLA manual is preferred.
        if let Some(michigan) = &self.michigan {
            let table = vla_entry
                .and_then(|(_, src)| src.b_name.as_deref())
                .and_then(|b_name| michigan.get(b_name))
                .or_else(|| michigan.get(source));
            match table {
                Some(table) if table.covers(freq_ghz) || vla_model.is_none() => {
                    let flux_jy = table.flux_at(epoch, freq_ghz);
                    if flux_jy > 0.0 && flux_jy.is_finite() {
                        return Ok(CalibratorFlux {
                            name: table.source_name.clone(),
                            freq_ghz,
                            flux_jy,
                            origin: FluxOrigin::Michigan,
                        });
                    }
                    if vla_model.is_none() {
                        return Err(CalibratorError::NonPositiveFlux {
                            name: table.source_name.clone(),
                            freq_ghz,
                            flux_jy,
                        });
                    }
                    debug!(
                        "Michigan estimate for {} is {flux_jy} Jy; using the VLA manual",
                        table.source_name
                    );
                }
                Some(table) => {
                    let (low, high) = table.freq_range();
                    debug!(
                        "{freq_ghz} GHz is outside of the {low}-{high} GHz monitoring of {}; using the VLA manual",
                        table.source_name
                    );
                }
                None => (),
            }
        }

        if let Some((j_name, model)) = vla_model {
            let flux_jy = model.estimate_flux(freq_ghz, self.interpolation);
            if !(flux_jy > 0.0 && flux_jy.is_finite()) {
                return Err(CalibratorError::NonPositiveFlux {
                    name: j_name.to_string(),
                    freq_ghz,
                    flux_jy,
                });
            }
            return Ok(CalibratorFlux {
                name: j_name.to_string(),
                freq_ghz,
                flux_jy,
                origin: FluxOrigin::Vla,
            });
        }
        if let Some((j_name, _)) = vla_entry {
            return Err(CalibratorError::NoFluxDensities(j_name.to_string()));
        }

        Err(CalibratorError::UnknownSource(source.to_string()))
    }
}

/// Get the flux density of a solar-system body or radio star at a frequency
/// \[GHz\] and epoch. Use a [`CalibratorCatalogue`] to look up other
/// calibrators.
pub fn calibrator_flux(
    source: &str,
    freq_ghz: f64,
    epoch: Epoch,
) -> Result<CalibratorFlux, CalibratorError> {
    CalibratorCatalogue::new().flux(source, freq_ghz, epoch)
}
