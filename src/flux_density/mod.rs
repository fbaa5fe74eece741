// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Flux density structures and spectral models.


use log::{log_enabled, trace, Level::Trace};
use serde::{Deserialize, Serialize, Serializer};
use strum_macros::{Display, EnumIter, EnumString};
use vec1::Vec1;

use crate::{
    constants::{DEFAULT_SPEC_INDEX, SPEC_INDEX_CAP},
    math::linear_fit,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
/// A total-intensity flux density at a frequency.
pub struct FluxDensity {
    /// The frequency that this flux density applies to \[GHz\]
    pub freq_ghz: f64,

    /// The flux density \[Jy\]
    pub flux_jy: f64,
}

impl FluxDensity {
    /// Given two flux densities, calculate the spectral index that fits them.
    pub(crate) fn calc_spec_index(&self, fd2: &Self) -> f64 {
        (fd2.flux_jy / self.flux_jy).ln() / (fd2.freq_ghz / self.freq_ghz).ln()
    }
}

impl std::ops::Mul<f64> for FluxDensity {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        FluxDensity {
            freq_ghz: self.freq_ghz,
            flux_jy: self.flux_jy * rhs,
        }
    }
}

/// How a list of flux densities should be turned into a flux density at an
/// arbitrary frequency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum FluxInterpolation {
    /// Use the spectral index between the two entries bracketing (or nearest
    /// to) the frequency.
    #[default]
    SpectralIndex,

    /// Fit a single straight line (flux density against frequency) through
    /// all entries. Where the line isn't positive, the spectral index is used.
    LinearFit,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluxDensityModel {
    /// A list of flux densities specified at multiple frequencies.
    /// Interpolation/extrapolation is needed to get flux densities at
    /// non-specified frequencies.
    #[serde(serialize_with = "sort_vector")]
    List(Vec1<FluxDensity>),

    /// $S_\nu = a \nu^{\alpha}$
    PowerLaw {
        /// Spectral index (alpha)
        si: f64,
        /// Flux density (a)
        fd: FluxDensity,
    },

    /// Similar to a power law. See Callingham et al. 2017, section 4.1.
    ///
    /// S_\nu = a \nu^{\alpha} e^{q(\ln{\nu})^2}
    CurvedPowerLaw {
        /// Spectral index (alpha)
        si: f64,
        /// Flux density (a)
        fd: FluxDensity,
        /// Spectral curvature (q)
        q: f64,
    },
}

impl FluxDensityModel {
    /// Make a list model from unsorted flux densities. `None` if there are
    /// none. Only the first flux density at any frequency is kept.
    pub fn from_unsorted(mut fds: Vec<FluxDensity>) -> Option<FluxDensityModel> {
        fds.sort_by(|a, b| a.freq_ghz.total_cmp(&b.freq_ghz));
        fds.dedup_by(|later, earlier| (later.freq_ghz - earlier.freq_ghz).abs() < 1e-9);
        Vec1::try_from_vec(fds).ok().map(FluxDensityModel::List)
    }

    /// Given flux density information, estimate the flux density at a
    /// particular frequency. For power laws / curved power laws, the "ratio" of
    /// the reference frequency and the specified frequencies is used to scale
    /// the reference flux density.
    ///
    /// If enum variant is FluxDensityModel::List, then the entries must be
    /// sorted by frequency (which is the case if the list was made with
    /// [`FluxDensityModel::from_unsorted`] or deserialised from a catalogue
    /// cache).
    pub fn estimate_at_freq(&self, freq_ghz: f64) -> FluxDensity {
        let we_should_trace_log = log_enabled!(Trace);

        match self {
            FluxDensityModel::PowerLaw { si, fd } => {
                let ratio = calc_flux_ratio(freq_ghz, fd.freq_ghz, *si);
                let mut new_fd = *fd * ratio;
                new_fd.freq_ghz = freq_ghz;
                new_fd
            }

            FluxDensityModel::CurvedPowerLaw { si, fd, q } => {
                let mut power_law_component = *fd * calc_flux_ratio(freq_ghz, fd.freq_ghz, *si);
                power_law_component.freq_ghz = freq_ghz;
                let curved_component = (q * (freq_ghz / fd.freq_ghz).ln().powi(2)).exp();
                power_law_component * curved_component
            }

            FluxDensityModel::List(fds) => {
                // `smaller_flux_density` is a bad name given to the flux
                // density corresponding to a frequency smaller than but
                // nearest to the specified frequency.
                let (spec_index, smaller_flux_density) = {
                    // If there's only one flux density, then we must assume
                    // the spectral index for extrapolation.
                    if fds.len() == 1 {
                        if we_should_trace_log {
                            trace!("Only one flux density in a list; extrapolating with spectral index {}", DEFAULT_SPEC_INDEX);
                        }
                        (DEFAULT_SPEC_INDEX, &fds[0])
                    }
                    // Otherwise, find the two `FluxDensity`s closest to the
                    // given frequency.
                    else {
                        let mut pair: (&FluxDensity, &FluxDensity) = (&fds[0], &fds[1]);
                        for window in fds.windows(2) {
                            pair = (&window[0], &window[1]);

                            // If either element's and the specified freq are the same...
                            if (window[0].freq_ghz - freq_ghz).abs() < 1e-9 {
                                // ... then just return the flux density
                                // information from this frequency.
                                return window[0];
                            }
                            if (window[1].freq_ghz - freq_ghz).abs() < 1e-9 {
                                return window[1];
                            }
                            // If the specified freq is smaller than the second
                            // element...
                            if freq_ghz < window[1].freq_ghz {
                                // ... we're done.
                                break;
                            }
                        }

                        // We now have the two relevant flux densities (on
                        // either side of the target frequency, or the two
                        // closest to the target frequency). If one is positive
                        // and one negative (or either is zero), we have to use
                        // a linear fit, not a spectral index.
                        let (fd1, fd2) = pair;
                        if fd1.flux_jy.signum() != fd2.flux_jy.signum()
                            || fd1.flux_jy == 0.0
                            || fd2.flux_jy == 0.0
                        {
                            let slope = (fd2.flux_jy - fd1.flux_jy) / (fd2.freq_ghz - fd1.freq_ghz);
                            return FluxDensity {
                                freq_ghz,
                                flux_jy: fd1.flux_jy + slope * (freq_ghz - fd1.freq_ghz),
                            };
                        }

                        let spec_index = fd1.calc_spec_index(fd2);

                        // Report stupid spectral indices.
                        if spec_index < SPEC_INDEX_CAP && we_should_trace_log {
                            trace!("Flux densities have a spectral index {} !", spec_index);
                        }

                        (
                            spec_index,
                            // If our last frequency is smaller than the
                            // specified freq., then we should use that for flux
                            // densities.
                            if fd2.freq_ghz < freq_ghz { fd2 } else { fd1 },
                        )
                    }
                };

                // Now scale the flux densities given the calculated
                // spectral index.
                let flux_ratio =
                    calc_flux_ratio(freq_ghz, smaller_flux_density.freq_ghz, spec_index);
                FluxDensity {
                    freq_ghz,
                    ..*smaller_flux_density
                } * flux_ratio
            }
        }
    }

    /// Estimate the flux density \[Jy\] at a frequency with the requested
    /// interpolation. Only lists are affected by the choice of
    /// interpolation.
    pub fn estimate_flux(&self, freq_ghz: f64, interpolation: FluxInterpolation) -> f64 {
        match (self, interpolation) {
            (FluxDensityModel::List(fds), FluxInterpolation::LinearFit) => {
                match linear_fit_estimate(fds, freq_ghz) {
                    Some(flux_jy) if flux_jy > 0.0 => flux_jy,
                    // The line crosses zero away from the measurements.
                    _ => self.estimate_at_freq(freq_ghz).flux_jy,
                }
            }
            _ => self.estimate_at_freq(freq_ghz).flux_jy,
        }
    }
}

/// Fit a straight line through all of the flux densities and evaluate it at
/// a frequency. `None` if there are no flux densities; a single flux density
/// (or flux densities all at one frequency) give back the first flux density.
pub fn linear_fit_estimate(fds: &[FluxDensity], freq_ghz: f64) -> Option<f64> {
    let first = fds.first()?;
    let freqs: Vec<f64> = fds.iter().map(|fd| fd.freq_ghz).collect();
    let fluxes: Vec<f64> = fds.iter().map(|fd| fd.flux_jy).collect();
    match linear_fit(&freqs, &fluxes) {
        Some((slope, intercept)) => Some(slope * freq_ghz + intercept),
        None => Some(first.flux_jy),
    }
}

/// Given a spectral index, determine the flux-density ratio of two frequencies.
pub(crate) fn calc_flux_ratio(desired_freq: f64, cat_freq: f64, spec_index: f64) -> f64 {
    (desired_freq / cat_freq).powf(spec_index)
}

fn sort_vector<S>(value: &Vec1<FluxDensity>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut value = value.clone();
    value.sort_unstable_by(|a, b| a.freq_ghz.total_cmp(&b.freq_ghz));
    value.serialize(serializer)
}

#[cfg(test)]
impl approx::AbsDiffEq for FluxDensity {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.freq_ghz, &other.freq_ghz, epsilon)
            && f64::abs_diff_eq(&self.flux_jy, &other.flux_jy, epsilon)
    }
}
