// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The VLA calibrator manual.
//!
//! Catalogue entries are keyed by their 8-character J2000 IAU names (e.g.
//! "1331+305"). B1950 names and 3C numbers are cross-referenced to these.
//! The catalogue is read from the text listing of the manual (HTML tags are
//! tolerated), or from a json/yaml cache written by this crate.

mod cache;
mod names;
mod parse;

pub use cache::{
    catalogue_from_cache, read_catalogue_file, write_catalogue_file, VlaCatalogueFileType,
};
pub use names::match_iau_name;
pub use parse::parse_catalogue;

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::flux_density::{FluxDensity, FluxDensityModel};

/// One calibrator from the VLA calibrator manual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VlaSource {
    /// J2000 right ascension \[hours\]
    pub ra_hours: f64,

    /// J2000 declination \[degrees\]
    pub dec_deg: f64,

    /// The B1950 IAU name, if listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b_name: Option<String>,

    /// The 3C catalogue name (e.g. "3C286"), if listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cat_3c: Option<String>,

    /// Flux densities \[Jy\] keyed by the band's wavelength \[mm\].
    #[serde(default)]
    pub fluxes: BTreeMap<u32, f64>,
}

impl VlaSource {
    /// The listed flux densities, sorted by frequency. The frequency of a band
    /// is 300 / wavelength \[mm\] GHz. Missing and zero flux densities are
    /// skipped.
    pub fn flux_densities(&self) -> Vec<FluxDensity> {
        let mut fds: Vec<FluxDensity> = self
            .fluxes
            .iter()
            .filter(|(&mm, &flux)| mm > 0 && flux != 0.0 && flux.is_finite())
            .map(|(&mm, &flux_jy)| FluxDensity {
                freq_ghz: 300.0 / f64::from(mm),
                flux_jy,
            })
            .collect();
        fds.sort_unstable_by(|a, b| a.freq_ghz.total_cmp(&b.freq_ghz));
        fds
    }

    /// A flux-density model built from the listed flux densities. `None` if
    /// nothing usable is listed.
    pub fn flux_model(&self) -> Option<FluxDensityModel> {
        FluxDensityModel::from_unsorted(self.flux_densities())
    }
}

/// The parsed VLA calibrator manual with its name cross-references.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VlaCatalogue {
    sources: IndexMap<String, VlaSource>,

    /// B1950 name -> J2000 name
    b_names: HashMap<String, String>,

    /// 3C name -> J2000 name
    cat_3c_names: HashMap<String, String>,
}

impl VlaCatalogue {
    pub fn new(sources: IndexMap<String, VlaSource>) -> VlaCatalogue {
        let mut b_names = HashMap::new();
        let mut cat_3c_names = HashMap::new();
        for (j_name, src) in &sources {
            if let Some(b_name) = &src.b_name {
                b_names.insert(b_name.clone(), j_name.clone());
            }
            if let Some(cat_3c) = &src.cat_3c {
                cat_3c_names.insert(cat_3c.to_uppercase(), j_name.clone());
            }
        }
        debug!(
            "VLA catalogue: {} sources, {} B1950 names, {} 3C names",
            sources.len(),
            b_names.len(),
            cat_3c_names.len()
        );
        VlaCatalogue {
            sources,
            b_names,
            cat_3c_names,
        }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// All sources, keyed by J2000 name, in catalogue order.
    pub fn sources(&self) -> &IndexMap<String, VlaSource> {
        &self.sources
    }

    /// The B1950 names cross-referenced to J2000 names.
    pub fn b_names(&self) -> &HashMap<String, String> {
        &self.b_names
    }

    /// The 3C names cross-referenced to J2000 names.
    pub fn cat_3c_names(&self) -> &HashMap<String, String> {
        &self.cat_3c_names
    }

    /// Find the J2000 catalogue name of a source. Understood forms are
    /// "J1331+305", "B1328+307", "3C286" and bare IAU names, which are tried
    /// as J2000 and then B1950 names. IAU names with too few or too many
    /// declination digits are matched approximately.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        let has_prefix = |prefix: &str| {
            name.get(..prefix.len())
                .map(|s| s.eq_ignore_ascii_case(prefix))
                .unwrap_or(false)
        };
        let iau_designation = |s: &str| {
            s.chars()
                .next()
                .map(|c| c.is_ascii_digit())
                .unwrap_or(false)
        };

        let resolved = if has_prefix("3C") {
            let key = name.to_uppercase().replace(' ', "");
            self.cat_3c_names.get(&key).map(|s| s.as_str())
        } else if has_prefix("J") && iau_designation(&name[1..]) {
            self.resolve_j(&name[1..])
        } else if has_prefix("B") && iau_designation(&name[1..]) {
            self.resolve_b(&name[1..])
        } else if iau_designation(name) {
            self.resolve_j(name).or_else(|| self.resolve_b(name))
        } else {
            None
        };
        trace!("VLA name '{name}' resolved to {resolved:?}");
        resolved
    }

    fn resolve_j(&self, name: &str) -> Option<&str> {
        if let Some((key, _)) = self.sources.get_key_value(name) {
            return Some(key.as_str());
        }
        match_iau_name(name, self.sources.keys().map(|s| s.as_str()))
    }

    fn resolve_b(&self, name: &str) -> Option<&str> {
        let b_name = match self.b_names.get_key_value(name) {
            Some((key, _)) => key.as_str(),
            None => match_iau_name(name, self.b_names.keys().map(|s| s.as_str()))?,
        };
        self.b_names.get(b_name).map(|s| s.as_str())
    }

    /// Get a source by any name that [`VlaCatalogue::resolve`] understands.
    /// The J2000 name is returned alongside the source.
    pub fn get(&self, name: &str) -> Option<(&str, &VlaSource)> {
        let j_name = self.resolve(name)?;
        self.sources
            .get_key_value(j_name)
            .map(|(k, v)| (k.as_str(), v))
    }
}
