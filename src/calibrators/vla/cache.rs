// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reading and writing VLA catalogue files.
//!
//! A parsed catalogue can be cached as json or yaml, which is much quicker to
//! read than the manual's listing. The cross-references are rebuilt when a
//! cache is read.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use indexmap::IndexMap;
use log::{debug, trace};
use strum_macros::{Display, EnumIter, EnumString};

use super::{parse_catalogue, VlaCatalogue, VlaSource};
use crate::calibrators::VlaCatalogueError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum VlaCatalogueFileType {
    /// The listing from the VLA calibrator manual.
    Manual,
    Json,
    Yaml,
}

impl VlaCatalogueFileType {
    /// Guess the type of a catalogue file from its extension. Anything that
    /// isn't json or yaml is treated as the manual's listing.
    pub fn from_path(path: &Path) -> VlaCatalogueFileType {
        let ext = path
            .extension()
            .and_then(|os_str| os_str.to_str())
            .map(|s| s.to_lowercase());
        match ext.as_deref() {
            Some("json") => VlaCatalogueFileType::Json,
            Some("yaml" | "yml") => VlaCatalogueFileType::Yaml,
            _ => VlaCatalogueFileType::Manual,
        }
    }
}

pub(super) fn catalogue_from_json<T: std::io::Read>(
    buf: T,
) -> Result<VlaCatalogue, VlaCatalogueError> {
    let sources: IndexMap<String, VlaSource> = serde_json::from_reader(buf)?;
    Ok(VlaCatalogue::new(sources))
}

pub(super) fn catalogue_from_yaml<T: std::io::Read>(
    buf: T,
) -> Result<VlaCatalogue, VlaCatalogueError> {
    let sources: IndexMap<String, VlaSource> = serde_yaml::from_reader(buf)?;
    Ok(VlaCatalogue::new(sources))
}

/// Read a VLA catalogue file. If the type isn't given, it is determined from
/// the file's extension.
pub fn read_catalogue_file<P: AsRef<Path>>(
    path: P,
    file_type: Option<VlaCatalogueFileType>,
) -> Result<VlaCatalogue, VlaCatalogueError> {
    fn inner(
        path: &Path,
        file_type: Option<VlaCatalogueFileType>,
    ) -> Result<VlaCatalogue, VlaCatalogueError> {
        let file_type = file_type.unwrap_or_else(|| VlaCatalogueFileType::from_path(path));
        debug!("Reading VLA catalogue {} as {file_type}", path.display());
        let mut f = BufReader::new(File::open(path)?);
        match file_type {
            VlaCatalogueFileType::Manual => parse_catalogue(&mut f),
            VlaCatalogueFileType::Json => catalogue_from_json(f),
            VlaCatalogueFileType::Yaml => catalogue_from_yaml(f),
        }
    }
    inner(path.as_ref(), file_type)
}

/// Write a VLA catalogue to a json or yaml file, depending on the extension.
pub fn write_catalogue_file<P: AsRef<Path>>(
    path: P,
    catalogue: &VlaCatalogue,
) -> Result<(), VlaCatalogueError> {
    fn inner(path: &Path, catalogue: &VlaCatalogue) -> Result<(), VlaCatalogueError> {
        match VlaCatalogueFileType::from_path(path) {
            VlaCatalogueFileType::Json => {
                let mut f = BufWriter::new(File::create(path)?);
                serde_json::to_writer_pretty(&mut f, catalogue.sources())?;
                f.flush()?;
            }
            VlaCatalogueFileType::Yaml => {
                let mut f = BufWriter::new(File::create(path)?);
                serde_yaml::to_writer(&mut f, catalogue.sources())?;
                f.flush()?;
            }
            VlaCatalogueFileType::Manual => {
                return Err(VlaCatalogueError::UnknownCacheType(
                    path.display().to_string(),
                ))
            }
        }
        trace!(
            "Wrote {} VLA sources to {}",
            catalogue.len(),
            path.display()
        );
        Ok(())
    }
    inner(path.as_ref(), catalogue)
}

/// Read a cached catalogue whose format isn't known, trying json and then
/// yaml.
pub fn catalogue_from_cache<T: std::io::BufRead + std::io::Seek>(
    buf: &mut T,
) -> Result<VlaCatalogue, VlaCatalogueError> {
    let json_err = match catalogue_from_json(&mut *buf) {
        Ok(cat) => return Ok(cat),
        Err(e @ VlaCatalogueError::Json(_)) => e.to_string(),
        Err(e) => return Err(e),
    };
    buf.rewind()?;
    let yaml_err = match catalogue_from_yaml(&mut *buf) {
        Ok(cat) => return Ok(cat),
        Err(e @ VlaCatalogueError::Yaml(_)) => e.to_string(),
        Err(e) => return Err(e),
    };
    Err(VlaCatalogueError::FailedToDeserialise { yaml_err, json_err })
}
