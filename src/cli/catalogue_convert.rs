// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Convert the VLA calibrator manual's listing into a quicker-to-read cache.

use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use itertools::Itertools;
use log::{debug, info};
use strum::IntoEnumIterator;

use super::common::InfoPrinter;
use crate::{
    calibrators::vla::{read_catalogue_file, write_catalogue_file, VlaCatalogueFileType},
    RadioAstronomyError,
};

lazy_static::lazy_static! {
    static ref INPUT_TYPE_HELP: String =
        format!("The type of the input catalogue. If not specified, it is determined from the file extension. Supported types: {}",
                VlaCatalogueFileType::iter().join(", "));
}

#[derive(Parser, Debug, Clone, Default)]
pub(super) struct CatalogueConvertArgs {
    /// Path to the VLA catalogue to read.
    #[clap(name = "INPUT_CATALOGUE", parse(from_os_str))]
    input: PathBuf,

    /// Path to the catalogue to write; json or yaml. If not given, the input is
    /// only checked.
    #[clap(name = "OUTPUT_CATALOGUE", parse(from_os_str))]
    output: Option<PathBuf>,

    #[clap(short, long, help = INPUT_TYPE_HELP.as_str())]
    input_type: Option<String>,
}

impl CatalogueConvertArgs {
    pub(super) fn run(self) -> Result<(), RadioAstronomyError> {
        debug!("{:#?}", self);
        let Self {
            input,
            output,
            input_type,
        } = self;

        let input_type = match input_type {
            Some(t) => Some(
                VlaCatalogueFileType::from_str(&t.to_lowercase())
                    .map_err(|_| CatalogueConvertArgsError::UnknownInputType(t))?,
            ),
            None => None,
        };
        let catalogue = read_catalogue_file(&input, input_type)?;
        if catalogue.is_empty() {
            return Err(CatalogueConvertArgsError::Empty(input.display().to_string()).into());
        }

        let mut printer = InfoPrinter::new(format!("Read {}", input.display()).into());
        printer.push_line(format!("{} sources", catalogue.len()).into());
        printer.push_line(format!("{} with B1950 names", catalogue.b_names().len()).into());
        printer.push_line(format!("{} with 3C names", catalogue.cat_3c_names().len()).into());
        let num_without_fluxes = catalogue
            .sources()
            .values()
            .filter(|s| s.flux_densities().is_empty())
            .count();
        if num_without_fluxes > 0 {
            printer.push_line(format!("{num_without_fluxes} without flux densities").into());
        }
        printer.display();

        if let Some(output) = output {
            write_catalogue_file(&output, &catalogue)?;
            info!("Wrote {}", output.display());
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub(super) enum CatalogueConvertArgsError {
    #[error("Unrecognised catalogue type '{0}'")]
    UnknownInputType(String),

    #[error("No sources were found in '{0}'")]
    Empty(String),
}
