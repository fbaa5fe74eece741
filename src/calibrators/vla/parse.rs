// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parsing of the VLA calibrator manual's source listing.
//!
//! Each source is a block separated from its neighbours by a blank line:
//!
//! ```text
//! 0001+192   J2000  A 00h01m08.621563s  19d14'33.801860"  Aug01  JVAS
//! 2358+189   B1950  A 23h58m34.865400s  18d57'51.753000"
//! -----------------------------------------------------
//! BAND        A B C D    FLUX(Jy)    UVMIN(kL)  UVMAX(kL)
//! =====================================================
//!  0.7cm    Q  W W W W       0.18
//! ```

use indexmap::IndexMap;
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use super::{VlaCatalogue, VlaSource};
use crate::calibrators::VlaCatalogueError;

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<.*?>").unwrap();
    static ref HMS: Regex = Regex::new(r"^(\d+)h(\d+)m(\d+(?:\.\d*)?)s$").unwrap();
    static ref DMS: Regex = Regex::new(r#"^([+-]?)(\d+)d(\d+)'(\d+(?:\.\d*)?)"$"#).unwrap();
}

/// Parse a sexagesimal right ascension like "13h31m08.287984s" into hours.
pub(super) fn parse_hms(s: &str) -> Option<f64> {
    let caps = HMS.captures(s)?;
    let h: f64 = caps[1].parse().ok()?;
    let m: f64 = caps[2].parse().ok()?;
    let sec: f64 = caps[3].parse().ok()?;
    Some(h + m / 60.0 + sec / 3600.0)
}

/// Parse a sexagesimal declination like `-05d12'33.1"` into degrees.
pub(super) fn parse_dms(s: &str) -> Option<f64> {
    let caps = DMS.captures(s)?;
    let d: f64 = caps[2].parse().ok()?;
    let m: f64 = caps[3].parse().ok()?;
    let sec: f64 = caps[4].parse().ok()?;
    let magnitude = d + m / 60.0 + sec / 3600.0;
    Some(if &caps[1] == "-" { -magnitude } else { magnitude })
}

/// Parse the VLA calibrator manual's source listing into a [`VlaCatalogue`].
/// Anything before the first source block (titles, links, column headings)
/// is ignored.
pub fn parse_catalogue<T: std::io::BufRead>(
    buf: &mut T,
) -> Result<VlaCatalogue, VlaCatalogueError> {
    let mut sources: IndexMap<String, VlaSource> = IndexMap::new();
    let mut current: Option<(String, VlaSource)> = None;
    let mut in_flux_table = false;
    let mut line = String::new();
    let mut line_num: u32 = 0;

    while buf.read_line(&mut line)? > 0 {
        line_num += 1;
        let stripped = HTML_TAG.replace_all(&line, "").into_owned();
        let items: Vec<&str> = stripped.split_whitespace().collect();

        match items.as_slice() {
            // A blank line finishes the current source block.
            [] => {
                if let Some((name, src)) = current.take() {
                    sources.insert(name, src);
                }
                in_flux_table = false;
            }

            [name, "J2000", rest @ ..] => {
                if let Some((prev_name, prev_src)) = current.take() {
                    sources.insert(prev_name, prev_src);
                }
                in_flux_table = false;

                let (ra, dec) = match rest {
                    [_, ra, dec, ..] => (*ra, *dec),
                    _ => return Err(VlaCatalogueError::IncompleteJ2000Line(line_num)),
                };
                let ra_hours = parse_hms(ra).ok_or_else(|| VlaCatalogueError::BadRa {
                    line_num,
                    string: ra.to_string(),
                })?;
                let dec_deg = parse_dms(dec).ok_or_else(|| VlaCatalogueError::BadDec {
                    line_num,
                    string: dec.to_string(),
                })?;

                // After the coordinates come the date of the position and any
                // alternative names.
                let mut cat_3c = None;
                for alt_name in rest.iter().skip(3) {
                    if alt_name
                        .get(..2)
                        .map_or(false, |p| p.eq_ignore_ascii_case("3C"))
                    {
                        cat_3c = Some(alt_name.to_uppercase());
                    } else {
                        trace!("{name} has alternative name or note '{alt_name}'");
                    }
                }

                current = Some((
                    name.to_string(),
                    VlaSource {
                        ra_hours,
                        dec_deg,
                        cat_3c,
                        ..Default::default()
                    },
                ));
            }

            [b_name, "B1950", ..] => match current.as_mut() {
                Some((_, src)) => src.b_name = Some(b_name.to_string()),
                None => return Err(VlaCatalogueError::OutsideSource(line_num)),
            },

            [first, ..] if first.starts_with("--") || first.starts_with("BAND") => (),

            [first, ..] if first.starts_with("==") => {
                if current.is_some() {
                    in_flux_table = true;
                }
            }

            [band, rest @ ..] if in_flux_table => {
                let Some((name, src)) = current.as_mut() else {
                    return Err(VlaCatalogueError::OutsideSource(line_num));
                };
                let wavelength_cm: f64 = band
                    .strip_suffix("cm")
                    .and_then(|w| w.parse().ok())
                    .ok_or_else(|| VlaCatalogueError::BadWavelength {
                        line_num,
                        string: band.to_string(),
                    })?;
                let wavelength_mm = (wavelength_cm * 10.0).round() as u32;

                // Columns: band code, four array-configuration qualities, then
                // the flux density.
                match rest.get(5).map(|f| f.parse::<f64>()) {
                    Some(Ok(flux)) => {
                        src.fluxes.insert(wavelength_mm, flux);
                    }
                    Some(Err(_)) | None => {
                        debug!("VLA catalogue line {line_num}: no flux density for {name} at {band}")
                    }
                }
            }

            _ => trace!("VLA catalogue line {line_num}: ignoring '{}'", stripped.trim_end()),
        }

        line.clear();
    }
    if let Some((name, src)) = current.take() {
        sources.insert(name, src);
    }

    debug!("{} VLA calibrators parsed", sources.len());
    Ok(VlaCatalogue::new(sources))
}
