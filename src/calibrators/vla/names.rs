// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Approximate matching of IAU source designations.
//!
//! Astronomers don't always use the same number of declination digits as the
//! catalogue (e.g. 1012+53 or 1012+5307 for 1012+531).

use log::trace;

/// The length of a catalogue IAU name, e.g. "1331+305".
const IAU_NAME_LEN: usize = 8;

/// Split an IAU name into its right ascension, declination sign and
/// declination digits.
fn iau_name_parts(name: &str) -> Option<(&str, char, &str)> {
    let sign_index = name.find(['+', '-'])?;
    let sign = name[sign_index..].chars().next()?;
    Some((&name[..sign_index], sign, &name[sign_index + 1..]))
}

/// Match an IAU name with the wrong number of declination digits to one of
/// the catalogue names. The RA parts must be identical and the declinations,
/// after rounding the longer one to the length of the shorter, must differ by
/// less than 2 in the last digit.
pub fn match_iau_name<'a, I>(name: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let missing = IAU_NAME_LEN as i32 - name.len() as i32;
    if missing == 0 {
        return candidates.into_iter().find(|&c| c == name);
    }

    let (name_ra, name_sign, name_dec) = iau_name_parts(name)?;
    let name_dec: f64 = name_dec.parse().ok()?;
    let factor = 10_f64.powi(missing);
    trace!("Matching IAU name {name}: {missing} digits short");

    candidates.into_iter().find(|&candidate| {
        let Some((key_ra, key_sign, key_dec)) = iau_name_parts(candidate) else {
            return false;
        };
        let Ok(key_dec) = key_dec.parse::<f64>() else {
            return false;
        };
        if key_ra != name_ra || key_sign != name_sign {
            return false;
        }
        let diff = if missing > 0 {
            // The name is too short; round the catalogue name.
            name_dec - (key_dec / factor).round()
        } else {
            // The name is too long; round it.
            (name_dec * factor).round() - key_dec
        };
        diff.abs() < 2.0
    })
}
