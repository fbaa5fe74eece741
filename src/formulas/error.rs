// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors for formula inputs outside of their physical domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    #[error("Aperture efficiency {0} is outside the range 0 <= efficiency <= 1")]
    EfficiencyOutOfRange(f64),

    #[error("{quantity} must be positive and finite, but got {value}")]
    NonPositive { quantity: &'static str, value: f64 },

    #[error("{quantity} must not be negative, but got {value}")]
    Negative { quantity: &'static str, value: f64 },

    #[error("{quantity} must be finite, but got {value}")]
    NotFinite { quantity: &'static str, value: f64 },
}
