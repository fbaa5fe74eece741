// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Keplerian mean orbital elements and their rates.
//!
//! Standish & Williams, "Approximate Positions of the Planets", table 1
//! (valid 1800 AD to 2050 AD). Referred to the mean ecliptic and equinox of
//! J2000.

use crate::math::{solve_kepler, wrap_degrees};

/// Mean orbital elements at J2000 with their rates per Julian century.
#[derive(Debug, Clone, Copy)]
pub(super) struct OrbitalElements {
    /// Semi-major axis \[AU\], AU/century
    pub(super) a: (f64, f64),
    /// Eccentricity, per century
    pub(super) e: (f64, f64),
    /// Inclination \[degrees\], degrees/century
    pub(super) i: (f64, f64),
    /// Mean longitude \[degrees\], degrees/century
    pub(super) l: (f64, f64),
    /// Longitude of perihelion \[degrees\], degrees/century
    pub(super) long_peri: (f64, f64),
    /// Longitude of the ascending node \[degrees\], degrees/century
    pub(super) long_node: (f64, f64),
}

pub(super) const MERCURY: OrbitalElements = OrbitalElements {
    a: (0.38709927, 0.00000037),
    e: (0.20563593, 0.00001906),
    i: (7.00497902, -0.00594749),
    l: (252.25032350, 149472.67411175),
    long_peri: (77.45779628, 0.16047689),
    long_node: (48.33076593, -0.12534081),
};

pub(super) const VENUS: OrbitalElements = OrbitalElements {
    a: (0.72333566, 0.00000390),
    e: (0.00677672, -0.00004107),
    i: (3.39467605, -0.00078890),
    l: (181.97909950, 58517.81538729),
    long_peri: (131.60246718, 0.00268329),
    long_node: (76.67984255, -0.27769418),
};

/// The Earth-Moon barycentre.
pub(super) const EARTH: OrbitalElements = OrbitalElements {
    a: (1.00000261, 0.00000562),
    e: (0.01671123, -0.00004392),
    i: (-0.00001531, -0.01294668),
    l: (100.46457166, 35999.37244981),
    long_peri: (102.93768193, 0.32327364),
    long_node: (0.0, 0.0),
};

pub(super) const MARS: OrbitalElements = OrbitalElements {
    a: (1.52371034, 0.00001847),
    e: (0.09339410, 0.00007882),
    i: (1.84969142, -0.00813131),
    l: (-4.55343205, 19140.30268499),
    long_peri: (-23.94362959, 0.44441088),
    long_node: (49.55953891, -0.29257343),
};

pub(super) const JUPITER: OrbitalElements = OrbitalElements {
    a: (5.20288700, -0.00011607),
    e: (0.04838624, -0.00013253),
    i: (1.30439695, -0.00183714),
    l: (34.39644051, 3034.74612775),
    long_peri: (14.72847983, 0.21252668),
    long_node: (100.47390909, 0.20469106),
};

pub(super) const SATURN: OrbitalElements = OrbitalElements {
    a: (9.53667594, -0.00125060),
    e: (0.05386179, -0.00050991),
    i: (2.48599187, 0.00193609),
    l: (49.95424423, 1222.49362201),
    long_peri: (92.59887831, -0.41897216),
    long_node: (113.66242448, -0.28867794),
};

pub(super) const URANUS: OrbitalElements = OrbitalElements {
    a: (19.18916464, -0.00196176),
    e: (0.04725744, -0.00004397),
    i: (0.77263783, -0.00242939),
    l: (313.23810451, 428.48202785),
    long_peri: (170.95427630, 0.40805281),
    long_node: (74.01692503, 0.04240589),
};

pub(super) const NEPTUNE: OrbitalElements = OrbitalElements {
    a: (30.06992276, 0.00026291),
    e: (0.00859048, 0.00005105),
    i: (1.77004347, 0.00035372),
    l: (-55.12002969, 218.45945325),
    long_peri: (44.96476227, -0.32241464),
    long_node: (131.78422574, -0.00508664),
};

pub(super) const PLUTO: OrbitalElements = OrbitalElements {
    a: (39.48211675, -0.00031596),
    e: (0.24882730, 0.00005170),
    i: (17.14001206, 0.00004818),
    l: (238.92903833, 145.20780515),
    long_peri: (224.06891629, -0.04062942),
    long_node: (110.30393684, -0.01183482),
};

impl OrbitalElements {
    /// Heliocentric ecliptic (J2000) position \[AU\] after `t` Julian centuries
    /// past J2000.
    pub(super) fn heliocentric_position(&self, t: f64) -> [f64; 3] {
        let at = |(x0, rate): (f64, f64)| x0 + rate * t;
        let a = at(self.a);
        let e = at(self.e);
        let i = at(self.i).to_radians();
        let l = at(self.l);
        let long_peri = at(self.long_peri);
        let long_node = at(self.long_node);

        let arg_peri = (long_peri - long_node).to_radians();
        let mean_anomaly = wrap_degrees(l - long_peri).to_radians();
        let e_anom = solve_kepler(mean_anomaly, e);

        // Position in the orbital plane, x towards perihelion.
        let x_orb = a * (e_anom.cos() - e);
        let y_orb = a * (1.0 - e * e).sqrt() * e_anom.sin();

        let (sin_w, cos_w) = arg_peri.sin_cos();
        let (sin_node, cos_node) = long_node.to_radians().sin_cos();
        let (sin_i, cos_i) = i.sin_cos();
        [
            (cos_w * cos_node - sin_w * sin_node * cos_i) * x_orb
                + (-sin_w * cos_node - cos_w * sin_node * cos_i) * y_orb,
            (cos_w * sin_node + sin_w * cos_node * cos_i) * x_orb
                + (-sin_w * sin_node + cos_w * cos_node * cos_i) * y_orb,
            (sin_w * sin_i) * x_orb + (cos_w * sin_i) * y_orb,
        ]
    }
}
