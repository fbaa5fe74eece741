// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::{Cursor, Write};

use approx::assert_abs_diff_eq;
use hifitime::Epoch;
use indoc::indoc;

use super::{planets::*, *};
use crate::{
    constants::PI,
    ephemeris::observe,
    flux_density::FluxInterpolation,
    formulas::{antenna_gain, antenna_temperature},
};

const LISTING: &str = indoc! {r#"
    1331+305   J2000  A 13h31m08.287984s  30d30'32.958850"  Aug01  3C286
    1328+307   B1950  A 13h28m49.657700s  30d45'58.640000"
    -----------------------------------------------------
    BAND        A B C D    FLUX(Jy)    UVMIN(kL)  UVMAX(kL)
    =====================================================
     90cm    P  X  X  X  X    26.00
     20cm    L  P  P  S  S    15.00
      6cm    C  P  P  P  S     7.48
    3.7cm    X  P  P  P  P     5.23
      2cm    U  P  P  P  S     3.40
    1.3cm    K  P  S  S  S     2.59
    0.7cm    Q  P  S  S  S     1.45

    0137-245   J2000  A 01h37m38.346413s  -24d30'53.885640"  Aug01
    0135-247   B1950  A 01h35m17.135000s  -24d46'02.210000"
    -----------------------------------------------------
    BAND        A B C D    FLUX(Jy)    UVMIN(kL)  UVMAX(kL)
    =====================================================
     20cm    L  P  P  P  P     ?
"#};

// A constant 7 Jy at two frequencies.
const MICHIGAN_TABLE: &str = indoc! {"
    UMRAO monitoring data
    1328+307
    MJD       DATE     FREQ  UT     FLUX    SIG
    56000     2012.00   4.8  0.00   7.000  0.050
    56000     2012.00  14.5  0.00   7.000  0.050
    56100     2012.27   4.8  0.00   7.000  0.050
    56100     2012.27  14.5  0.00   7.000  0.050
"};

fn vla() -> VlaCatalogue {
    vla::parse_catalogue(&mut Cursor::new(LISTING)).unwrap()
}

fn michigan() -> MichiganCatalogue {
    let table =
        michigan::MichiganTable::parse("1328+307", &mut Cursor::new(MICHIGAN_TABLE)).unwrap();
    MichiganCatalogue::new([table])
}

fn venus_transit() -> Epoch {
    Epoch::from_gregorian_utc_hms(2012, 6, 6, 1, 0, 0)
}

#[test]
fn test_antenna_temperature_of_venus() {
    // A 34 m dish with 70% aperture efficiency at X band.
    let gain = antenna_gain(0.7, PI * 17.0_f64.powi(2)).unwrap();
    let flux = calibrator_flux("Venus", 8.4, venus_transit()).unwrap();
    assert_eq!(flux.origin, FluxOrigin::Planet);
    assert_eq!(flux.name, "Venus");
    assert_abs_diff_eq!(flux.flux_jy, 87.8, epsilon = 2.0);

    let t_a = antenna_temperature(gain, flux.flux_jy);
    assert!((15.0..25.0).contains(&t_a), "{t_a}");
    assert_abs_diff_eq!(t_a, 20.2, epsilon = 0.5);
}

#[test]
fn test_venus_brightness() {
    assert_abs_diff_eq!(venus_brightness(8.4).unwrap(), 656.81, epsilon = 0.5);
    assert_abs_diff_eq!(venus_brightness(5.0).unwrap(), 681.06, epsilon = 0.5);
    assert_abs_diff_eq!(venus_brightness(22.46).unwrap(), 494.11, epsilon = 0.5);
    assert_abs_diff_eq!(venus_brightness(75.0).unwrap(), 353.33, epsilon = 0.5);
    // Clamped outside of the fitted range.
    assert_abs_diff_eq!(venus_brightness(4.0).unwrap(), 686.0);
    assert_abs_diff_eq!(venus_brightness(1.4).unwrap(), 686.0);
    assert_abs_diff_eq!(venus_brightness(75.1).unwrap(), 351.0);
    assert_abs_diff_eq!(venus_brightness(230.0).unwrap(), 351.0);

    assert!(venus_brightness(0.0).is_err());
    assert!(venus_brightness(f64::NAN).is_err());
}

#[test]
fn test_geometry_dependent_brightness() {
    let mut obs = observe(SolarSystemBody::Mars, venus_transit()).unwrap();
    obs.sun_distance_au = 1.524;
    assert_abs_diff_eq!(planet_brightness(8.4, &obs).unwrap().tb_k, 190.0);
    obs.sun_distance_au = 1.524 * 2.0;
    assert_abs_diff_eq!(planet_brightness(8.4, &obs).unwrap().tb_k, 47.5);

    let mut obs = observe(SolarSystemBody::Mercury, venus_transit()).unwrap();
    obs.illuminated_fraction = 0.5;
    let tb = planet_brightness(8.4, &obs).unwrap();
    assert_abs_diff_eq!(tb.tb_k, 327.88, epsilon = 0.01);
    assert!(tb.sigma_k.is_none());
    // A fuller disc is cooler on average.
    obs.illuminated_fraction = 1.0;
    assert!(planet_brightness(8.4, &obs).unwrap().tb_k < 327.88);

    let obs = observe(SolarSystemBody::Saturn, venus_transit()).unwrap();
    assert_abs_diff_eq!(planet_brightness(8.4, &obs).unwrap().tb_k, 0.94 * 157.0);

    let obs = observe(SolarSystemBody::Venus, venus_transit()).unwrap();
    let freqs = ndarray::array![2.0, 8.4, 100.0];
    let tbs = planet_brightness_array(freqs.view(), &obs).unwrap();
    assert_abs_diff_eq!(tbs[0], 686.0);
    assert_abs_diff_eq!(tbs[1], 656.81, epsilon = 0.5);
    assert_abs_diff_eq!(tbs[2], 351.0);
}

#[test]
fn test_jupiter_flux() {
    let epoch = Epoch::from_gregorian_utc_hms(2022, 9, 26, 20, 0, 0);
    let pf = planet_flux(SolarSystemBody::Jupiter, 8.4, epoch).unwrap();
    assert_abs_diff_eq!(pf.flux_jy, 15.6, epsilon = 0.5);
    assert_abs_diff_eq!(pf.brightness.tb_k, 157.0);
    assert_abs_diff_eq!(pf.observation.earth_distance_au, 3.954, epsilon = 0.01);

    // Flux density goes as frequency squared.
    let pf2 = planet_flux(SolarSystemBody::Jupiter, 16.8, epoch).unwrap();
    assert_abs_diff_eq!(pf2.flux_jy / pf.flux_jy, 4.0, epsilon = 1e-9);
}

#[test]
fn test_bodies_without_models() {
    let epoch = venus_transit();
    assert!(matches!(
        calibrator_flux("Moon", 8.4, epoch),
        Err(CalibratorError::Ephemeris(_))
    ));
    for name in ["Uranus", "neptune", "PLUTO"] {
        assert!(matches!(
            calibrator_flux(name, 8.4, epoch),
            Err(CalibratorError::NoBrightnessModel(_))
        ));
    }
}

#[test]
fn test_known_calibrators_are_positive() {
    let epoch = venus_transit();
    let cat = CalibratorCatalogue::new()
        .with_vla(vla())
        .with_michigan(michigan());
    for name in [
        "Sun", "Mercury", "venus", "Mars", "Jupiter", "Saturn", "Virgo A", "M17", "orion",
        "3C286", "J1331+305",
    ] {
        let flux = cat.flux(name, 8.4, epoch).unwrap();
        assert!(flux.flux_jy > 0.0, "{name}: {flux:?}");
    }
}

#[test]
fn test_known_calibrators_are_positive_at_all_frequencies() {
    let epoch = venus_transit();
    let freqs = [1.4, 4.8, 8.4, 14.5, 22.0, 43.0];

    let cat = CalibratorCatalogue::from_dir("test_files/calibrators").unwrap();
    for interpolation in [FluxInterpolation::SpectralIndex, FluxInterpolation::LinearFit] {
        let cat = cat.clone().with_interpolation(interpolation);
        for name in ["3C48", "3C286", "J0137-245"] {
            for freq in freqs {
                let flux = cat.flux(name, freq, epoch).unwrap();
                assert!(flux.flux_jy > 0.0, "{name} {interpolation}: {flux:?}");
            }
        }
    }

    // Only monitoring data.
    let cat = CalibratorCatalogue::new()
        .with_michigan(MichiganCatalogue::read_dir("test_files/calibrators/michigan").unwrap());
    for freq in freqs {
        let flux = cat.flux("B0134+329", freq, epoch).unwrap();
        assert_eq!(flux.origin, FluxOrigin::Michigan);
        assert!(flux.flux_jy > 0.0, "{flux:?}");
    }
}

#[test]
fn test_monitoring_frequencies_decide_the_origin() {
    let epoch = venus_transit();
    let cat = CalibratorCatalogue::from_dir("test_files/calibrators").unwrap();

    // The edges of the monitoring are included.
    for freq in [4.8, 8.4, 14.5] {
        let flux = cat.flux("3C48", freq, epoch).unwrap();
        assert_eq!(flux.origin, FluxOrigin::Michigan, "{freq} GHz");
    }
    // Outside of them, the VLA manual has measurements.
    for freq in [1.4, 22.0, 43.0] {
        let flux = cat.flux("3C48", freq, epoch).unwrap();
        assert_eq!(flux.origin, FluxOrigin::Vla, "{freq} GHz");
        assert_eq!(flux.name, "0137+331");
    }
    let flux = cat.flux("3C48", 300.0 / 13.0, epoch).unwrap();
    assert_abs_diff_eq!(flux.flux_jy, 1.13, epsilon = 1e-9);
}

#[test]
fn test_linear_fit_falls_back_to_spectral_indices() {
    let epoch = venus_transit();
    let cat = CalibratorCatalogue::new()
        .with_vla(vla())
        .with_interpolation(FluxInterpolation::LinearFit);
    // A straight line through 3C286's flux densities is negative here.
    let flux = cat.flux("3C286", 43.0, epoch).unwrap();
    assert_eq!(flux.origin, FluxOrigin::Vla);
    assert_abs_diff_eq!(flux.flux_jy, 1.45, epsilon = 0.01);
}

#[test]
fn test_non_positive_estimates_are_errors() {
    // Fading quickly; extrapolating in time goes below zero.
    let table = michigan::MichiganTable {
        source_name: "0316+413".to_string(),
        series: vec![michigan::MonitoringSeries {
            freq_ghz: 8.0,
            times_mjd: vec![56000.0, 56010.0],
            fluxes_jy: vec![10.0, 5.0],
            sigmas_jy: vec![0.1, 0.1],
        }],
    };
    let cat = CalibratorCatalogue::new().with_michigan(MichiganCatalogue::new([table]));
    assert!(cat.flux("0316+413", 8.0, Epoch::from_mjd_utc(56005.0)).is_ok());
    let result = cat.flux("0316+413", 8.0, Epoch::from_mjd_utc(56100.0));
    assert!(matches!(
        result,
        Err(CalibratorError::NonPositiveFlux { ref name, .. }) if name == "0316+413"
    ));
}

#[test]
fn test_bad_lookups() {
    let epoch = venus_transit();
    assert!(matches!(
        calibrator_flux("3C286", 8.4, epoch),
        Err(CalibratorError::UnknownSource(_))
    ));
    assert!(matches!(
        calibrator_flux("Venus", -1.0, epoch),
        Err(CalibratorError::Formula(_))
    ));

    let cat = CalibratorCatalogue::new().with_vla(vla());
    assert!(matches!(
        cat.flux("Cygnus A", 8.4, epoch),
        Err(CalibratorError::UnknownSource(_))
    ));
    assert!(matches!(
        cat.flux("J0137-245", 8.4, epoch),
        Err(CalibratorError::NoFluxDensities(_))
    ));
}

#[test]
fn test_resolution_order() {
    let epoch = venus_transit();

    let flux = calibrator_flux(" virgo a ", 8.4, epoch).unwrap();
    assert_eq!(flux.origin, FluxOrigin::RadioStar);
    assert_eq!(flux.name, "Virgo");
    assert_abs_diff_eq!(flux.flux_jy, RadioStar::Virgo.flux(8.4));

    // Without monitoring data, the VLA manual is used.
    let cat = CalibratorCatalogue::new().with_vla(vla());
    let flux = cat.flux("3C286", 8.4, epoch).unwrap();
    assert_eq!(flux.origin, FluxOrigin::Vla);
    assert_eq!(flux.name, "1331+305");
    assert_abs_diff_eq!(flux.flux_jy, 5.102108768305416, epsilon = 1e-9);

    let cat = cat.with_interpolation(FluxInterpolation::LinearFit);
    let flux = cat.flux("3C286", 8.4, epoch).unwrap();
    assert_abs_diff_eq!(flux.flux_jy, 10.869607453836739, epsilon = 1e-9);

    // Monitoring data are preferred, found through the B1950 name.
    let cat = CalibratorCatalogue::new()
        .with_vla(vla())
        .with_michigan(michigan());
    for name in ["3C286", "J1331+305", "B1328+307"] {
        let flux = cat.flux(name, 8.4, epoch).unwrap();
        assert_eq!(flux.origin, FluxOrigin::Michigan);
        assert_eq!(flux.name, "1328+307");
        assert_abs_diff_eq!(flux.flux_jy, 7.0, epsilon = 1e-9);
    }

    // Monitoring data can be used without the VLA catalogue.
    let cat = CalibratorCatalogue::new().with_michigan(michigan());
    let flux = cat.flux("B1328+307", 8.4, epoch).unwrap();
    assert_eq!(flux.origin, FluxOrigin::Michigan);

    // Bodies come before everything else.
    let flux = cat.flux("Jupiter", 8.4, epoch).unwrap();
    assert_eq!(flux.origin, FluxOrigin::Planet);
}

#[test]
fn test_catalogue_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    let cat = CalibratorCatalogue::from_dir(dir.path()).unwrap();
    assert!(cat.vla.is_none());
    assert!(cat.michigan.is_none());

    vla::write_catalogue_file(dir.path().join("vla_calibrators.json"), &vla()).unwrap();
    std::fs::create_dir(dir.path().join(MICHIGAN_DIR)).unwrap();
    let mut f =
        std::fs::File::create(dir.path().join(MICHIGAN_DIR).join("1328+307.txt")).unwrap();
    f.write_all(MICHIGAN_TABLE.as_bytes()).unwrap();
    drop(f);

    let cat = CalibratorCatalogue::from_dir(dir.path()).unwrap();
    assert_eq!(cat.vla.as_ref().map(|v| v.len()), Some(2));
    assert_eq!(cat.michigan.as_ref().map(|m| m.len()), Some(1));
    let flux = cat.flux("3C286", 8.4, venus_transit()).unwrap();
    assert_eq!(flux.origin, FluxOrigin::Michigan);
}
