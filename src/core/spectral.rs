//! Spectral classification
//!
//! Derives a main-sequence spectral class from a star's mass, diameter,
//! surface temperature and luminosity. Bands are walked from coolest to
//! hottest; each band rejects stars whose luminosity, mass or radius exceed
//! its upper bounds. The hottest band (O) has no upper bounds.
//!
//! | Band (K)        | Rejected when                                  | Class |
//! |-----------------|------------------------------------------------|-------|
//! | < 2400          | always (also when mass < 0.08)                 | -     |
//! | [2400, 3700)    | L > 0.08 or M > 0.45 or R > 0.7                | M     |
//! | [3700, 5200)    | L > 0.6 or M > 0.8 or R > 0.96                 | K     |
//! | [5200, 6000)    | L > 1.5 or M > 1.04 or R > 1.15                | G     |
//! | [6000, 7500)    | L > 5 or M > 1.4 or R > 1.4                    | F     |
//! | [7500, 10000)   | L > 25 or M > 2.1 or R > 1.8                   | A     |
//! | [10000, 30000)  | L > 30000 or M > 16 or R > 6.6                 | B     |
//! | >= 30000        | never                                          | O     |

use serde::Serialize;
use std::fmt;

/// Main-sequence spectral class
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            SpectralClass::O => "O",
            SpectralClass::B => "B",
            SpectralClass::A => "A",
            SpectralClass::F => "F",
            SpectralClass::G => "G",
            SpectralClass::K => "K",
            SpectralClass::M => "M",
        };
        f.write_str(letter)
    }
}

/// Minimum temperature of any classifiable star
pub const MIN_TEMPERATURE: u64 = 2400;

/// Minimum mass of any classifiable star
pub const MIN_MASS: f64 = 0.08;

/// Upper bounds a star must respect to belong to a band
struct Band {
    /// Exclusive upper temperature of the band
    below: u64,
    max_luminosity: f64,
    max_mass: f64,
    max_radius: f64,
    class: SpectralClass,
}

/// Bands below the O class, coolest first
const BANDS: [Band; 6] = [
    Band {
        below: 3700,
        max_luminosity: 0.08,
        max_mass: 0.45,
        max_radius: 0.7,
        class: SpectralClass::M,
    },
    Band {
        below: 5200,
        max_luminosity: 0.6,
        max_mass: 0.8,
        max_radius: 0.96,
        class: SpectralClass::K,
    },
    Band {
        below: 6000,
        max_luminosity: 1.5,
        max_mass: 1.04,
        max_radius: 1.15,
        class: SpectralClass::G,
    },
    Band {
        below: 7500,
        max_luminosity: 5.0,
        max_mass: 1.4,
        max_radius: 1.4,
        class: SpectralClass::F,
    },
    Band {
        below: 10000,
        max_luminosity: 25.0,
        max_mass: 2.1,
        max_radius: 1.8,
        class: SpectralClass::A,
    },
    Band {
        below: 30000,
        max_luminosity: 30000.0,
        max_mass: 16.0,
        max_radius: 6.6,
        class: SpectralClass::B,
    },
];

/// Classify a star, returning `None` when no class fits
///
/// `temperature` is in Kelvin; `radius` is taken as half of `diameter`.
pub fn classify(
    mass: f64,
    diameter: f64,
    temperature: u64,
    luminosity: f64,
) -> Option<SpectralClass> {
    if temperature < MIN_TEMPERATURE || mass < MIN_MASS {
        return None;
    }

    let radius = diameter / 2.0;
    match BANDS.iter().find(|band| temperature < band.below) {
        Some(band) => {
            let exceeds = luminosity > band.max_luminosity
                || mass > band.max_mass
                || radius > band.max_radius;
            if exceeds {
                None
            } else {
                Some(band.class)
            }
        }
        None => Some(SpectralClass::O),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_like_star_is_g() {
        assert_eq!(classify(1.0, 2.0, 5500, 1.0), Some(SpectralClass::G));
        assert_eq!(classify(1.0, 1.39, 5778, 1.0), Some(SpectralClass::G));
    }

    #[test]
    fn test_o_band_has_no_upper_bounds() {
        assert_eq!(classify(20.0, 1.0, 35000, 50000.0), Some(SpectralClass::O));
        assert_eq!(classify(1000.0, 500.0, 30000, 1e9), Some(SpectralClass::O));
    }

    #[test]
    fn test_floor_guards_come_first() {
        assert_eq!(classify(0.05, 1.0, 3000, 0.01), None);
        assert_eq!(classify(0.3, 1.0, 2399, 0.01), None);
        // Even an O-band temperature cannot rescue a sub-floor mass
        assert_eq!(classify(0.07, 1.0, 40000, 1.0), None);
    }

    #[test]
    fn test_band_lower_edges_are_inclusive() {
        assert_eq!(classify(0.3, 1.0, 2400, 0.05), Some(SpectralClass::M));
        assert_eq!(classify(0.3, 1.0, 3700, 0.05), Some(SpectralClass::K));
        assert_eq!(classify(0.3, 1.0, 5200, 0.05), Some(SpectralClass::G));
        assert_eq!(classify(0.3, 1.0, 6000, 0.05), Some(SpectralClass::F));
        assert_eq!(classify(0.3, 1.0, 7500, 0.05), Some(SpectralClass::A));
        assert_eq!(classify(0.3, 1.0, 10000, 0.05), Some(SpectralClass::B));
        assert_eq!(classify(0.3, 1.0, 29999, 0.05), Some(SpectralClass::B));
    }

    #[test]
    fn test_upper_bounds_equal_to_limit_pass() {
        // M band limits: L 0.08, M 0.45, R 0.7 (diameter 1.4)
        assert_eq!(classify(0.45, 1.4, 3000, 0.08), Some(SpectralClass::M));
        assert_eq!(classify(0.46, 1.4, 3000, 0.08), None);
        assert_eq!(classify(0.45, 1.41, 3000, 0.08), None);
        assert_eq!(classify(0.45, 1.4, 3000, 0.09), None);
    }

    #[test]
    fn test_hot_band_does_not_fall_through_to_hotter_band() {
        // Too luminous for A, but A is the first matching band so the star is invalid
        assert_eq!(classify(2.0, 3.0, 9000, 26.0), None);
    }

    #[test]
    fn test_mass_at_floor_is_accepted() {
        assert_eq!(classify(0.08, 0.2, 2500, 0.001), Some(SpectralClass::M));
    }

    #[test]
    fn test_display_letters() {
        assert_eq!(SpectralClass::O.to_string(), "O");
        assert_eq!(SpectralClass::M.to_string(), "M");
    }
}
