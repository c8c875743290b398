use crate::airfoil::{Airfoil, CamberStation, NacaDesignation, Sampling};
use crate::config::checked_chord;
use crate::errors::SectionResult;
use log::debug;

/// Below this value a camber parameter is treated as zero, giving a symmetric section
const SYMMETRIC_EPSILON: f64 = 1e-6;

/// An AirfoilGenerator is an entity which can evaluate the mean camber line, its slope and the
/// half thickness at any chordwise position from 0 to the chord length. This provides the
/// information necessary to compute the airfoil surfaces.
pub trait AirfoilGenerator {
    fn chord(&self) -> f64;

    /// Height of the mean camber line at a chordwise position
    fn camber(&self, x: f64) -> f64;

    /// Slope of the mean camber line, dy_c/dx, at a chordwise position
    fn camber_slope(&self, x: f64) -> f64;

    /// Half thickness of the section, measured normal to the camber line, at a chordwise position
    fn thickness(&self, x: f64) -> f64;

    fn station_at(&self, x: f64) -> CamberStation {
        CamberStation::new(
            x,
            self.camber(x),
            self.thickness(x),
            self.camber_slope(x).atan(),
        )
    }

    /// Evaluates a station at every position of the sampling policy. The station at the trailing
    /// edge is closed so that both surfaces meet on the chord line.
    fn stations(&self, sampling: Sampling) -> SectionResult<Vec<CamberStation>> {
        let chord = self.chord();
        Ok(sampling
            .stations(chord)?
            .into_iter()
            .map(|x| {
                if x >= chord {
                    CamberStation::closed(x, self.camber(x), self.camber_slope(x).atan())
                } else {
                    self.station_at(x)
                }
            })
            .collect())
    }
}

/// A generator for a NACA 4-digit airfoil of the form MPTT scaled to a given chord length.
pub struct Naca4Digit {
    designation: NacaDesignation,
    chord_len: f64,
    m: f64,
    p: f64,
    t: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `designation` - the MPTT designation, for example 2412
    ///
    /// * `chord_len` - the actual length of the airfoil chord, raised to the minimum chord when
    ///   shorter. Fails with `InvalidChord` when it is not finite, not positive or too long.
    pub fn new(designation: NacaDesignation, chord_len: f64) -> SectionResult<Naca4Digit> {
        Ok(Naca4Digit {
            designation,
            chord_len: checked_chord(chord_len)?,
            m: designation.max_camber(),
            p: designation.camber_location(),
            t: designation.max_thickness(),
        })
    }

    /// The chordwise location of maximum camber
    pub fn max_camber_x(&self) -> f64 {
        self.p * self.chord_len
    }

    fn is_symmetric(&self) -> bool {
        self.m < SYMMETRIC_EPSILON || self.p < SYMMETRIC_EPSILON
    }

    /// Chordwise position as a fraction of the chord, never negative
    fn fraction(&self, x: f64) -> f64 {
        (x / self.chord_len).max(0.0)
    }

    /// Samples the section with the given policy. A zero thickness designation (such as 2400) is
    /// accepted and produces a flat plate whose two surfaces coincide.
    pub fn generate(&self, sampling: Sampling) -> SectionResult<Airfoil> {
        let stations = self.stations(sampling)?;
        debug!(
            "Generated NACA {} with chord {} at {} stations ({:?})",
            self.designation,
            self.chord_len,
            stations.len(),
            sampling
        );
        Airfoil::from_stations(self.designation, self.chord_len, stations)
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn chord(&self) -> f64 {
        self.chord_len
    }

    fn camber(&self, x: f64) -> f64 {
        if self.is_symmetric() {
            return 0.0;
        }

        let xc = self.fraction(x);
        let y = if x < self.max_camber_x() {
            (self.m / self.p.powi(2)) * (2.0 * self.p * xc - xc.powi(2))
        } else {
            (self.m / (1.0 - self.p).powi(2))
                * ((1.0 - 2.0 * self.p) + 2.0 * self.p * xc - xc.powi(2))
        };

        y * self.chord_len
    }

    fn camber_slope(&self, x: f64) -> f64 {
        if self.is_symmetric() {
            return 0.0;
        }

        let xc = self.fraction(x);
        if x < self.max_camber_x() {
            (2.0 * self.m / self.p.powi(2)) * (self.p - xc)
        } else {
            (2.0 * self.m / (1.0 - self.p).powi(2)) * (self.p - xc)
        }
    }

    fn thickness(&self, x: f64) -> f64 {
        let xc = self.fraction(x);
        (5.0 * self.t * self.chord_len)
            * (0.2969 * xc.sqrt()
                + -0.1260 * xc
                + -0.3516 * xc.powi(2)
                + 0.2843 * xc.powi(3)
                + -0.1015 * xc.powi(4))
    }
}
