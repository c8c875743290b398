use crate::errors::{SectionError, SectionResult};
use crate::structure::StructuralPoint;
use ncollide2d::na::Point2;
use serde::Serialize;

/// Relative tolerance below which `Ix * Iz - Ixz^2` is treated as zero
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Second moments of area of the idealized section about its centroid
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Inertia {
    pub ix: f64,
    pub iz: f64,
    pub ixz: f64,
}

impl Inertia {
    pub fn determinant(&self) -> f64 {
        self.ix * self.iz - self.ixz * self.ixz
    }

    /// A point set which is collinear (or a single point) has a zero determinant, apart from
    /// rounding noise relative to the magnitude of the moments.
    pub fn is_singular(&self) -> bool {
        let scale = (self.ix + self.iz).powi(2);
        self.determinant() <= SINGULAR_TOLERANCE * scale
    }
}

/// Area weighted centroid of the structural points
pub fn centroid(points: &[StructuralPoint]) -> SectionResult<Point2<f64>> {
    let (area, sx, sz) = points.iter().fold((0.0, 0.0, 0.0), |(a, sx, sz), p| {
        (a + p.area, sx + p.area * p.position.x, sz + p.area * p.position.y)
    });

    if area <= 0.0 {
        return Err(SectionError::EmptySection);
    }

    Ok(Point2::new(sx / area, sz / area))
}

pub fn inertia(points: &[StructuralPoint], centroid: &Point2<f64>) -> Inertia {
    points.iter().fold(Inertia::default(), |acc, p| {
        let dx = p.position.x - centroid.x;
        let dz = p.position.y - centroid.y;
        Inertia {
            ix: acc.ix + p.area * dz * dz,
            iz: acc.iz + p.area * dx * dx,
            ixz: acc.ixz + p.area * dx * dz,
        }
    })
}

/// Sums the unsymmetric bending contribution of each point for the shear forces `vx` and `vz`:
///
/// `-a dx (Ix Vx - Ixz Vz) / D - a dz (Iz Vz - Ixz Vx) / D`, with `D = Ix Iz - Ixz^2`
///
/// where `dx` and `dz` are the offsets of the point from the section centroid.
pub fn bending_load_term(
    points: &[StructuralPoint],
    centroid: &Point2<f64>,
    inertia: &Inertia,
    vx: f64,
    vz: f64,
) -> SectionResult<f64> {
    if inertia.is_singular() {
        return Err(SectionError::SingularInertia(inertia.determinant()));
    }

    let d = inertia.determinant();
    let fx = (inertia.ix * vx - inertia.ixz * vz) / d;
    let fz = (inertia.iz * vz - inertia.ixz * vx) / d;

    Ok(points
        .iter()
        .map(|p| {
            let dx = p.position.x - centroid.x;
            let dz = p.position.y - centroid.y;
            -p.area * dx * fx - p.area * dz * fz
        })
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::Surface;
    use crate::structure::StructuralGroup;
    use approx::assert_relative_eq;
    use rand::Rng;
    use test_case::test_case;

    fn point(x: f64, z: f64, area: f64) -> StructuralPoint {
        StructuralPoint::new(Point2::new(x, z), area, StructuralGroup::Stringers, Surface::Upper)
    }

    /// Four unit areas on the corners of a 4 x 2 rectangle centered on (2, 1)
    fn rectangle() -> Vec<StructuralPoint> {
        vec![
            point(0.0, 2.0, 1.0),
            point(4.0, 2.0, 1.0),
            point(0.0, 0.0, 1.0),
            point(4.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_rectangle_properties() {
        let points = rectangle();
        let c = centroid(&points).unwrap();
        assert_relative_eq!(2.0, c.x);
        assert_relative_eq!(1.0, c.y);

        let i = inertia(&points, &c);
        assert_relative_eq!(4.0, i.ix);
        assert_relative_eq!(16.0, i.iz);
        assert_relative_eq!(0.0, i.ixz);
        assert_relative_eq!(64.0, i.determinant());
    }

    #[test]
    fn test_symmetric_section_has_zero_bending_sum() {
        // Offsets cancel about the centroid, so the first moments and the sum vanish
        let points = rectangle();
        let c = centroid(&points).unwrap();
        let i = inertia(&points, &c);
        let term = bending_load_term(&points, &c, &i, 1.0, 1.0).unwrap();
        assert_relative_eq!(0.0, term, epsilon = 1e-12);
    }

    #[test]
    fn test_bending_term_single_point_contribution() {
        let points = rectangle();
        let c = centroid(&points).unwrap();
        let i = inertia(&points, &c);

        // Corner (4, 2): dx = 2, dz = 1. fx = 4 / 64, fz = 16 / 64
        let term = bending_load_term(&points[1..2], &c, &i, 1.0, 1.0).unwrap();
        assert_relative_eq!(-2.0 * 4.0 / 64.0 - 16.0 / 64.0, term, epsilon = 1e-12);
    }

    #[test]
    fn test_centroid_scales_with_area() {
        let single = vec![point(1.0, 3.0, 2.0), point(5.0, -1.0, 2.0)];
        let doubled = vec![
            point(1.0, 3.0, 1.0),
            point(1.0, 3.0, 1.0),
            point(5.0, -1.0, 1.0),
            point(5.0, -1.0, 1.0),
        ];

        let a = centroid(&single).unwrap();
        let b = centroid(&doubled).unwrap();
        assert_relative_eq!(a.x, b.x);
        assert_relative_eq!(a.y, b.y);
        assert_relative_eq!(3.0, a.x);
        assert_relative_eq!(1.0, a.y);
    }

    #[test]
    fn test_random_inertia_non_negative() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let points: Vec<StructuralPoint> = (0..10)
                .map(|_| {
                    point(
                        rng.gen_range(0.0..100.0),
                        rng.gen_range(-10.0..10.0),
                        rng.gen_range(0.01..1.0),
                    )
                })
                .collect();
            let c = centroid(&points).unwrap();
            let i = inertia(&points, &c);
            assert!(i.ix >= 0.0);
            assert!(i.iz >= 0.0);
            assert!(i.determinant() >= -1e-9 * (i.ix + i.iz).powi(2));
        }
    }

    #[test]
    fn test_empty_section() {
        assert_eq!(Err(SectionError::EmptySection), centroid(&[]));
        assert_eq!(
            Err(SectionError::EmptySection),
            centroid(&[point(1.0, 1.0, 0.0)])
        );
    }

    #[test_case(vec![point(3.0, 1.0, 0.5)] ; "single point")]
    #[test_case(
        vec![point(0.0, 0.0, 1.0), point(1.0, 1.0, 1.0), point(2.0, 2.0, 1.0)] ;
        "diagonal line"
    )]
    #[test_case(vec![point(0.0, 1.0, 1.0), point(5.0, 1.0, 2.0)] ; "horizontal line")]
    fn test_singular_inertia(points: Vec<StructuralPoint>) {
        let c = centroid(&points).unwrap();
        let i = inertia(&points, &c);
        let result = bending_load_term(&points, &c, &i, 1.0, 1.0);
        assert!(matches!(result, Err(SectionError::SingularInertia(_))));
    }
}
