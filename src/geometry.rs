use ncollide2d::na::{Point2, RealField};
use ncollide2d::shape::Polyline;

/// Return the distance between two 2D points
pub fn dist<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> N {
    (a - b).norm()
}

/// Builds a polyline from the points with adjacent vertices closer than `tol` merged
pub fn cleaned_polyline(points: &[Point2<f64>], tol: f64) -> Polyline<f64> {
    let mut vertices = points.to_vec();
    vertices.dedup_by(|a, b| dist(a, b) <= tol);
    Polyline::new(vertices, Option::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dist() {
        assert_relative_eq!(5.0, dist(&Point2::new(1.0, 1.0), &Point2::new(4.0, 5.0)));
    }

    #[test]
    fn test_cleaned_polyline() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1e-9),
            Point2::new(1.0, 1.0),
        ];
        let line = cleaned_polyline(&points, 1e-6);
        assert_eq!(3, line.points().len());
        assert_eq!(2, line.edges().len());
    }
}
