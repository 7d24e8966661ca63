//! Intersection search over a segment list.
//!
//! Two searches are available and they report the same points:
//!
//! - [`Algorithm::Sweep`] runs a Bentley–Ottmann sweep from the top of the
//!   plane downwards, testing only segments that become neighbours on the
//!   sweep line.
//! - [`Algorithm::BruteForce`] tests every pair.
//!
//! Both treat touching endpoints as intersections and both return points in
//! sweep order: highest y first, then lowest x.

mod brute;
mod sweep;

use std::fmt::Write as _;

use crate::geometry::{Point, Segment};

/// A point shared by two or more segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    /// Where the segments meet.
    pub point: Point,
    /// Input indices of every segment through `point`, ascending.
    pub segments: Vec<usize>,
}

/// Which search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Algorithm {
    /// Bentley–Ottmann sweep line.
    #[default]
    Sweep,
    /// Test every pair of segments.
    #[value(name = "brute")]
    BruteForce,
}

impl Algorithm {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sweep => "sweep line",
            Self::BruteForce => "brute force",
        }
    }
}

/// Find every point where two or more segments meet.
pub fn find_intersections(segments: &[Segment], algorithm: Algorithm) -> Vec<Intersection> {
    let _span = tracing::debug_span!("intersections", algorithm = algorithm.name()).entered();

    let found = match algorithm {
        Algorithm::Sweep => sweep::run(segments),
        Algorithm::BruteForce => brute::run(segments),
    };

    tracing::debug!(
        segments = segments.len(),
        intersections = found.len(),
        "Intersection search finished"
    );
    found
}

/// One `Intersection: x y` line per point.
pub fn format_report(intersections: &[Intersection]) -> String {
    let mut text = String::new();
    for i in intersections {
        let _ = writeln!(text, "Intersection: {}", i.point);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn segs(coords: &[[f64; 4]]) -> Vec<Segment> {
        coords
            .iter()
            .map(|&[x1, y1, x2, y2]| Segment::new(x1, y1, x2, y2))
            .collect()
    }

    fn assert_same(a: &[Intersection], b: &[Intersection]) {
        assert_eq!(a.len(), b.len(), "sweep {a:?}\nbrute {b:?}");
        for (x, y) in a.iter().zip(b) {
            assert!(
                x.point.approx_eq(y.point),
                "points differ: {:?} vs {:?}",
                x.point,
                y.point
            );
            assert_eq!(x.segments, y.segments, "at {:?}", x.point);
        }
    }

    fn both(segments: &[Segment]) -> Vec<Intersection> {
        let sweep = find_intersections(segments, Algorithm::Sweep);
        let brute = find_intersections(segments, Algorithm::BruteForce);
        assert_same(&sweep, &brute);
        sweep
    }

    #[test]
    fn empty_and_single_inputs_have_no_intersections() {
        assert!(both(&[]).is_empty());
        assert!(both(&segs(&[[0.0, 0.0, 1.0, 1.0]])).is_empty());
    }

    #[test]
    fn two_segments_sharing_an_endpoint() {
        let found = both(&segs(&[[0.0, 0.0, 1.0, 1.0], [1.0, 1.0, 2.0, 0.0]]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].point, Point::new(1.0, 1.0));
        assert_eq!(found[0].segments, vec![0, 1]);
    }

    #[test]
    fn simple_cross() {
        let found = both(&segs(&[[0.0, 0.0, 2.0, 2.0], [0.0, 2.0, 2.0, 0.0]]));
        assert_eq!(found.len(), 1);
        assert!(found[0].point.approx_eq(Point::new(1.0, 1.0)));
    }

    #[test]
    fn star_through_one_point() {
        let found = both(&segs(&[
            [-1.0, -1.0, 1.0, 1.0],
            [-1.0, 1.0, 1.0, -1.0],
            [0.0, -1.0, 0.0, 1.0],
            [-1.0, 0.0, 1.0, 0.0],
        ]));
        assert_eq!(found.len(), 1);
        assert!(found[0].point.approx_eq(Point::new(0.0, 0.0)));
        assert_eq!(found[0].segments, vec![0, 1, 2, 3]);
    }

    #[test]
    fn grid_of_horizontals_and_verticals() {
        let mut coords = Vec::new();
        for i in 0..3 {
            let c = f64::from(i);
            coords.push([-1.0, c, 3.0, c]);
            coords.push([c, -1.0, c, 3.0]);
        }
        let found = both(&segs(&coords));
        assert_eq!(found.len(), 9);
        // Sweep order: top row first, left to right.
        assert!(found[0].point.approx_eq(Point::new(0.0, 2.0)));
        assert!(found[8].point.approx_eq(Point::new(2.0, 0.0)));
    }

    #[test]
    fn crossing_lines_in_general_position() {
        let found = both(&segs(&[
            [0.0, 0.0, 10.0, 3.0],
            [0.0, 3.0, 10.0, 0.0],
            [2.0, -1.0, 3.0, 5.0],
            [8.0, 5.0, 6.0, -2.0],
            [1.0, 4.0, 9.0, 4.5],
        ]));
        // Every steep segment crosses both shallow ones; the top one crosses only the steep ones.
        assert_eq!(found.len(), 7);
        assert!(found.iter().all(|i| i.segments.len() == 2));
    }

    #[test]
    fn t_junction_and_disjoint_segment() {
        let found = both(&segs(&[
            [0.0, 0.0, 4.0, 0.0],
            [2.0, 0.0, 2.0, 3.0],
            [10.0, 10.0, 11.0, 11.0],
        ]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].point, Point::new(2.0, 0.0));
        assert_eq!(found[0].segments, vec![0, 1]);
    }

    #[test]
    fn collinear_overlap_reports_overlap_ends() {
        let found = both(&segs(&[[0.0, 0.0, 4.0, 0.0], [1.0, 0.0, 3.0, 0.0]]));
        let points: Vec<Point> = found.iter().map(|i| i.point).collect();
        assert_eq!(points, vec![Point::new(1.0, 0.0), Point::new(3.0, 0.0)]);
    }

    #[test]
    fn duplicate_segments_meet_at_both_ends() {
        let found = both(&segs(&[[0.0, 0.0, 1.0, 2.0], [0.0, 0.0, 1.0, 2.0]]));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].point, Point::new(1.0, 2.0));
        assert_eq!(found[1].point, Point::new(0.0, 0.0));
    }

    #[test]
    fn degenerate_segment_on_a_line() {
        let found = both(&segs(&[[0.0, 0.0, 2.0, 2.0], [1.0, 1.0, 1.0, 1.0]]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].point, Point::new(1.0, 1.0));
        assert_eq!(found[0].segments, vec![0, 1]);
    }

    #[test]
    fn slanted_segment_meets_horizontal_at_its_exact_height() {
        let found = both(&segs(&[
            [3.945837512537613, 0.645937813440321, 0.5446339017051154, 6.949849548645938],
            [0.5656970912738215, 6.0, 2.966900702106319, 6.0],
        ]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].point.y, 6.0);
        assert!((found[0].point.x - 1.057114).abs() < 1e-6);
        assert_eq!(found[0].segments, vec![0, 1]);
        assert_eq!(format_report(&found), "Intersection: 1.057114 6.000000\n");
    }

    #[test]
    fn crossings_along_a_horizontal_come_left_to_right() {
        let found = both(&segs(&[
            [0.0, 5.382146, 5.0, 5.382146],
            [3.945837512537613, 0.645937813440321, 0.5446339017051154, 6.949849548645938],
            [1.3, 0.2, 3.7, 7.1],
        ]));
        let on_horizontal: Vec<&Intersection> =
            found.iter().filter(|i| i.segments.contains(&0)).collect();
        assert_eq!(on_horizontal.len(), 2);
        assert!(on_horizontal.iter().all(|i| i.point.y == 5.382146));
        assert!(on_horizontal[0].point.x < on_horizontal[1].point.x);
    }

    #[test]
    fn non_finite_segments_are_skipped() {
        let found = both(&segs(&[
            [0.0, 0.0, 2.0, 2.0],
            [0.0, 2.0, f64::INFINITY, 0.0],
            [f64::NAN, 1.0, 1.0, 1.0],
            [0.0, 2.0, 2.0, 0.0],
        ]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].segments, vec![0, 3]);
    }

    fn segment_strategy() -> impl Strategy<Value = Segment> {
        let coord = || -10.0..10.0f64;
        prop_oneof![
            3 => (coord(), coord(), coord(), coord())
                .prop_map(|(x1, y1, x2, y2)| Segment::new(x1, y1, x2, y2)),
            1 => (coord(), coord(), coord()).prop_map(|(x1, x2, y)| Segment::new(x1, y, x2, y)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn sweep_agrees_with_brute_force(segments in prop::collection::vec(segment_strategy(), 0..12)) {
            both(&segments);
        }
    }

    #[test]
    fn report_uses_six_decimals() {
        let report = format_report(&[Intersection {
            point: Point::new(1.0, -0.5),
            segments: vec![0, 1],
        }]);
        assert_eq!(report, "Intersection: 1.000000 -0.500000\n");
    }
}
