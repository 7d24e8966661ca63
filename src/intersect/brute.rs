//! Pairwise intersection test.

use super::Intersection;
use crate::geometry::{Crossing, Point, Segment};

/// Test every pair and group the hits by point.
pub(super) fn run(segments: &[Segment]) -> Vec<Intersection> {
    let mut found: Vec<Intersection> = Vec::new();

    let mut record = |point: Point, a: usize, b: usize| {
        match found.iter_mut().find(|i| i.point.approx_eq(point)) {
            Some(existing) => existing.segments.extend([a, b]),
            None => found.push(Intersection {
                point,
                segments: vec![a, b],
            }),
        }
    };

    let finite = || segments.iter().enumerate().filter(|(_, s)| s.is_finite());
    for (i, a) in finite() {
        for (j, b) in finite().filter(|&(j, _)| j > i) {
            match a.crossing(b) {
                Some(Crossing::Point(p)) => record(p, i, j),
                Some(Crossing::Overlap(p, q)) => {
                    record(p, i, j);
                    record(q, i, j);
                },
                None => {},
            }
        }
    }

    for i in &mut found {
        i.segments.sort_unstable();
        i.segments.dedup();
    }
    found.sort_by(|a, b| a.point.sweep_cmp(&b.point));
    found
}
