//! Line segments and the predicates used to intersect them.

use super::{Point, EPSILON};

/// A line segment, stored exactly as it was read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    /// X coordinate of the first endpoint.
    pub x1: f64,
    /// Y coordinate of the first endpoint.
    pub y1: f64,
    /// X coordinate of the second endpoint.
    pub x2: f64,
    /// Y coordinate of the second endpoint.
    pub y2: f64,
}

/// Turn direction of an ordered triple of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The three points lie on one line.
    Collinear,
    /// The triple turns clockwise.
    Clockwise,
    /// The triple turns counter-clockwise.
    CounterClockwise,
}

/// Where two segments meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing {
    /// The segments share exactly one point.
    Point(Point),
    /// The segments are collinear and overlap between two distinct points.
    Overlap(Point, Point),
}

/// Orientation of `(p, q, r)`, treating near-zero turns as collinear.
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let (ax, ay) = (q.x - p.x, q.y - p.y);
    let (bx, by) = (r.x - p.x, r.y - p.y);
    let cross = ax * by - ay * bx;
    let scale = (ax.hypot(ay) * bx.hypot(by)).max(1.0);

    if cross.abs() <= EPSILON * scale {
        Orientation::Collinear
    } else if cross < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// For collinear `p`, `q`, `r`: true if `q` lies within the bounding box of `pr`.
fn within_box(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) + EPSILON
        && q.x >= p.x.min(r.x) - EPSILON
        && q.y <= p.y.max(r.y) + EPSILON
        && q.y >= p.y.min(r.y) - EPSILON
}

impl Segment {
    /// Create a segment from its two endpoints' coordinates.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// First endpoint as given in the input.
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Second endpoint as given in the input.
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// The endpoint a top-to-bottom sweep reaches first.
    pub fn upper(&self) -> Point {
        let (a, b) = (self.start(), self.end());
        if a.sweep_cmp(&b).is_le() {
            a
        } else {
            b
        }
    }

    /// The endpoint a top-to-bottom sweep reaches last.
    pub fn lower(&self) -> Point {
        let (a, b) = (self.start(), self.end());
        if a.sweep_cmp(&b).is_le() {
            b
        } else {
            a
        }
    }

    /// Segment length.
    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }

    /// True if every coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        [self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|v| v.is_finite())
    }

    /// True if both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start().approx_eq(self.end())
    }

    /// True if the segment runs parallel to the x axis.
    pub fn is_horizontal(&self) -> bool {
        (self.y1 - self.y2).abs() <= EPSILON
    }

    /// Shortest distance from `p` to any point of the segment.
    pub fn distance_to(&self, p: Point) -> f64 {
        let (a, b) = (self.start(), self.end());
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return a.distance(p);
        }
        let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
        p.distance(Point::new(a.x + t * dx, a.y + t * dy))
    }

    /// True if `p` lies on the segment.
    pub fn contains(&self, p: Point) -> bool {
        self.distance_to(p) <= EPSILON
    }

    /// X coordinate where the horizontal line at `y` meets the segment.
    ///
    /// Horizontal segments have no single answer; they report `hint` clamped
    /// to their own x range.
    pub fn x_at(&self, y: f64, hint: f64) -> f64 {
        if self.is_horizontal() {
            return hint.clamp(self.x1.min(self.x2), self.x1.max(self.x2));
        }
        let (u, l) = (self.upper(), self.lower());
        u.x + (y - u.y) * (l.x - u.x) / (l.y - u.y)
    }

    /// Horizontal drift per unit of downward travel along the segment.
    ///
    /// Orders segments that meet at a point by where they go below it.
    /// Horizontal segments sort after everything else.
    pub fn descent_slope(&self) -> f64 {
        if self.is_horizontal() {
            return f64::INFINITY;
        }
        let (u, l) = (self.upper(), self.lower());
        (l.x - u.x) / (u.y - l.y)
    }

    /// Find where this segment meets `other`, if anywhere.
    ///
    /// Endpoint contact counts as a crossing.
    pub fn crossing(&self, other: &Self) -> Option<Crossing> {
        let (p1, q1) = (self.start(), self.end());
        let (p2, q2) = (other.start(), other.end());

        let o1 = orientation(p1, q1, p2);
        let o2 = orientation(p1, q1, q2);
        let o3 = orientation(p2, q2, p1);
        let o4 = orientation(p2, q2, q1);

        if [o1, o2, o3, o4].iter().all(|&o| o == Orientation::Collinear) {
            return self.collinear_overlap(other);
        }

        if o1 != o2 && o3 != o4 {
            return self.line_crossing(other).map(Crossing::Point);
        }

        if o1 == Orientation::Collinear && within_box(p1, p2, q1) {
            return Some(Crossing::Point(p2));
        }
        if o2 == Orientation::Collinear && within_box(p1, q2, q1) {
            return Some(Crossing::Point(q2));
        }
        if o3 == Orientation::Collinear && within_box(p2, p1, q2) {
            return Some(Crossing::Point(p1));
        }
        if o4 == Orientation::Collinear && within_box(p2, q1, q2) {
            return Some(Crossing::Point(q1));
        }

        None
    }

    /// Intersection of the two supporting lines, snapped onto a nearby endpoint.
    fn line_crossing(&self, other: &Self) -> Option<Point> {
        let a1 = self.y2 - self.y1;
        let b1 = self.x1 - self.x2;
        let c1 = a1 * self.x1 + b1 * self.y1;

        let a2 = other.y2 - other.y1;
        let b2 = other.x1 - other.x2;
        let c2 = a2 * other.x1 + b2 * other.y1;

        let determinant = a1 * b2 - a2 * b1;
        if determinant == 0.0 {
            return None;
        }

        let p = Point::new(
            (b2 * c1 - b1 * c2) / determinant,
            (a1 * c2 - a2 * c1) / determinant,
        );

        // A crossing on a horizontal segment takes that segment's exact y.
        let p = match (self.is_horizontal(), other.is_horizontal()) {
            (true, false) => Point::new(other.x_at(self.y1, p.x), self.y1),
            (false, true) => Point::new(self.x_at(other.y1, p.x), other.y1),
            _ => p,
        };

        let snapped = [self.start(), self.end(), other.start(), other.end()]
            .into_iter()
            .find(|e| e.approx_eq(p))
            .unwrap_or(p);
        Some(snapped)
    }

    fn collinear_overlap(&self, other: &Self) -> Option<Crossing> {
        let axis = if self.length() >= other.length() {
            self
        } else {
            other
        };
        let (dx, dy) = (axis.x2 - axis.x1, axis.y2 - axis.y1);
        let len = dx.hypot(dy);

        if len == 0.0 {
            // Both segments are single points.
            return self
                .start()
                .approx_eq(other.start())
                .then(|| Crossing::Point(self.start()));
        }

        let project = |p: Point| ((p.x - axis.x1) * dx + (p.y - axis.y1) * dy) / len;
        let span = |s: &Self| {
            let (a, b) = ((project(s.start()), s.start()), (project(s.end()), s.end()));
            if a.0 <= b.0 {
                (a, b)
            } else {
                (b, a)
            }
        };

        let (lo_a, hi_a) = span(self);
        let (lo_b, hi_b) = span(other);
        let lo = if lo_a.0 >= lo_b.0 { lo_a } else { lo_b };
        let hi = if hi_a.0 <= hi_b.0 { hi_a } else { hi_b };

        if lo.0 > hi.0 + EPSILON {
            None
        } else if hi.0 - lo.0 <= EPSILON {
            Some(Crossing::Point(lo.1))
        } else {
            Some(Crossing::Overlap(lo.1, hi.1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_and_lower_follow_sweep_order() {
        let s = Segment::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(s.upper(), Point::new(1.0, 1.0));
        assert_eq!(s.lower(), Point::new(0.0, 0.0));

        // Horizontal: the left end is met first.
        let h = Segment::new(4.0, 2.0, -1.0, 2.0);
        assert_eq!(h.upper(), Point::new(-1.0, 2.0));
        assert_eq!(h.lower(), Point::new(4.0, 2.0));
    }

    #[test]
    fn proper_crossing() {
        let a = Segment::new(0.0, 0.0, 2.0, 2.0);
        let b = Segment::new(0.0, 2.0, 2.0, 0.0);
        assert_eq!(a.crossing(&b), Some(Crossing::Point(Point::new(1.0, 1.0))));
    }

    #[test]
    fn shared_endpoint_is_a_crossing() {
        let a = Segment::new(0.0, 0.0, 1.0, 1.0);
        let b = Segment::new(1.0, 1.0, 2.0, 0.0);
        assert_eq!(a.crossing(&b), Some(Crossing::Point(Point::new(1.0, 1.0))));
    }

    #[test]
    fn crossing_a_horizontal_keeps_its_height() {
        let slanted = Segment::new(
            3.945837512537613,
            0.645937813440321,
            0.5446339017051154,
            6.949849548645938,
        );
        let horizontal = Segment::new(0.5656970912738215, 6.0, 2.966900702106319, 6.0);
        for crossing in [slanted.crossing(&horizontal), horizontal.crossing(&slanted)] {
            let Some(Crossing::Point(p)) = crossing else {
                panic!("expected a point, got {crossing:?}");
            };
            assert_eq!(p.y, 6.0);
        }
    }

    #[test]
    fn t_junction() {
        let a = Segment::new(0.0, 0.0, 4.0, 0.0);
        let b = Segment::new(2.0, 0.0, 2.0, 3.0);
        assert_eq!(a.crossing(&b), Some(Crossing::Point(Point::new(2.0, 0.0))));
    }

    #[test]
    fn disjoint_and_parallel_segments() {
        let a = Segment::new(0.0, 0.0, 1.0, 0.0);
        let b = Segment::new(0.0, 1.0, 1.0, 1.0);
        assert_eq!(a.crossing(&b), None);

        let c = Segment::new(0.0, 0.0, 1.0, 1.0);
        let d = Segment::new(3.0, 0.0, 2.0, 1.0);
        assert_eq!(c.crossing(&d), None);

        let e = Segment::new(0.0, 0.0, 1.0, 0.0);
        let f = Segment::new(2.0, 0.0, 3.0, 0.0);
        assert_eq!(e.crossing(&f), None);
    }

    #[test]
    fn collinear_overlap_reports_both_ends() {
        let a = Segment::new(0.0, 0.0, 4.0, 0.0);
        let b = Segment::new(3.0, 0.0, 1.0, 0.0);
        assert_eq!(
            a.crossing(&b),
            Some(Crossing::Overlap(Point::new(1.0, 0.0), Point::new(3.0, 0.0)))
        );
    }

    #[test]
    fn collinear_touch_is_a_point() {
        let a = Segment::new(0.0, 0.0, 1.0, 1.0);
        let b = Segment::new(1.0, 1.0, 2.0, 2.0);
        assert_eq!(a.crossing(&b), Some(Crossing::Point(Point::new(1.0, 1.0))));
    }

    #[test]
    fn degenerate_segment_on_another() {
        let dot = Segment::new(1.0, 1.0, 1.0, 1.0);
        let line = Segment::new(0.0, 0.0, 2.0, 2.0);
        assert!(dot.is_degenerate());
        assert_eq!(
            dot.crossing(&line),
            Some(Crossing::Point(Point::new(1.0, 1.0)))
        );
        assert_eq!(dot.crossing(&Segment::new(5.0, 0.0, 6.0, 0.0)), None);
    }

    #[test]
    fn x_at_and_slopes() {
        let s = Segment::new(0.0, 0.0, 2.0, 4.0);
        assert_eq!(s.x_at(2.0, 0.0), 1.0);
        assert_eq!(s.descent_slope(), -0.5);

        let h = Segment::new(0.0, 1.0, 3.0, 1.0);
        assert_eq!(h.x_at(1.0, 5.0), 3.0);
        assert_eq!(h.x_at(1.0, 2.0), 2.0);
        assert_eq!(h.descent_slope(), f64::INFINITY);
    }

    #[test]
    fn contains_checks_distance() {
        let s = Segment::new(0.0, 0.0, 2.0, 0.0);
        assert!(s.contains(Point::new(1.0, 0.0)));
        assert!(s.contains(Point::new(2.0, 0.0)));
        assert!(!s.contains(Point::new(3.0, 0.0)));
        assert!(!s.contains(Point::new(1.0, 0.1)));
    }
}
