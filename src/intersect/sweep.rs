//! Bentley–Ottmann sweep.
//!
//! The sweep line moves from the top of the plane to the bottom. Events are
//! segment endpoints plus crossings discovered between segments that become
//! neighbours on the sweep line. The status holds the segments cut by the
//! sweep line, ordered left to right just below the current event.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::Intersection;
use crate::geometry::{Crossing, Point, Segment, EPSILON};

/// Event queue key: sweep order over points.
#[derive(Debug, Clone, Copy)]
struct EventKey(Point);

impl PartialEq for EventKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EventKey {}

impl PartialOrd for EventKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EventKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.sweep_cmp(&other.0)
    }
}

/// Segments that start or end at an event point.
///
/// Crossing events carry no segments; the segments through them are found
/// in the status when the event is handled.
#[derive(Debug, Default)]
struct Event {
    upper: Vec<usize>,
    lower: Vec<usize>,
}

#[derive(Debug, Default)]
struct EventQueue {
    events: BTreeMap<EventKey, Event>,
}

impl EventQueue {
    /// Key of an already queued point within tolerance of `p`, if any.
    fn find_near(&self, p: Point) -> Option<EventKey> {
        let from = EventKey(Point::new(f64::NEG_INFINITY, p.y + EPSILON));
        let to = EventKey(Point::new(f64::INFINITY, p.y - EPSILON));
        self.events
            .range(from..=to)
            .map(|(key, _)| *key)
            .find(|key| key.0.approx_eq(p))
    }

    fn entry(&mut self, p: Point) -> &mut Event {
        let key = self.find_near(p).unwrap_or(EventKey(p));
        self.events.entry(key).or_default()
    }

    fn push_upper(&mut self, p: Point, id: usize) {
        self.entry(p).upper.push(id);
    }

    fn push_lower(&mut self, p: Point, id: usize) {
        self.entry(p).lower.push(id);
    }

    fn push_crossing(&mut self, p: Point) {
        self.entry(p);
    }

    fn pop(&mut self) -> Option<(Point, Event)> {
        self.events.pop_first().map(|(key, event)| (key.0, event))
    }
}

struct Sweep<'a> {
    segments: &'a [Segment],
    queue: EventQueue,
    /// Segment ids, left to right just below the last handled event.
    status: Vec<usize>,
    found: Vec<Intersection>,
}

impl<'a> Sweep<'a> {
    fn new(segments: &'a [Segment]) -> Self {
        let mut queue = EventQueue::default();
        // Segments with an infinite or NaN coordinate cannot be placed on the sweep line.
        for (id, s) in segments.iter().enumerate().filter(|(_, s)| s.is_finite()) {
            queue.push_upper(s.upper(), id);
            queue.push_lower(s.lower(), id);
        }

        Self {
            segments,
            queue,
            status: Vec::new(),
            found: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Intersection> {
        while let Some((p, event)) = self.queue.pop() {
            self.handle(p, event);
        }
        self.found
    }

    /// Order of two segments just below the sweep line at `p`.
    fn cmp_below(&self, a: usize, b: usize, p: Point) -> Ordering {
        let (sa, sb) = (&self.segments[a], &self.segments[b]);
        let (xa, xb) = (sa.x_at(p.y, p.x), sb.x_at(p.y, p.x));

        if (xa - xb).abs() > EPSILON {
            return xa.total_cmp(&xb);
        }
        sa.descent_slope()
            .total_cmp(&sb.descent_slope())
            .then(a.cmp(&b))
    }

    fn handle(&mut self, p: Point, event: Event) {
        let Event { upper, lower } = event;

        let interior: Vec<usize> = self
            .status
            .iter()
            .copied()
            .filter(|id| !lower.contains(id) && !upper.contains(id))
            .filter(|&id| self.segments[id].contains(p))
            .collect();

        let mut through: Vec<usize> = upper
            .iter()
            .chain(&lower)
            .chain(&interior)
            .copied()
            .collect();
        through.sort_unstable();
        through.dedup();

        if through.len() > 1 {
            tracing::trace!(x = p.x, y = p.y, segments = ?through, "Intersection found");
            self.found.push(Intersection {
                point: p,
                segments: through,
            });
        }

        self.status
            .retain(|id| !lower.contains(id) && !interior.contains(id));

        // Zero-length segments appear in both lists and never enter the status.
        let mut inserted: Vec<usize> = upper
            .iter()
            .chain(&interior)
            .copied()
            .filter(|id| !lower.contains(id))
            .collect();
        inserted.sort_unstable();
        inserted.dedup();

        for &id in &inserted {
            let at = self
                .status
                .partition_point(|&other| self.cmp_below(other, id, p) == Ordering::Less);
            self.status.insert(at, id);
        }

        if inserted.is_empty() {
            let at = self
                .status
                .partition_point(|&id| self.segments[id].x_at(p.y, p.x) < p.x);
            if at > 0 && at < self.status.len() {
                self.check_pair(self.status[at - 1], self.status[at], p);
            }
            return;
        }

        let positions = self
            .status
            .iter()
            .enumerate()
            .filter(|(_, id)| inserted.contains(*id))
            .map(|(i, _)| i);
        let (first, last) = positions.fold((usize::MAX, 0), |(lo, hi), i| (lo.min(i), hi.max(i)));

        if first > 0 {
            self.check_pair(self.status[first - 1], self.status[first], p);
        }
        if last + 1 < self.status.len() {
            self.check_pair(self.status[last], self.status[last + 1], p);
        }
    }

    /// Queue the crossing of two new neighbours if the sweep has yet to reach it.
    fn check_pair(&mut self, left: usize, right: usize, p: Point) {
        // Collinear overlaps start and end at endpoints, which are queued already.
        if let Some(Crossing::Point(mut q)) = self.segments[left].crossing(&self.segments[right]) {
            // Keep queue order in step with the tolerance used by `is_after`.
            if (q.y - p.y).abs() <= EPSILON {
                q.y = p.y;
            }
            if q.is_after(p) {
                self.queue.push_crossing(q);
            }
        }
    }
}

/// Run the sweep over `segments`.
pub(super) fn run(segments: &[Segment]) -> Vec<Intersection> {
    Sweep::new(segments).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_pops_in_sweep_order_and_merges_points() {
        let mut queue = EventQueue::default();
        queue.push_lower(Point::new(0.0, 0.0), 0);
        queue.push_upper(Point::new(1.0, 1.0), 0);
        queue.push_upper(Point::new(-1.0, 0.0), 1);
        queue.push_crossing(Point::new(1.0, 1.0 + EPSILON / 2.0));

        let (p, event) = queue.pop().unwrap();
        assert_eq!(p, Point::new(1.0, 1.0));
        assert_eq!(event.upper, vec![0]);

        let (p, _) = queue.pop().unwrap();
        assert_eq!(p, Point::new(-1.0, 0.0));
        let (p, event) = queue.pop().unwrap();
        assert_eq!(p, Point::new(0.0, 0.0));
        assert_eq!(event.lower, vec![0]);
        assert!(queue.pop().is_none());
    }

    #[test]
    fn crossing_discovered_only_below_the_sweep() {
        // Segments cross at (1, 1); the sweep must find it from the neighbour test.
        let segments = [
            Segment::new(0.0, 2.0, 2.0, 0.0),
            Segment::new(0.0, 0.0, 2.0, 2.0),
        ];
        let found = run(&segments);
        assert_eq!(found.len(), 1);
        assert!(found[0].point.approx_eq(Point::new(1.0, 1.0)));
        assert_eq!(found[0].segments, vec![0, 1]);
    }

    #[test]
    fn neighbours_swap_after_crossing() {
        // Three segments fanning out from the top, crossed by one from the side.
        let segments = [
            Segment::new(0.0, 4.0, -2.0, 0.0),
            Segment::new(0.0, 4.0, 2.0, 0.0),
            Segment::new(-3.0, 2.0, 3.0, 1.0),
        ];
        let found = run(&segments);
        let points: Vec<Vec<usize>> = found.iter().map(|i| i.segments.clone()).collect();
        assert_eq!(points, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
    }
}
