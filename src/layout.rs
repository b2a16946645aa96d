//! Radial arc geometry for the three menu rings.
//!
//! Angles are radians measured clockwise from 12 o'clock, matching the
//! painter's screen orientation (+x right, +y down). Ring windows may run
//! past 2π so that a full circle starting at 270° needs no wraparound
//! arithmetic; `polar_angle` and `ArcSegment::contains` account for the
//! alias when hit-testing.
//!
//! Geometry is recomputed from scratch on every frame; an `ArcSegment` is
//! never stored across state changes.

use std::collections::HashMap;
use std::f32::consts::{PI, TAU};

use crate::menu::MenuItem;

/// Gap between adjacent arcs of a ring, in radians.
pub const PAD_ANGLE: f32 = 0.02;

/// Pixel size of the widget all ring radii are expressed against; actual
/// radii scale linearly with the rendered size.
pub const REFERENCE_SIZE: f32 = 450.0;

const DEG: f32 = PI / 180.0;

struct RingSpec {
    start: f32,
    end: f32,
    /// Radii at `REFERENCE_SIZE`.
    inner: f32,
    outer: f32,
}

/// Per-ring angular windows and radii. The hub always spans the full
/// circle; both outer rings share the 270°→630° window regardless of how
/// many entries they hold.
const RING_SPECS: [RingSpec; 3] = [
    RingSpec { start: 0.0, end: TAU, inner: 0.0, outer: 60.0 },
    RingSpec { start: 270.0 * DEG, end: 630.0 * DEG, inner: 70.0, outer: 140.0 },
    RingSpec { start: 270.0 * DEG, end: 630.0 * DEG, inner: 150.0, outer: 220.0 },
];

/// One angular slice of a ring, tied back to its entry by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub item_index: usize,
    pub ring: usize,
    pub start_angle: f32,
    pub end_angle: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

impl ArcSegment {
    pub fn span(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f32 {
        (self.start_angle + self.end_angle) * 0.5
    }

    pub fn mid_radius(&self) -> f32 {
        (self.inner_radius + self.outer_radius) * 0.5
    }

    /// Offset of the arc's visual center from the widget center, in
    /// pixels (+x right, +y down). Labels and icons anchor here.
    pub fn centroid(&self) -> (f32, f32) {
        let a = self.mid_angle();
        let r = self.mid_radius();
        (r * a.sin(), -r * a.cos())
    }

    /// Polar hit test. `angle` must already be normalized to [0, 2π);
    /// the +2π alias is checked so windows past a full turn still match.
    pub fn contains(&self, angle: f32, radius: f32) -> bool {
        if radius < self.inner_radius || radius > self.outer_radius {
            return false;
        }
        let in_window = |a: f32| a >= self.start_angle && a < self.end_angle;
        in_window(angle) || in_window(angle + TAU)
    }
}

/// Clockwise-from-top angle of the point (`dx`, `dy`) relative to the
/// widget center, normalized to [0, 2π).
pub fn polar_angle(dx: f32, dy: f32) -> f32 {
    let a = dx.atan2(-dy);
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

/// The single full-circle hub segment (ring 0). The hub carries the gate
/// display, not a tree entry, and never takes part in the pie partition.
pub fn hub_segment(size: f32) -> ArcSegment {
    let scale = size / REFERENCE_SIZE;
    ArcSegment {
        item_index: 0,
        ring: 0,
        start_angle: 0.0,
        end_angle: TAU,
        inner_radius: 0.0,
        outer_radius: RING_SPECS[0].outer * scale,
    }
}

/// Partition a ring's window into one arc per entry.
///
/// Every entry gets an equal angular share of the window; `PAD_ANGLE` is
/// carved out between neighbors, half on each side, so the drawn spans
/// plus the gaps exactly fill the window. Arcs keep the input order; the
/// partition never sorts. An empty entry list yields an empty partition.
pub fn layout_ring(items: &[MenuItem], ring: usize, size: f32) -> Vec<ArcSegment> {
    if ring == 0 {
        return vec![hub_segment(size)];
    }
    let Some(spec) = RING_SPECS.get(ring) else {
        return Vec::new();
    };
    if items.is_empty() {
        return Vec::new();
    }

    let scale = size / REFERENCE_SIZE;
    let inner_radius = spec.inner * scale;
    let outer_radius = spec.outer * scale;
    let share = (spec.end - spec.start) / items.len() as f32;

    items
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let start = spec.start + i as f32 * share + PAD_ANGLE * 0.5;
            ArcSegment {
                item_index: i,
                ring,
                start_angle: start,
                end_angle: start + share - PAD_ANGLE,
                inner_radius,
                outer_radius,
            }
        })
        .collect()
}

/// Manual label nudges, keyed by entry value.
///
/// A few entries have labels whose centroid anchor lands against a
/// neighboring arc; rather than scatter conditionals through the painter,
/// the corrections live in one injectable table. Unknown values get a
/// zero offset. Offsets are in pixels at the rendered size.
#[derive(Debug, Clone)]
pub struct LabelOffsets {
    overrides: HashMap<String, (f32, f32)>,
}

impl LabelOffsets {
    pub fn empty() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    pub fn with_offset(mut self, value: impl Into<String>, dx: f32, dy: f32) -> Self {
        self.overrides.insert(value.into(), (dx, dy));
        self
    }

    pub fn offset_for(&self, value: &str) -> (f32, f32) {
        self.overrides.get(value).copied().unwrap_or((0.0, 0.0))
    }
}

impl Default for LabelOffsets {
    /// Corrections for the bundled dataset: the long AML service label
    /// drops toward the ring center, and the two bank entries separate
    /// from each other.
    fn default() -> Self {
        Self::empty()
            .with_offset("service_aml", 0.0, 8.0)
            .with_offset("bank_account", -6.0, 4.0)
            .with_offset("bank_card", 6.0, -4.0)
    }
}
