use bytemuck::{Pod, Zeroable};

/// Axis-aligned bounding box in the plane.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Storage is exactly the caller's flat layout: four `f32` scalars in
///   `(min_x, min_y, max_x, max_y)` order, so a coordinate slice of length
///   `4 * n` reinterprets as `&[Aabb]` without copying.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb([f32; 4]);

const _: () = assert!(core::mem::size_of::<Aabb>() == 16);

impl Aabb {
    /// Constructs an AABB from its corner coordinates.
    ///
    /// # Panics
    /// Panics if `min_x > max_x` or `min_y > max_y`.
    #[must_use]
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        assert!(min_x <= max_x && min_y <= max_y, "invalid AABB: min > max");
        Self([min_x, min_y, max_x, max_y])
    }

    /// Builds an AABB centered at `(cx, cy)` with half-extents `hx, hy`.
    #[must_use]
    pub fn from_center_half_extents(cx: f32, cy: f32, hx: f32, hy: f32) -> Self {
        Self::new(cx - hx, cy - hy, cx + hx, cy + hy)
    }

    /// Returns the minimum X coordinate.
    #[must_use]
    pub fn min_x(&self) -> f32 {
        self.0[0]
    }

    /// Returns the minimum Y coordinate.
    #[must_use]
    pub fn min_y(&self) -> f32 {
        self.0[1]
    }

    /// Returns the maximum X coordinate.
    #[must_use]
    pub fn max_x(&self) -> f32 {
        self.0[2]
    }

    /// Returns the maximum Y coordinate.
    #[must_use]
    pub fn max_y(&self) -> f32 {
        self.0[3]
    }

    /// Returns the four scalars in flat `(min_x, min_y, max_x, max_y)` order.
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// Returns `true` if this AABB overlaps another (inclusive on edges).
    ///
    /// This is the plain geometric predicate. The sweep-based broad phase
    /// resolves exact edge contact with an endpoint-id tie-break instead;
    /// see [`crate::broad::pair_overlaps`].
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.max_x() < other.min_x()
            || self.min_x() > other.max_x()
            || self.max_y() < other.min_y()
            || self.min_y() > other.max_y())
    }

    /// Returns the union of two AABBs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self([
            self.min_x().min(other.min_x()),
            self.min_y().min(other.min_y()),
            self.max_x().max(other.max_x()),
            self.max_y().max(other.max_y()),
        ])
    }

    /// Inflates the box by a uniform margin `m` in all directions.
    #[must_use]
    pub fn inflate(&self, m: f32) -> Self {
        Self([
            self.min_x() - m,
            self.min_y() - m,
            self.max_x() + m,
            self.max_y() + m,
        ])
    }
}
