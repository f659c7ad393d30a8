/*!
# Utilities

Building blocks shared by the grid-backed representations:
- [`Grid`]: the owned dense buffer that is reallocated (never resized in place) on growth/shrink,
- [`VertexIndex`] and [`compact_index`]: mapping caller-chosen vertex ids to dense slots,
- [`CapacityPolicy`]: when to grow or shrink a grid dimension.

You probably only need [`CapacityPolicy`] to configure a representation.
*/

pub mod capacity;
pub mod grid;
pub mod vertex_index;

pub use capacity::CapacityPolicy;
pub use grid::Grid;
pub use vertex_index::{compact_index, VertexIndex};
