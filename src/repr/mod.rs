/*!
# Representations

Three interchangeable storage backends implementing [`Graph`]:

| Representation | Storage | `neighbors_of` unknown vertex |
|---|---|---|
| [`AdjacencyListGraph`] | ordered map of destination lists | empty |
| [`AdjacencyMatrixGraph`] | `capacity x capacity` booleans | [`GraphError::VertexNotFound`] |
| [`IncidenceMatrixGraph`] | `vertices x edges` markers | empty (error if strict) |

Each representation compares equal to and hashes like any other holding the same vertices and
edges. [`digest`] offers a platform independent alternative to [`Graph::structure_hash`].
*/

use crate::{ops::*, *};

mod incidence;
mod list;
mod matrix;

pub mod digest;

pub use incidence::*;
pub use list::*;
pub use matrix::*;
