/*!
# Graph Algorithms

Algorithms built on top of the [`Graph`] contract. They never branch on the concrete
representation and therefore work with `&dyn Graph` as well.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use digraphs::algo::*;
```
*/

mod topological;

use crate::{error::Result, prelude::*};

pub use topological::*;
