/*!
# Vertex Index

Translates caller-chosen vertex ids into dense slots `0..len` (and back) for representations
backed by a [`Grid`](super::Grid).

Slots are handed out in insertion order. Removing a vertex closes the gap: every slot above the
removed one moves down by one, as described by the pure function [`compact_index`].
*/

use std::cmp::Ordering;

use fxhash::FxHashMap;

use crate::node::*;

/// Returns the slot that `old` occupies after slot `removed` was taken out,
/// or `None` if `old` is the removed slot itself.
///
/// # Example
/// ```
/// use digraphs::utils::compact_index;
///
/// assert_eq!(compact_index(0, 2), Some(0));
/// assert_eq!(compact_index(2, 2), None);
/// assert_eq!(compact_index(5, 2), Some(4));
/// ```
pub fn compact_index(old: usize, removed: usize) -> Option<usize> {
    match old.cmp(&removed) {
        Ordering::Less => Some(old),
        Ordering::Equal => None,
        Ordering::Greater => Some(old - 1),
    }
}

/// Bidirectional `Vertex <-> slot` table
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    slot_of: FxHashMap<Vertex, usize>,
    vertex_at: Vec<Vertex>,
}

impl VertexIndex {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the table `i <-> i` for all `i` in `0..n`
    pub fn identity(n: NumVertices) -> Self {
        let mut index = Self::new();
        for u in 0..n {
            index.insert(u as Vertex);
        }
        index
    }

    /// Returns the number of registered vertices
    pub fn len(&self) -> NumVertices {
        self.vertex_at.len()
    }

    /// Returns *true* if no vertex is registered
    pub fn is_empty(&self) -> bool {
        self.vertex_at.is_empty()
    }

    /// Returns the slot of `u` if registered
    pub fn slot_of(&self, u: Vertex) -> Option<usize> {
        self.slot_of.get(&u).copied()
    }

    /// Returns the vertex stored in `slot`
    /// ** Panics if `slot >= len` **
    pub fn vertex_at(&self, slot: usize) -> Vertex {
        self.vertex_at[slot]
    }

    /// Returns *true* if `u` is registered
    pub fn contains(&self, u: Vertex) -> bool {
        self.slot_of.contains_key(&u)
    }

    /// Returns all registered vertices ordered by slot
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertex_at
    }

    /// Registers `u` in the next free slot.
    /// Returns the slot of `u` and *true* exactly if `u` was not registered before.
    pub fn insert(&mut self, u: Vertex) -> (usize, bool) {
        if let Some(slot) = self.slot_of(u) {
            return (slot, false);
        }

        let slot = self.vertex_at.len();
        self.slot_of.insert(u, slot);
        self.vertex_at.push(u);
        (slot, true)
    }

    /// Unregisters `u` and compacts all slots above it.
    /// Returns the slot `u` occupied if it was registered.
    pub fn remove(&mut self, u: Vertex) -> Option<usize> {
        let removed = self.slot_of.remove(&u)?;
        self.vertex_at.remove(removed);

        for slot in self.slot_of.values_mut() {
            let new_slot = compact_index(*slot, removed);
            debug_assert!(new_slot.is_some());
            if let Some(new_slot) = new_slot {
                *slot = new_slot;
            }
        }

        debug_assert!(
            self.vertex_at
                .iter()
                .enumerate()
                .all(|(i, v)| self.slot_of[v] == i)
        );

        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn compact_index_closes_gap() {
        let mapped = (0..6).map(|i| compact_index(i, 3)).collect_vec();
        assert_eq!(
            mapped,
            vec![Some(0), Some(1), Some(2), None, Some(3), Some(4)]
        );

        assert_eq!(compact_index(0, 0), None);
        assert_eq!(compact_index(1, 0), Some(0));
        assert_eq!(compact_index(7, 9), Some(7));
    }

    #[test]
    fn compact_index_is_a_bijection_onto_prefix() {
        for n in 1..20 {
            for removed in 0..n {
                let targets = (0..n).filter_map(|i| compact_index(i, removed)).collect_vec();
                assert_eq!(targets, (0..n - 1).collect_vec());
            }
        }
    }

    #[test]
    fn insert_assigns_slots_in_order() {
        let mut index = VertexIndex::new();
        assert_eq!(index.insert(7), (0, true));
        assert_eq!(index.insert(-3), (1, true));
        assert_eq!(index.insert(7), (0, false));
        assert_eq!(index.len(), 2);
        assert_eq!(index.vertices(), &[7, -3]);
        assert_eq!(index.slot_of(-3), Some(1));
        assert_eq!(index.slot_of(4), None);
        assert_eq!(index.vertex_at(1), -3);
    }

    #[test]
    fn remove_middle_rewrites_both_directions() {
        let mut index = VertexIndex::new();
        for u in [10, 20, 30, 40, 50] {
            index.insert(u);
        }

        assert_eq!(index.remove(30), Some(2));
        assert_eq!(index.remove(30), None);
        assert_eq!(index.vertices(), &[10, 20, 40, 50]);
        for (slot, &u) in index.vertices().iter().enumerate() {
            assert_eq!(index.slot_of(u), Some(slot));
            assert_eq!(index.vertex_at(slot), u);
        }

        assert_eq!(index.insert(60), (4, true));
        assert!(!index.contains(30));
    }

    #[test]
    fn identity() {
        let index = VertexIndex::identity(4);
        assert_eq!(index.vertices(), &[0, 1, 2, 3]);
        assert!((0..4).all(|u| index.slot_of(u) == Some(u as usize)));
        assert!(VertexIndex::identity(0).is_empty());
    }
}
