use crate::graphs::VertexId;

/// Binary min-heap over the vertex ids `1..=capacity` whose priorities live in
/// a slice owned by the caller.
///
/// The heap never stores priorities itself; every operation that reorders
/// elements reads them from `priorities[vertex]`. The caller may lower the
/// priority of a queued vertex at any time as long as it calls
/// [`IndexedMinHeap::decrease_key`] for that vertex before the next other
/// operation.
///
/// `heap` is 1-based (`heap[0]` is unused) and `positions[v]` is the index of
/// `v` in `heap`, or 0 if `v` is not queued. Between operations
/// `positions[heap[k]] == k` and `priorities[heap[k / 2]] <= priorities[heap[k]]`
/// hold for every occupied `k > 1`.
///
/// Ties are broken by position in the heap, not by vertex id. Callers that need
/// a secondary ordering encode it in the priority type, e.g.
/// `(Distance, VertexId)`.
#[derive(Clone, Debug)]
pub struct IndexedMinHeap {
    heap: Vec<VertexId>,
    positions: Vec<usize>,
}

impl IndexedMinHeap {
    /// Creates an empty heap able to hold every vertex in `1..=capacity`.
    pub fn with_capacity(capacity: u32) -> Self {
        let mut heap = Vec::with_capacity(capacity as usize + 1);
        heap.push(0);
        IndexedMinHeap {
            heap,
            positions: vec![0; capacity as usize + 1],
        }
    }

    pub fn capacity(&self) -> u32 {
        (self.positions.len() - 1) as u32
    }

    pub fn len(&self) -> usize {
        self.heap.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `vertex` is currently queued.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.positions
            .get(vertex as usize)
            .is_some_and(|&position| position != 0)
    }

    /// The vertex with the smallest priority, without removing it.
    pub fn peek(&self) -> Option<VertexId> {
        self.heap.get(1).copied()
    }

    /// Queues `vertex`.
    ///
    /// # Panics
    ///
    /// If `vertex` is outside `1..=capacity` or already queued.
    pub fn insert<P: Ord + Copy>(&mut self, vertex: VertexId, priorities: &[P]) {
        self.assert_in_universe(vertex);
        assert!(
            !self.contains(vertex),
            "heap invariant violation: vertex {} inserted twice",
            vertex
        );

        self.heap.push(vertex);
        let position = self.len();
        self.positions[vertex as usize] = position;
        self.sift_up(position, priorities);
    }

    /// Removes and returns the vertex with the smallest priority, or `None` if
    /// the heap is empty.
    pub fn pop_min<P: Ord + Copy>(&mut self, priorities: &[P]) -> Option<VertexId> {
        if self.is_empty() {
            return None;
        }

        let min_vertex = self.heap.swap_remove(1);
        self.positions[min_vertex as usize] = 0;

        if !self.is_empty() {
            let moved = self.heap[1];
            self.positions[moved as usize] = 1;
            self.sift_down(1, priorities);
        }

        Some(min_vertex)
    }

    /// Restores the heap order after the priority of `vertex` was lowered.
    ///
    /// # Panics
    ///
    /// If `vertex` is not queued.
    pub fn decrease_key<P: Ord + Copy>(&mut self, vertex: VertexId, priorities: &[P]) {
        assert!(
            self.contains(vertex),
            "heap invariant violation: decrease_key on vertex {} which is not queued",
            vertex
        );
        let position = self.positions[vertex as usize];
        self.sift_up(position, priorities);
        debug_assert!(
            self.children_not_smaller(self.positions[vertex as usize], priorities),
            "heap invariant violation: priority of vertex {} was raised",
            vertex
        );
    }

    /// Queues `vertex` or, if it is already queued, moves it up to reflect its
    /// lowered priority.
    pub fn insert_or_decrease<P: Ord + Copy>(&mut self, vertex: VertexId, priorities: &[P]) {
        if self.contains(vertex) {
            self.decrease_key(vertex, priorities);
        } else {
            self.insert(vertex, priorities);
        }
    }

    /// Checks the position table and the heap order against `priorities`.
    pub fn is_valid<P: Ord + Copy>(&self, priorities: &[P]) -> bool {
        let positions_match = (1..self.heap.len())
            .all(|position| self.positions[self.heap[position] as usize] == position);
        let queued = self.positions.iter().filter(|&&position| position != 0).count();
        let ordered = (2..self.heap.len()).all(|position| {
            priorities[self.heap[position / 2] as usize] <= priorities[self.heap[position] as usize]
        });
        positions_match && queued == self.len() && ordered
    }

    fn children_not_smaller<P: Ord + Copy>(&self, position: usize, priorities: &[P]) -> bool {
        let priority = priorities[self.heap[position] as usize];
        [2 * position, 2 * position + 1]
            .into_iter()
            .filter(|&child| child <= self.len())
            .all(|child| priority <= priorities[self.heap[child] as usize])
    }

    fn assert_in_universe(&self, vertex: VertexId) {
        assert!(
            vertex != 0 && vertex <= self.capacity(),
            "heap invariant violation: vertex {} is outside 1..={}",
            vertex,
            self.capacity()
        );
    }

    fn sift_up<P: Ord + Copy>(&mut self, mut position: usize, priorities: &[P]) {
        let vertex = self.heap[position];
        let priority = priorities[vertex as usize];

        while position > 1 {
            let parent = self.heap[position / 2];
            if priority >= priorities[parent as usize] {
                break;
            }
            self.heap[position] = parent;
            self.positions[parent as usize] = position;
            position /= 2;
        }

        self.heap[position] = vertex;
        self.positions[vertex as usize] = position;
    }

    fn sift_down<P: Ord + Copy>(&mut self, mut position: usize, priorities: &[P]) {
        let len = self.len();
        let vertex = self.heap[position];
        let priority = priorities[vertex as usize];

        while 2 * position <= len {
            let mut child = 2 * position;
            if child < len
                && priorities[self.heap[child + 1] as usize] < priorities[self.heap[child] as usize]
            {
                child += 1;
            }
            let child_vertex = self.heap[child];
            if priority <= priorities[child_vertex as usize] {
                break;
            }
            self.heap[position] = child_vertex;
            self.positions[child_vertex as usize] = position;
            position = child;
        }

        self.heap[position] = vertex;
        self.positions[vertex as usize] = position;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::graphs::Distance;

    #[test]
    fn pops_in_priority_order() {
        let priorities: Vec<Distance> = vec![0, 5, 3, 9, 1, 7];
        let mut heap = IndexedMinHeap::with_capacity(5);
        for vertex in 1..=5 {
            heap.insert(vertex, &priorities);
            assert!(heap.is_valid(&priorities));
        }

        let mut order = Vec::new();
        while let Some(vertex) = heap.pop_min(&priorities) {
            assert!(!heap.contains(vertex));
            assert!(heap.is_valid(&priorities));
            order.push(vertex);
        }
        assert_eq!(order, vec![4, 2, 1, 5, 3]);
        assert!(heap.is_empty());
    }

    #[test]
    fn decrease_key_moves_vertex_to_front() {
        let mut priorities: Vec<Distance> = vec![0, 10, 20, 30, 40];
        let mut heap = IndexedMinHeap::with_capacity(4);
        for vertex in 1..=4 {
            heap.insert(vertex, &priorities);
        }

        priorities[4] = 5;
        heap.decrease_key(4, &priorities);
        assert!(heap.is_valid(&priorities));
        assert_eq!(heap.peek(), Some(4));
        assert_eq!(heap.pop_min(&priorities), Some(4));
        assert_eq!(heap.pop_min(&priorities), Some(1));
    }

    #[test]
    fn pop_from_empty_heap_is_none() {
        let priorities: Vec<Distance> = vec![0, 0];
        let mut heap = IndexedMinHeap::with_capacity(1);
        assert_eq!(heap.pop_min(&priorities), None);
        heap.insert(1, &priorities);
        assert_eq!(heap.pop_min(&priorities), Some(1));
        assert_eq!(heap.pop_min(&priorities), None);
    }

    #[test]
    fn vertex_can_be_queued_again_after_pop() {
        let priorities: Vec<Distance> = vec![0, 2, 1];
        let mut heap = IndexedMinHeap::with_capacity(2);
        heap.insert(1, &priorities);
        assert_eq!(heap.pop_min(&priorities), Some(1));
        heap.insert(1, &priorities);
        heap.insert(2, &priorities);
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.pop_min(&priorities), Some(2));
    }

    #[test]
    fn tuple_priorities_break_ties_by_vertex_id() {
        let priorities: Vec<(Distance, VertexId)> =
            (0..=6).map(|vertex| (vertex as Distance % 2, vertex)).collect();
        let mut heap = IndexedMinHeap::with_capacity(6);
        for vertex in [5, 3, 6, 1, 4, 2] {
            heap.insert(vertex, &priorities);
        }
        let mut order = Vec::new();
        while let Some(vertex) = heap.pop_min(&priorities) {
            order.push(vertex);
        }
        assert_eq!(order, vec![2, 4, 6, 1, 3, 5]);
    }

    #[test]
    #[should_panic(expected = "inserted twice")]
    fn double_insert_panics() {
        let priorities: Vec<Distance> = vec![0, 1];
        let mut heap = IndexedMinHeap::with_capacity(1);
        heap.insert(1, &priorities);
        heap.insert(1, &priorities);
    }

    #[test]
    #[should_panic(expected = "not queued")]
    fn decrease_key_of_absent_vertex_panics() {
        let priorities: Vec<Distance> = vec![0, 1, 2];
        let mut heap = IndexedMinHeap::with_capacity(2);
        heap.insert(1, &priorities);
        heap.decrease_key(2, &priorities);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn insert_beyond_capacity_panics() {
        let priorities: Vec<Distance> = vec![0; 4];
        let mut heap = IndexedMinHeap::with_capacity(2);
        heap.insert(3, &priorities);
    }

    #[test]
    fn random_operations_match_ordered_set() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..50 {
            let capacity = rng.gen_range(1..=64u32);
            let mut priorities = vec![Distance::MAX; capacity as usize + 1];
            let mut heap = IndexedMinHeap::with_capacity(capacity);
            let mut reference: BTreeSet<(Distance, VertexId)> = BTreeSet::new();

            for _ in 0..500 {
                let vertex = rng.gen_range(1..=capacity);
                match rng.gen_range(0..3) {
                    0 if !heap.contains(vertex) => {
                        priorities[vertex as usize] = rng.gen_range(0..1_000);
                        heap.insert(vertex, &priorities);
                        reference.insert((priorities[vertex as usize], vertex));
                    }
                    1 if heap.contains(vertex) => {
                        let old = priorities[vertex as usize];
                        let new = rng.gen_range(0..=old);
                        reference.remove(&(old, vertex));
                        priorities[vertex as usize] = new;
                        heap.decrease_key(vertex, &priorities);
                        reference.insert((new, vertex));
                    }
                    _ => match heap.pop_min(&priorities) {
                        Some(vertex) => {
                            // Equal priorities may come out in any order.
                            let priority = priorities[vertex as usize];
                            let &(min_priority, _) = reference.first().unwrap();
                            assert_eq!(priority, min_priority);
                            assert!(reference.remove(&(priority, vertex)));
                        }
                        None => assert!(reference.is_empty()),
                    },
                }
                assert!(heap.is_valid(&priorities));
                assert_eq!(heap.len(), reference.len());
            }
        }
    }
}
