use alloc::vec::Vec;

use super::handle::NodeId;

/// Slot storage with a generation counter per slot.
///
/// A slot's generation is bumped every time its element is released, so an
/// id captured together with its generation can later be checked for
/// staleness even after the slot has been reused.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<NodeId>,
}

struct Slot<T> {
    generation: u32,
    element: Option<T>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn alloc(&mut self, element: T) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.slots[id.to_index()].element = Some(element);
            id
        } else {
            assert!(
                self.slots.len() <= NodeId::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                NodeId::MAX + 1
            );
            self.slots.push(Slot {
                generation: 0,
                element: Some(element),
            });
            NodeId::from_index(self.slots.len() - 1)
        }
    }

    /// Current generation of the slot behind `id`.
    #[inline]
    pub(crate) fn generation(&self, id: NodeId) -> u32 {
        self.slots[id.to_index()].generation
    }

    /// Returns true if `id` is occupied and has not been released since
    /// `generation` was observed.
    #[inline]
    pub(crate) fn is_live(&self, id: NodeId, generation: u32) -> bool {
        self.slots
            .get(id.to_index())
            .is_some_and(|slot| slot.generation == generation && slot.element.is_some())
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &T {
        self.slots[id.to_index()].element.as_ref().expect("`Arena::get()` - `id` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        self.slots[id.to_index()].element.as_mut().expect("`Arena::get_mut()` - `id` is invalid!")
    }

    pub(crate) fn take(&mut self, id: NodeId) -> T {
        let slot = &mut self.slots[id.to_index()];
        let element = slot.element.take().expect("`Arena::take()` - `id` is invalid!");
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id);
        element
    }

    /// Releases every element. Slots are kept so that ids handed out before
    /// the clear stay detectably stale; their memory is retained and reused
    /// by later allocations, and a clear costs O(slots ever allocated).
    pub(crate) fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.element.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(NodeId::from_index(index));
        }
    }
}
