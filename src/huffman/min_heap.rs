/// Array backed binary min-heap with a capacity fixed at construction.
///
/// Position 0 always holds the smallest element. The children of position `i`
/// live at `2 * i + 1` and `2 * i + 2`.
#[derive(Debug, Clone)]
pub struct MinHeap<T: Ord> {
    elements: Vec<T>,
    capacity: usize,
}

impl<T: Ord> MinHeap<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Builds a heap from all elements at once by sifting down every inner
    /// position, starting at the last one. The capacity equals the number of
    /// elements.
    pub fn from_vec(elements: Vec<T>) -> Self {
        let capacity = elements.len();
        let mut heap = MinHeap { elements, capacity };
        for index in (0..capacity / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn insert(&mut self, element: T) {
        if self.elements.len() == self.capacity {
            panic!(
                "can't insert into a min-heap that already holds its capacity of {} elements",
                self.capacity
            );
        }
        self.elements.push(element);
        self.sift_up(self.elements.len() - 1);
    }

    pub fn extract_min(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let minimum = self.elements.swap_remove(0);
        self.sift_down(0);
        Some(minimum)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = Self::parent(index);
            if self.elements[index] >= self.elements[parent] {
                break;
            }
            self.elements.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let smallest = self.smallest_of_family(index);
            if smallest == index {
                break;
            }
            self.elements.swap(index, smallest);
            index = smallest;
        }
    }

    fn smallest_of_family(&self, index: usize) -> usize {
        let size = self.elements.len();
        let mut smallest = index;
        for child in [Self::left(index), Self::right(index)] {
            if child < size && self.elements[child] < self.elements[smallest] {
                smallest = child;
            }
        }
        smallest
    }

    fn parent(index: usize) -> usize {
        (index - 1) / 2
    }

    fn left(index: usize) -> usize {
        2 * index + 1
    }

    fn right(index: usize) -> usize {
        2 * index + 2
    }

    #[cfg(test)]
    fn satisfies_heap_order(&self) -> bool {
        (1..self.elements.len()).all(|i| self.elements[Self::parent(i)] <= self.elements[i])
    }
}
