use log::{debug, warn};

use crate::error::StackError;

/// Number of elements an [`ArrayStack::new`] stack can hold.
pub const DEFAULT_STACK_CAPACITY: usize = 100;

/// A fixed-capacity LIFO stack of owned values, backed by a heap-allocated slot array.
///
/// This is the "pointer" stack: the stack itself lives behind one allocation and is
/// mutated in place. Each pushed value is owned by the stack until it is popped,
/// and anything still stored when the stack is dropped is dropped with it.
///
/// # Example
///
/// ```rust
/// use arraytable::ArrayStack;
///
/// let mut stack = ArrayStack::new();
/// stack.push(Box::new(10)).unwrap();
/// stack.push(Box::new(20)).unwrap();
///
/// assert_eq!(stack.top().map(|v| **v), Some(20));
/// assert_eq!(stack.pop().map(|v| *v), Some(20));
/// assert_eq!(stack.pop().map(|v| *v), Some(10));
/// assert!(stack.pop().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ArrayStack<T> {
    storage: Box<[Option<T>]>,
    len: usize,
}

impl<T> ArrayStack<T> {
    /// Creates an empty stack with room for [`DEFAULT_STACK_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::allocate(DEFAULT_STACK_CAPACITY)
    }

    /// Creates an empty stack with room for `capacity` elements.
    ///
    /// # Returns
    /// - `Err(StackError::ZeroCapacity)` if `capacity` is 0
    pub fn with_capacity(capacity: usize) -> Result<Self, StackError> {
        if capacity == 0 {
            return Err(StackError::ZeroCapacity);
        }
        Ok(Self::allocate(capacity))
    }

    fn allocate(capacity: usize) -> Self {
        debug!("event=stack_create module=stack status=ok capacity={capacity}");
        Self {
            storage: (0..capacity).map(|_| None).collect(),
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Puts `value` on top of the stack.
    ///
    /// Time Complexity: O(1)
    ///
    /// # Returns
    /// - `Ok(())` if the value was stored
    /// - `Err(StackError::Full)` if the stack is at capacity; the value is dropped
    ///   and the stack is unchanged
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        match self.storage.get_mut(self.len) {
            Some(slot) => {
                *slot = Some(value);
                self.len += 1;
                Ok(())
            }
            None => {
                let capacity = self.capacity();
                warn!("event=stack_push module=stack status=full capacity={capacity}");
                Err(StackError::Full { capacity })
            }
        }
    }

    /// Removes the top element and returns it, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        let top = self.len.checked_sub(1)?;
        let value = self.storage[top].take();
        self.len = top;
        value
    }

    /// Returns a reference to the top element without removing it.
    pub fn top(&self) -> Option<&T> {
        let top = self.len.checked_sub(1)?;
        self.storage[top].as_ref()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        let top = self.len.checked_sub(1)?;
        self.storage[top].as_mut()
    }

    /// Drops every element, keeping the capacity.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.storage[..self.len].iter().rev().flatten()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_new_stack_is_empty() {
        let stack = ArrayStack::<Box<i32>>::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.capacity(), DEFAULT_STACK_CAPACITY);
        assert!(stack.top().is_none());
    }

    #[test]
    /// Test push and top.
    ///
    /// This test verifies that:
    /// 1. A pushed value is visible through top()
    /// 2. A second push hides the first value
    /// 3. top() does not remove anything
    fn test_push_and_top() {
        let mut stack = ArrayStack::new();

        stack.push(Box::new(10)).unwrap();
        assert!(!stack.is_empty());
        assert_eq!(stack.top().map(|v| **v), Some(10));

        stack.push(Box::new(20)).unwrap();
        assert_eq!(stack.top().map(|v| **v), Some(20));
        assert_eq!(stack.top().map(|v| **v), Some(20));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    /// Test that pop removes exactly the top element in LIFO order.
    fn test_pop_is_lifo() {
        let mut stack = ArrayStack::new();
        for v in [10, 20, 30] {
            stack.push(v).unwrap();
        }

        assert_eq!(stack.pop(), Some(30));
        assert_eq!(stack.top(), Some(&20));
        assert_eq!(stack.pop(), Some(20));
        assert_eq!(stack.pop(), Some(10));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_and_top_on_empty_are_guarded() {
        let mut stack = ArrayStack::<i32>::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.top(), None);
        assert_eq!(stack.top_mut(), None);
        assert!(stack.is_empty());
    }

    #[test]
    /// Test capacity limits.
    ///
    /// This test confirms that:
    /// 1. A full stack rejects a push with StackError::Full
    /// 2. The rejected push leaves the contents unchanged
    /// 3. After a pop there is room again
    fn test_capacity_limits() {
        let mut stack = ArrayStack::with_capacity(2).unwrap();
        stack.push('a').unwrap();
        stack.push('b').unwrap();

        assert_eq!(stack.push('c'), Err(StackError::Full { capacity: 2 }));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top(), Some(&'b'));

        stack.pop();
        assert!(stack.push('c').is_ok());
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![&'c', &'a']);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert_eq!(
            ArrayStack::<u8>::with_capacity(0).err(),
            Some(StackError::ZeroCapacity)
        );
    }

    #[test]
    fn test_top_mut() {
        let mut stack = ArrayStack::new();
        stack.push(String::from("a")).unwrap();
        if let Some(top) = stack.top_mut() {
            top.push('b');
        }
        assert_eq!(stack.pop().as_deref(), Some("ab"));
    }

    #[test]
    /// Test that the stack releases what it owns.
    ///
    /// Popped values go to the caller; clear() and dropping the stack
    /// drop whatever is still stored.
    fn test_values_are_released() {
        let tracker = Rc::new(());
        let mut stack = ArrayStack::new();
        for _ in 0..4 {
            stack.push(Rc::clone(&tracker)).unwrap();
        }
        assert_eq!(Rc::strong_count(&tracker), 5);

        drop(stack.pop());
        assert_eq!(Rc::strong_count(&tracker), 4);

        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(Rc::strong_count(&tracker), 1);

        stack.push(Rc::clone(&tracker)).unwrap();
        drop(stack);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
