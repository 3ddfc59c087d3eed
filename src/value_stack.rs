use log::warn;

use crate::error::StackError;

/// Default `N` for [`ValueStack`].
pub const DEFAULT_VALUE_STACK_CAPACITY: usize = 100;

/// A fixed-capacity LIFO stack stored inline and passed around by value.
///
/// Every operation that changes the stack consumes it and returns the new stack,
/// so an older copy is never affected by later pushes or pops. All storage is
/// part of the value itself; no operation touches the heap.
///
/// Type Parameters:
/// - `T`: Element type, must implement `Copy + Default`
/// - `N`: Capacity of the stack (const generic parameter)
///
/// # Example
///
/// ```rust
/// use arraytable::ValueStack;
///
/// let s: ValueStack<i32> = ValueStack::empty();
/// let s = s.push(5).push(4);
/// assert_eq!(s.top(), Some(4));
///
/// let popped = s.pop();
/// assert_eq!(popped.top(), Some(5));
/// // The earlier value is untouched
/// assert_eq!(s.top(), Some(4));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValueStack<T, const N: usize = DEFAULT_VALUE_STACK_CAPACITY> {
    values: [T; N],
    first_free_pos: usize,
}

impl<T, const N: usize> ValueStack<T, N>
where
    T: Copy + Default,
{
    /// Returns an empty stack.
    ///
    /// Time Complexity: O(N) to initialize the inline array
    pub fn empty() -> Self {
        Self {
            values: [T::default(); N],
            first_free_pos: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_free_pos == 0
    }

    pub fn len(&self) -> usize {
        self.first_free_pos
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Returns the stack with `value` on top.
    ///
    /// A full stack is returned unchanged. Use [`try_push`](Self::try_push) to
    /// find out whether the value was stored.
    pub fn push(self, value: T) -> Self {
        match self.try_push(value) {
            Ok(stack) => stack,
            Err(_) => {
                warn!("event=value_stack_push module=value_stack status=full capacity={}", N);
                self
            }
        }
    }

    /// Returns the stack with `value` on top, or `StackError::Full` if there is no room.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraytable::{StackError, ValueStack};
    ///
    /// let s = ValueStack::<u8, 1>::empty().try_push(1).unwrap();
    /// assert_eq!(s.try_push(2), Err(StackError::Full { capacity: 1 }));
    /// ```
    pub fn try_push(mut self, value: T) -> Result<Self, StackError> {
        if self.first_free_pos >= N {
            return Err(StackError::Full { capacity: N });
        }
        self.values[self.first_free_pos] = value;
        self.first_free_pos += 1;
        Ok(self)
    }

    /// Returns the stack without its top element. An empty stack is returned unchanged.
    pub fn pop(mut self) -> Self {
        if let Some(top) = self.first_free_pos.checked_sub(1) {
            self.first_free_pos = top;
        }
        self
    }

    /// Returns a copy of the top element, or `None` if the stack is empty.
    pub fn top(&self) -> Option<T> {
        let top = self.first_free_pos.checked_sub(1)?;
        Some(self.values[top])
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.values[..self.first_free_pos].iter().rev().copied()
    }
}

impl<T: Copy + Default, const N: usize> Default for ValueStack<T, N> {
    fn default() -> Self {
        Self::empty()
    }
}

// Only the occupied prefix takes part in equality
impl<T: PartialEq, const N: usize> PartialEq for ValueStack<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.values[..self.first_free_pos] == other.values[..other.first_free_pos]
    }
}

impl<T: Eq, const N: usize> Eq for ValueStack<T, N> {}
