use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace, warn};

use crate::error::TableError;

/// Number of slots in a table created with [`Table::new`] or [`TableConfig::default`].
pub const DEFAULT_CAPACITY: usize = 80_000;

/// Key comparison function. Two keys match when it returns [`Ordering::Equal`].
pub type CompareFn<K> = fn(&K, &K) -> Ordering;

/// Construction settings for a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of entry slots. The table never grows past this.
    pub capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// A key-value entry in the table
#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    /// The entry's key
    pub(crate) key: K,
    /// The entry's value
    pub(crate) value: V,
}

/// A fixed-capacity key/value table backed by an array of slots and searched linearly.
///
/// `Table` is the classic "table as an array" exercise:
/// - Occupied slots are always contiguous from index 0
/// - Every operation that looks for a key scans the occupied slots in order
/// - Inserting an existing key replaces the stored pair instead of adding a second one
/// - Removing a key moves the last occupied slot into the hole, so slot order is not stable
///
/// Keys are compared with a plain function pointer, which lets callers match keys
/// on something other than `Ord` (case-insensitive strings, a single struct field, ...).
///
/// Type Parameters:
/// - `K`: Key type
/// - `V`: Value type
#[derive(Clone)]
pub struct Table<K, V> {
    // Slot array; `Some` for indices below `first_free_pos`, `None` above
    entries: Box<[Option<Entry<K, V>>]>,
    // Index of the first unoccupied slot, equal to the number of stored pairs
    first_free_pos: usize,
    compare: CompareFn<K>,
}

impl<K: Ord, V> Table<K, V> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] slots, comparing keys with `Ord`.
    ///
    /// Time Complexity: O(capacity) to allocate the slot array
    ///
    /// # Examples
    ///
    /// ```
    /// use arraytable::{Table, DEFAULT_CAPACITY};
    ///
    /// let table = Table::<i32, String>::new();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), DEFAULT_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self::with_compare(K::cmp)
    }
}

impl<K: Ord, V> Default for Table<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Table<K, V> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] slots and a caller-supplied
    /// key comparison function.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraytable::Table;
    ///
    /// fn ignore_case(a: &String, b: &String) -> std::cmp::Ordering {
    ///     a.to_lowercase().cmp(&b.to_lowercase())
    /// }
    ///
    /// let mut table = Table::with_compare(ignore_case);
    /// table.insert("Apple".to_string(), 1).unwrap();
    /// assert_eq!(table.lookup(&"APPLE".to_string()), Some(&1));
    /// ```
    pub fn with_compare(compare: CompareFn<K>) -> Self {
        Self::allocate(DEFAULT_CAPACITY, compare)
    }

    /// Creates an empty table sized by `config`.
    ///
    /// # Returns
    /// - `Ok(Table)` with `config.capacity` empty slots
    /// - `Err(TableError::ZeroCapacity)` if `config.capacity` is 0
    ///
    /// # Examples
    ///
    /// ```
    /// use arraytable::{Table, TableConfig, TableError};
    ///
    /// let table = Table::<u32, u32>::with_config(TableConfig { capacity: 4 }, u32::cmp).unwrap();
    /// assert_eq!(table.capacity(), 4);
    ///
    /// let err = Table::<u32, u32>::with_config(TableConfig { capacity: 0 }, u32::cmp);
    /// assert_eq!(err.err(), Some(TableError::ZeroCapacity));
    /// ```
    pub fn with_config(config: TableConfig, compare: CompareFn<K>) -> Result<Self, TableError> {
        if config.capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        Ok(Self::allocate(config.capacity, compare))
    }

    fn allocate(capacity: usize, compare: CompareFn<K>) -> Self {
        debug!("event=table_create module=table status=ok capacity={capacity}");
        Self {
            entries: (0..capacity).map(|_| None).collect(),
            first_free_pos: 0,
            compare,
        }
    }

    /// Checks if the table is empty (contains no key/value pairs).
    ///
    /// Time Complexity: O(1)
    pub fn is_empty(&self) -> bool {
        self.first_free_pos == 0
    }

    /// Returns the number of key/value pairs stored in the table.
    ///
    /// Time Complexity: O(1)
    pub fn len(&self) -> usize {
        self.first_free_pos
    }

    /// Returns the fixed number of slots in the table.
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    // Linear scan over the occupied slots for the first key matching `key`.
    fn position(&self, key: &K) -> Option<usize> {
        let compare = self.compare;
        self.entries[..self.first_free_pos]
            .iter()
            .position(|slot| matches!(slot, Some(e) if compare(&e.key, key) == Ordering::Equal))
    }

    /// Adds a key/value pair to the table.
    ///
    /// This method will:
    /// 1. Scan the occupied slots for a matching key
    /// 2. On a match, replace both the stored key and the stored value
    /// 3. Otherwise place the pair in the first free slot
    /// 4. Leave the table untouched if it is full and the key is new
    ///
    /// Because a duplicate key replaces the existing pair, [`lookup`](Self::lookup)
    /// always returns the value inserted last for that key.
    ///
    /// Time Complexity: O(n) where n is the number of stored pairs
    ///
    /// # Parameters
    /// - `key`: The key to insert
    /// - `value`: The value to associate with the key
    ///
    /// # Returns
    /// - `Ok(Some(old))` if the key was already present; `old` is the replaced value
    /// - `Ok(None)` if the pair was added to a free slot
    /// - `Err(TableError::Full)` if every slot is occupied and the key is new
    ///
    /// # Examples
    ///
    /// ```
    /// use arraytable::{Table, TableConfig, TableError};
    ///
    /// let mut table = Table::with_config(TableConfig { capacity: 2 }, i32::cmp).unwrap();
    ///
    /// assert_eq!(table.insert(1, "one"), Ok(None));
    /// assert_eq!(table.insert(2, "two"), Ok(None));
    ///
    /// // Replacing works even when the table is full
    /// assert_eq!(table.insert(1, "ONE"), Ok(Some("one")));
    /// assert_eq!(table.lookup(&1), Some(&"ONE"));
    ///
    /// // A new key does not fit
    /// assert_eq!(table.insert(3, "three"), Err(TableError::Full { capacity: 2 }));
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, TableError> {
        if let Some(i) = self.position(&key) {
            if let Some(entry) = self.entries[i].as_mut() {
                // Key is replaced too; the old one is dropped
                entry.key = key;
                let old = std::mem::replace(&mut entry.value, value);
                trace!("event=table_insert module=table status=replaced slot={i}");
                return Ok(Some(old));
            }
        }

        let capacity = self.capacity();
        if self.first_free_pos >= capacity {
            warn!("event=table_insert module=table status=full capacity={capacity}");
            return Err(TableError::Full { capacity });
        }

        let slot = self.first_free_pos;
        self.entries[slot] = Some(Entry { key, value });
        self.first_free_pos += 1;
        trace!("event=table_insert module=table status=appended slot={slot}");
        Ok(None)
    }

    /// Looks up the value stored for `key`.
    ///
    /// Time Complexity: O(n) in the worst case (linear scan through occupied slots)
    ///
    /// # Returns
    /// - `Some(&V)` if the key exists in the table
    /// - `None` if it does not
    ///
    /// # Examples
    ///
    /// ```
    /// use arraytable::Table;
    ///
    /// let mut table = Table::new();
    /// table.insert("apple", 42).unwrap();
    ///
    /// assert_eq!(table.lookup(&"apple"), Some(&42));
    /// assert_eq!(table.lookup(&"banana"), None);
    /// ```
    pub fn lookup(&self, key: &K) -> Option<&V> {
        let i = self.position(key)?;
        self.entries[i].as_ref().map(|e| &e.value)
    }

    /// Mutable counterpart of [`lookup`](Self::lookup).
    pub fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        let i = self.position(key)?;
        self.entries[i].as_mut().map(|e| &mut e.value)
    }

    /// Returns `true` if a key matching `key` is stored.
    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Returns an arbitrary key stored in the table.
    ///
    /// The key chosen is the one in the last occupied slot. Together with
    /// [`remove`](Self::remove) it can be used to take the table apart one pair at a time.
    ///
    /// Time Complexity: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraytable::Table;
    ///
    /// let mut table = Table::new();
    /// table.insert(1, 'a').unwrap();
    /// table.insert(2, 'b').unwrap();
    ///
    /// while let Some(&key) = table.choose_key() {
    ///     table.remove(&key);
    /// }
    /// assert!(table.is_empty());
    /// assert_eq!(table.choose_key(), None);
    /// ```
    pub fn choose_key(&self) -> Option<&K> {
        let last = self.first_free_pos.checked_sub(1)?;
        self.entries[last].as_ref().map(|e| &e.key)
    }

    /// Removes the pair stored for `key`, returning its value.
    ///
    /// The last occupied slot is moved into the freed slot so that occupied
    /// slots stay contiguous. Slot order is therefore not preserved.
    /// The stored key is dropped.
    ///
    /// Time Complexity: O(n) in the worst case (linear scan through occupied slots)
    ///
    /// # Returns
    /// - `Some(V)` if the key was found and removed
    /// - `None` if the key was not in the table; the table is unchanged
    ///
    /// # Examples
    ///
    /// ```
    /// use arraytable::Table;
    ///
    /// let mut table = Table::new();
    /// table.insert("apple", 42).unwrap();
    ///
    /// assert_eq!(table.remove(&"apple"), Some(42));
    /// assert_eq!(table.len(), 0);
    /// assert_eq!(table.remove(&"apple"), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let i = self.position(key)?;
        let last = self.first_free_pos - 1;
        self.entries.swap(i, last);
        self.first_free_pos = last;
        let removed = self.entries[last].take()?;
        trace!("event=table_remove module=table status=ok slot={i} moved_from={last}");
        Some(removed.value)
    }

    /// Drops every stored pair. The slot array keeps its capacity.
    pub fn clear(&mut self) {
        for slot in self.entries[..self.first_free_pos].iter_mut() {
            *slot = None;
        }
        debug!(
            "event=table_clear module=table status=ok dropped={}",
            self.first_free_pos
        );
        self.first_free_pos = 0;
    }

    /// Returns an iterator over the stored pairs in slot order.
    ///
    /// Slot order equals insertion order until the first removal.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraytable::Table;
    ///
    /// let mut table = Table::new();
    /// table.insert("one", 1).unwrap();
    /// table.insert("two", 2).unwrap();
    ///
    /// let pairs: Vec<_> = table.iter().collect();
    /// assert_eq!(pairs, vec![(&"one", &1), (&"two", &2)]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.occupied().map(|e| (&e.key, &e.value))
    }

    // Slots below `first_free_pos`; all of them are `Some`.
    pub(crate) fn occupied(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.entries[..self.first_free_pos].iter().flatten()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Table<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Prints one `key: value` line per stored pair, in slot order.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for Table<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}
