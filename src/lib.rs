//! # arraytable
//!
//! Fixed-capacity, array-backed data structures for an introductory
//! data-structures course:
//!
//! - [`Table`]: a key/value table searched linearly over a slot array
//! - [`ArrayStack`]: a heap-backed stack that owns its elements and is mutated in place
//! - [`ValueStack`]: an inline stack that is copied around and rebuilt on every change
//!
//! ## Performance Characteristics
//!
//! - Table operations that look for a key are O(n) linear scans over the occupied slots
//! - Stack operations are O(1)
//! - Nothing ever resizes; each structure has a fixed capacity chosen at construction
//!   (or at compile time for [`ValueStack`])
//! - Exceeding the capacity is reported through [`TableError::Full`] / [`StackError::Full`]
//!   and leaves the structure unchanged
//!
//! ## Example
//!
//! ```rust
//! use arraytable::Table;
//!
//! let mut table = Table::new();
//!
//! table.insert("one".to_string(), 1).unwrap();
//! table.insert("two".to_string(), 2).unwrap();
//!
//! // Inserting an existing key replaces its value
//! table.insert("one".to_string(), 11).unwrap();
//! assert_eq!(table.lookup(&"one".to_string()), Some(&11));
//! assert_eq!(table.len(), 2);
//!
//! assert_eq!(table.remove(&"two".to_string()), Some(2));
//! assert_eq!(table.lookup(&"two".to_string()), None);
//! ```
//!
//! ## Logging
//!
//! The crate emits `key=value` records through the [`log`] facade (creation at
//! `debug`, rejected pushes/inserts at `warn`, per-operation detail at `trace`).
//! It never installs a logger itself.

pub mod dot;
pub mod error;
pub mod stack;
pub mod table;
pub mod value_stack;

pub use error::{StackError, TableError};
pub use stack::{ArrayStack, DEFAULT_STACK_CAPACITY};
pub use table::{CompareFn, Table, TableConfig, DEFAULT_CAPACITY};
pub use value_stack::{ValueStack, DEFAULT_VALUE_STACK_CAPACITY};
