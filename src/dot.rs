//! Graphviz rendering of a [`Table`]'s internal layout.
//!
//! The output draws the caller's keys and values in a "User space" cluster and
//! the slot array in a "Table" cluster, so students can see which slots are
//! occupied and where `first_free_pos` points.

use std::fmt::{self, Debug, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::table::Table;

static GRAPH_NUMBER: AtomicUsize = AtomicUsize::new(0);

/// Escapes `"`, `\` and newlines for use inside a quoted DOT label.
pub fn escape_label(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

impl<K: Debug, V: Debug> Table<K, V> {
    /// Renders the table's slot array as a Graphviz `digraph`.
    ///
    /// Every call gets a fresh `TABLE_<n>` graph name. `description`, when given,
    /// is added as a label node.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraytable::Table;
    ///
    /// let mut table = Table::new();
    /// table.insert("k", 1).unwrap();
    ///
    /// let dot = table.render_dot(Some("after one insert"));
    /// assert!(dot.starts_with("digraph TABLE_"));
    /// assert!(dot.contains("label=\"after one insert\""));
    /// ```
    pub fn render_dot(&self, description: Option<&str>) -> String {
        let number = GRAPH_NUMBER.fetch_add(1, Ordering::Relaxed) + 1;
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_dot(&mut out, number, description);
        out
    }

    fn write_dot(&self, out: &mut String, number: usize, description: Option<&str>) -> fmt::Result {
        writeln!(out, "digraph TABLE_{number} {{")?;
        writeln!(out, "\tnode [shape=rectangle fontname=\"Courier New\"]")?;
        writeln!(out, "\tranksep=0.01")?;
        writeln!(out, "\tsubgraph cluster_nullspace {{")?;
        writeln!(out, "\t\tNULL")?;
        writeln!(out, "\t}}")?;

        if let Some(desc) = description {
            writeln!(out, "\tdescription [label=\"{}\"]", escape_label(desc))?;
        }

        writeln!(out, "\tt [label=\"\" xlabel=\"t\"]")?;
        writeln!(out, "\tt -> head")?;

        writeln!(out, "\tsubgraph cluster_userspace {{ label=\"User space\"")?;
        for (i, entry) in self.occupied().enumerate() {
            let key = escape_label(&format!("{:?}", entry.key));
            let value = escape_label(&format!("{:?}", entry.value));
            writeln!(out, "\t\tkey_{i} [label=\"{key}\" xlabel=\"key\"]")?;
            writeln!(out, "\t\tvalue_{i} [label=\"{value}\" xlabel=\"value\"]")?;
        }
        writeln!(out, "\t}}")?;

        writeln!(out, "\tsubgraph cluster_table_{number} {{ label=\"Table\"")?;
        writeln!(
            out,
            "\t\thead [shape=record label=\"first_free_pos\\n{}|capacity\\n{}\"]",
            self.len(),
            self.capacity()
        )?;
        for i in 0..self.len() {
            writeln!(out, "\t\tslot_{i} [shape=record label=\"<k>key|<v>value\" xlabel=\"{i}\"]")?;
        }
        writeln!(out, "\t\tfree [label=\"\" xlabel=\"{}\"]", self.len())?;
        writeln!(out, "\t}}")?;

        for i in 0..self.len() {
            writeln!(out, "\thead -> slot_{i}")?;
            writeln!(out, "\tslot_{i}:k -> key_{i}")?;
            writeln!(out, "\tslot_{i}:v -> value_{i}")?;
        }
        writeln!(out, "\thead -> free [style=dashed]")?;
        writeln!(out, "\tfree -> NULL")?;

        writeln!(out, "}}")
    }
}
