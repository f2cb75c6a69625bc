//! Address to symbol name table.

use crate::utils::error::SymbolError;
use log::debug;
use std::collections::HashMap;
use std::path::Path;

/// Resolved names keyed by raw address token
///
/// Lookups never fail: an address without an entry resolves to itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: HashMap<String, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a resolution response body
    pub fn from_response(body: &str) -> Self {
        let mut table = Self::new();
        table.extend_from_response(body);
        table
    }

    /// Load a pre-resolved symbol file (same format as a resolution response)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SymbolError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)?;
        let table = Self::from_response(&body);
        debug!("Loaded {} symbols from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn insert(&mut self, address: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(address.into(), name.into());
    }

    pub fn get(&self, address: &str) -> Option<&str> {
        self.entries.get(address).map(String::as_str)
    }

    /// Display name for an address, falling back to the address itself
    pub fn resolve<'a>(&'a self, address: &'a str) -> &'a str {
        self.get(address).unwrap_or(address)
    }

    /// Add every `<address> <name>` line of a response body
    ///
    /// # Returns
    /// Number of lines that produced an entry
    pub fn extend_from_response(&mut self, body: &str) -> usize {
        let mut added = 0;
        for (address, name) in body.lines().filter_map(parse_symbol_line) {
            self.insert(address, name);
            added += 1;
        }
        added
    }

    /// Move every entry of `other` into this table
    pub fn merge(&mut self, other: SymbolTable) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a response line into address and resolved name
///
/// The name is everything after the first field and may contain spaces.
pub fn parse_symbol_line(line: &str) -> Option<(&str, &str)> {
    let (address, name) = line.trim().split_once(char::is_whitespace)?;
    let name = name.trim_start();
    if name.is_empty() {
        return None;
    }
    Some((address, name))
}
