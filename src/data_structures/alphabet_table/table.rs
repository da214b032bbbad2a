// Copyright (c) 2025 Alphabet Table Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the Alphabet Table.
//!
//! Buckets are plain vectors scanned linearly. Entries keep their insertion
//! order inside a bucket, which is what `render` shows and what decides the
//! first match on lookup.

use std::fmt;

use serde::Serialize;

use crate::data_structures::alphabet_table::config::AlphabetTableConfig;
use crate::data_structures::alphabet_table::error::{AlphabetTableError, Result};
use crate::data_structures::alphabet_table::hash::{bucket_for, hash_code};

/// A key/value pair stored in a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    key: String,
    value: String,
    /// Positional hash of `key`, computed once on insert.
    hash: usize,
}

impl Entry {
    /// Returns the entry's key as it was inserted.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the entry's value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the positional hash of the key.
    pub fn hash(&self) -> usize {
        self.hash
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.key, self.value)
    }
}

/// A fixed-capacity hash table keyed by Latin or Cyrillic letter pairs.
///
/// Collisions are resolved by separate chaining. The number of buckets is
/// chosen at construction and never changes, so a key always lands in the
/// same bucket for the lifetime of the table.
///
/// The table is not synchronised. Mutating operations take `&mut self`;
/// callers sharing a table must serialise access themselves.
#[derive(Debug, Clone)]
pub struct AlphabetTable {
    /// One bucket per slot, `buckets.len()` is the capacity
    buckets: Vec<Vec<Entry>>,
}

impl AlphabetTable {
    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of buckets, must be greater than zero.
    ///
    /// # Returns
    ///
    /// A new `AlphabetTable`, or `InvalidCapacity` for a zero capacity.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(AlphabetTableConfig::new().with_capacity(capacity))
    }

    /// Creates an empty table from a configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the table.
    ///
    /// # Returns
    ///
    /// A new `AlphabetTable`, or `InvalidCapacity` for a zero capacity.
    pub fn with_config(config: AlphabetTableConfig) -> Result<Self> {
        if config.capacity == 0 {
            return Err(AlphabetTableError::InvalidCapacity(config.capacity));
        }

        let mut buckets = Vec::with_capacity(config.capacity);
        buckets.resize_with(config.capacity, Vec::new);
        tracing::debug!(capacity = config.capacity, "created alphabet table");

        Ok(Self { buckets })
    }

    /// Returns the number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of stored entries across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns `true` if no bucket holds an entry.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Computes the positional hash of a key.
    ///
    /// Fails with `UnsupportedCharacter` or `InvalidKeyLength` when the key
    /// cannot be hashed.
    pub fn hash_code(&self, key: &str) -> Result<usize> {
        hash_code(key)
    }

    /// Resolves the bucket a key belongs to.
    pub fn bucket_index(&self, key: &str) -> Result<usize> {
        Ok(bucket_for(hash_code(key)?, self.capacity()))
    }

    /// Inserts a key-value pair, replacing the value of an existing key.
    ///
    /// An overwritten entry keeps its position in the bucket.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The value to associate with the key.
    ///
    /// # Returns
    ///
    /// `Ok(())`, or the hash error if the key is not supported.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Result<()>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let value = value.into();
        let hash = hash_code(&key)?;
        let index = bucket_for(hash, self.capacity());
        let bucket = &mut self.buckets[index];

        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            tracing::trace!(key = %key, bucket = index, "overwriting entry");
            entry.value = value;
            return Ok(());
        }

        tracing::trace!(key = %key, bucket = index, hash, "appending entry");
        bucket.push(Entry { key, value, hash });
        Ok(())
    }

    /// Looks up the value stored under `key`.
    ///
    /// # Returns
    ///
    /// `Ok(Some(value))` if the key is present, `Ok(None)` if it is not.
    pub fn get(&self, key: &str) -> Result<Option<&str>> {
        let index = self.bucket_index(key)?;
        Ok(self.buckets[index]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str()))
    }

    /// Checks whether `key` is present.
    pub fn contains_key(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Removes `key` from its bucket. Removing an absent key is a no-op.
    ///
    /// The remaining entries of the bucket keep their relative order.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        let index = self.bucket_index(key)?;
        let bucket = &mut self.buckets[index];
        let before = bucket.len();
        bucket.retain(|entry| entry.key != key);

        if bucket.len() != before {
            tracing::trace!(key = %key, bucket = index, "deleted entry");
        }
        Ok(())
    }

    /// Reports whether the bucket `key` maps to holds more than one entry.
    ///
    /// This is an occupancy probe: it does not require `key` itself to be
    /// stored.
    pub fn has_collision(&self, key: &str) -> Result<bool> {
        let index = self.bucket_index(key)?;
        Ok(self.buckets[index].len() > 1)
    }

    /// Returns the entries of the bucket at `index`, if it exists.
    pub fn bucket(&self, index: usize) -> Option<&[Entry]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// Iterates over all entries in bucket order, then insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.buckets.iter().flatten()
    }

    /// Renders the table for diagnostics.
    ///
    /// The first block lists every entry as `key(V: <hash>, H: <bucket>)`.
    /// The second block lists every bucket as `<index>: [k -> v, ...]`.
    /// Each line ends with a newline. The output is not meant to be parsed.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let capacity = self.capacity();

        for entry in self.iter() {
            out.push_str(&format!(
                "{}(V: {}, H: {})\n",
                entry.key,
                entry.hash,
                bucket_for(entry.hash, capacity)
            ));
        }

        for (index, bucket) in self.buckets.iter().enumerate() {
            let contents = bucket
                .iter()
                .map(Entry::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("{index}: [{contents}]\n"));
        }

        out
    }
}

impl fmt::Display for AlphabetTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
