// Copyright (C) 2024-present The bgp-ext-pkt Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A keyed registry of parser functions, so applications can extend the
//! decoders with handlers for codes this crate doesn't know about (or
//! override the ones it does).

use std::{collections::HashMap, fmt, hash::Hash};

/// Registering a parser under a key that already holds one is rejected
/// rather than silently overwritten.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DuplicateKeyError<K> {
    pub key: K,
}

impl<K: fmt::Debug> fmt::Display for DuplicateKeyError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parser already registered for key {:?}", self.key)
    }
}

impl<K: fmt::Debug> std::error::Error for DuplicateKeyError<K> {}

/// Maps parser keys (a TLV code, an RSVP `(class-num, c-type)` pair, ...) to
/// parser functions. What happens on a lookup miss is up to the caller:
/// the TE-LSP decoder treats it as a hard error while the Prefix-SID decoder
/// falls back to an opaque representation.
#[derive(Debug, Clone)]
pub struct ParserRegistry<K, P> {
    parsers: HashMap<K, P>,
}

impl<K: Eq + Hash + Copy, P> ParserRegistry<K, P> {
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Binds `parser` to `key`, failing if the key is already taken
    pub fn register(&mut self, key: K, parser: P) -> Result<(), DuplicateKeyError<K>> {
        match self.parsers.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => Err(DuplicateKeyError { key }),
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(parser);
                Ok(())
            }
        }
    }

    /// Removes and returns the parser bound to `key`, if any
    pub fn deregister(&mut self, key: &K) -> Option<P> {
        self.parsers.remove(key)
    }

    pub fn get(&self, key: &K) -> Option<&P> {
        self.parsers.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }
}

impl<K: Eq + Hash + Copy, P> Default for ParserRegistry<K, P> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry: ParserRegistry<u8, u32> = ParserRegistry::empty();
        assert_eq!(registry.register(1, 100), Ok(()));
        assert_eq!(registry.register(1, 200), Err(DuplicateKeyError { key: 1 }));
        assert_eq!(registry.get(&1), Some(&100));
    }

    #[test]
    fn test_deregister_frees_key() {
        let mut registry: ParserRegistry<(u8, u8), u32> = ParserRegistry::empty();
        assert_eq!(registry.register((20, 1), 7), Ok(()));
        assert_eq!(registry.deregister(&(20, 1)), Some(7));
        assert_eq!(registry.get(&(20, 1)), None);
        assert_eq!(registry.register((20, 1), 9), Ok(()));
    }
}
