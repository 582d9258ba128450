//! Hash map aliases shared across the crate.
//!
//! Runtime tables (the command registry, user macros, symbol lookups) use
//! rapidhash. Static tables are compiled with `phf` next to the code that
//! reads them.

use rapidhash::{RapidHashMap, RapidHashSet};

/// Alias for the default hash map.
pub type KeyMap<K, V> = RapidHashMap<K, V>;
/// Alias for the default hash set.
pub type KeySet<K> = RapidHashSet<K>;
/// Mapping from command or macro name to a value.
pub type Mapping<V> = KeyMap<String, V>;
