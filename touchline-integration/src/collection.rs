use fnv::{FnvBuildHasher, FnvHashMap, FnvHashSet};
use indexmap::IndexMap;

/// 使用 FNV 哈希、保持插入顺序的 [`IndexMap`]。
pub type FnvIndexMap<K, V> = IndexMap<K, V, FnvBuildHasher>;

pub type FnvMap<K, V> = FnvHashMap<K, V>;

pub type FnvSet<T> = FnvHashSet<T>;
