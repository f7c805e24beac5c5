use std::collections::HashMap;

use crate::interpreter::value::core::{Value, ValueKind};

/// Offset basis of the 64-bit FNV-1a hash.
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
/// Prime of the 64-bit FNV-1a hash.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A hashable value reduced to a fixed-size key.
///
/// Only integers, booleans and strings are hashable. Integers use their bit
/// pattern, booleans use `1`/`0`, and strings use the 64-bit FNV-1a hash of
/// their UTF-8 bytes. Two hashable values are equal exactly when their keys
/// are equal (string collisions aside, which the paired stored key value
/// disambiguates in principle; the reference behavior accepts them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    /// The kind of the hashed value, so `1`, `true` and `"1"` never collide.
    kind:  ValueKind,
    /// The reduced hash payload.
    value: u64,
}

impl HashKey {
    /// Reduces a value to its hash key, or `None` if the value is not
    /// hashable.
    ///
    /// # Example
    /// ```
    /// use minima::interpreter::value::{core::Value, hash_key::HashKey};
    ///
    /// assert_eq!(HashKey::of(&Value::from("name")), HashKey::of(&Value::from("name")));
    /// assert!(HashKey::of(&Value::Null).is_none());
    /// ```
    #[must_use]
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            #[allow(clippy::cast_sign_loss)]
            Value::Integer(n) => Some(Self { kind:  ValueKind::Integer,
                                             value: *n as u64, }),
            Value::Bool(b) => Some(Self { kind:  ValueKind::Bool,
                                          value: u64::from(*b), }),
            Value::Str(s) => Some(Self { kind:  ValueKind::Str,
                                         value: fnv1a(s.as_bytes()), }),
            _ => None,
        }
    }
}

/// Computes the 64-bit FNV-1a hash of a byte string.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// The payload of a hash value: entries addressed by [`HashKey`], with the
/// original key values kept alongside and insertion order preserved for
/// printing.
///
/// Inserting an existing key replaces the stored entry but keeps its
/// original position.
#[derive(Debug, Clone, Default)]
pub struct HashValue {
    pairs: HashMap<HashKey, (Value, Value)>,
    order: Vec<HashKey>,
}

impl HashValue {
    /// Creates an empty hash.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty hash sized for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { pairs: HashMap::with_capacity(capacity),
               order: Vec::with_capacity(capacity), }
    }

    /// Inserts an entry under a precomputed key. The caller supplies both
    /// the original key value (for printing) and the mapped value.
    pub fn insert(&mut self, key: HashKey, key_value: Value, value: Value) {
        if self.pairs.insert(key, (key_value, value)).is_none() {
            self.order.push(key);
        }
    }

    /// Looks up the value stored under a key.
    #[must_use]
    pub fn get(&self, key: &HashKey) -> Option<&Value> {
        self.pairs.get(key).map(|(_, value)| value)
    }

    /// The number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the hash has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates `(key value, mapped value)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(Value, Value)> {
        self.order.iter().filter_map(|key| self.pairs.get(key))
    }
}

impl PartialEq for HashValue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| l == r)
    }
}
