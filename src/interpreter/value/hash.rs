use std::hash::Hasher;

use fnv::FnvHasher;

use crate::interpreter::value::core::Value;

/// The type tag of a hash key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// Key built from an integer.
    Integer,
    /// Key built from a boolean.
    Boolean,
    /// Key built from a string.
    Str,
}

/// A map key: the originating type plus a 64-bit value.
///
/// Integers use their own bits, booleans use 0/1, and strings use the FNV-1a
/// hash of their bytes, the same scheme for every map in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    kind:  HashKind,
    value: u64,
}

/// A key/value entry of a hash.
///
/// The original key value is kept alongside the stored value so maps can
/// print their entries, not just their hashes.
#[derive(Debug, Clone)]
pub struct HashPair {
    /// The key as the program wrote it.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

impl Value {
    /// Derives the hash key for this value, when it is hashable.
    ///
    /// Only integers, booleans and strings can be map keys; everything else
    /// returns `None` and is reported by the evaluator as
    /// `clave no utilizable como hash`.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(value) => Some(HashKey { kind:  HashKind::Integer,
                                                   value: *value as u64, }),
            Self::Boolean(value) => Some(HashKey { kind:  HashKind::Boolean,
                                                   value: u64::from(*value), }),
            Self::Str(value) => {
                let mut hasher = FnvHasher::default();
                hasher.write(value.as_bytes());
                Some(HashKey { kind:  HashKind::Str,
                               value: hasher.finish(), })
            },
            _ => None,
        }
    }
}
