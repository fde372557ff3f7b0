use serde::{Deserialize, Deserializer};

pub mod course;
pub mod message;
pub mod student;

/// Distinguishes an explicit `null` from an absent key
///
/// Pair with `#[serde(default)]`: absent -> `None`, `null` -> `Some(None)`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
