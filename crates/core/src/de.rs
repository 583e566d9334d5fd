//! Serde helpers shared by the record types

use serde::{Deserialize, Deserializer};

/// Deserialize `null` the same way as a missing key: as `T::default()`.
///
/// Used on key fields; `{"id": null}` decodes to `""` and then fails
/// `validate()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
