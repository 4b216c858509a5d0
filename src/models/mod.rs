pub mod backup;
pub mod category;
pub mod entry;
pub mod settings;
pub mod summary;
pub mod timer;

use serde::{Deserialize, Deserializer};

/// Browser-written documents sometimes carry `null` where a string is expected.
pub(crate) fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}
