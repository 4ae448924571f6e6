//! CMS record types.
//!
//! Records are created and owned by the content source; Folio only ever
//! reads them. Every type deserializes from the CMS's camelCase JSON and
//! tolerates `null` for optional fields.

mod ids;
mod profile;
mod project;

pub use ids::RecordId;
pub use profile::{format_period, Award, Education, Experience, Skill};
pub use project::{Narrative, Project};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default (CMS projections emit `null`
/// for fields an editor left blank).
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a list of strings, treating a `null` list as empty and
/// skipping `null` entries (a projection such as `images[].asset->url`
/// yields `null` for every item without an asset).
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Option<String>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().flatten().collect())
}
