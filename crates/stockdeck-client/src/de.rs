use serde::{Deserialize, Deserializer};

/// The backend is loose about empty collections; all of the following are treated alike:
///
/// ```json
/// { "series": [] }
/// { "series": null }
/// { }
/// ```
///
/// Pair with `#[serde(default)]` to cover the missing-field case.
pub fn de_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
