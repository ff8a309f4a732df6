pub mod empresa;
pub mod tarefa;

/// Distinguishes an explicitly supplied value (including `null`) from a
/// field that was omitted from the payload entirely. Pair with
/// `#[serde(default)]` on an `Option<Option<T>>` field.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}
