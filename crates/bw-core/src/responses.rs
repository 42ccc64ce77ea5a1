//! Registry response types and the outcome derived from them.

use serde::{Deserialize, Deserializer, Serialize};

/// Body returned by the schema registry for validate and push requests.
///
/// Every field may be absent or `null` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Vec<ResponseDetail>,
}

/// One entry of [`RegistryResponse::details`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDetail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Pass/fail result of a validate or publish attempt.
///
/// A registry-reported failure is an `Outcome` with `valid == false`, never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub valid: bool,
    pub message: String,
}

impl From<RegistryResponse> for Outcome {
    fn from(response: RegistryResponse) -> Self {
        Self {
            valid: response.success,
            message: response.message,
        }
    }
}
