//! Encoding and decoding of shareable scenario strings.
//!
//! A scenario string carries everything needed to replay a run: the
//! steering seed in a human-readable segment and the remaining knobs as
//! base64-encoded JSON. The format is
//! `deeptide:v1:<seed>:<base64 payload>`.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

const HEADER: &str = "deeptide";
const VERSION: &str = "v1";

/// Replayable run parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct ScenarioConfig {
    /// Seed driving both steering noise and pickup placement.
    #[serde(skip)]
    pub(crate) seed: u64,
    /// Simulated run length in seconds.
    pub(crate) duration_secs: f32,
    /// Pickup spawn cadence in milliseconds.
    pub(crate) spawn_interval_ms: u64,
}

/// Failures raised while decoding a scenario string.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ScenarioTransferError {
    /// The input was empty after trimming whitespace.
    #[error("empty scenario string")]
    EmptyInput,
    /// The string did not have the `deeptide:v1:<seed>:<payload>` shape.
    #[error("malformed scenario string")]
    MalformedInput,
    /// The header or version segment did not match.
    #[error("unsupported scenario header")]
    UnsupportedHeader,
    /// The seed segment was not an unsigned integer.
    #[error("invalid seed segment")]
    InvalidSeed,
    /// The payload was not valid base64.
    #[error("invalid base64 payload")]
    InvalidPayload,
    /// The decoded payload was not the expected JSON document.
    #[error("invalid scenario payload")]
    InvalidDocument,
}

impl ScenarioConfig {
    /// Serialises the scenario into its shareable string form.
    pub(crate) fn encode(&self) -> String {
        let payload = serde_json::to_vec(self).expect("scenario serialization never fails");
        format!(
            "{HEADER}:{VERSION}:{}:{}",
            self.seed,
            STANDARD_NO_PAD.encode(payload)
        )
    }

    /// Parses a scenario string produced by [`ScenarioConfig::encode`].
    pub(crate) fn decode(input: &str) -> Result<Self, ScenarioTransferError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ScenarioTransferError::EmptyInput);
        }

        let mut segments = trimmed.splitn(4, ':');
        let header = segments.next().ok_or(ScenarioTransferError::MalformedInput)?;
        let version = segments.next().ok_or(ScenarioTransferError::MalformedInput)?;
        let seed = segments.next().ok_or(ScenarioTransferError::MalformedInput)?;
        let payload = segments.next().ok_or(ScenarioTransferError::MalformedInput)?;

        if header != HEADER || version != VERSION {
            return Err(ScenarioTransferError::UnsupportedHeader);
        }
        let seed: u64 = seed
            .parse()
            .map_err(|_| ScenarioTransferError::InvalidSeed)?;
        let bytes = STANDARD_NO_PAD
            .decode(payload)
            .map_err(|_| ScenarioTransferError::InvalidPayload)?;
        let mut config: ScenarioConfig = serde_json::from_slice(&bytes)
            .map_err(|_| ScenarioTransferError::InvalidDocument)?;
        config.seed = seed;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScenarioConfig {
        ScenarioConfig {
            seed: 1337,
            duration_secs: 90.0,
            spawn_interval_ms: 1500,
        }
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let encoded = sample().encode();
        assert!(encoded.starts_with("deeptide:v1:1337:"));
        let decoded = ScenarioConfig::decode(&encoded).expect("round trip");
        assert_eq!(decoded, sample());
    }

    #[test]
    fn decode_rejects_blank_input() {
        assert_eq!(
            ScenarioConfig::decode("   \n"),
            Err(ScenarioTransferError::EmptyInput)
        );
    }

    #[test]
    fn decode_rejects_missing_segments() {
        assert_eq!(
            ScenarioConfig::decode("deeptide:v1:42"),
            Err(ScenarioTransferError::MalformedInput)
        );
    }

    #[test]
    fn decode_rejects_unknown_header() {
        let tail = sample().encode();
        let tail = tail.strip_prefix("deeptide").expect("header prefix");
        let foreign = format!("tidepool{tail}");
        assert_eq!(
            ScenarioConfig::decode(&foreign),
            Err(ScenarioTransferError::UnsupportedHeader)
        );
    }

    #[test]
    fn decode_rejects_non_numeric_seed() {
        assert_eq!(
            ScenarioConfig::decode("deeptide:v1:abc:e30"),
            Err(ScenarioTransferError::InvalidSeed)
        );
    }

    #[test]
    fn decode_rejects_garbage_payload() {
        assert_eq!(
            ScenarioConfig::decode("deeptide:v1:7:!!!"),
            Err(ScenarioTransferError::InvalidPayload)
        );
        assert_eq!(
            ScenarioConfig::decode("deeptide:v1:7:bm90LWpzb24"),
            Err(ScenarioTransferError::InvalidDocument)
        );
    }
}
