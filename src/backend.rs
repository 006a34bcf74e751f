use crate::{error::FetchError, types::Slot};
use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

#[async_trait]
pub trait SlotBackend: Clone + Send + Sync + 'static {
    /// Returns every booked slot known to the feed, in feed order.
    async fn fetch_slots(&self) -> Result<Vec<Slot>, FetchError>;
}

/// Decodes a slot feed. The feed itself must be a JSON array; single records
/// that are not a valid slot are skipped so they can't take down every date.
pub fn decode_feed(body: &[u8]) -> Result<Vec<Slot>, FetchError> {
    let records: Vec<Value> =
        serde_json::from_slice(body).map_err(|err| FetchError::Decode(err.to_string()))?;

    let slots = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(slot) => Some(slot),
            Err(err) => {
                warn!(index, %err, "Skipping malformed slot record");
                None
            }
        })
        .collect();
    Ok(slots)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_malformed_record_is_skipped() {
        let slots = decode_feed(
            br#"[
                {"start": "2024-08-20T10:00:00Z", "tags": ["18holes"]},
                {"start": "2024-08-20 11:00", "tags": ["18holes"]},
                {"tags": []},
                {"start": 1724148000},
                {"start": "2024-08-21T08:15:00Z"}
            ]"#,
        )
        .unwrap();

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].start.to_rfc3339(), "2024-08-20T10:00:00+00:00");
        assert_eq!(slots[1].start.to_rfc3339(), "2024-08-21T08:15:00+00:00");
    }

    #[test_case::test_case(br#"{"not": "a list"}"# ; "object")]
    #[test_case::test_case(b"<html>" ; "not json")]
    fn test_malformed_feed(body: &[u8]) {
        let err = decode_feed(body).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
