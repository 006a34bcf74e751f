use crate::{
    backend::SlotBackend, clock::Clock, date_validator::validate, error::AvailabilityError,
    summarizer::summarize,
    types::{AvailabilityReport, TimeBasis},
};
use tracing::{debug, error, warn};

/// Validates `date`, and only if it is valid fetches the slot feed once and
/// summarizes it.
pub async fn search_availability<B: SlotBackend, C: Clock>(
    date: Option<&str>,
    backend: &B,
    clock: &C,
    time_basis: TimeBasis,
) -> Result<AvailabilityReport, AvailabilityError> {
    let valid_date = validate(date, clock).map_err(|err| {
        warn!(?date, kind = ?err.kind(), "Rejected date");
        err
    })?;

    let slots = backend.fetch_slots().await.map_err(|err| {
        error!(%err, "Error fetching availability");
        AvailabilityError::from(err)
    })?;
    debug!(date = valid_date.as_str(), slots = slots.len(), "Summarizing availability");

    Ok(summarize(&valid_date, &slots, time_basis))
}
