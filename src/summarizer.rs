use crate::types::{AvailabilityReport, Slot, TimeBasis, ValidDate, EIGHTEEN_HOLES_TAG};
use chrono::FixedOffset;

/// Summarizes the booked slots of `date` into the general and 18 holes
/// messages.
///
/// A slot belongs to `date` when its start falls on that day in
/// `time_basis.day`. Its time is then rendered in `time_basis.display`, which
/// may put it on a different local day than the one it was matched against.
pub fn summarize(date: &ValidDate, slots: &[Slot], time_basis: TimeBasis) -> AvailabilityReport {
    let booked: Vec<&Slot> = slots
        .iter()
        .filter(|slot| slot.start.with_timezone(&time_basis.day).date_naive() == date.date())
        .collect();

    let booked_times = render_times(booked.iter().copied(), time_basis.display);
    let eighteen_holes_times = render_times(
        booked.iter().copied().filter(|slot| slot.has_tag(EIGHTEEN_HOLES_TAG)),
        time_basis.display,
    );

    let message = if booked_times.is_empty() {
        String::from("Anytime you want is available.")
    } else {
        format!("Anytime is available except for {}.", booked_times.join(", "))
    };
    let eighteen_holes_message = if eighteen_holes_times.is_empty() {
        String::from("18 holes is fully available.")
    } else {
        format!(
            "18 holes availability is limited to times outside of {}.",
            eighteen_holes_times.join(", ")
        )
    };

    AvailabilityReport::available(message, eighteen_holes_message)
}

fn render_times<'a>(slots: impl Iterator<Item = &'a Slot>, display: FixedOffset) -> Vec<String> {
    slots
        .map(|slot| slot.start.with_timezone(&display).format("%I:%M %p").to_string())
        .collect()
}
