use crate::{configuration::Configuration, types::TimeBasis};
use chrono::FixedOffset;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_UPSTREAM_URL: &str =
    "https://66b357b77fba54a5b7ec89d3.mockapi.io/api/v1/availabilities";

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Answers whether a date is available at the golf course")]
pub struct ConfigurationHandler {
    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Availability feed returning the booked slots
    #[arg(long, env = "UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_URL)]
    upstream_url: String,

    /// Read the booked slots from this JSON file instead of the upstream feed
    #[arg(long, env = "SLOTS_FILE")]
    slots_file: Option<PathBuf>,

    /// UTC offset deciding which day a slot start belongs to
    #[arg(
        long,
        env = "DAY_UTC_OFFSET",
        default_value = "+00:00",
        allow_hyphen_values = true,
        value_parser = parse_utc_offset
    )]
    day_utc_offset: FixedOffset,

    /// UTC offset slot times are displayed in, e.g. -06:00
    #[arg(
        long,
        env = "UTC_OFFSET",
        default_value = "+00:00",
        allow_hyphen_values = true,
        value_parser = parse_utc_offset
    )]
    utc_offset: FixedOffset,
}

fn parse_utc_offset(value: &str) -> Result<FixedOffset, String> {
    value
        .parse::<FixedOffset>()
        .map_err(|err| format!("expected an offset like +02:00 ({err})"))
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> u16 {
        self.port
    }

    fn upstream_url(&self) -> String {
        self.upstream_url.clone()
    }

    fn slots_file(&self) -> Option<PathBuf> {
        self.slots_file.clone()
    }

    fn time_basis(&self) -> TimeBasis {
        TimeBasis {
            day: self.day_utc_offset,
            display: self.utc_offset,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let configuration = ConfigurationHandler::try_parse_from([
            "tee_time_availability",
            "--port",
            "8080",
            "--upstream-url",
            "http://localhost:9000/slots",
            "--slots-file",
            "slots.json",
            "--utc-offset",
            "-06:00",
        ])
        .unwrap();

        assert_eq!(configuration.port(), 8080);
        assert_eq!(configuration.upstream_url(), "http://localhost:9000/slots");
        assert_eq!(configuration.slots_file(), Some(PathBuf::from("slots.json")));
        assert_eq!(
            configuration.time_basis(),
            TimeBasis {
                day: FixedOffset::east_opt(0).unwrap(),
                display: FixedOffset::west_opt(6 * 3600).unwrap(),
            }
        );
    }

    #[test]
    fn test_day_offset_is_separate_from_display() {
        let configuration = ConfigurationHandler::try_parse_from([
            "tee_time_availability",
            "--day-utc-offset=+02:00",
            "--utc-offset=-06:00",
        ])
        .unwrap();

        let time_basis = configuration.time_basis();
        assert_eq!(time_basis.day.local_minus_utc(), 2 * 3600);
        assert_eq!(time_basis.display.local_minus_utc(), -6 * 3600);
    }

    #[test_case::test_case("+00:00", 0 ; "utc")]
    #[test_case::test_case("+05:30", 5 * 3600 + 30 * 60 ; "india")]
    #[test_case::test_case("-06:00", -6 * 3600 ; "mountain")]
    fn test_parse_utc_offset(value: &str, seconds: i32) {
        assert_eq!(
            parse_utc_offset(value).unwrap().local_minus_utc(),
            seconds
        );
    }

    #[test]
    fn test_reject_invalid_utc_offset() {
        parse_utc_offset("Mountain Time").unwrap_err();
    }
}
