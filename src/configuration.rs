use crate::types::TimeBasis;
use std::path::PathBuf;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn port(&self) -> u16;
    fn upstream_url(&self) -> String;
    fn slots_file(&self) -> Option<PathBuf>;
    /// Offsets used to bucket slot starts into days and to render their times.
    fn time_basis(&self) -> TimeBasis;
}
