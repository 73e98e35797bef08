use std::fmt;

use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// RFC3339 timestamps at a fixed offset chosen at logger init.
#[derive(Debug, Clone, Copy)]
pub struct LoggerRfc3339 {
    offset: UtcOffset,
}

impl LoggerRfc3339 {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }
}

impl FormatTime for LoggerRfc3339 {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = OffsetDateTime::now_utc().to_offset(self.offset);
        match now.format(&Rfc3339) {
            Ok(ts) => write!(w, "{ts} "),
            Err(_) => write!(w, "<invalid-time> "),
        }
    }
}
