use std::time::SystemTime;

use time::{
    OffsetDateTime,
    format_description::well_known::{Rfc2822, Rfc3339},
};

pub mod guide;
pub mod health;

/// Format an instant as RFC 3339 for machine consumers.
fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}

/// Format an instant for operators reading the healthy response.
fn format_system_time_human(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc2822)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
