use chrono::{DateTime, FixedOffset, Utc};

/// Get current Unix timestamp in JST (milliseconds)
pub fn get_jst_timestamp() -> i64 {
    let jst_offset = FixedOffset::east_opt(9 * 3600).unwrap(); // JST is UTC+9
    let now_utc = Utc::now();
    let now_jst: DateTime<FixedOffset> = now_utc.with_timezone(&jst_offset);
    now_jst.timestamp_millis()
}

/// Render a millisecond timestamp as an RFC 3339 string in JST
pub fn timestamp_to_jst_rfc3339(timestamp_millis: i64) -> String {
    let jst_offset = FixedOffset::east_opt(9 * 3600).unwrap();
    match DateTime::<Utc>::from_timestamp_millis(timestamp_millis) {
        Some(dt) => dt.with_timezone(&jst_offset).to_rfc3339(),
        None => String::new(),
    }
}
