use time::macros::datetime;

use super::*;

fn ctx_at(now: OffsetDateTime) -> RenderCtx {
    RenderCtx { now }
}

#[test]
fn list_timestamps_are_relative_when_recent() {
    let ctx = ctx_at(datetime!(2024-05-01 12:00:00 UTC));
    assert_eq!(fmt_ts_list("2024-05-01 11:59:30", &ctx), "just now");
    assert_eq!(fmt_ts_list("2024-05-01 11:15:00", &ctx), "45m ago");
    assert_eq!(fmt_ts_list("2024-04-30T12:00:00Z", &ctx), "24h ago");
    assert_eq!(fmt_ts_list("2024-04-25 12:00:00", &ctx), "6d ago");
}

#[test]
fn old_and_future_timestamps_are_absolute() {
    let ctx = ctx_at(datetime!(2024-05-01 12:00:00 UTC));
    assert_eq!(fmt_ts_list("2024-01-02 03:04:05", &ctx), "2024-01-02 03:04");
    assert_eq!(fmt_ts_list("2024-05-02 00:00:00", &ctx), "2024-05-02 00:00");
}

#[test]
fn unparseable_timestamps_pass_through() {
    assert_eq!(fmt_ts_ui("yesterday"), "yesterday");
    assert_eq!(fmt_ts_ui(""), "");
}
