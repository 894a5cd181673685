use chrono::{DateTime, SubsecRound, TimeDelta, Utc};

/// Current time at the precision PostgreSQL stores (microseconds)
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// `updated_at` for a mutation: strictly after `previous`, even when the
/// clock has not advanced or has stepped back.
pub fn touch(previous: DateTime<Utc>) -> DateTime<Utc> {
    now().max(previous + TimeDelta::microseconds(1))
}
