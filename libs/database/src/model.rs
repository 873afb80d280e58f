use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// An entity with a stable identity and audit timestamps.
pub trait Model: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;

    fn created_at(&self) -> DateTime<Utc>;

    fn updated_at(&self) -> DateTime<Utc>;

    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>);
}

/// Current time at microsecond precision, the resolution of `timestamptz`.
pub fn timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
