use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Source of the day key every record is filed under.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock read in a time zone. The zone's offset is looked up for every
/// instant, so DST changes take effect without a restart.
pub struct SystemClock<Tz: TimeZone> {
    zone: Tz,
}

impl<Tz: TimeZone> SystemClock<Tz> {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    pub fn date_at(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.zone).date_naive()
    }
}

impl<Tz> Clock for SystemClock<Tz>
where
    Tz: TimeZone + Send + Sync,
{
    fn today(&self) -> NaiveDate {
        self.date_at(Utc::now())
    }
}

#[cfg(test)]
pub struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
