//! Frequency-weighted sampling of the day's tasks.
//!
//! The pool is split by frequency class and each class is sampled without
//! replacement:
//!
//! | class   | drawn                                  |
//! |---------|----------------------------------------|
//! | daily   | 3, 4 or 5 (uniform), capped by the pool |
//! | weekly  | 1 or 2 (p = 0.5 each), capped          |
//! | monthly | 1 with p = 0.3, else 0, capped         |
//!
//! Results are concatenated daily, weekly, monthly.

use chrono::{DateTime, Utc};

use crate::core::{Frequency, PoolEntry, SelectedTask};
use crate::random::RandomSource;
use crate::hlog_trace;

pub const DAILY_MIN: usize = 3;
pub const DAILY_MAX: usize = 5;
pub const WEEKLY_TWO_PROBABILITY: f64 = 0.5;
pub const MONTHLY_PROBABILITY: f64 = 0.3;

/// How many templates of each class were drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassCounts {
    pub daily: usize,
    pub weekly: usize,
    pub monthly: usize,
}

impl ClassCounts {
    pub fn of(tasks: &[SelectedTask]) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            match task.frequency {
                Frequency::Daily => counts.daily += 1,
                Frequency::Weekly => counts.weekly += 1,
                Frequency::Monthly => counts.monthly += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.daily + self.weekly + self.monthly
    }
}

/// Draw up to `count` items uniformly without replacement.
///
/// Each candidate gets a random key; candidates are stably sorted by key and
/// the prefix is taken, so pool order carries no bias.
pub fn sample<'a, T, R>(candidates: &[&'a T], count: usize, rng: &mut R) -> Vec<&'a T>
where
    R: RandomSource + ?Sized,
{
    let mut keyed: Vec<(f64, &'a T)> = candidates
        .iter()
        .map(|&item| (rng.next_f64(), item))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed
        .into_iter()
        .take(count)
        .map(|(_, item)| item)
        .collect()
}

/// Pick the templates for one day, in daily, weekly, monthly order.
pub fn choose<'a, R>(pool: &'a [PoolEntry], rng: &mut R) -> Vec<&'a PoolEntry>
where
    R: RandomSource + ?Sized,
{
    let of_class = |frequency: Frequency| -> Vec<&'a PoolEntry> {
        pool.iter().filter(|e| e.frequency == frequency).collect()
    };
    let daily = of_class(Frequency::Daily);
    let weekly = of_class(Frequency::Weekly);
    let monthly = of_class(Frequency::Monthly);

    let daily_count = rng.int_inclusive(DAILY_MIN, DAILY_MAX).min(daily.len());
    let mut chosen = sample(&daily, daily_count, rng);

    let weekly_count = if rng.chance(WEEKLY_TWO_PROBABILITY) { 2 } else { 1 };
    chosen.extend(sample(&weekly, weekly_count.min(weekly.len()), rng));

    let monthly_count = if rng.chance(MONTHLY_PROBABILITY) { 1 } else { 0 };
    chosen.extend(sample(&monthly, monthly_count.min(monthly.len()), rng));

    hlog_trace!(
        "choose: pool daily={} weekly={} monthly={} -> drew {} (daily={}, weekly<={}, monthly<={})",
        daily.len(),
        weekly.len(),
        monthly.len(),
        chosen.len(),
        daily_count,
        weekly_count,
        monthly_count
    );
    chosen
}

/// Pick the day's templates and materialize them as fresh instances.
pub fn select_daily_tasks<R>(
    pool: &[PoolEntry],
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<SelectedTask>
where
    R: RandomSource + ?Sized,
{
    choose(pool, rng)
        .into_iter()
        .map(|entry| SelectedTask::from_entry(entry, now))
        .collect()
}
