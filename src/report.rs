//! A daily library report. Visitor IDs are recorded in a [`Tree`] and their
//! ages come from a [`Registry`] of citizens, so the report can list
//! visitors by ID, summarize their ages, and answer "did this person visit?".
//!
//! # Examples
//!
//! ```
//! use ordered_tree::registry::Registry;
//! use ordered_tree::report::VisitorLog;
//!
//! let citizens: Registry<u64, u8> = [(1, 30), (2, 50), (3, 19)].into_iter().collect();
//!
//! let mut log = VisitorLog::new();
//! log.record(2);
//! log.record(1);
//!
//! assert!(log.visited(1));
//! assert!(!log.visited(3));
//!
//! let stats = log.stats(&citizens).unwrap();
//! assert_eq!((stats.youngest, stats.oldest, stats.average), (30, 50, 40.0));
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::Error;
use crate::registry::Registry;
use crate::tree::Tree;

/// A citizen's unique national ID.
pub type CitizenId = u64;

/// An age in years.
pub type Age = u8;

const BUNDLED_DATASET: &str = include_str!("../data/library.json");

/// The input to a [`Report`]: who exists, who visited, and who to look for.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    /// Age of every known citizen by ID.
    pub citizens: Registry<CitizenId, Age>,
    /// IDs of today's visitors in arrival order. May repeat.
    pub visitors: Vec<CitizenId>,
    /// IDs to check for a visit.
    #[serde(default)]
    pub checks: Vec<CitizenId>,
}

impl Dataset {
    /// Parses a dataset from JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON dataset from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading dataset");
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// The dataset compiled into the crate.
    pub fn bundled() -> Result<Self, Error> {
        Self::from_json(BUNDLED_DATASET)
    }
}

/// The set of people who visited the library today.
#[derive(Debug, Default)]
pub struct VisitorLog {
    visitors: Tree<CitizenId>,
}

impl VisitorLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a visit. Returns `false` if `id` had already visited today.
    pub fn record(&mut self, id: CitizenId) -> bool {
        let first_visit = self.visitors.insert(id);
        if !first_visit {
            debug!(id, "visitor already recorded");
        }
        first_visit
    }

    /// Whether `id` visited today.
    pub fn visited(&self, id: CitizenId) -> bool {
        self.visitors.contains(&id)
    }

    /// The number of distinct visitors.
    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    /// Whether nobody visited.
    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    /// Visitor IDs, smallest first.
    pub fn ascending(&self) -> impl DoubleEndedIterator<Item = CitizenId> + '_ {
        self.visitors.iter().copied()
    }

    /// Visitor IDs, largest first.
    pub fn descending(&self) -> impl Iterator<Item = CitizenId> + '_ {
        self.visitors.iter_rev().copied()
    }

    /// Summarizes the ages of everyone in the log.
    ///
    /// # Errors
    ///
    /// [`Error::NoVisitors`] if the log is empty and [`Error::UnknownKey`] if
    /// a visitor has no entry in `citizens`.
    pub fn stats(&self, citizens: &Registry<CitizenId, Age>) -> Result<AgeStats, Error> {
        let mut ages = self.ascending().map(|id| citizens.get(&id).copied());
        let first = ages.next().ok_or(Error::NoVisitors)??;

        let mut stats = AgeStats {
            count: 1,
            youngest: first,
            oldest: first,
            average: 0.0,
        };
        let mut total = u64::from(first);
        for age in ages {
            let age = age?;
            stats.count += 1;
            stats.youngest = stats.youngest.min(age);
            stats.oldest = stats.oldest.max(age);
            total += u64::from(age);
        }
        stats.average = total as f64 / stats.count as f64;

        Ok(stats)
    }
}

impl Extend<CitizenId> for VisitorLog {
    fn extend<I: IntoIterator<Item = CitizenId>>(&mut self, iter: I) {
        for id in iter {
            self.record(id);
        }
    }
}

/// Age summary over a [`VisitorLog`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeStats {
    /// How many distinct visitors were counted.
    pub count: usize,
    /// The youngest visitor's age.
    pub youngest: Age,
    /// The oldest visitor's age.
    pub oldest: Age,
    /// Mean age across visitors.
    pub average: f64,
}

/// Everything the daily report prints.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Each visitor with their age, largest ID first.
    pub visitors: Vec<(CitizenId, Age)>,
    /// Age summary.
    pub stats: AgeStats,
    /// Each requested ID and whether it visited, in request order.
    pub checks: Vec<(CitizenId, bool)>,
}

impl Report {
    /// Records every visitor in `dataset` and builds the report.
    pub fn build(dataset: &Dataset) -> Result<Self, Error> {
        let mut log = VisitorLog::new();
        log.extend(dataset.visitors.iter().copied());
        info!(
            visits = dataset.visitors.len(),
            distinct = log.len(),
            "recorded visitors"
        );

        let visitors = log
            .descending()
            .map(|id| dataset.citizens.get(&id).map(|&age| (id, age)))
            .collect::<Result<Vec<_>, Error>>()?;
        let stats = log.stats(&dataset.citizens)?;
        let checks = dataset
            .checks
            .iter()
            .map(|&id| (id, log.visited(id)))
            .collect();

        Ok(Self {
            visitors,
            stats,
            checks,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Citizens that visited the library today (largest ID first):")?;
        writeln!(f, "{}", "-".repeat(50))?;
        for (id, age) in &self.visitors {
            writeln!(f, "{} entered the library and is {} years old.", id, age)?;
        }

        writeln!(f)?;
        writeln!(f, "Today's stats:")?;
        writeln!(f, "{}", "-".repeat(14))?;
        writeln!(
            f,
            "The youngest person that visited today was {} years old.",
            self.stats.youngest
        )?;
        writeln!(
            f,
            "The oldest person that visited today was {} years old.",
            self.stats.oldest
        )?;
        writeln!(
            f,
            "The average age for today was {} years old.",
            self.stats.average
        )?;

        writeln!(f)?;
        writeln!(f, "Visits by certain individuals:")?;
        writeln!(f, "{}", "-".repeat(39))?;
        for (id, visited) in &self.checks {
            if *visited {
                writeln!(f, "{} visited the library today.", id)?;
            } else {
                writeln!(f, "{} didn't visit the library today.", id)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn citizens() -> Registry<CitizenId, Age> {
        [(10, 40), (20, 18), (30, 77)].into_iter().collect()
    }

    #[test]
    fn repeat_visits_count_once() {
        let mut log = VisitorLog::new();

        assert!(log.record(20));
        assert!(log.record(10));
        assert!(!log.record(20));

        assert_eq!(log.len(), 2);
        assert_eq!(log.ascending().collect::<Vec<_>>(), [10, 20]);
        assert_eq!(log.descending().collect::<Vec<_>>(), [20, 10]);
    }

    #[test]
    fn stats_over_visitors() {
        let mut log = VisitorLog::new();
        log.extend([30, 10, 20, 10]);

        let stats = log.stats(&citizens()).unwrap();

        assert_eq!(
            stats,
            AgeStats {
                count: 3,
                youngest: 18,
                oldest: 77,
                average: 45.0,
            }
        );
    }

    #[test]
    fn stats_on_empty_log() {
        let log = VisitorLog::new();

        assert!(matches!(log.stats(&citizens()), Err(Error::NoVisitors)));
    }

    #[test]
    fn stats_with_unregistered_visitor() {
        let mut log = VisitorLog::new();
        log.extend([10, 99]);

        match log.stats(&citizens()) {
            Err(Error::UnknownKey(key)) => assert_eq!(key, "99"),
            other => panic!("expected UnknownKey, got {:?}", other),
        }
    }

    #[test]
    fn bundled_report() {
        let dataset = Dataset::bundled().unwrap();
        let report = Report::build(&dataset).unwrap();

        assert_eq!(report.visitors.len(), 16);
        assert_eq!(report.visitors.first(), Some(&(1846591742, 27)));
        assert_eq!(report.visitors.last(), Some(&(1097602870, 78)));
        assert!(report.visitors.windows(2).all(|w| w[0].0 > w[1].0));

        assert_eq!(
            report.stats,
            AgeStats {
                count: 16,
                youngest: 27,
                oldest: 98,
                average: 60.125,
            }
        );
        assert_eq!(
            report.checks,
            [(1170741186, true), (1470318933, true), (1327939204, false)]
        );
    }

    #[test]
    fn report_text() {
        let dataset = Dataset::from_json(
            r#"{"citizens": {"10": 40, "20": 18}, "visitors": [10, 20], "checks": [20, 30]}"#,
        )
        .unwrap();
        let text = Report::build(&dataset).unwrap().to_string();

        assert!(text.contains("20 entered the library and is 18 years old.\n10 entered"));
        assert!(text.contains("The youngest person that visited today was 18 years old."));
        assert!(text.contains("The oldest person that visited today was 40 years old."));
        assert!(text.contains("The average age for today was 29 years old."));
        assert!(text.contains("20 visited the library today."));
        assert!(text.contains("30 didn't visit the library today."));
    }

    #[test]
    fn malformed_dataset() {
        assert!(matches!(
            Dataset::from_json(r#"{"visitors": []}"#),
            Err(Error::Dataset(_))
        ));
        assert!(matches!(
            Dataset::load("/nonexistent/library.json"),
            Err(Error::Io(_))
        ));
    }
}
