//! Read-only collection of week records.

use std::collections::HashSet;

use thiserror::Error;

use crate::{LookupError, Result, WeekId, WeekRecord, parse_week_id};

/// Problems found while validating a collection of weeks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the week collection is empty")]
    Empty,

    #[error("week id {0} appears more than once")]
    DuplicateId(WeekId),

    #[error("week {0} has an empty title")]
    MissingTitle(WeekId),

    #[error("week {0} has an empty code snippet")]
    MissingCode(WeekId),
}

/// Previous/next week ids around a given week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Adjacent {
    pub previous: Option<WeekId>,
    pub next: Option<WeekId>,
}

/// Ordered, immutable collection of weeks.
///
/// Records keep the order they were given in; that order is the display
/// order for the home grid and the navigation bar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekStore {
    weeks: Vec<WeekRecord>,
}

impl WeekStore {
    /// Create a store over the given records.
    pub fn new(weeks: Vec<WeekRecord>) -> Self {
        Self { weeks }
    }

    /// All weeks, in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, WeekRecord> {
        self.weeks.iter()
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Get the first week with the given id.
    pub fn get(&self, id: WeekId) -> Option<&WeekRecord> {
        self.weeks.iter().find(|w| w.id == id)
    }

    /// Whether a week with the given id exists.
    pub fn contains(&self, id: WeekId) -> bool {
        self.get(id).is_some()
    }

    /// Smallest week id, if any.
    pub fn min_id(&self) -> Option<WeekId> {
        self.weeks.iter().map(|w| w.id).min()
    }

    /// Largest week id, if any.
    pub fn max_id(&self) -> Option<WeekId> {
        self.weeks.iter().map(|w| w.id).max()
    }

    /// Resolve a week from a raw route segment.
    ///
    /// Fails with [`LookupError::InvalidId`] when the segment is not a
    /// whole non-negative integer, and [`LookupError::NotFound`] when no
    /// week carries the parsed id.
    pub fn lookup(&self, raw: &str) -> Result<&WeekRecord> {
        let id = parse_week_id(raw)?;
        self.get(id).ok_or(LookupError::NotFound(id))
    }

    /// Compute previous/next navigation for `id`.
    ///
    /// Bounds come from the collection itself, and a neighbour is only
    /// reported when a week with that id exists.
    pub fn adjacent(&self, id: WeekId) -> Adjacent {
        let (Some(min), Some(max)) = (self.min_id(), self.max_id()) else {
            return Adjacent::default();
        };

        let previous = (id > min)
            .then(|| id - 1)
            .filter(|prev| self.contains(*prev));
        let next = (id < max)
            .then(|| id + 1)
            .filter(|next| self.contains(*next));

        Adjacent { previous, next }
    }

    /// Check the collection for duplicate ids and incomplete records.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.weeks.is_empty() {
            return Err(ValidationError::Empty);
        }

        let mut seen = HashSet::new();
        for week in &self.weeks {
            if !seen.insert(week.id) {
                return Err(ValidationError::DuplicateId(week.id));
            }
            if week.title.trim().is_empty() {
                return Err(ValidationError::MissingTitle(week.id));
            }
            if week.code_snippet.trim().is_empty() {
                return Err(ValidationError::MissingCode(week.id));
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a WeekStore {
    type Item = &'a WeekRecord;
    type IntoIter = std::slice::Iter<'a, WeekRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.weeks.iter()
    }
}
