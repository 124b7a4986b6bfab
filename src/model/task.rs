use std::fmt;

use chrono::NaiveDate;

/// Default span of a freshly created task, in days.
pub const DEFAULT_TASK_DAYS: i64 = 3;

pub const DEFAULT_TITLE: &str = "New task";

/// Opaque task identifier, unique within one chart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A scheduled task occupying one row of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Left edge of the task box, in surface pixels.
    pub x: f32,
    /// Top edge of the owning row.
    pub y: f32,
    /// Box width in pixels. Derived from the chart width, not the date span.
    pub width: f32,
    pub row: usize,
}

impl Task {
    /// Number of days covered, counting both ends.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// A single-field change coming from the task editor.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskEdit {
    Title(String),
    StartDate(NaiveDate),
    EndDate(NaiveDate),
}

impl TaskEdit {
    /// Field name, for logs and status messages.
    pub fn field(&self) -> &'static str {
        match self {
            TaskEdit::Title(_) => "title",
            TaskEdit::StartDate(_) => "start date",
            TaskEdit::EndDate(_) => "end date",
        }
    }

    pub(crate) fn apply(self, task: &mut Task) {
        match self {
            TaskEdit::Title(title) => task.title = title,
            TaskEdit::StartDate(date) => task.start_date = date,
            TaskEdit::EndDate(date) => task.end_date = date,
        }
    }
}

/// Expand an editor change into the edits that keep `start <= end`, given the
/// task's current `start` and `end`.
///
/// A start moved past the end drags the end along, and an end moved before
/// the start drags the start. Each returned edit still touches one field.
pub fn date_edits(start: NaiveDate, end: NaiveDate, changed: TaskEdit) -> Vec<TaskEdit> {
    let follow = match &changed {
        TaskEdit::StartDate(date) if *date > end => Some(TaskEdit::EndDate(*date)),
        TaskEdit::EndDate(date) if *date < start => Some(TaskEdit::StartDate(*date)),
        _ => None,
    };
    std::iter::once(changed).chain(follow).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn start_past_end_pulls_end_along() {
        assert_eq!(
            date_edits(day(1), day(4), TaskEdit::StartDate(day(9))),
            vec![TaskEdit::StartDate(day(9)), TaskEdit::EndDate(day(9))]
        );
    }

    #[test]
    fn end_before_start_pulls_start_back() {
        assert_eq!(
            date_edits(day(10), day(14), TaskEdit::EndDate(day(2))),
            vec![TaskEdit::EndDate(day(2)), TaskEdit::StartDate(day(2))]
        );
    }

    #[test]
    fn ordered_changes_stay_single() {
        assert_eq!(
            date_edits(day(1), day(4), TaskEdit::StartDate(day(4))),
            vec![TaskEdit::StartDate(day(4))]
        );
        assert_eq!(
            date_edits(day(1), day(4), TaskEdit::EndDate(day(20))),
            vec![TaskEdit::EndDate(day(20))]
        );
        assert_eq!(
            date_edits(day(1), day(4), TaskEdit::Title("Plan".into())),
            vec![TaskEdit::Title("Plan".into())]
        );
    }
}
