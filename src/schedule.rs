//! Task Scheduling Logic
//!
//! Pure bucketing and sorting rules for the board renderer.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::Task;

/// Display group a task lands in on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Week,
    Month,
    Later,
    Done,
}

/// User-selectable sort order. `Insertion` keeps the backend's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    #[default]
    Insertion,
    DateAdded,
    DueDate,
    Priority,
}

impl SortCriterion {
    pub fn from_key(key: &str) -> Self {
        match key {
            "dateAdded" => Self::DateAdded,
            "dueDate" => Self::DueDate,
            "priority" => Self::Priority,
            _ => Self::Insertion,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Insertion => "",
            Self::DateAdded => "dateAdded",
            Self::DueDate => "dueDate",
            Self::Priority => "priority",
        }
    }
}

/// Calendar date of a stored date string, ignoring any time component
pub fn due_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or("");
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Time-of-day component, when the stored string carries one
pub fn due_time(raw: &str) -> Option<NaiveTime> {
    let (_, time_part) = raw.split_once('T')?;
    NaiveTime::parse_from_str(time_part, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time_part, "%H:%M:%S"))
        .ok()
}

pub fn due_datetime(raw: &str) -> Option<NaiveDateTime> {
    let date = due_date(raw)?;
    Some(date.and_time(due_time(raw).unwrap_or(NaiveTime::MIN)))
}

/// Sunday..Saturday of the week containing `today`, inclusive
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
    (start, start + Duration::days(6))
}

/// Last calendar day of `today`'s month
pub fn end_of_month(today: NaiveDate) -> NaiveDate {
    let first_of_next = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    };
    first_of_next
        .map(|d| d - Duration::days(1))
        .unwrap_or(today)
}

/// Bucket for one task. Checked wins over everything; undated tasks and
/// due dates past the current month land in `Later`.
pub fn bucket_for(task: &Task, today: NaiveDate) -> Bucket {
    if task.checked {
        return Bucket::Done;
    }
    let Some(due) = due_date(&task.date) else {
        return Bucket::Later;
    };
    let (week_start, week_end) = week_bounds(today);
    if (week_start..=week_end).contains(&due) {
        Bucket::Week
    } else if due <= end_of_month(today) {
        Bucket::Month
    } else {
        Bucket::Later
    }
}

/// High sorts first, unknown priorities last
pub fn priority_rank(priority: &str) -> u8 {
    match priority {
        "High" => 0,
        "Mid" => 1,
        "Low" => 2,
        _ => 3,
    }
}

/// Stable-sorted copy of `tasks`
pub fn sorted(tasks: &[Task], criterion: SortCriterion) -> Vec<Task> {
    let mut out = tasks.to_vec();
    match criterion {
        SortCriterion::Insertion => {}
        SortCriterion::DateAdded => out.sort_by_key(|t| t.created_at.unwrap_or(0)),
        SortCriterion::DueDate => out.sort_by_key(|t| match due_datetime(&t.date) {
            Some(due) => (0u8, due),
            None => (1, NaiveDateTime::MAX),
        }),
        SortCriterion::Priority => out.sort_by_key(|t| priority_rank(&t.priority)),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, date: &str, checked: bool, priority: &str) -> Task {
        Task {
            id,
            text: format!("Task {}", id),
            date: date.to_string(),
            checked,
            priority: priority.to_string(),
            created_at: None,
        }
    }

    // Wednesday; week runs Sun 2024-03-10 .. Sat 2024-03-16
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 13).unwrap()
    }

    #[test]
    fn checked_tasks_are_done_regardless_of_date() {
        assert_eq!(bucket_for(&make_task(1, "2024-03-13", true, "Mid"), today()), Bucket::Done);
        assert_eq!(bucket_for(&make_task(2, "", true, "Mid"), today()), Bucket::Done);
        assert_eq!(bucket_for(&make_task(3, "2030-01-01", true, "Mid"), today()), Bucket::Done);
    }

    #[test]
    fn undated_unchecked_tasks_go_to_later() {
        assert_eq!(bucket_for(&make_task(1, "", false, "Mid"), today()), Bucket::Later);
        assert_eq!(bucket_for(&make_task(2, "not a date", false, "Mid"), today()), Bucket::Later);
    }

    #[test]
    fn week_boundaries_are_inclusive() {
        // Sunday and Saturday of the current week are both "week", not "month"
        assert_eq!(bucket_for(&make_task(1, "2024-03-10", false, "Mid"), today()), Bucket::Week);
        assert_eq!(bucket_for(&make_task(2, "2024-03-16", false, "Mid"), today()), Bucket::Week);
        // time-of-day on the boundary date does not matter
        assert_eq!(
            bucket_for(&make_task(3, "2024-03-16T23:30", false, "Mid"), today()),
            Bucket::Week
        );
    }

    #[test]
    fn month_runs_to_the_last_calendar_day() {
        assert_eq!(bucket_for(&make_task(1, "2024-03-17", false, "Mid"), today()), Bucket::Month);
        assert_eq!(bucket_for(&make_task(2, "2024-03-31", false, "Mid"), today()), Bucket::Month);
        assert_eq!(bucket_for(&make_task(3, "2024-04-01", false, "Mid"), today()), Bucket::Later);
    }

    #[test]
    fn week_bounds_at_year_end() {
        // Tue 2024-12-31: week is Sun 2024-12-29 .. Sat 2025-01-04
        let nye = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let (start, end) = week_bounds(nye);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 29).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 1, 4).unwrap());
        assert_eq!(end_of_month(nye), nye);
    }

    #[test]
    fn priority_sort_is_stable_with_unknowns_last() {
        let tasks = vec![
            make_task(1, "", false, "Mid"),
            make_task(2, "", false, "High"),
            make_task(3, "", false, "Urgent"),
            make_task(4, "", false, "High"),
            make_task(5, "", false, "Low"),
        ];
        let ids: Vec<u32> = sorted(&tasks, SortCriterion::Priority)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![2, 4, 1, 5, 3]);
    }

    #[test]
    fn due_date_sort_puts_undated_last() {
        let tasks = vec![
            make_task(1, "", false, "Mid"),
            make_task(2, "2024-03-20", false, "Mid"),
            make_task(3, "2024-03-15T09:00", false, "Mid"),
            make_task(4, "2024-03-15T08:00", false, "Mid"),
        ];
        let ids: Vec<u32> = sorted(&tasks, SortCriterion::DueDate)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn date_added_sort_treats_missing_timestamps_as_zero() {
        let mut a = make_task(1, "", false, "Mid");
        a.created_at = Some(200);
        let b = make_task(2, "", false, "Mid");
        let mut c = make_task(3, "", false, "Mid");
        c.created_at = Some(100);
        let ids: Vec<u32> = sorted(&[a, b, c], SortCriterion::DateAdded)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn insertion_order_is_untouched_by_default() {
        let tasks = vec![
            make_task(9, "", false, "Low"),
            make_task(1, "", false, "High"),
        ];
        let ids: Vec<u32> = sorted(&tasks, SortCriterion::Insertion)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![9, 1]);
    }

    #[test]
    fn due_time_parsing() {
        assert_eq!(due_time("2024-03-15"), None);
        assert_eq!(
            due_time("2024-03-15T14:05"),
            NaiveTime::from_hms_opt(14, 5, 0)
        );
    }
}
