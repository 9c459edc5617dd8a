use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};

/// Rule describing how the sale anchor date is computed: the nth occurrence
/// of a weekday within a month. Defaults to the fourth Friday of November.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaleDateRule {
    pub month: u32,
    pub week_of_month: u32,
    pub day_of_week: Weekday,
}

impl Default for SaleDateRule {
    fn default() -> Self {
        Self {
            month: 11,
            week_of_month: 4,
            day_of_week: Weekday::Fri,
        }
    }
}

/// Returns the nth occurrence of `weekday` in the given month, or `None`
/// when the month has no nth occurrence (e.g. a fifth Friday).
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    nth: u32,
) -> Option<NaiveDate> {
    if nth == 0 {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset =
        (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    let date = first + Duration::days(i64::from(offset + (nth - 1) * 7));
    (date.month() == month).then_some(date)
}

/// Computes the next occurrence of the rule relative to `reference`. A
/// reference falling exactly on the computed date counts as already passed
/// and rolls forward to the following year.
pub fn next_occurrence(rule: &SaleDateRule, reference: NaiveDate) -> GenResult<NaiveDate> {
    let occurrence_in = |year: i32| {
        nth_weekday_of_month(year, rule.month, rule.day_of_week, rule.week_of_month).ok_or_else(
            || {
                GenError::InvalidConfig(format!(
                    "no occurrence {} of {} in {year}-{:02}",
                    rule.week_of_month, rule.day_of_week, rule.month
                ))
            },
        )
    };

    let this_year = occurrence_in(reference.year())?;
    if reference >= this_year {
        occurrence_in(reference.year() + 1)
    } else {
        Ok(this_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn fourth_friday_of_november() {
        assert_eq!(
            nth_weekday_of_month(2023, 11, Weekday::Fri, 4),
            Some(date(2023, 11, 24))
        );
        assert_eq!(
            nth_weekday_of_month(2024, 11, Weekday::Fri, 4),
            Some(date(2024, 11, 22))
        );
    }

    #[test]
    fn fifth_occurrence_only_when_month_has_one() {
        assert_eq!(
            nth_weekday_of_month(2024, 11, Weekday::Fri, 5),
            Some(date(2024, 11, 29))
        );
        assert_eq!(nth_weekday_of_month(2023, 11, Weekday::Fri, 5), None);
        assert_eq!(nth_weekday_of_month(2023, 11, Weekday::Fri, 0), None);
    }

    #[test]
    fn upcoming_sale_date_stays_in_reference_year() {
        let rule = SaleDateRule::default();
        let next = next_occurrence(&rule, date(2023, 1, 1)).expect("sale date");
        assert_eq!(next, date(2023, 11, 24));

        let next = next_occurrence(&rule, date(2023, 11, 23)).expect("sale date");
        assert_eq!(next, date(2023, 11, 24));
    }

    #[test]
    fn passed_sale_date_rolls_to_next_year() {
        let rule = SaleDateRule::default();
        let next = next_occurrence(&rule, date(2023, 11, 30)).expect("sale date");
        assert_eq!(next, date(2024, 11, 22));
    }

    #[test]
    fn reference_on_the_day_counts_as_passed() {
        let rule = SaleDateRule::default();
        let next = next_occurrence(&rule, date(2023, 11, 24)).expect("sale date");
        assert_eq!(next, date(2024, 11, 22));
    }

    #[test]
    fn custom_rule_is_honored() {
        let rule = SaleDateRule {
            month: 7,
            week_of_month: 2,
            day_of_week: Weekday::Mon,
        };
        let next = next_occurrence(&rule, date(2024, 1, 1)).expect("sale date");
        assert_eq!(next, date(2024, 7, 8));
    }

    #[test]
    fn impossible_occurrence_is_rejected() {
        let rule = SaleDateRule {
            month: 2,
            week_of_month: 5,
            day_of_week: Weekday::Mon,
        };
        let err = next_occurrence(&rule, date(2023, 1, 1)).expect_err("no fifth monday");
        assert!(
            err.to_string().contains("no occurrence"),
            "unexpected error: {err}"
        );
    }
}
