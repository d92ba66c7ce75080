//! Meal-hour adjustment.
//!
//! Keyword-triggered meal types add paid hours to a shift *before* overtime
//! resolution, so meal time is paid at the overtime tier rate rather than
//! the base rate. A meal type triggers at most once per shift, even when
//! several of its keywords match.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::config::MealType;

/// The result of applying meal-hour additions to a shift.
#[derive(Debug, Clone, PartialEq)]
pub struct MealAdjustmentResult {
    /// Worked hours after meal additions.
    pub adjusted_hours: Decimal,
    /// Total hours added by matched meals.
    pub hours_added: Decimal,
    /// Names of the meal types that matched, in configuration order.
    pub matched: Vec<String>,
}

/// Adds `adds_hours` for every meal type whose keyword set intersects the
/// mentioned keywords.
///
/// Matching is case-insensitive; `mentioned_keywords` must already be
/// lowercased (see `ShiftInput::normalized_keywords`).
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::apply_meal_additions;
/// use shift_pay_engine::config::MealType;
/// use rust_decimal::Decimal;
/// use std::collections::HashSet;
///
/// let meals = vec![MealType {
///     name: "running lunch".to_string(),
///     adds_hours: Decimal::ONE,
///     keywords: vec!["running lunch".to_string(), "running".to_string()],
/// }];
/// let mentioned = HashSet::from(["running".to_string()]);
///
/// let result = apply_meal_additions(Decimal::new(12, 0), &mentioned, &meals);
/// assert_eq!(result.adjusted_hours, Decimal::new(13, 0));
/// ```
pub fn apply_meal_additions(
    raw_worked_hours: Decimal,
    mentioned_keywords: &HashSet<String>,
    meals: &[MealType],
) -> MealAdjustmentResult {
    let mut hours_added = Decimal::ZERO;
    let mut matched = Vec::new();

    for meal in meals {
        let triggered = meal
            .keyword_set()
            .iter()
            .any(|keyword| mentioned_keywords.contains(keyword));

        if triggered {
            hours_added += meal.adds_hours;
            matched.push(meal.name.clone());
        }
    }

    MealAdjustmentResult {
        adjusted_hours: raw_worked_hours + hours_added,
        hours_added,
        matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn meal(name: &str, adds_hours: &str, keywords: &[&str]) -> MealType {
        MealType {
            name: name.to_string(),
            adds_hours: dec(adds_hours),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn keywords(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_lowercase()).collect()
    }

    #[test]
    fn test_no_meals_no_adjustment() {
        let result = apply_meal_additions(dec("12"), &keywords(&["running"]), &[]);
        assert_eq!(result.adjusted_hours, dec("12"));
        assert_eq!(result.hours_added, Decimal::ZERO);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_no_keywords_no_adjustment() {
        let meals = vec![meal("running lunch", "1", &["running lunch"])];
        let result = apply_meal_additions(dec("12"), &HashSet::new(), &meals);
        assert_eq!(result.adjusted_hours, dec("12"));
    }

    #[test]
    fn test_single_meal_matched() {
        let meals = vec![meal("running lunch", "1", &["running lunch", "running"])];
        let result = apply_meal_additions(dec("16"), &keywords(&["running"]), &meals);

        assert_eq!(result.adjusted_hours, dec("17"));
        assert_eq!(result.hours_added, dec("1"));
        assert_eq!(result.matched, vec!["running lunch".to_string()]);
    }

    #[test]
    fn test_duplicate_keyword_matches_add_once() {
        // Both keywords of the same meal type are mentioned; the meal's
        // hours are added only once.
        let meals = vec![meal("running lunch", "1", &["running lunch", "running"])];
        let result =
            apply_meal_additions(dec("12"), &keywords(&["running", "running lunch"]), &meals);

        assert_eq!(result.adjusted_hours, dec("13"));
        assert_eq!(result.matched.len(), 1);
    }

    #[test]
    fn test_two_distinct_meals_both_add() {
        let meals = vec![
            meal("running lunch", "1", &["running lunch", "running"]),
            meal("late lunch", "1.5", &["late lunch", "late"]),
        ];
        let result = apply_meal_additions(dec("12"), &keywords(&["running", "late"]), &meals);

        assert_eq!(result.adjusted_hours, dec("14.5"));
        assert_eq!(result.matched.len(), 2);
    }

    #[test]
    fn test_matching_is_case_insensitive_via_keyword_set() {
        // Meal keywords are stored mixed-case; keyword_set lowercases them.
        let meals = vec![meal("Running Lunch", "1", &["Running Lunch"])];
        let result = apply_meal_additions(dec("12"), &keywords(&["RUNNING LUNCH"]), &meals);
        assert_eq!(result.adjusted_hours, dec("13"));
    }

    #[test]
    fn test_meal_without_keywords_matches_its_name() {
        let meals = vec![meal("late lunch", "1", &[])];
        let result = apply_meal_additions(dec("12"), &keywords(&["late lunch"]), &meals);
        assert_eq!(result.adjusted_hours, dec("13"));
    }
}
