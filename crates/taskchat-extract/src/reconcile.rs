//! Due/effective date reconciliation.
//!
//! The merge policy is a deliberate four-way branch carried over intact
//! from the original behavior. It is asymmetric — a due date that
//! normalizes fills in a failed effective date and vice versa — and should
//! stay a literal branch, not get folded into something more general.

use chrono::NaiveDate;

/// Merge the normalized due/effective dates, defaulting to `today`.
///
/// `due_raw`/`effective_raw` are the phrases the model returned;
/// `due_norm`/`effective_norm` their normalized forms (`""` on failure).
/// Both outputs are always non-empty.
pub fn reconcile_dates(
    due_raw: &str,
    effective_raw: &str,
    due_norm: &str,
    effective_norm: &str,
    today: NaiveDate,
) -> (String, String) {
    let today_str = today.format("%Y-%m-%d").to_string();

    if due_raw.trim().is_empty() && effective_raw.trim().is_empty() {
        return (today_str.clone(), today_str);
    }

    if !due_norm.is_empty() && effective_norm.is_empty() {
        return (due_norm.to_string(), due_norm.to_string());
    }

    if !effective_norm.is_empty() && due_norm.is_empty() {
        return (effective_norm.to_string(), effective_norm.to_string());
    }

    let due = if due_norm.is_empty() {
        today_str.clone()
    } else {
        due_norm.to_string()
    };
    let effective = if effective_norm.is_empty() {
        today_str
    } else {
        effective_norm.to_string()
    };
    (due, effective)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 8).unwrap()
    }

    #[test]
    fn test_both_raw_empty_defaults_to_today() {
        let (due, eff) = reconcile_dates("", "", "", "", today());
        assert_eq!(due, "2026-04-08");
        assert_eq!(eff, "2026-04-08");
    }

    #[test]
    fn test_only_due_normalizes() {
        let (due, eff) = reconcile_dates("April 10", "someday", "2024-04-10", "", today());
        assert_eq!(due, "2024-04-10");
        assert_eq!(eff, "2024-04-10");
    }

    #[test]
    fn test_only_effective_normalizes() {
        let (due, eff) = reconcile_dates("someday", "April 12", "", "2026-04-12", today());
        assert_eq!(due, "2026-04-12");
        assert_eq!(eff, "2026-04-12");
    }

    #[test]
    fn test_both_normalize_kept_separate() {
        let (due, eff) =
            reconcile_dates("April 10", "April 12", "2026-04-10", "2026-04-12", today());
        assert_eq!(due, "2026-04-10");
        assert_eq!(eff, "2026-04-12");
    }

    #[test]
    fn test_both_fail_with_nonempty_raw() {
        let (due, eff) = reconcile_dates("someday", "whenever", "", "", today());
        assert_eq!(due, "2026-04-08");
        assert_eq!(eff, "2026-04-08");
    }
}
