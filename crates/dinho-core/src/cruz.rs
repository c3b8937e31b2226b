//! # Cruz do Dia
//!
//! The daily cross depends only on the day of the month.
//!
//! ```text
//!                 n1 = (d+3) % 10
//!                      ┌───┐
//!                      │n1 │
//!            ┌───┐     └───┘     ┌───┐
//!  (d+12)%10 │n4 │       ●       │n2 │ (d+6)%10
//!            └───┘     ┌───┐     └───┘
//!                      │n3 │
//!                      └───┘
//!                 n3 = (d+9) % 10
//!
//!  m1 = n1 n2 n3 n4      clockwise from top
//!  m2 = n2 n3 n4 n1      clockwise from right
//!  m3 = n3 n4 n1 n2      clockwise from bottom
//!  m4 = n4 n1 n2 n3      clockwise from left
//!  m5 = n1 n3 n4 n2      the cross itself
//! ```

use chrono::{Datelike, NaiveDate};

use crate::types::DailyCross;

/// Generates the Cruz do Dia for `today`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use dinho_core::generate_daily_cross;
///
/// let cross = generate_daily_cross(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
/// assert_eq!(cross.head_digit, 10);
/// assert_eq!(cross.arms, [3, 6, 9, 2]);
/// assert_eq!(cross.thousands, [3692, 6923, 9236, 2369, 3926]);
/// ```
pub fn generate_daily_cross(today: NaiveDate) -> DailyCross {
    cross_for_day(today.day() as u8)
}

/// Same as [`generate_daily_cross`], keyed by the day number alone.
pub fn cross_for_day(day: u8) -> DailyCross {
    let d = u16::from(day);
    let n1 = (d + 3) % 10;
    let n2 = (d + 6) % 10;
    let n3 = (d + 9) % 10;
    let n4 = (d + 12) % 10;

    let join = |a: u16, b: u16, c: u16, e: u16| a * 1000 + b * 100 + c * 10 + e;

    DailyCross {
        head_digit: day,
        arms: [n1 as u8, n2 as u8, n3 as u8, n4 as u8],
        thousands: [
            join(n1, n2, n3, n4),
            join(n2, n3, n4, n1),
            join(n3, n4, n1, n2),
            join(n4, n1, n2, n3),
            join(n1, n3, n4, n2),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_ten() {
        let cross = cross_for_day(10);
        assert_eq!(cross.head_digit, 10);
        assert_eq!(cross.arms, [3, 6, 9, 2]);
        assert_eq!(cross.thousands, [3692, 6923, 9236, 2369, 3926]);
    }

    #[test]
    fn test_leading_zero_collapses() {
        // Day 7: arms [0, 3, 6, 9], so the first thousand is "0369".
        let cross = cross_for_day(7);
        assert_eq!(cross.arms, [0, 3, 6, 9]);
        assert_eq!(cross.thousands[0], 369);
        assert_eq!(cross.formatted_thousands()[0], "0369");
        assert_eq!(cross.thousands[4], 693);
    }

    #[test]
    fn test_only_day_of_month_matters() {
        let a = generate_daily_cross(NaiveDate::from_ymd_opt(2024, 1, 21).unwrap());
        let b = generate_daily_cross(NaiveDate::from_ymd_opt(1999, 8, 21).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_days_pure_and_single_digit() {
        for day in 1..=31u8 {
            let cross = cross_for_day(day);
            assert_eq!(cross, cross_for_day(day));
            assert!(cross.arms.iter().all(|&n| n <= 9));
            assert!(cross.thousands.iter().all(|&m| m <= 9999));
        }
    }
}
