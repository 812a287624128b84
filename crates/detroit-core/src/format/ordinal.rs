//! English ordinal suffixes for day-of-month numbers

/// Suffix for a day of the month: "st", "nd", "rd" or "th".
///
/// The teens 11, 12 and 13 always take "th"; every other day is decided by
/// its last digit.
///
/// # Panics
///
/// Panics if `day` is outside 1..=31.
pub fn ordinal_suffix(day: u8) -> &'static str {
    assert!(
        (1..=31).contains(&day),
        "day of month out of range (1-31): {day}"
    );

    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: [&str; 31] = [
        "st", "nd", "rd", "th", "th", "th", "th", "th", "th", "th", // 1-10
        "th", "th", "th", "th", "th", "th", "th", "th", "th", "th", // 11-20
        "st", "nd", "rd", "th", "th", "th", "th", "th", "th", "th", // 21-30
        "st", // 31
    ];

    #[test]
    fn test_every_day_matches_reference_table() {
        for day in 1..=31u8 {
            assert_eq!(
                ordinal_suffix(day),
                REFERENCE[(day - 1) as usize],
                "wrong suffix for day {day}"
            );
        }
    }

    #[test]
    fn test_teens_take_th() {
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
    }

    #[test]
    fn test_twenties_follow_last_digit() {
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(31), "st");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_day_zero_panics() {
        ordinal_suffix(0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_day_thirty_two_panics() {
        ordinal_suffix(32);
    }
}
