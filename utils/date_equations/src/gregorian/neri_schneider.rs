// NOTE: The supported year range is roughly [-271_821, 275_760], which
// covers an epoch day range of epoch_days.abs() <= 100_000_001.
//
// (271_821 / 400).ceil() = 680 Gregorian cycles of shift.

const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;

const DAYS_IN_A_400Y_CYCLE: u32 = 146_097;
const TWO_POWER_THIRTY_NINE: u64 = 549_755_813_888; // 2^39 constant
const TWO_POWER_SIXTEEN: u32 = 65_536; // 2^16 constant

const SHIFTS: i64 = 680;
const YEAR_SHIFT: i64 = 400 * SHIFTS;
const RATA_DIE_SHIFT: i64 = EPOCH_COMPUTATIONAL_RATA_DIE + DAYS_IN_A_400Y_CYCLE as i64 * SHIFTS;

// ==== Gregorian date -> epoch days ====

/// Returns the number of days since 1970-01-01 for the provided
/// Gregorian date.
///
/// `month` is 1-based and `day` is not validated, so a day of 0 or 32
/// simply lands before or after the month.
pub const fn epoch_days_from_gregorian_date(year: i32, month: u8, day: u8) -> i64 {
    // Move into the computational calendar, which starts on March 1st,
    // shifted far enough forward that every supported year is positive.
    let j = (month <= 2) as i64;
    let computational_year = year as i64 + YEAR_SHIFT - j;
    let computational_month = month as i64 + 12 * j;
    let computational_day = day as i64 - 1;
    let century = computational_year / 100;

    let y_star = 1461 * computational_year / 4 - century + century / 4;
    let m_star = (979 * computational_month - 2919) / 32;
    y_star + m_star + computational_day - RATA_DIE_SHIFT
}

// ==== Epoch days -> Gregorian date ====

/// Returns (Y, N_y), the computational year and the day of that year.
const fn year_equations(rata_die: u32) -> (u32, u32) {
    let n_one = 4 * rata_die + 3;
    let century = n_one.div_euclid(DAYS_IN_A_400Y_CYCLE);
    let n_two = n_one.rem_euclid(DAYS_IN_A_400Y_CYCLE) | 3;
    let year_of_century = (376_287_347 * n_two as u64).div_euclid(TWO_POWER_THIRTY_NINE) as u32;
    let day_of_year = (n_two - 1461 * year_of_century).div_euclid(4);
    (100 * century + year_of_century, day_of_year)
}

const fn gregorian_ymd(rata_die: u32) -> (i32, u8, u8) {
    let (year, day_of_year) = year_equations(rata_die);
    let n_three = 2141 * day_of_year + 197_913;
    let month = n_three.div_euclid(TWO_POWER_SIXTEEN);
    let day = n_three.rem_euclid(TWO_POWER_SIXTEEN).div_euclid(2141);

    // Days 306 and later of the computational year are January and February.
    let j = (day_of_year >= 306) as u32;
    ((year + j) as i32, (month - 12 * j) as u8, (day + 1) as u8)
}

/// Returns the Gregorian `(year, month, day)` for a count of days since
/// 1970-01-01. The month is 1-based.
pub const fn gregorian_ymd_from_epoch_days(epoch_days: i32) -> (i32, u8, u8) {
    let (year, month, day) = gregorian_ymd((epoch_days as i64 + RATA_DIE_SHIFT) as u32);
    (year - YEAR_SHIFT as i32, month, day)
}

/// Returns the day of the week, where 0 is Sunday and 6 is Saturday.
pub const fn weekday_from_epoch_days(epoch_days: i64) -> u8 {
    // 1970-01-01 was a Thursday.
    (epoch_days + 4).rem_euclid(7) as u8
}

// ==== Year and month lengths ====

pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in a 1-based month of the provided year.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_ymd() {
        assert_eq!(gregorian_ymd_from_epoch_days(0), (1970, 1, 1));
        assert_eq!(gregorian_ymd_from_epoch_days(-1), (1969, 12, 31));
        assert_eq!(gregorian_ymd_from_epoch_days(11_016), (2000, 2, 29));
        assert_eq!(gregorian_ymd_from_epoch_days(11_017), (2000, 3, 1));
    }

    #[test]
    fn epoch_days_from_date() {
        assert_eq!(epoch_days_from_gregorian_date(1970, 1, 1), 0);
        assert_eq!(epoch_days_from_gregorian_date(1969, 12, 31), -1);
        assert_eq!(epoch_days_from_gregorian_date(2000, 1, 1), 10_957);
        assert_eq!(epoch_days_from_gregorian_date(2000, 3, 1), 11_017);
        // Day zero is the last day of the previous month.
        assert_eq!(epoch_days_from_gregorian_date(2000, 3, 0), 11_016);
    }

    #[test]
    fn epoch_days_limits() {
        assert_eq!(epoch_days_from_gregorian_date(275_760, 9, 13), 100_000_000);
        assert_eq!(epoch_days_from_gregorian_date(-271_821, 4, 20), -100_000_000);
        assert_eq!(gregorian_ymd_from_epoch_days(100_000_001), (275_760, 9, 14));
        assert_eq!(gregorian_ymd_from_epoch_days(-100_000_001), (-271_821, 4, 19));
    }

    #[test]
    fn weekdays() {
        assert_eq!(weekday_from_epoch_days(0), 4);
        // 2024-03-05 was a Tuesday.
        let days = epoch_days_from_gregorian_date(2024, 3, 5);
        assert_eq!(weekday_from_epoch_days(days), 2);
        assert_eq!(weekday_from_epoch_days(-4), 0);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }
}
