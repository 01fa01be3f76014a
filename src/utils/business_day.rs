// Journée de bourse : toujours calculée à l'heure de Chicago,
// jamais dans le fuseau de l'appelant.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::America::Chicago;

/// Date civile (America/Chicago) d'un instant UTC
pub fn business_day(at: DateTime<Utc>) -> NaiveDate {
    at.with_timezone(&Chicago).date_naive()
}

/// Minuit à Chicago pour `day`, exprimé en UTC
pub fn business_day_start(day: NaiveDate) -> DateTime<Utc> {
    let midnight = day.and_time(NaiveTime::MIN);

    // Les changements d'heure à Chicago ont lieu à 2h, minuit est donc toujours non ambigu
    match Chicago.from_local_datetime(&midnight).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&midnight),
    }
}

pub fn is_same_business_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    business_day(a) == business_day(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_day_lags_utc_in_the_evening() {
        // 2026-03-10 03:30 UTC = 2026-03-09 22:30 CDT
        let at = Utc.with_ymd_and_hms(2026, 3, 10, 3, 30, 0).unwrap();
        assert_eq!(business_day(at), NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
    }

    #[test]
    fn test_business_day_start_follows_daylight_saving() {
        // CST (UTC-6) en janvier, CDT (UTC-5) en juillet
        let winter = business_day_start(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        let summer = business_day_start(NaiveDate::from_ymd_opt(2026, 7, 15).unwrap());

        assert_eq!(winter, Utc.with_ymd_and_hms(2026, 1, 15, 6, 0, 0).unwrap());
        assert_eq!(summer, Utc.with_ymd_and_hms(2026, 7, 15, 5, 0, 0).unwrap());
    }

    #[test]
    fn test_same_business_day_across_utc_midnight() {
        let afternoon = Utc.with_ymd_and_hms(2026, 3, 10, 20, 0, 0).unwrap();
        let late_evening = Utc.with_ymd_and_hms(2026, 3, 11, 4, 0, 0).unwrap();
        let next_morning = Utc.with_ymd_and_hms(2026, 3, 11, 5, 0, 0).unwrap();

        assert!(is_same_business_day(afternoon, late_evening));
        assert!(!is_same_business_day(afternoon, next_morning));
    }
}
