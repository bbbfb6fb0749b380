use chrono::{DateTime, Utc};

use super::domain::Listing;

const BASE_URGENCY: f64 = 0.5;
const IMMINENT_DEADLINE_DAYS: f64 = 3.0;
const NEAR_DEADLINE_DAYS: f64 = 7.0;
const IMMINENT_BONUS: f64 = 0.4;
const NEAR_BONUS: f64 = 0.2;
const URGENT_BONUS: f64 = 0.3;
const FEATURED_BONUS: f64 = 0.1;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Urgency of a listing as seen at `now`, in `[0.5, 1.0]`.
///
/// Deadlines already in the past fall into the imminent bucket.
pub fn urgency_at(listing: &Listing, now: DateTime<Utc>) -> f64 {
    let mut urgency = BASE_URGENCY;

    if let Some(days) = days_until_deadline(listing, now) {
        if days <= IMMINENT_DEADLINE_DAYS {
            urgency += IMMINENT_BONUS;
        } else if days <= NEAR_DEADLINE_DAYS {
            urgency += NEAR_BONUS;
        }
    }

    if listing.urgent {
        urgency += URGENT_BONUS;
    }
    if listing.featured {
        urgency += FEATURED_BONUS;
    }

    urgency.min(1.0)
}

/// Fractional days between `now` and the listing's deadline.
pub fn days_until_deadline(listing: &Listing, now: DateTime<Utc>) -> Option<f64> {
    listing
        .deadline
        .map(|deadline| (deadline - now).num_milliseconds() as f64 / MILLIS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::domain::ListingCategory;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn listing_due_in(days: i64) -> Listing {
        let mut listing = Listing::new("l-1", ListingCategory::Internship);
        listing.deadline = Some(now() + Duration::days(days));
        listing
    }

    #[test]
    fn base_urgency_without_signals() {
        let listing = Listing::new("l-1", ListingCategory::FullTime);
        assert_eq!(urgency_at(&listing, now()), 0.5);
    }

    #[test]
    fn nearer_deadline_bucket_wins() {
        assert!((urgency_at(&listing_due_in(3), now()) - 0.9).abs() < 1e-9);
        assert!((urgency_at(&listing_due_in(5), now()) - 0.7).abs() < 1e-9);
        assert!((urgency_at(&listing_due_in(7), now()) - 0.7).abs() < 1e-9);
        assert_eq!(urgency_at(&listing_due_in(8), now()), 0.5);
    }

    #[test]
    fn past_deadlines_count_as_imminent() {
        assert!((urgency_at(&listing_due_in(-2), now()) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn urgency_is_clamped_to_one() {
        let mut listing = listing_due_in(1);
        listing.urgent = true;
        listing.featured = true;

        assert_eq!(urgency_at(&listing, now()), 1.0);
    }

    #[test]
    fn flags_without_deadline() {
        let mut listing = Listing::new("l-1", ListingCategory::PartTime);
        listing.featured = true;
        assert!((urgency_at(&listing, now()) - 0.6).abs() < 1e-9);

        listing.urgent = true;
        assert!((urgency_at(&listing, now()) - 0.9).abs() < 1e-9);
    }
}
