// ============================================================================
// DASHBOARD VIEWMODEL - Gate de acceso + datos derivados
// ============================================================================

use chrono::{DateTime, Duration, NaiveDate};

use crate::models::{DonationRecord, Session, UserType};
use crate::router::Route;

/// Result of the mount-time access check
#[derive(Clone, Debug, PartialEq)]
pub enum Gate {
    Admit(Session),
    Redirect(Route),
}

/// Decides from the flags alone; profile data is only handed out on admit
pub fn gate(session: &Session, role: UserType) -> Gate {
    if session.is_authenticated_as(role) {
        Gate::Admit(session.clone())
    } else {
        log::info!("🔒 [GATE] {} dashboard requires login, redirecting", role);
        Gate::Redirect(Route::login_for(role))
    }
}

pub fn next_eligible_date(today: NaiveDate, interval_days: i64) -> NaiveDate {
    today + Duration::days(interval_days)
}

/// Fixed history shown until the backend exposes donations
pub fn donation_history() -> Vec<DonationRecord> {
    [
        ((2024, 1, 15), "City General Hospital"),
        ((2023, 11, 20), "Community Blood Bank"),
        ((2023, 9, 10), "Red Cross Center"),
    ]
    .into_iter()
    .filter_map(|((y, m, d), location)| {
        Some(DonationRecord {
            date: NaiveDate::from_ymd_opt(y, m, d)?,
            location: location.to_string(),
            status: "Completed".to_string(),
        })
    })
    .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct DonorStats {
    pub total_donations: usize,
    pub lives_impacted: usize,
    pub last_donation: Option<NaiveDate>,
}

impl DonorStats {
    /// One donation can help up to three patients
    pub fn from_history(history: &[DonationRecord]) -> Self {
        Self {
            total_donations: history.len(),
            lives_impacted: history.len() * 3,
            last_donation: history.iter().map(|record| record.date).max(),
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Creation timestamp as a short date; anything unparseable is shown as-is
pub fn member_since(created_at: &str) -> String {
    DateTime::parse_from_rfc3339(created_at)
        .map(|ts| format_date(ts.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(created_at, "%Y-%m-%d").map(format_date))
        .unwrap_or_else(|_| created_at.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_out_session_redirects_to_matching_login() {
        let session = Session::default();
        assert_eq!(gate(&session, UserType::Donor), Gate::Redirect(Route::DonorLogin));
        assert_eq!(gate(&session, UserType::Hospital), Gate::Redirect(Route::HospitalLogin));
    }

    #[test]
    fn wrong_role_redirects() {
        let session = Session {
            logged_in: true,
            user_type: Some(UserType::Hospital),
            ..Default::default()
        };
        assert_eq!(gate(&session, UserType::Donor), Gate::Redirect(Route::DonorLogin));
        assert_eq!(gate(&session, UserType::Hospital), Gate::Admit(session.clone()));
    }

    #[test]
    fn eligibility_is_eight_weeks_out() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
        assert_eq!(next_eligible_date(today, 56), NaiveDate::from_ymd_opt(2026, 2, 14).unwrap());
    }

    #[test]
    fn history_and_stats() {
        let history = donation_history();
        assert_eq!(history.len(), 3);
        assert!(history.iter().all(|record| record.status == "Completed"));

        let stats = DonorStats::from_history(&history);
        assert_eq!(stats.total_donations, 3);
        assert_eq!(stats.lives_impacted, 9);
        assert_eq!(stats.last_donation.map(format_date).as_deref(), Some("Jan 15, 2024"));
    }

    #[test]
    fn member_since_reads_timestamps_and_plain_dates() {
        assert_eq!(member_since("2025-03-01T10:00:00.000Z"), "Mar 1, 2025");
        assert_eq!(member_since("2024-12-24"), "Dec 24, 2024");
        assert_eq!(member_since("last spring"), "last spring");
        assert_eq!(member_since(""), "");
    }
}
