use super::{Identity, Role};
use crate::models::applicant::ApplicantProfile;

/// Fixed sentinel returned in place of a redacted location.
pub const LOCATION_SENTINEL: &str = "***MASKED***";

/// An applicant viewing someone else's profile must not see the real
/// location. Staff roles never trigger redaction.
pub fn should_mask_location(viewer: &Identity, owner_id: i64) -> bool {
    viewer.role == Role::Applicant && viewer.id != owner_id
}

/// Read-time transform applied after the fetch; the stored value is never
/// altered.
pub fn redact_profile(profile: &mut ApplicantProfile, viewer: &Identity) {
    if should_mask_location(viewer, profile.applicant_id) {
        profile.location = Some(LOCATION_SENTINEL.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(owner_id: i64, location: &str) -> ApplicantProfile {
        ApplicantProfile {
            applicant_id: owner_id,
            first_name: "Emily".to_string(),
            last_name: "Smith".to_string(),
            email: "emily.smith@email.com".to_string(),
            phone: None,
            location: Some(location.to_string()),
            role: "Applicant".to_string(),
            status: "Active".to_string(),
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn cross_applicant_view_is_masked() {
        let viewer = Identity { id: 7, role: Role::Applicant };
        let mut p = profile(6, "San Francisco, CA");
        redact_profile(&mut p, &viewer);
        assert_eq!(p.location.as_deref(), Some(LOCATION_SENTINEL));
    }

    #[test]
    fn self_view_keeps_real_value() {
        let viewer = Identity { id: 6, role: Role::Applicant };
        let mut p = profile(6, "San Francisco, CA");
        redact_profile(&mut p, &viewer);
        assert_eq!(p.location.as_deref(), Some("San Francisco, CA"));
    }

    #[test]
    fn staff_always_see_real_value() {
        for role in [Role::Admin, Role::Recruiter, Role::HRManager] {
            let viewer = Identity { id: 999, role };
            let mut p = profile(6, "Boston, MA");
            redact_profile(&mut p, &viewer);
            assert_eq!(p.location.as_deref(), Some("Boston, MA"));
        }
    }

    #[test]
    fn other_fields_pass_through_unchanged() {
        let viewer = Identity { id: 7, role: Role::Applicant };
        let mut p = profile(6, "Austin, TX");
        redact_profile(&mut p, &viewer);
        assert_eq!(p.email, "emily.smith@email.com");
        assert_eq!(p.first_name, "Emily");
    }
}
