//! Business rules: pure predicates consulted by handlers and the offer
//! issuance workflow. Kept free of persistence so they are trivially
//! testable and thread-safe.

/// Any posted or offered salary must meet the configured wage floor.
pub fn meets_minimum_wage(salary: f64, minimum_wage: f64) -> bool {
    salary >= minimum_wage
}

pub fn salary_range_valid(salary_min: f64, salary_max: f64) -> bool {
    salary_min <= salary_max
}

/// Interview evaluation scores are graded 1 to 10 inclusive.
pub fn valid_interview_score(score: i64) -> bool {
    (1..=10).contains(&score)
}

/// Overall evaluation score: mean of the three component scores, rounded to
/// two decimals.
pub fn overall_score(technical: i64, communication: i64, cultural_fit: i64) -> f64 {
    let mean = (technical + communication + cultural_fit) as f64 / 3.0;
    (mean * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wage_floor_is_inclusive() {
        assert!(meets_minimum_wage(15000.0, 15000.0));
        assert!(meets_minimum_wage(15000.01, 15000.0));
        assert!(!meets_minimum_wage(14999.99, 15000.0));
    }

    #[test]
    fn wage_floor_is_configurable() {
        assert!(!meets_minimum_wage(18000.0, 20000.0));
        assert!(meets_minimum_wage(18000.0, 12000.0));
    }

    #[test]
    fn salary_range_requires_min_at_most_max() {
        assert!(salary_range_valid(50000.0, 50000.0));
        assert!(salary_range_valid(50000.0, 80000.0));
        assert!(!salary_range_valid(80000.0, 50000.0));
    }

    #[test]
    fn scores_are_bounded_one_to_ten() {
        assert!(valid_interview_score(1));
        assert!(valid_interview_score(10));
        assert!(!valid_interview_score(0));
        assert!(!valid_interview_score(11));
    }

    #[test]
    fn overall_score_rounds_to_two_decimals() {
        assert_eq!(overall_score(8, 8, 8), 8.0);
        assert_eq!(overall_score(7, 8, 9), 8.0);
        assert_eq!(overall_score(7, 7, 8), 7.33);
    }
}
