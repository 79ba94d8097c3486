//! Declarative per-route allow-lists.
//!
//! Every endpoint names its policy here and checks it through
//! [`gate::require_role`](super::gate::require_role); handlers carry no
//! inline role conditionals.

use super::Role::{self, *};

pub const ALL_ROLES: &[Role] = &[Admin, Recruiter, HRManager, Applicant];
pub const STAFF: &[Role] = &[Admin, Recruiter, HRManager];

pub const COMPANIES_LIST: &[Role] = ALL_ROLES;

pub const JOBS_LIST: &[Role] = ALL_ROLES;
pub const JOBS_CREATE: &[Role] = &[Admin, Recruiter];

pub const APPLICANTS_VIEW: &[Role] = ALL_ROLES;
pub const APPLICANT_APPLICATIONS_LIST: &[Role] = ALL_ROLES;

pub const APPLICATIONS_LIST: &[Role] = ALL_ROLES;
pub const APPLICATIONS_CREATE: &[Role] = &[Applicant];

pub const INTERVIEWS_LIST: &[Role] = STAFF;
pub const INTERVIEWS_CREATE: &[Role] = &[Recruiter, HRManager];

pub const EVALUATIONS_CREATE: &[Role] = &[Recruiter, HRManager];

pub const OFFERS_LIST: &[Role] = ALL_ROLES;
pub const OFFERS_CREATE: &[Role] = &[Recruiter, HRManager, Admin];

pub const REPORTS_STAFF: &[Role] = STAFF;
pub const REPORTS_HR: &[Role] = &[Admin, HRManager];
