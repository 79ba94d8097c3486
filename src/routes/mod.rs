pub mod applicants;
pub mod applications;
pub mod companies;
pub mod evaluations;
pub mod health;
pub mod interviews;
pub mod jobs;
pub mod offers;
pub mod reports;
