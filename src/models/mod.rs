pub mod applicant;
pub mod application;
pub mod company;
pub mod evaluation;
pub mod interview;
pub mod job;
pub mod offer;
