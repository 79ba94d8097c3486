//! Multi-step business transactions. Everything else in the service is a
//! single-row insert or update; the workflows here are the operations that
//! must mutate several rows atomically.

pub mod offers;
