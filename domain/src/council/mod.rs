//! Council protocol types - stage artifacts, wire messages, ranking
//! parsing, and anonymization.

pub mod anonymize;
pub mod entities;
pub mod messages;
pub mod ranking;
