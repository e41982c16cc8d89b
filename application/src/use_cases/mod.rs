//! Use cases - one per council capability, plus the orchestrator
//! pipeline that sequences them across services.

pub mod finalize;
pub mod first_opinion;
pub mod review;
pub mod run_council;

#[cfg(test)]
pub(crate) mod test_support;
