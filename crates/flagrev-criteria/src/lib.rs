//! # flagrev-criteria
//!
//! Predicate battery and tier compositions for reviewer-rights eligibility.
//!
//! ## Predicates
//! Each predicate is a pure function of one slice of an
//! [`ActivitySnapshot`](flagrev_core::ActivitySnapshot) and its thresholds,
//! returning one or more [`PredicateResult`](flagrev_core::PredicateResult)s.
//! None depends on another's outcome.
//!
//! ## Compositions
//! - **Reviewer**: all ten predicates, stricter thresholds
//! - **Auto-reviewer**: seven predicates, looser thresholds
//!
//! Overall eligibility is the AND of every result in the report.

pub mod composition;
pub mod engine;
pub mod predicates;

pub use composition::Composition;
pub use engine::CriteriaEngine;
pub use predicates::{ContributionScope, Predicate};
