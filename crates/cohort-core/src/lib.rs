//! # cohort-core
//!
//! Core types for Cohort, the classroom group-evaluation client.
//!
//! This crate provides the foundational types shared across all Cohort crates:
//! - Flat records mirroring the three remote tables (groups, evaluations, students)
//! - The render-ready [`AssembledGroup`] view model and its [`ListKey`]
//! - The pure [`assemble`] join that builds the group list
//! - Card views with display fallbacks for missing data
//! - Sign-up form validation
//! - Cross-cutting error types

pub mod assembled;
pub mod assembler;
pub mod card;
pub mod errors;
pub mod records;
pub mod signup;

pub use assembled::{AssembledGroup, ListKey};
pub use assembler::assemble;
pub use card::GroupCard;
pub use errors::CoreError;
pub use records::{EvaluationRecord, GroupRecord, StudentRecord};
pub use signup::{NewStudent, SignUpForm};
