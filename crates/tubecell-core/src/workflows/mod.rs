//! # Workflows Module
//!
//! The public entry points of tubecell, shaped around what an evolutionary search needs from a
//! structure evaluator.
//!
//! ## Overview
//!
//! The search engine owns the population and the genetic operators; it only asks two
//! questions of each candidate: *is this an acceptable unit cell?* and *how good is it?*
//! [`evaluate::Evaluator`] answers both through the [`evaluate::FeasibilityPredicate`] and
//! [`evaluate::FitnessFunction`] traits, and can also produce a full
//! [`evaluate::Evaluation`] breakdown for reporting.
//!
//! - **Evaluation Workflow** ([`evaluate`]) - Single-structure evaluation and order-preserving
//!   batch evaluation with progress reporting
//!
//! ```ignore
//! use tubecell::workflows::evaluate::{Evaluator, FitnessFunction, FeasibilityPredicate};
//!
//! let evaluator = Evaluator::new(&config)?;
//! if evaluator.is_feasible(&genome)? {
//!     let score = evaluator.fitness(&genome)?;
//! }
//! ```

pub mod evaluate;
