#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

//! A secure objective function for RPL.
//!
//! The `rpl-secof` library implements the decision logic a RPL node uses to compute its rank
//! and to select a preferred parent, with a defensive mode against the *decreased rank attack*,
//! where a neighbor advertises an implausibly low rank to attract traffic.
//!
//! # Objective functions
//!
//! Objective functions implement the [ObjectiveFunction](rpl/trait.ObjectiveFunction.html)
//! trait. The host routing engine owns one instance and hands it a
//! [Context](rpl/trait.Context.html) on every call, giving read-only access to the instance
//! configuration and to the link statistics of its neighbors. Two objective functions are
//! provided:
//!
//!   * the secure objective function ([SecureObjectiveFunction]), which can be switched into a
//!     restricted mode that overrides cost based parent selection;
//!   * the Objective Function Zero from RFC 6552 ([ObjectiveFunction0]).
//!
//! None of the operations can fail: an unknown link or an unreachable parent is represented with
//! the maximal metric ([RPL_INFINITE_RANK](rpl/consts/constant.RPL_INFINITE_RANK.html)) and
//! an absent candidate with `None`.
//!
//! # Rank monitoring
//!
//! The [RankMonitor](rpl/struct.RankMonitor.html) tracks the ranks advertised by nodes and
//! reports abrupt changes. It only reports: switching the objective function into restricted
//! mode is left to the caller.
//!
//! # Feature flags
//!
//!   * `std`: link against the standard library.
//!   * `log`: emit log messages through the `log` crate (enabled by default).
//!   * `defmt`: emit log messages through `defmt`, and derive `defmt::Format` on public types.
//!
//! [SecureObjectiveFunction]: rpl/struct.SecureObjectiveFunction.html
//! [ObjectiveFunction0]: rpl/struct.ObjectiveFunction0.html

#[macro_use]
mod macros;

pub mod rpl;
