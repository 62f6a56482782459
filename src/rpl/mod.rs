//! Objective functions for RPL (RFC 6550).
//!
//! The routing engine of a RPL node consults its objective function every time it has to
//! compute its rank or (re)select its preferred parent. The engine implements [Context] to give
//! the objective function access to the instance configuration and to the link statistics of
//! its neighbors.

pub mod consts;
mod dag;
mod monitor;
mod neighbor;
mod obj_function;
mod of0;
mod rank;
mod secof;

#[cfg(test)]
pub(crate) mod tests;

pub use core::net::Ipv6Addr as Ipv6Address;

pub use dag::{MetricContainer, MetricContainerType};
pub use monitor::{parse_rank_report, NodeId, RankAnomaly, RankMonitor};
pub use neighbor::{LinkStats, Neighbor};
pub use obj_function::{Context, ObjectiveFunction};
pub use of0::ObjectiveFunction0;
pub use rank::Rank;
pub use secof::{Config, Mode, SecureObjectiveFunction};
