/// The rank of an unreachable node.
pub const RPL_INFINITE_RANK: u16 = 0xffff;
/// Link metric of a neighbor without link statistics.
pub const RPL_UNKNOWN_LINK_METRIC: u16 = 0xffff;
/// Path cost of an absent neighbor.
pub const RPL_MAX_PATH_COST: u16 = 0xffff;

/// Objective Code Point announced for the secure objective function.
pub const RPL_OCP_SECOF: u16 = 0x0002;
/// Objective Code Point of the Objective Function Zero (RFC 6552).
pub const RPL_OCP_OF0: u16 = 0x0000;

/// Default values from RFC 6552.
pub const RANK_STRETCH: u16 = 0;
pub const RANK_FACTOR: u16 = 1;

pub const MIN_STEP_OF_RANK: u16 = 1;
pub const MAX_STEP_OF_RANK: u16 = 9;

/// Rank gap above which a restricted objective function prefers the lower ranked candidate.
pub const ALPHA_THRESHOLD: u16 = 2;

pub const DEFAULT_MIN_HOP_RANK_INCREASE: u16 = 256;

/// Rank change above which the rank monitor reports an anomaly.
pub const DEFAULT_RANK_ANOMALY_THRESHOLD: u16 = 10;
/// Number of nodes tracked by the rank monitor. Must be a power of two.
pub const DEFAULT_RANK_MONITOR_SIZE: usize = 32;
