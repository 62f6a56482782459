use heapless::FnvIndexMap;

use super::consts::{DEFAULT_RANK_ANOMALY_THRESHOLD, DEFAULT_RANK_MONITOR_SIZE};

/// Identifier of a node, as printed in rank reports.
pub type NodeId = u32;

/// An abrupt change of the rank advertised by a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RankAnomaly {
    pub node: NodeId,
    pub previous: u16,
    pub current: u16,
}

impl core::fmt::Display for RankAnomaly {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Node {}: {} → {}", self.node, self.previous, self.current)
    }
}

/// Keeps the last rank advertised by every node and reports changes larger than a threshold.
///
/// A decreased rank attack shows up as a node whose rank suddenly drops. The monitor only
/// reports such changes; acting on them (e.g. switching the objective function to restricted
/// mode) is up to the caller.
///
/// At most `N` nodes are tracked. `N` must be a power of two.
#[derive(Debug, Clone)]
pub struct RankMonitor<const N: usize = DEFAULT_RANK_MONITOR_SIZE> {
    threshold: u16,
    ranks: FnvIndexMap<NodeId, u16, N>,
}

impl<const N: usize> Default for RankMonitor<N> {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_RANK_ANOMALY_THRESHOLD)
    }
}

impl RankMonitor {
    /// Create a monitor tracking up to [`DEFAULT_RANK_MONITOR_SIZE`] nodes.
    pub fn new(threshold: u16) -> Self {
        Self::with_threshold(threshold)
    }
}

impl<const N: usize> RankMonitor<N> {
    pub fn with_threshold(threshold: u16) -> Self {
        Self {
            threshold,
            ranks: FnvIndexMap::new(),
        }
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Return `true` if `node` has a recorded rank.
    pub fn is_tracked(&self, node: NodeId) -> bool {
        self.ranks.contains_key(&node)
    }

    /// Return `true` if no new node can be tracked.
    pub fn is_full(&self) -> bool {
        self.ranks.len() == N
    }

    /// Record the rank advertised by `node`.
    ///
    /// Returns an anomaly when the rank differs from the previously recorded one by more than
    /// the threshold. When the monitor is full, nodes it does not know yet are not tracked: use
    /// [`is_full`](Self::is_full) and [`is_tracked`](Self::is_tracked) to detect them.
    pub fn observe(&mut self, node: NodeId, rank: u16) -> Option<RankAnomaly> {
        let Some(previous) = self.ranks.get_mut(&node) else {
            if self.ranks.insert(node, rank).is_err() {
                net_debug!("rank monitor full, not tracking node {}", node);
            }
            return None;
        };

        let anomaly = (previous.abs_diff(rank) > self.threshold).then_some(RankAnomaly {
            node,
            previous: *previous,
            current: rank,
        });
        *previous = rank;

        if let Some(anomaly) = &anomaly {
            net_debug!("rank anomaly: {}", anomaly);
        }

        anomaly
    }

    /// The last rank recorded for `node`.
    pub fn rank(&self, node: NodeId) -> Option<u16> {
        self.ranks.get(&node).copied()
    }

    pub fn forget(&mut self, node: NodeId) {
        self.ranks.remove(&node);
    }

    pub fn clear(&mut self) {
        self.ranks.clear();
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Find a `Node <id> rank: <rank>` report in a log line.
///
/// The report may appear anywhere in the line. Reports with values that do not fit a
/// [`NodeId`] or a 16 bit rank are ignored.
pub fn parse_rank_report(line: &str) -> Option<(NodeId, u16)> {
    const PREFIX: &str = "Node ";

    let mut rest = line;
    while let Some(start) = rest.find(PREFIX) {
        if let Some(report) = parse_report_body(&rest[start + PREFIX.len()..]) {
            return Some(report);
        }
        rest = &rest[start + 1..];
    }

    None
}

fn parse_report_body(s: &str) -> Option<(NodeId, u16)> {
    let (node, s) = split_digits(s)?;
    let s = s.strip_prefix(" rank: ")?;
    let (rank, _) = split_digits(s)?;

    Some((node.parse().ok()?, rank.parse().ok()?))
}

fn split_digits(s: &str) -> Option<(&str, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    (end > 0).then(|| s.split_at(end))
}
