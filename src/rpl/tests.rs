use std::collections::HashMap;

use super::consts::DEFAULT_MIN_HOP_RANK_INCREASE;
use super::*;

pub(crate) fn ip_addr(id: u8) -> Ipv6Address {
    Ipv6Address::new(0xfe80, 0, 0, 0, 0, 0, 0, id as u16)
}

/// A neighbor with link-local address `fe80::<id>`.
pub(crate) fn neighbor(id: u8, rank: u16) -> Neighbor {
    Neighbor::new(ip_addr(id), Rank::new(rank, DEFAULT_MIN_HOP_RANK_INCREASE))
}

/// A routing engine stand-in. Neighbors have a step of rank of 1 and no link statistics,
/// unless configured otherwise.
#[derive(Debug, Clone)]
pub(crate) struct TestContext {
    min_hop_rank_increase: u16,
    preferred_parent: Option<Ipv6Address>,
    links: HashMap<Ipv6Address, LinkStats>,
    default_link: Option<LinkStats>,
    steps: HashMap<Ipv6Address, u16>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self {
            min_hop_rank_increase: DEFAULT_MIN_HOP_RANK_INCREASE,
            preferred_parent: None,
            links: HashMap::new(),
            default_link: None,
            steps: HashMap::new(),
        }
    }
}

impl TestContext {
    pub(crate) fn with_min_hop_rank_increase(mut self, min_hop_rank_increase: u16) -> Self {
        self.min_hop_rank_increase = min_hop_rank_increase;
        self
    }

    pub(crate) fn with_preferred_parent(mut self, addr: Ipv6Address) -> Self {
        self.preferred_parent = Some(addr);
        self
    }

    pub(crate) fn with_link(mut self, addr: Ipv6Address, etx: u16) -> Self {
        self.links.insert(addr, LinkStats::new(etx));
        self
    }

    /// Link statistics of every neighbor without its own.
    pub(crate) fn with_default_link(mut self, etx: u16) -> Self {
        self.default_link = Some(LinkStats::new(etx));
        self
    }

    pub(crate) fn with_step(mut self, addr: Ipv6Address, step_of_rank: u16) -> Self {
        self.steps.insert(addr, step_of_rank);
        self
    }
}

impl Context for TestContext {
    fn min_hop_rank_increase(&self) -> u16 {
        self.min_hop_rank_increase
    }

    fn preferred_parent(&self) -> Option<Ipv6Address> {
        self.preferred_parent
    }

    fn link_stats(&self, addr: &Ipv6Address) -> Option<LinkStats> {
        self.links.get(addr).copied().or(self.default_link)
    }

    fn step_of_rank(&self, neighbor: &Neighbor) -> u16 {
        self.steps.get(&neighbor.ip_addr).copied().unwrap_or(1)
    }
}
