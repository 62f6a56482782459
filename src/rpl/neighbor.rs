use super::rank::Rank;
use super::Ipv6Address;

/// Link statistics of a neighbor, as collected by the link layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStats {
    /// Expected transmission count. `0xffff` means the link is unknown or unusable.
    pub etx: u16,
}

impl LinkStats {
    pub const fn new(etx: u16) -> Self {
        Self { etx }
    }
}

/// A candidate next hop, as seen by an objective function.
///
/// Neighbors are owned by the neighbor table of the routing engine. Objective functions only
/// read them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Neighbor {
    pub(crate) ip_addr: Ipv6Address,
    pub(crate) rank: Rank,
}

impl Neighbor {
    pub fn new(ip_addr: Ipv6Address, rank: Rank) -> Self {
        Self { ip_addr, rank }
    }

    #[inline]
    pub fn ip_addr(&self) -> Ipv6Address {
        self.ip_addr
    }

    /// The rank advertised by the neighbor.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn update_rank(&mut self, rank: Rank) {
        self.rank = rank;
    }
}
