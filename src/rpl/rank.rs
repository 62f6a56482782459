use super::consts::{DEFAULT_MIN_HOP_RANK_INCREASE, RPL_INFINITE_RANK};

/// The rank of a node, together with the `MinHopRankIncrease` it was computed with.
///
/// The rank value is a 16 bit quantity. Arithmetic on ranks saturates at
/// [`Rank::INFINITE`] instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rank {
    pub(crate) value: u16,
    pub(crate) min_hop_rank_increase: u16,
}

impl core::fmt::Display for Rank {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Rank({})", self.value)
    }
}

impl Rank {
    pub const INFINITE: Self = Rank::new(RPL_INFINITE_RANK, DEFAULT_MIN_HOP_RANK_INCREASE);

    /// The root of a DODAG advertises `MinHopRankIncrease` as its rank.
    pub const ROOT: Self = Rank::new(DEFAULT_MIN_HOP_RANK_INCREASE, DEFAULT_MIN_HOP_RANK_INCREASE);

    pub const fn new(value: u16, min_hop_rank_increase: u16) -> Self {
        Self {
            value,
            min_hop_rank_increase,
        }
    }

    /// Return the raw rank value, as advertised in a DIO.
    #[inline]
    pub fn value(&self) -> u16 {
        self.value
    }

    #[inline]
    pub fn min_hop_rank_increase(&self) -> u16 {
        self.min_hop_rank_increase
    }

    /// Return the integer part of the rank, `floor(value / MinHopRankIncrease)`.
    ///
    /// A rank advertised with a `MinHopRankIncrease` of zero is treated as infinite.
    pub fn dag_rank(&self) -> u16 {
        self.value
            .checked_div(self.min_hop_rank_increase)
            .unwrap_or(RPL_INFINITE_RANK)
    }

    pub fn is_infinite(&self) -> bool {
        self.value == RPL_INFINITE_RANK
    }

    /// Add `increase` to the rank, saturating at [`Rank::INFINITE`].
    pub fn saturating_add(self, increase: u16) -> Self {
        Self::new(
            self.value.saturating_add(increase),
            self.min_hop_rank_increase,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dag_rank() {
        assert_eq!(Rank::ROOT.dag_rank(), 1);
        assert_eq!(Rank::new(768, 256).dag_rank(), 3);
        assert_eq!(Rank::new(767, 256).dag_rank(), 2);
        assert_eq!(Rank::new(768, 0).dag_rank(), RPL_INFINITE_RANK);
    }

    #[test]
    fn saturating_add() {
        assert_eq!(Rank::new(512, 256).saturating_add(256), Rank::new(768, 256));
        assert_eq!(
            Rank::new(0xff00, 256).saturating_add(0x0200),
            Rank::new(RPL_INFINITE_RANK, 256)
        );
        assert!(Rank::new(0xff00, 256).saturating_add(0x0200).is_infinite());
        assert!(!Rank::ROOT.is_infinite());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Rank::new(512, 256)), "Rank(512)");
    }
}
