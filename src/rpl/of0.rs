use super::consts::{
    RPL_INFINITE_RANK, RPL_MAX_PATH_COST, RPL_OCP_OF0, RPL_UNKNOWN_LINK_METRIC,
};
use super::dag::{MetricContainer, MetricContainerType};
use super::neighbor::Neighbor;
use super::obj_function::{Context, ObjectiveFunction};
use super::rank::Rank;

/// The Objective Function Zero (RFC 6552).
///
/// Every hop increases the rank by a fixed step, and the candidate offering the lowest rank is
/// preferred.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectiveFunction0 {}

impl ObjectiveFunction0 {
    pub const OCP: u16 = RPL_OCP_OF0;

    const RANK_STRETCH: u32 = 0;
    const RANK_FACTOR: u32 = 1;
    const RANK_STEP: u32 = 3;

    pub fn new() -> Self {
        Self {}
    }

    pub(crate) fn rank_increase(min_hop_rank_increase: u16) -> u16 {
        let increase = (Self::RANK_FACTOR * Self::RANK_STEP + Self::RANK_STRETCH)
            * min_hop_rank_increase as u32;
        u16::try_from(increase).unwrap_or(u16::MAX)
    }

    pub(crate) fn new_rank(parent_rank: Rank, min_hop_rank_increase: u16) -> Rank {
        Rank::new(parent_rank.value, min_hop_rank_increase)
            .saturating_add(Self::rank_increase(min_hop_rank_increase))
    }
}

impl ObjectiveFunction for ObjectiveFunction0 {
    fn objective_code_point(&self) -> u16 {
        Self::OCP
    }

    fn reset(&mut self) {
        net_info!("reset OF0");
    }

    fn link_metric(&self, ctx: &dyn Context, neighbor: &Neighbor) -> u16 {
        ctx.link_stats(&neighbor.ip_addr)
            .map(|stats| stats.etx)
            .unwrap_or(RPL_UNKNOWN_LINK_METRIC)
    }

    fn has_usable_link(&self, _ctx: &dyn Context, _neighbor: &Neighbor) -> bool {
        true
    }

    fn is_acceptable_parent(&self, ctx: &dyn Context, neighbor: &Neighbor) -> bool {
        !self.rank_via_neighbor(ctx, Some(neighbor)).is_infinite()
    }

    fn path_cost(&self, ctx: &dyn Context, neighbor: Option<&Neighbor>) -> u16 {
        match neighbor {
            Some(_) => self.rank_via_neighbor(ctx, neighbor).value,
            None => RPL_MAX_PATH_COST,
        }
    }

    fn rank_via_neighbor(&self, ctx: &dyn Context, neighbor: Option<&Neighbor>) -> Rank {
        match neighbor {
            Some(n) => Self::new_rank(n.rank, ctx.min_hop_rank_increase()),
            None => Rank::new(RPL_INFINITE_RANK, ctx.min_hop_rank_increase()),
        }
    }

    fn best_parent<'n>(
        &self,
        ctx: &dyn Context,
        a: Option<&'n Neighbor>,
        b: Option<&'n Neighbor>,
    ) -> Option<&'n Neighbor> {
        let a = a.filter(|n| self.is_acceptable_parent(ctx, n));
        let b = b.filter(|n| self.is_acceptable_parent(ctx, n));

        let (a, b) = match (a, b) {
            (Some(a), Some(b)) => (a, b),
            (a, None) => return a,
            (None, b) => return b,
        };

        let a_rank = self.rank_via_neighbor(ctx, Some(a)).dag_rank();
        let b_rank = self.rank_via_neighbor(ctx, Some(b)).dag_rank();

        if a_rank != b_rank {
            return Some(if a_rank < b_rank { a } else { b });
        }

        // Stick to the current preferred parent.
        match ctx.preferred_parent() {
            Some(addr) if b.ip_addr == addr => Some(b),
            _ => Some(a),
        }
    }

    fn update_metric_container(&self, metric_container: &mut MetricContainer) {
        metric_container.kind = MetricContainerType::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpl::tests::*;

    #[test]
    fn rank_increase() {
        assert_eq!(ObjectiveFunction0::rank_increase(256), 768);
        assert_eq!(ObjectiveFunction0::rank_increase(0x8000), u16::MAX);
    }

    #[test]
    fn rank_via_neighbor() {
        let of = ObjectiveFunction0::new();
        let ctx = TestContext::default();
        let n = neighbor(1, 256);

        assert_eq!(of.rank_via_neighbor(&ctx, Some(&n)), Rank::new(1024, 256));
        assert_eq!(of.rank_via_neighbor(&ctx, None), Rank::INFINITE);
        assert_eq!(of.path_cost(&ctx, Some(&n)), 1024);
        assert_eq!(of.path_cost(&ctx, None), RPL_MAX_PATH_COST);
    }

    #[test]
    fn infinite_rank_carries_min_hop_rank_increase() {
        let of = ObjectiveFunction0::new();
        let ctx = TestContext::default().with_min_hop_rank_increase(128);
        let n = neighbor(1, 0xff00);

        let unreachable = Rank::new(RPL_INFINITE_RANK, 128);
        assert_eq!(of.rank_via_neighbor(&ctx, Some(&n)), unreachable);
        assert_eq!(of.rank_via_neighbor(&ctx, None), unreachable);
    }

    #[test]
    fn unreachable_neighbor_is_not_acceptable() {
        let of = ObjectiveFunction0::new();
        let ctx = TestContext::default();

        assert!(of.is_acceptable_parent(&ctx, &neighbor(1, 256)));
        assert!(!of.is_acceptable_parent(&ctx, &neighbor(2, 0xff00)));
    }

    #[test]
    fn best_parent_prefers_lowest_rank() {
        let of = ObjectiveFunction0::new();
        let ctx = TestContext::default();
        let a = neighbor(1, 512);
        let b = neighbor(2, 256);

        assert_eq!(of.best_parent(&ctx, Some(&a), Some(&b)), Some(&b));
        assert_eq!(of.best_parent(&ctx, Some(&b), Some(&a)), Some(&b));
        assert_eq!(of.best_parent(&ctx, Some(&a), None), Some(&a));
        assert_eq!(of.best_parent(&ctx, None, None), None);
    }

    #[test]
    fn best_parent_sticks_to_preferred_parent() {
        let of = ObjectiveFunction0::new();
        let a = neighbor(1, 512);
        let b = neighbor(2, 600);
        let ctx = TestContext::default().with_preferred_parent(b.ip_addr());

        // Both give a DAG rank of 5.
        assert_eq!(of.best_parent(&ctx, Some(&a), Some(&b)), Some(&b));
        assert_eq!(of.best_parent(&ctx, Some(&b), Some(&a)), Some(&b));
    }

    #[test]
    fn update_metric_container() {
        let of = ObjectiveFunction0::new();
        let mut mc = MetricContainer {
            kind: MetricContainerType::Etx,
        };
        of.update_metric_container(&mut mc);
        assert_eq!(mc.kind, MetricContainerType::None);
        assert_eq!(of.objective_code_point(), 0);
    }
}
