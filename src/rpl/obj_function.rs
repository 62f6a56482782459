use super::dag::MetricContainer;
use super::neighbor::{LinkStats, Neighbor};
use super::rank::Rank;
use super::Ipv6Address;

/// Read-only view on the state of the routing engine.
///
/// The routing engine implements this trait and passes it to every call of an
/// [`ObjectiveFunction`]. The objective function never keeps a reference to it.
pub trait Context {
    /// The `MinHopRankIncrease` of the current RPL instance.
    fn min_hop_rank_increase(&self) -> u16;

    /// The address of the current preferred parent, if the node has one.
    fn preferred_parent(&self) -> Option<Ipv6Address>;

    /// Look up the link statistics of a neighbor.
    fn link_stats(&self, addr: &Ipv6Address) -> Option<LinkStats>;

    /// The step of rank of a neighbor, as computed by the routing engine.
    fn step_of_rank(&self, neighbor: &Neighbor) -> u16;
}

/// An RPL objective function.
///
/// An objective function defines how a node computes its rank and selects its preferred parent.
/// It is identified in DIOs by its Objective Code Point. None of its operations can fail: unknown
/// metrics are reported with the maximal value and absent candidates with `None`.
pub trait ObjectiveFunction {
    /// The Objective Code Point announced in the DODAG configuration.
    fn objective_code_point(&self) -> u16;

    /// Called when the routing engine (re)joins a DODAG.
    fn reset(&mut self);

    /// The metric of the link towards `neighbor`.
    fn link_metric(&self, ctx: &dyn Context, neighbor: &Neighbor) -> u16;

    fn has_usable_link(&self, ctx: &dyn Context, neighbor: &Neighbor) -> bool;

    fn is_acceptable_parent(&self, ctx: &dyn Context, neighbor: &Neighbor) -> bool;

    /// The cost of the path to the root through `neighbor`.
    fn path_cost(&self, ctx: &dyn Context, neighbor: Option<&Neighbor>) -> u16;

    /// The rank this node advertises when `neighbor` is its preferred parent.
    fn rank_via_neighbor(&self, ctx: &dyn Context, neighbor: Option<&Neighbor>) -> Rank;

    /// Select the better of two candidate parents, or `None` when neither is usable.
    fn best_parent<'n>(
        &self,
        ctx: &dyn Context,
        a: Option<&'n Neighbor>,
        b: Option<&'n Neighbor>,
    ) -> Option<&'n Neighbor>;

    fn update_metric_container(&self, metric_container: &mut MetricContainer);

    /// Return the most preferred neighbor out of `candidates`.
    ///
    /// Candidates without a usable link, or through which the root is unreachable, are skipped.
    fn preferred_parent<'n>(
        &self,
        ctx: &dyn Context,
        candidates: &'n [Neighbor],
    ) -> Option<&'n Neighbor> {
        let mut preferred_parent = None;

        for n in candidates {
            if !self.has_usable_link(ctx, n) || self.rank_via_neighbor(ctx, Some(n)).is_infinite()
            {
                net_trace!("skipping candidate parent {}", n.ip_addr);
                continue;
            }

            preferred_parent = self.best_parent(ctx, preferred_parent, Some(n));
        }

        preferred_parent
    }
}
