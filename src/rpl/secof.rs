use super::consts::*;
use super::dag::{MetricContainer, MetricContainerType};
use super::neighbor::Neighbor;
use super::obj_function::{Context, ObjectiveFunction};
use super::rank::Rank;

/// Operating mode of the [`SecureObjectiveFunction`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Parents are selected on path cost only.
    #[default]
    Normal,
    /// Candidates with equal or very different ranks are decided on rank before path cost.
    Restricted,
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Mode::Normal => write!(f, "Normal"),
            Mode::Restricted => write!(f, "Restricted"),
        }
    }
}

/// Configuration of the [`SecureObjectiveFunction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    alpha_threshold: u16,
    min_step_of_rank: u16,
    max_step_of_rank: u16,
    rank_factor: u16,
    rank_stretch: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha_threshold: ALPHA_THRESHOLD,
            min_step_of_rank: MIN_STEP_OF_RANK,
            max_step_of_rank: MAX_STEP_OF_RANK,
            rank_factor: RANK_FACTOR,
            rank_stretch: RANK_STRETCH,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rank gap above which, in restricted mode, the lower ranked candidate is selected.
    #[inline]
    pub fn set_alpha_threshold(mut self, alpha_threshold: u16) -> Self {
        self.alpha_threshold = alpha_threshold;
        self
    }

    /// Set the range of step of rank values of an acceptable parent.
    #[inline]
    pub fn set_step_of_rank_bounds(mut self, min: u16, max: u16) -> Self {
        self.min_step_of_rank = min;
        self.max_step_of_rank = max;
        self
    }

    #[inline]
    pub fn set_rank_factor(mut self, rank_factor: u16) -> Self {
        self.rank_factor = rank_factor;
        self
    }

    #[inline]
    pub fn set_rank_stretch(mut self, rank_stretch: u16) -> Self {
        self.rank_stretch = rank_stretch;
        self
    }

    pub fn alpha_threshold(&self) -> u16 {
        self.alpha_threshold
    }

    pub fn min_step_of_rank(&self) -> u16 {
        self.min_step_of_rank
    }

    pub fn max_step_of_rank(&self) -> u16 {
        self.max_step_of_rank
    }
}

/// An objective function resisting the decreased rank attack.
///
/// Based on "Resolving the Decreased Rank Attack in RPL's IoT Networks" (Ghaleb et al.). In
/// [`Mode::Normal`] it behaves like a cost based objective function, where the path cost is the
/// advertised rank plus the ETX of the link. When an attack is suspected, the routing engine
/// switches it to [`Mode::Restricted`] with [`switch_mode`]: parent selection is then decided
/// on the advertised ranks first, whenever they are equal or further apart than the alpha
/// threshold.
///
/// The mode is never changed by the objective function itself.
///
/// [`switch_mode`]: SecureObjectiveFunction::switch_mode
#[derive(Debug, Default, Clone)]
pub struct SecureObjectiveFunction {
    mode: Mode,
    config: Config,
}

impl SecureObjectiveFunction {
    pub const OCP: u16 = RPL_OCP_SECOF;

    pub fn new(config: Config) -> Self {
        Self {
            mode: Mode::Normal,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Toggle between normal and restricted mode, returning the new mode.
    pub fn switch_mode(&mut self) -> Mode {
        self.mode = match self.mode {
            Mode::Normal => {
                net_info!("switching to restricted mode");
                Mode::Restricted
            }
            Mode::Restricted => {
                net_info!("switching to normal mode");
                Mode::Normal
            }
        };

        self.mode
    }

    /// `(RANK_FACTOR * step_of_rank + RANK_STRETCH) * MinHopRankIncrease`, saturated at
    /// [`RPL_INFINITE_RANK`].
    pub(crate) fn rank_increase(&self, ctx: &dyn Context, neighbor: &Neighbor) -> u16 {
        let increase = (self.config.rank_factor as u32)
            .saturating_mul(ctx.step_of_rank(neighbor) as u32)
            .saturating_add(self.config.rank_stretch as u32)
            .saturating_mul(ctx.min_hop_rank_increase() as u32);

        u16::try_from(increase).unwrap_or(RPL_INFINITE_RANK)
    }

    /// Parent selection on advertised ranks, used in restricted mode.
    ///
    /// Returns `None` when the ranks differ by at most the alpha threshold. A candidate selected
    /// here is not checked for acceptability: with equal ranks or a rank gap above the alpha
    /// threshold, a candidate whose step of rank is out of bounds can still be selected.
    fn restricted_parent<'n>(
        &self,
        ctx: &dyn Context,
        a: &'n Neighbor,
        b: &'n Neighbor,
    ) -> Option<&'n Neighbor> {
        let a_rank = a.rank.value;
        let b_rank = b.rank.value;

        if a_rank == b_rank {
            return if self.link_metric(ctx, a) < self.link_metric(ctx, b) {
                Some(a)
            } else {
                Some(b)
            };
        }

        if a_rank.abs_diff(b_rank) > self.config.alpha_threshold {
            return if a_rank < b_rank { Some(a) } else { Some(b) };
        }

        None
    }
}

impl ObjectiveFunction for SecureObjectiveFunction {
    fn objective_code_point(&self) -> u16 {
        Self::OCP
    }

    fn reset(&mut self) {
        net_info!("reset secure objective function ({} mode)", self.mode);
    }

    fn link_metric(&self, ctx: &dyn Context, neighbor: &Neighbor) -> u16 {
        ctx.link_stats(&neighbor.ip_addr)
            .map(|stats| stats.etx)
            .unwrap_or(RPL_UNKNOWN_LINK_METRIC)
    }

    /// Links are not filtered on quality by this objective function.
    fn has_usable_link(&self, _ctx: &dyn Context, _neighbor: &Neighbor) -> bool {
        true
    }

    fn is_acceptable_parent(&self, ctx: &dyn Context, neighbor: &Neighbor) -> bool {
        let step_of_rank = ctx.step_of_rank(neighbor);
        (self.config.min_step_of_rank..=self.config.max_step_of_rank).contains(&step_of_rank)
    }

    fn path_cost(&self, ctx: &dyn Context, neighbor: Option<&Neighbor>) -> u16 {
        match neighbor {
            Some(n) => n.rank.value.saturating_add(self.link_metric(ctx, n)),
            None => RPL_MAX_PATH_COST,
        }
    }

    fn rank_via_neighbor(&self, ctx: &dyn Context, neighbor: Option<&Neighbor>) -> Rank {
        match neighbor {
            Some(n) => Rank::new(n.rank.value, ctx.min_hop_rank_increase())
                .saturating_add(self.rank_increase(ctx, n)),
            None => Rank::new(RPL_INFINITE_RANK, ctx.min_hop_rank_increase()),
        }
    }

    fn best_parent<'n>(
        &self,
        ctx: &dyn Context,
        a: Option<&'n Neighbor>,
        b: Option<&'n Neighbor>,
    ) -> Option<&'n Neighbor> {
        if let (Mode::Restricted, Some(a), Some(b)) = (self.mode, a, b) {
            if let Some(parent) = self.restricted_parent(ctx, a, b) {
                net_trace!(
                    "restricted mode: selected {} ({} vs {})",
                    parent.ip_addr,
                    a.rank,
                    b.rank
                );
                return Some(parent);
            }
        }

        let a = a.filter(|n| self.is_acceptable_parent(ctx, n));
        let b = b.filter(|n| self.is_acceptable_parent(ctx, n));

        let (a, b) = match (a, b) {
            (Some(a), Some(b)) => (a, b),
            (None, b) => return b,
            (a, None) => return a,
        };

        let a_cost = self.path_cost(ctx, Some(a));
        let b_cost = self.path_cost(ctx, Some(b));

        if a_cost != b_cost {
            return if a_cost < b_cost { Some(a) } else { Some(b) };
        }

        // Equal cost: stick to the current preferred parent.
        if let Some(addr) = ctx.preferred_parent() {
            if a.ip_addr == addr {
                return Some(a);
            }
            if b.ip_addr == addr {
                return Some(b);
            }
        }

        if self.link_metric(ctx, a) < self.link_metric(ctx, b) {
            Some(a)
        } else {
            Some(b)
        }
    }

    /// No metric container is advertised, the rank is the only metric.
    fn update_metric_container(&self, metric_container: &mut MetricContainer) {
        metric_container.kind = MetricContainerType::None;
    }
}
