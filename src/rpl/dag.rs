enum_with_unknown! {
    /// Routing metric/constraint types of a DAG Metric Container (RFC 6551).
    pub enum MetricContainerType(u8) {
        None = 0,
        NodeStateAndAttributes = 1,
        NodeEnergy = 2,
        HopCount = 3,
        Throughput = 4,
        Latency = 5,
        LinkQualityLevel = 6,
        Etx = 7,
        LinkColor = 8,
    }
}

impl Default for MetricContainerType {
    fn default() -> Self {
        Self::None
    }
}

/// The metric container advertised in the DIOs of a DAG.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MetricContainer {
    pub kind: MetricContainerType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_container_type() {
        assert_eq!(MetricContainerType::from(7), MetricContainerType::Etx);
        assert_eq!(u8::from(MetricContainerType::None), 0);
        assert_eq!(MetricContainerType::from(42), MetricContainerType::Unknown(42));
        assert_eq!(MetricContainer::default().kind, MetricContainerType::None);
    }
}
