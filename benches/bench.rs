#![feature(test)]

mod secof {
    use std::collections::HashMap;

    use rpl_secof::rpl::{
        Context, Ipv6Address, LinkStats, Neighbor, ObjectiveFunction, Rank,
        SecureObjectiveFunction,
    };
    extern crate test;

    struct Engine {
        links: HashMap<Ipv6Address, LinkStats>,
    }

    impl Context for Engine {
        fn min_hop_rank_increase(&self) -> u16 {
            256
        }

        fn preferred_parent(&self) -> Option<Ipv6Address> {
            None
        }

        fn link_stats(&self, addr: &Ipv6Address) -> Option<LinkStats> {
            self.links.get(addr).copied()
        }

        fn step_of_rank(&self, _neighbor: &Neighbor) -> u16 {
            3
        }
    }

    fn setup(count: u16) -> (Engine, Vec<Neighbor>) {
        let mut links = HashMap::new();
        let mut neighbors = vec![];

        for i in 0..count {
            let addr = Ipv6Address::new(0xfe80, 0, 0, 0, 0, 0, 0, i + 1);
            links.insert(addr, LinkStats::new(128 + (i * 37) % 384));
            neighbors.push(Neighbor::new(addr, Rank::new(256 + (i * 101) % 1024, 256)));
        }

        (Engine { links }, neighbors)
    }

    #[bench]
    fn bench_best_parent_normal(b: &mut test::Bencher) {
        let (engine, neighbors) = setup(2);
        let of = SecureObjectiveFunction::default();

        b.iter(|| of.best_parent(&engine, Some(&neighbors[0]), Some(&neighbors[1])));
    }

    #[bench]
    fn bench_best_parent_restricted(b: &mut test::Bencher) {
        let (engine, neighbors) = setup(2);
        let mut of = SecureObjectiveFunction::default();
        of.switch_mode();

        b.iter(|| of.best_parent(&engine, Some(&neighbors[0]), Some(&neighbors[1])));
    }

    #[bench]
    fn bench_preferred_parent(b: &mut test::Bencher) {
        let (engine, neighbors) = setup(16);
        let of = SecureObjectiveFunction::default();

        b.iter(|| of.preferred_parent(&engine, &neighbors));
    }
}
