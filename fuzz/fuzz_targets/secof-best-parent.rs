#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use rpl_secof::rpl::*;

#[derive(Debug, Arbitrary)]
struct Candidate {
    rank: u16,
    etx: Option<u16>,
    step_of_rank: u16,
}

#[derive(Debug, Arbitrary)]
struct Input {
    min_hop_rank_increase: u16,
    restricted: bool,
    preferred_parent: Option<u8>,
    a: Option<Candidate>,
    b: Option<Candidate>,
}

struct Engine<'i> {
    input: &'i Input,
}

impl Engine<'_> {
    fn candidate(&self, addr: &Ipv6Address) -> Option<&Candidate> {
        match addr.segments()[7] {
            1 => self.input.a.as_ref(),
            2 => self.input.b.as_ref(),
            _ => None,
        }
    }
}

impl Context for Engine<'_> {
    fn min_hop_rank_increase(&self) -> u16 {
        self.input.min_hop_rank_increase
    }

    fn preferred_parent(&self) -> Option<Ipv6Address> {
        self.input.preferred_parent.map(|id| address(id as u16))
    }

    fn link_stats(&self, addr: &Ipv6Address) -> Option<LinkStats> {
        self.candidate(addr)?.etx.map(LinkStats::new)
    }

    fn step_of_rank(&self, neighbor: &Neighbor) -> u16 {
        self.candidate(&neighbor.ip_addr())
            .map(|c| c.step_of_rank)
            .unwrap_or(0)
    }
}

fn address(id: u16) -> Ipv6Address {
    Ipv6Address::new(0xfe80, 0, 0, 0, 0, 0, 0, id)
}

fuzz_target!(|input: Input| {
    let engine = Engine { input: &input };

    let neighbor = |id: u16, c: &Option<Candidate>| {
        c.as_ref()
            .map(|c| Neighbor::new(address(id), Rank::new(c.rank, input.min_hop_rank_increase)))
    };
    let a = neighbor(1, &input.a);
    let b = neighbor(2, &input.b);

    let mut of = SecureObjectiveFunction::default();
    if input.restricted {
        of.switch_mode();
    }

    for n in [a.as_ref(), b.as_ref()] {
        let _ = of.rank_via_neighbor(&engine, n);
        let _ = of.path_cost(&engine, n);
    }

    if let Some(parent) = of.best_parent(&engine, a.as_ref(), b.as_ref()) {
        assert!(Some(parent) == a.as_ref() || Some(parent) == b.as_ref());
    }
});
