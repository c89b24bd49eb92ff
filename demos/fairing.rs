use diecast::defs::{d2, d6};
use diecast::{best_conversion, Simulate};

fn main() {
    env_logger::init();

    for (source, target) in [(d6(), d2()), (d6(), d6()), (d2(), d2())] {
        let rule = best_conversion(&source, &target, true).unwrap();
        let mut sim = Simulate::default();
        let mean = sim.mean_draws(&rule);
        println!(
            "fair {:>3} -> {:>3}: throws = {} expectation = {:.4} simulated = {:.4}",
            source.len(),
            target.len(),
            rule.throws(),
            rule.expectation(),
            mean,
        );
        for (face, count) in sim.tally(&rule) {
            println!("    {face}: {count}");
        }
    }
}
