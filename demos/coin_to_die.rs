use diecast::defs::{d2, d6};
use diecast::{best_conversion, Branch, Rule};

fn main() {
    env_logger::init();

    let rule = best_conversion(&d2(), &d6(), false).unwrap();
    println!(
        "Simulating a {}-face die with a coin, {:.3} flips expected:\n",
        rule.target().len(),
        rule.expectation(),
    );

    let mut rules = Vec::new();
    collect(&rule, &mut rules);
    for (i, r) in rules.iter().enumerate() {
        print_rule(r, i + 1, &rules);
        println!();
    }
}

fn collect<'a>(rule: &'a Rule, out: &mut Vec<&'a Rule>) {
    out.push(rule);
    for (_, branch) in rule.arms() {
        if let Branch::Sub(sub) = branch {
            collect(sub, out);
        }
    }
}

fn print_rule(rule: &Rule, number: usize, all: &[&Rule]) {
    println!(
        "Rule {number}: throw it {} time(s) and find the sequence below.",
        rule.throws(),
    );
    for (range, branch) in rule.arms() {
        let seqs: Vec<String> = range
            .tosses()
            .iter()
            .map(|t| t.labels(rule.source()).concat())
            .collect();
        let seqs = seqs.join(" ");
        let ids: Vec<String> = range
            .runs()
            .iter()
            .map(|(a, b)| {
                if a == b {
                    a.to_string()
                } else {
                    format!("{a}-{b}")
                }
            })
            .collect();
        let ids = ids.join(",");
        match branch {
            Branch::Face(label) => println!("  [{seqs}] (ids {ids}) -> result {label}"),
            Branch::Repeat => println!("  [{seqs}] (ids {ids}) -> start rule {number} over"),
            Branch::Sub(sub) => {
                let n = all
                    .iter()
                    .position(|r| std::ptr::eq(*r, &**sub))
                    .expect("sub-rule was collected")
                    + 1;
                println!("  [{seqs}] (ids {ids}) -> continue with rule {n}");
            }
        }
    }
}
