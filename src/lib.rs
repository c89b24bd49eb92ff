pub mod defs;
mod die;
mod exec;
mod partition;
mod rule;
mod toss;
mod util;

pub use die::Die;
pub use exec::{Outcome, Simulate};
pub use partition::{Partition, TossRange};
pub use rule::{best_conversion, Branch, Rule};
pub use toss::{ChanceClass, Toss};
pub use util::{divisors, Error, Id, Result};
