pub mod stats;
pub mod value;

pub use stats::Stats;
pub use value::{Member, Value, ValueKind};
