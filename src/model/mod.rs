mod schedule;
mod standings;
mod stats;
mod team;
mod transfer;

pub use schedule::*;
pub use standings::*;
pub use stats::*;
pub use team::*;
pub use transfer::*;
