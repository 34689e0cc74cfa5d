pub mod competition;
pub mod opening;
pub mod rebid;
pub mod responding;

pub use opening::OPENING;
pub use rebid::{Rebid, OPENERS_REBID};
pub use responding::{Responding, RESPONDING};
