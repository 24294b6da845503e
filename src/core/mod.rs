pub mod card;
pub mod constants;
pub mod contact;
pub mod particles;
pub mod sched;

pub use card::*;
pub use contact::*;
pub use particles::*;
pub use sched::*;
