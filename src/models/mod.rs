mod booking;
mod contact;
mod location;
mod time_slot;
mod user;

pub use booking::*;
pub use contact::*;
pub use location::*;
pub use time_slot::*;
pub use user::*;
