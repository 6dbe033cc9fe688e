pub mod router;
pub mod templates;

pub use router::{NotificationRouter, RoutingContext};
pub use templates::{NotificationInstruction, NotificationVariant, RecipientRole};
