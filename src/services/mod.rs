pub mod pricing;
pub mod room;

pub use pricing::PricingPolicy;
pub use room::{GridView, RoomState};
