pub mod room;
pub mod seat;
pub mod stats;

pub use room::{RoomDimensions, RoomGrid};
pub use seat::{SeatStatus, Selection, Ticket};
pub use stats::{SessionStats, StatisticsSnapshot};
