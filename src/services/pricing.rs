//! pricing.rs
//!
//! Ticket pricing for a single room.
//!
//! - Rooms up to `small_room_max_seats` seats charge `full_price` everywhere.
//! - Larger rooms charge `full_price` for the front `rows / 2` rows and
//!   `discount_price` for the rest.
//! - Projected income assumes a full sellout at those prices.

use crate::config::PricingConfig;
use crate::models::RoomDimensions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    pub full_price: u32,
    pub discount_price: u32,
    pub small_room_max_seats: u64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::from(&PricingConfig::default())
    }
}

impl From<&PricingConfig> for PricingPolicy {
    fn from(config: &PricingConfig) -> Self {
        Self {
            full_price: config.full_price,
            discount_price: config.discount_price,
            small_room_max_seats: config.small_room_max_seats,
        }
    }
}

impl PricingPolicy {
    fn is_small_room(&self, dimensions: RoomDimensions) -> bool {
        dimensions.total_seats() <= self.small_room_max_seats
    }

    /// Price of any seat in the given 1-based row.
    pub fn price_for(&self, dimensions: RoomDimensions, row_number: u32) -> u32 {
        if self.is_small_room(dimensions) {
            return self.full_price;
        }

        let front_rows = dimensions.rows / 2;
        if row_number <= front_rows {
            self.full_price
        } else {
            self.discount_price
        }
    }

    /// Income of a full sellout, from dimensions alone.
    ///
    /// For an odd row count the middle row falls into the discount group.
    pub fn projected_total_income(&self, dimensions: RoomDimensions) -> u64 {
        let seats_per_row = u64::from(dimensions.seats_per_row);
        if self.is_small_room(dimensions) {
            return u64::from(self.full_price) * dimensions.total_seats();
        }

        let vip_rows = u64::from(dimensions.rows / 2);
        let normal_rows = if dimensions.rows % 2 == 1 {
            vip_rows + 1
        } else {
            vip_rows
        };

        vip_rows * seats_per_row * u64::from(self.full_price)
            + normal_rows * seats_per_row * u64::from(self.discount_price)
    }
}
