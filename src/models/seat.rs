use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    #[default]
    Available,
    Sold,
}

impl SeatStatus {
    /// Single-character marker used on the seating plan.
    pub fn marker(self) -> char {
        match self {
            SeatStatus::Available => 'S',
            SeatStatus::Sold => 'B',
        }
    }
}

/// A validated, still unpaid seat choice.
///
/// Stored 0-based; `row_number`/`seat_number` give back the 1-based values
/// the operator typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub row_index: usize,
    pub seat_index: usize,
}

impl Selection {
    pub fn row_number(&self) -> u32 {
        self.row_index as u32 + 1
    }

    pub fn seat_number(&self) -> u32 {
        self.seat_index as u32 + 1
    }
}

/// A completed purchase with the price locked in at sale time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub row: u32,
    pub seat: u32,
    pub price: u32,
}
