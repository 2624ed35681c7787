//! room.rs
//!
//! Seat grid state machine for one cinema room.
//!
//! Holds the grid, the pricing policy and the running purchase counters.
//! All operations are pure validation or a single mutation; no I/O happens here,
//! callers own any retry loop.

use std::fmt;
use tracing::{debug, info};

use crate::error::RoomError;
use crate::models::{
    RoomDimensions, RoomGrid, SeatStatus, Selection, SessionStats, StatisticsSnapshot, Ticket,
};
use crate::services::pricing::PricingPolicy;

/// Parses one operator-typed integer.
pub fn parse_integer(input: &str) -> Result<i32, RoomError> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| RoomError::UnparsableInteger)
}

#[derive(Debug, Clone)]
pub struct RoomState {
    grid: RoomGrid,
    pricing: PricingPolicy,
    stats: SessionStats,
}

impl RoomState {
    pub fn new(rows: i32, seats_per_row: i32, pricing: PricingPolicy) -> Result<Self, RoomError> {
        let dimensions = RoomDimensions::new(rows, seats_per_row)?;
        info!(
            "Room created: {} rows x {} seats ({} total)",
            dimensions.rows,
            dimensions.seats_per_row,
            dimensions.total_seats()
        );
        Ok(Self {
            grid: RoomGrid::new(dimensions),
            pricing,
            stats: SessionStats::default(),
        })
    }

    /// Builds a room from the raw prompt answers.
    pub fn from_input(
        rows: &str,
        seats_per_row: &str,
        pricing: PricingPolicy,
    ) -> Result<Self, RoomError> {
        Self::new(parse_integer(rows)?, parse_integer(seats_per_row)?, pricing)
    }

    pub fn dimensions(&self) -> RoomDimensions {
        self.grid.dimensions()
    }

    pub fn grid(&self) -> &RoomGrid {
        &self.grid
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn is_sold_out(&self) -> bool {
        self.stats.purchased_count >= self.dimensions().total_seats()
    }

    /// Validates a 1-based (row, seat) pair. Nothing is mutated.
    pub fn select_seat(&self, row: i32, seat: i32) -> Result<Selection, RoomError> {
        let dimensions = self.dimensions();
        let in_range = |value: i32, max: u32| value >= 1 && value as u32 <= max;
        if !in_range(row, dimensions.rows) || !in_range(seat, dimensions.seats_per_row) {
            debug!("Seat {}:{} is outside the room", row, seat);
            return Err(RoomError::CoordinateOutOfRange);
        }

        let selection = Selection {
            row_index: (row - 1) as usize,
            seat_index: (seat - 1) as usize,
        };
        match self.grid.status(selection.row_index, selection.seat_index) {
            Some(SeatStatus::Available) => Ok(selection),
            Some(SeatStatus::Sold) => {
                debug!("Seat {}:{} already sold", row, seat);
                Err(RoomError::SeatAlreadySold)
            }
            None => Err(RoomError::CoordinateOutOfRange),
        }
    }

    /// Same as `select_seat`, from the raw prompt answers.
    pub fn select_seat_from_input(&self, row: &str, seat: &str) -> Result<Selection, RoomError> {
        match (parse_integer(row), parse_integer(seat)) {
            (Ok(row), Ok(seat)) => self.select_seat(row, seat),
            _ => Err(RoomError::UnparsableInteger),
        }
    }

    pub fn price_for(&self, selection: &Selection) -> u32 {
        self.pricing.price_for(self.dimensions(), selection.row_number())
    }

    /// Marks the seat sold and books `price` into the counters.
    ///
    /// A selection whose seat was sold in the meantime is refused and
    /// leaves the state untouched.
    pub fn commit_purchase(
        &mut self,
        selection: Selection,
        price: u32,
    ) -> Result<Ticket, RoomError> {
        self.grid.mark_sold(selection.row_index, selection.seat_index)?;
        self.stats.record(price);

        let ticket = Ticket {
            row: selection.row_number(),
            seat: selection.seat_number(),
            price,
        };
        info!(
            "Ticket sold: row {} seat {} for ${} ({} sold, income ${})",
            ticket.row,
            ticket.seat,
            ticket.price,
            self.stats.purchased_count,
            self.stats.current_income
        );
        Ok(ticket)
    }

    /// Prices the selection and commits it in one step.
    pub fn purchase(&mut self, selection: Selection) -> Result<Ticket, RoomError> {
        let price = self.price_for(&selection);
        self.commit_purchase(selection, price)
    }

    pub fn render_grid(&self) -> GridView<'_> {
        GridView { grid: &self.grid }
    }

    pub fn statistics_snapshot(&self) -> StatisticsSnapshot {
        let dimensions = self.dimensions();
        StatisticsSnapshot {
            purchased_count: self.stats.purchased_count,
            occupancy_percentage: self.stats.occupancy_percentage(dimensions.total_seats()),
            current_income: self.stats.current_income,
            projected_total_income: self.pricing.projected_total_income(dimensions),
        }
    }
}

/// Read-only seating plan, rendered line by line on demand.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a RoomGrid,
}

impl<'a> GridView<'a> {
    /// Header of column numbers, then one line per row.
    pub fn lines(&self) -> impl Iterator<Item = String> + 'a {
        let grid = self.grid;
        let seats_per_row = grid.dimensions().seats_per_row;
        let header = (1..=seats_per_row).fold(String::from(" "), |mut line, n| {
            line.push(' ');
            line.push_str(&n.to_string());
            line
        });

        let rows = grid.rows().enumerate().map(|(i, row)| {
            row.iter().fold((i + 1).to_string(), |mut line, seat| {
                line.push(' ');
                line.push(seat.marker());
                line
            })
        });

        std::iter::once(header).chain(rows)
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
