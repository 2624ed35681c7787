use serde::Serialize;

use crate::error::RoomError;
use crate::models::seat::SeatStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoomDimensions {
    pub rows: u32,
    pub seats_per_row: u32,
}

impl RoomDimensions {
    /// Both values must be strictly positive.
    pub fn new(rows: i32, seats_per_row: i32) -> Result<Self, RoomError> {
        if rows <= 0 || seats_per_row <= 0 {
            return Err(RoomError::NonPositiveDimension);
        }
        Ok(Self {
            rows: rows as u32,
            seats_per_row: seats_per_row as u32,
        })
    }

    pub fn total_seats(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.seats_per_row)
    }
}

/// Row-major seat matrix, fixed size for its whole lifetime.
#[derive(Debug, Clone)]
pub struct RoomGrid {
    dimensions: RoomDimensions,
    seats: Vec<SeatStatus>,
}

impl RoomGrid {
    pub fn new(dimensions: RoomDimensions) -> Self {
        let len = dimensions.rows as usize * dimensions.seats_per_row as usize;
        Self {
            dimensions,
            seats: vec![SeatStatus::Available; len],
        }
    }

    pub fn dimensions(&self) -> RoomDimensions {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    fn offset(&self, row: usize, seat: usize) -> Option<usize> {
        let seats_per_row = self.dimensions.seats_per_row as usize;
        if row < self.dimensions.rows as usize && seat < seats_per_row {
            Some(row * seats_per_row + seat)
        } else {
            None
        }
    }

    /// `None` when the 0-based coordinates fall outside the room.
    pub fn status(&self, row: usize, seat: usize) -> Option<SeatStatus> {
        self.offset(row, seat).map(|i| self.seats[i])
    }

    pub(crate) fn mark_sold(&mut self, row: usize, seat: usize) -> Result<(), RoomError> {
        let i = self.offset(row, seat).ok_or(RoomError::CoordinateOutOfRange)?;
        if self.seats[i] == SeatStatus::Sold {
            return Err(RoomError::SeatAlreadySold);
        }
        self.seats[i] = SeatStatus::Sold;
        Ok(())
    }

    /// Rows in display order, each as a slice of seats.
    pub fn rows(&self) -> impl Iterator<Item = &[SeatStatus]> + '_ {
        self.seats.chunks(self.dimensions.seats_per_row as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(RoomDimensions::new(0, 5), Err(RoomError::NonPositiveDimension));
        assert_eq!(RoomDimensions::new(5, -1), Err(RoomError::NonPositiveDimension));
        assert!(RoomDimensions::new(1, 1).is_ok());
    }

    #[test]
    fn new_grid_is_all_available() {
        let grid = RoomGrid::new(RoomDimensions::new(3, 4).unwrap());
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().flatten().all(|s| *s == SeatStatus::Available));
    }

    #[test]
    fn out_of_range_status_is_none() {
        let grid = RoomGrid::new(RoomDimensions::new(2, 2).unwrap());
        assert_eq!(grid.status(1, 1), Some(SeatStatus::Available));
        assert_eq!(grid.status(2, 0), None);
        assert_eq!(grid.status(0, 2), None);
    }

    #[test]
    fn seat_is_sold_only_once() {
        let mut grid = RoomGrid::new(RoomDimensions::new(2, 2).unwrap());
        grid.mark_sold(0, 1).unwrap();
        assert_eq!(grid.status(0, 1), Some(SeatStatus::Sold));
        assert_eq!(grid.mark_sold(0, 1), Err(RoomError::SeatAlreadySold));
        assert_eq!(grid.mark_sold(5, 0), Err(RoomError::CoordinateOutOfRange));
    }
}
