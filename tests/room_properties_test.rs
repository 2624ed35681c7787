//! Property tests for the room state machine.
//!
//! Run with: `cargo test --test room_properties_test`

#![allow(clippy::unwrap_used)]

use cinema_manager::error::RoomError;
use cinema_manager::models::SeatStatus;
use cinema_manager::services::{PricingPolicy, RoomState};
use proptest::prelude::*;

fn room_and_picks() -> impl Strategy<Value = (i32, i32, Vec<(i32, i32)>)> {
    (1..=12i32, 1..=12i32).prop_flat_map(|(rows, seats)| {
        let picks = prop::collection::vec((1..=rows, 1..=seats), 0..40);
        (Just(rows), Just(seats), picks)
    })
}

proptest! {
    #[test]
    fn new_room_has_every_seat_available(rows in 1..=50i32, seats in 1..=50i32) {
        let room = RoomState::new(rows, seats, PricingPolicy::default()).unwrap();
        prop_assert_eq!(room.grid().len(), (rows * seats) as usize);
        prop_assert!(room.grid().rows().flatten().all(|s| *s == SeatStatus::Available));
        prop_assert_eq!(room.render_grid().lines().count(), rows as usize + 1);
    }

    #[test]
    fn non_positive_dimensions_are_rejected(rows in -20..=0i32, seats in -20..=20i32) {
        let pricing = PricingPolicy::default();
        prop_assert_eq!(RoomState::new(rows, seats, pricing).unwrap_err(), RoomError::NonPositiveDimension);
        prop_assert_eq!(RoomState::new(seats.abs() + 1, rows, pricing).unwrap_err(), RoomError::NonPositiveDimension);
    }

    #[test]
    fn purchases_keep_counters_consistent((rows, seats, picks) in room_and_picks()) {
        let mut room = RoomState::new(rows, seats, PricingPolicy::default()).unwrap();
        let mut sold = std::collections::HashSet::new();
        let mut income = 0u64;

        for (row, seat) in picks {
            match room.select_seat(row, seat) {
                Ok(selection) => {
                    prop_assert!(sold.insert((row, seat)));
                    let price = room.price_for(&selection);
                    let ticket = room.commit_purchase(selection, price).unwrap();
                    prop_assert_eq!(ticket.price, price);
                    income += u64::from(price);
                }
                Err(e) => {
                    prop_assert_eq!(e, RoomError::SeatAlreadySold);
                    prop_assert!(sold.contains(&(row, seat)));
                }
            }
        }

        let snapshot = room.statistics_snapshot();
        prop_assert_eq!(snapshot.purchased_count, sold.len() as u64);
        prop_assert_eq!(snapshot.current_income, income);
        let total = (rows * seats) as f64;
        prop_assert!((snapshot.occupancy_percentage - sold.len() as f64 / total * 100.0).abs() < 1e-9);
        prop_assert_eq!(room.statistics_snapshot(), snapshot);
    }

    #[test]
    fn projection_matches_sum_of_seat_prices(rows in 1..=40i32, seats in 1..=40i32) {
        let room = RoomState::new(rows, seats, PricingPolicy::default()).unwrap();
        let mut expected = 0u64;
        for row in 1..=rows {
            let selection = room.select_seat(row, 1).unwrap();
            expected += u64::from(room.price_for(&selection)) * seats as u64;
        }
        prop_assert_eq!(room.statistics_snapshot().projected_total_income, expected);
    }

    #[test]
    fn coordinates_outside_room_are_out_of_range(rows in 1..=10i32, seats in 1..=10i32, extra in 1..=5i32) {
        let room = RoomState::new(rows, seats, PricingPolicy::default()).unwrap();
        prop_assert_eq!(room.select_seat(rows + extra, 1).unwrap_err(), RoomError::CoordinateOutOfRange);
        prop_assert_eq!(room.select_seat(1, seats + extra).unwrap_err(), RoomError::CoordinateOutOfRange);
        prop_assert_eq!(room.select_seat(1 - extra, 1).unwrap_err(), RoomError::CoordinateOutOfRange);
    }
}
