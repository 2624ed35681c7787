use std::io::{BufRead, Write};
use tracing::debug;

use super::console::Console;
use crate::error::{RoomError, ShellError};
use crate::services::room::parse_integer;
use crate::services::{PricingPolicy, RoomState};

pub(crate) fn reject<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    error: RoomError,
) -> Result<(), ShellError> {
    debug!("Rejected input: {:?}", error);
    console.line(error)?;
    console.blank()?;
    Ok(())
}

/// Asks for the room size until both values are positive integers.
pub fn build_room<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    pricing: PricingPolicy,
) -> Result<RoomState, ShellError> {
    loop {
        let rows = match parse_integer(&console.prompt("Enter the number of rows:")?) {
            Ok(rows) => rows,
            Err(e) => {
                reject(console, e)?;
                continue;
            }
        };
        let answer = console.prompt("Enter the number of seats in each row:")?;
        let seats = match parse_integer(&answer) {
            Ok(seats) => seats,
            Err(e) => {
                reject(console, e)?;
                continue;
            }
        };
        console.blank()?;

        match RoomState::new(rows, seats, pricing) {
            Ok(room) => return Ok(room),
            Err(e) => reject(console, e)?,
        }
    }
}
