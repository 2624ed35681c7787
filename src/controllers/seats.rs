use std::io::{BufRead, Write};

use super::console::Console;
use super::setup::reject;
use crate::error::{RoomError, ShellError};
use crate::models::Selection;
use crate::services::RoomState;

pub fn show_seats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    room: &RoomState,
) -> Result<(), ShellError> {
    console.line("Cinema:")?;
    console.block(room.render_grid())?;
    console.blank()?;
    Ok(())
}

// Re-prompts until the operator names an available seat
fn choose_seat<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    room: &RoomState,
) -> Result<Selection, ShellError> {
    loop {
        let row = console.prompt("Enter a row number:")?;
        let seat = console.prompt("Enter a seat number in that row:")?;
        console.blank()?;

        let result = room.select_seat_from_input(&row, &seat);
        if let Err(e) = result {
            reject(console, e)?;
        }
        console.blank()?;

        if let Ok(selection) = result {
            return Ok(selection);
        }
    }
}

/// Select, commit at the row's price, print the price.
pub fn buy_ticket<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    room: &mut RoomState,
) -> Result<(), ShellError> {
    if room.is_sold_out() {
        return reject(console, RoomError::SoldOut);
    }

    let selection = choose_seat(console, room)?;
    let price = room.price_for(&selection);
    let ticket = room.commit_purchase(selection, price)?;

    console.line(format!("Ticket price: ${}", ticket.price))?;
    console.blank()?;
    Ok(())
}
