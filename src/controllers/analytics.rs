use std::io::{BufRead, Write};

use super::console::Console;
use crate::error::ShellError;
use crate::services::RoomState;

pub fn show_statistics<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    room: &RoomState,
) -> Result<(), ShellError> {
    let snapshot = room.statistics_snapshot();

    console.line(format!("Number of purchased tickets: {}", snapshot.purchased_count))?;
    console.line(format!("Percentage: {}", snapshot.formatted_percentage()))?;
    console.line(format!("Current income: ${}", snapshot.current_income))?;
    console.line(format!("Total income: ${}", snapshot.projected_total_income))?;
    console.blank()?;
    Ok(())
}
