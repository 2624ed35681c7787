pub mod analytics;
pub mod console;
pub mod seats;
pub mod setup;

use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::error::ShellError;
use crate::AppState;
pub use console::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ShowSeats,
    BuyTicket,
    Statistics,
    Exit,
    Invalid,
}

impl MenuCommand {
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i32>() {
            Ok(1) => MenuCommand::ShowSeats,
            Ok(2) => MenuCommand::BuyTicket,
            Ok(3) => MenuCommand::Statistics,
            Ok(0) => MenuCommand::Exit,
            _ => MenuCommand::Invalid,
        }
    }
}

fn read_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<MenuCommand, ShellError> {
    console.line("1. Show the seats")?;
    console.line("2. Buy a ticket")?;
    console.line("3. Statistics")?;
    console.line("0. Exit")?;
    console.blank()?;
    Ok(MenuCommand::parse(&console.read_line()?))
}

/// Menu loop. Returns on `0` or when the input ends.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
) -> Result<(), ShellError> {
    loop {
        let command = match read_command(console) {
            Ok(command) => command,
            Err(ShellError::InputClosed) => {
                info!("Console input closed, ending session");
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        debug!("Menu command: {:?}", command);

        let result = match command {
            MenuCommand::ShowSeats => seats::show_seats(console, &state.room),
            MenuCommand::BuyTicket => seats::buy_ticket(console, &mut state.room),
            MenuCommand::Statistics => analytics::show_statistics(console, &state.room),
            MenuCommand::Exit => return Ok(()),
            MenuCommand::Invalid => console
                .line("Not a valid option.")
                .and_then(|_| console.blank())
                .map_err(ShellError::from),
        };

        match result {
            Ok(()) => {}
            Err(ShellError::InputClosed) => {
                info!("Console input closed, ending session");
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}
