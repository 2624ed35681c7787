use thiserror::Error;

/// Input validation failures raised by the room.
///
/// The `Display` text of each variant is the exact line shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("Invalid input!")]
    NonPositiveDimension,
    #[error("Invalid input!")]
    UnparsableInteger,
    #[error("Wrong input!")]
    CoordinateOutOfRange,
    #[error("That ticket has already been purchased!")]
    SeatAlreadySold,
    #[error("All tickets have been sold!")]
    SoldOut,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("console input closed")]
    InputClosed,
    #[error(transparent)]
    Room(#[from] RoomError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
