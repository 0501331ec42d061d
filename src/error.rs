use std::fmt;
use std::io;

#[derive(Debug)]
pub enum GameError {
    /// An update reached an entity that was already removed from the world.
    /// This means a collection was not purged when it should have been.
    InvalidEntityState { kind: &'static str },
    /// The asset provider has nothing registered under this logical name.
    AssetMissing { name: String },
    /// Configuration values the simulation cannot run with.
    InvalidConfig { reason: String },
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEntityState { kind } => {
                write!(f, "attempted to update a removed {kind}")
            }
            Self::AssetMissing { name } => write!(f, "no asset registered for {name}"),
            Self::InvalidConfig { reason } => write!(f, "invalid game config: {reason}"),
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
