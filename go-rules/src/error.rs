use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    NotOnGrid,
    Occupied,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::NotOnGrid => write!(f, "not on grid"),
            GoError::Occupied => write!(f, "occupied"),
        }
    }
}

impl std::error::Error for GoError {}
