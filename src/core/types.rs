//! Coin faces and end-of-round commands.

use std::fmt;

/// One side of the coin. Used for both the player's guess and the dealer's flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Head,
    Tail,
}

impl Face {
    pub fn name(&self) -> &'static str {
        match self {
            Face::Head => "Head",
            Face::Tail => "Tail",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the player wants to do once a round is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PlayAgain,
    Enough,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_display() {
        assert_eq!(Face::Head.to_string(), "Head");
        assert_eq!(Face::Tail.to_string(), "Tail");
    }
}
