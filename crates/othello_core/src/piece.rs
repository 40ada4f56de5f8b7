#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// White is the maximizing side.
    pub fn is_max(self) -> bool {
        self == Color::White
    }

    /// Marker used for this color's disks in the board encoding.
    pub fn disk_char(self) -> char {
        match self {
            Color::White => 'O',
            Color::Black => 'X',
        }
    }

    /// Marker used for this color in the side-to-move slot of the encoding.
    pub fn turn_char(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    pub fn from_disk_char(c: char) -> Option<Self> {
        match c {
            'O' => Some(Color::White),
            'X' => Some(Color::Black),
            _ => None,
        }
    }

    pub fn from_turn_char(c: char) -> Option<Self> {
        match c {
            'W' => Some(Color::White),
            'B' => Some(Color::Black),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_flips() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }

    #[test]
    fn markers_are_distinct_per_slot() {
        assert_eq!(Color::from_disk_char('O'), Some(Color::White));
        assert_eq!(Color::from_disk_char('W'), None);
        assert_eq!(Color::from_turn_char('B'), Some(Color::Black));
        assert_eq!(Color::from_turn_char('X'), None);
    }
}
