//! Keyboard bindings for the two paddles

use crate::{Direction, Side};

/// Map a named key press to the paddle it moves
pub fn binding_for(key: &str) -> Option<(Side, Direction)> {
    match key {
        "w" | "W" => Some((Side::Left, Direction::Up)),
        "s" | "S" => Some((Side::Left, Direction::Down)),
        "Up" => Some((Side::Right, Direction::Up)),
        "Down" => Some((Side::Right, Direction::Down)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_paddle_bindings() {
        assert_eq!(binding_for("w"), Some((Side::Left, Direction::Up)));
        assert_eq!(binding_for("S"), Some((Side::Left, Direction::Down)));
    }

    #[test]
    fn test_right_paddle_bindings() {
        assert_eq!(binding_for("Up"), Some((Side::Right, Direction::Up)));
        assert_eq!(binding_for("Down"), Some((Side::Right, Direction::Down)));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(binding_for("a"), None);
        assert_eq!(binding_for("Left"), None);
        assert_eq!(binding_for(""), None);
    }
}
