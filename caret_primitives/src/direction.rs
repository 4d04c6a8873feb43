// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// One of the four arrow keys, named after the DOM `KeyboardEvent.key` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ArrowKey {
    /// `"ArrowUp"`.
    Up = 0,
    /// `"ArrowRight"`.
    Right = 1,
    /// `"ArrowDown"`.
    Down = 2,
    /// `"ArrowLeft"`.
    Left = 3,
}

impl ArrowKey {
    /// All arrow keys, clockwise from up.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Parses a key name.
    ///
    /// Only the exact names `"ArrowUp"`, `"ArrowRight"`, `"ArrowDown"` and `"ArrowLeft"` are
    /// accepted.
    ///
    /// ```
    /// use caret_primitives::ArrowKey;
    ///
    /// assert_eq!(ArrowKey::parse("ArrowDown"), Some(ArrowKey::Down));
    /// assert_eq!(ArrowKey::parse("arrowdown"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "ArrowUp" => Self::Up,
            "ArrowRight" => Self::Right,
            "ArrowDown" => Self::Down,
            "ArrowLeft" => Self::Left,
            _ => return None,
        })
    }

    /// The DOM key name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "ArrowUp",
            Self::Right => "ArrowRight",
            Self::Down => "ArrowDown",
            Self::Left => "ArrowLeft",
        }
    }

    /// The direction the caret leaves the focused node in.
    pub const fn exit_direction(self) -> ExitDirection {
        match self {
            Self::Up => ExitDirection::Up,
            Self::Right => ExitDirection::Right,
            Self::Down => ExitDirection::Down,
            Self::Left => ExitDirection::Left,
        }
    }
}

impl fmt::Display for ArrowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArrowKey {
    type Err = ParseArrowKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(ParseArrowKeyError { len: s.len() })
    }
}

/// Error returned when a key name is not one of the four arrow keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseArrowKeyError {
    len: usize,
}

impl ParseArrowKeyError {
    /// Length in bytes of the rejected key name.
    pub const fn name_len(self) -> usize {
        self.len
    }
}

impl fmt::Display for ParseArrowKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not one of `ArrowUp`, `ArrowRight`, `ArrowDown` or `ArrowLeft`")
    }
}

impl core::error::Error for ParseArrowKeyError {}

/// Direction of travel as seen when leaving a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExitDirection {
    /// Leaving through the top edge.
    Up = 0,
    /// Leaving through the right edge.
    Right = 1,
    /// Leaving through the bottom edge.
    Down = 2,
    /// Leaving through the left edge.
    Left = 3,
}

/// Direction of travel as seen when arriving at a node: the side it is entered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EnterDirection {
    /// Entering through the top edge, coming from above.
    Up = 0,
    /// Entering through the right edge, coming from the right.
    Right = 1,
    /// Entering through the bottom edge, coming from below.
    Down = 2,
    /// Entering through the left edge, coming from the left.
    Left = 3,
}

const ENTER_FROM_EXIT: [EnterDirection; 4] = [
    EnterDirection::Down,
    EnterDirection::Left,
    EnterDirection::Up,
    EnterDirection::Right,
];

const EXIT_FROM_ENTER: [ExitDirection; 4] = [
    ExitDirection::Down,
    ExitDirection::Left,
    ExitDirection::Up,
    ExitDirection::Right,
];

/// The side a node is entered from after the caret left its neighbor in `exit` direction.
///
/// Leaving upward enters the next node from below, leaving rightward enters it from the left,
/// and so on.
pub const fn enter_direction_from_exit_direction(exit: ExitDirection) -> EnterDirection {
    ENTER_FROM_EXIT[exit as usize]
}

/// Inverse of [`enter_direction_from_exit_direction`].
pub const fn exit_direction_from_enter_direction(enter: EnterDirection) -> ExitDirection {
    EXIT_FROM_ENTER[enter as usize]
}

impl ExitDirection {
    /// All exit directions, clockwise from up.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Returns `true` for [`Up`](Self::Up) and [`Down`](Self::Down).
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// See [`enter_direction_from_exit_direction`].
    pub const fn enter(self) -> EnterDirection {
        enter_direction_from_exit_direction(self)
    }
}

impl EnterDirection {
    /// All enter directions, clockwise from up.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Returns `true` for [`Up`](Self::Up) and [`Down`](Self::Down).
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// See [`exit_direction_from_enter_direction`].
    pub const fn exit(self) -> ExitDirection {
        exit_direction_from_enter_direction(self)
    }
}
