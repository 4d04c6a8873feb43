// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use caret_primitives::{ExitDirection, ParseArrowKeyError};

/// Error type for navigation requests.
///
/// Running out of places to go is not an error: navigation returns `Ok(None)` in that case.
/// An `Error` means the host and the engine disagree about the tree, or the host passed input
/// the engine cannot interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The direction being resolved when a tree inconsistency was found.
    direction: Option<ExitDirection>,

    /// The rejected key name, for [`ErrorKind::UnknownKey`].
    key: Option<ParseArrowKeyError>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The direction of travel when the error occurred, if it came from a navigation step.
    pub fn direction(&self) -> Option<ExitDirection> {
        self.direction
    }

    pub(crate) fn child_not_found(direction: ExitDirection) -> Self {
        Self {
            kind: ErrorKind::ChildNotFound,
            direction: Some(direction),
            key: None,
        }
    }

    pub(crate) fn unknown_key(key: ParseArrowKeyError) -> Self {
        Self {
            kind: ErrorKind::UnknownKey,
            direction: None,
            key: Some(key),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::ChildNotFound => {
                write!(f, "child node was not found among its parent's children")?;
                if let Some(direction) = self.direction {
                    write!(f, " while moving {direction:?}")?;
                }
                Ok(())
            }
            ErrorKind::UnknownKey => match self.key {
                Some(key) => write!(f, "unknown key: {key}"),
                None => write!(f, "unknown key"),
            },
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.key
            .as_ref()
            .map(|key| key as &(dyn core::error::Error + 'static))
    }
}

/// Non-exhaustive classification of navigation errors.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A node claimed as the current child is not among its parent's children.
    ///
    /// The host's tree and the caller's notion of the focused node are out of sync.
    ChildNotFound,
    /// A key name that is not one of the four arrow keys.
    UnknownKey,
}
