// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry for drawing navigation guides over an editor.

use kurbo::{Line, Point};

use crate::sink::{SinkLine, SinkPoint};

/// One piece of a navigation guide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GuideSegment {
    /// The vertical extent of a single caret sink.
    Sink(Line),
    /// The link between two consecutive sinks of the same navigation line, drawn between the
    /// middles of their intervals.
    Connector(Line),
}

impl GuideSegment {
    /// The underlying segment.
    pub fn line(self) -> Line {
        match self {
            Self::Sink(line) | Self::Connector(line) => line,
        }
    }
}

fn middle<N>(sink: &SinkPoint<N>) -> Point {
    Point::new(sink.n, (sink.top() + sink.bottom()) * 0.5)
}

/// Reports the guide segments of `lines` to `f`, together with the index of the navigation
/// line each segment belongs to.
///
/// Sinks of a line are reported before its connectors.
pub fn guide_segments_with<N, F>(lines: &[SinkLine<N>], mut f: F)
where
    F: FnMut(GuideSegment, usize),
{
    for (ix, line) in lines.iter().enumerate() {
        for sink in line {
            f(
                GuideSegment::Sink(Line::new((sink.n, sink.top()), (sink.n, sink.bottom()))),
                ix,
            );
        }
        for pair in line.windows(2) {
            f(
                GuideSegment::Connector(Line::new(middle(&pair[0]), middle(&pair[1]))),
                ix,
            );
        }
    }
}
