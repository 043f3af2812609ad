use crate::Delivery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BallCoordinate {
    pub over: u16,
    pub ball: u16,
}

/// Computes the coordinate of the next delivery from the most recently
/// appended one (by insertion order, not numeric coordinate). An illegal
/// delivery does not consume a legal-ball slot, so its coordinate is re-used.
pub fn next_ball(last: Option<&Delivery>) -> BallCoordinate {
    let last = match last {
        Some(d) => d,
        None => return BallCoordinate { over: 1, ball: 1 },
    };

    if last.extra.is_illegal() {
        return BallCoordinate {
            over: last.over,
            ball: last.ball,
        };
    }

    if last.ball >= 6 {
        BallCoordinate {
            over: last.over + 1,
            ball: 1,
        }
    } else {
        BallCoordinate {
            over: last.over,
            ball: last.ball + 1,
        }
    }
}
