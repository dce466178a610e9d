use super::{Position, Size};
use crate::constants::window::{DEFAULT_HEIGHT, DEFAULT_WIDTH, RIGHT_MARGIN};

/// Initial window origin for a primary work area: pinned near the right
/// edge and vertically centered.
#[must_use]
pub fn initial_position(work_area: Size) -> Position {
    let x = i64::from(work_area.width) - i64::from(DEFAULT_WIDTH + RIGHT_MARGIN);
    let y = (i64::from(work_area.height) - i64::from(DEFAULT_HEIGHT)).div_euclid(2);

    Position::new(saturate(x), saturate(y))
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
