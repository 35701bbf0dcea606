//! Board geometry, material values and search scores

/// Number of files (columns), x in `0..BOARD_WIDTH`
pub const BOARD_WIDTH: i8 = 9;
/// Number of ranks (rows), y in `0..BOARD_HEIGHT`
pub const BOARD_HEIGHT: i8 = 10;

/// Files spanned by both palaces
pub const PALACE_MIN_X: i8 = 3;
pub const PALACE_MAX_X: i8 = 5;

/// Red sits at the bottom (high y), Black at the top (low y)
pub const RED_PALACE_MIN_Y: i8 = 7;
pub const BLACK_PALACE_MAX_Y: i8 = 2;

/// Last rank on Black's side of the river; Red's side starts at `RIVER_Y + 1`
pub const RIVER_Y: i8 = 4;

// Material values
pub const GENERAL_VALUE: i32 = 10_000;
pub const CHARIOT_VALUE: i32 = 90;
pub const CANNON_VALUE: i32 = 45;
pub const HORSE_VALUE: i32 = 40;
pub const ADVISOR_VALUE: i32 = 20;
pub const ELEPHANT_VALUE: i32 = 20;
pub const SOLDIER_VALUE: i32 = 10;

// Soldier positional bonuses
pub const SOLDIER_CROSSED_BONUS: i32 = 10;
pub const SOLDIER_CENTER_BONUS: i32 = 5;

/// Score of a node whose side to move has no legal move
pub const MATE_SCORE: i32 = 100_000;
/// Alpha-beta window bound, larger than any reachable score
pub const AB_INF: i32 = 1_000_000;

/// Penalty for steering back into a position already in the history
pub const REPETITION_PENALTY: i32 = 500;
/// Bonus for giving check while ahead on material
pub const KILLER_INSTINCT_BONUS: i32 = 50;
/// Material lead the killer-instinct bonus requires
pub const KILLER_INSTINCT_THRESHOLD: i32 = 20;
