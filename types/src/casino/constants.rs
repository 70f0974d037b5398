/// Number of outcomes of a dice roll (results are `0..RANGE`).
pub const RANGE: u64 = 100;

/// House edge retained from gross winnings, scaled by [HOUSE_EDGE_DIVISOR] (1.5%).
pub const HOUSE_EDGE: u64 = 150;

/// Fixed-point divisor for [HOUSE_EDGE].
pub const HOUSE_EDGE_DIVISOR: u64 = 10_000;

/// Fixed-point divisor for win probabilities (4 implied decimal digits).
pub const PROBABILITY_DIVISOR: u64 = 10_000;

/// Number of fields on the choose-from-12 board.
pub const CHOOSE_FROM_12_NUMS: u64 = 12;

/// Number of fields on the keno board.
pub const KENO_FIELDS: u32 = 40;

/// Number of fields drawn per keno round, and the most a player may select.
pub const KENO_SELECTABLE_FIELDS: u32 = 10;

/// Wheel results are `0..WHEEL_RESULT_RANGE`, mapped onto the segments.
pub const WHEEL_RESULT_RANGE: u64 = 600;

/// Widest mask any game decodes (bits above are ignored).
pub const MAX_BIT_WIDTH: u32 = 52;
