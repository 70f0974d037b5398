/// Risk level of a wheel or plinko selection (the hundreds digit of `num`).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Risk {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Risk {
    pub const ALL: [Risk; 3] = [Risk::Low, Risk::Medium, Risk::High];

    pub fn from_digit(digit: u64) -> Option<Self> {
        match digit {
            1 => Some(Risk::Low),
            2 => Some(Risk::Medium),
            3 => Some(Risk::High),
            _ => None,
        }
    }

    /// Row of this risk level in the payout tables.
    pub(crate) fn index(self) -> usize {
        self as usize - 1
    }

    /// Encode with a shape (segments or rows) as `risk * 100 + shape`.
    pub fn selection(self, shape: u64) -> u64 {
        self as u64 * 100 + shape
    }
}

/// Split a `risk * 100 + shape` selection into its risk digit and shape.
pub(crate) fn split_selection(num: u64) -> (u64, u64) {
    ((num / 100) % 10, num % 100)
}
