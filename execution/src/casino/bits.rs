//! Bit helpers for mask-encoded selections and results.

use fairplay_types::casino::MAX_BIT_WIDTH;

const WIDTH_MASK: u64 = (1u64 << MAX_BIT_WIDTH) - 1;

/// Number of set bits among the low [MAX_BIT_WIDTH] bits of `num`.
pub fn num_set_bits(num: u64) -> u32 {
    (num & WIDTH_MASK).count_ones()
}

/// Each of the low [MAX_BIT_WIDTH] bits of `num`, bit 0 first.
pub fn set_bits(num: u64) -> [bool; MAX_BIT_WIDTH as usize] {
    let mut bits = [false; MAX_BIT_WIDTH as usize];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = num & (1u64 << i) != 0;
    }
    bits
}
