//! Page frame geometry

/// Size of one page frame in bytes
pub const PAGE_SIZE: u32 = 0x1000;

/// Round a byte count up to the next multiple of [`PAGE_SIZE`]
#[inline]
pub const fn page_round_up(bytes: u64) -> u64 {
    let page = PAGE_SIZE as u64;
    bytes.div_ceil(page) * page
}

/// Number of page frames needed to hold `bytes`
#[inline]
pub const fn frames_for(bytes: u64) -> u64 {
    bytes.div_ceil(PAGE_SIZE as u64)
}
