/// mask with the lowest `width` bits set, `width` is clamped to 32
#[inline]
pub const fn low_bits_mask(width: u32) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

#[inline]
pub const fn fits_in_bits(value: u32, width: u32) -> bool {
    value & !low_bits_mask(width) == 0
}
