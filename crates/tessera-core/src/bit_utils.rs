use num_traits::PrimInt;

/// Number of bits needed to represent `x`. Returns 0 for 0.
pub fn bits_required<T: PrimInt>(x: T) -> u32 {
    T::zero().count_zeros() - x.leading_zeros()
}

/// Maps signed values to unsigned so that small magnitudes stay small.
pub fn zig_zag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

pub fn zig_zag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_required() {
        assert_eq!(bits_required(0u32), 0);
        assert_eq!(bits_required(1u32), 1);
        assert_eq!(bits_required(255u32), 8);
        assert_eq!(bits_required(256u32), 9);
        assert_eq!(bits_required(u32::MAX), 32);
        assert_eq!(bits_required(7u64), 3);
    }

    #[test]
    fn test_zig_zag() {
        assert_eq!(zig_zag_encode(0), 0);
        assert_eq!(zig_zag_encode(-1), 1);
        assert_eq!(zig_zag_encode(1), 2);
        assert_eq!(zig_zag_encode(-2), 3);
        for v in [-1000i64, -1, 0, 1, 1000, i64::MIN, i64::MAX] {
            assert_eq!(zig_zag_decode(zig_zag_encode(v)), v);
        }
    }
}
