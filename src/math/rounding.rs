/// Divide two non-negative integers, rounding to the nearest integer with ties to even
///
/// Averages over pixel crops are exact rationals, so rounding them this way
/// avoids the drift of going through floating point. A zero denominator yields 0.
pub const fn div_round_half_even(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    let quotient = numerator / denominator;
    let twice_remainder = (numerator % denominator) * 2;

    if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// Rounded ratio narrowed to a color channel, saturating at 255
pub fn channel_ratio(numerator: u64, denominator: u64) -> u8 {
    u8::try_from(div_round_half_even(numerator, denominator)).unwrap_or(u8::MAX)
}

/// Scale a channel by `level / 255`, rounding half to even
pub fn scale_channel(channel: u8, level: u8) -> u8 {
    channel_ratio(u64::from(channel) * u64::from(level), u64::from(u8::MAX))
}
