//! Token level parsers
//!
//! Lines are already split on whitespace, so every parser here must consume
//! the entire token to succeed.

// nom parser combinators
use nom::character::complete;
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::IResult;

/// Run `parser` over a whole token, discarding the nom error
fn whole<'a, T>(parser: fn(&'a str) -> IResult<&'a str, T>, token: &'a str) -> Option<T> {
    all_consuming(parser)(token).ok().map(|(_, value)| value)
}

/// Signed 64-bit integer value
pub(crate) fn int64(token: &str) -> Option<i64> {
    whole(complete::i64, token)
}

/// Unsigned 32-bit integer value
pub(crate) fn uint32(token: &str) -> Option<u32> {
    whole(complete::u32, token)
}

/// Double precision value, including scientific notation
pub(crate) fn float64(token: &str) -> Option<f64> {
    whole(double, token)
}
