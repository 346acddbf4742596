use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_until},
    character::complete::digit1,
    combinator::{all_consuming, map, map_res, rest, verify},
    sequence::{preceded, separated_pair, terminated},
};

/// Bytes before the next space, space consumed.
///
/// The scan is bounded by the input length; an absent space is an error,
/// never an overrun.
pub fn space_token(input: &[u8]) -> IResult<&[u8], &[u8]> {
    terminated(take_until(" "), tag(" ")).parse(input)
}

/// Bytes before the next CRLF, CRLF consumed.
pub fn line_token(input: &[u8]) -> IResult<&[u8], &[u8]> {
    terminated(take_until("\r\n"), tag("\r\n")).parse(input)
}

/// `HTTP/<major>.<minor>` split into its numeric components.
pub fn version(input: &[u8]) -> IResult<&[u8], (u8, u8)> {
    let components = separated_pair(decimal_u8, tag("."), decimal_u8);

    all_consuming(preceded(tag("HTTP/"), components)).parse(input)
}

/// `<code> <reason>` from a status line, with the reason phrase being
/// optional (some servers omit even the mandatory space).
pub fn status_fragment(input: &[u8]) -> IResult<&[u8], (u16, &[u8])> {
    let strict = all_consuming(separated_pair(status_code, tag(" "), rest));
    let bare = map(all_consuming(status_code), |code| (code, &b""[..]));

    alt((strict, bare)).parse(input)
}

fn status_code(input: &[u8]) -> IResult<&[u8], u16> {
    map_res(verify(digit1, |d: &[u8]| d.len() == 3), parse_decimal::<u16>).parse(input)
}

fn decimal_u8(input: &[u8]) -> IResult<&[u8], u8> {
    map_res(verify(digit1, |d: &[u8]| d.len() <= 3), parse_decimal::<u8>).parse(input)
}

fn parse_decimal<T: std::str::FromStr>(digits: &[u8]) -> Result<T, ()> {
    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or(())
}
