// ABOUTME: GSM 03.38 default alphabet and extension table used for 7-bit encoding decisions
// ABOUTME: Table index is the septet value; extension characters are sent as ESC followed by their septet

/// Septet escaping into the extension table
pub const ESCAPE: u8 = 0x1B;

/// GSM 03.38 default alphabet, indexed by septet value
///
/// Slot 0x1B is the escape; it holds a space so the table stays 128 entries
/// long, and [`septet`] never returns it.
#[rustfmt::skip]
pub static BASE_TABLE: [char; 128] = [
    '@', '\u{00a3}', '$', '\u{00a5}', '\u{00e8}', '\u{00e9}', '\u{00f9}', '\u{00ec}',
    '\u{00f2}', '\u{00c7}', '\n', '\u{00d8}', '\u{00f8}', '\r', '\u{00c5}', '\u{00e5}',
    '\u{0394}', '_', '\u{03a6}', '\u{0393}', '\u{039b}', '\u{03a9}', '\u{03a0}', '\u{03a8}',
    '\u{03a3}', '\u{0398}', '\u{039e}', ' ', '\u{00c6}', '\u{00e6}', '\u{00df}', '\u{00c9}',
    ' ', '!', '"', '#', '\u{00a4}', '%', '&', '\'',
    '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', ':', ';', '<', '=', '>', '?',
    '\u{00a1}', 'A', 'B', 'C', 'D', 'E', 'F', 'G',
    'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W',
    'X', 'Y', 'Z', '\u{00c4}', '\u{00d6}', '\u{00d1}', '\u{00dc}', '\u{00a7}',
    '\u{00bf}', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w',
    'x', 'y', 'z', '\u{00e4}', '\u{00f6}', '\u{00f1}', '\u{00fc}', '\u{00e0}',
];

/// Characters reachable only through [`ESCAPE`], with their septet
pub static EXTENSION_TABLE: [(char, u8); 10] = [
    ('\u{000c}', 0x0A),
    ('^', 0x14),
    ('{', 0x28),
    ('}', 0x29),
    ('\\', 0x2F),
    ('[', 0x3C),
    ('~', 0x3D),
    (']', 0x3E),
    ('|', 0x40),
    ('\u{20ac}', 0x65),
];

/// Septet of `c` in the default alphabet
pub fn septet(c: char) -> Option<u8> {
    BASE_TABLE
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != ESCAPE as usize)
        .find(|(_, candidate)| **candidate == c)
        .map(|(index, _)| index as u8)
}

/// Septet of `c` in the extension table (to be sent after [`ESCAPE`])
pub fn extension_septet(c: char) -> Option<u8> {
    EXTENSION_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == c)
        .map(|(_, septet)| *septet)
}

pub fn is_base_char(c: char) -> bool {
    BASE_TABLE.contains(&c)
}

pub fn is_extension_char(c: char) -> bool {
    extension_septet(c).is_some()
}

/// Returns true if `c` can be sent in the GSM 7-bit alphabet
pub fn is_gsm7_char(c: char) -> bool {
    is_base_char(c) || is_extension_char(c)
}
