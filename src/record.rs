use crate::error::TallyError;
use fnv::FnvHasher;
use std::hash::Hasher;

/// 64-bit FNV-1a fingerprint of a key's raw bytes, used as the map key on
/// the hot path instead of the string itself.
pub fn fingerprint(key: &[u8]) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write(key);
    hasher.finish()
}

/// Split a line at the first `;` and parse the value column.
/// The key sub-span is returned as-is, with no trimming.
pub fn parse_line(line: &[u8]) -> Result<(&[u8], i32), TallyError> {
    let sep = line.iter().position(|&b| b == b';').ok_or_else(|| {
        TallyError::Parse(format!(
            "missing ';' in line {:?}",
            String::from_utf8_lossy(line)
        ))
    })?;
    let value = parse_fixed(&line[sep + 1..])?;
    Ok((&line[..sep], value))
}

/// Parse a decimal of the shape `-?[0-9]+\.[0-9]` into a signed
/// fixed-point integer scaled by 10 (`-3.2` -> `-32`).
///
/// Digits after the `.` overwrite a single fractional slot rather than
/// accumulating; summing scaled integers sidesteps float rounding drift
/// over hundreds of millions of additions.
pub fn parse_fixed(bytes: &[u8]) -> Result<i32, TallyError> {
    let (sign, digits): (i32, &[u8]) = match bytes.first() {
        Some(b'-') => (-1, &bytes[1..]),
        Some(_) => (1, bytes),
        None => return Err(TallyError::Parse("empty value".to_string())),
    };

    let mut int_part: i32 = 0;
    let mut frac_part: i32 = 0;
    let mut int_digits = 0;
    let mut frac_digits = 0;
    let mut decimal_seen = false;

    for &b in digits {
        match b {
            b'.' if !decimal_seen => decimal_seen = true,
            b'0'..=b'9' => {
                let digit = (b - b'0') as i32;
                if decimal_seen {
                    frac_part = digit;
                    frac_digits += 1;
                } else {
                    int_part = int_part * 10 + digit;
                    int_digits += 1;
                }
            }
            _ => {
                return Err(TallyError::Parse(format!(
                    "unexpected byte {:?} in value {:?}",
                    b as char,
                    String::from_utf8_lossy(bytes)
                )));
            }
        }
    }

    if int_digits == 0 || !decimal_seen || frac_digits == 0 {
        return Err(TallyError::Parse(format!(
            "malformed value {:?}",
            String::from_utf8_lossy(bytes)
        )));
    }

    Ok(sign * (int_part * 10 + frac_part))
}
