//! Elapsed-time normalization. Every duration leaves the store in milliseconds.

/// Parses `h:mm:ss.fff`, `m:ss.fff`, `ss.fff` or a bare integer count of milliseconds.
pub fn parse_millis(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse().ok();
    }

    let mut parts = raw.rsplit(':');
    let seconds_part = parts.next()?;
    let mut total = parse_seconds(seconds_part)?;

    let mut unit: u64 = 60_000;
    let mut higher_units = 0;
    for part in parts {
        higher_units += 1;
        if higher_units > 2 || part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        total = total.checked_add(part.parse::<u64>().ok()?.checked_mul(unit)?)?;
        unit *= 60;
    }
    if higher_units > 0 && seconds_part_whole(seconds_part)? >= 60 {
        return None;
    }

    u32::try_from(total).ok()
}

/// Prefers the numeric millisecond column and falls back to the textual time.
pub fn resolve(milliseconds: Option<u32>, text: Option<&str>) -> Option<u32> {
    milliseconds.or_else(|| text.and_then(parse_millis))
}

fn parse_seconds(part: &str) -> Option<u64> {
    let (whole, fraction) = match part.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (part, ""),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut millis: u64 = 0;
    for (i, digit) in fraction.bytes().chain(std::iter::repeat(b'0')).take(3).enumerate() {
        millis += u64::from(digit - b'0') * 10u64.pow(2 - i as u32);
    }
    Some(whole.parse::<u64>().ok()?.checked_mul(1_000)?.checked_add(millis)?)
}

fn seconds_part_whole(part: &str) -> Option<u64> {
    part.split('.').next()?.parse().ok()
}
