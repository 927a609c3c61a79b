// src/core/sanitize.rs

/// Collapse sequences of whitespace into a single space and trim.
/// Covers non-breaking spaces too (`&nbsp;` reaches us already decoded).
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// First `dd.mm.yyyy`-shaped substring of `s` (digits and dots only; the
/// calendar check is the caller's job).
pub fn find_dotted_date(s: &str) -> Option<&str> {
    const SHAPE: &[u8] = b"dd.dd.dddd";
    let b = s.as_bytes();
    if b.len() < SHAPE.len() { return None; }

    (0..=b.len() - SHAPE.len())
        .find(|&i| {
            SHAPE.iter().zip(&b[i..i + SHAPE.len()]).all(|(want, got)| match want {
                b'd' => got.is_ascii_digit(),
                _ => got == want,
            })
        })
        // the window is pure ASCII, so both ends sit on char boundaries
        .map(|i| &s[i..i + SHAPE.len()])
}

/// Find the first `HH:MM` at or after byte `from`.
/// Returns (hours, minutes, byte index just past the match).
pub fn find_clock(s: &str, from: usize) -> Option<(u32, u32, usize)> {
    let b = s.as_bytes();
    let mut i = from;
    while i + 5 <= b.len() {
        let w = &b[i..i + 5];
        if w[0].is_ascii_digit() && w[1].is_ascii_digit() && w[2] == b':'
            && w[3].is_ascii_digit() && w[4].is_ascii_digit()
        {
            let h = u32::from(w[0] - b'0') * 10 + u32::from(w[1] - b'0');
            let m = u32::from(w[3] - b'0') * 10 + u32::from(w[4] - b'0');
            return Some((h, m, i + 5));
        }
        i += 1;
    }
    None
}
