// src/core/codepage.rs
//! windows-1251 on the wire, UTF-8 everywhere else.
//!
//! The registrar's CGI expects form values as cp1251 bytes, every one of them
//! `%XX`-escaped, and serves its pages in cp1251. Neither direction fails:
//! unmappable characters become `?` on the way out, undecodable bytes become
//! U+FFFD on the way in.

use encoding_rs::WINDOWS_1251;

/// Byte sent for a character cp1251 has no slot for.
pub const SUBSTITUTE: u8 = b'?';

/// Encode `text` as cp1251 bytes, substituting unmappable characters.
pub fn encode_cp1251(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch as u8);
            continue;
        }
        let (bytes, _, had_errors) = WINDOWS_1251.encode(ch.encode_utf8(&mut buf));
        if had_errors {
            out.push(SUBSTITUTE);
        } else {
            out.extend_from_slice(&bytes);
        }
    }
    out
}

/// Percent-encode every cp1251 byte of `text` (`"ПЗС"` → `"%CF%C7%D1"`).
pub fn encode_form_value(text: &str) -> String {
    let bytes = encode_cp1251(text);
    let mut out = String::with_capacity(bytes.len() * 3);
    for b in bytes {
        out.push_str(&format!("%{b:02X}"));
    }
    out
}

/// Build an `application/x-www-form-urlencoded` body: keys escaped as plain
/// form components, values through [`encode_form_value`].
pub fn encode_form(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| {
            let key: String = url::form_urlencoded::byte_serialize(k.as_bytes()).collect();
            join!(&key, "=", &encode_form_value(v))
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a cp1251 page body.
pub fn decode_page_bytes(bytes: &[u8]) -> String {
    let (text, had_errors) = WINDOWS_1251.decode_without_bom_handling(bytes);
    if had_errors {
        logd!("Codepage: replaced undecodable bytes in {} byte body", bytes.len());
    }
    text.into_owned()
}
