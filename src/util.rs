//! Input decoding helpers.

use std::borrow::Cow;

/// Decode a transcription file.
///
/// Valid UTF-8 (a BOM is stripped) is borrowed as-is. Otherwise the
/// encoding named by `declared` is used when `encoding_rs` knows the label,
/// and Windows-1252 when it does not. Windows-1252 maps every byte, so
/// decoding never fails.
pub fn decode_text<'a>(bytes: &'a [u8], declared: Option<&str>) -> Cow<'a, str> {
    let (utf8, _, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return utf8;
    }

    let encoding = declared
        .and_then(|label| encoding_rs::Encoding::for_label(label.trim().as_bytes()))
        .unwrap_or(encoding_rs::WINDOWS_1252);
    log::debug!(
        "input is not UTF-8 (declared {:?}), decoding as {}",
        declared,
        encoding.name()
    );
    encoding.decode(bytes).0
}

/// Extract encoding from XML declaration.
///
/// Parses `<?xml ... encoding="..." ?>` within the first 100 bytes and
/// returns the encoding name, or `None`.
pub fn extract_xml_encoding(bytes: &[u8]) -> Option<&str> {
    let check_len = bytes.len().min(100);
    let prefix = &bytes[..check_len];

    let xml_start = prefix.windows(5).position(|w| w == b"<?xml")?;
    let after_xml = &prefix[xml_start..];

    let enc_pos = after_xml
        .windows(9)
        .position(|w| w.eq_ignore_ascii_case(b"encoding="))?;
    let after_enc = &after_xml[enc_pos + 9..];

    let (&quote, rest) = after_enc.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }

    let value_end = rest.iter().position(|&b| b == quote)?;
    std::str::from_utf8(&rest[..value_end]).ok()
}
