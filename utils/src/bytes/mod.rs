use std::fmt::Write;

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// hex dump of at most `limit` leading bytes, used to keep trace lines short
pub fn bytes_to_hex_prefix(bytes: &[u8], limit: usize) -> String {
    let shown = &bytes[..bytes.len().min(limit)];
    let mut s = bytes_to_hex(shown);
    if bytes.len() > limit {
        s.push_str("..");
    }
    s
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bytes_to_hex() {
        assert_eq!(bytes_to_hex(&[0x0b, 0x77, 0x00]), "0b7700");
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn test_bytes_to_hex_prefix() {
        assert_eq!(bytes_to_hex_prefix(&[0x0b, 0x77, 0x01, 0x02], 2), "0b77..");
        assert_eq!(bytes_to_hex_prefix(&[0x0b, 0x77], 8), "0b77");
    }
}
