pub const NULL: u8 = 0x00;

// ISO-8859-1 maps every byte to the code point of the same value.
pub fn to_iso8859_1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

pub fn to_trimmed(bytes: &[u8]) -> String {
    let end = bytes.iter()
                   .rposition(|&b| b != NULL)
                   .map_or(0, |idx| idx + 1);

    to_iso8859_1(&bytes[..end]).trim().to_string()
}

pub fn to_hex(bytes: &[u8]) -> String {
    let strs: Vec<String> = bytes.iter()
                                 .map(|b| format!("{:02x}", b))
                                 .collect();
    strs.join(" ")
}
