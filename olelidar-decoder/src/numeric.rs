pub(crate) fn to_u16(lo: u8, hi: u8) -> u16 {
    (lo as u16) + ((hi as u16) << 8)
}

pub(crate) fn to_u32(b0: u8, b1: u8, b2: u8, b3: u8) -> u32 {
    (b0 as u32) + ((b1 as u32) << 8) + ((b2 as u32) << 16) + ((b3 as u32) << 24)
}

pub(crate) fn degree_to_radian(degree: f32) -> f32 {
    degree * std::f32::consts::PI / 180.
}

pub(crate) fn to_string(data: &[u8]) -> String {
    data.iter()
        .map(|e| format!("{:02X}", e))
        .collect::<Vec<_>>()
        .join(" ")
}
