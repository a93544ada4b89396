pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Straight-alpha source-over blend of one RGBA8 pixel.
pub(crate) fn over_straight(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let da = u16::from(dst[3]);
    let inv = 255 - sa;
    let out_a = sa + mul_div255_u16(da, inv);
    if out_a == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    out[3] = out_a as u8;
    for i in 0..3 {
        // Weighted by contributing alpha, renormalized to straight alpha.
        let sc = u32::from(src[i]) * u32::from(sa);
        let dc = u32::from(dst[i]) * u32::from(mul_div255_u16(da, inv));
        out[i] = ((sc + dc + u32::from(out_a) / 2) / u32::from(out_a)) as u8;
    }
    out
}

/// Decimal digit count of `n` (at least 1).
pub(crate) fn digit_width(n: usize) -> usize {
    let mut n = n;
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
