use orion_error::prelude::*;
use wl_config::RATIO_RESOLUTION;

use crate::error::{GenReason, GenResult};

/// Reduce `p : q` to the smallest integer ratio `a : b`.
///
/// Both terms are first scaled to integer thousandths, so `0.25 : 0.75`
/// reduces to `1 : 3` and `50 : 100` to `1 : 2`.
pub fn reduce_ratio(p: f64, q: f64) -> GenResult<(u64, u64)> {
    if !(p.is_finite() && q.is_finite() && p > 0.0 && q > 0.0) {
        return StructError::from(GenReason::Ratio)
            .with_detail(format!("ratio terms must be positive, got {p} : {q}"))
            .err();
    }
    if p == q {
        return Ok((1, 1));
    }

    let a = (p * RATIO_RESOLUTION).round() as u64;
    let b = (q * RATIO_RESOLUTION).round() as u64;
    if a == 0 || b == 0 {
        return StructError::from(GenReason::Ratio)
            .with_detail(format!("ratio {p} : {q} is below the supported resolution"))
            .err();
    }

    let divisor = gcd(a, b);
    Ok((a / divisor, b / divisor))
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
