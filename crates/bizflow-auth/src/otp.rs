//! One-time credential generation.

use rand::Rng;

const OTP_MIN: u32 = 100_000;
const OTP_MAX: u32 = 999_999;

/// Generate a 6-digit numeric code drawn uniformly from
/// `[100000, 999999]`.
pub fn generate() -> String {
    rand::thread_rng().gen_range(OTP_MIN..=OTP_MAX).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_six_digits_in_range() {
        for _ in 0..1000 {
            let code = generate();
            assert_eq!(code.len(), 6);
            let n: u32 = code.parse().unwrap();
            assert!((OTP_MIN..=OTP_MAX).contains(&n));
        }
    }
}
