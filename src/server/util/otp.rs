use rand::Rng;

/// Generates a six-digit one-time password.
pub fn generate_otp() -> i32 {
    rand::rng().random_range(100_000..=999_999)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_six_digits() {
        for _ in 0..1000 {
            let otp = generate_otp();
            assert!((100_000..=999_999).contains(&otp));
        }
    }
}
