use rand::distr::Alphanumeric;
use rand::Rng;

static BADGE_CODE_LENGTH: usize = 8;

/// Generates a badge code for registrations created without one, e.g. `KSV-7F2K9QX1`.
pub fn generate_badge_code() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(BADGE_CODE_LENGTH)
        .map(|c| (c as char).to_ascii_uppercase())
        .collect();

    format!("KSV-{}", suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_codes_have_expected_shape() {
        let code = generate_badge_code();

        assert_eq!(code.len(), 4 + BADGE_CODE_LENGTH);
        assert!(code.starts_with("KSV-"));
        assert!(code[4..].chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(!code[4..].chars().any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn badge_codes_vary() {
        let first = generate_badge_code();
        let second = generate_badge_code();

        // 62^8 values; a collision here means the generator is broken.
        assert_ne!(first, second);
    }
}
