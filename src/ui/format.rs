//! Display formatting helpers.

/// Shortens a wallet address to `first8...last8` for display.
///
/// Addresses short enough to show whole are returned unchanged.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 19 {
        return address.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Formats an integer with thousands grouping (`1234567` -> `1,234,567`).
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_stacks_address() {
        assert_eq!(
            truncate_address("SP31G2FZ5JN87BATZMP4ZRYE5F7WZQDNEXJ7G7X97"),
            "SP31G2FZ...ZQDNEXJ7"
        );
    }

    #[test]
    fn short_address_is_unchanged() {
        assert_eq!(truncate_address("SP31G2FZ5"), "SP31G2FZ5");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(42), "42");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
