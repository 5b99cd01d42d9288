const FULLY_MASKED: &str = "************";

/// Display form of a card number: everything but the last 4 characters replaced
/// with `*`. Inputs shorter than 4 characters get a fixed fully-masked placeholder.
pub fn mask_card_number(card_number: &str) -> String {
    let chars: Vec<char> = card_number.chars().collect();
    if chars.len() < 4 {
        return FULLY_MASKED.to_string();
    }

    let masked_len = chars.len() - 4;
    let last_four: String = chars[masked_len..].iter().collect();
    format!("{}{}", "*".repeat(masked_len), last_four)
}
