//! Phone number and recipient utilities

/// Check whether a recipient is a bare phone number
///
/// A recipient counts as a phone number when it is non-empty and every
/// character is numeric. No length or country-code check is made.
pub fn is_numeric_recipient(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_numeric)
}

/// Format a bare phone number as `+<digits>`
pub fn with_plus_prefix(phone: &str) -> String {
    format!("+{}", phone)
}

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Mask a phone number for display (e.g., +18****1234)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

/// Mask an email address for display (e.g., f***@bar.com)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => format!("***@{}", domain),
        },
        None => "****".to_string(),
    }
}

/// Mask any recipient, phone or email, for logging
pub fn mask_recipient(recipient: &str) -> String {
    let bare = recipient.strip_prefix('+').unwrap_or(recipient);
    if is_numeric_recipient(bare) {
        mask_phone_number(recipient)
    } else if recipient.contains('@') {
        mask_email(recipient)
    } else {
        "****".to_string()
    }
}
