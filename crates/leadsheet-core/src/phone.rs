//! Phone sanitising for the call and WhatsApp actions.
//!
//! Sheet phone cells arrive in any format (`+91 98765 43210`,
//! `098765-43210`, …). Both actions first strip every non-digit. The dialler
//! then drops a leading country code; the messaging link adds one.

use regex::Regex;
use std::sync::LazyLock;

/// Country code assumed for local numbers.
pub const DEFAULT_COUNTRY_CODE: &str = "91";
/// Digits in a local (national) number.
pub const LOCAL_DIGITS: usize = 10;

// `\D` is Unicode-aware and would keep Devanagari or fullwidth digits.
static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("static regex must compile"));

/// Country-code rules, configurable via the `[phone]` config section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneRules {
    pub country_code: String,
    pub local_digits: usize,
}

impl Default for PhoneRules {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            local_digits: LOCAL_DIGITS,
        }
    }
}

impl PhoneRules {
    /// Number to dial: digits only, with the country code stripped when the
    /// number is longer than a local number and starts with it.
    pub fn dial_number(&self, phone: &str) -> String {
        let digits = digits(phone);
        if digits.len() > self.local_digits {
            if let Some(local) = digits.strip_prefix(self.country_code.as_str()) {
                return local.to_string();
            }
        }
        digits
    }

    /// Number for a messaging deep link: digits only, with the country code
    /// prepended when exactly a local number remains.
    pub fn whatsapp_number(&self, phone: &str) -> String {
        let digits = digits(phone);
        if digits.len() == self.local_digits {
            format!("{}{digits}", self.country_code)
        } else {
            digits
        }
    }

    pub fn tel_uri(&self, phone: &str) -> String {
        format!("tel:{}", self.dial_number(phone))
    }

    pub fn whatsapp_link(&self, phone: &str) -> String {
        format!("https://wa.me/{}", self.whatsapp_number(phone))
    }
}

/// Keep only ASCII `0-9`.
pub fn digits(phone: &str) -> String {
    NON_DIGIT.replace_all(phone, "").into_owned()
}

/// [`PhoneRules::dial_number`] with the default rules.
pub fn dial_number(phone: &str) -> String {
    PhoneRules::default().dial_number(phone)
}

/// [`PhoneRules::whatsapp_number`] with the default rules.
pub fn whatsapp_number(phone: &str) -> String {
    PhoneRules::default().whatsapp_number(phone)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
