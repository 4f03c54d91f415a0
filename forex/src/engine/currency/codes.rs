//! Known Currency Codes
//!
//! The matcher only needs to ask whether a code is known; where the codes come
//! from is hidden behind [`CodeSet`].

use log::warn;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Read-only lookup of valid currency codes
pub trait CodeSet {
    fn is_known_code(&self, code: &str) -> bool;
}

/// Active ISO 4217 alphabetic codes
const ISO_4217_CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD", "BDT",
    "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BOV", "BRL", "BSD", "BTN", "BWP", "BYN", "BZD",
    "CAD", "CDF", "CHE", "CHF", "CHW", "CLF", "CLP", "CNY", "COP", "COU", "CRC", "CUC", "CUP",
    "CVE", "CZK", "DJF", "DKK", "DOP", "DZD", "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP",
    "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ", "GYD", "HKD", "HNL", "HTG", "HUF", "IDR", "ILS",
    "INR", "IQD", "IRR", "ISK", "JMD", "JOD", "JPY", "KES", "KGS", "KHR", "KMF", "KPW", "KRW",
    "KWD", "KYD", "KZT", "LAK", "LBP", "LKR", "LRD", "LSL", "LYD", "MAD", "MDL", "MGA", "MKD",
    "MMK", "MNT", "MOP", "MRU", "MUR", "MVR", "MWK", "MXN", "MXV", "MYR", "MZN", "NAD", "NGN",
    "NIO", "NOK", "NPR", "NZD", "OMR", "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG", "QAR",
    "RON", "RSD", "RUB", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", "SHP", "SLE", "SLL",
    "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMT", "TND", "TOP", "TRY",
    "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "USN", "UYI", "UYU", "UYW", "UZS", "VED", "VES",
    "VND", "VUV", "WST", "XAF", "XAG", "XAU", "XBA", "XBB", "XBC", "XBD", "XCD", "XCG", "XDR",
    "XOF", "XPD", "XPF", "XPT", "XSU", "XTS", "XUA", "XXX", "YER", "ZAR", "ZMW", "ZWG", "ZWL",
];

static ISO_4217: Lazy<HashSet<&'static str>> = Lazy::new(|| ISO_4217_CODES.iter().copied().collect());

/// Returns true for three upper-case ASCII letters
pub fn is_code_shaped(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// ISO 4217 codes, optionally extended with extra codes from the runtime config
#[derive(Debug, Clone, Default)]
pub struct KnownCodes {
    extra: HashSet<String>,
}

impl KnownCodes {
    pub fn iso4217() -> Self {
        Self::default()
    }

    /// Adds codes on top of ISO 4217. Entries that are not three upper-case
    /// letters are skipped with a warning.
    pub fn with_extra_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for code in codes {
            let code = code.as_ref().trim();
            if is_code_shaped(code) {
                self.extra.insert(code.to_string());
            } else {
                warn!("ignoring malformed extra currency code {:?}", code);
            }
        }
        self
    }
}

impl CodeSet for KnownCodes {
    fn is_known_code(&self, code: &str) -> bool {
        ISO_4217.contains(code) || self.extra.contains(code)
    }
}
