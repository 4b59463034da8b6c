//! Diagnostic codes reported by heat pump controllers.
//!
//! A code is written as `<prefix>.<number>`, e.g. `S.10` or `F.01`. The prefix letter selects
//! one of five tables:
//!
//! * `S` -- status, the operating state of the unit;
//! * `F` -- fault, something is broken;
//! * `P` -- maintenance ("Pflege"), service is due;
//! * `I` -- information, the controller is limiting itself or reporting an event;
//! * `A` -- alert, a warning that needs attention but does not stop the unit.
//!
//! All lookups are total: codes that are not in any table map to a placeholder description
//! instead of an error, since the controllers report codes that are missing from the vendor
//! documentation every now and then.

use std::borrow::Cow;
use std::cmp::Ordering;

mod tables;

pub use tables::{ALERT, FAULT, INFORMATION, MAINTENANCE, STATUS};

/// Status codes that indicate a problem even though they are reported as a status.
pub const WARNING_STATUS_CODES: [&str; 4] = ["S.14", "S.81", "S.128", "S.138"];

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Status,
    Fault,
    Maintenance,
    Information,
    Alert,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Status,
        Category::Fault,
        Category::Maintenance,
        Category::Information,
        Category::Alert,
    ];

    /// Category of the table `code` would be found in, if any.
    pub fn of(code: &str) -> Option<Self> {
        Self::of_normalized(&normalize(code))
    }

    fn of_normalized(code: &str) -> Option<Self> {
        let category = match code.as_bytes() {
            [b'S', b'.', ..] => Self::Status,
            [b'F', b'.', ..] => Self::Fault,
            [b'P', b'.', ..] => Self::Maintenance,
            [b'I', b'.', ..] => Self::Information,
            [b'A', b'.', ..] => Self::Alert,
            _ => return None,
        };
        tracing::trace!(code, %category, "dispatched code");
        Some(category)
    }

    pub const fn prefix(self) -> u8 {
        match self {
            Self::Status => b'S',
            Self::Fault => b'F',
            Self::Maintenance => b'P',
            Self::Information => b'I',
            Self::Alert => b'A',
        }
    }

    pub fn table(self) -> &'static CodeTable {
        match self {
            Self::Status => &STATUS,
            Self::Fault => &FAULT,
            Self::Maintenance => &MAINTENANCE,
            Self::Information => &INFORMATION,
            Self::Alert => &ALERT,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Appended to codes with a known prefix that are missing from the table.
    pub const fn unknown_suffix(self) -> &'static str {
        match self {
            Self::Status => " - Unbekannter Statuscode",
            Self::Fault => " - Unbekannter Fehlercode",
            Self::Maintenance => " - Unbekannter Wartungscode",
            Self::Information => " - Unbekannter Informationscode",
            Self::Alert => " - Unbekannter Alarmcode",
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Unknown,
}

impl Severity {
    pub fn of(code: &str) -> Self {
        Self::of_normalized(&normalize(code))
    }

    fn of_normalized(code: &str) -> Self {
        match Category::of_normalized(code) {
            Some(Category::Status) if WARNING_STATUS_CODES.contains(&code) => Self::Warning,
            Some(Category::Status | Category::Information) => Self::Info,
            Some(Category::Maintenance | Category::Alert) => Self::Warning,
            Some(Category::Fault) => Self::Error,
            None => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A table of codes sharing one prefix.
pub struct CodeTable {
    category: Category,
    entries: &'static [(&'static str, &'static str)],
}

impl CodeTable {
    pub(crate) const fn new(
        category: Category,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        let prefix = category.prefix();
        let mut index = 0;
        while index < entries.len() {
            let code = entries[index].0.as_bytes();
            if code.len() < 3 || code[0] != prefix || code[1] != b'.' {
                panic!("code does not start with the prefix of its table!");
            }
            let mut digit = 2;
            while digit < code.len() {
                if !code[digit].is_ascii_digit() {
                    panic!("code number is not a decimal number!");
                }
                digit += 1;
            }
            if index > 0 && !precedes(entries[index - 1].0.as_bytes(), code) {
                panic!("codes are not sorted (or have duplicate values)!");
            }
            index += 1;
        }
        Self { category, entries }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Description of the exact, already normalized, `code`.
    pub fn get(&self, code: &str) -> Option<&'static str> {
        let index = self.entries.binary_search_by(|(key, _)| key_order(key, code)).ok()?;
        Some(self.entries[index].1)
    }

    /// `(code, description)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = CodeEntry> + '_ {
        let category = self.category;
        self.iter().map(move |(code, description)| CodeEntry {
            code,
            category,
            severity: Severity::of_normalized(code),
            description,
        })
    }
}

fn key_order(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// `const` version of `key_order(a, b) == Ordering::Less`.
const fn precedes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return a.len() < b.len();
    }
    let mut index = 0;
    while index < a.len() {
        if a[index] != b[index] {
            return a[index] < b[index];
        }
        index += 1;
    }
    false
}

/// A single known code along with its classification.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct CodeEntry {
    pub code: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub description: &'static str,
}

impl CodeEntry {
    /// Every known code, status codes first, then faults, maintenance, information and alerts.
    pub fn all() -> impl Iterator<Item = Self> {
        Category::ALL.into_iter().flat_map(|category| category.table().entries())
    }

    pub fn is_match(&self, pattern: &str) -> bool {
        let pattern = to_upper(pattern);
        self.code.contains(&pattern) || to_upper(self.description).contains(&pattern)
    }
}

/// Upper cases one character at a time. Characters whose upper case form is longer than a
/// single character (`ß`, `ﬁ`) are kept as they are.
fn to_upper(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

/// The form of `code` all lookups operate on: surrounding whitespace removed, upper case.
pub fn normalize(code: &str) -> String {
    to_upper(code.trim())
}

/// Human readable (German) description of `code`.
///
/// Codes with a known prefix that are not in the table are described as unknown codes of that
/// category. Anything else is returned normalized but otherwise unchanged.
pub fn lookup_description(code: &str) -> Cow<'static, str> {
    let code = normalize(code);
    let Some(category) = Category::of_normalized(&code) else {
        tracing::debug!(code = %code, "unrecognized code prefix");
        return Cow::Owned(code);
    };
    match category.table().get(&code) {
        Some(description) => Cow::Borrowed(description),
        None => {
            tracing::debug!(code = %code, %category, "code is not in the table");
            Cow::Owned(format!("{code}{}", category.unknown_suffix()))
        }
    }
}

/// One of `status`, `fault`, `maintenance`, `information`, `alert` or `unknown`.
pub fn classify_category(code: &str) -> &'static str {
    Category::of(code).map_or("unknown", Category::as_str)
}

/// One of `info`, `warning`, `error` or `unknown`.
pub fn classify_severity(code: &str) -> &'static str {
    Severity::of(code).as_str()
}
