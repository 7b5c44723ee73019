use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::error::SentinelError;
use crate::SentinelResult;

// ---------------------------------------------------------------------------
// Builtin tables
// ---------------------------------------------------------------------------

/// Jurisdictions considered high money-laundering risk.
const HIGH_RISK_COUNTRIES: &[&str] = &[
    "RU", "IR", "KP", "SY", "CU", "VE", "MM", "BY", "CD", "CF", "LY", "SO", "SS", "YE", "ZW",
];

/// Jurisdictions commonly used for asset concealment.
const TAX_HAVENS: &[&str] = &[
    "KY", "VG", "PA", "CH", "LI", "MC", "AD", "JE", "GG", "IM", "BM", "BS", "BZ", "LU", "MT",
    "CY", "SG", "HK", "AE",
];

/// FATF grey list: increased monitoring, short of full sanctions.
const GREY_LIST_COUNTRIES: &[&str] = &[
    "NG", "PK", "PH", "TZ", "JM", "AL", "BB", "BF", "CM", "HR", "GH", "GI", "HT", "JO", "ML",
    "MZ", "SN", "UG", "ZA",
];

/// Scanned against the lowercased customer name, front to back. The
/// first match wins, so the order here is part of the contract.
const SANCTIONS_KEYWORDS: &[&str] = &[
    "russia",
    "russian",
    "moscow",
    "iran",
    "iranian",
    "tehran",
    "korea",
    "pyongyang",
    "syria",
    "syrian",
];

/// PEP indicators, same first-match-wins scan as the sanctions list.
const PEP_INDICATOR_KEYWORDS: &[&str] = &[
    "minister",
    "senator",
    "governor",
    "ambassador",
    "general",
    "president",
    "royal",
    "sheikh",
    "deputy minister",
];

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

/// Static lookup tables consulted by the rule stages. Loaded once,
/// read-only afterwards; the evaluation logic never depends on where
/// the tables came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub high_risk_countries: BTreeSet<String>,
    pub tax_havens: BTreeSet<String>,
    pub grey_list_countries: BTreeSet<String>,
    pub sanctions_keywords: Vec<String>,
    pub pep_indicator_keywords: Vec<String>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        ReferenceData {
            high_risk_countries: to_code_set(HIGH_RISK_COUNTRIES),
            tax_havens: to_code_set(TAX_HAVENS),
            grey_list_countries: to_code_set(GREY_LIST_COUNTRIES),
            sanctions_keywords: to_keyword_list(SANCTIONS_KEYWORDS),
            pep_indicator_keywords: to_keyword_list(PEP_INDICATOR_KEYWORDS),
        }
    }
}

impl ReferenceData {
    /// Process-wide builtin tables. Initialized on first use and
    /// shared by every assessment that does not supply its own.
    pub fn builtin() -> &'static ReferenceData {
        static BUILTIN: OnceLock<ReferenceData> = OnceLock::new();
        BUILTIN.get_or_init(ReferenceData::default)
    }

    /// Parse reference tables from a JSON document, normalizing codes
    /// to uppercase and keywords to lowercase.
    pub fn from_json_str(json: &str) -> SentinelResult<ReferenceData> {
        let raw: ReferenceData = serde_json::from_str(json)?;
        raw.normalized()
    }

    /// Load reference tables from a JSON file on disk.
    pub fn from_json_file(path: &std::path::Path) -> SentinelResult<ReferenceData> {
        let contents = std::fs::read_to_string(path).map_err(|e| SentinelError::InvalidInput {
            field: "reference".to_string(),
            reason: format!("cannot read '{}': {}", path.display(), e),
        })?;
        ReferenceData::from_json_str(&contents)
    }

    fn normalized(self) -> SentinelResult<ReferenceData> {
        let normalized = ReferenceData {
            high_risk_countries: normalize_codes(self.high_risk_countries)?,
            tax_havens: normalize_codes(self.tax_havens)?,
            grey_list_countries: normalize_codes(self.grey_list_countries)?,
            sanctions_keywords: normalize_keywords("sanctions_keywords", self.sanctions_keywords)?,
            pep_indicator_keywords: normalize_keywords(
                "pep_indicator_keywords",
                self.pep_indicator_keywords,
            )?,
        };
        Ok(normalized)
    }
}

fn to_code_set(codes: &[&str]) -> BTreeSet<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

fn to_keyword_list(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| k.to_string()).collect()
}

fn normalize_codes(codes: BTreeSet<String>) -> SentinelResult<BTreeSet<String>> {
    codes
        .into_iter()
        .map(|c| {
            let code = c.trim().to_uppercase();
            if code.is_empty() {
                Err(SentinelError::InvalidInput {
                    field: "country_code".to_string(),
                    reason: "Reference tables must not contain empty country codes".to_string(),
                })
            } else {
                Ok(code)
            }
        })
        .collect()
}

fn normalize_keywords(field: &str, keywords: Vec<String>) -> SentinelResult<Vec<String>> {
    keywords
        .into_iter()
        .map(|k| {
            let keyword = k.trim().to_lowercase();
            if keyword.is_empty() {
                Err(SentinelError::InvalidInput {
                    field: field.to_string(),
                    reason: "Keyword lists must not contain empty entries".to_string(),
                })
            } else {
                Ok(keyword)
            }
        })
        .collect()
}
