use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

/// Scheme categories shown on the dashboard and used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeCategory {
    Student,
    Farmer,
    Women,
    Housing,
    Health,
    Employment,
    Other,
}

impl SchemeCategory {
    pub const ALL: [SchemeCategory; 7] = [
        SchemeCategory::Student,
        SchemeCategory::Farmer,
        SchemeCategory::Women,
        SchemeCategory::Housing,
        SchemeCategory::Health,
        SchemeCategory::Employment,
        SchemeCategory::Other,
    ];

    pub fn as_db(&self) -> &'static str {
        match self {
            SchemeCategory::Student => "student",
            SchemeCategory::Farmer => "farmer",
            SchemeCategory::Women => "women",
            SchemeCategory::Housing => "housing",
            SchemeCategory::Health => "health",
            SchemeCategory::Employment => "employment",
            SchemeCategory::Other => "other",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "student" => Some(SchemeCategory::Student),
            "farmer" => Some(SchemeCategory::Farmer),
            "women" => Some(SchemeCategory::Women),
            "housing" => Some(SchemeCategory::Housing),
            "health" => Some(SchemeCategory::Health),
            "employment" => Some(SchemeCategory::Employment),
            "other" => Some(SchemeCategory::Other),
            _ => None,
        }
    }
}

/// Gender restriction on a scheme, or the gender a user reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Gender {
    #[default]
    All,
    Female,
    Male,
}

impl Gender {
    pub fn as_db(&self) -> &'static str {
        match self {
            Gender::All => "All",
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "All" => Some(Gender::All),
            "Female" => Some(Gender::Female),
            "Male" => Some(Gender::Male),
            _ => None,
        }
    }
}

/// Annual family income bands used by scheme rules. The display strings
/// double as the stored database values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IncomeRange {
    #[default]
    #[serde(rename = "All")]
    All,
    #[serde(rename = "Below 2.5 Lakh")]
    Below2HalfLakh,
    #[serde(rename = "Below 3 Lakh")]
    Below3Lakh,
    #[serde(rename = "Below 7.5 Lakh")]
    Below7HalfLakh,
    #[serde(rename = "Below 8 Lakh")]
    Below8Lakh,
    #[serde(rename = "Below 18 Lakh")]
    Below18Lakh,
}

impl IncomeRange {
    pub const ALL: [IncomeRange; 6] = [
        IncomeRange::All,
        IncomeRange::Below2HalfLakh,
        IncomeRange::Below3Lakh,
        IncomeRange::Below7HalfLakh,
        IncomeRange::Below8Lakh,
        IncomeRange::Below18Lakh,
    ];

    pub fn as_db(&self) -> &'static str {
        match self {
            IncomeRange::All => "All",
            IncomeRange::Below2HalfLakh => "Below 2.5 Lakh",
            IncomeRange::Below3Lakh => "Below 3 Lakh",
            IncomeRange::Below7HalfLakh => "Below 7.5 Lakh",
            IncomeRange::Below8Lakh => "Below 8 Lakh",
            IncomeRange::Below18Lakh => "Below 18 Lakh",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "All" => Some(IncomeRange::All),
            "Below 2.5 Lakh" => Some(IncomeRange::Below2HalfLakh),
            "Below 3 Lakh" => Some(IncomeRange::Below3Lakh),
            "Below 7.5 Lakh" => Some(IncomeRange::Below7HalfLakh),
            "Below 8 Lakh" => Some(IncomeRange::Below8Lakh),
            "Below 18 Lakh" => Some(IncomeRange::Below18Lakh),
            _ => None,
        }
    }

    /// Upper limit in rupees, `None` for unbounded.
    pub fn limit_inr(&self) -> Option<u64> {
        match self {
            IncomeRange::All => None,
            IncomeRange::Below2HalfLakh => Some(250_000),
            IncomeRange::Below3Lakh => Some(300_000),
            IncomeRange::Below7HalfLakh => Some(750_000),
            IncomeRange::Below8Lakh => Some(800_000),
            IncomeRange::Below18Lakh => Some(1_800_000),
        }
    }
}

/// User-entered demographic data. Owned by the browser client and persisted
/// as JSON in localStorage under `userProfile`; the server never stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<SchemeCategory>,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub income_range: IncomeRange,
    #[serde(default)]
    pub gender: Gender,
}

/// A government welfare scheme record. Read-only on the client; the `_hi` /
/// `_mr` variants hold Hindi and Marathi text and fall back to the base
/// (English) field when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub id: i64,
    pub category: SchemeCategory,
    pub name: String,
    pub name_hi: Option<String>,
    pub name_mr: Option<String>,
    pub description: String,
    pub description_hi: Option<String>,
    pub description_mr: Option<String>,
    pub benefits: String,
    pub benefits_hi: Option<String>,
    pub benefits_mr: Option<String>,
    pub eligibility: String,
    pub eligibility_hi: Option<String>,
    pub eligibility_mr: Option<String>,
    pub documents: String,
    pub documents_hi: Option<String>,
    pub documents_mr: Option<String>,
    pub how_to_apply: String,
    pub how_to_apply_hi: Option<String>,
    pub how_to_apply_mr: Option<String>,
    pub official_link: String,
    /// ISO `YYYY-MM-DD`, absent for rolling schemes.
    pub deadline: Option<String>,
    pub min_age: Option<i64>,
    pub max_age: Option<i64>,
    pub gender: Gender,
    pub income_range: IncomeRange,
}

fn pick<'a>(base: &'a str, variant: &'a Option<String>) -> &'a str {
    match variant {
        Some(v) if !v.trim().is_empty() => v,
        _ => base,
    }
}

impl Scheme {
    pub fn name(&self, lang: &str) -> &str {
        match lang {
            "hi" => pick(&self.name, &self.name_hi),
            "mr" => pick(&self.name, &self.name_mr),
            _ => &self.name,
        }
    }

    pub fn description(&self, lang: &str) -> &str {
        match lang {
            "hi" => pick(&self.description, &self.description_hi),
            "mr" => pick(&self.description, &self.description_mr),
            _ => &self.description,
        }
    }

    pub fn benefits(&self, lang: &str) -> &str {
        match lang {
            "hi" => pick(&self.benefits, &self.benefits_hi),
            "mr" => pick(&self.benefits, &self.benefits_mr),
            _ => &self.benefits,
        }
    }

    pub fn eligibility(&self, lang: &str) -> &str {
        match lang {
            "hi" => pick(&self.eligibility, &self.eligibility_hi),
            "mr" => pick(&self.eligibility, &self.eligibility_mr),
            _ => &self.eligibility,
        }
    }

    pub fn documents(&self, lang: &str) -> &str {
        match lang {
            "hi" => pick(&self.documents, &self.documents_hi),
            "mr" => pick(&self.documents, &self.documents_mr),
            _ => &self.documents,
        }
    }

    pub fn how_to_apply(&self, lang: &str) -> &str {
        match lang {
            "hi" => pick(&self.how_to_apply, &self.how_to_apply_hi),
            "mr" => pick(&self.how_to_apply, &self.how_to_apply_mr),
            _ => &self.how_to_apply,
        }
    }

    /// Deadline formatted as e.g. `31 Dec 2024`, or `None` when missing or
    /// unparseable.
    pub fn deadline_display(&self) -> Option<String> {
        format_deadline(self.deadline.as_deref()?)
    }
}

/// Format an ISO `YYYY-MM-DD` date for display as `31 Dec 2024`.
pub fn format_deadline(iso: &str) -> Option<String> {
    let parsed = Date::parse(iso, format_description!("[year]-[month]-[day]")).ok()?;
    parsed
        .format(format_description!(
            "[day padding:none] [month repr:short] [year]"
        ))
        .ok()
}

/// Outcome of the server-side eligibility rule evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub eligible: bool,
    pub reasons: Vec<String>,
}

/// A deadline reminder, joined server-side with the scheme it points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub scheme_id: i64,
    pub name: String,
    pub deadline: Option<String>,
    /// ISO `YYYY-MM-DD`, user-chosen.
    pub reminder_date: String,
}

/// Chatbot answer for one user message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub language: String,
}
