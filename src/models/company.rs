//! Company hiring record and its nested optional structures.
//!
//! The source dataset is assembled from loosely structured announcements, so
//! almost every field is optional. Absent fields deserialize to explicit
//! defaults here; downstream code never has to null-check ad hoc.

use serde::{Deserialize, Deserializer, Serialize};

/// Engagement category labels used by the dataset.
pub const FULL_TIME: &str = "Full Time";
pub const INTERNSHIP: &str = "Internship";
pub const PPO: &str = "PPO";

/// One hiring company, as stored in the placement dataset.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompanyRecord {
    /// Unique (case-insensitively) within the dataset; not enforced at load.
    pub company_name: String,
    /// Engagement categories: "Full Time", "Internship", "PPO".
    #[serde(default, deserialize_with = "lenient_string_seq")]
    pub engagement_type: Vec<String>,
    #[serde(default)]
    pub compensation: Option<Compensation>,
    /// Per-role package variants, in source order.
    #[serde(default)]
    pub offer_profiles: Vec<OfferProfile>,
    #[serde(default)]
    pub eligibility: Option<Eligibility>,
    /// Role titles offered.
    #[serde(default, deserialize_with = "lenient_string_seq")]
    pub role: Vec<String>,
    #[serde(default)]
    pub selection_stats: Option<SelectionStats>,
    #[serde(default)]
    pub flags: Option<Flags>,
    #[serde(default)]
    pub timeline: Option<Timeline>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl CompanyRecord {
    /// Annual package for this company, if compensation data is present.
    pub fn ctc_lpa(&self) -> Option<f64> {
        self.compensation.as_ref().and_then(|c| c.ctc_lpa)
    }

    /// Number of students selected, if results are in.
    pub fn students_selected(&self) -> Option<u32> {
        self.selection_stats.as_ref().and_then(|s| s.students_selected)
    }

    /// Membership test on the engagement category set.
    pub fn has_engagement(&self, category: &str) -> bool {
        self.engagement_type.iter().any(|t| t == category)
    }
}

/// Compensation breakdown. All figures in lakhs per annum except the stipend.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Compensation {
    #[serde(default)]
    pub ctc_lpa: Option<f64>,
    #[serde(default)]
    pub base_lpa: Option<f64>,
    #[serde(default)]
    pub variable_lpa: Option<f64>,
    #[serde(default)]
    pub bonus_lpa: Option<f64>,
    #[serde(default)]
    pub stipend_monthly: Option<f64>,
}

/// Package variant for a specific role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferProfile {
    pub role: String,
    pub ctc_lpa: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Eligibility {
    #[serde(default, deserialize_with = "lenient_string_seq")]
    pub allowed_branches: Vec<String>,
    #[serde(default)]
    pub cgpa_cutoff: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SelectionStats {
    #[serde(default)]
    pub students_selected: Option<u32>,
    #[serde(default)]
    pub students_shortlisted: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Flags {
    #[serde(default)]
    pub is_withdrawn: bool,
    #[serde(default)]
    pub is_result_confirmed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Timeline {
    #[serde(default)]
    pub internship_duration_months: Option<f64>,
}

/// Display-only provenance kept from the extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Metadata {
    #[serde(default)]
    pub raw_messages: Vec<String>,
}

/// Accept a JSON array of strings; anything else (missing, null, a bare
/// string) reads as an empty sequence instead of failing the whole record.
fn lenient_string_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect()),
        _ => Ok(Vec::new()),
    }
}
