use crate::domain::values::agreement_status::AgreementStatus;
use crate::domain::values::agreement_type::AgreementType;
use crate::domain::values::document_kind::DocumentKind;
use crate::domain::values::filter_category::FilterCategory;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agreement {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub agreement_type: AgreementType,
    pub domain: String,
    pub country: String,
    pub country_code: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: AgreementStatus,
    pub signature_date: NaiveDate,
    pub partners: Vec<String>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub url: String,
    pub size: String,
}

impl Agreement {
    /// `start_date <= end_date`. Seed data is expected to satisfy this.
    pub fn has_valid_period(&self) -> bool {
        self.start_date <= self.end_date
    }

    /// Length of the agreement in whole years, rounded up.
    pub fn duration_years(&self) -> i64 {
        let days = (self.end_date - self.start_date).num_days();
        if days <= 0 {
            return 0;
        }
        (days + 364) / 365
    }

    pub fn start_year(&self) -> i32 {
        self.start_date.year()
    }

    /// The value this agreement is filtered and grouped by for `category`.
    pub fn value_for(&self, category: FilterCategory) -> &str {
        match category {
            FilterCategory::Types => self.agreement_type.label(),
            FilterCategory::Domains => &self.domain,
            FilterCategory::Countries => &self.country,
            FilterCategory::Status => self.status.label(),
        }
    }
}
