//! Company lookup and list filtering/sorting.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::models::company::CompanyRecord;

/// Filter criteria for the company list. All active criteria AND-combine;
/// an absent criterion matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyFilters {
    /// Case-insensitive substring on the company name.
    pub search: Option<String>,
    /// Exact membership in the record's engagement category set.
    pub engagement_type: Option<String>,
    /// Case-insensitive substring against any offered role title.
    pub role: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CompanyName,
    /// Reads `compensation.ctc_lpa`, missing values sort as 0.
    Ctc,
    /// Reads `selection_stats.students_selected`, missing values sort as 0.
    Students,
}

impl SortField {
    /// Parse a query-string token; unknown tokens fall back to the name sort.
    pub fn parse(token: &str) -> Self {
        match token {
            "ctc" => Self::Ctc,
            "students" => Self::Students,
            _ => Self::CompanyName,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Resolved sort order for the company list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Sort parameters as they arrive on the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SortParams {
    pub sort_by: Option<String>,
    pub order: Option<SortDirection>,
}

impl SortParams {
    pub fn spec(&self) -> SortSpec {
        SortSpec {
            field: self
                .sort_by
                .as_deref()
                .map(SortField::parse)
                .unwrap_or_default(),
            direction: self.order.unwrap_or_default(),
        }
    }
}

/// Case-insensitive exact match on the company name, after trimming.
pub fn find_by_name<'a>(
    records: &'a [CompanyRecord],
    name: &str,
) -> Option<&'a CompanyRecord> {
    let needle = name.trim().to_lowercase();
    records
        .iter()
        .find(|r| r.company_name.to_lowercase() == needle)
}

/// Filter the records by the given criteria and sort the survivors.
///
/// Pure transform: the input slice is never mutated and identical inputs
/// always produce the same ordered output. The sort is stable, so records
/// tied on the sort key keep their store order.
pub fn filter_and_sort(
    records: &[CompanyRecord],
    filters: &CompanyFilters,
    sort: &SortSpec,
) -> Vec<CompanyRecord> {
    let search = filters
        .search
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_lowercase();
    let role = filters.role.as_deref().map(str::to_lowercase);

    let mut result: Vec<CompanyRecord> = records
        .iter()
        .filter(|r| search.is_empty() || r.company_name.to_lowercase().contains(&search))
        .filter(|r| {
            filters
                .engagement_type
                .as_deref()
                .map_or(true, |t| r.has_engagement(t))
        })
        .filter(|r| {
            role.as_deref()
                .map_or(true, |needle| r.role.iter().any(|x| x.to_lowercase().contains(needle)))
        })
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let ord = compare_on(sort.field, a, b);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    result
}

fn compare_on(field: SortField, a: &CompanyRecord, b: &CompanyRecord) -> Ordering {
    match field {
        SortField::CompanyName => a.company_name.cmp(&b.company_name),
        SortField::Ctc => a
            .ctc_lpa()
            .unwrap_or(0.0)
            .total_cmp(&b.ctc_lpa().unwrap_or(0.0)),
        SortField::Students => a
            .students_selected()
            .unwrap_or(0)
            .cmp(&b.students_selected().unwrap_or(0)),
    }
}
