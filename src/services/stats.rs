//! Placement summary statistics for the dashboard overview.

use serde::Serialize;

use crate::models::company::{self, CompanyRecord};

/// Aggregated placement statistics for the main overview page.
///
/// Package statistics follow the per-company convention: one `ctc_lpa` value
/// per company with compensation data, never weighted by how many students
/// were selected there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Maximum `ctc_lpa` across all records; 0 with no compensation data.
    pub highest_package_lpa: f64,
    /// Mean `ctc_lpa`, rounded to 2 decimals; 0 with no compensation data.
    pub average_package_lpa: f64,
    /// Median `ctc_lpa`; the middle pair is averaged (2 decimals) for an
    /// even count. 0 with no compensation data.
    pub median_package_lpa: f64,
    pub total_offers: u64,
    pub total_students_placed: u64,
    /// All records, whether or not they carry compensation data.
    pub total_companies: usize,
    pub internship_count: usize,
    pub full_time_count: usize,
    pub ppo_count: usize,
    /// Every collected `ctc_lpa`, ascending. Raw on purpose: bucketing into
    /// display ranges belongs to the presentation layer.
    pub package_distribution: Vec<f64>,
}

/// Scan the records once and compute all summary statistics.
///
/// Pure and side-effect free; repeated calls over the same records return
/// identical results.
pub fn summarize(records: &[CompanyRecord]) -> SummaryStats {
    let mut highest = 0.0_f64;
    let mut sum = 0.0_f64;
    let mut packages: Vec<f64> = Vec::new();
    let mut students_placed = 0_u64;
    let mut internship_count = 0_usize;
    let mut full_time_count = 0_usize;
    let mut ppo_count = 0_usize;

    for record in records {
        if let Some(lpa) = record.ctc_lpa() {
            if lpa > highest {
                highest = lpa;
            }
            sum += lpa;
            packages.push(lpa);
        }

        if record.has_engagement(company::INTERNSHIP) {
            internship_count += 1;
        }
        if record.has_engagement(company::FULL_TIME) {
            full_time_count += 1;
        }
        if record.has_engagement(company::PPO) {
            ppo_count += 1;
        }

        if let Some(selected) = record.students_selected() {
            students_placed += u64::from(selected);
        }
    }

    packages.sort_by(f64::total_cmp);

    let average = if packages.is_empty() {
        0.0
    } else {
        round2(sum / packages.len() as f64)
    };

    SummaryStats {
        highest_package_lpa: highest,
        average_package_lpa: average,
        median_package_lpa: median(&packages),
        // Offers and placements both derive from the same selection sum.
        total_offers: students_placed,
        total_students_placed: students_placed,
        total_companies: records.len(),
        internship_count,
        full_time_count,
        ppo_count,
        package_distribution: packages,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Median of an ascending-sorted list: the raw middle value for an odd
/// length, the mean of the middle pair rounded to 2 decimals for an even
/// length, 0 when empty.
fn median(sorted: &[f64]) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        round2((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}
