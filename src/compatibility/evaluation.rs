//! Full build evaluation

use serde::Serialize;

use crate::{
    builds::Build,
    catalog::PartLookup,
    parts::{PartCategory, PartSpec},
};

use super::{Conflict, Issue, Selection, Severity, rules};

/// Overall verdict of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// No issues
    #[default]
    Success,

    /// Only warnings
    Warning,

    /// At least one error
    Error,
}

/// Every issue found in a build. Derived on demand and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompatibilityReport {
    /// Overall verdict
    pub status: ReportStatus,

    /// Issues in the order they were found
    pub issues: Vec<Issue>,
}

impl CompatibilityReport {
    /// Build a report, deriving the status from the issues' severities.
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        let status = if issues.iter().any(|issue| issue.severity == Severity::Error) {
            ReportStatus::Error
        } else if issues.is_empty() {
            ReportStatus::Success
        } else {
            ReportStatus::Warning
        };

        Self { status, issues }
    }

    /// Whether nothing was found.
    pub fn is_success(&self) -> bool {
        self.status == ReportStatus::Success
    }

    /// Issues of one severity.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(move |issue| issue.severity == severity)
    }
}

/// Evaluate a whole build, collecting every issue rather than stopping at the first.
///
/// Items the catalog cannot resolve are reported and otherwise skipped. Pairings use the first
/// part of each single-instance category, except memory, where every RAM item is checked against
/// the first motherboard.
pub fn evaluate_build(build: &Build, catalog: &impl PartLookup) -> CompatibilityReport {
    let mut issues: Vec<Issue> = Vec::new();
    let mut selection = Selection::default();

    for item in build.iter() {
        match catalog.part(item.part) {
            Some(part) => selection.push(part, item.quantity.get()),
            None => issues.push(Conflict::MissingPart { part: item.part }.into()),
        }
    }

    issues.extend(
        PartCategory::SINGLE_INSTANCE
            .into_iter()
            .filter_map(|category| rules::single_instance(category, selection.count(category))),
    );

    let cpu = selection.first(PartSpec::as_cpu);
    let board = selection.first(PartSpec::as_motherboard);
    let gpu = selection.first(PartSpec::as_gpu);
    let psu = selection.first(PartSpec::as_psu);
    let case = selection.first(PartSpec::as_case);

    if let (Some(cpu), Some(board)) = (cpu, board) {
        issues.extend(rules::socket(cpu, board));
    }

    if let Some(board) = board {
        issues.extend(
            selection
                .all(PartSpec::as_ram)
                .filter_map(|ram| rules::memory_type(ram, board)),
        );
    }

    if let (Some(board), Some(case)) = (board, case) {
        issues.extend(rules::form_factor(board, case));
    }

    if let (Some(gpu), Some(case)) = (gpu, case) {
        issues.extend(rules::gpu_clearance(gpu, case));
    }

    if let Some(psu) = psu {
        issues.extend(rules::power_budget(psu, selection.draw()));
    }

    CompatibilityReport::from_issues(issues)
}
