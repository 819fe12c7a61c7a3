use serde::{Deserialize, Serialize};

use super::accessibility_issue::{AccessibilityIssue, Severity};
use super::accessibility_score::AccessibilityScore;
use super::compliance_item::ComplianceItem;

/// Structured audit output. Every field is required when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub accessibility_score: AccessibilityScore,
    pub compliance_breakdown: Vec<ComplianceItem>,
    pub issues_found: Vec<AccessibilityIssue>,
    /// Semantic HTML fragment opening with a `<nav>` table of contents.
    pub fixed_accessible_version: String,
    /// Markdown at a grade 6-8 reading level.
    pub simplified_version: String,
    pub audio_transcript: String,
    pub metadata: AnalysisMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub language: String,
    pub wcag_version: String,
    pub aoda_compliance: bool,
}

impl AnalysisResult {
    pub fn passing_categories(&self) -> impl Iterator<Item = &ComplianceItem> {
        self.compliance_breakdown.iter().filter(|item| item.is_pass())
    }

    pub fn failing_categories(&self) -> impl Iterator<Item = &ComplianceItem> {
        self.compliance_breakdown.iter().filter(|item| !item.is_pass())
    }

    pub fn issues_by_severity(&self, severity: Severity) -> impl Iterator<Item = &AccessibilityIssue> {
        self.issues_found
            .iter()
            .filter(move |issue| issue.severity == severity)
    }

    pub fn is_fully_compliant(&self) -> bool {
        self.compliance_breakdown.iter().all(ComplianceItem::is_pass)
    }
}
