mod accessibility_issue;
mod accessibility_score;
mod analysis_request;
mod analysis_result;
mod compliance_item;
mod decoded_audio;

pub use accessibility_issue::{AccessibilityIssue, Severity};
pub use accessibility_score::{AccessibilityScore, ScoreBand};
pub use analysis_request::{
    AnalysisRequest, AnalysisRequestError, BinaryMimeType, strip_data_url,
};
pub use analysis_result::{AnalysisMetadata, AnalysisResult};
pub use compliance_item::{ComplianceItem, ComplianceStatus};
pub use decoded_audio::{DecodedAudio, Pcm16Error};
