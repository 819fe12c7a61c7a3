use crate::domain::AnalysisResult;

pub const EXPORT_FILE_NAME: &str = "fixed-accessible-document.html";

const DEFAULT_LANGUAGE: &str = "en";

const EXPORT_STYLESHEET: &str = r#"        body {
            font-family: system-ui, -apple-system, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 0 auto;
            padding: 2rem;
            color: #1a202c;
            background-color: #fff;
        }
        h1, h2, h3, h4, h5, h6 { margin-top: 2em; margin-bottom: 0.5em; line-height: 1.2; color: #2d3748; }
        h1 { font-size: 2.25rem; }
        h2 { font-size: 1.875rem; border-bottom: 2px solid #e2e8f0; padding-bottom: 0.5rem; }
        p { margin-bottom: 1.25em; }
        ul, ol { margin-bottom: 1.25em; padding-left: 1.5em; }
        li { margin-bottom: 0.5em; }
        table { width: 100%; border-collapse: collapse; margin: 1.5em 0; }
        th, td { border: 1px solid #cbd5e0; padding: 0.75rem; text-align: left; }
        th { background-color: #f7fafc; font-weight: bold; }
        img { max-width: 100%; height: auto; display: block; margin: 1.5em 0; }
        blockquote { border-left: 4px solid #4299e1; margin: 1.5em 0; padding-left: 1em; color: #4a5568; }
        nav { background-color: #f7fafc; padding: 1.5rem; border-radius: 0.5rem; margin-bottom: 2rem; border: 1px solid #e2e8f0; }
        nav h2 { margin-top: 0; font-size: 1.25rem; border-bottom: none; }
        nav ul { margin-bottom: 0; }
        a { color: #3182ce; text-decoration: underline; }
        a:hover { color: #2c5282; }"#;

/// Wraps the remediated fragment in a complete, styled HTML document.
pub fn render_standalone_document(result: &AnalysisResult) -> String {
    let language = document_language(&result.metadata.language);

    format!(
        r#"<!DOCTYPE html>
<html lang="{language}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Accessible Document - Fixed Version</title>
    <style>
{EXPORT_STYLESHEET}
    </style>
</head>
<body>
    {body}
</body>
</html>"#,
        body = result.fixed_accessible_version,
    )
}

// The language lands inside an attribute; anything that is not a plausible
// BCP 47 tag falls back to the default.
fn document_language(language: &str) -> &str {
    let trimmed = language.trim();
    let plausible = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if plausible { trimmed } else { DEFAULT_LANGUAGE }
}
