//! Tabular export of result records.

use crate::pipeline::ResultRecord;

/// Export columns, in order.
pub const EVALUATION_COLUMNS: [&str; 10] = [
    "article_id",
    "word_count",
    "target_range",
    "fkgl",
    "fre",
    "entity_coverage",
    "missing_numbers",
    "hallucination_flag",
    "risk_level",
    "escalate",
];

/// Renders `records` as CSV with a header row.
///
/// Fields containing a comma, quote or line break are quoted with inner quotes
/// doubled. Booleans are written `True`/`False` and whole floats keep one
/// decimal (`1.0`).
pub fn evaluation_csv(records: &[ResultRecord]) -> String {
    let mut out = EVALUATION_COLUMNS.join(",");
    out.push('\n');

    for record in records {
        let row = [
            quote(&record.article_id),
            record.word_count.to_string(),
            quote(&record.target_range),
            float(record.fkgl),
            float(record.fre),
            float(record.entity_coverage),
            boolean(record.missing_numbers).to_string(),
            boolean(record.hallucination_flag).to_string(),
            record.risk_level.to_string(),
            boolean(record.escalate).to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn boolean(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
