//! Plain text rendering for a single record.

use crate::model::ResumeRecord;

/// Indentation for continuation lines of multi-line fields.
const CONTINUATION_INDENT: &str = "  ";

/// Convert a record to `Key: value` lines.
///
/// Multi-line values continue on indented lines below their key.
pub fn to_text(record: &ResumeRecord) -> String {
    let mut output = String::new();

    for (name, value) in record.fields() {
        let mut lines = value.lines();
        output.push_str(name);
        output.push(':');
        if let Some(first) = lines.next() {
            output.push(' ');
            output.push_str(first);
        }
        output.push('\n');

        for line in lines {
            output.push_str(CONTINUATION_INDENT);
            output.push_str(line);
            output.push('\n');
        }
    }

    output
}
