//! Output artifact naming.

/// Extension of every output workbook.
pub const OUTPUT_EXTENSION: &str = "xlsx";

/// Extension the legacy exports carry.
pub const SOURCE_EXTENSION: &str = "asc";

/// Derives the workbook name for a source file name.
///
/// A trailing `.asc` extension is replaced with `.xlsx` regardless of case.
/// Names without that extension get `.xlsx` appended, so the derivation is
/// total and deterministic for stray inputs.
pub fn output_file_name(source_name: &str) -> String {
    let len = source_name.len();
    if len >= 4 && source_name.is_char_boundary(len - 4) {
        let (stem, ext) = source_name.split_at(len - 4);
        if ext.eq_ignore_ascii_case(".asc") {
            return format!("{stem}.{OUTPUT_EXTENSION}");
        }
    }
    format!("{source_name}.{OUTPUT_EXTENSION}")
}
