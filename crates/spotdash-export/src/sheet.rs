//! XLSX workbook writer: one sheet per brand in basket order.

use std::collections::HashSet;

use rust_xlsxwriter::{Format, Workbook};

use crate::layout::{report_rows, Cell};
use crate::{BrandReport, ExportError};

/// XLSX caps sheet names at 31 characters.
const SHEET_NAME_MAX: usize = 31;

/// Characters Excel refuses in a sheet name.
const FORBIDDEN: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Turns a brand name into a legal sheet name: forbidden characters become
/// spaces and the result is truncated to 31 characters, counted in chars so
/// a multibyte brand never splits mid-codepoint.
#[must_use]
pub fn sheet_name(brand: &str) -> String {
    let cleaned: String = brand
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { ' ' } else { c })
        .take(SHEET_NAME_MAX)
        .collect();
    if cleaned.trim().is_empty() {
        "Marca".to_string()
    } else {
        cleaned
    }
}

/// Like [`sheet_name`], but unique within one workbook: brands whose names
/// collide after sanitizing and truncating (Excel compares sheet names
/// case-insensitively) get a `~2`, `~3`, ... suffix inside the 31-char
/// budget.
fn unique_sheet_name(brand: &str, used: &mut HashSet<String>) -> String {
    let base = sheet_name(brand);
    if used.insert(base.to_lowercase()) {
        return base;
    }
    for n in 2.. {
        let suffix = format!("~{n}");
        let keep = SHEET_NAME_MAX - suffix.chars().count();
        let mut candidate: String = base.chars().take(keep).collect();
        candidate.push_str(&suffix);
        if used.insert(candidate.to_lowercase()) {
            return candidate;
        }
    }
    unreachable!("suffix space is unbounded")
}

pub(crate) fn write_workbook(reports: &[BrandReport]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let heading = Format::new().set_bold();
    let mut used_names = HashSet::new();

    for report in reports {
        let sheet = workbook.add_worksheet();
        sheet.set_name(unique_sheet_name(&report.brand, &mut used_names))?;
        sheet.set_column_width(0, 32)?;
        sheet.set_column_width(1, 16)?;

        for (row_idx, row) in report_rows(report).iter().enumerate() {
            let row_idx = u32::try_from(row_idx).unwrap_or(u32::MAX);
            for (col_idx, cell) in row.iter().enumerate() {
                let col_idx = u16::try_from(col_idx).unwrap_or(u16::MAX);
                match cell {
                    Cell::Text(text) if col_idx == 0 => {
                        sheet.write_string_with_format(row_idx, col_idx, text, &heading)?;
                    }
                    Cell::Text(text) => {
                        sheet.write_string(row_idx, col_idx, text)?;
                    }
                    Cell::Number(value) => {
                        sheet.write_number(row_idx, col_idx, *value)?;
                    }
                    Cell::Empty => {}
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotdash_engine::AggregateResult;

    fn report(brand: &str) -> BrandReport {
        BrandReport {
            brand: brand.to_string(),
            result: AggregateResult::default(),
        }
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn sheet_name_truncates_to_31_chars() {
        let long = "Compañía de Bebidas y Alimentos del Sur";
        let name = sheet_name(long);
        assert_eq!(name.chars().count(), 31);
        assert!(long.starts_with(&name));
    }

    #[test]
    fn sheet_name_replaces_forbidden_characters() {
        assert_eq!(sheet_name("A/B [test]"), "A B  test ");
        assert_eq!(sheet_name("???"), "Marca");
    }

    #[test]
    fn colliding_truncations_get_distinct_suffixes() {
        let mut used = HashSet::new();
        let sur = unique_sheet_name("Compañía de Bebidas y Alimentos del Sur", &mut used);
        let norte = unique_sheet_name("Compañía de Bebidas y Alimentos del Norte", &mut used);
        assert_ne!(sur, norte);
        assert_eq!(sur.chars().count(), 31);
        assert_eq!(norte.chars().count(), 31);
        assert!(norte.ends_with("~2"));

        // Collisions are case-insensitive, like Excel's own check.
        let upper = unique_sheet_name("COMPAÑÍA DE BEBIDAS Y ALIMENTOS DEL ESTE", &mut used);
        assert!(upper.ends_with("~3"));
    }

    #[test]
    fn workbook_accepts_brands_sharing_a_truncated_name() {
        let bytes = write_workbook(&[
            report("Compañía de Bebidas y Alimentos del Sur"),
            report("Compañía de Bebidas y Alimentos del Norte"),
        ])
        .unwrap();
        assert!(contains(&bytes, b"xl/worksheets/sheet1.xml"));
        assert!(contains(&bytes, b"xl/worksheets/sheet2.xml"));
    }

    #[test]
    fn workbook_has_one_sheet_per_brand() {
        let bytes =
            write_workbook(&[report("Marca Uno"), report("Marca Dos")]).unwrap();
        // Zip local file headers carry the member names in the clear.
        assert!(contains(&bytes, b"xl/worksheets/sheet1.xml"));
        assert!(contains(&bytes, b"xl/worksheets/sheet2.xml"));
        assert!(!contains(&bytes, b"xl/worksheets/sheet3.xml"));
    }

    #[test]
    fn workbook_bytes_are_a_zip_archive() {
        let bytes = write_workbook(&[report("ACME")]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
