//! Normalization of the multimedia subset for tabular display.

use spotdash_core::{parse_amount, sentinel, SpotRecord};

use crate::result::MultimediaRow;

/// The subset of rows carrying a multimedia reference, with every field
/// mapped to a defined value.
///
/// The presentation reads all fields unconditionally, so absent text
/// fields become empty strings (agencies keep their sentinel labels) and
/// the amount is coerced to a number.
#[must_use]
pub fn multimedia_rows(rows: &[SpotRecord]) -> Vec<MultimediaRow> {
    rows.iter()
        .filter(|row| row.has_multimedia())
        .map(normalize)
        .collect()
}

fn normalize(row: &SpotRecord) -> MultimediaRow {
    let text = |field: &Option<String>| field.clone().unwrap_or_default();
    MultimediaRow {
        media_agency: SpotRecord::text_or(&row.media_agency, sentinel::MEDIA_AGENCY).to_string(),
        creative_agency: SpotRecord::text_or(&row.creative_agency, sentinel::CREATIVE_AGENCY)
            .to_string(),
        uuid: text(&row.uuid),
        date: text(&row.date),
        ad_first_appearance: text(&row.ad_first_appearance),
        hour: text(&row.hour),
        minute: text(&row.minute),
        second: text(&row.second),
        duration: text(&row.duration),
        value: parse_amount(row.value.as_deref()),
        quality: text(&row.quality),
        category: text(&row.category),
        industry: text(&row.industry),
        support: text(&row.support),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_to_rows_with_a_uuid() {
        let rows = vec![
            SpotRecord {
                uuid: Some("u-1".to_string()),
                ..SpotRecord::default()
            },
            SpotRecord::default(),
            SpotRecord {
                uuid: Some(String::new()),
                ..SpotRecord::default()
            },
        ];
        let multimedia = multimedia_rows(&rows);
        assert_eq!(multimedia.len(), 1);
        assert_eq!(multimedia[0].uuid, "u-1");
    }

    #[test]
    fn subset_plus_complement_covers_all_rows() {
        let rows: Vec<SpotRecord> = (0..10)
            .map(|i| SpotRecord {
                uuid: (i % 3 == 0).then(|| format!("u-{i}")),
                ..SpotRecord::default()
            })
            .collect();
        let with_media = multimedia_rows(&rows).len();
        let without_media = rows.iter().filter(|r| !r.has_multimedia()).count();
        assert_eq!(with_media + without_media, rows.len());
    }

    #[test]
    fn every_field_gets_a_defined_value() {
        let rows = vec![SpotRecord {
            uuid: Some("u-1".to_string()),
            value: Some("bad".to_string()),
            ..SpotRecord::default()
        }];
        let row = &multimedia_rows(&rows)[0];
        assert_eq!(row.media_agency, "Sin agencia");
        assert_eq!(row.creative_agency, "Sin agencia creativa");
        assert_eq!(row.date, "");
        assert_eq!(row.duration, "");
        assert!((row.value - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn populated_fields_pass_through() {
        let rows = vec![SpotRecord {
            uuid: Some("u-2".to_string()),
            media_agency: Some("Agencia Uno".to_string()),
            date: Some("2025-01-15".to_string()),
            hour: Some("21".to_string()),
            value: Some("2500".to_string()),
            quality: Some("HD".to_string()),
            ..SpotRecord::default()
        }];
        let row = &multimedia_rows(&rows)[0];
        assert_eq!(row.media_agency, "Agencia Uno");
        assert_eq!(row.date, "2025-01-15");
        assert_eq!(row.hour, "21");
        assert!((row.value - 2500.0).abs() < f64::EPSILON);
        assert_eq!(row.quality, "HD");
    }
}
