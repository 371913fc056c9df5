//! CSV parsing of the published sheets into [`EventRecord`]s

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info, instrument, warn};

use crate::data_fetcher::models::{EventRecord, columns};
use crate::error::AppError;

/// Parses CSV text with a header row into event records.
///
/// - Header labels are mapped onto record fields; unknown columns are ignored.
/// - Quoted fields may contain separators, quotes (`""`) and line breaks.
/// - Empty lines and rows where every cell is blank are skipped.
/// - Rows may be shorter or longer than the header row.
///
/// # Errors
/// * `AppError::EmptySource` - the text has no header row
/// * `AppError::MissingHeader` - a required column is absent
/// * `AppError::Csv` - the text is not valid CSV
#[instrument(skip(csv_text), fields(bytes = csv_text.len()))]
pub fn parse_events(csv_text: &str, source_name: &str) -> Result<Vec<EventRecord>, AppError> {
    let csv_text = csv_text.strip_prefix('\u{feff}').unwrap_or(csv_text);
    if csv_text.trim().is_empty() {
        return Err(AppError::empty_source(source_name));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    debug!("CSV headers: {:?}", headers);
    for required in columns::REQUIRED {
        if !headers.iter().any(|h| h == *required) {
            return Err(AppError::missing_header(*required));
        }
    }

    let mut records = Vec::new();
    let mut skipped_blank = 0usize;
    for (index, row) in reader.records().enumerate() {
        let mut row = row?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            skipped_blank += 1;
            continue;
        }
        // Short rows are padded so every header maps to a (blank) cell
        while row.len() < headers.len() {
            row.push_field("");
        }

        let record: EventRecord = row.deserialize(Some(&headers))?;
        if record.name.is_none() {
            // 1-based data row number, header excluded
            warn!("Row {} has no event name", index + 1);
        }
        records.push(record);
    }

    if skipped_blank > 0 {
        debug!("Skipped {skipped_blank} blank rows");
    }
    info!("Parsed {} records from {}", records.len(), source_name);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Säsong,Typ av händelse,Plats,Ledig från skolan?,Namn på händelse,Datum från,Datum till,År,Månadsnummer,Månadsnamn";

    #[test]
    fn test_parse_basic_rows() {
        let csv = format!(
            "{HEADER}\n2024-2025,Cup,Umeå,ja,Umeå Cup,2024-09-14,2024-09-15,2024,9,september\n"
        );
        let records = parse_events(&csv, "test").unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.season.as_deref(), Some("2024-2025"));
        assert_eq!(record.event_type.as_deref(), Some("Cup"));
        assert_eq!(record.place.as_deref(), Some("Umeå"));
        assert_eq!(record.free_from_school.as_deref(), Some("ja"));
        assert_eq!(record.name.as_deref(), Some("Umeå Cup"));
        assert_eq!(record.date_to.as_deref(), Some("2024-09-15"));
        assert_eq!(record.month_number.as_deref(), Some("9"));
        assert_eq!(record.month_name.as_deref(), Some("september"));
    }

    #[test]
    fn test_parse_quoted_fields() {
        let csv = "Namn på händelse,Övrig information,Kostnad per spelare\n\
                   \"Cup, Sundsvall\",\"Ta med \"\"matsäck\"\"\noch vatten\",\"1 234,50 kr\"\n";
        let records = parse_events(csv, "test").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("Cup, Sundsvall"));
        assert_eq!(
            records[0].other_info.as_deref(),
            Some("Ta med \"matsäck\"\noch vatten")
        );
        assert_eq!(records[0].cost.as_deref(), Some("1 234,50 kr"));
    }

    #[test]
    fn test_blank_cells_become_none_and_blank_lines_are_skipped() {
        let csv = format!("{HEADER}\n\n2024-2025,,  ,,Träningsläger,2024-08-01,,2024,8,augusti\n,,,,,,,,,\n");
        let records = parse_events(&csv, "test").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].event_type, None);
        assert_eq!(records[0].place, None);
        assert_eq!(records[0].date_to, None);
    }

    #[test]
    fn test_short_rows_and_unknown_columns() {
        let csv = "Namn på händelse,Okänd kolumn,Plats\nSeriematch,x\n";
        let records = parse_events(csv, "test").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("Seriematch"));
        assert_eq!(records[0].place, None);
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let csv = "\u{feff}Namn på händelse\nCup\n";
        let records = parse_events(csv, "test").unwrap();
        assert_eq!(records[0].name.as_deref(), Some("Cup"));
    }

    #[test]
    fn test_missing_name_header_is_an_error() {
        let csv = "Säsong,Plats\n2024-2025,Umeå\n";
        let err = parse_events(csv, "test").unwrap_err();
        assert!(matches!(err, AppError::MissingHeader { .. }));
    }

    #[test]
    fn test_empty_source_is_an_error() {
        let err = parse_events("  \n", "events.csv").unwrap_err();
        assert!(matches!(err, AppError::EmptySource { .. }));
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let records = parse_events(HEADER, "test").unwrap();
        assert!(records.is_empty());
    }
}
