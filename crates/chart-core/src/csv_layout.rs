//! Literal layouts as CSV (`char,x,y,fontSize`)

use crate::types::{ChartError, PositionedCharacter, Result};
use std::path::Path;

pub const CSV_HEADER: [&str; 4] = ["char", "x", "y", "fontSize"];

/// Parse CSV text into records; ids follow row order
pub fn parse_layout_csv(contents: &str) -> Result<Vec<PositionedCharacter>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(contents.as_bytes());
    let mut letters = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() < 4 {
            log::debug!("Skipping CSV row {} with {} columns", row + 1, record.len());
            continue;
        }

        let cell = record[0].trim();
        let mut chars = cell.chars();
        let glyph = match (chars.next(), chars.next()) {
            (None, _) => {
                log::debug!("Skipping CSV row {} without a character", row + 1);
                continue;
            }
            (Some(glyph), None) => glyph,
            (Some(_), Some(_)) => {
                return Err(ChartError::InvalidCsv(format!(
                    "Row {}: '{}' is not a single character",
                    row + 1,
                    cell
                )));
            }
        };
        let number = |column: usize| -> Result<f32> {
            record[column].trim().parse::<f32>().map_err(|_| {
                ChartError::InvalidCsv(format!(
                    "Row {}: '{}' is not a number in column '{}'",
                    row + 1,
                    &record[column],
                    CSV_HEADER[column]
                ))
            })
        };

        letters.push(PositionedCharacter::new(
            letters.len() as u32,
            glyph,
            number(1)?,
            number(2)?,
            number(3)?,
        ));
    }

    Ok(letters)
}

pub fn format_layout_csv(letters: &[PositionedCharacter]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for letter in letters {
        writer.write_record([
            letter.glyph.to_string(),
            letter.x.to_string(),
            letter.y.to_string(),
            letter.font_size.to_string(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ChartError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ChartError::InvalidCsv(e.to_string()))
}

pub async fn load_layout_csv(path: impl AsRef<Path>) -> Result<Vec<PositionedCharacter>> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    let letters = tokio::task::spawn_blocking(move || parse_layout_csv(&contents)).await??;

    log::info!("Loaded {} letters from {}", letters.len(), path.display());
    Ok(letters)
}

pub async fn save_layout_csv(letters: &[PositionedCharacter], path: impl AsRef<Path>) -> Result<()> {
    let contents = format_layout_csv(letters)?;
    tokio::fs::write(path.as_ref(), contents).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_in_order() {
        let csv = "char,x,y,fontSize\nE,10,20,24\nK, 30.5 ,40,12\n";
        let letters = parse_layout_csv(csv).unwrap();
        assert_eq!(letters.len(), 2);
        assert_eq!(letters[1], PositionedCharacter::new(1, 'K', 30.5, 40.0, 12.0));
    }

    #[test]
    fn short_rows_are_skipped() {
        let csv = "char,x,y,fontSize\nE,10,20\nT,1,2,3\n,5,5,5\n";
        let letters = parse_layout_csv(csv).unwrap();
        assert_eq!(letters.len(), 1);
        assert_eq!(letters[0].glyph, 'T');
        assert_eq!(letters[0].id, 0);
    }

    #[test]
    fn bad_number_is_an_error() {
        let csv = "char,x,y,fontSize\nE,ten,20,24\n";
        match parse_layout_csv(csv) {
            Err(ChartError::InvalidCsv(msg)) => assert!(msg.contains("'x'"), "{msg}"),
            other => panic!("Expected InvalidCsv error, got {other:?}"),
        }
    }

    #[test]
    fn multi_character_cell_is_an_error() {
        let csv = "char,x,y,fontSize
E,10,20,24
AB,1,2,3
";
        match parse_layout_csv(csv) {
            Err(ChartError::InvalidCsv(msg)) => {
                assert!(msg.contains("Row 2"), "{msg}");
                assert!(msg.contains("'AB'"), "{msg}");
            }
            other => panic!("Expected InvalidCsv error, got {other:?}"),
        }
    }

    #[test]
    fn format_writes_header() {
        let letters = vec![PositionedCharacter::new(0, 'A', 1.5, 2.0, 12.0)];
        let text = format_layout_csv(&letters).unwrap();
        assert_eq!(text, "char,x,y,fontSize\nA,1.5,2,12\n");
    }
}
