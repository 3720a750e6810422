// Final spreadsheet output

use crate::error::Result;
use crate::model::WordPair;
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::Path;
use tracing::info;

pub const SHEET_HEADERS: [&str; 8] = [
    "seção",
    "subseção",
    "português",
    "inglês",
    "transcrição fonética",
    "palavras",
    "transcrição limpa",
    "transcrição invertida",
];

/// Write annotated rows to a single-sheet workbook, header row first.
pub fn write_spreadsheet(rows: &[WordPair], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("words")?;

    for (col, header) in SHEET_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, pair) in rows.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write_string(row, 0, &pair.section)?;
        worksheet.write_string(row, 1, &pair.subsection)?;
        worksheet.write_string(row, 2, &pair.target_word)?;
        worksheet.write_string(row, 3, &pair.source_word)?;
        worksheet.write_string(row, 4, &pair.transcription)?;
        worksheet.write_number(row, 5, pair.word_count as f64)?;
        worksheet.write_string(row, 6, &pair.cleaned_transcription)?;
        worksheet.write_string(row, 7, &pair.reversed_cleaned_transcription)?;
    }

    workbook.save(path)?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
