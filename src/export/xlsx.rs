// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{SheetCell, SheetRow, get_headers, sheet_row_cells};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;

const SHEET_NAME: &str = "Attendance Summary";
const HEADER_BG: u32 = 0x2F75B5;
const BANDS: [u32; 2] = [0xEAF3FB, 0xFFFFFF];

/// Write the summary rows to a single banded sheet with a frozen header.
pub(crate) fn export_xlsx(rows: &[SheetRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    let headers = get_headers();
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, title) in headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *title, &header_format)
            .map_err(to_export_error)?;
    }
    sheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();

    for (i, row) in rows.iter().enumerate() {
        let band = Color::RGB(BANDS[i % BANDS.len()]);
        for (col, cell) in sheet_row_cells(row).iter().enumerate() {
            write_cell(sheet, (i + 1) as u32, col as u16, cell, band)?;
            widths[col] = widths[col].max(cell.display_width());
        }
    }

    for (col, w) in widths.iter().enumerate() {
        sheet
            .set_column_width(col as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &SheetCell, band: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(band)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let written = match cell {
        SheetCell::Text(s) => sheet.write_string_with_format(row, col, s, &base),
        SheetCell::Date { serial, .. } => {
            sheet.write_number_with_format(row, col, *serial, &base.set_num_format("yyyy-mm-dd"))
        }
        SheetCell::Time { serial, .. } => {
            sheet.write_number_with_format(row, col, *serial, &base.set_num_format("hh:mm"))
        }
        SheetCell::Count(n) => {
            sheet.write_number_with_format(row, col, *n as f64, &base.set_align(FormatAlign::Right))
        }
    };

    written.map(|_| ()).map_err(to_export_error)
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX: {e}"))
}
