// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_datetime;
use crate::export::model::{Cell, export_to_cells};
use crate::export::{CheckinExport, HEADERS, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub(crate) const SHEET_NAME: &str = "Check-in Records";

/// Widest column allowed, in characters.
const MAX_COL_WIDTH: usize = 50;

/// XLSX export with header styling, banded rows and fitted column widths.
pub(crate) fn export_xlsx(rows: &[CheckinExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0xC2410C))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xFFF7ED);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, rec) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in export_to_cells(rec).iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, cell, band_color)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(cell.display().as_str()));
            }
        }
    }

    // ---------------------------
    // Column widths: content + 2, capped
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        let width = (*w + 2).min(MAX_COL_WIDTH);
        worksheet
            .set_column_width(c as u16, width as f64)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path, rows.len());
    Ok(())
}

fn base_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> AppResult<()> {
    match cell {
        Cell::Number(n) => {
            let fmt = base_format(bg)
                .set_align(FormatAlign::Right)
                .set_num_format("0.000000");
            worksheet
                .write_with_format(row, col, *n, &fmt)
                .map_err(to_export_error)?;
        }
        Cell::DateTime(s) => match parse_to_excel_datetime(s) {
            Some(serial) => {
                let fmt = base_format(bg).set_num_format("yyyy-mm-dd hh:mm:ss");
                worksheet
                    .write_with_format(row, col, serial, &fmt)
                    .map_err(to_export_error)?;
            }
            None => {
                worksheet
                    .write_with_format(row, col, s.as_str(), &base_format(bg))
                    .map_err(to_export_error)?;
            }
        },
        Cell::Text(s) => {
            worksheet
                .write_with_format(row, col, s.as_str(), &base_format(bg))
                .map_err(to_export_error)?;
        }
    }

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
