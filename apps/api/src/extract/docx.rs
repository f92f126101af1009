use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};
use tracing::warn;

use super::Extraction;

/// Decodes a DOCX byte payload by walking the document tree and collecting
/// run text from paragraphs and tables. Résumés rarely use anything beyond
/// those two structures, so drawings, comments and revision marks are
/// skipped. Read errors become `Failed`.
pub(super) fn extract(data: &[u8]) -> Extraction {
    let package = match read_docx(data) {
        Ok(package) => package,
        Err(e) => {
            warn!("DOCX extraction failed: {e}");
            return Extraction::Failed;
        }
    };

    let mut segments = Vec::new();
    for child in &package.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => {
                if let Some(text) = paragraph_text(paragraph.as_ref()) {
                    segments.push(text);
                }
            }
            DocumentChild::Table(table) => collect_table_text(table.as_ref(), &mut segments),
            _ => {}
        }
    }

    Extraction::Text(segments.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> Option<String> {
    let mut buffer = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(text) => buffer.push_str(&text.text),
                    RunChild::Break(_) => buffer.push('\n'),
                    RunChild::Tab(_) => buffer.push('\t'),
                    _ => {}
                }
            }
        }
    }

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn collect_table_text(table: &Table, segments: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => {
                        if let Some(text) = paragraph_text(paragraph) {
                            segments.push(text);
                        }
                    }
                    TableCellContent::Table(inner) => collect_table_text(inner, segments),
                    _ => {}
                }
            }
        }
    }
}
