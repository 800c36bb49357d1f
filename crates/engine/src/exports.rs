//! Builders for the downloadable export documents.
//!
//! Both exports are read-only snapshots of the list at the moment of
//! invocation and refuse to produce a file for an empty ledger. The caller
//! decides where the bytes land; the fixed filenames live here.

use csv::Writer;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::{ExportError, MoneyCents, Transaction};

pub const CSV_FILENAME: &str = "transactions.csv";
pub const PDF_FILENAME: &str = "Finance_Report.pdf";

const PDF_TITLE: &str = "Personal Finance Report";
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const ROW_STEP_MM: f32 = 8.0;
const BOTTOM_MARGIN_MM: f32 = 15.0;

/// Serializes the list as `Description,Amount,Type,Date` CSV bytes.
///
/// Rows follow the ledger order. Fields containing the delimiter are quoted
/// by the writer.
pub fn csv_export(transactions: &[Transaction]) -> Result<Vec<u8>, ExportError> {
    if transactions.is_empty() {
        return Err(ExportError::EmptyLedger);
    }

    let mut writer = Writer::from_writer(vec![]);
    writer.write_record(["Description", "Amount", "Type", "Date"])?;
    for tx in transactions {
        writer.write_record([
            tx.description.as_str(),
            &plain_amount(tx.amount),
            tx.kind.as_str(),
            &tx.date.to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|err| ExportError::Finalize(err.to_string()))
}

/// Builds the "Personal Finance Report" PDF bytes.
///
/// One table row per transaction in ledger order, amounts with the currency
/// prefix, continuing onto fresh pages as needed.
pub fn pdf_export(transactions: &[Transaction]) -> Result<Vec<u8>, ExportError> {
    if transactions.is_empty() {
        return Err(ExportError::EmptyLedger);
    }

    let (doc, first_page, first_layer) = PdfDocument::new(
        PDF_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "report",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| ExportError::Pdf(err.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|err| ExportError::Pdf(err.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    layer.use_text(PDF_TITLE, 16.0, Mm(15.0), Mm(280.0), &bold);

    let mut y = 265.0;
    table_row(
        &layer,
        &bold,
        11.0,
        y,
        ["Description", "Amount", "Type", "Date"],
    );
    y -= ROW_STEP_MM;

    for tx in transactions {
        if y < BOTTOM_MARGIN_MM {
            let (page, page_layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");
            layer = doc.get_page(page).get_layer(page_layer);
            y = 280.0;
        }

        table_row(
            &layer,
            &font,
            10.0,
            y,
            [
                tx.description.as_str(),
                &tx.amount.to_string(),
                tx.kind.as_str(),
                &tx.date.to_string(),
            ],
        );
        y -= ROW_STEP_MM;
    }

    doc.save_to_bytes()
        .map_err(|err| ExportError::Pdf(err.to_string()))
}

fn table_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    size: f32,
    y: f32,
    columns: [&str; 4],
) {
    const COLUMN_X_MM: [f32; 4] = [15.0, 100.0, 140.0, 170.0];
    for (text, x) in columns.into_iter().zip(COLUMN_X_MM) {
        layer.use_text(text, size, Mm(x), Mm(y), font);
    }
}

// The CSV column carries the bare two-decimal number; the `$` prefix only
// appears in the PDF and on screen.
fn plain_amount(amount: MoneyCents) -> String {
    let cents = amount.cents().unsigned_abs();
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::TransactionKind;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction {
                id: 2,
                description: "Rent".to_string(),
                amount: MoneyCents::new(40_000),
                kind: TransactionKind::Expense,
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            },
            Transaction {
                id: 1,
                description: "Salary".to_string(),
                amount: MoneyCents::new(100_000),
                kind: TransactionKind::Income,
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            },
        ]
    }

    #[test]
    fn csv_rejects_empty_ledger() {
        assert!(matches!(csv_export(&[]), Err(ExportError::EmptyLedger)));
    }

    #[test]
    fn csv_writes_header_and_rows_in_ledger_order() {
        let bytes = csv_export(&sample()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Description,Amount,Type,Date"));
        assert_eq!(lines.next(), Some("Rent,400.00,expense,2024-01-02"));
        assert_eq!(lines.next(), Some("Salary,1000.00,income,2024-01-01"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn csv_quotes_descriptions_containing_the_delimiter() {
        let mut transactions = sample();
        transactions[0].description = "Rent, January".to_string();
        let bytes = csv_export(&transactions).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"Rent, January\",400.00,expense,2024-01-02"));
    }

    #[test]
    fn pdf_rejects_empty_ledger() {
        assert!(matches!(pdf_export(&[]), Err(ExportError::EmptyLedger)));
    }

    #[test]
    fn pdf_produces_a_pdf_document() {
        let bytes = pdf_export(&sample()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn pdf_handles_more_rows_than_one_page() {
        let template = &sample()[0];
        let many: Vec<Transaction> = (0..80)
            .map(|i| Transaction {
                id: i,
                ..template.clone()
            })
            .collect();
        let bytes = pdf_export(&many).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
