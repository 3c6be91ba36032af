//! Delivery-challan PDF rendering.
//!
//! Lays out an already-priced invoice as a paginated A4 table. Rendering is
//! deterministic for a given document; all arithmetic happens upstream in the
//! pricing module.

use chrono::NaiveDateTime;
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect,
    Rgb,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("pdf generation failed: {0}")]
    Render(#[from] printpdf::Error),
}

/// A fully priced invoice line, ready to print.
#[derive(Debug, Clone)]
pub struct InvoiceLine {
    pub product_name: String,
    pub hsn: String,
    pub quantity: i32,
    pub taxable_amount: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub cess: f64,
    pub final_price: f64,
}

/// Everything printed on the document.
#[derive(Debug, Clone)]
pub struct InvoiceDocument {
    pub order_id: i32,
    pub customer_id: i32,
    pub customer_name: String,
    pub order_date: NaiveDateTime,
    pub invoice_number: String,
    pub invoice_date: NaiveDateTime,
    pub lines: Vec<InvoiceLine>,
    pub grand_total: f64,
}

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const ROW_HEIGHT: f32 = 7.0;
const TABLE_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Column widths in millimetres; must sum to `TABLE_WIDTH`.
const COLUMNS: [f32; 8] = [52.0, 20.0, 12.0, 26.0, 16.0, 16.0, 14.0, 24.0];
const HEADERS: [&str; 8] = [
    "Product",
    "HSN",
    "Qty",
    "Taxable Amt",
    "CGST %",
    "SGST %",
    "Cess %",
    "Final Price",
];

struct Page {
    layer: PdfLayerReference,
    /// Cursor in millimetres from the bottom of the page.
    y: f32,
}

fn write_row(page: &Page, font: &IndirectFontRef, size: f32, cells: &[String]) {
    let mut x = MARGIN;
    for (cell, width) in cells.iter().zip(COLUMNS) {
        page.layer
            .use_text(cell.clone(), size, Mm(x), Mm(page.y), font);
        x += width;
    }
}

fn horizontal_line(page: &Page, y: f32) {
    let line = Line {
        points: vec![
            (Point::new(Mm(MARGIN), Mm(y)), false),
            (Point::new(Mm(MARGIN + TABLE_WIDTH), Mm(y)), false),
        ],
        is_closed: false,
    };
    page.layer.add_line(line);
}

fn shade_row(page: &Page) {
    page.layer.set_fill_color(Color::Rgb(Rgb::new(
        0.96, 0.96, 0.96, None,
    )));
    let rect = Rect::new(
        Mm(MARGIN),
        Mm(page.y - 2.0),
        Mm(MARGIN + TABLE_WIDTH),
        Mm(page.y + ROW_HEIGHT - 2.0),
    )
    .with_mode(PaintMode::Fill);
    page.layer.add_rect(rect);
    // Reset so the row text is not painted grey as well.
    page.layer
        .set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
}

/// Truncate a cell value so it stays inside its column.
fn fit(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Render the document to PDF bytes.
pub fn render_invoice(document: &InvoiceDocument) -> Result<Vec<u8>, PdfError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        format!("Invoice {}", document.invoice_number),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );

    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut page = Page {
        layer: doc.get_page(first_page).get_layer(first_layer),
        y: PAGE_HEIGHT - MARGIN - 5.0,
    };

    // Seller header block, fixed.
    page.layer
        .use_text("Baba Merchant Store", 20.0, Mm(70.0), Mm(page.y), &bold);
    page.y -= 10.0;
    for line in [
        "Tiloi, District - Amethi",
        "GSTIN: 09ARTPA0714F1Z0",
        "Phone: +91-9839645091, +91-7081156224",
        "Email: bms@gmail.com",
    ] {
        page.layer
            .use_text(line, 11.0, Mm(MARGIN), Mm(page.y), &font);
        page.y -= 5.5;
    }
    page.y -= 4.0;

    page.layer
        .use_text("Delivery Challan", 16.0, Mm(78.0), Mm(page.y), &bold);
    page.y -= 10.0;

    // Customer / order / invoice metadata.
    let order_date = document.order_date.format("%d/%m/%Y");
    let invoice_date = document.invoice_date.format("%d/%m/%Y");
    for line in [
        format!("Order ID: {}", document.order_id),
        format!("Customer Name: {}", document.customer_name),
        format!("Customer ID: {}", document.customer_id),
        format!("Order Date: {order_date}    Invoice Date: {invoice_date}"),
        format!("Invoice No: {}", document.invoice_number),
    ] {
        page.layer
            .use_text(line, 11.0, Mm(MARGIN), Mm(page.y), &font);
        page.y -= 5.5;
    }
    page.y -= 4.0;

    let header_cells: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    write_row(&page, &bold, 10.0, &header_cells);
    page.y -= 2.0;
    horizontal_line(&page, page.y);
    page.y -= ROW_HEIGHT - 2.0;

    for (index, line) in document.lines.iter().enumerate() {
        // Start a fresh page when the next row would collide with the
        // bottom margin, repeating the table header.
        if page.y < MARGIN + ROW_HEIGHT {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            page = Page {
                layer: doc.get_page(page_index).get_layer(layer_index),
                y: PAGE_HEIGHT - MARGIN - 5.0,
            };
            write_row(&page, &bold, 10.0, &header_cells);
            page.y -= 2.0;
            horizontal_line(&page, page.y);
            page.y -= ROW_HEIGHT - 2.0;
        }

        if index % 2 == 0 {
            shade_row(&page);
        }

        let cells = [
            fit(&line.product_name, 30),
            fit(&line.hsn, 11),
            line.quantity.to_string(),
            format!("{:.2}", line.taxable_amount),
            format!("{:.2}", line.cgst),
            format!("{:.2}", line.sgst),
            format!("{:.2}", line.cess),
            format!("{:.2}", line.final_price),
        ];
        write_row(&page, &font, 9.0, &cells);
        page.y -= ROW_HEIGHT;
    }

    page.y += ROW_HEIGHT - 2.0;
    horizontal_line(&page, page.y);
    page.y -= ROW_HEIGHT;

    page.layer.use_text(
        "Grand Total:",
        11.0,
        Mm(MARGIN + COLUMNS[..6].iter().sum::<f32>()),
        Mm(page.y),
        &bold,
    );
    page.layer.use_text(
        format!("{:.2}", document.grand_total),
        11.0,
        Mm(MARGIN + TABLE_WIDTH - COLUMNS[7]),
        Mm(page.y),
        &bold,
    );

    Ok(doc.save_to_bytes()?)
}
