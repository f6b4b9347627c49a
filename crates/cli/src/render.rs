//! Terminal rendering for the catalog and order history.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};

use storefront::{catalog::CatalogRow, history::OrderSummary, products::Product};

/// Write the catalog as a table.
pub(crate) fn write_catalog(out: &mut impl io::Write, products: &[Product]) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "No products available.");
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Product", "Price", "Stock"]);

    for row in products.iter().map(CatalogRow::from) {
        builder.push_record([
            row.id.to_string(),
            row.name,
            row.price.to_string(),
            row.stock_quantity.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..4), Alignment::right());
    table.modify(Rows::first(), Alignment::left());

    writeln!(out, "{table}")
}

/// Write one product with its description.
pub(crate) fn write_product(out: &mut impl io::Write, product: &Product) -> io::Result<()> {
    writeln!(out, "#{} {}", product.id, CatalogRow::from(product))?;

    if let Some(description) = product.description.as_deref().filter(|text| !text.is_empty()) {
        writeln!(out, "{description}")?;
    }

    Ok(())
}

/// Write one order block.
pub(crate) fn write_order(out: &mut impl io::Write, summary: &OrderSummary) -> io::Result<()> {
    writeln!(out, "{}", summary.title())?;

    if let Some(date) = &summary.date {
        writeln!(out, "Date: {date}")?;
    }

    writeln!(out, "Status: {}", summary.status)?;
    writeln!(out, "Total: {}", summary.total_price)?;

    for line in &summary.lines {
        writeln!(out, "  - {line}")?;
    }

    Ok(())
}

/// Write every order, separated by blank lines.
pub(crate) fn write_history(out: &mut impl io::Write, summaries: &[OrderSummary]) -> io::Result<()> {
    if summaries.is_empty() {
        return writeln!(out, "No orders yet.");
    }

    for (index, summary) in summaries.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }

        write_order(out, summary)?;
    }

    Ok(())
}
