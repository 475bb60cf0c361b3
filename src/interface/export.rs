use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;
use crate::grocery::GroceryRow;
use crate::state::PlanRecord;

/// Write grocery rows as CSV to any writer.
pub fn write_grocery_csv<W: Write>(rows: &[GroceryRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["Item", "Aisle", "Qty", "Unit"])?;
    for row in rows {
        wtr.write_record([
            row.name.as_str(),
            row.aisle.as_str(),
            &row.quantity.to_string(),
            row.unit.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a plan record as pretty JSON to any writer.
pub fn write_plan_json<W: Write>(record: &PlanRecord, mut writer: W) -> Result<()> {
    writer.write_all(serde_json::to_string_pretty(record)?.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Export grocery CSV to `out`, or stdout when no path is given.
pub fn export_grocery_csv(record: &PlanRecord, out: Option<&Path>) -> Result<()> {
    let rows = &record.outcome.grocery.rows;
    match out {
        Some(path) => write_grocery_csv(rows, File::create(path)?),
        None => write_grocery_csv(rows, io::stdout().lock()),
    }
}

/// Export the whole record as JSON to `out`, or stdout when no path is given.
pub fn export_plan_json(record: &PlanRecord, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => write_plan_json(record, File::create(path)?),
        None => write_plan_json(record, io::stdout().lock()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, quantity: u32) -> GroceryRow {
        GroceryRow {
            name: name.to_string(),
            aisle: "Dairy".to_string(),
            quantity,
            unit: "12 oz".to_string(),
        }
    }

    #[test]
    fn test_csv_header_and_rows() {
        let mut buf = Vec::new();
        write_grocery_csv(&[row("Greek Yogurt", 3), row("Milk, 2%", 1)], &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Item,Aisle,Qty,Unit");
        assert_eq!(lines[1], "Greek Yogurt,Dairy,3,12 oz");
        assert_eq!(lines[2], "\"Milk, 2%\",Dairy,1,12 oz");
    }

    #[test]
    fn test_csv_empty_has_header_only() {
        let mut buf = Vec::new();
        write_grocery_csv(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Item,Aisle,Qty,Unit\n");
    }
}
