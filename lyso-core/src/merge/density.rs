use crate::table::model::{COL_DENSITY, COL_TOTAL_AREA, Row, Table};

/// `Transport Density = T0 Total Area / MIP Total Area`.
///
/// Defined only when both operands are present and the MIP-side area is
/// non-zero; everything else (including division by zero) is `None`, never
/// `inf` or an error.
pub fn transport_density(mip_area: Option<f64>, t0_area: Option<f64>) -> Option<f64> {
    match (mip_area, t0_area) {
        (Some(mip), Some(t0)) if mip != 0.0 => Some(t0 / mip),
        _ => None,
    }
}

fn area(row: &Row, column: &str) -> Option<f64> {
    row.get(column)?.trim().parse().ok()
}

/// Append the `Transport Density` column to a merged table.
///
/// Reads the suffixed `Total Area_x` (MIP side) and `Total Area_y` (T0 side)
/// columns produced by the outer join.
pub fn add_transport_density(table: &mut Table) {
    let mip_col = format!("{COL_TOTAL_AREA}_x");
    let t0_col = format!("{COL_TOTAL_AREA}_y");
    table.derive_column(COL_DENSITY, |row| {
        transport_density(area(row, &mip_col), area(row, &t0_col)).map(|d| d.to_string())
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_present_nonzero_operands() {
        assert_eq!(transport_density(Some(100.0), Some(50.0)), Some(0.5));
        assert_eq!(transport_density(Some(50.0), Some(100.0)), Some(2.0));
    }

    #[test]
    fn zero_or_missing_operands_are_undefined() {
        assert_eq!(transport_density(Some(0.0), Some(50.0)), None);
        assert_eq!(transport_density(None, Some(50.0)), None);
        assert_eq!(transport_density(Some(100.0), None), None);
        assert_eq!(transport_density(None, None), None);
    }

    #[test]
    fn derives_column_from_suffixed_areas() {
        let mut row = Row::new();
        row.insert("Total Area_x".into(), "100".into());
        row.insert("Total Area_y".into(), "50".into());
        let mut bad = Row::new();
        bad.insert("Total Area_x".into(), "not-a-number".into());
        bad.insert("Total Area_y".into(), "50".into());

        let mut table = Table {
            columns: vec!["Total Area_x".into(), "Total Area_y".into()],
            rows: vec![row, bad],
        };
        add_transport_density(&mut table);

        assert!(table.has_column("Transport Density"));
        assert_eq!(
            table.rows[0].get("Transport Density").map(String::as_str),
            Some("0.5")
        );
        assert!(!table.rows[1].contains_key("Transport Density"));
    }
}
