use std::collections::{HashMap, HashSet};

use crate::table::model::{COL_MERGE_STATUS, Row, Table};

/// How MIP and T0 rows are paired. Never picked silently; the caller chooses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum JoinStrategy {
    /// Join on `Slice` with every `MAX_`/`DUP_` occurrence removed.
    #[default]
    SliceKey,
    /// Join directly on the crude second-underscore-token `wellID` column.
    WellId,
}

/// Remove the projection prefixes wherever they occur, not just leading.
pub fn strip_projection_prefix(s: &str) -> String {
    s.replace("MAX_", "").replace("DUP_", "")
}

pub const STATUS_BOTH: &str = "both";
pub const STATUS_LEFT_ONLY: &str = "left_only";
pub const STATUS_RIGHT_ONLY: &str = "right_only";

/// Many-to-many outer join on `key`.
///
/// Every row from both sides survives: matched pairs combine with
/// `merge_status = "both"`, unmatched rows keep their side's fields and are
/// tagged `left_only` / `right_only`. Non-key columns present on both sides
/// get `_x` / `_y` suffixes; a row with an undefined key value never matches.
pub fn outer_join(left: &Table, right: &Table, key: &str) -> Table {
    let left_cols: HashSet<&String> = left.columns.iter().collect();
    let shared: HashSet<&String> = right
        .columns
        .iter()
        .filter(|c| c.as_str() != key && left_cols.contains(*c))
        .collect();

    let rename = |col: &String, suffix: &str| -> String {
        if col == key {
            col.clone()
        } else if shared.contains(col) {
            format!("{col}{suffix}")
        } else {
            col.clone()
        }
    };

    let mut out = Table::new();
    for col in &left.columns {
        out.add_column(&rename(col, "_x"));
    }
    for col in &right.columns {
        if col != key {
            out.add_column(&rename(col, "_y"));
        }
    }
    out.add_column(COL_MERGE_STATUS);

    let mut right_index: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, row) in right.rows.iter().enumerate() {
        if let Some(k) = row.get(key) {
            right_index.entry(k.as_str()).or_default().push(i);
        }
    }

    let combine = |lrow: Option<&Row>, rrow: Option<&Row>, status: &str| -> Row {
        let mut row = Row::new();
        if let Some(l) = lrow {
            for (k, v) in l {
                row.insert(rename(k, "_x"), v.clone());
            }
        }
        if let Some(r) = rrow {
            for (k, v) in r {
                if k == key {
                    row.entry(key.to_string()).or_insert_with(|| v.clone());
                } else {
                    row.insert(rename(k, "_y"), v.clone());
                }
            }
        }
        row.insert(COL_MERGE_STATUS.to_string(), status.to_string());
        row
    };

    let mut right_matched = vec![false; right.rows.len()];
    for lrow in &left.rows {
        let matches = lrow
            .get(key)
            .and_then(|k| right_index.get(k.as_str()))
            .filter(|idxs| !idxs.is_empty());
        match matches {
            Some(idxs) => {
                for &i in idxs {
                    right_matched[i] = true;
                    out.rows.push(combine(Some(lrow), Some(&right.rows[i]), STATUS_BOTH));
                }
            }
            None => out.rows.push(combine(Some(lrow), None, STATUS_LEFT_ONLY)),
        }
    }
    for (i, rrow) in right.rows.iter().enumerate() {
        if !right_matched[i] {
            out.rows.push(combine(None, Some(rrow), STATUS_RIGHT_ONLY));
        }
    }
    out
}
