use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::filter::FilteredSubset;

/// Save a subset as CSV with columns `category,value,date`.
pub fn save_csv(subset: &FilteredSubset, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(subset, file).with_context(|| format!("writing {}", path.display()))
}

/// Write a subset as CSV to any writer.
pub fn write_csv<W: Write>(subset: &FilteredSubset, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for (row_no, record) in subset.records.iter().enumerate() {
        csv.serialize(record)
            .with_context(|| format!("CSV row {row_no}"))?;
    }
    // An empty subset still gets a header line.
    if subset.is_empty() {
        csv.write_record(["category", "value", "date"])
            .context("writing CSV header")?;
    }
    csv.flush().context("flushing CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::model::Record;

    fn to_string(subset: &FilteredSubset) -> String {
        let mut buf = Vec::new();
        write_csv(subset, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_header_and_rows() {
        let d0 = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let d1 = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let subset = FilteredSubset {
            records: vec![Record::new("A", 1.5, d0), Record::new("B", -0.25, d1)],
        };
        assert_eq!(
            to_string(&subset),
            "category,value,date\nA,1.5,2023-01-01\nB,-0.25,2023-01-02\n"
        );
    }

    #[test]
    fn empty_subset_writes_only_header() {
        assert_eq!(to_string(&FilteredSubset::default()), "category,value,date\n");
    }
}
