//! CSV export of comparison tables.

use std::io;

use serde::Serialize;

use super::sweep::SweepRow;
use super::timing::TimingRow;

/// Writes a timing table with the header `len,bruteforce,ant`.
pub fn write_timing_csv<W: io::Write>(rows: &[TimingRow], writer: W) -> Result<(), csv::Error> {
    write_rows(rows, writer)
}

/// Writes sweep rows with the header `alpha,r,days,elite,distance,mistake`.
pub fn write_sweep_csv<W: io::Write>(rows: &[SweepRow], writer: W) -> Result<(), csv::Error> {
    write_rows(rows, writer)
}

fn write_rows<T: Serialize, W: io::Write>(rows: &[T], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_csv() {
        let rows = vec![
            TimingRow {
                size: 3,
                brute_force_ms: 0.5,
                ant_colony_ms: 2.25,
            },
            TimingRow {
                size: 4,
                brute_force_ms: 1.0,
                ant_colony_ms: 3.0,
            },
        ];
        let mut buf = Vec::new();
        write_timing_csv(&rows, &mut buf).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert_eq!(text, "len,bruteforce,ant\n3,0.5,2.25\n4,1.0,3.0\n");
    }

    #[test]
    fn test_sweep_csv_header() {
        let rows = vec![SweepRow {
            alpha: 0.5,
            evaporation_rate: 0.25,
            iterations: 10,
            elite_multiplier: 2.0,
            distance: 80,
            error: 0,
        }];
        let mut buf = Vec::new();
        write_sweep_csv(&rows, &mut buf).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("alpha,r,days,elite,distance,mistake"));
        assert_eq!(lines.next(), Some("0.5,0.25,10,2.0,80,0"));
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let mut buf = Vec::new();
        write_sweep_csv(&[], &mut buf).expect("write");
        assert!(buf.is_empty());
    }
}
