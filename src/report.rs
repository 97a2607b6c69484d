use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use log::info;
use crate::results::ResultTable;

pub const REPORT_TITLE: &str = "Sorting algorithm comparison results";

/// Writes the table grouped by algorithm, then size (in `sizes()` order), then shape.
pub fn write_report<W: Write>(results: &ResultTable, mut out: W) -> io::Result<()> {
    writeln!(out, "{}\n", REPORT_TITLE)?;
    let sizes = results.sizes();
    for algorithm in results.algorithms() {
        writeln!(out, "Algorithm: {}", algorithm.name)?;
        for size in &sizes {
            let Some(shapes) = algorithm.sizes.get(size) else {
                continue;
            };
            writeln!(out, "  Size: {}", size)?;
            for (shape, secs) in shapes {
                writeln!(out, "    Dataset: {}, Time: {:.6} seconds", shape, secs)?;
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

pub fn save_results<P: AsRef<Path>>(results: &ResultTable, path: P) -> io::Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_report(results, BufWriter::new(file))?;
    info!("Results written to {}", path.display());
    Ok(())
}
