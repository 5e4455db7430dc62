use std::io::Write;

use advect_solvers::Run;
use serde::Serialize;

#[derive(Serialize)]
struct Row {
    x: f64,
    numerical: f64,
    analytic: f64,
}

/// Writes one CSV row per grid point with a header line.
pub fn write_csv<W: Write>(run: &Run, writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for ((x, numerical), analytic) in run.grid.iter().zip(&run.numerical).zip(&run.analytic) {
        writer.serialize(Row {
            x,
            numerical: *numerical,
            analytic: *analytic,
        })?;
    }
    writer.flush()?;
    Ok(())
}
