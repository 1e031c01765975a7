use super::{FilterError, Report};
use std::io::{self, Write};

/// Writes each prediction as a single `<mean> <variance>` line.
pub struct Stdout<W: Write> {
    out: W,
}

impl Stdout<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for Stdout<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Stdout<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Report for Stdout<W> {
    fn report(&mut self, mean: f64, variance: f64) -> Result<(), FilterError> {
        writeln!(self.out, "{} {}", mean, variance)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_writes_mean_and_variance_on_one_line() -> Result<(), FilterError> {
        let mut buf = Vec::new();
        Stdout::with_writer(&mut buf).report(2.0, 0.905)?;

        assert_eq!("2 0.905\n", String::from_utf8_lossy(&buf));

        Ok(())
    }

    #[test]
    fn test_report_appends_one_line_per_call() -> Result<(), FilterError> {
        let mut buf = Vec::new();
        let mut stdout = Stdout::with_writer(&mut buf);
        stdout.report(1.5, 0.25)?;
        stdout.report(-3.0, 4.125)?;

        assert_eq!("1.5 0.25\n-3 4.125\n", String::from_utf8_lossy(&buf));

        Ok(())
    }
}
