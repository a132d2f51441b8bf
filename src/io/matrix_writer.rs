use crate::{core::matrix::DistanceMatrix, utils::util::Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Shortest round-trip representation, always with a fractional part (`1.0`, `0.25`).
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}

pub fn write_matrix<W: Write>(matrix: &DistanceMatrix, out: &mut W) -> Result<()> {
    let header: Vec<String> = matrix.columns.iter().map(|key| key.to_string()).collect();
    writeln!(out, "\t{}", header.join("\t"))?;
    for (row, sample) in matrix.samples.iter().enumerate() {
        write!(out, "{sample}")?;
        for value in matrix.row(row) {
            write!(out, "\t{}", format_value(*value))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_matrix_file(matrix: &DistanceMatrix, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        crate::svdist_error!("Failed to create matrix file {}: {e}", path.display())
    })?;
    let mut writer = BufWriter::new(file);
    write_matrix(matrix, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{event::EventKey, svtype::SvType};

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.0), "1.0");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(0.0), "0.0");
    }

    #[test]
    fn test_write_matrix() {
        let columns = vec![
            EventKey {
                sv_type: SvType::DELETION,
                anchor: 1000,
            },
            EventKey {
                sv_type: SvType::INSERTION,
                anchor: 5000,
            },
        ];
        let mut matrix = DistanceMatrix::new(vec!["S1".to_string(), "S2".to_string()], columns);
        matrix.set(0, 0, 0.5);
        matrix.set(1, 0, 0.5);
        matrix.set(1, 1, 1.0);

        let mut out = Vec::new();
        write_matrix(&matrix, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\tDEL:1000\tINS:5000\nS1\t0.5\t0.0\nS2\t0.5\t1.0\n"
        );
    }
}
