use crate::error::{SvdistError, SvdistResult};
use std::{fmt::Display, path::Path, sync::Once};

pub type Result<T> = SvdistResult<T>;

#[allow(unused)]
static INIT_LOG: Once = Once::new();

#[allow(unused)]
pub fn init_logger() {
    INIT_LOG.call_once(|| {
        env_logger::builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .init();
    });
}

pub fn handle_error_and_exit(err: impl Display) -> ! {
    log::error!("{err}");
    std::process::exit(1);
}

pub fn try_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::svdist_error!(
            "Path/File does not exist: {}",
            path.display()
        ));
    }
    Ok(())
}

/// Returns the tab-separated field at `index`, or a `MissingColumn` error naming the source line.
pub fn field<'a>(fields: &[&'a str], index: usize, path: &Path, line: usize) -> Result<&'a str> {
    fields
        .get(index)
        .copied()
        .ok_or_else(|| SvdistError::MissingColumn {
            path: path.to_path_buf(),
            line,
            expected: index + 1,
            found: fields.len(),
        })
}

pub fn parse_i64(value: &str, path: &Path, line: usize) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|source| SvdistError::InvalidInteger {
            path: path.to_path_buf(),
            line,
            value: value.to_string(),
            source,
        })
}

pub fn format_number_with_commas(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (digit_count, c) in digits.chars().rev().enumerate() {
        if digit_count > 0 && digit_count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_commas() {
        assert_eq!(format_number_with_commas(0), "0");
        assert_eq!(format_number_with_commas(100), "100");
        assert_eq!(format_number_with_commas(1_000), "1,000");
        assert_eq!(format_number_with_commas(1_234_567), "1,234,567");
    }

    #[test]
    fn test_field_reports_missing_column() {
        let fields = vec!["DEL", "1000"];
        assert_eq!(field(&fields, 1, Path::new("x.txt"), 3).unwrap(), "1000");
        let err = field(&fields, 5, Path::new("x.txt"), 3).unwrap_err();
        assert!(matches!(
            err,
            SvdistError::MissingColumn {
                line: 3,
                expected: 6,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64("-30", Path::new("x.txt"), 1).unwrap(), -30);
        assert_eq!(parse_i64(" 42 ", Path::new("x.txt"), 1).unwrap(), 42);
        let err = parse_i64("?", Path::new("x.txt"), 7).unwrap_err();
        assert!(matches!(err, SvdistError::InvalidInteger { line: 7, .. }));
    }

    #[test]
    fn test_try_exists() {
        assert!(try_exists(Path::new("/definitely/not/here")).is_err());
        assert!(try_exists(Path::new("/")).is_ok());
    }
}
