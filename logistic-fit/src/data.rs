use crate::error::DataError;

use std::fs;
use std::path::Path;

/// Layout of a two-column numeric text file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    /// Comma separated values
    Comma,
    /// Columns separated by any amount of whitespace
    Whitespace,
}

const BINARY_EXTENSIONS: &[&str] = &["npz", "npy", "gz", "zip", "xz", "bz2"];

fn first_data_line(content: &str) -> Option<&str> {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
}

impl DataFormat {
    /// Format implied by the file extension alone
    ///
    /// `None` means the extension does not tell the delimiter, binary archives are reported as
    /// [DataError::UnsupportedFormat].
    pub fn from_extension(path: &Path) -> Result<Option<Self>, DataError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some(ext) if BINARY_EXTENSIONS.contains(&ext) => {
                Err(DataError::UnsupportedFormat(path.to_owned()))
            }
            Some("csv") => Ok(Some(Self::Comma)),
            _ => Ok(None),
        }
    }

    /// Format of the first non-comment line: comma separated if it has a comma
    pub fn from_content(path: &Path, content: &str) -> Result<Self, DataError> {
        match first_data_line(content) {
            Some(line) if line.contains(',') => Ok(Self::Comma),
            Some(_) => Ok(Self::Whitespace),
            None => Err(DataError::Empty(path.to_owned())),
        }
    }

    /// Detects the format from the file extension and, if it is not conclusive, from the content
    pub fn detect(path: &Path, content: &str) -> Result<Self, DataError> {
        match Self::from_extension(path)? {
            Some(format) => Ok(format),
            None => Self::from_content(path, content),
        }
    }
}

/// Two numeric columns of a data file
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Columns {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Columns {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Keeps points with `x <= limit`
    pub fn mask_max(&self, limit: f64) -> Self {
        let (x, y) = self
            .x
            .iter()
            .zip(self.y.iter())
            .filter(|(&x, _)| x <= limit)
            .map(|(&x, &y)| (x, y))
            .unzip();
        Self { x, y }
    }

    fn push_fields<'a>(
        &mut self,
        line: usize,
        mut fields: impl Iterator<Item = &'a str>,
    ) -> Result<(), DataError> {
        let mut parse = |found: usize| -> Result<f64, DataError> {
            let value = fields
                .next()
                .ok_or(DataError::NotEnoughColumns { line, found })?
                .trim();
            value.parse().map_err(|source| DataError::ParseFloat {
                line,
                value: value.to_owned(),
                source,
            })
        };
        let x = parse(0)?;
        let y = parse(1)?;
        self.x.push(x);
        self.y.push(y);
        Ok(())
    }
}

/// Parses the first two columns of every non-comment line, extra columns are ignored
pub fn parse_columns(content: &str, format: DataFormat) -> Result<Columns, DataError> {
    let mut columns = Columns::default();
    match format {
        DataFormat::Comma => {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .comment(Some(b'#'))
                .flexible(true)
                .trim(csv::Trim::All)
                .from_reader(content.as_bytes());
            for record in reader.records() {
                let record = record?;
                // Indented comments and blank lines are not caught by the reader
                let is_comment = record.get(0).map_or(false, |field| field.starts_with('#'));
                if is_comment || record.iter().all(str::is_empty) {
                    continue;
                }
                let line = record.position().map_or(0, |p| p.line() as usize);
                columns.push_fields(line, record.iter())?;
            }
        }
        DataFormat::Whitespace => {
            for (i, line) in content.lines().enumerate() {
                let line_trimmed = line.trim();
                if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
                    continue;
                }
                columns.push_fields(i + 1, line_trimmed.split_whitespace())?;
            }
        }
    }
    Ok(columns)
}

/// Loads two numeric columns from a delimited text file
pub fn load_columns<P: AsRef<Path>>(path: P) -> Result<Columns, DataError> {
    let path = path.as_ref();
    let by_extension = DataFormat::from_extension(path)?;
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_owned(),
        source,
    })?;
    let format = match by_extension {
        Some(format) => format,
        None => DataFormat::from_content(path, &content)?,
    };
    log::debug!("loading {} as {:?}", path.display(), format);
    let columns = parse_columns(&content, format)?;
    if columns.is_empty() {
        return Err(DataError::Empty(path.to_owned()));
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use tempfile::Builder;

    fn write_temp(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn detect_by_extension() {
        assert_eq!(
            DataFormat::Comma,
            DataFormat::detect(Path::new("g149novickB.csv"), "1 2").unwrap()
        );
        assert!(matches!(
            DataFormat::detect(Path::new("HIVseries.npz"), ""),
            Err(DataError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn detect_by_content() {
        assert_eq!(
            DataFormat::Comma,
            DataFormat::detect(Path::new("g149novickA.txt"), "# t, y\n0.0,0.1\n").unwrap()
        );
        assert_eq!(
            DataFormat::Whitespace,
            DataFormat::detect(Path::new("millikan.txt"), "5.5e14  0.5\n").unwrap()
        );
        assert!(matches!(
            DataFormat::detect(Path::new("empty.txt"), "# nothing\n\n"),
            Err(DataError::Empty(_))
        ));
    }

    #[test]
    fn comma_columns() {
        let columns = parse_columns(
            "# t,y\n0.0, 1.0\n1.0,2.0,extra\n\n2.5 ,3.5\n",
            DataFormat::Comma,
        )
        .unwrap();
        assert_eq!(vec![0.0, 1.0, 2.5], columns.x);
        assert_eq!(vec![1.0, 2.0, 3.5], columns.y);
    }

    #[test]
    fn comma_columns_with_indented_comments() {
        let columns = parse_columns(
            "0.0,1.0\n  # note, not data\n   \n\t#another\n1.0,2.0\n",
            DataFormat::Comma,
        )
        .unwrap();
        assert_eq!(vec![0.0, 1.0], columns.x);
        assert_eq!(vec![1.0, 2.0], columns.y);
    }

    #[test]
    fn whitespace_columns() {
        let columns = parse_columns(
            "# frequency voltage\n5.5e14\t0.5\n  6.9e14   1.1  \n",
            DataFormat::Whitespace,
        )
        .unwrap();
        assert_eq!(vec![5.5e14, 6.9e14], columns.x);
        assert_eq!(vec![0.5, 1.1], columns.y);
    }

    #[test]
    fn malformed_value_is_an_error() {
        let err = parse_columns("1 2\n3 abc\n", DataFormat::Whitespace).unwrap_err();
        assert!(matches!(err, DataError::ParseFloat { line: 2, .. }));

        let err = parse_columns("1,2\nx,4\n", DataFormat::Comma).unwrap_err();
        assert!(matches!(err, DataError::ParseFloat { line: 2, .. }));
    }

    #[test]
    fn single_column_is_an_error() {
        let err = parse_columns("1 2\n3\n", DataFormat::Whitespace).unwrap_err();
        assert!(matches!(
            err,
            DataError::NotEnoughColumns { line: 2, found: 1 }
        ));
    }

    #[test]
    fn mask() {
        let columns = Columns {
            x: vec![1.0, 10.0, 11.0, 5.0],
            y: vec![0.1, 0.2, 0.3, 0.4],
        };
        let masked = columns.mask_max(10.0);
        assert_eq!(vec![1.0, 10.0, 5.0], masked.x);
        assert_eq!(vec![0.1, 0.2, 0.4], masked.y);
    }

    #[test]
    fn load_files() {
        let file = write_temp(".csv", b"0,1\n1,3\n");
        let columns = load_columns(file.path()).unwrap();
        assert_eq!(2, columns.len());

        let file = write_temp(".txt", b"0 1\n1 3\n2 5\n");
        let columns = load_columns(file.path()).unwrap();
        assert_eq!(vec![1.0, 3.0, 5.0], columns.y);

        let file = write_temp(".npz", b"PK\x03\x04\xff\xfe");
        assert!(matches!(
            load_columns(file.path()),
            Err(DataError::UnsupportedFormat(_))
        ));

        assert!(matches!(
            load_columns("/nonexistent/data.txt"),
            Err(DataError::Io { .. })
        ));
    }
}
