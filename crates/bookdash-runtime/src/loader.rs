use crate::{Error, Result};
use bookdash_engine::RecordSet;
use bookdash_types::{BookRating, Column};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load the ratings dataset from a CSV file.
pub fn load_records(path: &Path) -> Result<RecordSet> {
    let file = File::open(path)?;
    let records = read_records(file)?;
    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        "loaded dataset"
    );
    Ok(records)
}

/// Parse CSV rows into a record set after checking the header.
///
/// Unknown columns are ignored. Every column in [`Column::ALL`] must be
/// present, either under its dataset header or its alias.
pub fn read_records<R: Read>(reader: R) -> Result<RecordSet> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

    let headers = reader.headers()?.clone();
    validate_headers(&headers)?;

    let mut records = Vec::new();
    for row in reader.deserialize::<BookRating>() {
        records.push(row?);
    }
    Ok(RecordSet::new(records))
}

fn validate_headers(headers: &csv::StringRecord) -> Result<()> {
    for column in Column::ALL {
        if !headers.iter().any(|h| column.matches(h)) {
            tracing::warn!(column = column.header(), "dataset header is missing a column");
            return Err(Error::MissingColumn(column));
        }
    }
    Ok(())
}

/// The decorative image must exist before any page is shown.
pub fn check_image_asset(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::MissingAsset(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str =
        "Book-Title,Book-Author,ISBN,Year-Of-Publication,Publisher,Country,Age,Book-Rating,Image-URL-L";

    #[test]
    fn test_read_records() -> Result<()> {
        let data = format!(
            "{HEADER}\n\
             Carrie,Stephen King,0385086954,1974,Doubleday,usa,34,9,http://img/1.jpg\n\
             Emma,Jane Austen,0140434984,1815,Penguin,,,10,\n"
        );

        let records = read_records(data.as_bytes())?;
        assert_eq!(records.len(), 2);
        assert_eq!(records.as_slice()[1].country, None);
        assert_eq!(records.as_slice()[1].rating, Some(10.0));
        Ok(())
    }

    #[test]
    fn test_extra_columns_are_ignored() -> Result<()> {
        let data = format!(",User-ID,{HEADER}\n0,276725,It,Stephen King,x,1986,Viking,usa,,5,\n");

        let records = read_records(data.as_bytes())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records.as_slice()[0].title.as_deref(), Some("It"));
        assert_eq!(records.as_slice()[0].rating, Some(5.0));
        Ok(())
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let data = "Book-Title,Book-Author\nIt,Stephen King\n";
        let err = read_records(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(Column::Isbn)));
        assert_eq!(err.to_string(), "Dataset is missing column 'ISBN'");
    }

    #[test]
    fn test_ragged_rows_are_fatal() {
        let data = format!("{HEADER}\nonly,three,fields\n");
        let err = read_records(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn test_empty_dataset() -> Result<()> {
        let records = read_records(format!("{HEADER}\n").as_bytes())?;
        assert!(records.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_records(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_check_image_asset() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let image = temp_dir.path().join("book.png");

        assert!(matches!(
            check_image_asset(&image),
            Err(Error::MissingAsset(_))
        ));

        std::fs::write(&image, b"\x89PNG")?;
        check_image_asset(&image)?;
        Ok(())
    }
}
