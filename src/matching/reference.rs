use crate::domain::address::core_address;
use std::error::Error;
use std::fmt;
use std::fs;

/// One row of a reference address list. `zone_class` is present only
/// for lists that carry a Zone_Class column.
#[derive(Debug, Clone)]
pub struct ReferenceRow {
    pub address: String,
    pub core_address: String,
    pub zone_class: Option<String>,
}

/// A reference address list, loaded wholesale from CSV at run start
/// and immutable for the rest of the run.
#[derive(Debug)]
pub struct ReferenceList {
    pub rows: Vec<ReferenceRow>,
}

#[derive(Debug)]
pub enum ReferenceError {
    Io(String),
    MissingColumn(String),
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceError::Io(msg) => write!(f, "could not read reference list: {msg}"),
            ReferenceError::MissingColumn(col) => {
                write!(f, "reference list has no \"{col}\" column")
            }
        }
    }
}

impl Error for ReferenceError {}

impl ReferenceList {
    pub fn load(path: &str) -> Result<Self, ReferenceError> {
        let text = fs::read_to_string(path)
            .map_err(|e| ReferenceError::Io(format!("{path}: {e}")))?;
        Self::parse(&text)
    }

    /// Columns are located by header name; extra columns are ignored.
    /// Rows with an empty address are skipped. Addresses are lowercased
    /// here so every later comparison is case-insensitive.
    pub fn parse(text: &str) -> Result<Self, ReferenceError> {
        let mut lines = text.lines();
        let header = split_csv_line(lines.next().unwrap_or(""));

        let address_idx = header
            .iter()
            .position(|c| c.trim() == "Address")
            .ok_or_else(|| ReferenceError::MissingColumn("Address".to_string()))?;
        let zone_idx = header.iter().position(|c| c.trim() == "Zone_Class");

        let mut rows = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_csv_line(line);

            let address = match fields.get(address_idx) {
                Some(a) if !a.trim().is_empty() => a.trim().to_lowercase(),
                _ => continue,
            };
            let zone_class = zone_idx
                .and_then(|i| fields.get(i))
                .map(|z| z.trim().to_string())
                .filter(|z| !z.is_empty());

            rows.push(ReferenceRow {
                core_address: core_address(&address),
                address,
                zone_class,
            });
        }

        Ok(ReferenceList { rows })
    }
}

/// Minimal CSV field splitter: commas inside double-quoted fields and
/// doubled quotes, which is all the reference lists ever use.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_columns_by_header_name() {
        let list = ReferenceList::parse(
            "OBJECTID,Address,Zone_Class\n\
             1,700 Arlington Ave N,NT-2\n\
             2,4099 Burlington Ave N,NT-3\n",
        )
        .unwrap();

        assert_eq!(list.rows.len(), 2);
        assert_eq!(list.rows[0].address, "700 arlington ave n");
        assert_eq!(list.rows[0].core_address, "700 arlington ave");
        assert_eq!(list.rows[0].zone_class.as_deref(), Some("NT-2"));
    }

    #[test]
    fn zone_class_column_is_optional() {
        let list = ReferenceList::parse("Address\n123 Main St\n").unwrap();
        assert_eq!(list.rows[0].zone_class, None);
    }

    #[test]
    fn missing_address_column_is_an_error() {
        let err = ReferenceList::parse("OBJECTID,Zone_Class\n1,NT-2\n").unwrap_err();
        assert!(matches!(err, ReferenceError::MissingColumn(_)));
    }

    #[test]
    fn quoted_fields_keep_their_commas() {
        let list = ReferenceList::parse(
            "Address,Zone_Class\n\"123 Main St, Unit 4\",NT-2\n",
        )
        .unwrap();
        assert_eq!(list.rows[0].address, "123 main st, unit 4");
        assert_eq!(list.rows[0].core_address, "123 main st");
    }

    #[test]
    fn blank_rows_and_empty_addresses_are_skipped() {
        let list = ReferenceList::parse("Address,Zone_Class\n,NT-2\n\n123 Oak St,NT-3\n").unwrap();
        assert_eq!(list.rows.len(), 1);
        assert_eq!(list.rows[0].address, "123 oak st");
    }
}
