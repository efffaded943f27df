use crate::domain::value::parse_integer;
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureDate {
    pub year: u64,
    pub month: u64,
    pub day: u64,
}

/// Parses the `"year,month,day"` form used by the fixture files. Parts may
/// carry surrounding whitespace; calendar validity is not checked.
pub fn parse_date(value: &str) -> Result<FixtureDate, CoreError> {
    let parts: Vec<&str> = value.split(',').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(CoreError::InvalidDate(value.to_string()));
    };
    let part = |raw: &str| {
        parse_integer("date", raw).map_err(|_| CoreError::InvalidDate(value.to_string()))
    };
    Ok(FixtureDate {
        year: part(*year)?,
        month: part(*month)?,
        day: part(*day)?,
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_date, FixtureDate};

    #[test]
    fn parse_date_reads_three_parts() {
        let date = parse_date("2020,5,13").unwrap();
        assert_eq!(
            date,
            FixtureDate {
                year: 2020,
                month: 5,
                day: 13
            }
        );
    }

    #[test]
    fn parse_date_trims_parts() {
        let date = parse_date("2020, 05 ,1").unwrap();
        assert_eq!((date.year, date.month, date.day), (2020, 5, 1));
    }

    #[test]
    fn parse_date_rejects_wrong_part_count() {
        assert!(parse_date("2020,5").is_err());
        assert!(parse_date("2020,5,13,1").is_err());
    }

    #[test]
    fn parse_date_rejects_non_numeric_parts() {
        let err = parse_date("2020,May,13").unwrap_err();
        assert!(err.to_string().contains("2020,May,13"));
    }
}
