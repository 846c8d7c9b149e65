//! Conversions between the combined display strings and the split wire fields.
//!
//! Names: the first word is the first name, every remaining word (joined by
//! single spaces) is the last name. Locations: comma separated parts are
//! assigned left to right to city, state and country.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub first: String,
    pub last: String,
}

pub fn split_name(full_name: &str) -> NameParts {
    let mut words = full_name.split_whitespace();
    let first = words.next().unwrap_or_default().to_string();
    let last = words.collect::<Vec<_>>().join(" ");
    NameParts { first, last }
}

pub fn join_name(first: &str, last: &str) -> String {
    join_non_empty(&[first, last], " ")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationParts {
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("location has {0} parts, expected at most city, state and country")]
pub struct TooManyParts(pub usize);

pub fn split_location(location: &str) -> Result<LocationParts, TooManyParts> {
    let parts: Vec<&str> = location
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() > 3 {
        return Err(TooManyParts(parts.len()));
    }

    let part = |i: usize| parts.get(i).map(|p| p.to_string()).unwrap_or_default();
    Ok(LocationParts {
        city: part(0),
        state: part(1),
        country: part(2),
    })
}

pub fn join_location(city: &str, state: &str, country: &str) -> String {
    join_non_empty(&[city, state, country], ", ")
}

fn join_non_empty(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_splits_on_first_word() {
        assert_eq!(
            split_name("Jane Doe"),
            NameParts {
                first: "Jane".into(),
                last: "Doe".into()
            }
        );
        assert_eq!(split_name("  Ana   de la  Cruz ").last, "de la Cruz");
        assert_eq!(split_name("Madonna").last, "");
        assert_eq!(split_name("").first, "");
    }

    #[test]
    fn name_join_skips_missing_parts() {
        assert_eq!(join_name("Jane", "Doe"), "Jane Doe");
        assert_eq!(join_name("Jane", ""), "Jane");
        assert_eq!(join_name("", ""), "");
    }

    #[test]
    fn location_parts_fill_left_to_right() {
        let parts = split_location("Austin, TX, USA").unwrap();
        assert_eq!(parts.city, "Austin");
        assert_eq!(parts.state, "TX");
        assert_eq!(parts.country, "USA");

        let parts = split_location("Berlin,, ").unwrap();
        assert_eq!(parts.city, "Berlin");
        assert_eq!(parts.state, "");
        assert_eq!(parts.country, "");

        assert_eq!(split_location("a, b, c, d"), Err(TooManyParts(4)));
    }

    #[test]
    fn location_join_skips_missing_parts() {
        assert_eq!(join_location("Austin", "", "USA"), "Austin, USA");
        assert_eq!(join_location("", "", ""), "");
    }
}
