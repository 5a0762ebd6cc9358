use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum IndexError {
	Missing,
	NotANumber(String),
	OutOfRange(i64)
}

impl fmt::Display for IndexError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			IndexError::Missing => write!(f, "Invalid index: missing"),
			IndexError::NotANumber(raw) => write!(f, "Invalid index: {:?} is not a number", raw),
			IndexError::OutOfRange(index) => write!(f, "Invalid index: {} is out of range", index),
		}
	}
}

impl std::error::Error for IndexError {}

/// Validates a raw `index` query value against `[0, capacity)`.
pub fn parse_index(raw: Option<&str>, capacity: usize) -> Result<usize, IndexError> {
	let raw = raw.ok_or(IndexError::Missing)?;
	let index: i64 = raw.parse().map_err(|_| IndexError::NotANumber(raw.into()))?;
	if index < 0 || index as u64 >= capacity as u64 {
		return Err(IndexError::OutOfRange(index));
	}
	Ok(index as usize)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_indices_in_range() {
		assert_eq!(parse_index(Some("0"), 10), Ok(0));
		assert_eq!(parse_index(Some("9"), 10), Ok(9));
		assert_eq!(parse_index(Some("+3"), 10), Ok(3));
	}

	#[test]
	fn rejects_everything_else() {
		assert_eq!(parse_index(None, 10), Err(IndexError::Missing));
		assert_eq!(parse_index(Some(""), 10), Err(IndexError::NotANumber("".into())));
		assert_eq!(parse_index(Some("abc"), 10), Err(IndexError::NotANumber("abc".into())));
		assert_eq!(parse_index(Some("1.5"), 10), Err(IndexError::NotANumber("1.5".into())));
		assert_eq!(parse_index(Some(" 3"), 10), Err(IndexError::NotANumber(" 3".into())));
		assert_eq!(parse_index(Some("3\n"), 10), Err(IndexError::NotANumber("3\n".into())));
		assert_eq!(parse_index(Some("-1"), 10), Err(IndexError::OutOfRange(-1)));
		assert_eq!(parse_index(Some("10"), 10), Err(IndexError::OutOfRange(10)));
		assert_eq!(parse_index(Some("0"), 0), Err(IndexError::OutOfRange(0)));
	}

	#[test]
	fn huge_numbers_are_not_numbers() {
		assert!(matches!(parse_index(Some("99999999999999999999999"), 10), Err(IndexError::NotANumber(_))));
	}

	#[test]
	fn messages() {
		assert_eq!(IndexError::Missing.to_string(), "Invalid index: missing");
		assert_eq!(IndexError::OutOfRange(-1).to_string(), "Invalid index: -1 is out of range");
		assert_eq!(IndexError::NotANumber("x".into()).to_string(), "Invalid index: \"x\" is not a number");
	}
}
