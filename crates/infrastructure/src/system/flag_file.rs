use crate::dns::InverseQueryPolicy;
use iquery_domain::DomainError;
use tracing::debug;

/// Reads the inverse-query switch from a side file.
///
/// The file must begin (after optional whitespace) with a signed decimal
/// integer; anything after the digits is ignored.
pub struct FlagFileReader {
    path: String,
}

impl FlagFileReader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn read_flag(&self) -> Result<i64, DomainError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| DomainError::FlagFileRead(self.path.clone(), e.to_string()))?;

        let value = parse_leading_int(&content)
            .ok_or_else(|| DomainError::FlagMissing(self.path.clone()))?;

        debug!(path = %self.path, value, "Flag file read");
        Ok(value)
    }

    pub fn read_policy(&self) -> Result<InverseQueryPolicy, DomainError> {
        self.read_flag().map(InverseQueryPolicy::from_flag)
    }
}

fn parse_leading_int(content: &str) -> Option<i64> {
    let trimmed = content.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }

    trimmed[..sign_len + digits].parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("1"), Some(1));
        assert_eq!(parse_leading_int("  \n42\n"), Some(42));
        assert_eq!(parse_leading_int("0 trailing"), Some(0));
        assert_eq!(parse_leading_int("-7abc"), Some(-7));
        assert_eq!(parse_leading_int("+3"), Some(3));
    }

    #[test]
    fn test_parse_leading_int_rejects_non_numbers() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("   "), None);
        assert_eq!(parse_leading_int("yes"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("+-1"), None);
    }
}
