use serde::de::DeserializeOwned;
use std::error::Error;
use std::io::{self, Read};

/// Deserialize a loan description piped in as JSON.
/// Returns None when stdin is a terminal or carries no data.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().lock().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

fn parse_piped<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, Box<dyn Error>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(trimmed)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortgage_saver_core::mortgage::MortgageInput;

    #[test]
    fn test_blank_stdin_is_none() {
        let parsed: Option<MortgageInput> = parse_piped("  \n").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_piped_json() {
        let parsed: Option<MortgageInput> =
            parse_piped(r#"{"rate":"0.065","months":360,"amount":"200000"}"#).unwrap();
        assert_eq!(parsed.unwrap().months, 360);
    }

    #[test]
    fn test_piped_garbage_is_error() {
        assert!(parse_piped::<MortgageInput>("not json").is_err());
    }
}
