use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a loan description from a JSON or YAML file (by extension).
pub fn read_input<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    parse_input(&canonical, &contents)
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e).into())
}

fn parse_input<T: DeserializeOwned>(
    path: &Path,
    contents: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(contents)?),
        _ => Ok(serde_json::from_str(contents)?),
    }
}

/// Resolve the path against the working directory and require a regular file.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortgage_saver_core::mortgage::MortgageInput;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_yaml_by_extension() {
        let input: MortgageInput = parse_input(
            Path::new("loan.yaml"),
            "rate: \"0.065\"\nmonths: 360\namount: \"200000\"\n",
        )
        .unwrap();
        assert_eq!(input.rate, dec!(0.065));
        assert_eq!(input.months, 360);
    }

    #[test]
    fn test_parse_json_default() {
        let input: MortgageInput = parse_input(
            Path::new("loan.json"),
            r#"{"rate":"0.05","months":120,"amount":"1000.50"}"#,
        )
        .unwrap();
        assert_eq!(input.amount, dec!(1000.50));
    }

    #[test]
    fn test_missing_file() {
        let err = read_input::<MortgageInput>("definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
