use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use lumen_core::results::ImageResult;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> ImageResult {
        ImageResult {
            description: "A dog".into(),
            tags: vec!["dog".into()],
            confidence: 0.91,
        }
    }

    #[test]
    fn raw_is_single_line() {
        let rendered = render(&sample(), OutputFormat::Raw).unwrap();
        assert_eq!(
            rendered,
            r#"{"description":"A dog","tags":["dog"],"confidence":0.91}"#
        );
    }

    #[test]
    fn json_is_pretty() {
        let rendered = render(&sample(), OutputFormat::Json).unwrap();
        assert!(rendered.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["confidence"], 0.91);
    }
}
