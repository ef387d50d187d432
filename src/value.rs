use anyhow::{anyhow, Result};

/// A cell value as handed over by the host engine at evaluation time.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Boolean(bool),
    Empty,
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Value::Boolean(boolean)
    }
}

fn render_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        format!("{}", number)
    }
}

pub fn to_text(value: &Value) -> String {
    match value {
        Value::Number(number) => render_number(*number),
        Value::Text(text) => text.clone(),
        Value::Boolean(true) => "TRUE".to_string(),
        Value::Boolean(false) => "FALSE".to_string(),
        Value::Empty => String::new(),
    }
}

pub fn to_number(value: &Value) -> Result<f64> {
    match value {
        Value::Number(number) => Ok(*number),
        Value::Boolean(true) => Ok(1.0),
        Value::Boolean(false) => Ok(0.0),
        Value::Empty => Ok(0.0),
        Value::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| anyhow!(format!("`{}' cannot be read as a number", text))),
    }
}

pub fn to_boolean(value: &Value) -> Result<bool> {
    match value {
        Value::Boolean(boolean) => Ok(*boolean),
        Value::Number(number) => Ok(*number != 0.0),
        Value::Empty => Ok(false),
        Value::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("false") {
                Ok(false)
            } else if trimmed.eq_ignore_ascii_case("true") {
                Ok(true)
            } else {
                Err(anyhow!(format!("`{}' cannot be read as a boolean", text)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::value::{to_boolean, to_number, to_text, Value};
    use anyhow::Result;

    #[test]
    fn text_rendering() {
        assert_eq!(to_text(&Value::Number(44562.0)), "44562");
        assert_eq!(to_text(&Value::Number(0.5)), "0.5");
        assert_eq!(to_text(&Value::Boolean(true)), "TRUE");
        assert_eq!(to_text(&Value::Boolean(false)), "FALSE");
        assert_eq!(to_text(&Value::Empty), "");
        assert_eq!(to_text(&Value::Text("Q1/2022".into())), "Q1/2022");
    }

    #[test]
    fn number_coercion() -> Result<()> {
        assert_eq!(to_number(&Value::Text(" 12 ".into()))?, 12.0);
        assert_eq!(to_number(&Value::Boolean(true))?, 1.0);
        assert_eq!(to_number(&Value::Empty)?, 0.0);
        assert_eq!(
            format!("{}", to_number(&Value::Text("twelve".into())).unwrap_err()),
            "`twelve' cannot be read as a number"
        );
        Ok(())
    }

    #[test]
    fn boolean_coercion() -> Result<()> {
        assert!(to_boolean(&Value::Text("TRUE".into()))?);
        assert!(!to_boolean(&Value::Text("false".into()))?);
        assert!(!to_boolean(&Value::Empty)?);
        assert!(to_boolean(&Value::Number(1.0))?);
        assert_eq!(
            format!("{}", to_boolean(&Value::Text("yes".into())).unwrap_err()),
            "`yes' cannot be read as a boolean"
        );
        Ok(())
    }
}
