/// How an app's params field is shown in the run dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamsView {
    Empty,
    Pretty(String),
    Invalid(String),
}

impl ParamsView {
    pub fn is_invalid(&self) -> bool {
        matches!(self, ParamsView::Invalid(_))
    }

    pub fn text(&self) -> String {
        match self {
            ParamsView::Empty => "{}".to_string(),
            ParamsView::Pretty(s) => s.clone(),
            ParamsView::Invalid(raw) => format!("invalid params: {}", raw),
        }
    }
}

pub fn format_params(raw: &str) -> ParamsView {
    if raw.trim().is_empty() {
        return ParamsView::Empty;
    }
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => ParamsView::Pretty(pretty),
            Err(_) => ParamsView::Invalid(raw.to_string()),
        },
        Err(_) => ParamsView::Invalid(raw.to_string()),
    }
}

#[cfg(test)]
#[path = "../tests/catalog/params_tests.rs"]
mod tests;
