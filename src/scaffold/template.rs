// src/scaffold/template.rs

/// Replace every `{{KEY}}` placeholder with its value.
///
/// Unknown placeholders are left untouched.
pub fn render_template(template: &str, substitutions: &[(&str, &str)]) -> String {
    substitutions
        .iter()
        .fold(template.to_string(), |rendered, (key, value)| {
            rendered.replace(&format!("{{{{{key}}}}}"), value)
        })
}
