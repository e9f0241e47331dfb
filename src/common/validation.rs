use std::path::{Component, Path};
use validator::{ValidationError, ValidationErrors};

/// Message of the first failing field, looking at `order` first.
pub fn first_error(errors: &ValidationErrors, order: &[&str]) -> String {
    let fields = errors.field_errors();

    order
        .iter()
        .filter_map(|field| fields.get(*field))
        .chain(fields.values())
        .flat_map(|errs| errs.iter())
        .next()
        .map(|e| match &e.message {
            Some(message) => message.to_string(),
            None => e.code.to_string(),
        })
        .unwrap_or_else(|| errors.to_string())
}

/// Accepts a bare file name. Empty values are left to the `length` rule.
pub fn plain_file_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !value.contains(['/', '\\']) => Ok(()),
        _ => Err(ValidationError::new("plain_file_name")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(plain_file_name("clip1.mp4").is_ok());
        assert!(plain_file_name("clip 1 (final).mov").is_ok());
        assert!(plain_file_name("").is_ok());
    }

    #[test]
    fn rejects_paths_and_dot_entries() {
        for name in ["../clip.mp4", "a/b.mp4", "/etc/passwd", "..", ".", "dir\\clip.mp4", "clip.mp4/"] {
            assert!(plain_file_name(name).is_err(), "{name} should be rejected");
        }
    }
}
