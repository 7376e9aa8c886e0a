use super::*;

impl IniConfig {
    /// Get a value with validation - returns detailed error with line info if validation fails
    pub fn get_validated<T, F>(&self, path: &str, validator: F, valid_values: &str) -> Result<T, IniError>
    where
        T: TryFrom<Value, Error = IniError>,
        F: FnOnce(&T) -> bool,
    {
        let typed_value: T = self.get(path)?;

        if !validator(&typed_value) {
            let (section, key) = helpers::split_path(path);
            let (line, snippet) = helpers::find_key_line(section, key, &self.raw_content);
            return Err(IniError::ValidationError {
                message: format!("Invalid value for `{}`\nExpected: {}", path, valid_values),
                line,
                hint: Some(format!("Valid values are: {}\n  → {}", valid_values, snippet)),
                code: Some(450),
            });
        }

        Ok(typed_value)
    }

    /// Get a string value and validate it's one of the allowed values (case-insensitive)
    pub fn get_string_enum(&self, path: &str, allowed_values: &[&str]) -> Result<String, IniError> {
        let value: String = self.get(path)?;

        if !allowed_values.iter().any(|v| v.eq_ignore_ascii_case(&value)) {
            let (section, key) = helpers::split_path(path);
            let (line, snippet) = helpers::find_key_line(section, key, &self.raw_content);
            return Err(IniError::ValidationError {
                message: format!("Invalid value '{}' for `{}`", value, path),
                line,
                hint: Some(format!("Expected one of: {}\n  → {}", allowed_values.join(", "), snippet)),
                code: Some(451),
            });
        }

        Ok(value)
    }
}
