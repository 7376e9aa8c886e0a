use super::*;

impl IniConfig {
    /// Get a typed value using a `section.key` path.
    ///
    /// A path without a dot looks in the unnamed section.
    ///
    /// # Examples
    /// ```no_run
    /// # use ini_cfg::IniConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = IniConfig::from_str("[server]\nport=8080").map_err(|e| e[0].clone())?;
    /// let port: u16 = config.get("server.port")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if the path doesn't exist or the value can't be converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, IniError>
    where
        T: TryFrom<Value, Error = IniError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Get an optional typed value - returns `None` if the key doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, IniError>
    where
        T: TryFrom<Value, Error = IniError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(IniError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = IniError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get the raw `Value` stored at `path`.
    pub fn get_value(&self, path: &str) -> Result<Value, IniError> {
        let (section, key) = helpers::split_path(path);
        self.document
            .get(section, key)
            .cloned()
            .ok_or_else(|| IniError::NotFound {
                path: path.to_string(),
                hint: Some(if self.document.has_section(section) {
                    format!("Section '{}' has no key '{}'", section, key)
                } else {
                    format!("There is no section '{}'", section)
                }),
                code: Some(304),
            })
    }

    /// Keys of a section, in first-assignment order.
    pub fn keys(&self, section: &str) -> Result<Vec<String>, IniError> {
        self.document
            .section(section)
            .map(|s| s.keys().map(String::from).collect())
            .ok_or_else(|| IniError::NotFound {
                path: section.to_string(),
                hint: Some("Check the section name in brackets".into()),
                code: Some(305),
            })
    }

    /// Check if a configuration path exists.
    pub fn has(&self, path: &str) -> bool {
        let (section, key) = helpers::split_path(path);
        self.document.get(section, key).is_some()
    }
}

/// Attach the source line of `path` to type and validation errors.
pub(super) fn enhance_error_with_line_info(e: IniError, path: &str, raw_content: &str) -> IniError {
    let (section, key) = helpers::split_path(path);
    match e {
        IniError::TypeError { message, hint, code, .. } => {
            let (line, snippet) = helpers::find_key_line(section, key, raw_content);
            if line > 0 {
                IniError::TypeError {
                    message: format!("{}\n  → {}", message, snippet),
                    line,
                    hint,
                    code,
                }
            } else {
                IniError::TypeError { message, line: 0, hint, code }
            }
        }
        IniError::ValidationError { message, hint, code, .. } => {
            let (line, snippet) = helpers::find_key_line(section, key, raw_content);
            if line > 0 {
                IniError::ValidationError {
                    message: format!("{}\n  → {}", message, snippet),
                    line,
                    hint,
                    code,
                }
            } else {
                IniError::ValidationError { message, line: 0, hint, code }
            }
        }
        other => other,
    }
}
