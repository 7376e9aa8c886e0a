// Author: Dustin Pilgrim
// License: MIT

use std::fmt::Write;
use std::fs;

use crate::ast::{Document, Section, Value};
use crate::IniError;

/// Export a document back to INI text.
///
/// The unnamed section comes first and has no header; every named section
/// follows as `[name]` plus its `key=value` lines, separated by a blank line.
/// Strings are always quoted and floats always carry a `.`, so parsing the
/// output gives back an equal document as long as no string holds a `"` or a
/// line break.
pub fn export_document_to_ini(doc: &Document) -> String {
    let mut out = String::new();

    if let Some(global) = doc.section("") {
        write_entries(&mut out, global);
    }

    for (name, section) in doc.sections.iter().filter(|(name, _)| !name.is_empty()) {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "[{}]", name);
        write_entries(&mut out, section);
    }

    out
}

fn write_entries(out: &mut String, section: &Section) {
    for (key, value) in section.iter() {
        let _ = writeln!(out, "{}={}", key, format_value(value));
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Int(n) => n.to_string(),
        Value::Float(n) => {
            let text = n.to_string();
            if n.is_finite() && !text.contains('.') {
                format!("{}.0", text)
            } else {
                text
            }
        }
        Value::Bool(b) => b.to_string(),
    }
}

/// Export a document to pretty-printed JSON: an object of sections, each an
/// object of typed values. The unnamed section is keyed by `""`.
pub fn export_document_to_json(doc: &Document) -> Result<String, IniError> {
    serde_json::to_string_pretty(doc).map_err(|e| IniError::ExportError {
        message: format!("Failed to serialize document: {}", e),
        code: Some(501),
    })
}

/// Export an INI file directly to JSON.
///
/// Convenience function that reads, parses, and exports in one call.
///
/// # Errors
/// Returns every error found if the file can't be read or doesn't parse.
pub fn export_ini_file(path: &str) -> Result<String, Vec<IniError>> {
    let input = fs::read_to_string(path).map_err(|e| {
        vec![IniError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.to_string(),
            hint: None,
            code: Some(500),
        }]
    })?;

    let doc = crate::parse(&input)?;
    export_document_to_json(&doc).map_err(|e| vec![e])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn sample_document() -> Document {
        let mut doc = Document::new();
        doc.section_mut("").insert("global", Value::String("g".into()));
        let server = doc.section_mut("server");
        server.insert("host", Value::String("local host".into()));
        server.insert("port", Value::Int(8080));
        server.insert("offset", Value::Int(-3));
        server.insert("ratio", Value::Float(-5.0));
        server.insert("scale", Value::Float(10.25));
        server.insert("debug", Value::Bool(false));
        doc.section_mut("empty");
        doc.section_mut("my section").insert("my key", Value::Bool(true));
        doc
    }

    #[test]
    fn test_export_ini_layout() {
        let mut doc = Document::new();
        doc.section_mut("").insert("a", Value::Int(1));
        doc.section_mut("s").insert("b", Value::Float(2.0));
        doc.section_mut("t").insert("c", Value::String("x".into()));

        assert_eq!(export_document_to_ini(&doc), "a=1\n\n[s]\nb=2.0\n\n[t]\nc=\"x\"\n");
    }

    #[test]
    fn test_export_without_unnamed_section() {
        let mut doc = Document::new();
        doc.section_mut("only").insert("k", Value::Bool(true));
        assert_eq!(export_document_to_ini(&doc), "[only]\nk=true\n");
    }

    #[test]
    fn test_unnamed_section_is_written_first() {
        let mut doc = Document::new();
        doc.section_mut("late").insert("k", Value::Int(1));
        doc.section_mut("").insert("g", Value::Int(2));
        assert!(export_document_to_ini(&doc).starts_with("g=2\n"));
    }

    #[test]
    fn test_round_trip() {
        let doc = sample_document();
        let text = export_document_to_ini(&doc);
        let reparsed = parse(&text).expect("exported text should parse");
        assert_eq!(reparsed, doc);
    }

    #[test]
    fn test_round_trip_of_parsed_text() {
        let input = "name = demo\n[A]\nx = 1 ; one\ny = 0.5\nz = \"quoted value\"\n";
        let doc = parse(input).unwrap();
        assert_eq!(parse(&export_document_to_ini(&doc)).unwrap(), doc);
    }

    #[test]
    fn test_export_json() {
        let json_output = export_document_to_json(&sample_document()).expect("Failed to export document to JSON");

        println!("--- Exported JSON ---\n{}", json_output);

        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v[""]["global"], "g");
        assert_eq!(v["server"]["port"], 8080);
        assert_eq!(v["server"]["ratio"], -5.0);
        assert_eq!(v["server"]["debug"], false);
        assert!(v["empty"].as_object().is_some_and(|o| o.is_empty()));
    }

    #[test]
    fn test_export_ini_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.ini");
        fs::write(&path, "[db]\nname = main\n").unwrap();

        let json_output = export_ini_file(path.to_str().unwrap()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v["db"]["name"], "main");

        fs::write(&path, "[db\n").unwrap();
        let errors = export_ini_file(path.to_str().unwrap()).unwrap_err();
        assert_eq!(errors[0].line(), Some(1));
    }
}
