//! Minimal TOML parser for the watch-face configuration
//!
//! Handles only the subset the configuration uses. It does NOT support
//! the full TOML spec.
//!
//! Supported features:
//! - `[section]` headers (`clock`, `display`)
//! - Key = value pairs (string, integer, boolean)
//! - Comments (`# ...`), including trailing comments
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings and escapes
//! - Dotted keys

use super::types::{ClockStyle, FaceConfig};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Malformed section header
    InvalidSection,
    /// Section name not known
    UnknownSection,
    /// Key not known in its section
    UnknownKey,
    /// Line is neither a header nor `key = value`
    InvalidLine,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Key set twice
    DuplicateKey,
    /// Section header repeated
    DuplicateSection,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Clock,
    Display,
}

impl Section {
    fn bit(self) -> u8 {
        match self {
            Section::Root => 1 << 0,
            Section::Clock => 1 << 1,
            Section::Display => 1 << 2,
        }
    }
}

/// A scalar TOML value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Value<'a> {
    Str(&'a str),
    Int(i64),
    Bool(bool),
}

/// Parse TOML configuration into FaceConfig
///
/// Missing keys keep their defaults. As in TOML, a key or section may
/// only appear once.
pub fn parse_config(input: &str) -> Result<FaceConfig, ParseError> {
    let mut config = FaceConfig::default();
    let mut section = Section::Root;
    let mut seen_sections = 0u8;
    let mut seen_keys = 0u8;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        // Check for section header
        if let Some(header) = line.strip_prefix('[') {
            let name = header.strip_suffix(']').ok_or(ParseError::InvalidSection)?;
            section = parse_section_header(name.trim())?;
            if seen_sections & section.bit() != 0 {
                return Err(ParseError::DuplicateSection);
            }
            seen_sections |= section.bit();
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ParseError::InvalidLine)?;
        let key = key.trim();
        let value = parse_value(value.trim())?;
        let key_bit = apply(&mut config, section, key, value)?;
        if seen_keys & key_bit != 0 {
            return Err(ParseError::DuplicateKey);
        }
        seen_keys |= key_bit;
    }

    Ok(config)
}

fn parse_section_header(name: &str) -> Result<Section, ParseError> {
    if name.is_empty() || name.contains(|c| c == '[' || c == ']') {
        return Err(ParseError::InvalidSection);
    }
    match name {
        "clock" => Ok(Section::Clock),
        "display" => Ok(Section::Display),
        _ => Err(ParseError::UnknownSection),
    }
}

/// Store `value` and return a bit identifying the key
fn apply(
    config: &mut FaceConfig,
    section: Section,
    key: &str,
    value: Value<'_>,
) -> Result<u8, ParseError> {
    let bit = match (section, key) {
        (Section::Clock, "style") => {
            let Value::Str(s) = value else {
                return Err(ParseError::InvalidValue);
            };
            config.clock.style = ClockStyle::from_config(s).ok_or(ParseError::InvalidValue)?;
            1 << 0
        }
        (Section::Display, "contrast") => {
            let Value::Int(n) = value else {
                return Err(ParseError::InvalidValue);
            };
            config.display.contrast = u8::try_from(n).map_err(|_| ParseError::InvalidValue)?;
            1 << 1
        }
        (Section::Display, "inverted") => {
            let Value::Bool(b) = value else {
                return Err(ParseError::InvalidValue);
            };
            config.display.inverted = b;
            1 << 2
        }
        _ => return Err(ParseError::UnknownKey),
    };
    Ok(bit)
}

fn parse_value(raw: &str) -> Result<Value<'_>, ParseError> {
    if let Some(rest) = raw.strip_prefix('"') {
        let inner = rest.strip_suffix('"').ok_or(ParseError::InvalidValue)?;
        if inner.contains('"') {
            return Err(ParseError::InvalidValue);
        }
        return Ok(Value::Str(inner));
    }
    match raw {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }
    parse_int(raw).map(Value::Int)
}

fn parse_int(raw: &str) -> Result<i64, ParseError> {
    // TOML allows underscores between digits and 0x prefixes
    let (digits, radix) = match raw.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (raw, 10),
    };
    // Underscores must sit between two digits
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return Err(ParseError::InvalidValue);
    }

    let mut buf = [0u8; 24];
    let mut len = 0;
    for b in digits.bytes().filter(|&b| b != b'_') {
        if len == buf.len() {
            return Err(ParseError::InvalidValue);
        }
        buf[len] = b;
        len += 1;
    }
    let cleaned = core::str::from_utf8(&buf[..len]).map_err(|_| ParseError::InvalidValue)?;
    i64::from_str_radix(cleaned, radix).map_err(|_| ParseError::InvalidValue)
}

/// Remove a trailing `# comment` that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}
