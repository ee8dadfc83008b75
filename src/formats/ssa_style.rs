/*!
 * SubStation style header handling.
 *
 * - `SsaColor`: `&HAABBGGRR` colors with the channel swap to and from RGB
 * - `SsaStyle`: one `Style:` line resolved through the header `Format:` line
 * - `styles_from_header`, `ssa_style`, `check_for_errors`: header queries
 */

use std::fmt;

use log::debug;

/// An ARGB color as stored by SubStation files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SsaColor {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl SsaColor {
    pub const WHITE: SsaColor = SsaColor::rgb(0xff, 0xff, 0xff);
    pub const YELLOW: SsaColor = SsaColor::rgb(0xff, 0xff, 0x00);
    pub const BLACK: SsaColor = SsaColor::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { alpha: 0, red, green, blue }
    }

    /// Parse an `#rrggbb` html color.
    pub fn from_html(text: &str) -> Option<Self> {
        let hex = text.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_html(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for SsaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ssa_color_string(*self))
    }
}

/// Parse a SubStation color value.
///
/// Accepted shapes: `&HBBGGRR&`, `&HAABBGGRR&`, short hex that gets zero
/// padded, and the decimal BGR integers of v4 scripts.
pub fn parse_ssa_color(text: &str) -> Option<SsaColor> {
    let mut value: String = text.trim().chars().filter(|&c| c != '&').collect();

    if value.len() > 1 && value.starts_with(['h', 'H']) {
        while value.len() < 7 {
            value.insert(1, '0');
        }
        let hex = &value[1..];
        let channel = |at: usize| hex.get(at..at + 2).and_then(|h| u8::from_str_radix(h, 16).ok());
        return match hex.len() {
            6 => Some(SsaColor { alpha: 0, blue: channel(0)?, green: channel(2)?, red: channel(4)? }),
            8 => Some(SsaColor {
                alpha: channel(0)?,
                blue: channel(2)?,
                green: channel(4)?,
                red: channel(6)?,
            }),
            _ => None,
        };
    }

    let number = value.parse::<i64>().ok()?;
    Some(SsaColor {
        alpha: ((number >> 24) & 0xff) as u8,
        blue: ((number >> 16) & 0xff) as u8,
        green: ((number >> 8) & 0xff) as u8,
        red: (number & 0xff) as u8,
    })
}

/// Parse a SubStation color value, falling back to `default` when unreadable.
pub fn ssa_color(text: &str, default: SsaColor) -> SsaColor {
    parse_ssa_color(text).unwrap_or_else(|| {
        debug!("Unreadable SSA color '{}', using default", text);
        default
    })
}

/// Render a color as `&HAABBGGRR`.
pub fn ssa_color_string(color: SsaColor) -> String {
    format!(
        "&H{:02X}{:02X}{:02X}{:02X}",
        color.alpha, color.blue, color.green, color.red
    )
}

// @struct: One named style from a SubStation header
#[derive(Debug, Clone, PartialEq)]
pub struct SsaStyle {
    pub name: String,
    pub font_name: String,
    pub font_size: i32,
    pub primary: SsaColor,
    pub secondary: SsaColor,
    pub tertiary: SsaColor,
    pub outline: SsaColor,
    pub background: SsaColor,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub outline_width: String,
    pub shadow_width: String,
    pub alignment: String,
    pub margin_left: i32,
    pub margin_right: i32,
    pub margin_vertical: i32,
    pub border_style: String,
    // @field: The `Style:` line this was read from
    pub raw_line: String,
    // @field: False when the style was not found and defaults are returned
    pub loaded_from_header: bool,
}

impl SsaStyle {
    pub fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

impl Default for SsaStyle {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            font_name: "Arial".to_string(),
            font_size: 20,
            primary: SsaColor::WHITE,
            secondary: SsaColor::YELLOW,
            tertiary: SsaColor::YELLOW,
            outline: SsaColor::BLACK,
            background: SsaColor::BLACK,
            bold: false,
            italic: false,
            underline: false,
            outline_width: "2".to_string(),
            shadow_width: "2".to_string(),
            alignment: "2".to_string(),
            margin_left: 10,
            margin_right: 10,
            margin_vertical: 10,
            border_style: "1".to_string(),
            raw_line: String::new(),
            loaded_from_header: false,
        }
    }
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Lowercased, trimmed column names of the style `Format:` line.
fn style_format(header: &str) -> Option<Vec<String>> {
    for line in header.lines() {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("[events]") {
            break;
        }
        if starts_with_ignore_case(trimmed, "format:") {
            return Some(
                trimmed[7..]
                    .split(',')
                    .map(|column| column.trim().to_lowercase())
                    .collect(),
            );
        }
    }
    None
}

fn style_lines(header: &str) -> impl Iterator<Item = &str> {
    header
        .lines()
        .map(str::trim)
        .filter(|line| starts_with_ignore_case(line, "style:"))
}

/// Names of every `Style:` line in the header, in order.
pub fn styles_from_header(header: &str) -> Vec<String> {
    style_lines(header)
        .filter_map(|line| {
            let end = line.find(',')?;
            Some(line[6..end].trim().to_string())
        })
        .collect()
}

/// Look up a style by name (case insensitive); unknown names get defaults.
pub fn ssa_style(name: &str, header: &str) -> SsaStyle {
    let mut style = SsaStyle::with_name(name);
    let Some(format) = style_format(header) else {
        return style;
    };

    for line in style_lines(header) {
        let values: Vec<&str> = line[6..].split(',').collect();
        let matches = format
            .iter()
            .position(|column| column == "name")
            .and_then(|index| values.get(index))
            .is_some_and(|value| value.trim().eq_ignore_ascii_case(name));
        if !matches {
            continue;
        }

        style.raw_line = line.to_string();
        style.loaded_from_header = true;
        for (column, value) in format.iter().zip(values.iter().map(|v| v.trim())) {
            match column.as_str() {
                "name" => style.name = value.to_string(),
                "fontname" => style.font_name = value.to_string(),
                "fontsize" => style.font_size = value.parse::<f64>().map_or(style.font_size, |size| size as i32),
                "primarycolour" => style.primary = ssa_color(value, SsaColor::WHITE),
                "secondarycolour" => style.secondary = ssa_color(value, SsaColor::YELLOW),
                "tertiarycolour" => style.tertiary = ssa_color(value, SsaColor::YELLOW),
                "outlinecolour" => style.outline = ssa_color(value, SsaColor::BLACK),
                "backcolour" => style.background = ssa_color(value, SsaColor::BLACK),
                "bold" => style.bold = value == "1",
                "italic" => style.italic = value == "1",
                "underline" => style.underline = value == "1",
                "outline" => style.outline_width = value.to_string(),
                "shadow" => style.shadow_width = value.to_string(),
                "alignment" => style.alignment = value.to_string(),
                "marginl" => style.margin_left = value.parse().unwrap_or(style.margin_left),
                "marginr" => style.margin_right = value.parse().unwrap_or(style.margin_right),
                "marginv" => style.margin_vertical = value.parse().unwrap_or(style.margin_vertical),
                "borderstyle" => style.border_style = value.to_string(),
                _ => {}
            }
        }
        return style;
    }
    style
}

fn is_valid_color(value: &str) -> bool {
    !value.trim().eq_ignore_ascii_case("&h") && parse_ssa_color(value).is_some()
}

fn is_valid_flag(value: &str) -> bool {
    !value.chars().any(char::is_alphabetic)
}

fn is_non_negative_float(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok_and(|number| number >= 0.0)
}

fn is_non_negative_int(value: &str) -> bool {
    value.trim().parse::<i64>().is_ok_and(|number| number >= 0)
}

/// Human readable problems with the styles of a header; empty when fine.
///
/// Every message is followed by a blank line.
pub fn check_for_errors(header: &str) -> String {
    let mut errors = String::new();
    let mut push = |message: String| {
        errors.push_str(&message);
        errors.push_str("\n\n");
    };

    let Some(format) = style_format(header) else {
        return errors;
    };

    for line in style_lines(header) {
        let values: Vec<&str> = line[6..].split(',').map(str::trim).collect();
        if values.len() != format.len() {
            push(format!(
                "Number of expected Style elements do not match number of Format elements: {}",
                line
            ));
            continue;
        }

        for (column, value) in format.iter().zip(&values) {
            match column.as_str() {
                "name" if value.is_empty() => push("'Name' is empty".to_string()),
                "fontname" if value.is_empty() => push("'Fontname' is empty".to_string()),
                "fontsize" if value.parse::<f64>().is_err() => push("'Fontsize' incorrect".to_string()),
                "primarycolour" if !is_valid_color(value) => push("'PrimaryColour' incorrect".to_string()),
                "secondarycolour" if !is_valid_color(value) => push("'SecondaryColour' incorrect".to_string()),
                "outlinecolour" if !is_valid_color(value) => push("'OutlineColour' incorrect".to_string()),
                "backcolour" if !is_valid_color(value) => push("'BackColour' incorrect".to_string()),
                "bold" if !is_valid_flag(value) => push("'Bold' incorrect".to_string()),
                "italic" if !is_valid_flag(value) => push("'Italic' incorrect".to_string()),
                "underline" if !is_valid_flag(value) => push("'Underline' incorrect".to_string()),
                "outline" if !is_non_negative_float(value) => push("'Outline' (width) incorrect".to_string()),
                "shadow" if !is_non_negative_float(value) => push("'Shadow' (width) incorrect".to_string()),
                "alignment" if value.is_empty() || !"101123456789 ".contains(*value) => {
                    push("'Alignment' incorrect".to_string())
                }
                "marginl" if !is_non_negative_int(value) => push("'MarginL' incorrect".to_string()),
                "marginr" if !is_non_negative_int(value) => push("'MarginR' incorrect".to_string()),
                "marginv" if !is_non_negative_int(value) => push("'MarginV' incorrect".to_string()),
                "borderstyle" if !(value.is_empty() || (value.len() == 1 && "123".contains(*value))) => {
                    push("'BorderStyle' incorrect".to_string())
                }
                _ => {}
            }
        }
    }
    errors
}
