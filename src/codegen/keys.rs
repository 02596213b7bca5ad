//! Key name translation
//!
//! Binds are written with engine scancodes so they survive keyboard layout
//! changes. Human-readable names are looked up case-insensitively; names that
//! are already scancodes, or that the table does not know (mouse buttons,
//! wheel directions), pass through unchanged.

/// Human-readable key names and their scancodes
pub const KEY_SCANCODES: &[(&str, u16)] = &[
    ("A", 4),
    ("B", 5),
    ("C", 6),
    ("D", 7),
    ("E", 8),
    ("F", 9),
    ("G", 10),
    ("H", 11),
    ("I", 12),
    ("J", 13),
    ("K", 14),
    ("L", 15),
    ("M", 16),
    ("N", 17),
    ("O", 18),
    ("P", 19),
    ("Q", 20),
    ("R", 21),
    ("S", 22),
    ("T", 23),
    ("U", 24),
    ("V", 25),
    ("W", 26),
    ("X", 27),
    ("Y", 28),
    ("Z", 29),
    ("1", 30),
    ("2", 31),
    ("3", 32),
    ("4", 33),
    ("5", 34),
    ("6", 35),
    ("7", 36),
    ("8", 37),
    ("9", 38),
    ("0", 39),
    ("ENTER", 40),
    ("ESCAPE", 41),
    ("BACKSPACE", 42),
    ("TAB", 43),
    ("SPACE", 44),
    ("-", 45),
    ("=", 46),
    ("[", 47),
    ("]", 48),
    ("\\", 49),
    (";", 51),
    ("'", 52),
    ("`", 53),
    ("^", 53),
    ("~", 53),
    (",", 54),
    (".", 55),
    ("/", 56),
    ("CAPSLOCK", 57),
    ("F1", 58),
    ("F2", 59),
    ("F3", 60),
    ("F4", 61),
    ("F5", 62),
    ("F6", 63),
    ("F7", 64),
    ("F8", 65),
    ("F9", 66),
    ("F10", 67),
    ("F11", 68),
    ("F12", 69),
    ("INSERT", 73),
    ("HOME", 74),
    ("PGUP", 75),
    ("DELETE", 76),
    ("END", 77),
    ("PGDN", 78),
    ("RIGHTARROW", 79),
    ("LEFTARROW", 80),
    ("DOWNARROW", 81),
    ("UPARROW", 82),
    ("KP_SLASH", 84),
    ("KP_MULTIPLY", 85),
    ("KP_MINUS", 86),
    ("KP_PLUS", 87),
    ("KP_ENTER", 88),
    ("KP_END", 89),
    ("KP_DOWNARROW", 90),
    ("KP_PGDN", 91),
    ("KP_LEFTARROW", 92),
    ("KP_5", 93),
    ("KP_RIGHTARROW", 94),
    ("KP_HOME", 95),
    ("KP_UPARROW", 96),
    ("KP_PGUP", 97),
    ("KP_INS", 98),
    ("KP_DEL", 99),
    ("CTRL", 224),
    ("LEFT CTRL", 224),
    ("SHIFT", 225),
    ("LEFT SHIFT", 225),
    ("ALT", 226),
    ("LEFT ALT", 226),
    ("RCTRL", 228),
    ("RIGHT CTRL", 228),
    ("RSHIFT", 229),
    ("RIGHT SHIFT", 229),
    ("RALT", 230),
    ("RIGHT ALT", 230),
];

/// Scancode for a human-readable key name
#[must_use]
pub fn scancode(name: &str) -> Option<u16> {
    let name = name.trim();
    KEY_SCANCODES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, code)| *code)
}

const SCANCODE_PREFIX: &str = "scancode";

/// Whether `key` is already written as `scancodeN`
#[must_use]
pub fn is_scancode(key: &str) -> bool {
    let key = key.trim();
    key.len() > SCANCODE_PREFIX.len()
        && key
            .get(..SCANCODE_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(SCANCODE_PREFIX))
        && key[SCANCODE_PREFIX.len()..].bytes().all(|b| b.is_ascii_digit())
}

/// Translate a key name to the form written in a bind line
#[must_use]
pub fn normalize_key(key: &str) -> String {
    if is_scancode(key) {
        return key.trim().to_string();
    }
    scancode(key).map_or_else(
        || key.trim().to_string(),
        |code| format!("{SCANCODE_PREFIX}{code}"),
    )
}
