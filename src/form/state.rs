//! Form state snapshot
//!
//! `FormState` is the typed view of the form the generator reads. Raw JSON
//! snapshots enter through [`FormState::from_json`], which checks every field
//! against the schema and rejects wrong types and unknown fields with a
//! [`GenerationError`] naming the field.

use super::error::{json_type, GenerationError, GenerationResult};
use super::schema::{self, BindField, Setting};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Console text colour written on the first line of the script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleColor {
    /// `FF25FFFF`
    #[default]
    Pink,
    /// `6495EDFF`
    LightBlue,
    /// `FF7F50FF`
    Orange,
    /// `FFD700FF`
    Yellow,
    /// `008000FF`
    Green,
    /// `AF0000FF`
    Red,
}

impl ConsoleColor {
    /// Every colour in display order
    pub const ALL: [ConsoleColor; 6] = [
        ConsoleColor::Pink,
        ConsoleColor::LightBlue,
        ConsoleColor::Orange,
        ConsoleColor::Yellow,
        ConsoleColor::Green,
        ConsoleColor::Red,
    ];

    /// Form value for this colour
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ConsoleColor::Pink => "pink",
            ConsoleColor::LightBlue => "lightblue",
            ConsoleColor::Orange => "orange",
            ConsoleColor::Yellow => "yellow",
            ConsoleColor::Green => "green",
            ConsoleColor::Red => "red",
        }
    }

    /// RGBA hex code understood by `log_color`
    #[must_use]
    pub const fn hex_code(self) -> &'static str {
        match self {
            ConsoleColor::Pink => "FF25FFFF",
            ConsoleColor::LightBlue => "6495EDFF",
            ConsoleColor::Orange => "FF7F50FF",
            ConsoleColor::Yellow => "FFD700FF",
            ConsoleColor::Green => "008000FF",
            ConsoleColor::Red => "AF0000FF",
        }
    }

    /// Parse a form value. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.as_str() == name)
    }
}

/// A named, independently toggleable group of output lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    /// BINDS block
    Binds,
    /// Movement binds sub-group
    MovementBinds,
    /// Weapons & actions binds sub-group
    WeaponsActionBinds,
    /// UI & communication binds sub-group
    UiCommBinds,
    /// User-supplied key/command pairs
    CustomBinds,
    /// ALIASES block
    Aliases,
    /// SETTINGS block
    Settings,
    /// HUD settings
    Hud,
    /// Advanced HUD toggle kept for snapshot compatibility
    HudAdvanced,
    /// Crosshair & sensitivity settings
    MouseCrosshair,
    /// Viewmodel settings
    Viewmodel,
    /// Video toggle kept for snapshot compatibility
    Video,
    /// Audio settings
    Sound,
    /// Network settings
    Rate,
    /// Free-form additional commands
    Additional,
    /// Game settings
    GameSettings,
    /// Legacy performance toggle
    FpsMax,
    /// Legacy performance toggle
    TeamEquipment,
    /// Legacy performance toggle
    AudioBuffer,
    /// Legacy performance toggle
    HeadphoneAudio,
    /// Legacy performance toggle
    MaxPing,
    /// Legacy performance toggle
    FirstPersonTracers,
}

impl Section {
    /// Every section
    pub const ALL: [Section; 22] = [
        Section::Binds,
        Section::MovementBinds,
        Section::WeaponsActionBinds,
        Section::UiCommBinds,
        Section::CustomBinds,
        Section::Aliases,
        Section::Settings,
        Section::Hud,
        Section::HudAdvanced,
        Section::MouseCrosshair,
        Section::Viewmodel,
        Section::Video,
        Section::Sound,
        Section::Rate,
        Section::Additional,
        Section::GameSettings,
        Section::FpsMax,
        Section::TeamEquipment,
        Section::AudioBuffer,
        Section::HeadphoneAudio,
        Section::MaxPing,
        Section::FirstPersonTracers,
    ];

    /// Name used in `includeSections`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Section::Binds => "binds",
            Section::MovementBinds => "movementBinds",
            Section::WeaponsActionBinds => "weaponsActionBinds",
            Section::UiCommBinds => "uiCommBinds",
            Section::CustomBinds => "customBinds",
            Section::Aliases => "aliases",
            Section::Settings => "settings",
            Section::Hud => "hud",
            Section::HudAdvanced => "hudAdvanced",
            Section::MouseCrosshair => "mouseCrosshair",
            Section::Viewmodel => "viewmodel",
            Section::Video => "video",
            Section::Sound => "sound",
            Section::Rate => "rate",
            Section::Additional => "additional",
            Section::GameSettings => "gameSettings",
            Section::FpsMax => "fpsMax",
            Section::TeamEquipment => "teamEquipment",
            Section::AudioBuffer => "audioBuffer",
            Section::HeadphoneAudio => "headphoneAudio",
            Section::MaxPing => "maxPing",
            Section::FirstPersonTracers => "firstPersonTracers",
        }
    }

    /// Look up a section by its `includeSections` name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_str() == name)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-supplied key/command pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomBind {
    /// Key name, human-readable or scancode
    pub key: String,
    /// Console command bound to the key
    pub command: String,
}

impl CustomBind {
    /// Create a custom bind
    pub fn new(key: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            command: command.into(),
        }
    }

    /// Whether both halves are non-blank
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.key.trim().is_empty() && !self.command.trim().is_empty()
    }
}

/// Snapshot of the form consumed by the generator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// Console colour
    pub console_color: ConsoleColor,
    /// Scalar settings and bind keys by field name
    #[serde(flatten)]
    pub values: IndexMap<String, String>,
    /// Free-form commands, one per line
    pub additional_commands: String,
    /// User-supplied binds
    pub custom_binds: Vec<CustomBind>,
    /// Section flags. Missing sections are disabled.
    pub include_sections: IndexMap<Section, bool>,
    /// Per-key inclusion flags
    pub include_commands: IndexMap<String, bool>,
    /// Emit the network troubleshooting block
    pub include_network_troubleshooting: bool,
    /// Emit the config save block
    pub include_config_save: bool,
}

impl FormState {
    /// The snapshot a freshly mounted form starts from: every setting and
    /// bind at its documented default, every flag off
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut state = Self::default();
        for setting in schema::all_settings() {
            state
                .values
                .insert(setting.key.to_string(), setting.default.to_string());
        }
        for bind in schema::all_bind_fields() {
            if !bind.default.is_empty() {
                state
                    .values
                    .insert(bind.field.to_string(), bind.default.to_string());
            }
        }
        state.include_sections = Section::ALL.into_iter().map(|s| (s, false)).collect();
        state
    }

    /// Validate a raw JSON snapshot against the schema
    ///
    /// # Errors
    ///
    /// Returns an error naming the first field with the wrong type or not
    /// declared by the schema.
    pub fn from_json(snapshot: &Value) -> GenerationResult<Self> {
        let Value::Object(fields) = snapshot else {
            return Err(GenerationError::NotAnObject {
                found: json_type(snapshot),
            });
        };

        let mut state = Self::default();
        for (name, value) in fields {
            match name.as_str() {
                "consoleColor" => {
                    state.console_color = optional_string(name, value)?
                        .and_then(ConsoleColor::from_name)
                        .unwrap_or_default();
                }
                "additionalCommands" => {
                    state.additional_commands =
                        optional_string(name, value)?.unwrap_or_default().to_string();
                }
                "customBinds" => state.custom_binds = parse_custom_binds(value)?,
                // legacy command-to-key record; bind lines come from the per-field keys
                "binds" => check_legacy_binds(value)?,
                "includeSections" => state.include_sections = parse_include_sections(value)?,
                "includeCommands" => state.include_commands = parse_include_commands(value)?,
                "includeNetworkTroubleshooting" => {
                    state.include_network_troubleshooting =
                        optional_bool(name, value)?.unwrap_or(false);
                }
                "includeConfigSave" => {
                    state.include_config_save = optional_bool(name, value)?.unwrap_or(false);
                }
                field if schema::is_scalar_field(field) => {
                    if let Some(text) = optional_string(field, value)? {
                        state.values.insert(field.to_string(), text.to_string());
                    }
                }
                field => return Err(GenerationError::unknown(field)),
            }
        }

        Ok(state)
    }

    /// The non-blank value of a field, trimmed
    #[must_use]
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// The value written for a setting: the form value if non-blank, else the
    /// setting's default
    #[must_use]
    pub fn setting_value(&self, setting: &Setting) -> &str {
        self.value(setting.key).unwrap_or(setting.default)
    }

    /// The key a bind field resolves to, or `None` when it should be skipped
    ///
    /// An absent field falls back to its default key. A field explicitly set
    /// to blank or `none` is skipped.
    #[must_use]
    pub fn bind_key(&self, bind: &BindField) -> Option<&str> {
        let key = match self.values.get(bind.field) {
            Some(raw) => raw.trim(),
            None => bind.default,
        };
        if key.is_empty() || key.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(key)
        }
    }

    /// Whether a section flag is on
    #[must_use]
    pub fn section_enabled(&self, section: Section) -> bool {
        self.include_sections.get(&section).copied().unwrap_or(false)
    }

    /// Whether a key's include flag is explicitly on
    #[must_use]
    pub fn command_included(&self, key: &str) -> bool {
        self.include_commands.get(key).copied().unwrap_or(false)
    }

    /// Whether a setting's line is included, honouring its implicit default
    #[must_use]
    pub fn setting_included(&self, setting: &Setting) -> bool {
        self.include_commands
            .get(setting.key)
            .copied()
            .unwrap_or(setting.included_by_default)
    }

    /// Set a scalar value
    #[must_use]
    pub fn with_value(mut self, field: &str, value: impl Into<String>) -> Self {
        self.values.insert(field.to_string(), value.into());
        self
    }

    /// Set a section flag
    #[must_use]
    pub fn with_section(mut self, section: Section, enabled: bool) -> Self {
        self.include_sections.insert(section, enabled);
        self
    }

    /// Set a key include flag
    #[must_use]
    pub fn with_command(mut self, key: &str, included: bool) -> Self {
        self.include_commands.insert(key.to_string(), included);
        self
    }
}

fn optional_string<'a>(field: &str, value: &'a Value) -> GenerationResult<Option<&'a str>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(GenerationError::invalid(field, "a string", other)),
    }
}

fn optional_bool(field: &str, value: &Value) -> GenerationResult<Option<bool>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        other => Err(GenerationError::invalid(field, "a boolean", other)),
    }
}

fn object<'a>(field: &str, value: &'a Value) -> GenerationResult<Option<&'a Map<String, Value>>> {
    match value {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map)),
        other => Err(GenerationError::invalid(field, "an object", other)),
    }
}

fn parse_custom_binds(value: &Value) -> GenerationResult<Vec<CustomBind>> {
    let items = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => return Err(GenerationError::invalid("customBinds", "an array", other)),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let path = format!("customBinds[{index}]");
            let Value::Object(pair) = item else {
                return Err(GenerationError::invalid(path, "an object", item));
            };

            let mut bind = CustomBind::default();
            for (name, value) in pair {
                let field = format!("{path}.{name}");
                let text = optional_string(&field, value)?.unwrap_or_default().to_string();
                match name.as_str() {
                    "key" => bind.key = text,
                    "command" => bind.command = text,
                    _ => return Err(GenerationError::unknown(field)),
                }
            }
            Ok(bind)
        })
        .collect()
}

fn check_legacy_binds(value: &Value) -> GenerationResult<()> {
    let Some(map) = object("binds", value)? else {
        return Ok(());
    };

    for (command, key) in map {
        optional_string(&format!("binds.{command}"), key)?;
    }
    Ok(())
}

fn parse_include_sections(value: &Value) -> GenerationResult<IndexMap<Section, bool>> {
    let Some(map) = object("includeSections", value)? else {
        return Ok(IndexMap::new());
    };

    let mut sections = IndexMap::with_capacity(map.len());
    for (name, flag) in map {
        let field = format!("includeSections.{name}");
        let section = Section::from_name(name).ok_or_else(|| GenerationError::unknown(&field))?;
        sections.insert(section, optional_bool(&field, flag)?.unwrap_or(false));
    }
    Ok(sections)
}

fn parse_include_commands(value: &Value) -> GenerationResult<IndexMap<String, bool>> {
    let Some(map) = object("includeCommands", value)? else {
        return Ok(IndexMap::new());
    };

    let mut commands = IndexMap::with_capacity(map.len());
    for (name, flag) in map {
        if let Some(flag) = optional_bool(&format!("includeCommands.{name}"), flag)? {
            commands.insert(name.clone(), flag);
        }
    }
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::schema::{find_setting, FPS_MAX};
    use serde_json::json;

    #[test]
    fn test_console_color_lookup() {
        assert_eq!(ConsoleColor::from_name("red"), Some(ConsoleColor::Red));
        assert_eq!(ConsoleColor::from_name("lightblue"), Some(ConsoleColor::LightBlue));
        assert_eq!(ConsoleColor::from_name("Red"), None);
        assert_eq!(ConsoleColor::Red.hex_code(), "AF0000FF");
        assert_eq!(ConsoleColor::default(), ConsoleColor::Pink);
    }

    #[test]
    fn test_section_names_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_name(section.as_str()), Some(section));
            let json = serde_json::to_value(section).unwrap();
            assert_eq!(json, json!(section.as_str()));
        }
    }

    #[test]
    fn test_from_json_minimal() {
        let state = FormState::from_json(&json!({ "consoleColor": "green" })).unwrap();
        assert_eq!(state.console_color, ConsoleColor::Green);
        assert!(state.values.is_empty());
        assert!(!state.section_enabled(Section::Binds));
    }

    #[test]
    fn test_from_json_unknown_color_falls_back() {
        let state = FormState::from_json(&json!({ "consoleColor": "purple" })).unwrap();
        assert_eq!(state.console_color, ConsoleColor::Pink);
    }

    #[test]
    fn test_from_json_full_shape() {
        let snapshot = json!({
            "consoleColor": "red",
            "cl_hud_color": "3",
            "forward_bind": "W",
            "net_graph": "1",
            "additionalCommands": "say hi\n",
            "customBinds": [{ "key": "F6", "command": "buy_script" }],
            "includeSections": { "settings": true, "hud": true },
            "includeCommands": { "cl_hud_color": true, "volume": null },
            "includeNetworkTroubleshooting": true,
            "includeConfigSave": false
        });

        let state = FormState::from_json(&snapshot).unwrap();
        assert_eq!(state.console_color, ConsoleColor::Red);
        assert_eq!(state.value("cl_hud_color"), Some("3"));
        assert_eq!(state.additional_commands, "say hi\n");
        assert_eq!(state.custom_binds, vec![CustomBind::new("F6", "buy_script")]);
        assert!(state.section_enabled(Section::Settings));
        assert!(state.section_enabled(Section::Hud));
        assert!(state.command_included("cl_hud_color"));
        assert!(!state.include_commands.contains_key("volume"));
        assert!(state.include_network_troubleshooting);
        assert!(!state.include_config_save);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = FormState::from_json(&json!([1, 2])).unwrap_err();
        assert_eq!(err, GenerationError::NotAnObject { found: "an array" });
    }

    #[test]
    fn test_from_json_rejects_numeric_additional_commands() {
        let err = FormState::from_json(&json!({
            "additionalCommands": 42,
            "includeSections": { "additional": true }
        }))
        .unwrap_err();
        assert_eq!(err.field(), Some("additionalCommands"));
    }

    #[test]
    fn test_from_json_rejects_custom_binds_not_array() {
        let err = FormState::from_json(&json!({ "customBinds": "F6" })).unwrap_err();
        assert_eq!(
            err,
            GenerationError::InvalidField {
                field: "customBinds".to_string(),
                expected: "an array",
                found: "a string",
            }
        );
    }

    #[test]
    fn test_from_json_custom_bind_element_path() {
        let err = FormState::from_json(&json!({
            "customBinds": [{ "key": "F6", "command": "x" }, { "key": 5, "command": "y" }]
        }))
        .unwrap_err();
        assert_eq!(err.field(), Some("customBinds[1].key"));
    }

    #[test]
    fn test_from_json_accepts_legacy_binds_record() {
        let state = FormState::from_json(&json!({ "binds": { "+forward": "W" } })).unwrap();
        assert_eq!(state, FormState::default());

        let state = FormState::from_json(&json!({ "binds": null })).unwrap();
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn test_from_json_rejects_malformed_binds_record() {
        let err = FormState::from_json(&json!({ "binds": { "+jump": 44 } })).unwrap_err();
        assert_eq!(err.field(), Some("binds.+jump"));

        let err = FormState::from_json(&json!({ "binds": ["W"] })).unwrap_err();
        assert_eq!(err.field(), Some("binds"));
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = FormState::from_json(&json!({ "not_a_field": "1" })).unwrap_err();
        assert_eq!(err, GenerationError::unknown("not_a_field"));

        let err = FormState::from_json(&json!({ "includeSections": { "nope": true } })).unwrap_err();
        assert_eq!(err, GenerationError::unknown("includeSections.nope"));
    }

    #[test]
    fn test_from_json_rejects_numeric_setting() {
        let err = FormState::from_json(&json!({ "fps_max": 240 })).unwrap_err();
        assert_eq!(err.field(), Some("fps_max"));
    }

    #[test]
    fn test_from_json_rejects_non_boolean_flag() {
        let err = FormState::from_json(&json!({ "includeCommands": { "rate": "yes" } })).unwrap_err();
        assert_eq!(err.field(), Some("includeCommands.rate"));
    }

    #[test]
    fn test_setting_value_falls_back_on_blank() {
        let setting = find_setting("hud_scaling").unwrap();
        let state = FormState::default();
        assert_eq!(state.setting_value(setting), "0.85");

        let state = state.with_value("hud_scaling", "   ");
        assert_eq!(state.setting_value(setting), "0.85");

        let state = state.with_value("hud_scaling", "0.9");
        assert_eq!(state.setting_value(setting), "0.9");
    }

    #[test]
    fn test_bind_key_resolution() {
        let forward = schema::BIND_GROUPS[0].binds[0];
        assert_eq!(forward.field, "forward_bind");

        let state = FormState::default();
        assert_eq!(state.bind_key(&forward), Some("W"));
        assert_eq!(state.clone().with_value("forward_bind", "none").bind_key(&forward), None);
        assert_eq!(state.clone().with_value("forward_bind", "NONE").bind_key(&forward), None);
        assert_eq!(state.clone().with_value("forward_bind", "").bind_key(&forward), None);
        assert_eq!(state.with_value("forward_bind", "UP").bind_key(&forward), Some("UP"));
    }

    #[test]
    fn test_fps_max_included_until_touched() {
        let fps = find_setting(FPS_MAX).unwrap();
        let state = FormState::default();
        assert!(state.setting_included(fps));
        assert!(!state.with_command(FPS_MAX, false).setting_included(fps));
    }

    #[test]
    fn test_with_defaults_round_trips() {
        let state = FormState::with_defaults();
        assert_eq!(state.value("forward_bind"), Some("W"));
        assert_eq!(state.value("rate"), Some("786432"));
        assert!(state.values.get("slot3_bind").is_none());

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["consoleColor"], json!("pink"));
        assert_eq!(json["includeSections"]["binds"], json!(false));
        let parsed = FormState::from_json(&json).unwrap();
        assert_eq!(parsed, state);
    }
}
