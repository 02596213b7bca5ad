//! Autoexec script generator
//!
//! Maps a [`FormState`] to the ordered lines of an `autoexec.cfg`. The output
//! depends only on the snapshot and the options, so identical inputs always
//! produce identical lines.

use super::format::{sub_heading, Banner, Layout};
use super::keys::normalize_key;
use crate::form::schema::{BindField, ALIASES, ALIAS_BINDS, BIND_GROUPS, SETTING_GROUPS};
use crate::form::{FormState, GenerationResult, Section};
use chrono::{DateTime, Utc};

const INIT_ECHO: &str =
    "echo |                                     [AUTOEXEC] Initializing configuration... [AUTOEXEC]";

const SCRIPT_LOADED: &str = "echo |      SCRIPT INITIALIZED - SYSTEM SETTINGS CALIBRATED - AUTOEXEC SUCCESSFULLY LOADED | CREATED BY CS2GUARD";

const CLOSING_HEAD: &[&str] = &[
    "echo |                                                                              .-Y",
    "echo |                                     [AUTOEXEC] Initializing configuration...\"",
    "echo |                                  -x\"",
];

const CLOSING_TAIL: &[&str] = &[
    "echo |",
    "echo |                                             [ SYSTEM OPTIMIZED ]",
    "echo |                                           [ ALL SYSTEMS LAUNCHED ]",
];

// Fixed lines, aligned at column 64 rather than the layout's value column
const NETWORK_TROUBLESHOOTING: &[&str] = &[
    "// --- NETWORK TROUBLESHOOTING ---",
    "net_graphpos                                                    \"1\";",
    "net_graphproportionalfont                                       \"0\";",
    "net_graphheight                                                 \"64\";",
];

const CONFIG_SAVE: &[&str] = &[
    "// --- CONFIG SAVE ---",
    "host_writeconfig;",
    "echo                                                            \"CS2 autoexec.cfg loaded successfully.\";",
];

/// Options that do not come from the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// When set, a `// Generated: ...` comment is written near the top
    pub timestamp: Option<DateTime<Utc>>,
    /// Column layout for command lines
    pub layout: Layout,
}

impl GenerationOptions {
    /// Options for a live preview: no timestamp, so output is stable
    #[must_use]
    pub fn preview() -> Self {
        Self::default()
    }

    /// Options for a file download, stamped with the current time
    #[must_use]
    pub fn download() -> Self {
        Self {
            timestamp: Some(Utc::now()),
            ..Self::default()
        }
    }

    /// Replace the column layout
    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Whether a timestamp comment will be written
    #[must_use]
    pub const fn include_timestamp(&self) -> bool {
        self.timestamp.is_some()
    }
}

/// Config script generator
pub struct AutoexecGenerator<'a> {
    state: &'a FormState,
    options: &'a GenerationOptions,
    lines: Vec<String>,
}

impl<'a> AutoexecGenerator<'a> {
    /// Create a generator for a snapshot
    #[must_use]
    pub fn new(state: &'a FormState, options: &'a GenerationOptions) -> Self {
        Self {
            state,
            options,
            lines: Vec::new(),
        }
    }

    /// Generate every line of the script
    #[must_use]
    pub fn generate(mut self) -> Vec<String> {
        self.generate_console_color();
        self.generate_header();
        self.generate_baseline();
        self.generate_binds();
        self.generate_aliases();
        self.generate_settings();
        self.generate_additional();
        self.generate_network_troubleshooting();
        self.generate_config_save();
        self.generate_closing();
        self.lines
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn command(&mut self, command: &str, value: &str, description: Option<&str>) {
        let line = self.options.layout.command(command, value, description);
        self.lines.push(line);
    }

    fn bind(&mut self, key: &str, command: &str, description: Option<&str>) {
        let token = format!("bind \"{}\"", normalize_key(key));
        self.command(&token, command, description);
    }

    fn banner(&mut self, banner: Banner) {
        self.lines.extend(banner.lines());
        self.blank();
    }

    fn generate_console_color(&mut self) {
        let code = self.state.console_color.hex_code();
        self.command("log_color \"Console\"", code, Some("Console text color"));
        self.blank();
    }

    fn generate_header(&mut self) {
        if let Some(timestamp) = self.options.timestamp {
            self.push(format!(
                "// Generated: {}",
                timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            ));
            self.blank();
        }

        for _ in 0..3 {
            self.push(INIT_ECHO);
        }
        self.blank();
    }

    fn generate_baseline(&mut self) {
        self.command("m_yaw", ".022", Some("Mouse yaw sensitivity multiplier"));
        self.command(
            "bind mouse_x",
            "yaw",
            Some("Bind horizontal mouse movement to yaw"),
        );
        self.command(
            "bind mouse_y",
            "pitch",
            Some("Bind vertical mouse movement to pitch"),
        );
        self.blank();
    }

    fn generate_binds(&mut self) {
        let state = self.state;
        if !state.section_enabled(Section::Binds) {
            return;
        }

        self.banner(Banner::Binds);

        for group in BIND_GROUPS {
            if state.section_enabled(group.section) {
                let binds: Vec<(&str, &BindField)> = group
                    .binds
                    .iter()
                    .filter_map(|bind| state.bind_key(bind).map(|key| (key, bind)))
                    .collect();
                self.generate_bind_group(group.heading, &binds);
            }
        }

        let alias_binds: Vec<(&str, &BindField)> = ALIAS_BINDS
            .iter()
            .filter(|alias| state.command_included(alias.flag))
            .filter_map(|alias| state.bind_key(&alias.bind).map(|key| (key, &alias.bind)))
            .collect();
        self.generate_bind_group("ALIAS BINDS", &alias_binds);

        if !state.section_enabled(Section::CustomBinds) {
            return;
        }

        let custom: Vec<_> = state
            .custom_binds
            .iter()
            .filter(|bind| bind.is_complete())
            .collect();
        if !custom.is_empty() {
            self.push(sub_heading("CUSTOM BINDS"));
            for bind in custom {
                self.bind(&bind.key, bind.command.trim(), None);
            }
            self.blank();
        }
    }

    fn generate_bind_group(&mut self, heading: &str, binds: &[(&str, &BindField)]) {
        if binds.is_empty() {
            return;
        }

        self.push(sub_heading(heading));
        for (key, bind) in binds {
            self.bind(key, bind.command, Some(bind.description));
        }
        self.blank();
    }

    fn generate_aliases(&mut self) {
        let state = self.state;
        if !state.section_enabled(Section::Aliases) {
            return;
        }

        self.banner(Banner::Aliases);

        for alias in ALIASES {
            if !state.command_included(alias.flag) {
                continue;
            }

            self.push(sub_heading(alias.heading));
            for &(name, body, description) in alias.definitions {
                self.command(&format!("alias \"{name}\""), body, Some(description));
            }
            self.blank();
        }
    }

    fn generate_settings(&mut self) {
        let state = self.state;
        if !state.section_enabled(Section::Settings) {
            return;
        }

        self.banner(Banner::Settings);

        for group in SETTING_GROUPS {
            if group
                .section
                .is_some_and(|section| !state.section_enabled(section))
            {
                continue;
            }

            let included: Vec<_> = group
                .settings
                .iter()
                .filter(|setting| state.setting_included(setting))
                .collect();
            if included.is_empty() {
                continue;
            }

            self.push(sub_heading(group.heading));
            for setting in included {
                let value = state.setting_value(setting);
                self.command(setting.key, value, Some(setting.description));
            }
            self.blank();
        }
    }

    fn generate_additional(&mut self) {
        if !self.state.section_enabled(Section::Additional) {
            return;
        }

        let state = self.state;
        let commands: Vec<&str> = state
            .additional_commands
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if commands.is_empty() {
            return;
        }

        self.push("// --- ADDITIONAL COMMANDS ---");
        for command in commands {
            self.push(command);
        }
        self.blank();
    }

    fn generate_network_troubleshooting(&mut self) {
        if self.state.include_network_troubleshooting {
            self.extend(NETWORK_TROUBLESHOOTING);
            self.blank();
        }
    }

    fn generate_config_save(&mut self) {
        if self.state.include_config_save {
            self.extend(CONFIG_SAVE);
            self.blank();
        }
    }

    fn generate_closing(&mut self) {
        self.extend(CLOSING_HEAD);
        for _ in 0..11 {
            self.push(SCRIPT_LOADED);
        }
        self.extend(CLOSING_TAIL);
    }

    fn extend(&mut self, lines: &[&str]) {
        self.lines.extend(lines.iter().map(|line| (*line).to_string()));
    }
}

/// Generate the script lines for a validated snapshot
#[must_use]
pub fn generate(state: &FormState, options: &GenerationOptions) -> Vec<String> {
    AutoexecGenerator::new(state, options).generate()
}

/// Validate a raw JSON snapshot and generate its script lines
///
/// # Errors
///
/// Returns an error if the snapshot does not match the form schema. No lines
/// are produced in that case.
pub fn generate_json(
    snapshot: &serde_json::Value,
    options: &GenerationOptions,
) -> GenerationResult<Vec<String>> {
    let state = FormState::from_json(snapshot)?;
    let lines = generate(&state, options);
    tracing::debug!(lines = lines.len(), "generated config script");
    Ok(lines)
}
