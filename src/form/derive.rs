//! Flag derivations
//!
//! The form keeps parent section flags and per-key flags consistent with the
//! sub-section toggles the user actually touches. These are pure functions
//! over a snapshot, applied explicitly before generation.

use super::schema::{
    all_settings, ALIAS_CROSSHAIR_TOGGLE, ALIAS_DROPBOMB, FPS_MAX, SETTING_GROUPS,
};
use super::state::{FormState, Section};

const BIND_CHILDREN: &[Section] = &[
    Section::MovementBinds,
    Section::WeaponsActionBinds,
    Section::UiCommBinds,
    Section::CustomBinds,
];

const SETTINGS_CHILDREN: &[Section] = &[
    Section::Hud,
    Section::MouseCrosshair,
    Section::Viewmodel,
    Section::Sound,
    Section::Rate,
    Section::GameSettings,
];

const ALIAS_FLAGS: &[&str] = &[ALIAS_DROPBOMB, ALIAS_CROSSHAIR_TOGGLE];

/// Sections turned on or off together by the settings preset
const SETTINGS_FAMILY: &[Section] = &[
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

const BINDS_FAMILY: &[Section] = &[
    Section::Binds,
    Section::MovementBinds,
    Section::WeaponsActionBinds,
    Section::UiCommBinds,
    Section::CustomBinds,
    Section::Aliases,
];

/// Quick selection presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// Toggle every section and key
    SelectAll,
    /// Toggle only the settings family; binds and aliases are switched off
    OnlySettings,
}

/// Recompute the BINDS, SETTINGS and ALIASES flags from their children
///
/// BINDS is on when any bind sub-group or alias is on, SETTINGS when any
/// settings sub-section is on, ALIASES when any alias is on.
#[must_use]
pub fn derive_parent_flags(state: FormState) -> FormState {
    let any_alias = ALIAS_FLAGS.iter().any(|flag| state.command_included(flag));
    let binds = any_alias || BIND_CHILDREN.iter().any(|s| state.section_enabled(*s));
    let settings = SETTINGS_CHILDREN.iter().any(|s| state.section_enabled(*s));

    state
        .with_section(Section::Binds, binds)
        .with_section(Section::Settings, settings)
        .with_section(Section::Aliases, any_alias)
}

/// Align per-key flags with their sub-section toggles
///
/// With SETTINGS off every key flag is cleared. An enabled sub-section turns
/// on keys that were never touched; a disabled one clears its keys.
#[must_use]
pub fn sync_setting_flags(mut state: FormState) -> FormState {
    let settings_on = state.section_enabled(Section::Settings);

    for group in SETTING_GROUPS {
        let Some(section) = group.section else {
            continue;
        };

        let group_on = settings_on && state.section_enabled(section);
        for setting in group.settings {
            if group_on {
                state
                    .include_commands
                    .entry(setting.key.to_string())
                    .or_insert(true);
            } else {
                state.include_commands.insert(setting.key.to_string(), false);
            }
        }
    }

    state
}

/// Apply a quick selection preset
///
/// Both presets toggle: when the state already looks fully selected they
/// switch everything they cover off, otherwise on.
#[must_use]
pub fn apply_preset(state: FormState, preset: Preset) -> FormState {
    match preset {
        Preset::SelectAll => {
            let selected = state.section_enabled(Section::Binds)
                && state.section_enabled(Section::Settings)
                && state.section_enabled(Section::Aliases)
                && state.command_included(FPS_MAX);
            let on = !selected;

            let state = set_sections(state, BINDS_FAMILY, on);
            let state = set_sections(state, SETTINGS_FAMILY, on);
            let state = set_commands(state, ALIAS_FLAGS, on);
            set_setting_commands(state, on)
        }
        Preset::OnlySettings => {
            let selected = state.section_enabled(Section::Settings)
                && state.section_enabled(Section::Hud)
                && state.section_enabled(Section::MouseCrosshair)
                && state.command_included(FPS_MAX);
            let on = !selected;

            let state = set_sections(state, BINDS_FAMILY, false);
            let state = set_sections(state, SETTINGS_FAMILY, on);
            let state = set_commands(state, ALIAS_FLAGS, false);
            set_setting_commands(state, on)
        }
    }
}

fn set_sections(state: FormState, sections: &[Section], on: bool) -> FormState {
    sections
        .iter()
        .fold(state, |state, section| state.with_section(*section, on))
}

fn set_commands(state: FormState, keys: &[&str], on: bool) -> FormState {
    keys.iter().fold(state, |state, key| state.with_command(key, on))
}

fn set_setting_commands(state: FormState, on: bool) -> FormState {
    all_settings().fold(state, |state, setting| state.with_command(setting.key, on))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_binds_from_subgroup() {
        let state = FormState::default().with_section(Section::MovementBinds, true);
        let state = derive_parent_flags(state);
        assert!(state.section_enabled(Section::Binds));
        assert!(!state.section_enabled(Section::Settings));
        assert!(!state.section_enabled(Section::Aliases));
    }

    #[test]
    fn test_derive_binds_and_aliases_from_alias_flag() {
        let state = FormState::default().with_command(ALIAS_DROPBOMB, true);
        let state = derive_parent_flags(state);
        assert!(state.section_enabled(Section::Binds));
        assert!(state.section_enabled(Section::Aliases));
    }

    #[test]
    fn test_derive_binds_from_custom_binds() {
        let state = derive_parent_flags(FormState::default().with_section(Section::CustomBinds, true));
        assert!(state.section_enabled(Section::Binds));
        assert!(!state.section_enabled(Section::Aliases));
    }

    #[test]
    fn test_sync_covers_whole_group() {
        let state = FormState::default()
            .with_section(Section::Settings, true)
            .with_section(Section::MouseCrosshair, true);
        let state = sync_setting_flags(state);

        assert!(state.command_included("cl_crosshairstyle"));
        assert!(state.command_included("sensitivity"));
        assert!(!state.command_included("cl_radar_scale"));
    }

    #[test]
    fn test_derive_clears_stale_parent() {
        let state = FormState::default()
            .with_section(Section::Settings, true)
            .with_section(Section::Binds, true);
        let state = derive_parent_flags(state);
        assert!(!state.section_enabled(Section::Settings));
        assert!(!state.section_enabled(Section::Binds));
    }

    #[test]
    fn test_derive_settings_from_hud() {
        let state = derive_parent_flags(FormState::default().with_section(Section::Hud, true));
        assert!(state.section_enabled(Section::Settings));
    }

    #[test]
    fn test_sync_turns_on_untouched_keys() {
        let state = FormState::default()
            .with_section(Section::Settings, true)
            .with_section(Section::Hud, true)
            .with_command("hud_scaling", false);
        let state = sync_setting_flags(state);

        assert!(state.command_included("cl_hud_color"));
        assert!(!state.command_included("hud_scaling"));
        assert_eq!(state.include_commands.get("volume"), Some(&false));
    }

    #[test]
    fn test_sync_clears_everything_without_settings() {
        let state = FormState::default()
            .with_section(Section::Hud, true)
            .with_command("cl_hud_color", true);
        let state = sync_setting_flags(state);
        assert!(!state.command_included("cl_hud_color"));
    }

    #[test]
    fn test_sync_leaves_general_group_alone() {
        let state = sync_setting_flags(FormState::default());
        assert!(!state.include_commands.contains_key(FPS_MAX));
    }

    #[test]
    fn test_select_all_toggles() {
        let state = apply_preset(FormState::default(), Preset::SelectAll);
        for section in Section::ALL {
            assert!(state.section_enabled(section), "{section} should be on");
        }
        assert!(state.command_included(ALIAS_DROPBOMB));
        assert!(state.command_included("rate"));
        assert!(state.command_included(FPS_MAX));

        let state = apply_preset(state, Preset::SelectAll);
        for section in Section::ALL {
            assert!(!state.section_enabled(section), "{section} should be off");
        }
        assert!(!state.command_included(FPS_MAX));
    }

    #[test]
    fn test_only_settings_disables_binds() {
        let state = apply_preset(FormState::default(), Preset::SelectAll);
        let state = apply_preset(state, Preset::OnlySettings);

        // already fully selected, so the settings family toggles off too
        assert!(!state.section_enabled(Section::Settings));
        assert!(!state.section_enabled(Section::Binds));
        assert!(!state.command_included(ALIAS_CROSSHAIR_TOGGLE));

        let state = apply_preset(state, Preset::OnlySettings);
        assert!(state.section_enabled(Section::Settings));
        assert!(state.section_enabled(Section::Hud));
        assert!(!state.section_enabled(Section::Binds));
        assert!(!state.section_enabled(Section::Aliases));
        assert!(state.command_included("cl_hud_color"));
    }
}
