//! Static form schema
//!
//! Every field the generator knows about is enumerated here together with its
//! single canonical default. The tables are plain `const` data; lookups are
//! linear scans over a few dozen entries.

use super::state::Section;

/// A scalar setting that maps to one `key "value";` line in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting {
    /// Form field name, which is also the console variable written out
    pub key: &'static str,
    /// Value used when the field is absent or empty
    pub default: &'static str,
    /// Trailing `// ...` description
    pub description: &'static str,
    /// Whether the line is included when `includeCommands` has no entry for it
    pub included_by_default: bool,
}

impl Setting {
    const fn new(key: &'static str, default: &'static str, description: &'static str) -> Self {
        Self {
            key,
            default,
            description,
            included_by_default: false,
        }
    }

    const fn always_on(self) -> Self {
        Self {
            included_by_default: true,
            ..self
        }
    }
}

/// An ordered sub-section of the SETTINGS block
#[derive(Debug, Clone, Copy)]
pub struct SettingGroup {
    /// Sub-heading text, e.g. `HUD`
    pub heading: &'static str,
    /// Section flag gating the group. `None` means only SETTINGS gates it.
    pub section: Option<Section>,
    /// Settings in output order
    pub settings: &'static [Setting],
}

/// A key binding field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindField {
    /// Form field name
    pub field: &'static str,
    /// Engine command bound to the key
    pub command: &'static str,
    /// Key used when the field is absent. Empty means no default binding.
    pub default: &'static str,
    /// Trailing `// ...` description
    pub description: &'static str,
}

impl BindField {
    const fn new(
        field: &'static str,
        command: &'static str,
        default: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            field,
            command,
            default,
            description,
        }
    }
}

/// A group of binds sharing a sub-heading and a section flag
#[derive(Debug, Clone, Copy)]
pub struct BindGroup {
    /// Sub-heading text
    pub heading: &'static str,
    /// Section flag gating the group
    pub section: Section,
    /// Bind fields in output order
    pub binds: &'static [BindField],
}

/// A bind that triggers an alias and is gated by that alias's include flag
#[derive(Debug, Clone, Copy)]
pub struct AliasBind {
    /// `includeCommands` key enabling the alias
    pub flag: &'static str,
    /// The bind field holding the trigger key
    pub bind: BindField,
}

/// An alias definition block
#[derive(Debug, Clone, Copy)]
pub struct AliasDef {
    /// `includeCommands` key enabling the alias
    pub flag: &'static str,
    /// Sub-heading text
    pub heading: &'static str,
    /// `(name, macro, description)` triples, one `alias` line each
    pub definitions: &'static [(&'static str, &'static str, &'static str)],
}

/// `includeCommands` key for the fast bomb drop alias
pub const ALIAS_DROPBOMB: &str = "alias_dropbomb";
/// `includeCommands` key for the crosshair colour toggle alias
pub const ALIAS_CROSSHAIR_TOGGLE: &str = "alias_crosshair_toggle";

/// Key of the self-healing FPS limit setting
pub const FPS_MAX: &str = "fps_max";

const GENERAL: &[Setting] = &[
    Setting::new(FPS_MAX, "0", "Maximum FPS limit (0 = unlimited)").always_on(),
    Setting::new("con_enable", "1", "Enable the developer console"),
];

const GAME: &[Setting] = &[
    Setting::new("r_show_build_info", "0", "Show build info overlay"),
    Setting::new("cl_allow_animated_avatars", "1", "Allow animated avatars"),
    Setting::new(
        "cl_teamcounter_playercount_instead_of_avatars",
        "0",
        "Show player count instead of avatars",
    ),
    Setting::new(
        "cl_predict_body_shot_fx",
        "2",
        "Predicted body shot effect (1 = on, 2 = off)",
    ),
    Setting::new(
        "cl_predict_head_shot_fx",
        "2",
        "Predicted headshot effect (1 = on, 2 = off)",
    ),
    Setting::new(
        "cl_predict_kill_ragdolls",
        "1",
        "Predicted kill ragdolls (1 = on, 2 = off)",
    ),
];

const HUD: &[Setting] = &[
    Setting::new(
        "cl_use_weapon_rarity_as_selection_color",
        "0",
        "Use weapon rarity colors",
    ),
    Setting::new("cl_hud_color", "0", "HUD color index"),
    Setting::new("cl_radar_rotate", "1", "Rotate radar with player"),
    Setting::new("cl_hud_radar_scale", "1.0", "HUD radar scale"),
    Setting::new("hud_scaling", "0.85", "HUD scaling factor"),
    Setting::new("cl_show_team_equipment", "1", "Show teammate equipment"),
    Setting::new(
        "r_drawtracers_firstperson",
        "1",
        "Show bullet tracers in first person view",
    ),
    Setting::new("cl_radar_scale", "0.7", "Radar map zoom"),
    Setting::new("cl_radar_always_centered", "1", "Keep radar centered on player"),
];

const CROSSHAIR: &[Setting] = &[
    Setting::new("cl_crosshairstyle", "4", "Crosshair style (4 = classic static)"),
    Setting::new("cl_crosshairsize", "4", "Crosshair line length"),
    Setting::new("cl_crosshairthickness", "1", "Crosshair line thickness"),
    Setting::new("cl_crosshairgap", "0", "Crosshair center gap"),
    Setting::new("cl_crosshairdot", "0", "Crosshair center dot (0 = off, 1 = on)"),
    Setting::new("cl_crosshaircolor", "5", "Crosshair color preset (5 = custom)"),
    Setting::new("cl_crosshairalpha", "255", "Crosshair transparency (0-255)"),
    Setting::new(
        "cl_crosshaircolor_r",
        "50",
        "Custom crosshair red value (0-255)",
    ),
    Setting::new(
        "cl_crosshaircolor_g",
        "250",
        "Custom crosshair green value (0-255)",
    ),
    Setting::new(
        "cl_crosshaircolor_b",
        "50",
        "Custom crosshair blue value (0-255)",
    ),
    Setting::new("cl_crosshair_t", "0", "T-style crosshair (0=off, 1=on)"),
    Setting::new(
        "cl_crosshairgap_useweaponvalue",
        "0",
        "Use weapon-specific crosshair gap",
    ),
    Setting::new("sensitivity", "2.5", "Mouse sensitivity"),
    Setting::new(
        "zoom_sensitivity_ratio_mouse",
        "1.0",
        "Zoom sensitivity multiplier",
    ),
];

const VIEWMODEL: &[Setting] = &[
    Setting::new("viewmodel_fov", "60", "Viewmodel field of view (54-68)"),
    Setting::new(
        "viewmodel_offset_x",
        "0",
        "Viewmodel horizontal offset (-2.0-2.5)",
    ),
    Setting::new(
        "viewmodel_offset_y",
        "0",
        "Viewmodel forward/back offset (-2.0-2.0)",
    ),
    Setting::new(
        "viewmodel_offset_z",
        "-1.5",
        "Viewmodel vertical offset (-2.0-2.0)",
    ),
    Setting::new(
        "viewmodel_presetpos",
        "1",
        "Viewmodel preset position (0=Custom, 1=Desktop, 2=Couch, 3=Classic)",
    ),
];

const AUDIO: &[Setting] = &[
    Setting::new("volume", "1.0", "Master game volume"),
    Setting::new("snd_headphone_eq", "1", "Headphone equalization mode"),
    Setting::new(
        "snd_mixahead",
        "0.001",
        "Audio buffer size for reduced latency",
    ),
    Setting::new(
        "snd_spatialize_lerp",
        "0.8",
        "Audio spatialization interpolation",
    ),
    Setting::new("snd_menumusic_volume", "0", "Menu music volume"),
    Setting::new(
        "snd_mute_mvp_music_live_players",
        "1",
        "Mute MVP music when players alive",
    ),
    Setting::new("snd_autodetect_latency", "1", "Auto-detect audio latency"),
];

const NETWORK: &[Setting] = &[
    Setting::new("cl_invites_only_friends", "0", "Restrict invites to friends"),
    Setting::new(
        "cl_invites_only_mainmenu",
        "0",
        "Invites only in main menu",
    ),
    Setting::new("cl_join_advertise", "2", "Allow friends to join"),
    Setting::new("cl_clock_correction", "0", "Clock correction"),
    Setting::new("cl_interp_ratio", "1", "Interpolation ratio"),
    Setting::new("cl_interp", "0.015625", "Interpolation delay"),
    Setting::new("cl_updaterate", "128", "Update rate"),
    Setting::new("cl_cmdrate", "128", "Command rate"),
    Setting::new(
        "mm_dedicated_search_maxping",
        "100",
        "Matchmaking max ping (ms)",
    ),
    Setting::new("rate", "786432", "Bandwidth rate"),
];

/// SETTINGS sub-sections in output order
pub const SETTING_GROUPS: &[SettingGroup] = &[
    SettingGroup {
        heading: "GENERAL",
        section: None,
        settings: GENERAL,
    },
    SettingGroup {
        heading: "GAME SETTINGS",
        section: Some(Section::GameSettings),
        settings: GAME,
    },
    SettingGroup {
        heading: "HUD",
        section: Some(Section::Hud),
        settings: HUD,
    },
    SettingGroup {
        heading: "CROSSHAIR & SENSITIVITY",
        section: Some(Section::MouseCrosshair),
        settings: CROSSHAIR,
    },
    SettingGroup {
        heading: "VIEWMODEL",
        section: Some(Section::Viewmodel),
        settings: VIEWMODEL,
    },
    SettingGroup {
        heading: "AUDIO",
        section: Some(Section::Sound),
        settings: AUDIO,
    },
    SettingGroup {
        heading: "NETWORK",
        section: Some(Section::Rate),
        settings: NETWORK,
    },
];

const MOVEMENT_BINDS: &[BindField] = &[
    BindField::new("forward_bind", "+forward", "W", "Move forward"),
    BindField::new("moveleft_bind", "+moveleft", "A", "Strafe left"),
    BindField::new("back_bind", "+back", "S", "Move backward"),
    BindField::new("moveright_bind", "+moveright", "D", "Strafe right"),
    BindField::new("jump_bind", "+jump", "SPACE", "Jump"),
    BindField::new("duck_bind", "+duck", "LEFT CTRL", "Crouch"),
    BindField::new("walk_bind", "+sprint", "LEFT SHIFT", "Walk"),
];

const WEAPON_ACTION_BINDS: &[BindField] = &[
    BindField::new("slot1_bind", "slot1", "1", "Primary weapon"),
    BindField::new("slot2_bind", "slot2", "2", "Secondary weapon"),
    BindField::new("slot2_bind_alt", "slot2", "Q", "Quick switch to secondary"),
    BindField::new("slot3_bind", "slot3", "", "Knife"),
    BindField::new("slot4_bind", "slot4", "4", "Grenades"),
    BindField::new("slot5_bind", "slot5", "5", "Bomb"),
    BindField::new("slot6_bind", "slot6", "", "HE grenade"),
    BindField::new("slot7_bind", "slot7", "", "Flashbang"),
    BindField::new("slot8_bind", "slot8", "", "Smoke grenade"),
    BindField::new("slot9_bind", "slot9", "", "Decoy"),
    BindField::new("slot10_bind", "slot10", "", "Molotov / incendiary"),
    BindField::new("use_bind", "+use", "E", "Use / defuse"),
    BindField::new("reload_bind", "+reload", "R", "Reload weapon"),
    BindField::new("drop_bind", "drop", "G", "Drop weapon"),
    BindField::new("inspect_bind", "+lookatweapon", "", "Inspect weapon"),
    BindField::new("buymenu_bind", "buymenu", "", "Open buy menu"),
    BindField::new("cleardecals_bind", "r_cleardecals", "", "Clear decals"),
];

const UI_COMM_BINDS: &[BindField] = &[
    BindField::new("scoreboard_bind", "+showscores", "TAB", "Show scoreboard"),
    BindField::new("teammenu_bind", "teammenu", "M", "Open team menu"),
    BindField::new("voice_bind", "+voicerecord", "T", "Push-to-talk"),
    BindField::new("allchat_bind", "messagemode", "Y", "All chat"),
    BindField::new("teamchat_bind", "messagemode2", "U", "Team chat"),
    BindField::new("radio_bind", "radio", "", "Radio menu"),
    BindField::new(
        "toggleconsole_bind",
        "toggleconsole",
        "F9",
        "Toggle developer console",
    ),
];

/// BINDS sub-groups in output order
pub const BIND_GROUPS: &[BindGroup] = &[
    BindGroup {
        heading: "MOVEMENT",
        section: Section::MovementBinds,
        binds: MOVEMENT_BINDS,
    },
    BindGroup {
        heading: "WEAPONS & ACTIONS",
        section: Section::WeaponsActionBinds,
        binds: WEAPON_ACTION_BINDS,
    },
    BindGroup {
        heading: "UI & COMMUNICATION",
        section: Section::UiCommBinds,
        binds: UI_COMM_BINDS,
    },
];

/// Binds that trigger aliases, in output order
pub const ALIAS_BINDS: &[AliasBind] = &[
    AliasBind {
        flag: ALIAS_DROPBOMB,
        bind: BindField::new("dropbomb_bind", "+dropbomb", "^", "Fast bomb drop"),
    },
    AliasBind {
        flag: ALIAS_CROSSHAIR_TOGGLE,
        bind: BindField::new(
            "crosshair_toggle_bind",
            "toggle_crosshair_color",
            "LEFTARROW",
            "Toggle crosshair color",
        ),
    },
];

/// Alias definitions in output order
pub const ALIASES: &[AliasDef] = &[
    AliasDef {
        flag: ALIAS_DROPBOMB,
        heading: "FAST BOMB DROP",
        definitions: &[
            ("+dropbomb", "slot3; slot5", "Switch to knife, then bomb"),
            ("-dropbomb", "drop; slot1", "Drop bomb, back to primary"),
        ],
    },
    AliasDef {
        flag: ALIAS_CROSSHAIR_TOGGLE,
        heading: "CROSSHAIR TOGGLE",
        definitions: &[(
            "toggle_crosshair_color",
            "toggle cl_crosshaircolor_b 0 255",
            "Toggle crosshair color between yellow and white",
        )],
    },
];

/// Legacy fields accepted in a snapshot but never written to the output
pub const RETAINED_FIELDS: &[&str] = &[
    "cmdrate",
    "updaterate",
    "snd_roundstart_volume",
    "snd_roundend_volume",
    "snd_tensecondwarning_volume",
    "snd_mvp_volume",
    "voice_modenable",
    "m_pitch",
    "cl_crosshair_drawoutline",
    "cl_crosshair_outlinethickness",
    "cl_hud_background_alpha",
    "cl_hud_healthammo_style",
    "cl_hud_playercount_pos",
    "cl_hud_playercount_showcount",
    "cl_radar_square_with_scoreboard",
    "cl_teamid_overhead_always",
    "cl_teamid_overhead_name_alpha",
    "cl_autowepswitch",
    "r_dynamic",
    "mat_queue_mode",
    "r_drawparticles",
    "cl_disablefreezecam",
    "snd_headphone_pan_exponent",
    "snd_headphone_pan_radial_weight",
    "developer",
    "con_filter_enable",
    "con_filter_text",
    "con_filter_text_out",
    "net_graph",
    "net_graphproportionalfont",
    "gameinstructor_enable",
    "cl_showfps",
    "cl_radar_player_names",
    "cl_radar_full_map",
    "hud_deathnotice_time",
    "cl_hideservernotifications",
    "cl_teammate_colors_show",
    "cl_radar_icon_scale_min",
    "cl_radar_background_opacity",
    "cl_teamid_overhead_mode",
    "cl_teamid_overhead_colors_show",
    "cl_show_equipment_value",
    "cl_teamid_overhead_show_avatars",
    "cl_teammate_avatar_animated",
];

/// Iterate over every setting in every group
pub fn all_settings() -> impl Iterator<Item = &'static Setting> {
    SETTING_GROUPS.iter().flat_map(|group| group.settings.iter())
}

/// Iterate over every bind field, alias binds included
pub fn all_bind_fields() -> impl Iterator<Item = &'static BindField> {
    BIND_GROUPS
        .iter()
        .flat_map(|group| group.binds.iter())
        .chain(ALIAS_BINDS.iter().map(|alias| &alias.bind))
}

/// Look up a setting by key
#[must_use]
pub fn find_setting(key: &str) -> Option<&'static Setting> {
    all_settings().find(|setting| setting.key == key)
}

/// Whether `name` is a scalar field of the form (setting, bind or legacy)
#[must_use]
pub fn is_scalar_field(name: &str) -> bool {
    find_setting(name).is_some()
        || all_bind_fields().any(|bind| bind.field == name)
        || RETAINED_FIELDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_setting_keys_unique() {
        let mut seen = HashSet::new();
        for setting in all_settings() {
            assert!(seen.insert(setting.key), "duplicate key {}", setting.key);
        }
    }

    #[test]
    fn test_every_setting_has_default() {
        for setting in all_settings() {
            assert!(!setting.default.is_empty(), "{} has no default", setting.key);
        }
    }

    #[test]
    fn test_only_fps_max_included_by_default() {
        let always_on: Vec<_> = all_settings()
            .filter(|s| s.included_by_default)
            .map(|s| s.key)
            .collect();
        assert_eq!(always_on, vec![FPS_MAX]);
    }

    #[test]
    fn test_bind_fields_unique() {
        let mut seen = HashSet::new();
        for bind in all_bind_fields() {
            assert!(seen.insert(bind.field), "duplicate field {}", bind.field);
        }
    }

    #[test]
    fn test_retained_fields_do_not_shadow_settings() {
        for name in RETAINED_FIELDS {
            assert!(find_setting(name).is_none(), "{name} is also a setting");
        }
    }

    #[test]
    fn test_is_scalar_field() {
        assert!(is_scalar_field("cl_hud_color"));
        assert!(is_scalar_field("forward_bind"));
        assert!(is_scalar_field("dropbomb_bind"));
        assert!(is_scalar_field("net_graph"));
        assert!(!is_scalar_field("consoleColor"));
        assert!(!is_scalar_field("cl_made_up"));
    }
}
