// Command catalog for the SwitchBot cloud API.
//
// One small enum per device family, carrying the exact wire strings the
// cloud expects, plus a static device-type -> allowed-commands table for
// validation. Families for infrared remotes (TV, DVD, ...) have no entry in
// the table: the cloud forwards whatever the paired remote learned, so there
// is nothing to validate against.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, IntoStaticStr};

// ── Command request ──────────────────────────────────────────────────

/// Wire discriminator for `POST devices/{id}/commands`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    /// A catalog command.
    Command,
    /// A user-defined button on an infrared remote.
    Customize,
}

/// Body of `POST devices/{id}/commands`.
///
/// ```json
/// { "commandType": "command", "command": "turnOn", "parameter": "default" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    pub command_type: CommandType,
    pub command: String,
    pub parameter: Value,
}

impl CommandRequest {
    /// A catalog command with the default parameter.
    ///
    /// Accepts any of the family enums or a plain string:
    /// `CommandRequest::new(CommonCommand::TurnOn)`.
    pub fn new(command: impl AsRef<str>) -> Self {
        Self {
            command_type: CommandType::Command,
            command: command.as_ref().to_owned(),
            parameter: Value::String("default".to_owned()),
        }
    }

    /// Press a user-defined button on an infrared remote, by its name
    /// as configured in the app.
    pub fn customize(button_name: impl Into<String>) -> Self {
        Self {
            command_type: CommandType::Customize,
            command: button_name.into(),
            parameter: Value::String("default".to_owned()),
        }
    }

    /// Replace the parameter. Accepts a plain string
    /// (`"0,ff,80"`) or a structured JSON value, depending on the command.
    pub fn with_parameter(mut self, parameter: impl Into<Value>) -> Self {
        self.parameter = parameter.into();
        self
    }
}

// ── Command families ─────────────────────────────────────────────────

/// Commands most powered device types accept.
///
/// Too widely supported to carry a device list; the cloud itself rejects
/// them per device where they don't apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum CommonCommand {
    #[strum(serialize = "turnOn")]
    TurnOn,
    #[strum(serialize = "turnOff")]
    TurnOff,
    #[strum(serialize = "toggle")]
    Toggle,
    #[strum(serialize = "press")]
    Press,
}

/// Bot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum BotCommand {
    #[strum(serialize = "press")]
    Press,
}

/// Curtain & Curtain3 commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum CurtainCommand {
    /// parameter(str): `index0,mode0,position0`, e.g. `0,ff,80`
    #[strum(serialize = "setPosition")]
    SetPosition,
    #[strum(serialize = "pause")]
    Pause,
}

/// Lock commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum LockCommand {
    #[strum(serialize = "lock")]
    Lock,
    #[strum(serialize = "unlock")]
    Unlock,
}

/// Lock commands for models with a secondary deadbolt mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum LockV2Command {
    #[strum(serialize = "lock")]
    Lock,
    #[strum(serialize = "unlock")]
    Unlock,
    #[strum(serialize = "deadbolt")]
    Deadbolt,
}

/// Humidifier commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum HumidifierCommand {
    /// parameter: `auto`, or 101 / 102 / 103 for 34% / 67% / 100%
    /// atomization efficiency.
    #[strum(serialize = "setMode")]
    SetMode,
}

/// Humidifier 2 commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum HumidifierV2Command {
    #[strum(serialize = "setMode")]
    SetMode,
    #[strum(serialize = "setChildLock")]
    SetChildLock,
}

/// Air purifier commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum AirPurifierCommand {
    #[strum(serialize = "setMode")]
    SetMode,
    #[strum(serialize = "setChildLock")]
    SetChildLock,
}

/// Air conditioner (IR) commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum AirConditionerCommand {
    /// parameter: `{temperature},{mode},{fan speed},{power state}`
    #[strum(serialize = "setAll")]
    SetAll,
}

/// Relay Switch 1 / 1PM commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum RelaySwitchCommand {
    #[strum(serialize = "setMode")]
    SetMode,
}

/// Relay Switch 2PM commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum RelaySwitch2PmCommand {
    #[strum(serialize = "setMode")]
    SetMode,
    #[strum(serialize = "setPosition")]
    SetPosition,
}

/// RGBW strip light commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum RgbwLightCommand {
    #[strum(serialize = "setBrightness")]
    SetBrightness,
    #[strum(serialize = "setColor")]
    SetColor,
}

/// RGBWW light commands (Color Bulb, Strip Light 3, Floor Lamp).
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum RgbwwLightCommand {
    #[strum(serialize = "setBrightness")]
    SetBrightness,
    #[strum(serialize = "setColor")]
    SetColor,
    #[strum(serialize = "setColorTemperature")]
    SetColorTemperature,
}

/// Video doorbell commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum DoorbellCommand {
    #[strum(serialize = "enableMotionDetection")]
    EnableMotionDetection,
    #[strum(serialize = "disableMotionDetection")]
    DisableMotionDetection,
}

/// First-generation robot vacuum commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum VacuumCommand {
    #[strum(serialize = "start")]
    Start,
    #[strum(serialize = "stop")]
    Stop,
    #[strum(serialize = "dock")]
    Dock,
    #[strum(serialize = "PowLevel")]
    PowLevel,
}

/// K20+ Pro / K10+ Pro Combo vacuum commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum VacuumV2Command {
    #[strum(serialize = "startClean")]
    StartClean,
    #[strum(serialize = "pause")]
    Pause,
    #[strum(serialize = "dock")]
    Dock,
    #[strum(serialize = "setVolume")]
    SetVolume,
    #[strum(serialize = "changeParam")]
    ChangeParam,
}

/// S10 / S20 floor-cleaning robot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum VacuumV3Command {
    #[strum(serialize = "startClean")]
    StartClean,
    #[strum(serialize = "pause")]
    Pause,
    #[strum(serialize = "dock")]
    Dock,
    #[strum(serialize = "setVolume")]
    SetVolume,
    #[strum(serialize = "changeParam")]
    ChangeParam,
    #[strum(serialize = "addWaterForHumi")]
    AddWaterForHumi,
    #[strum(serialize = "selfClean")]
    SelfClean,
}

/// Ceiling light commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum CeilingLightCommand {
    /// 1-100
    #[strum(serialize = "setBrightness")]
    SetBrightness,
    /// 2700-6500
    #[strum(serialize = "setColorTemperature")]
    SetColorTemperature,
}

/// Blind Tilt commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum BlindTiltCommand {
    #[strum(serialize = "setPosition")]
    SetPosition,
    #[strum(serialize = "fullyOpen")]
    FullyOpen,
    #[strum(serialize = "closeUp")]
    CloseUp,
    #[strum(serialize = "closeDown")]
    CloseDown,
}

/// Roller Shade commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum RollerShadeCommand {
    #[strum(serialize = "setPosition")]
    SetPosition,
}

/// Circulator fan commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum BatteryCirculatorFanCommand {
    #[strum(serialize = "setWindSpeed")]
    SetWindSpeed,
    #[strum(serialize = "setWindMode")]
    SetWindMode,
    #[strum(serialize = "setNightLightMode")]
    SetNightLightMode,
}

/// Wind modes for the circulator fans, used as `setWindMode` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum BatteryCirculatorFanMode {
    #[strum(serialize = "direct")]
    Direct,
    #[strum(serialize = "natural")]
    Natural,
    #[strum(serialize = "sleep")]
    Sleep,
    #[strum(serialize = "baby")]
    Baby,
}

// ── Infrared remote families ─────────────────────────────────────────

/// User-defined buttons on any remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum OthersCommand {
    /// Command is the name of the customized button.
    #[strum(serialize = "customize")]
    Customize,
}

/// TV remote commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum TvCommand {
    #[strum(serialize = "SetChannel")]
    SetChannel,
    #[strum(serialize = "volumeAdd")]
    VolumeAdd,
    #[strum(serialize = "volumeSub")]
    VolumeSub,
    #[strum(serialize = "channelAdd")]
    ChannelAdd,
    #[strum(serialize = "channelSub")]
    ChannelSub,
}

/// DVD remote commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum DvdCommand {
    #[strum(serialize = "setMute")]
    SetMute,
    #[strum(serialize = "FastForward")]
    FastForward,
    #[strum(serialize = "Rewind")]
    Rewind,
    #[strum(serialize = "Next")]
    Next,
    #[strum(serialize = "Previous")]
    Previous,
    #[strum(serialize = "Pause")]
    Pause,
    #[strum(serialize = "Play")]
    Play,
    #[strum(serialize = "Stop")]
    Stop,
}

/// Speaker remote commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum SpeakerCommand {
    #[strum(serialize = "volumeAdd")]
    VolumeAdd,
    #[strum(serialize = "volumeSub")]
    VolumeSub,
}

/// Fan remote commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum FanCommand {
    #[strum(serialize = "swing")]
    Swing,
    #[strum(serialize = "timer")]
    Timer,
    #[strum(serialize = "lowSpeed")]
    LowSpeed,
    #[strum(serialize = "middleSpeed")]
    MiddleSpeed,
    #[strum(serialize = "highSpeed")]
    HighSpeed,
}

/// Light remote commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
pub enum LightCommand {
    #[strum(serialize = "brightnessUp")]
    BrightnessUp,
    #[strum(serialize = "brightnessDown")]
    BrightnessDown,
}

// ── Supported-device table ───────────────────────────────────────────

/// Device type -> commands the cloud accepts for it, in catalog order.
///
/// Built from the per-family supported-device lists. Device types that
/// appear in several families (the locks) get the merged set.
static SUPPORTED_COMMANDS: &[(&str, &[&str])] = &[
    ("Bot", &["press"]),
    ("Curtain", &["setPosition", "pause"]),
    ("Curtain 3", &["setPosition", "pause"]),
    ("Smart Lock", &["lock", "unlock", "deadbolt"]),
    ("Smart Lock Lite", &["lock", "unlock"]),
    ("Smart Lock Pro", &["lock", "unlock", "deadbolt"]),
    ("Smart Lock Ultra", &["lock", "unlock", "deadbolt"]),
    ("Humidifier", &["setMode"]),
    ("Humidifier 2", &["setMode", "setChildLock"]),
    ("Air Purifier VOC", &["setMode", "setChildLock"]),
    ("Air Purifier Table VOC", &["setMode", "setChildLock"]),
    ("Air Purifier PM2.5", &["setMode", "setChildLock"]),
    ("Air Purifier Table PM2.5", &["setMode", "setChildLock"]),
    ("Air Conditioner", &["setAll"]),
    ("Relay Switch 1", &["setMode"]),
    ("Relay Switch 1PM", &["setMode"]),
    ("Relay Switch 2PM", &["setMode", "setPosition"]),
    ("Strip Light", &["setBrightness", "setColor"]),
    (
        "Strip Light 3",
        &["setBrightness", "setColor", "setColorTemperature"],
    ),
    (
        "Floor Lamp",
        &["setBrightness", "setColor", "setColorTemperature"],
    ),
    (
        "Color Bulb",
        &["setBrightness", "setColor", "setColorTemperature"],
    ),
    (
        "Video Doorbell",
        &["enableMotionDetection", "disableMotionDetection"],
    ),
    ("K10+", &["start", "stop", "dock", "PowLevel"]),
    ("K10+ Pro", &["start", "stop", "dock", "PowLevel"]),
    ("Robot Vacuum Cleaner S1", &["start", "stop", "dock", "PowLevel"]),
    (
        "Robot Vacuum Cleaner S1 Plus",
        &["start", "stop", "dock", "PowLevel"],
    ),
    (
        "K20+ Pro",
        &["startClean", "pause", "dock", "setVolume", "changeParam"],
    ),
    (
        "Robot Vacuum Cleaner K10+ Pro Combo",
        &["startClean", "pause", "dock", "setVolume", "changeParam"],
    ),
    (
        "Robot Vacuum Cleaner S10",
        &[
            "startClean",
            "pause",
            "dock",
            "setVolume",
            "changeParam",
            "addWaterForHumi",
            "selfClean",
        ],
    ),
    (
        "S20",
        &[
            "startClean",
            "pause",
            "dock",
            "setVolume",
            "changeParam",
            "addWaterForHumi",
            "selfClean",
        ],
    ),
    ("Ceiling Light", &["setBrightness", "setColorTemperature"]),
    ("Ceiling Light Pro", &["setBrightness", "setColorTemperature"]),
    ("Blind Tilt", &["setPosition", "fullyOpen", "closeUp", "closeDown"]),
    ("Roller Shade", &["setPosition"]),
    (
        "Circulator Fan",
        &["setWindSpeed", "setWindMode", "setNightLightMode"],
    ),
    (
        "Battery Circulator Fan",
        &["setWindSpeed", "setWindMode", "setNightLightMode"],
    ),
];

/// The ordered command set a device type supports, or `None` for types
/// without a catalog entry (IR remotes, sensors without commands).
pub fn supported_commands(device_type: &str) -> Option<&'static [&'static str]> {
    SUPPORTED_COMMANDS
        .iter()
        .find(|(ty, _)| *ty == device_type)
        .map(|(_, commands)| *commands)
}

/// Whether `command` is in the catalog for `device_type`.
pub fn is_supported(device_type: &str, command: impl AsRef<str>) -> bool {
    supported_commands(device_type).is_some_and(|commands| commands.contains(&command.as_ref()))
}
