use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::month_window::MAX_SPAN_MONTHS;

pub fn key_match(key: &KeyEvent, bindings: &[String]) -> bool {
    bindings.iter().any(|binding| is_match(key, binding))
}

fn is_match(key: &KeyEvent, binding: &str) -> bool {
    let binding = binding.to_lowercase();
    let mut target_modifiers = KeyModifiers::NONE;
    let mut target_code = KeyCode::Null;

    for part in binding.split('+') {
        match part {
            "ctrl" => target_modifiers.insert(KeyModifiers::CONTROL),
            "opt" | "alt" => target_modifiers.insert(KeyModifiers::ALT),
            "shift" => target_modifiers.insert(KeyModifiers::SHIFT),
            "enter" => target_code = KeyCode::Enter,
            "esc" => target_code = KeyCode::Esc,
            "tab" => target_code = KeyCode::Tab,
            "backtab" => target_code = KeyCode::BackTab,
            "space" => target_code = KeyCode::Char(' '),
            "up" => target_code = KeyCode::Up,
            "down" => target_code = KeyCode::Down,
            "left" => target_code = KeyCode::Left,
            "right" => target_code = KeyCode::Right,
            "home" => target_code = KeyCode::Home,
            "end" => target_code = KeyCode::End,
            "pageup" => target_code = KeyCode::PageUp,
            "pagedown" => target_code = KeyCode::PageDown,
            c if c.chars().count() == 1 => {
                if let Some(ch) = c.chars().next() {
                    target_code = KeyCode::Char(ch);
                }
            }
            _ => {}
        }
    }

    let code_matches = if key.code == target_code {
        true
    } else if let (KeyCode::Char(c), KeyCode::Char(tc)) = (key.code, target_code) {
        c.to_lowercase().next() == Some(tc)
    } else {
        false
    };
    if !code_matches {
        return false;
    }

    // Shift only counts when the binding asks for it ('?' and BackTab arrive shifted).
    let mut key_mods = key.modifiers;
    if !target_modifiers.contains(KeyModifiers::SHIFT) {
        key_mods.remove(KeyModifiers::SHIFT);
    }
    key_mods == target_modifiers
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "journal-cal", "journal-cal")
}

pub fn default_data_dir() -> PathBuf {
    if let Some(path) = std::env::var_os("JOURNAL_CAL_DATA_DIR") {
        return PathBuf::from(path);
    }
    if let Some(dirs) = project_dirs() {
        return dirs.data_dir().to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".journal-cal")
}

pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("JOURNAL_CAL_CONFIG") {
        return PathBuf::from(path);
    }
    if let Some(dirs) = project_dirs() {
        return dirs.config_dir().join("config.toml");
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".journal-cal.toml")
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub swipe: SwipeConfig,
    pub data: DataConfig,
    pub keybindings: KeyBindings,
    pub theme: Theme,
}

/// Raw `[calendar]` table. Counts are signed so a negative value is reported
/// instead of failing deserialization with a generic message.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CalendarConfig {
    pub months_before: i64,
    pub months_after: i64,
    pub extension_batch: i64,
    pub extension_threshold_multiplier: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_months: Option<i64>,
    pub cell_height: i64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            months_before: 12,
            months_after: 12,
            extension_batch: 6,
            extension_threshold_multiplier: 2,
            max_months: None,
            cell_height: 4,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SwipeConfig {
    pub threshold_px: f64,
    /// Pixel width of one terminal column when converting mouse drags.
    pub cell_width_px: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold_px: 100.0,
            cell_width_px: 10.0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DataConfig {
    pub journal_path: PathBuf,
    pub title: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            journal_path: default_data_dir().join("journal.json"),
            title: "Journal Calendar".to_string(),
        }
    }
}

/// Validated numbers the calendar runs with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarSettings {
    pub months_before: usize,
    pub months_after: usize,
    pub extension_batch: usize,
    pub extension_threshold_multiplier: usize,
    pub max_months: Option<usize>,
    pub cell_height: usize,
    pub swipe_threshold: f64,
    pub cell_width_px: f64,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            months_before: 12,
            months_after: 12,
            extension_batch: 6,
            extension_threshold_multiplier: 2,
            max_months: None,
            cell_height: 4,
            swipe_threshold: 100.0,
            cell_width_px: 10.0,
        }
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<usize, ConfigError> {
    usize::try_from(value).map_err(|_| ConfigError::Negative { field, value })
}

/// A month count that must fit in one window side or batch.
fn month_span(
    field: &'static str,
    value: i64,
    check: fn(&'static str, i64) -> Result<usize, ConfigError>,
) -> Result<usize, ConfigError> {
    let months = check(field, value)?;
    if months > MAX_SPAN_MONTHS {
        return Err(ConfigError::TooLarge {
            field,
            value,
            max: MAX_SPAN_MONTHS,
        });
    }
    Ok(months)
}

fn positive(field: &'static str, value: i64) -> Result<usize, ConfigError> {
    match usize::try_from(value) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::NotPositive {
            field,
            value: value.to_string(),
        }),
    }
}

fn positive_f64(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive {
            field,
            value: value.to_string(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct KeyBindings {
    pub global: GlobalBindings,
    pub calendar: CalendarBindings,
    pub card: CardBindings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
    pub help: Vec<String>,
    pub today: Vec<String>,
    pub reload: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["ctrl+q".to_string(), "q".to_string()],
            help: vec!["?".to_string()],
            today: vec!["t".to_string()],
            reload: vec!["r".to_string()],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CalendarBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub page_up: Vec<String>,
    pub page_down: Vec<String>,
    pub prev_month: Vec<String>,
    pub next_month: Vec<String>,
    pub open: Vec<String>,
    pub next_chip: Vec<String>,
    pub prev_chip: Vec<String>,
}

impl Default for CalendarBindings {
    fn default() -> Self {
        Self {
            up: vec!["k".to_string(), "up".to_string()],
            down: vec!["j".to_string(), "down".to_string()],
            left: vec!["h".to_string(), "left".to_string()],
            right: vec!["l".to_string(), "right".to_string()],
            page_up: vec!["ctrl+u".to_string(), "pageup".to_string()],
            page_down: vec!["ctrl+d".to_string(), "pagedown".to_string()],
            prev_month: vec!["[".to_string()],
            next_month: vec!["]".to_string()],
            open: vec!["enter".to_string(), "space".to_string()],
            next_chip: vec!["tab".to_string()],
            prev_chip: vec!["backtab".to_string()],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CardBindings {
    pub next: Vec<String>,
    pub previous: Vec<String>,
    pub close: Vec<String>,
    pub open_image: Vec<String>,
}

impl Default for CardBindings {
    fn default() -> Self {
        Self {
            next: vec!["l".to_string(), "right".to_string()],
            previous: vec!["h".to_string(), "left".to_string()],
            close: vec!["esc".to_string(), "q".to_string()],
            open_image: vec!["o".to_string()],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Theme {
    pub border: String,
    pub accent: String,
    pub muted: String,
    pub today: String,
    pub selection_bg: String,
    pub chip: String,
    pub category: String,
    pub rating_high: String,
    pub rating_mid: String,
    pub rating_low: String,
    pub toast: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: "Reset".to_string(),
            accent: "Magenta".to_string(),
            muted: "DarkGray".to_string(),
            today: "Cyan".to_string(),
            selection_bg: "60,60,60".to_string(),
            chip: "LightMagenta".to_string(),
            category: "Magenta".to_string(),
            rating_high: "Green".to_string(),
            rating_mid: "Yellow".to_string(),
            rating_low: "Red".to_string(),
            toast: "Cyan".to_string(),
        }
    }
}

impl Config {
    /// Reads the config file, writing defaults on first run. A file that
    /// does not parse is an error rather than a silent reset.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();
        let mut config = match fs::read_to_string(&path) {
            Ok(content) => Self::from_toml(&content, &path)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Config::default(),
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        let changed = config.normalize_paths();
        if (changed || !path.exists())
            && let Err(err) = config.save_to_path(&path)
        {
            tracing::warn!(?path, %err, "could not write config file");
        }

        Ok(config)
    }

    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str::<Config>(content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to_path(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, content)
    }

    fn normalize_paths(&mut self) -> bool {
        if self.data.journal_path.as_os_str().is_empty() {
            self.data.journal_path = DataConfig::default().journal_path;
            return true;
        }
        if self.data.journal_path.is_relative() {
            self.data.journal_path = default_data_dir().join(&self.data.journal_path);
            return true;
        }
        false
    }

    pub fn settings(&self) -> Result<CalendarSettings, ConfigError> {
        let calendar = &self.calendar;
        let months_before =
            month_span("calendar.months_before", calendar.months_before, non_negative)?;
        let months_after =
            month_span("calendar.months_after", calendar.months_after, non_negative)?;
        let extension_batch =
            month_span("calendar.extension_batch", calendar.extension_batch, positive)?;
        let extension_threshold_multiplier = positive(
            "calendar.extension_threshold_multiplier",
            calendar.extension_threshold_multiplier,
        )?;
        let cell_height = positive("calendar.cell_height", calendar.cell_height)?;

        let max_months = match calendar.max_months {
            None => None,
            Some(max) => {
                let max = positive("calendar.max_months", max)?;
                // Both sides are bounded above, so this cannot overflow.
                let initial = months_before + months_after + 1;
                if max < initial {
                    return Err(ConfigError::CapBelowWindow { max, initial });
                }
                if max < extension_batch {
                    return Err(ConfigError::CapBelowBatch {
                        max,
                        batch: extension_batch,
                    });
                }
                Some(max)
            }
        };

        Ok(CalendarSettings {
            months_before,
            months_after,
            extension_batch,
            extension_threshold_multiplier,
            max_months,
            cell_height,
            swipe_threshold: positive_f64("swipe.threshold_px", self.swipe.threshold_px)?,
            cell_width_px: positive_f64("swipe.cell_width_px", self.swipe.cell_width_px)?,
        })
    }
}
