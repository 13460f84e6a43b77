//! Keybindings configuration for the TUI.

use anyhow::{Context, Result, anyhow, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

macro_rules! vec_of_strings {
    ($($s:expr),* $(,)?) => {
        vec![$($s.to_string()),*]
    };
}

/// Top-level configuration for break-calc.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// TUI configuration.
    pub tui: TuiConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Keybindings configuration.
    pub keybindings: KeyBindingsConfig,
}

/// Keybindings configuration for the TUI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyBindingsConfig {
    /// Keybindings for the calculator screen.
    pub calculator: CalculatorKeyBindings,
}

/// Keybindings for the calculator screen.
///
/// Digits, `:` and Backspace always edit the start-time input and cannot be
/// bound to actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorKeyBindings {
    /// Quit the application.
    pub quit: Vec<String>,
    /// Compute the break windows from the current input.
    pub calculate: Vec<String>,
    /// Clear the start-time input.
    pub clear: Vec<String>,
    /// Copy the selected cell to the clipboard.
    pub copy: Vec<String>,
    /// Move the selection up one row.
    pub up: Vec<String>,
    /// Move the selection down one row.
    pub down: Vec<String>,
    /// Move the selection to the time-in column.
    pub left: Vec<String>,
    /// Move the selection to the time-out column.
    pub right: Vec<String>,
}

impl Default for CalculatorKeyBindings {
    fn default() -> Self {
        Self {
            quit: vec_of_strings!["q", "Q", "Esc"],
            calculate: vec_of_strings!["Enter"],
            clear: vec_of_strings!["Ctrl+u"],
            copy: vec_of_strings!["y", "Y"],
            up: vec_of_strings!["k", "K", "Up"],
            down: vec_of_strings!["j", "J", "Down"],
            left: vec_of_strings!["h", "H", "Left"],
            right: vec_of_strings!["l", "L", "Right"],
        }
    }
}

/// Returns the default configuration file path.
///
/// On Linux/macOS: `~/.config/break-calc/config.toml`
/// On Windows: `%APPDATA%\break-calc\config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("break-calc").join("config.toml"))
}

/// Generate default configuration as TOML string.
pub fn generate_default_config_toml() -> Result<String> {
    let config = Config::default();

    let toml_str =
        toml::to_string_pretty(&config).context("failed to serialize the default configuration")?;

    let header = r#"# break-calc Configuration
#
# This file allows you to customize break-calc.
#
# [tui.keybindings.calculator]
# Each action can have multiple key bindings.
#
# Supported key formats:
# - Single characters: "j", "k", "y"
# - Special keys: "Enter", "Esc", "Tab", "Backspace", "Delete", "Insert"
# - Arrow keys: "Up", "Down", "Left", "Right"
# - Navigation keys: "Home", "End", "PageUp", "PageDown"
# - Modified keys: "Ctrl+d", "Alt+k", "Shift+Up"
#
# Digits, ":" and Backspace always edit the start-time input and cannot be
# bound to actions.
#
# Note: When this file exists, ALL default keybindings are disabled.
# Make sure to define all actions you need.

"#;

    Ok(format!("{header}{toml_str}"))
}

/// Load configuration from a TOML file.
///
/// # Arguments
/// - `path`: Optional path to the config file. If `None`, uses the default path.
///
/// # Returns
/// - `Ok(Some(config))` if the file exists and was successfully parsed
/// - `Ok(None)` if the file does not exist
/// - `Err(_)` if there was an error reading or parsing the file
pub fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => return Ok(None),
        },
    };

    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", config_path.display()))?;

    Ok(Some(config))
}

/// Parse a key string into a `KeyEvent`.
///
/// # Examples
/// - "j" -> `KeyCode::Char('j')`
/// - "Enter" -> `KeyCode::Enter`
/// - "Ctrl+d" -> `KeyCode::Char('d')` with CONTROL modifier
pub fn parse_key(s: &str) -> Result<KeyEvent> {
    let parts: Vec<&str> = s.split('+').collect();

    if parts.is_empty() {
        bail!("empty key string");
    }

    let mut modifiers = KeyModifiers::NONE;
    let key_part = if parts.len() > 1 {
        for &modifier in &parts[..parts.len() - 1] {
            match modifier {
                "Ctrl" | "Control" => modifiers |= KeyModifiers::CONTROL,
                "Alt" => modifiers |= KeyModifiers::ALT,
                "Shift" => modifiers |= KeyModifiers::SHIFT,
                other => bail!("unknown modifier: {other}"),
            }
        }
        parts[parts.len() - 1]
    } else {
        parts[0]
    };

    let code = parse_key_code(key_part)?;

    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(s: &str) -> Result<KeyCode> {
    match s {
        "Enter" => Ok(KeyCode::Enter),
        "Esc" => Ok(KeyCode::Esc),
        "Backspace" => Ok(KeyCode::Backspace),
        "Left" => Ok(KeyCode::Left),
        "Right" => Ok(KeyCode::Right),
        "Up" => Ok(KeyCode::Up),
        "Down" => Ok(KeyCode::Down),
        "Home" => Ok(KeyCode::Home),
        "End" => Ok(KeyCode::End),
        "PageUp" => Ok(KeyCode::PageUp),
        "PageDown" => Ok(KeyCode::PageDown),
        "Tab" => Ok(KeyCode::Tab),
        "Delete" => Ok(KeyCode::Delete),
        "Insert" => Ok(KeyCode::Insert),
        s if s.len() == 1 => {
            let ch = s.chars().next().ok_or_else(|| anyhow!("empty char"))?;
            Ok(KeyCode::Char(ch))
        }
        other => bail!("unknown key: {other}"),
    }
}

/// Whether a key event is consumed by the start-time input before action
/// dispatch. Such keys must stay unbound.
pub fn is_reserved_for_input(key: &KeyEvent) -> bool {
    if !key.modifiers.is_empty() {
        return false;
    }

    match key.code {
        KeyCode::Backspace => true,
        KeyCode::Char(ch) => ch.is_ascii_digit() || ch == ':',
        _ => false,
    }
}

/// Validate the configuration.
///
/// Checks for:
/// - Empty key bindings
/// - Invalid key expressions
/// - Keys reserved for the input field
/// - Key conflicts between actions
pub fn validate_config_struct(config: &Config) -> Result<()> {
    validate_tui_config(&config.tui)
}

/// Validate the TUI configuration.
pub fn validate_tui_config(config: &TuiConfig) -> Result<()> {
    validate_keybindings_config(&config.keybindings)
}

/// Validate the keybindings configuration.
pub fn validate_keybindings_config(config: &KeyBindingsConfig) -> Result<()> {
    validate_non_empty_bindings(config)?;
    validate_key_expressions(config)?;
    validate_reserved_keys(config)?;
    validate_key_conflicts(config)?;
    Ok(())
}

/// Validate that all keybinding fields have at least one key.
fn validate_non_empty_bindings(config: &KeyBindingsConfig) -> Result<()> {
    macro_rules! check_non_empty {
        ($field:expr, $name:expr) => {
            if $field.is_empty() {
                bail!("{} must have at least one key binding", $name);
            }
        };
    }

    check_non_empty!(config.calculator.quit, "calculator.quit");
    check_non_empty!(config.calculator.calculate, "calculator.calculate");
    check_non_empty!(config.calculator.clear, "calculator.clear");
    check_non_empty!(config.calculator.copy, "calculator.copy");
    check_non_empty!(config.calculator.up, "calculator.up");
    check_non_empty!(config.calculator.down, "calculator.down");
    check_non_empty!(config.calculator.left, "calculator.left");
    check_non_empty!(config.calculator.right, "calculator.right");

    Ok(())
}

/// Validate that all key expressions can be parsed.
fn validate_key_expressions(config: &KeyBindingsConfig) -> Result<()> {
    macro_rules! validate_keys {
        ($field:expr, $name:expr) => {
            for key in $field {
                parse_key(key).with_context(|| format!("invalid key '{key}' in {}", $name))?;
            }
        };
    }

    validate_keys!(&config.calculator.quit, "calculator.quit");
    validate_keys!(&config.calculator.calculate, "calculator.calculate");
    validate_keys!(&config.calculator.clear, "calculator.clear");
    validate_keys!(&config.calculator.copy, "calculator.copy");
    validate_keys!(&config.calculator.up, "calculator.up");
    validate_keys!(&config.calculator.down, "calculator.down");
    validate_keys!(&config.calculator.left, "calculator.left");
    validate_keys!(&config.calculator.right, "calculator.right");

    Ok(())
}

/// Validate that no binding shadows a key the input field consumes.
fn validate_reserved_keys(config: &KeyBindingsConfig) -> Result<()> {
    for (action, keys) in collect_calculator_bindings(config) {
        for key in keys {
            let event = parse_key(&key)?;
            if is_reserved_for_input(&event) {
                bail!(
                    "key '{key}' in calculator.{action} is reserved for editing the input field"
                );
            }
        }
    }

    Ok(())
}

/// Validate that there are no key conflicts between actions.
fn validate_key_conflicts(config: &KeyBindingsConfig) -> Result<()> {
    let mut key_to_actions: HashMap<String, Vec<String>> = HashMap::new();

    for (action, keys) in collect_calculator_bindings(config) {
        for key in keys {
            key_to_actions.entry(key).or_default().push(action.clone());
        }
    }

    for (key, actions) in key_to_actions {
        if actions.len() > 1 {
            bail!("key '{key}' is bound to multiple actions in calculator: {actions:?}");
        }
    }

    Ok(())
}

fn collect_calculator_bindings(config: &KeyBindingsConfig) -> HashMap<String, Vec<String>> {
    let mut bindings = HashMap::new();
    bindings.insert("quit".to_string(), config.calculator.quit.clone());
    bindings.insert("calculate".to_string(), config.calculator.calculate.clone());
    bindings.insert("clear".to_string(), config.calculator.clear.clone());
    bindings.insert("copy".to_string(), config.calculator.copy.clone());
    bindings.insert("up".to_string(), config.calculator.up.clone());
    bindings.insert("down".to_string(), config.calculator.down.clone());
    bindings.insert("left".to_string(), config.calculator.left.clone());
    bindings.insert("right".to_string(), config.calculator.right.clone());
    bindings
}

/// Action that can be performed on the calculator screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Compute the break windows.
    Calculate,
    /// Clear the input field.
    Clear,
    /// Copy the selected cell.
    Copy,
    /// Move the selection up.
    Up,
    /// Move the selection down.
    Down,
    /// Select the time-in column.
    Left,
    /// Select the time-out column.
    Right,
}

impl KeyBindingsConfig {
    /// Generate the one-line help text shown at the bottom of the screen.
    pub fn help_text(&self) -> String {
        format!(
            "{}:move {}:column {}:calculate {}:copy {}:clear {}:quit",
            format_key_pair(&self.calculator.down, &self.calculator.up),
            format_key_pair(&self.calculator.left, &self.calculator.right),
            format_first_key(&self.calculator.calculate),
            format_first_key(&self.calculator.copy),
            format_first_key(&self.calculator.clear),
            format_first_key(&self.calculator.quit),
        )
    }

    /// Check if a key event matches a configured action.
    ///
    /// # Returns
    /// `true` if the key matches any configured binding for this action
    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        for key_str in self.get_keys(action) {
            if let Ok(expected) = parse_key(key_str)
                && key_event_matches(&expected, key)
            {
                return true;
            }
        }

        false
    }

    fn get_keys(&self, action: Action) -> &[String] {
        match action {
            Action::Quit => &self.calculator.quit,
            Action::Calculate => &self.calculator.calculate,
            Action::Clear => &self.calculator.clear,
            Action::Copy => &self.calculator.copy,
            Action::Up => &self.calculator.up,
            Action::Down => &self.calculator.down,
            Action::Left => &self.calculator.left,
            Action::Right => &self.calculator.right,
        }
    }
}

fn key_event_matches(expected: &KeyEvent, actual: &KeyEvent) -> bool {
    expected.code == actual.code && expected.modifiers == actual.modifiers
}

/// Format the first key of a key binding list for display.
fn format_first_key(keys: &[String]) -> String {
    keys.first()
        .map_or_else(|| "?".to_string(), |key| format_key_display(key))
}

/// Format two keys as a pair (e.g., "j/k" for down/up).
fn format_key_pair(first: &[String], second: &[String]) -> String {
    format!("{}/{}", format_first_key(first), format_first_key(second))
}

/// Format a key for display, converting special keys to readable symbols.
fn format_key_display(key: &str) -> String {
    match key {
        "Enter" => "\u{21b5}".to_string(),
        "Backspace" => "BS".to_string(),
        "Delete" => "Del".to_string(),
        "Up" => "\u{2191}".to_string(),
        "Down" => "\u{2193}".to_string(),
        "Left" => "\u{2190}".to_string(),
        "Right" => "\u{2192}".to_string(),
        "PageUp" => "PgUp".to_string(),
        "PageDown" => "PgDn".to_string(),
        other if other.starts_with("Ctrl+") => other.replace('+', "-"),
        other if other.starts_with("Alt+") => other.replace('+', "-"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn config_with(adjust: impl FnOnce(&mut CalculatorKeyBindings)) -> KeyBindingsConfig {
        let mut config = KeyBindingsConfig::default();
        adjust(&mut config.calculator);
        config
    }

    #[test]
    fn default_keybindings() {
        let config = KeyBindingsConfig::default();

        assert_eq!(config.calculator.quit, vec!["q", "Q", "Esc"]);
        assert_eq!(config.calculator.calculate, vec!["Enter"]);
        assert_eq!(config.calculator.clear, vec!["Ctrl+u"]);
        assert_eq!(config.calculator.copy, vec!["y", "Y"]);
        assert_eq!(config.calculator.up, vec!["k", "K", "Up"]);
        assert_eq!(config.calculator.down, vec!["j", "J", "Down"]);
        assert_eq!(config.calculator.left, vec!["h", "H", "Left"]);
        assert_eq!(config.calculator.right, vec!["l", "L", "Right"]);
    }

    #[test]
    fn default_config_passes_validation() {
        let config = Config::default();
        validate_config_struct(&config).unwrap();
    }

    #[test]
    fn deserialize_full_config_from_toml() {
        let toml_str = r#"
            [tui.keybindings.calculator]
            quit = ["q"]
            calculate = ["Enter"]
            clear = ["Ctrl+u"]
            copy = ["c"]
            up = ["Up"]
            down = ["Down"]
            left = ["Left"]
            right = ["Right"]
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tui.keybindings.calculator.quit, vec!["q"]);
        assert_eq!(config.tui.keybindings.calculator.copy, vec!["c"]);
        validate_config_struct(&config).unwrap();
    }

    #[test]
    fn deserialize_rejects_missing_actions() {
        // No serde defaults: a config file must spell out every action.
        let toml_str = r#"
            [tui.keybindings.calculator]
            quit = ["q"]
            calculate = ["Enter"]
        "#;

        let result = toml::from_str::<Config>(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn parse_single_char_key() {
        let event = parse_key("j").unwrap();
        assert_eq!(event.code, KeyCode::Char('j'));
        assert_eq!(event.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn parse_named_keys() {
        assert_eq!(parse_key("Enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key("Esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key("PageDown").unwrap().code, KeyCode::PageDown);
        assert_eq!(parse_key("Insert").unwrap().code, KeyCode::Insert);
    }

    #[test]
    fn parse_key_with_modifiers() {
        let event = parse_key("Ctrl+u").unwrap();
        assert_eq!(event.code, KeyCode::Char('u'));
        assert_eq!(event.modifiers, KeyModifiers::CONTROL);

        let event = parse_key("Ctrl+Alt+Delete").unwrap();
        assert_eq!(event.code, KeyCode::Delete);
        assert_eq!(event.modifiers, KeyModifiers::CONTROL | KeyModifiers::ALT);
    }

    #[test]
    fn parse_rejects_unknown_modifier() {
        let err = parse_key("Hyper+x").unwrap_err();
        assert!(err.to_string().contains("unknown modifier"));
    }

    #[test]
    fn parse_rejects_unknown_key() {
        let err = parse_key("Banana").unwrap_err();
        assert!(err.to_string().contains("unknown key"));
    }

    #[test]
    fn matches_requires_exact_modifiers() {
        let config = KeyBindingsConfig::default();

        let plain_y = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE);
        assert!(config.matches(Action::Copy, &plain_y));

        let ctrl_y = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert!(!config.matches(Action::Copy, &ctrl_y));

        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(config.matches(Action::Clear, &ctrl_u));
        let plain_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::NONE);
        assert!(!config.matches(Action::Clear, &plain_u));
    }

    #[test]
    fn conflicting_bindings_fail_validation() {
        let config = config_with(|calculator| {
            calculator.quit = vec_of_strings!["q"];
            calculator.copy = vec_of_strings!["q"];
        });

        let err = validate_keybindings_config(&config).unwrap_err();
        assert!(
            err.to_string().contains("bound to multiple actions"),
            "actual error: {err}"
        );
    }

    #[test]
    fn digit_bindings_fail_validation() {
        let config = config_with(|calculator| calculator.calculate = vec_of_strings!["1"]);

        let err = validate_keybindings_config(&config).unwrap_err();
        assert!(err.to_string().contains("reserved"), "actual error: {err}");
    }

    #[test]
    fn colon_binding_fails_validation() {
        let config = config_with(|calculator| calculator.copy = vec_of_strings![":"]);

        let err = validate_keybindings_config(&config).unwrap_err();
        assert!(err.to_string().contains("reserved"), "actual error: {err}");
    }

    #[test]
    fn backspace_binding_fails_validation() {
        let config = config_with(|calculator| calculator.clear = vec_of_strings!["Backspace"]);

        let err = validate_keybindings_config(&config).unwrap_err();
        assert!(err.to_string().contains("reserved"), "actual error: {err}");
    }

    #[test]
    fn modified_digit_binding_is_allowed() {
        let config = config_with(|calculator| calculator.clear = vec_of_strings!["Ctrl+1"]);

        validate_keybindings_config(&config).unwrap();
    }

    #[test]
    fn empty_binding_fails_validation() {
        let config = config_with(|calculator| calculator.up = Vec::new());

        let err = validate_keybindings_config(&config).unwrap_err();
        assert!(
            err.to_string().contains("at least one key binding"),
            "actual error: {err}"
        );
    }

    #[test]
    fn generated_toml_round_trips() {
        let toml_str = generate_default_config_toml().unwrap();
        assert!(toml_str.starts_with("# break-calc Configuration"));

        let config: Config = toml::from_str(&toml_str).unwrap();
        validate_config_struct(&config).unwrap();
        assert_eq!(
            config.tui.keybindings.calculator.quit,
            KeyBindingsConfig::default().calculator.quit
        );
    }

    #[test]
    fn load_config_returns_none_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let loaded = load_config(Some(&path)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_config_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, generate_default_config_toml().unwrap()).unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.tui.keybindings.calculator.calculate, vec!["Enter"]);
    }

    #[test]
    fn load_config_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not toml at all [").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(
            format!("{err:#}").contains("failed to parse config file"),
            "actual error: {err:#}"
        );
    }

    #[test]
    fn help_text_uses_display_symbols() {
        let help = KeyBindingsConfig::default().help_text();

        assert!(help.contains("j/k:move"), "actual help: {help}");
        assert!(help.contains("\u{21b5}:calculate"), "actual help: {help}");
        assert!(help.contains("Ctrl-u:clear"), "actual help: {help}");
        assert!(help.contains("q:quit"), "actual help: {help}");
    }

    #[test]
    fn format_key_display_symbols() {
        assert_eq!(format_key_display("Enter"), "\u{21b5}");
        assert_eq!(format_key_display("Up"), "\u{2191}");
        assert_eq!(format_key_display("PageUp"), "PgUp");
        assert_eq!(format_key_display("Backspace"), "BS");
        assert_eq!(format_key_display("Ctrl+x"), "Ctrl-x");
        assert_eq!(format_key_display("z"), "z");
    }

    #[test]
    fn reserved_key_detection() {
        let digit = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE);
        assert!(is_reserved_for_input(&digit));

        let colon = KeyEvent::new(KeyCode::Char(':'), KeyModifiers::NONE);
        assert!(is_reserved_for_input(&colon));

        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert!(is_reserved_for_input(&backspace));

        let ctrl_digit = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::CONTROL);
        assert!(!is_reserved_for_input(&ctrl_digit));

        let letter = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE);
        assert!(!is_reserved_for_input(&letter));
    }
}
