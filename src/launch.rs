//! Token launch form: fields, the price-mode table, validation, submission.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::chain::Chain;
use crate::defaults::Defaults;
use crate::notify::{Notification, Notifier};
use crate::ui::components::TextField;
use crate::wallet::WalletState;

/* ───────────────────────── Price mode table ───────────────────────── */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceMode {
    #[default]
    Constant,
    Linear,
    Quadratic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coefficient {
    A,
    B,
    C,
}

impl Coefficient {
    pub fn label(self) -> &'static str {
        match self {
            Coefficient::A => "Constant A",
            Coefficient::B => "Constant B",
            Coefficient::C => "Constant C",
        }
    }
}

impl PriceMode {
    pub const ALL: [PriceMode; 3] = [PriceMode::Constant, PriceMode::Linear, PriceMode::Quadratic];

    /// Visible coefficients, in display order. Visible means required.
    pub fn coefficients(self) -> &'static [Coefficient] {
        match self {
            PriceMode::Constant => &[Coefficient::C],
            PriceMode::Linear => &[Coefficient::B, Coefficient::C],
            PriceMode::Quadratic => &[Coefficient::A, Coefficient::B, Coefficient::C],
        }
    }

    pub fn requires(self, c: Coefficient) -> bool {
        self.coefficients().contains(&c)
    }

    pub fn formula(self) -> &'static str {
        match self {
            PriceMode::Constant => "f(x) = c",
            PriceMode::Linear => "f(x) = b * x + c",
            PriceMode::Quadratic => "f(x) = a * x² + b * x + c",
        }
    }

    pub fn next(self) -> Self {
        match self {
            PriceMode::Constant => PriceMode::Linear,
            PriceMode::Linear => PriceMode::Quadratic,
            PriceMode::Quadratic => PriceMode::Constant,
        }
    }

    pub fn prev(self) -> Self {
        self.next().next()
    }
}

impl fmt::Display for PriceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PriceMode::Constant => "Constant",
            PriceMode::Linear => "Linear",
            PriceMode::Quadratic => "Quadratic",
        })
    }
}

/* ───────────────────────── Max supply ───────────────────────── */

/// Clamp a digit string into the supply range. Anything too large for u128
/// clamps to the maximum; no wrapping.
pub fn clamp_max_supply(digits: &str) -> u64 {
    let digits = digits.trim();
    if digits.is_empty() {
        return Defaults::MAX_SUPPLY_MIN;
    }
    let v: u128 = if digits.chars().all(|c| c.is_ascii_digit()) {
        digits.parse().unwrap_or(u128::MAX)
    } else {
        0
    };
    v.clamp(Defaults::MAX_SUPPLY_MIN as u128, Defaults::MAX_SUPPLY_MAX as u128) as u64
}

/* ───────────────────────── Parameters + errors ───────────────────────── */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    pub c: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchParameters {
    pub name: String,
    pub symbol: String,
    pub max_supply: u64,
    pub price_mode: PriceMode,
    pub coefficients: Coefficients,
    pub chain: Chain,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LaunchError {
    #[error("Connect a wallet before launching.")]
    WalletNotConnected,
    #[error("Name is required.")]
    MissingName,
    #[error("Symbol is required.")]
    MissingSymbol,
    #[error("{} is required.", .0.label())]
    MissingCoefficient(Coefficient),
    #[error("{} must be a number.", .0.label())]
    InvalidCoefficient(Coefficient),
    #[error("Max Supply must be between {} and {}.", Defaults::MAX_SUPPLY_MIN, Defaults::MAX_SUPPLY_MAX)]
    InvalidMaxSupply,
    #[error("Launch failed: {0}")]
    Sink(String),
}

/* ───────────────────────── Sink ───────────────────────── */

/// Receives submitted parameters (a deployment service, in a full system).
pub trait LaunchSink {
    fn launch(&mut self, params: &LaunchParameters) -> Result<()>;
}

/// Records the payload in the log.
#[derive(Debug, Default)]
pub struct LogLaunchSink;

impl LaunchSink for LogLaunchSink {
    fn launch(&mut self, params: &LaunchParameters) -> Result<()> {
        let payload = serde_json::to_string(params)?;
        tracing::info!(chain = %params.chain, %payload, "launching with parameters");
        Ok(())
    }
}

/// Writes `launch_<symbol>.json` into a directory, then logs like [`LogLaunchSink`].
#[derive(Debug)]
pub struct FileLaunchSink {
    pub out_dir: PathBuf,
}

impl FileLaunchSink {
    pub fn path_for(&self, params: &LaunchParameters) -> PathBuf {
        self.out_dir.join(format!("launch_{}.json", sanitize_filename(&params.symbol)))
    }
}

impl LaunchSink for FileLaunchSink {
    fn launch(&mut self, params: &LaunchParameters) -> Result<()> {
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("creating directory {}", self.out_dir.display()))?;
        let path = self.path_for(params);
        fs::write(&path, serde_json::to_string_pretty(params)?)
            .with_context(|| format!("writing {}", path.display()))?;
        LogLaunchSink.launch(params)
    }
}

// Simple filesystem-safe name (keeps ASCII letters, numbers, '-', '_')
fn sanitize_filename(name: &str) -> String {
    let out: String = name
        .trim()
        .chars()
        .filter_map(|ch| match ch {
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => Some(c),
            c if c.is_whitespace() => Some('_'),
            _ => None,
        })
        .collect();
    if out.is_empty() { "token".to_string() } else { out }
}

/* ───────────────────────── Form ───────────────────────── */

#[derive(Debug, Clone)]
pub struct LaunchForm {
    pub name: TextField,
    pub symbol: TextField,
    pub max_supply: TextField,
    pub price_mode: PriceMode,
    pub a: TextField,
    pub b: TextField,
    pub c: TextField,
    pub chain: Chain,
}

impl Default for LaunchForm {
    fn default() -> Self {
        Self {
            name: TextField::default(),
            symbol: TextField::default(),
            max_supply: TextField::with(Defaults::MAX_SUPPLY),
            price_mode: PriceMode::default(),
            a: TextField::with(Defaults::COEFFICIENT_A),
            b: TextField::with(Defaults::COEFFICIENT_B),
            c: TextField::with(Defaults::COEFFICIENT_C),
            chain: Defaults::LAUNCH_CHAIN,
        }
    }
}

impl LaunchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coefficient(&self, c: Coefficient) -> &TextField {
        match c {
            Coefficient::A => &self.a,
            Coefficient::B => &self.b,
            Coefficient::C => &self.c,
        }
    }

    pub fn coefficient_mut(&mut self, c: Coefficient) -> &mut TextField {
        match c {
            Coefficient::A => &mut self.a,
            Coefficient::B => &mut self.b,
            Coefficient::C => &mut self.c,
        }
    }

    /// Mode switches never touch coefficient text.
    pub fn set_price_mode(&mut self, mode: PriceMode) {
        self.price_mode = mode;
    }

    pub fn visible_coefficients(&self) -> &'static [Coefficient] {
        self.price_mode.coefficients()
    }

    /// Max supply input refuses anything that is not a digit.
    pub fn max_supply_accepts(c: char) -> bool {
        c.is_ascii_digit()
    }

    /// Clamp the typed max supply into range (on leaving the field / on submit).
    pub fn commit_max_supply(&mut self) -> u64 {
        let v = clamp_max_supply(&self.max_supply.text);
        if self.max_supply.text != v.to_string() {
            tracing::debug!(typed = %self.max_supply.text, clamped = v, "max supply clamped");
            self.max_supply.set(&v.to_string());
        }
        v
    }

    fn parse_coefficient(&self, c: Coefficient) -> Result<f64, LaunchError> {
        let raw = self.coefficient(c).text.trim();
        if raw.is_empty() {
            return Err(LaunchError::MissingCoefficient(c));
        }
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(LaunchError::InvalidCoefficient(c))
    }

    /// Validate the fields the current price mode requires. Hidden
    /// coefficients are ignored entirely.
    pub fn validate(&self) -> Result<LaunchParameters, LaunchError> {
        let name = self.name.text.trim();
        if name.is_empty() {
            return Err(LaunchError::MissingName);
        }
        let symbol = self.symbol.text.trim();
        if symbol.is_empty() {
            return Err(LaunchError::MissingSymbol);
        }

        let max_supply: u64 = self
            .max_supply
            .text
            .trim()
            .parse()
            .ok()
            .filter(|v| (Defaults::MAX_SUPPLY_MIN..=Defaults::MAX_SUPPLY_MAX).contains(v))
            .ok_or(LaunchError::InvalidMaxSupply)?;

        let mode = self.price_mode;
        let pick = |c: Coefficient| -> Result<Option<f64>, LaunchError> {
            if mode.requires(c) { self.parse_coefficient(c).map(Some) } else { Ok(None) }
        };
        let a = pick(Coefficient::A)?;
        let b = pick(Coefficient::B)?;
        let c = self.parse_coefficient(Coefficient::C)?;

        Ok(LaunchParameters {
            name: name.to_string(),
            symbol: symbol.to_string(),
            max_supply,
            price_mode: mode,
            coefficients: Coefficients { a, b, c },
            chain: self.chain,
        })
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self, wallet: &WalletState) -> bool {
        wallet.connected && self.validate().is_ok()
    }

    /// Clamp supply, validate, hand the parameters to `sink`, and confirm.
    /// Errors are returned, not notified; the caller decides how to show them.
    pub fn submit(
        &mut self,
        wallet: &WalletState,
        sink: &mut dyn LaunchSink,
        notifier: &mut dyn Notifier,
    ) -> Result<LaunchParameters, LaunchError> {
        if !wallet.connected {
            return Err(LaunchError::WalletNotConnected);
        }
        self.commit_max_supply();
        let params = self.validate()?;

        sink.launch(&params).map_err(|e| {
            tracing::warn!(error = %format!("{e:#}"), "launch sink failed");
            LaunchError::Sink(format!("{e:#}"))
        })?;

        notifier.notify(Notification::success(
            "Launch Initiated",
            format!("Your food meme coin is being launched on {}!", params.chain),
        ));
        Ok(params)
    }
}
