//! Application state for the TUI
//!
//! The App struct owns the wizard plus the purely visual state around it:
//! which field has focus, the cell being edited and the pending notices.

use std::time::Instant;

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::export::ExportFormat;
use crate::models::{
    AmountField, BudgetCategory, Currency, HouseholdMode, IntervalKind, PlanningConfig, Region,
};
use crate::setup::steps::IdentityField;
use crate::setup::Wizard;
use crate::storage::Storage;

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Focusable items of the identity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityFocus {
    Field(IdentityField),
    ShowPassword,
    Terms,
    Submit,
    SwitchMode,
    ForgotPassword,
}

/// Rows of the configuration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigField {
    #[default]
    Interval,
    Start,
    End,
    Region,
    Currency,
    Household,
    Continue,
}

impl ConfigField {
    pub const ALL: [ConfigField; 7] = [
        Self::Interval,
        Self::Start,
        Self::End,
        Self::Region,
        Self::Currency,
        Self::Household,
        Self::Continue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Interval => "Interval",
            Self::Start => "Start date",
            Self::End => "End date",
            Self::Region => "Region",
            Self::Currency => "Currency",
            Self::Household => "Household",
            Self::Continue => "Continue",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Columns of the allocation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocationColumn {
    #[default]
    Description,
    Amount(AmountField),
}

impl AllocationColumn {
    pub fn next(&self) -> Self {
        match self {
            Self::Description => Self::Amount(AmountField::Planned),
            Self::Amount(AmountField::Planned) => Self::Amount(AmountField::Actual),
            Self::Amount(AmountField::Actual) => Self::Amount(AmountField::Actual),
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Description => Self::Description,
            Self::Amount(AmountField::Planned) => Self::Description,
            Self::Amount(AmountField::Actual) => Self::Amount(AmountField::Planned),
        }
    }
}

/// Position in the allocation table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationCursor {
    pub category: BudgetCategory,
    pub row: usize,
    pub column: AllocationColumn,
}

impl Default for AllocationCursor {
    fn default() -> Self {
        Self {
            category: BudgetCategory::Income,
            row: 0,
            column: AllocationColumn::Description,
        }
    }
}

/// What the edit buffer will be written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    StartDate,
    EndDate,
    Cell(AllocationCursor),
}

impl EditTarget {
    pub fn accepts_amount_only(&self) -> bool {
        matches!(
            self,
            Self::Cell(AllocationCursor {
                column: AllocationColumn::Amount(_),
                ..
            })
        )
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Self::StartDate | Self::EndDate)
    }
}

/// Step a value through `None` and each of `all`, wrapping at both ends
pub fn cycle_option<T: Copy + PartialEq>(current: Option<T>, all: &[T], forward: bool) -> Option<T> {
    let position = current.and_then(|c| all.iter().position(|v| *v == c));
    match (position, forward) {
        (None, true) => all.first().copied(),
        (None, false) => all.last().copied(),
        (Some(i), true) => all.get(i + 1).copied(),
        (Some(0), false) => None,
        (Some(i), false) => all.get(i - 1).copied(),
    }
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    pub wizard: Wizard,

    /// Current input mode
    pub input_mode: InputMode,

    /// Buffer for the value being edited
    pub editor: TextInput,

    /// Where the edit buffer goes on commit
    pub edit_target: Option<EditTarget>,

    /// Index into [`App::identity_items`]
    pub identity_focus: usize,

    pub config_field: ConfigField,

    pub cursor: AllocationCursor,

    /// Format used by the dashboard's export action
    pub export_format: ExportFormat,

    pub notifications: NotificationQueue,

    pub show_help: bool,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        let initial = PlanningConfig::with_household(settings.default_household);
        Self {
            storage,
            settings,
            should_quit: false,
            wizard: Wizard::new(initial, settings.alert_dismiss_after()),
            input_mode: InputMode::default(),
            editor: TextInput::new(),
            edit_target: None,
            identity_focus: 0,
            config_field: ConfigField::default(),
            cursor: AllocationCursor::default(),
            export_format: settings.default_export_format,
            notifications: NotificationQueue::new(),
            show_help: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Periodic housekeeping: banner dismissal and toast expiry
    pub fn on_tick(&mut self, now: Instant) {
        self.wizard.configuration_mut().tick(now);
        self.notifications.remove_expired(now);
    }

    /// Focus order of the identity step in its current mode
    pub fn identity_items(&self) -> Vec<IdentityFocus> {
        let mut items: Vec<IdentityFocus> = self
            .wizard
            .identity()
            .fields()
            .iter()
            .map(|f| IdentityFocus::Field(*f))
            .collect();
        items.extend([
            IdentityFocus::ShowPassword,
            IdentityFocus::Terms,
            IdentityFocus::Submit,
            IdentityFocus::SwitchMode,
            IdentityFocus::ForgotPassword,
        ]);
        items
    }

    pub fn focused_identity_item(&self) -> IdentityFocus {
        let items = self.identity_items();
        let index = self.identity_focus.min(items.len() - 1);
        items[index]
    }

    pub fn focus_next_identity(&mut self) {
        self.identity_focus = (self.identity_focus + 1) % self.identity_items().len();
    }

    pub fn focus_prev_identity(&mut self) {
        let len = self.identity_items().len();
        self.identity_focus = (self.identity_focus + len - 1) % len;
    }

    /// Cycle the value of the focused configuration row
    pub fn cycle_config_value(&mut self, forward: bool) {
        let now = Instant::now();
        let config = *self.wizard.configuration().config();
        let form = self.wizard.configuration_mut();
        match self.config_field {
            ConfigField::Interval => {
                form.set_interval(cycle_option(config.interval, &IntervalKind::ALL, forward), now)
            }
            ConfigField::Region => {
                let regions: Vec<Region> = Region::all().collect();
                form.select_region(cycle_option(config.geo.region(), &regions, forward));
            }
            ConfigField::Currency => {
                let currencies: Vec<Currency> = Currency::all().collect();
                form.select_currency(cycle_option(config.geo.currency(), &currencies, forward));
            }
            ConfigField::Household => {
                let next = if forward {
                    config.household.next()
                } else {
                    config.household.prev()
                };
                form.set_household(next);
            }
            ConfigField::Start | ConfigField::End | ConfigField::Continue => {}
        }
    }

    /// Start editing `target`, seeding the buffer with its current value
    pub fn begin_edit(&mut self, target: EditTarget) {
        let config = self.wizard.configuration().config();
        let current = match target {
            EditTarget::StartDate => format_date_input(config.dates.start()),
            EditTarget::EndDate => format_date_input(config.dates.end()),
            EditTarget::Cell(cursor) => {
                match self.wizard.sheet().rows(cursor.category).get(cursor.row) {
                    Some(item) => match cursor.column {
                        AllocationColumn::Description => item.description.clone(),
                        AllocationColumn::Amount(field) => item.amount(field).to_input_string(),
                    },
                    None => String::new(),
                }
            }
        };
        self.editor = TextInput::new().content(current).focused(true);
        self.edit_target = Some(target);
        self.input_mode = InputMode::Editing;
    }

    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
        self.editor.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Offer a typed character to the edit buffer
    ///
    /// Amount cells only take unsigned decimals and date fields only digits
    /// and dashes; anything else is dropped without a message.
    pub fn edit_insert(&mut self, c: char) {
        let Some(target) = self.edit_target else {
            return;
        };
        if target.accepts_amount_only() {
            if !crate::models::Money::is_amount_input(&self.editor.with_inserted(c)) {
                return;
            }
        } else if target.is_date() && (!(c.is_ascii_digit() || c == '-') || self.editor.value().len() >= 10) {
            return;
        }
        self.editor.insert(c);
    }

    /// Keep the allocation cursor on an existing row
    pub fn clamp_cursor(&mut self) {
        let rows = self.wizard.sheet().rows(self.cursor.category).len();
        self.cursor.row = self.cursor.row.min(rows.saturating_sub(1));
    }
}

fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parse a typed date; empty text clears the date
pub fn parse_date_input(text: &str) -> Result<Option<NaiveDate>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("'{}' is not a date. Use YYYY-MM-DD.", text))
}

/// Household label used by the configuration view
pub fn household_choice(mode: HouseholdMode) -> String {
    format!("◀ {} ▶", mode.label())
}
