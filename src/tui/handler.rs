//! Event handler for the TUI
//!
//! Routes keyboard events to the handler of the current wizard step and
//! turns step results into notices.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::BudgetError;
use crate::setup::{CommitOutcome, Step};

use super::app::{
    parse_date_input, AllocationColumn, App, ConfigField, EditTarget, IdentityFocus, InputMode,
};
use super::event::Event;
use super::widgets::Notification;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) => Ok(()),
        Event::Tick => {
            app.on_tick(Instant::now());
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // A blocking notice swallows the key that acknowledges it
    if app.notifications.is_blocked() {
        app.notifications.acknowledge();
        return Ok(());
    }

    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    if app.input_mode == InputMode::Editing {
        handle_editing_key(app, key);
        return Ok(());
    }

    match app.wizard.step() {
        Step::Landing => handle_landing_key(app, key),
        Step::Identity => handle_identity_key(app, key),
        Step::Configuration => handle_configuration_key(app, key),
        Step::Allocation => handle_allocation_key(app, key),
        Step::Summary => handle_summary_key(app, key),
    }
    Ok(())
}

/// Keys shared by the steps without free text entry
fn handle_common_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => {
            app.wizard.back();
        }
        _ => return false,
    }
    true
}

fn handle_landing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.wizard.begin(),
        KeyCode::Char('r') => resume_draft(app),
        _ => {
            handle_common_key(app, key);
        }
    }
}

fn resume_draft(app: &mut App) {
    match app.storage.drafts.load() {
        Ok(draft) => {
            app.wizard.restore(draft);
            app.cursor = Default::default();
            app.notify(Notification::success("Resumed your saved plan"));
        }
        Err(e) if e.is_not_found() => app.notify(Notification::info("No saved plan to resume")),
        Err(e) => app.notify(Notification::error(e.to_string())),
    }
}

fn handle_identity_key(app: &mut App, key: KeyEvent) {
    let focus = app.focused_identity_item();
    match key.code {
        KeyCode::Esc => {
            app.wizard.back();
        }
        KeyCode::Tab | KeyCode::Down => app.focus_next_identity(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev_identity(),
        KeyCode::Backspace => {
            if let IdentityFocus::Field(field) = focus {
                app.wizard.identity_mut().value_mut(field).pop();
            }
        }
        KeyCode::Enter => activate_identity_item(app, focus),
        KeyCode::Char(c) => match focus {
            IdentityFocus::Field(field) => app.wizard.identity_mut().value_mut(field).push(c),
            _ if c == ' ' => activate_identity_item(app, focus),
            _ => {}
        },
        _ => {}
    }
}

fn activate_identity_item(app: &mut App, focus: IdentityFocus) {
    match focus {
        IdentityFocus::Field(_) => app.focus_next_identity(),
        IdentityFocus::ShowPassword => {
            let form = app.wizard.identity_mut();
            form.show_password = !form.show_password;
        }
        IdentityFocus::Terms => {
            let form = app.wizard.identity_mut();
            form.accepted_terms = !form.accepted_terms;
        }
        IdentityFocus::SwitchMode => {
            app.wizard.identity_mut().switch_mode();
            app.identity_focus = 0;
        }
        IdentityFocus::ForgotPassword => {
            let notice = app.wizard.identity().reset_link_notice();
            app.notify(Notification::info(notice));
        }
        IdentityFocus::Submit => submit_identity(app),
    }
}

fn submit_identity(app: &mut App) {
    let storage = app.storage;
    match app.wizard.submit_identity(storage) {
        Ok(user) => {
            let greeting = if user.returning {
                format!("Welcome back, {}!", user.display_name())
            } else {
                format!("Profile created for {}", user.display_name())
            };
            app.notify(Notification::success(greeting));
            app.config_field = ConfigField::default();
        }
        Err(e @ BudgetError::LookupFailed { .. }) => {
            app.notify(Notification::error(e.to_string()).blocking());
        }
        Err(BudgetError::Validation(reason)) => app.notify(Notification::warning(reason)),
        Err(e) => app.notify(Notification::error(e.to_string())),
    }
}

fn handle_configuration_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
            app.config_field = app.config_field.next()
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
            app.config_field = app.config_field.prev()
        }
        KeyCode::Right | KeyCode::Char('l') => app.cycle_config_value(true),
        KeyCode::Left | KeyCode::Char('h') => app.cycle_config_value(false),
        KeyCode::Backspace | KeyCode::Delete => {
            let now = Instant::now();
            match app.config_field {
                ConfigField::Start => app.wizard.configuration_mut().set_start(None, now),
                ConfigField::End => {
                    // Clearing never precedes the start date
                    let _ = app.wizard.configuration_mut().set_end(None, now);
                }
                _ => {}
            }
        }
        KeyCode::Enter => match app.config_field {
            ConfigField::Start => app.begin_edit(EditTarget::StartDate),
            ConfigField::End => app.begin_edit(EditTarget::EndDate),
            ConfigField::Continue => commit_configuration(app),
            _ => app.config_field = app.config_field.next(),
        },
        _ => {
            handle_common_key(app, key);
        }
    }
}

fn commit_configuration(app: &mut App) {
    let storage = app.storage;
    match app.wizard.commit_configuration(storage) {
        Ok(CommitOutcome::SheetReset) => {
            app.cursor = Default::default();
        }
        Ok(CommitOutcome::SheetKept) => app.clamp_cursor(),
        // The banner already carries the range message
        Err(BudgetError::RangeInvalid(_)) => {}
        Err(BudgetError::Validation(reason)) => app.notify(Notification::warning(reason)),
        Err(e) => app.notify(Notification::error(e.to_string())),
    }
}

fn handle_allocation_key(app: &mut App, key: KeyEvent) {
    let rows = app.wizard.sheet().rows(app.cursor.category).len();
    match key.code {
        KeyCode::Tab => {
            app.cursor.category = app.cursor.category.next();
            app.cursor.row = 0;
        }
        KeyCode::BackTab => {
            app.cursor.category = app.cursor.category.prev();
            app.cursor.row = 0;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.cursor.row + 1 < rows {
                app.cursor.row += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.cursor.row = app.cursor.row.saturating_sub(1),
        KeyCode::Right | KeyCode::Char('l') => app.cursor.column = app.cursor.column.next(),
        KeyCode::Left | KeyCode::Char('h') => app.cursor.column = app.cursor.column.prev(),
        KeyCode::Enter => app.begin_edit(EditTarget::Cell(app.cursor)),
        KeyCode::Char('a') => {
            app.cursor.row = app.wizard.sheet_mut().add_row(app.cursor.category);
            app.cursor.column = AllocationColumn::Description;
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            let cursor = app.cursor;
            if app
                .wizard
                .sheet_mut()
                .remove_row(cursor.category, cursor.row)
                .is_ok()
            {
                app.clamp_cursor();
            }
        }
        KeyCode::Char('s') => save_progress(app),
        KeyCode::Char('n') => {
            if let Err(e) = app.wizard.show_summary() {
                app.notify(Notification::warning(validation_reason(e)));
            }
        }
        _ => {
            handle_common_key(app, key);
        }
    }
}

fn handle_summary_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('f') => app.export_format = app.export_format.next(),
        KeyCode::Char('e') | KeyCode::Enter => export(app),
        KeyCode::Char('s') => save_progress(app),
        _ => {
            handle_common_key(app, key);
        }
    }
}

fn save_progress(app: &mut App) {
    match app.wizard.save_progress(app.storage) {
        Ok(path) => app.notify(Notification::success(format!(
            "Progress saved to {}",
            path.display()
        ))),
        Err(e) => app.notify(Notification::warning(validation_reason(e))),
    }
}

fn export(app: &mut App) {
    let dir = app.settings.export_dir(app.storage.paths());
    match app.wizard.export(app.storage, app.export_format, &dir) {
        Ok(path) => app.notify(Notification::success(format!(
            "Report saved to {}",
            path.display()
        ))),
        Err(e) => app.notify(Notification::error(e.to_string()).blocking()),
    }
}

fn validation_reason(error: BudgetError) -> String {
    match error {
        BudgetError::Validation(reason) => reason,
        other => other.to_string(),
    }
}

fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => commit_edit(app),
        KeyCode::Backspace => app.editor.backspace(),
        KeyCode::Delete => app.editor.delete(),
        KeyCode::Left => app.editor.move_left(),
        KeyCode::Right => app.editor.move_right(),
        KeyCode::Home => app.editor.move_start(),
        KeyCode::End => app.editor.move_end(),
        KeyCode::Char(c) => app.edit_insert(c),
        _ => {}
    }
}

fn commit_edit(app: &mut App) {
    let Some(target) = app.edit_target else {
        app.cancel_edit();
        return;
    };
    let text = app.editor.value().to_string();
    let now = Instant::now();

    match target {
        EditTarget::StartDate | EditTarget::EndDate => {
            let date = match parse_date_input(&text) {
                Ok(date) => date,
                Err(reason) => {
                    app.notify(Notification::warning(reason));
                    return;
                }
            };
            let form = app.wizard.configuration_mut();
            if target == EditTarget::StartDate {
                form.set_start(date, now);
            } else {
                // A rejected end date is reported by the banner
                let _ = form.set_end(date, now);
            }
        }
        EditTarget::Cell(cursor) => {
            let sheet = app.wizard.sheet_mut();
            let result = match cursor.column {
                AllocationColumn::Description => {
                    sheet.set_description(cursor.category, cursor.row, text)
                }
                AllocationColumn::Amount(field) => {
                    sheet.set_amount(cursor.category, cursor.row, field, &text)
                }
            };
            // Rejected amounts leave the row as it was
            if let Err(e) = result {
                if !e.is_input_rejected() {
                    app.notify(Notification::error(e.to_string()));
                }
            }
        }
    }
    app.cancel_edit();
}
