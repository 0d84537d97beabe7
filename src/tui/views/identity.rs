//! Identity view
//!
//! Create-profile or sign-in form with the password strength hint.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::setup::steps::{IdentityField, IdentityMode, PasswordStrength};
use crate::tui::app::{App, IdentityFocus};
use crate::tui::widgets::TextInput;

use super::titled_block;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let form = app.wizard.identity();
    let focus = app.focused_identity_item();

    let block = titled_block(form.mode().title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items = app.identity_items();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            items
                .iter()
                .map(|_| Constraint::Length(2))
                .chain([Constraint::Min(1)])
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (item, row) in items.iter().zip(rows.iter()) {
        let focused = *item == focus;
        match item {
            IdentityFocus::Field(field) => {
                let input = TextInput::new()
                    .label(format!("{:<10}", field.label()))
                    .content(form.value(*field))
                    .masked(*field == IdentityField::Password && !form.show_password)
                    .placeholder(placeholder(*field))
                    .focused(focused);
                frame.render_widget(input, *row);
            }
            IdentityFocus::ShowPassword => {
                frame.render_widget(checkbox("Show password", form.show_password, focused), *row)
            }
            IdentityFocus::Terms => frame.render_widget(
                checkbox(
                    "I agree to the Terms and Privacy Policy",
                    form.accepted_terms,
                    focused,
                ),
                *row,
            ),
            IdentityFocus::Submit => {
                let label = match form.mode() {
                    IdentityMode::CreateProfile => "Create profile",
                    IdentityMode::SignIn => "Sign in",
                };
                let enabled = form.can_submit();
                frame.render_widget(button(label, focused, enabled), *row);
            }
            IdentityFocus::SwitchMode => {
                let label = match form.mode() {
                    IdentityMode::CreateProfile => "Already have a profile? Sign in",
                    IdentityMode::SignIn => "New here? Create a profile",
                };
                frame.render_widget(link(label, focused), *row);
            }
            IdentityFocus::ForgotPassword => {
                frame.render_widget(link("Forgot password?", focused), *row)
            }
        }
    }

    let mut footer = Vec::new();
    if let Some(strength) = form.strength() {
        footer.push(Span::raw("Password strength: "));
        footer.push(Span::styled(
            strength.label(),
            Style::default()
                .fg(strength_color(strength))
                .add_modifier(Modifier::BOLD),
        ));
        footer.push(Span::raw("   "));
    }
    if let Some(reason) = form.blocker() {
        footer.push(Span::styled(reason, Style::default().fg(Color::DarkGray)));
    }
    if let Some(area) = rows.last() {
        frame.render_widget(Paragraph::new(Line::from(footer)), *area);
    }
}

fn placeholder(field: IdentityField) -> &'static str {
    match field {
        IdentityField::FirstName => "Jane",
        IdentityField::LastName => "Doe",
        IdentityField::Email => "name@example.com",
        IdentityField::Password => "never stored",
    }
}

fn strength_color(strength: PasswordStrength) -> Color {
    match strength {
        PasswordStrength::Weak => Color::Red,
        PasswordStrength::Medium => Color::Yellow,
        PasswordStrength::Strong => Color::Green,
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    }
}

fn checkbox(label: &str, checked: bool, focused: bool) -> Paragraph<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    Paragraph::new(Line::from(Span::styled(
        format!("{} {}", mark, label),
        focus_style(focused),
    )))
}

fn button(label: &str, focused: bool, enabled: bool) -> Paragraph<'static> {
    let style = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default()
            .fg(Color::White)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    };
    Paragraph::new(Line::from(Span::styled(format!(" {} ", label), style)))
}

fn link(label: &str, focused: bool) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        label.to_string(),
        focus_style(focused).add_modifier(Modifier::UNDERLINED),
    )))
}
