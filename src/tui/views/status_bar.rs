//! Status bar view
//!
//! Shows who is planning, the committed interval and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::setup::Step;
use crate::tui::app::{App, InputMode};

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    let who = app
        .wizard
        .user()
        .map(|u| u.display_name())
        .unwrap_or_else(|| "Not signed in".to_string());
    spans.push(Span::styled(
        format!(" {} ", who),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));

    if app.wizard.step() >= Step::Allocation {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            app.wizard.committed().interval_label(),
            Style::default().fg(Color::Cyan),
        ));
    }

    let hints = match (app.input_mode, app.wizard.step()) {
        (InputMode::Editing, _) => " Enter:Save  Esc:Cancel ",
        (_, Step::Landing) => " Enter:Start  r:Resume  q:Quit ",
        (_, Step::Identity) => " Tab:Next  Enter:Select  Esc:Back  Ctrl+C:Quit ",
        (_, Step::Configuration) => " ←→:Change  Enter:Edit  Esc:Back  ?:Help ",
        (_, Step::Allocation) => " Enter:Edit  a:Add  d:Remove  s:Save  n:Next  ?:Help ",
        (_, Step::Summary) => " e:Export  f:Format  s:Save  Esc:Back  q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
