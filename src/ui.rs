use crate::app::{AppState, MAIN_ITEMS, MainItem, Screen};
use crate::config::{self, IconSet};
use crate::locale::Message;
use crate::preference::ToggleWidget;
use crate::radio::RadioStatus;
use crate::theme;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Padding, Paragraph},
};

pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Set background color for the entire screen
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND).fg(theme::FOREGROUND)),
        area,
    );

    // Match the parity of the terminal size so the window centers exactly
    let height = matching_parity(config::MAIN_WINDOW_HEIGHT, area.height);
    let width = matching_parity(config::MAIN_WINDOW_WIDTH, area.width);

    let vertical_layout = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let horizontal_layout = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .split(vertical_layout[1]);

    let main_area = horizontal_layout[1];

    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::DIMMED))
        .title(format!(" WIMAXUI v{} ", env!("CARGO_PKG_VERSION")))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(theme::CYAN)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(main_block, main_area);

    let inner_area = main_area.inner(Margin {
        vertical: 1,
        horizontal: 2,
    });

    let content_layout = Layout::vertical([
        Constraint::Min(6),    // Screen content
        Constraint::Length(2), // Bottom bar
    ])
    .split(inner_area);

    match state.screen {
        Screen::Main => render_main(frame, state, content_layout[0]),
        Screen::Advanced => render_advanced(frame, state, content_layout[0]),
    }

    render_help(frame, state, content_layout[1]);
}

fn matching_parity(target: u16, available: u16) -> u16 {
    if target % 2 == available % 2 {
        target
    } else {
        target + 1
    }
}

fn render_main(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let layout = Layout::vertical([Constraint::Min(4), Constraint::Length(1)]).split(area);

    let icons = state.icons;
    let items: Vec<ListItem> = MAIN_ITEMS
        .iter()
        .map(|item| match item {
            MainItem::AirplaneMode => state
                .airplane_mode()
                .map(|airplane| toggle_item(&airplane.widget, icons))
                .unwrap_or_else(|| ListItem::new("")),
            MainItem::Radio => toggle_item(state.enabler.widget(), icons),
            MainItem::Advanced => ListItem::new(vec![
                Line::from(vec![
                    Span::styled(icons.subscreen(), Style::default().fg(theme::PURPLE)),
                    Span::raw(" "),
                    Span::raw(state.localizer.text(Message::AdvancedTitle)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", state.localizer.text(Message::AdvancedSummary)),
                    Style::default().fg(theme::DIMMED),
                )),
            ]),
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Wireless & networks ")
                .title_style(
                    Style::default()
                        .fg(theme::BLUE)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::BLUE)),
        )
        .highlight_symbol(icons.highlight())
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(theme::SELECTION_BG),
        );

    frame.render_stateful_widget(list, layout[0], &mut state.l_state);

    let status = state.radio.status();
    let status_style = match status {
        RadioStatus::Enabled => Style::default().fg(theme::GREEN),
        RadioStatus::Enabling | RadioStatus::Disabling => Style::default().fg(theme::YELLOW),
        RadioStatus::Unknown => Style::default().fg(theme::RED),
        RadioStatus::Disabled => Style::default().fg(theme::DIMMED),
    };
    let status_line = Line::from(vec![
        Span::styled(" Radio: ", Style::default().fg(theme::CYAN)),
        Span::styled(status.to_string(), status_style),
    ]);
    frame.render_widget(Paragraph::new(status_line), layout[1]);
}

fn toggle_item(widget: &ToggleWidget, icons: IconSet) -> ListItem<'static> {
    let (title_style, box_style, summary_style) = if widget.enabled {
        (
            Style::default(),
            Style::default().fg(if widget.checked {
                theme::GREEN
            } else {
                theme::FOREGROUND
            }),
            Style::default().fg(theme::DIMMED),
        )
    } else {
        let dimmed = Style::default().fg(theme::DIMMED);
        (dimmed, dimmed, dimmed.add_modifier(Modifier::ITALIC))
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(icons.checkbox(widget.checked), box_style),
        Span::raw(" "),
        Span::styled(widget.title.clone(), title_style),
    ])];
    if let Some(summary) = &widget.summary {
        lines.push(Line::from(Span::styled(
            format!("  {summary}"),
            summary_style,
        )));
    }
    ListItem::new(lines)
}

fn render_advanced(frame: &mut Frame, state: &AppState, area: Rect) {
    let label_width = state
        .panel
        .fields()
        .iter()
        .map(|f| f.title.chars().count())
        .max()
        .unwrap_or(0);

    let info: Vec<Line> = state
        .panel
        .fields()
        .iter()
        .map(|field| {
            Line::from(vec![
                Span::styled(
                    format!("{:<label_width$}  ", field.title),
                    Style::default().fg(theme::CYAN),
                ),
                Span::raw(field.value.clone()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(info).block(
        Block::default()
            .title(format!(
                " {} ",
                state.localizer.text(Message::AdvancedTitle)
            ))
            .title_style(
                Style::default()
                    .fg(theme::PURPLE)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::PURPLE))
            .padding(Padding::new(1, 1, 1, 0)),
    );
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame, state: &AppState, area: Rect) {
    let key = Style::default().fg(theme::FOREGROUND);
    let text = Style::default().fg(theme::DIMMED);
    let icons = state.icons;

    let spans = match state.screen {
        Screen::Main => vec![
            Span::styled(icons.up_down(), key),
            Span::styled(" move • ", text),
            Span::styled(icons.space(), key),
            Span::styled(" toggle • ", text),
            Span::styled("a", key),
            Span::styled(" advanced • ", text),
            Span::styled("q", key),
            Span::styled(" quit", text),
        ],
        Screen::Advanced => vec![
            Span::styled("Esc", key),
            Span::styled(" back • ", text),
            Span::styled("r", key),
            Span::styled(" refresh • ", text),
            Span::styled("q", key),
            Span::styled(" quit", text),
        ],
    };

    let help = Paragraph::new(vec![Line::default(), Line::from(spans)])
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}
