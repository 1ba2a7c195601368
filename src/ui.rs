use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, Wrap,
    },
};

use crate::app::{App, InputMode};
use crate::conversation::Sender;
use crate::i18n;
use crate::intent::ResponseData;
use crate::language::Language;

// Canned observation data, in decimetres so the bars keep one decimal
// of precision. Rendered as metres.
const LEVEL_VALUES: [u64; 6] = [118, 121, 126, 129, 122, 119];
const PREDICTION_SERIES: [(&str, u64); 5] = [
    ("2026", 124),
    ("2027", 127),
    ("2028", 131),
    ("2029", 134),
    ("2030", 138),
];
const COMPARISON_FIGURES: [(&str, &str); 2] = [("8.2", "+0.6"), ("6.5", "+0.3")];

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let [chat_area, data_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(body_area);

    let [transcript_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(chat_area);

    render_header(app, frame, header_area);
    render_transcript(app, frame, transcript_area);
    render_input(app, frame, input_area);
    render_data_pane(app, frame, data_area);
    render_footer(app, frame, footer_area);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let s = i18n::strings(app.language);

    let place = match &app.location {
        Some(fix) => match &fix.city {
            Some(city) => format!(" {} ", city),
            None => format!(" {:.2}, {:.2} ", fix.latitude, fix.longitude),
        },
        None => String::new(),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", s.app_title),
            Style::default().fg(Color::Cyan).bold(),
        ),
        Span::styled(place, Style::default().fg(Color::White)),
        Span::styled(
            format!(" {} ", app.language.display_name()),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(header, area);
}

fn render_transcript(app: &mut App, frame: &mut Frame, area: Rect) {
    let s = i18n::strings(app.language);

    // Remember geometry for scrolling and mouse hit-testing
    app.transcript_area = Some(area);
    app.transcript_height = area.height.saturating_sub(2);
    app.transcript_width = area.width.saturating_sub(2);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", s.transcript_title));

    let messages = app.conversation.messages();
    let live_chips = messages.iter().rposition(|m| m.sender == Sender::Assistant);

    let mut lines: Vec<Line> = Vec::new();
    for (i, msg) in messages.iter().enumerate() {
        let (label, label_color) = match msg.sender {
            Sender::User => (s.you_label, Color::Cyan),
            Sender::Assistant => (s.assistant_label, Color::Yellow),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}:", label),
                Style::default()
                    .fg(label_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", msg.timestamp.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        for text_line in msg.text.lines() {
            lines.push(Line::from(text_line.to_string()));
        }
        if !msg.suggestions.is_empty() {
            // Only the newest assistant message's suggestions respond to 1-3
            let chip_style = if live_chips == Some(i) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            for (n, chip) in msg.suggestions.iter().enumerate() {
                lines.push(Line::from(Span::styled(
                    format!("[{}] {}", n + 1, chip),
                    chip_style,
                )));
            }
        }
        lines.push(Line::default());
    }

    if app.conversation.is_pending() {
        lines.push(Line::from(Span::styled(
            format!("{}:", s.assistant_label),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        let dots = ".".repeat((app.animation_frame as usize) + 1);
        lines.push(Line::from(Span::styled(
            format!("{}{}", s.thinking, dots),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let total_lines = lines.len() as u16;

    let transcript = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((app.transcript_scroll, 0));

    frame.render_widget(transcript, area);

    if total_lines > app.transcript_height {
        let mut scrollbar_state =
            ScrollbarState::new(total_lines.saturating_sub(app.transcript_height) as usize)
                .position(app.transcript_scroll as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("^"))
                .end_symbol(Some("v")),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let s = i18n::strings(app.language);

    let (title, border_color) = if app.listening {
        let dots = ".".repeat((app.animation_frame as usize) + 1);
        (format!(" {}{} ", s.listening, dots), Color::Red)
    } else if app.input_mode == InputMode::Editing {
        (format!(" {} ", s.input_title), Color::Yellow)
    } else {
        (format!(" {} ", s.input_title), Color::DarkGray)
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);

    // Horizontal scroll keeps the cursor visible in a single-line field
    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll_offset = if inner_width == 0 {
        0
    } else if app.cursor >= inner_width {
        app.cursor - inner_width + 1
    } else {
        0
    };

    let visible_text: String = app
        .input
        .chars()
        .skip(scroll_offset)
        .take(inner_width)
        .collect();

    let input = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::Cyan))
        .block(input_block);

    frame.render_widget(input, area);

    if app.input_mode == InputMode::Editing && !app.listening {
        let cursor_x = (app.cursor - scroll_offset) as u16;
        frame.set_cursor_position((area.x + cursor_x + 1, area.y + 1));
    }
}

fn render_data_pane(app: &App, frame: &mut Frame, area: Rect) {
    match app.conversation.latest_assistant() {
        Some(msg) if msg.show_comparison => render_comparison(app.language, frame, area),
        Some(msg) if msg.show_chart => {
            let prediction = msg.data == Some(ResponseData::Prediction);
            render_chart(prediction, app.language, frame, area);
        }
        _ => render_samples(app.language, frame, area),
    }
}

fn render_chart(prediction: bool, language: Language, frame: &mut Frame, area: Rect) {
    let s = i18n::strings(language);

    let series: Vec<(&str, u64)> = if prediction {
        PREDICTION_SERIES.to_vec()
    } else {
        s.chart_months.iter().copied().zip(LEVEL_VALUES).collect()
    };
    let title = if prediction {
        s.chart_prediction_title
    } else {
        s.chart_level_title
    };

    let bars: Vec<Bar> = series
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .value(*value)
                .label(Line::from(*label))
                .text_value(format!("{:.1}", *value as f64 / 10.0))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", title)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1)
        .bar_style(Style::default().fg(if prediction {
            Color::Magenta
        } else {
            Color::Blue
        }))
        .value_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(chart, area);
}

fn render_comparison(language: Language, frame: &mut Frame, area: Rect) {
    let s = i18n::strings(language);

    let header = Row::new(vec![s.col_city, s.col_depth, s.col_change])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = s
        .comparison_cities
        .iter()
        .zip(COMPARISON_FIGURES)
        .map(|(city, (depth, change))| Row::new(vec![*city, depth, change]))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", s.comparison_title)),
    );

    frame.render_widget(table, area);
}

fn render_samples(language: Language, frame: &mut Frame, area: Rect) {
    let s = i18n::strings(language);

    let mut lines = vec![
        Line::from(Span::styled(
            s.sample_title,
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::default(),
    ];
    for query in s.sample_queries.iter() {
        lines.push(Line::from(Span::styled(
            format!("• {}", query),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::default());
    }

    let samples = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", s.pane_title)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(samples, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let s = i18n::strings(app.language);

    let (mode_text, mode_style) = match app.input_mode {
        InputMode::Normal => (" CHAT ", Style::default().bg(Color::Blue).fg(Color::White)),
        InputMode::Editing => (" TYPE ", Style::default().bg(Color::Yellow).fg(Color::Black)),
    };

    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let mut spans = vec![
        Span::styled(mode_text, mode_style),
        Span::styled(" ", label_style),
    ];
    let hints: &[(&str, &str)] = match app.input_mode {
        InputMode::Normal => &[
            ("i", s.hint_type),
            ("v", s.hint_voice),
            ("l", s.hint_language),
            ("1-3", s.hint_suggestions),
            ("j/k", s.hint_scroll),
            ("q", s.hint_quit),
        ],
        InputMode::Editing => &[("Enter", s.hint_send), ("Esc", s.hint_done)],
    };
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {} ", key), key_style));
        spans.push(Span::styled(format!(" {} ", label), label_style));
    }

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(footer, area);
}
