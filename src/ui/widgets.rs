use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, UiState};
use crate::models::{AnalysisResult, Sentiment};

const fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => Color::Green,
        Sentiment::Negative => Color::Red,
        Sentiment::Neutral => Color::Blue,
        Sentiment::Mixed => Color::Yellow,
    }
}

/// Renders whichever of the four result views matches the current state.
pub fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
    match &app.state {
        UiState::Idle => render_idle_placeholder(frame, area),
        UiState::Loading => render_loading(frame, area),
        UiState::Error(message) => render_error_banner(frame, message, area),
        UiState::Success(result) => {
            let result = result.clone();
            render_analysis(frame, app, &result, area);
        }
    }
}

fn render_idle_placeholder(frame: &mut Frame, area: Rect) {
    let placeholder_text = vec![
        Line::from(Span::styled(
            "Analysis will appear here",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Paste customer feedback below and press Enter for an instant AI-powered analysis",
            Style::default().fg(Color::Cyan),
        )),
    ];

    let placeholder = Paragraph::new(placeholder_text)
        .alignment(ratatui::layout::Alignment::Center);

    // Sit at the bottom of the results area, next to the input
    let placeholder_height = 2;
    let y_pos = area.y + area.height.saturating_sub(placeholder_height);

    let placeholder_area = Rect {
        x: area.x,
        y: y_pos,
        width: area.width,
        height: placeholder_height.min(area.height),
    };

    frame.render_widget(placeholder, placeholder_area);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let loading_text = vec![
        Line::from(Span::styled(
            "Analyzing feedback...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Waiting for the analysis service to respond",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let loading = Paragraph::new(loading_text).alignment(ratatui::layout::Alignment::Center);

    let y_pos = area.y + area.height / 2;
    let loading_area = Rect {
        x: area.x,
        y: y_pos.min(area.y + area.height.saturating_sub(2)),
        width: area.width,
        height: 2.min(area.height),
    };

    frame.render_widget(loading, loading_area);
}

fn render_error_banner(frame: &mut Frame, message: &str, area: Rect) {
    let banner = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error ")
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false });

    let banner_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 3.min(area.height),
    };

    frame.render_widget(banner, banner_area);
}

fn render_analysis(frame: &mut Frame, app: &mut App, result: &AnalysisResult, area: Rect) {
    let mut lines = Vec::new();

    let mut title_spans = vec![Span::styled(
        "Analysis Results",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(at) = app.analyzed_at {
        title_spans.push(Span::styled(
            format!("  analyzed at {} UTC", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(title_spans));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled(
            "Overall Sentiment: ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            result.sentiment.to_string(),
            Style::default()
                .fg(sentiment_color(result.sentiment))
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Summary",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(result.summary.clone()));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Key Themes",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    if result.key_themes.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (none identified)",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for theme in &result.key_themes {
            lines.push(Line::from(format!("  • {theme}")));
        }
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Actionable Insights",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    if result.actionable_insights.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (none identified)",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for insight in &result.actionable_insights {
            lines.push(Line::from(format!("  • {insight}")));
        }
    }

    // Account for wrapping to find the true visual height, then clamp the
    // scroll offset and sync it back to the app state
    let available_width = area.width.max(1) as usize;
    let mut total_visual_lines = 0;
    for line in &lines {
        let line_width = line.width();
        if line_width == 0 {
            total_visual_lines += 1;
        } else {
            total_visual_lines += line_width.div_ceil(available_width);
        }
    }

    let visible_height = area.height as usize;
    let max_scroll = total_visual_lines.saturating_sub(visible_height);
    let actual_scroll = app.scroll_offset.min(max_scroll);
    if app.scroll_offset != actual_scroll {
        app.scroll_offset = actual_scroll;
    }

    let analysis = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(actual_scroll).unwrap_or(u16::MAX), 0));

    frame.render_widget(analysis, area);
}

pub fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let loading_indicator = if app.is_loading() { " [Analyzing...]" } else { "" };

    let status_text = format!("{}{}", app.model, loading_indicator);

    let color = if app.is_loading() {
        Color::Yellow
    } else {
        Color::Green
    };

    let status = Paragraph::new(status_text)
        .alignment(ratatui::layout::Alignment::Right)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    frame.render_widget(status, area);
}

pub fn render_input_field(frame: &mut Frame, app: &App, area: Rect) {
    let input_text = if app.feedback_input.is_empty() {
        "Paste your customer feedback, reviews, or survey responses..."
    } else {
        &app.feedback_input
    };

    let input_style = if app.feedback_input.is_empty() {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    let input = Paragraph::new(input_text)
        .style(input_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(input, area);
}

pub fn render_bottom_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.exit_pending {
        (
            "Press Ctrl+C again to exit, Esc to cancel",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "Enter: Analyze | Up/Down: Scroll | Ctrl+H: Help | Ctrl+C: Quit",
            Style::default().fg(Color::DarkGray),
        )
    };

    let bar = Paragraph::new(text)
        .alignment(ratatui::layout::Alignment::Center)
        .style(style);

    frame.render_widget(bar, area);
}

pub fn render_help_window(frame: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            "FeedLens - Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "General:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  Ctrl+H        - Show/hide this help"),
        Line::from("  Ctrl+Q        - Quit application"),
        Line::from("  Ctrl+C        - Quit application"),
        Line::from(""),
        Line::from(Span::styled(
            "Analysis:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  Typing        - Edit the feedback text"),
        Line::from("  Enter         - Analyze the feedback"),
        Line::from("  Backspace     - Delete last character"),
        Line::from(""),
        Line::from(Span::styled(
            "Navigation:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  Up/Down       - Scroll results"),
        Line::from("  PgUp/PgDn     - Scroll results"),
        Line::from("  Home/End      - Jump to start/end"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Ctrl+H or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    let popup_width = 60;
    let popup_height = 22;
    let x = (area.width.saturating_sub(popup_width)) / 2;
    let y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect {
        x: area.x + x,
        y: area.y + y,
        width: popup_width.min(area.width),
        height: popup_height.min(area.height),
    };

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help_paragraph, popup_area);
}
