use ratatui::{prelude::*, widgets::*};

use crate::{
    theme::Theme,
    view_models::commit_list::{CommitListViewModel, CommitRow, ListBody},
};

/// Render the commit browser screen
/// Pure presentation - uses pre-computed view model
pub fn render_commit_browser(f: &mut Frame, area: Rect, vm: &CommitListViewModel, theme: &Theme) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary)),
        area,
    );

    if vm.too_small {
        f.render_widget(
            Paragraph::new(vm.too_small_message.as_str()).style(theme.error()),
            area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Search line
            Constraint::Min(0),    // Commit list
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_title(f, chunks[0], vm, theme);
    render_search(f, chunks[1], vm, theme);
    render_body(f, chunks[2], &vm.body, theme);
    render_status(f, chunks[3], vm, theme);
    render_footer(f, chunks[4], vm, theme);
}

fn render_title(f: &mut Frame, area: Rect, vm: &CommitListViewModel, theme: &Theme) {
    let indent = " ".repeat(theme.selected_indent as usize);
    let line = Line::from(vec![
        Span::raw(indent),
        Span::styled(vm.title.as_str(), theme.title()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_search(f: &mut Frame, area: Rect, vm: &CommitListViewModel, theme: &Theme) {
    let search = &vm.search;
    let text_style = if search.is_placeholder {
        theme.muted()
    } else {
        theme.message()
    };

    // Cursor sits before the placeholder and after typed text
    let spans = if search.is_placeholder {
        vec![
            Span::styled(search.prompt.as_str(), theme.key_hint()),
            Span::styled(search.cursor.as_str(), theme.selected_message()),
            Span::styled(search.text.as_str(), text_style),
        ]
    } else {
        vec![
            Span::styled(search.prompt.as_str(), theme.key_hint()),
            Span::styled(search.text.as_str(), text_style),
            Span::styled(search.cursor.as_str(), theme.selected_message()),
        ]
    };
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_body(f: &mut Frame, area: Rect, body: &ListBody, theme: &Theme) {
    let indent = " ".repeat(theme.item_indent as usize);
    match body {
        ListBody::Loading => {
            f.render_widget(
                Paragraph::new(format!("{}Loading commits...", indent)).style(theme.muted()),
                area,
            );
        }
        ListBody::Error(message) => {
            f.render_widget(
                Paragraph::new(format!("{}{}", indent, message))
                    .style(theme.error())
                    .wrap(Wrap { trim: true }),
                area,
            );
        }
        ListBody::Empty(message) => {
            f.render_widget(
                Paragraph::new(format!("{}{}", indent, message)).style(theme.muted()),
                area,
            );
        }
        ListBody::Rows(rows) => {
            let items: Vec<ListItem> = rows.iter().map(|row| row_item(row, theme)).collect();
            f.render_widget(List::new(items), area);
        }
    }
}

fn row_item<'a>(row: &'a CommitRow, theme: &Theme) -> ListItem<'a> {
    let (indicator_style, hash_style, message_style) = if row.is_selected {
        (
            theme.selected_hash(),
            theme.selected_hash(),
            theme.selected_message(),
        )
    } else {
        (theme.muted(), theme.hash(), theme.message())
    };

    ListItem::new(Line::from(vec![
        Span::styled(row.indicator.as_str(), indicator_style),
        Span::styled(row.hash.as_str(), hash_style),
        Span::raw(" "),
        Span::styled(row.message.as_str(), message_style),
    ]))
}

fn render_status(f: &mut Frame, area: Rect, vm: &CommitListViewModel, theme: &Theme) {
    let style = match &vm.status.status_type {
        Some(status_type) => theme.status(status_type),
        None => theme.muted(),
    };
    f.render_widget(
        Paragraph::new(vm.status.message.as_str())
            .style(style)
            .block(Block::default().style(Style::default().bg(theme.bg_secondary))),
        area,
    );
}

fn render_footer(f: &mut Frame, area: Rect, vm: &CommitListViewModel, theme: &Theme) {
    let mut spans = Vec::new();
    for (i, (key, label)) in vm.footer.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", theme.muted()));
        }
        spans.push(Span::styled(key.as_str(), theme.key_hint()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(label.as_str(), theme.key_description()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
