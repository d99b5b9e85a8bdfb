use log::Level;
use ratatui::{
    prelude::*,
    widgets::{Block, Clear, List, ListItem},
};

use crate::{log_capture::LogEntry, state::DebugConsoleState, theme::Theme};

const TARGET_WIDTH: usize = 20;

/// Render the debug console as a Quake-style drop-down panel
pub fn render_debug_console(f: &mut Frame, area: Rect, console: &DebugConsoleState, theme: &Theme) {
    let console_height = u32::from(area.height) * u32::from(console.height_percent) / 100;
    let console_area = Rect {
        height: (console_height as u16).min(area.height),
        ..area
    };

    f.render_widget(Clear, console_area);

    // Logger holds the lock only for a push; a poisoned lock leaves the panel empty
    let Ok(logs) = console.logs.lock() else {
        return;
    };

    let visible_height = console.viewport_for(area.height);
    let total_logs = logs.len();
    let scroll_offset = if console.auto_scroll {
        total_logs.saturating_sub(visible_height)
    } else {
        console.scroll_offset.min(total_logs.saturating_sub(visible_height))
    };

    let log_items: Vec<ListItem> = logs
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|entry| {
            let level_color = match entry.level {
                Level::Error => theme.status_error,
                Level::Warn => theme.status_warning,
                Level::Info => theme.text_primary,
                Level::Debug => theme.text_secondary,
                Level::Trace => theme.text_muted,
            };
            ListItem::new(format_entry(entry)).style(Style::default().fg(level_color))
        })
        .collect();

    let logs_list = List::new(log_items).block(
        Block::bordered()
            .title(format!(
                " Debug Console ({}/{}) {} ",
                scroll_offset + visible_height.min(total_logs),
                total_logs,
                if console.auto_scroll {
                    "[AUTO]"
                } else {
                    "[MANUAL]"
                }
            ))
            .title_bottom(" F12 Close | j/k Scroll | a Auto-scroll | c Clear ")
            .border_style(theme.panel_border())
            .style(Style::default().bg(theme.bg_secondary)),
    );

    f.render_widget(logs_list, console_area);
}

fn format_entry(entry: &LogEntry) -> String {
    let target = if entry.target.chars().count() > TARGET_WIDTH {
        let short: String = entry.target.chars().take(TARGET_WIDTH - 3).collect();
        format!("{}...", short)
    } else {
        format!("{:width$}", entry.target, width = TARGET_WIDTH)
    };

    format!(
        "{} {:5} {} {}",
        entry.timestamp.format("%H:%M:%S%.3f"),
        entry.level.to_string().to_uppercase(),
        target,
        entry.message
    )
}
