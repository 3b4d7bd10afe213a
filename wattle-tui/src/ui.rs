use chrono::{Local, NaiveDate};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};
use wattle_core::model::{BinType, ScheduleMode};

use crate::app::{App, ItemsFocus, MENU, Screen};
use crate::theme::theme_for;

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let theme = theme_for(app.screen);

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    // Title / header
    let header = Paragraph::new("wattle – household utilities")
        .style(Style::default().fg(theme.primary))
        .block(Block::default().borders(Borders::ALL).title("Wattle"));
    frame.render_widget(header, *header_area);

    // Main screen
    match app.screen {
        Screen::Home => draw_home(frame, app, *content_area),
        Screen::BinSchedule => draw_bin_schedule(frame, app, *content_area),
        Screen::Items => draw_items(frame, app, *content_area),
    }

    // Status bar
    let nav_hint = match app.screen {
        Screen::Home => "↑/↓ move · Enter open · q/Ctrl-C quit",
        Screen::BinSchedule => "m switch mode · r reload · Left/Esc back · q/Ctrl-C quit",
        Screen::Items => match app.items_focus {
            ItemsFocus::Results => {
                "Type to search · ↑/↓ move · Enter add to inventory · Tab inventory · Esc back"
            }
            ItemsFocus::Inventory => {
                "↑/↓ move · +/- change quantity · d remove · Tab results · Esc back · q quit"
            }
        },
    };

    let status_text = if app.is_loading {
        format!("Loading… · {nav_hint}")
    } else if let Some(msg) = &app.error_message {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_home(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = theme_for(app.screen);

    let items = MENU
        .iter()
        .enumerate()
        .map(|(idx, (_screen, label))| {
            let prefix = if idx == app.menu_index { "> " } else { "  " };
            ListItem::new(format!("{prefix}{label}"))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("What do you need? (↑/↓, Enter)"),
        )
        .highlight_style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.menu_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_bin_schedule(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = theme_for(app.screen);
    let mode_label = match app.schedule_mode {
        ScheduleMode::Upcoming => "upcoming collection",
        ScheduleMode::CurrentWeek => "this week's collection",
    };
    let title = format!("Bin collection – {mode_label}");

    if let Some(reason) = &app.schedule_unavailable {
        // Degrade rather than show a guessed date.
        let paragraph = Paragraph::new(format!("Schedule unavailable.\n\n{reason}"))
            .style(Style::default().fg(Color::Red))
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let Some(info) = &app.schedule else {
        let paragraph = Paragraph::new("Loading schedule…")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    };

    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // bin type
            Constraint::Length(4), // collection day
            Constraint::Min(0),    // holiday banner
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [bin_area, day_area, banner_area] = chunks else {
        return;
    };

    let bin = Paragraph::new(info.bin_type.label())
        .style(
            Style::default()
                .fg(bin_color(info.bin_type))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("This week's bin – {mode_label}")),
        );
    frame.render_widget(bin, *bin_area);

    let today = Local::now().date_naive();
    let day_text = format!(
        "{} ({})",
        info.collection_day.format("%A, %-d %B %Y"),
        relative_day_label(info.collection_day, today)
    );
    let day = Paragraph::new(day_text)
        .style(Style::default().fg(theme.primary))
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Collection day (holidays: {})",
            app.service.holiday_region().name
        )));
    frame.render_widget(day, *day_area);

    if info.is_holiday_affected {
        let message = info
            .holiday_message
            .as_deref()
            .unwrap_or("Collection day shifted due to a public holiday");
        let banner = Paragraph::new(message)
            .style(Style::default().fg(Color::LightRed))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Public holiday notice"),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(banner, *banner_area);
    }
}

fn draw_items(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = theme_for(app.screen);

    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search input
            Constraint::Min(0),    // results + inventory
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [input_area, lists_area] = chunks else {
        return;
    };

    let input = Paragraph::new(app.search_input.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search items (type to filter)"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(input, *input_area);

    let panes_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(*lists_area);

    let panes = panes_chunks.as_ref();
    let [results_area, inventory_area] = panes else {
        return;
    };

    draw_search_results(frame, app, *results_area, theme.highlight);
    draw_inventory(frame, app, *inventory_area, theme.highlight);
}

fn draw_search_results(frame: &mut Frame<'_>, app: &App, area: Rect, highlight: Color) {
    let focused = app.items_focus == ItemsFocus::Results;

    let items = if !app.catalog_loaded {
        vec![ListItem::new("Catalog not loaded yet.")]
    } else if app.search_results.is_empty() {
        vec![ListItem::new("No items match the search.")]
    } else {
        app.search_results
            .iter()
            .map(|item| {
                let owned = app.inventory.quantity(item.id);
                let line = if owned > 0 {
                    format!("{} (r{}) · {} held", item.name, item.rarity, owned)
                } else {
                    format!("{} (r{})", item.name, item.rarity)
                };
                ListItem::new(line)
            })
            .collect()
    };

    let border_style = if focused {
        Style::default().fg(highlight)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!("Results ({})", app.search_results.len())),
        )
        .highlight_style(
            Style::default()
                .fg(highlight)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if focused && !app.search_results.is_empty() {
        state.select(Some(app.result_list_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_inventory(frame: &mut Frame<'_>, app: &App, area: Rect, highlight: Color) {
    let focused = app.items_focus == ItemsFocus::Inventory;

    let border_style = if focused {
        Style::default().fg(highlight)
    } else {
        Style::default()
    };
    let title = format!("Inventory ({} items)", app.inventory.len());

    if app.inventory.is_empty() {
        let paragraph = Paragraph::new("Nothing tracked yet. Add items from the results pane.")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let rows = app.inventory.entries().enumerate().map(|(idx, entry)| {
        let mut style = Style::default();
        if focused && idx == app.inventory_list_index {
            style = style.fg(highlight).add_modifier(Modifier::BOLD);
        }
        Row::new(vec![
            Cell::from(format!("{}", entry.quantity)),
            Cell::from(entry.item.name.clone()),
            Cell::from(format!("{}z", entry.item.value)),
        ])
        .style(style)
    });

    let column_widths = [
        Constraint::Length(5),
        Constraint::Min(20),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, column_widths)
        .header(Row::new(vec!["Qty", "Item", "Worth"]).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn bin_color(bin_type: BinType) -> Color {
    match bin_type {
        BinType::Organic => Color::Green,
        BinType::Recyclable => Color::Yellow,
    }
}

fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    let delta = (date - today).num_days();
    match delta {
        0 => "today".to_owned(),
        1 => "tomorrow".to_owned(),
        days if days > 1 => format!("in {days} days"),
        -1 => "yesterday".to_owned(),
        days => format!("{} days ago", days.abs()),
    }
}
