use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, ItemsFocus, MENU, Screen};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `service.bin_schedule`(...) for the current mode
    LoadBinSchedule,
    /// Run `service.catalog_items`()
    LoadCatalog,
    /// Write the inventory through the store
    PersistInventory,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, Char, Delete, Down, Enter, Esc, Left, Tab, Up};

    // Global quit shortcuts. Plain `q` stays available except while the
    // search field has focus, where it must type.
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    let typing = app.screen == Screen::Items && app.items_focus == ItemsFocus::Results;
    if key.code == Char('q') && key.modifiers.is_empty() && !typing {
        return Action::Quit;
    }

    let mut action = Action::None;

    match app.screen {
        Screen::Home => match key.code {
            Up | Char('k') => {
                if app.menu_index > 0 {
                    app.menu_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.menu_index + 1 < MENU.len() {
                    app.menu_index += 1;
                }
            }
            Enter | Char(' ') => {
                if let Some(&(screen, _label)) = MENU.get(app.menu_index) {
                    app.screen = screen;
                    action = match screen {
                        Screen::BinSchedule => Action::LoadBinSchedule,
                        Screen::Items if !app.catalog_loaded => Action::LoadCatalog,
                        Screen::Items | Screen::Home => Action::None,
                    };
                }
            }
            _ => {}
        },

        Screen::BinSchedule => match key.code {
            Char('m') => {
                app.toggle_schedule_mode();
                action = Action::LoadBinSchedule;
            }
            Char('r') => {
                action = Action::LoadBinSchedule;
            }
            Left | Esc => {
                app.screen = Screen::Home;
            }
            _ => {}
        },

        Screen::Items => match app.items_focus {
            ItemsFocus::Results => match key.code {
                Tab => {
                    app.items_focus = ItemsFocus::Inventory;
                }
                Up => {
                    if app.result_list_index > 0 {
                        app.result_list_index -= 1;
                    }
                }
                Down => {
                    if app.result_list_index + 1 < app.search_results.len() {
                        app.result_list_index += 1;
                    }
                }
                Char(character) => {
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT)
                    {
                        app.search_input.push(character);
                        app.refresh_search_results();
                    }
                }
                Backspace => {
                    app.search_input.pop();
                    app.refresh_search_results();
                }
                Enter => {
                    if let Some(item) = app.selected_result().cloned() {
                        app.inventory.add(item, 1);
                        action = Action::PersistInventory;
                    }
                }
                Left | Esc => {
                    app.screen = Screen::Home;
                }
                _ => {}
            },

            ItemsFocus::Inventory => match key.code {
                Tab => {
                    app.items_focus = ItemsFocus::Results;
                }
                Up | Char('k') => {
                    if app.inventory_list_index > 0 {
                        app.inventory_list_index -= 1;
                    }
                }
                Down | Char('j') => {
                    if app.inventory_list_index + 1 < app.inventory.len() {
                        app.inventory_list_index += 1;
                    }
                }
                Char('+') | Char('=') => {
                    if let Some(id) = app.selected_inventory_id() {
                        app.inventory.adjust(id, 1);
                        action = Action::PersistInventory;
                    }
                }
                Char('-') => {
                    if let Some(id) = app.selected_inventory_id() {
                        app.inventory.adjust(id, -1);
                        app.clamp_inventory_cursor();
                        action = Action::PersistInventory;
                    }
                }
                Char('d') | Delete => {
                    if let Some(id) = app.selected_inventory_id() {
                        app.inventory.remove(id);
                        app.clamp_inventory_cursor();
                        action = Action::PersistInventory;
                    }
                }
                Left | Esc => {
                    app.screen = Screen::Home;
                }
                _ => {}
            },
        },
    }
    action
}
