// Demo application state
// Holds the host-owned selection and routes terminal events to the tab bar

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use floating_tab_bar::FloatingTabBarManager;
use tracing::{debug, info};

use crate::config::AppConfig;

pub struct DemoApp {
    pub config: AppConfig,
    pub tab_bar: FloatingTabBarManager,
    /// Selected tab, owned here and lent to the tab bar
    pub selected: usize,
    pub show_add_sheet: bool,
    pub added_items: usize,
    pub should_quit: bool,
}

impl DemoApp {
    pub fn new(config: AppConfig, tab_bar: FloatingTabBarManager) -> Self {
        let selected = tab_bar.initial_selection();
        Self {
            config,
            tab_bar,
            selected,
            show_add_sheet: false,
            added_items: 0,
            should_quit: false,
        }
    }

    /// Description for the page behind the selected tab
    pub fn page_description(&self) -> String {
        match self.config.pages.get(self.selected) {
            Some(page) => page.description.clone(),
            None => match self.tab_bar.tabs().get(self.selected) {
                Some(tab) => format!("Your {} content goes here", tab.title.to_lowercase()),
                None => String::new(),
            },
        }
    }

    pub fn open_add_sheet(&mut self) {
        debug!("add sheet opened");
        self.show_add_sheet = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The add sheet is modal
        if self.show_add_sheet {
            match key.code {
                KeyCode::Enter => {
                    self.added_items += 1;
                    info!(total = self.added_items, "sample item added");
                    self.show_add_sheet = false;
                }
                KeyCode::Esc => self.show_add_sheet = false,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => {
                self.tab_bar.navigate_previous(&mut self.selected);
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.tab_bar.navigate_next(&mut self.selected);
            }
            KeyCode::Char('+') | KeyCode::Char('a') => self.open_add_sheet(),
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let index = c as usize - '1' as usize;
                if let Err(e) = self.tab_bar.set_active(&mut self.selected, index) {
                    debug!("ignoring digit key: {}", e);
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_add_sheet || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let mut add_tapped = false;
        let mut on_add = || add_tapped = true;
        self.tab_bar
            .handle_click(mouse.column, mouse.row, &mut self.selected, Some(&mut on_add));
        if add_tapped {
            self.open_add_sheet();
        }
    }
}
