use anyhow::Result;
use catchlog_engine::{
    CatchFilter, CatchForm, CatchStore, Field, SortKey, SortSpec, project,
};
use catchlog_types::{CatchRecord, FishType};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

/// Run the single-screen UI until the user quits. All input is handled on
/// this thread; every key press runs to completion and the screen is
/// re-derived from current state afterwards.
pub fn run(store: CatchStore) -> Result<()> {
    let mut tui = Tui::new()?;
    let mut app = App::new(store);

    while !app.should_quit {
        tui.terminal.draw(|f| super::render::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.on_key(key)?;
            }
        }
    }

    Ok(())
}

struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Set up Ctrl+C handler to restore terminal
        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        Ok(Self { terminal })
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Restore terminal state when the UI is dropped
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Filter,
    Modal,
}

/// Focusable inputs of the filter bar, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    FishType,
    Location,
    Lure,
    MinSize,
    MaxSize,
}

impl FilterField {
    const ALL: [FilterField; 5] = [
        FilterField::FishType,
        FilterField::Location,
        FilterField::Lure,
        FilterField::MinSize,
        FilterField::MaxSize,
    ];

    fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Raw filter-bar state. Size bounds stay free-form text while editing; an
/// unparseable bound is simply inactive, like an empty input.
#[derive(Debug, Clone, Default)]
pub struct FilterInputs {
    pub focus: FilterField,
    pub fish_type: Option<FishType>,
    pub location: String,
    pub lure: String,
    pub min_size: String,
    pub max_size: String,
}

impl Default for FilterField {
    fn default() -> Self {
        FilterField::FishType
    }
}

impl FilterInputs {
    pub fn to_filter(&self) -> CatchFilter {
        let mut filter = CatchFilter::new();
        if let Some(fish_type) = self.fish_type {
            filter = filter.fish_type(fish_type);
        }
        if !self.location.trim().is_empty() {
            filter = filter.location(self.location.trim());
        }
        if !self.lure.trim().is_empty() {
            filter = filter.lure(self.lure.trim());
        }
        if let Ok(min) = self.min_size.trim().parse::<f64>() {
            filter = filter.min_size(min);
        }
        if let Ok(max) = self.max_size.trim().parse::<f64>() {
            filter = filter.max_size(max);
        }
        filter
    }
}

/// The add-form modal: the entry form plus which field has focus.
pub struct ModalState {
    pub form: CatchForm,
    pub focus: Field,
}

impl ModalState {
    fn new() -> Self {
        Self {
            form: CatchForm::new(),
            focus: Field::FishType,
        }
    }

    fn focus_next(&mut self) {
        let i = Field::ALL.iter().position(|f| *f == self.focus).unwrap();
        self.focus = Field::ALL[(i + 1) % Field::ALL.len()];
    }

    fn focus_prev(&mut self) {
        let i = Field::ALL.iter().position(|f| *f == self.focus).unwrap();
        self.focus = Field::ALL[(i + Field::ALL.len() - 1) % Field::ALL.len()];
    }

    fn push_char(&mut self, c: char) {
        match self.focus {
            Field::FishType => {}
            Field::Size => {
                let value = format!("{}{}", self.form.size(), c);
                self.form.set_size(value);
            }
            Field::Lure => {
                let value = format!("{}{}", self.form.lure(), c);
                self.form.set_lure(value);
            }
            Field::Location => {
                let value = format!("{}{}", self.form.location(), c);
                self.form.set_location(value);
            }
        }
    }

    fn pop_char(&mut self) {
        match self.focus {
            Field::FishType => self.form.set_fish_type(None),
            Field::Size => {
                let mut value = self.form.size().to_string();
                value.pop();
                self.form.set_size(value);
            }
            Field::Lure => {
                let mut value = self.form.lure().to_string();
                value.pop();
                self.form.set_lure(value);
            }
            Field::Location => {
                let mut value = self.form.location().to_string();
                value.pop();
                self.form.set_location(value);
            }
        }
    }

    fn cycle_fish_type(&mut self, forward: bool) {
        self.form.set_fish_type(cycle(self.form.fish_type(), forward));
    }
}

/// Cycle through None plus every fish type, in option order.
fn cycle(current: Option<FishType>, forward: bool) -> Option<FishType> {
    let mut options: Vec<Option<FishType>> = vec![None];
    options.extend(FishType::ALL.iter().copied().map(Some));

    let i = options.iter().position(|o| *o == current).unwrap();
    let n = options.len();
    let next = if forward { (i + 1) % n } else { (i + n - 1) % n };
    options[next]
}

pub struct App {
    store: CatchStore,
    pub filters: FilterInputs,
    pub sort: SortSpec,
    pub mode: Mode,
    pub modal: Option<ModalState>,
    pub status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(store: CatchStore) -> Self {
        Self {
            store,
            filters: FilterInputs::default(),
            sort: SortSpec::default(),
            mode: Mode::Browse,
            modal: None,
            status: None,
            should_quit: false,
        }
    }

    /// The rows currently on screen: the store projected through the
    /// filter bar and the active sort.
    pub fn visible_records(&self) -> Vec<CatchRecord> {
        project(self.store.records(), &self.filters.to_filter(), Some(self.sort))
    }

    fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        self.status = None;
        match self.mode {
            Mode::Browse => self.on_browse_key(key),
            Mode::Filter => {
                self.on_filter_key(key);
                Ok(())
            }
            Mode::Modal => self.on_modal_key(key),
        }
    }

    fn on_browse_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') => {
                self.modal = Some(ModalState::new());
                self.mode = Mode::Modal;
            }
            KeyCode::Char('f') | KeyCode::Tab => self.mode = Mode::Filter,
            KeyCode::Char('1') => self.sort = self.sort.toggle(SortKey::FishType),
            KeyCode::Char('2') => self.sort = self.sort.toggle(SortKey::Size),
            KeyCode::Char('3') => self.sort = self.sort.toggle(SortKey::Lure),
            KeyCode::Char('4') => self.sort = self.sort.toggle(SortKey::Location),
            KeyCode::Char('5') => self.sort = self.sort.toggle(SortKey::Timestamp),
            _ => {}
        }
        Ok(())
    }

    fn on_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Tab => self.filters.focus = self.filters.focus.next(),
            KeyCode::BackTab => self.filters.focus = self.filters.focus.prev(),
            KeyCode::Left | KeyCode::Right if self.filters.focus == FilterField::FishType => {
                self.filters.fish_type =
                    cycle(self.filters.fish_type, key.code == KeyCode::Right);
            }
            KeyCode::Backspace => match self.filters.focus {
                FilterField::FishType => self.filters.fish_type = None,
                FilterField::Location => {
                    self.filters.location.pop();
                }
                FilterField::Lure => {
                    self.filters.lure.pop();
                }
                FilterField::MinSize => {
                    self.filters.min_size.pop();
                }
                FilterField::MaxSize => {
                    self.filters.max_size.pop();
                }
            },
            KeyCode::Char(c) => match self.filters.focus {
                FilterField::FishType => {}
                FilterField::Location => self.filters.location.push(c),
                FilterField::Lure => self.filters.lure.push(c),
                FilterField::MinSize => self.filters.min_size.push(c),
                FilterField::MaxSize => self.filters.max_size.push(c),
            },
            _ => {}
        }
    }

    fn on_modal_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(modal) = self.modal.as_mut() else {
            self.mode = Mode::Browse;
            return Ok(());
        };

        match key.code {
            // Cancel discards the draft and never touches the store.
            KeyCode::Esc => {
                self.modal = None;
                self.mode = Mode::Browse;
                self.status = Some("Add cancelled".to_string());
            }
            KeyCode::Tab | KeyCode::Down => modal.focus_next(),
            KeyCode::BackTab | KeyCode::Up => modal.focus_prev(),
            KeyCode::Left | KeyCode::Right if modal.focus == Field::FishType => {
                modal.cycle_fish_type(key.code == KeyCode::Right);
            }
            KeyCode::Backspace => modal.pop_char(),
            KeyCode::Char(c) => modal.push_char(c),
            KeyCode::Enter => {
                if let Some(new_catch) = modal.form.submit() {
                    let record = self.store.append(new_catch)?;
                    self.status = Some(format!(
                        "Logged {}: {}\"",
                        record.fish_type, record.size
                    ));
                    self.modal = None;
                    self.mode = Mode::Browse;
                }
                // On validation failure the modal stays open with the
                // errors on display and the draft intact.
            }
            _ => {}
        }

        Ok(())
    }
}
