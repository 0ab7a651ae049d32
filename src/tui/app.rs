use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::debounce::SaveScheduler;
use crate::io::store_io::{self, SavedTab};
use crate::io::{config_io, paths};
use crate::model::{Config, TabStore, TaskId};

use super::input;
use super::render;
use super::theme::Theme;

/// Quiet period before a scheduled save fires.
const SAVE_QUIET: Duration = Duration::from_millis(300);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Keys navigate tabs and task rows
    Navigate,
    /// The bottom input box is capturing new task text
    TaskInput,
    /// The centered modal is capturing a new tab name
    TabInput,
}

/// What holds input focus while navigating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tabs,
    Task(TaskId),
}

/// Main application state. The store is the single source of truth; the
/// render layer is a pure projection of it.
pub struct App {
    pub store: TabStore,
    pub config: Config,
    pub mode: Mode,
    pub focus: Focus,
    pub theme: Theme,
    pub dark: bool,
    pub should_quit: bool,
    /// Line editor buffer shared by the task input and the tab modal
    pub edit_buffer: String,
    /// Cursor byte offset into `edit_buffer`
    pub edit_cursor: usize,
    /// First visible row per pane, adjusted at render time
    pub pending_scroll: usize,
    pub completed_scroll: usize,
    pub scheduler: SaveScheduler,
    data_path: Option<PathBuf>,
}

impl App {
    /// Build the app from the persisted document: load (migrating if the
    /// legacy shape is found), activate the first tab, and fall back to a
    /// fresh "Today" tab when nothing was saved.
    pub fn new(config: Config, data_path: Option<PathBuf>) -> Self {
        let mut store = TabStore::new();
        let saved = data_path
            .as_deref()
            .map(store_io::load)
            .unwrap_or_default();
        for tab in saved {
            let name = if tab.name.trim().is_empty() {
                "Tab"
            } else {
                tab.name.as_str()
            };
            if let Some(id) = store.create_tab(name) {
                store.set_tasks(id, tab.pending, tab.completed);
            }
        }
        if store.is_empty() {
            store.create_tab("Today");
        }
        let first = store.list_tabs().next().map(|(id, _)| id);
        if let Some(first) = first {
            store.activate(first);
        }
        // Loading is not a mutation; nothing to save yet.
        store.clear_dirty();

        let dark = !config.ui.light;
        let theme = Theme::from_config(&config.ui, dark);
        App {
            store,
            config,
            mode: Mode::Navigate,
            focus: Focus::Tabs,
            theme,
            dark,
            should_quit: false,
            edit_buffer: String::new(),
            edit_cursor: 0,
            pending_scroll: 0,
            completed_scroll: 0,
            scheduler: SaveScheduler::new(SAVE_QUIET),
            data_path,
        }
    }

    /// Ordered row ids of the active tab, pending first.
    pub fn row_order(&self) -> Vec<TaskId> {
        self.store
            .active_tab()
            .map(|t| t.row_ids())
            .unwrap_or_default()
    }

    pub fn focused_task(&self) -> Option<TaskId> {
        match self.focus {
            Focus::Task(id) => Some(id),
            Focus::Tabs => None,
        }
    }

    /// Arm the debounced save. Every mutating key handler ends here.
    pub fn schedule_save(&mut self) {
        self.scheduler.arm(Instant::now());
    }

    /// Serialize the store to disk. I/O failure is swallowed: in-memory
    /// state is unaffected and a later save may succeed.
    pub fn persist(&mut self) {
        self.scheduler.disarm();
        if let Some(path) = &self.data_path {
            let tabs: Vec<SavedTab> = self
                .store
                .tabs()
                .iter()
                .map(|tab| SavedTab {
                    name: tab.name.clone(),
                    pending: tab.pending.iter().map(|t| t.text.clone()).collect(),
                    completed: tab.completed.iter().map(|t| t.text.clone()).collect(),
                })
                .collect();
            let _ = store_io::save(path, &tabs);
        }
        self.store.clear_dirty();
    }

    pub fn toggle_theme(&mut self) {
        self.dark = !self.dark;
        self.theme = Theme::from_config(&self.config.ui, self.dark);
    }

    /// Reset the line editor.
    pub fn clear_edit(&mut self) {
        self.edit_buffer.clear();
        self.edit_cursor = 0;
    }
}

/// Run the TUI application
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = paths::config_file()
        .map(|p| config_io::read_config(&p))
        .unwrap_or_default();
    let mut app = App::new(config, paths::data_file());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Flush any pending save before exit
    if app.store.is_dirty() || app.scheduler.is_armed() {
        app.persist();
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // The render pass has settled; a due save can run now.
        if app.scheduler.due(Instant::now()) {
            app.persist();
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
