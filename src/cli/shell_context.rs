use std::{cell::Cell, path::PathBuf, rc::Rc};

use crate::cli::{
    commands,
    notifier::CliNotifier,
    output::{self, OutputPreferences},
    registry::CommandRegistry,
    render,
};
use crate::config::{Config, ConfigManager};
use crate::domain::Expense;
use crate::tracker::{
    app_state::AppState,
    clock::{Clock, SystemClock},
};

use super::core::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler can touch.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub app: AppState,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
    auto_list: Rc<Cell<bool>>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        Self::with_parts(mode, config_manager, Box::new(SystemClock))
    }

    pub fn with_parts(
        mode: CliMode,
        config_manager: ConfigManager,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        let notifier = CliNotifier::new(mode == CliMode::Interactive);
        let mut app = AppState::new(clock, Box::new(notifier))
            .with_view(config.default_sort, config.default_filter);

        let auto_list = Rc::new(Cell::new(config.auto_list));
        let enabled = Rc::clone(&auto_list);
        app.subscribe(move |view: &[Expense]| {
            if enabled.get() {
                render::print_rows(view);
            }
        });

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let context = Self {
            mode,
            registry,
            app,
            config_manager,
            config,
            last_command: None,
            running: true,
            auto_list,
        };
        context.apply_preferences();
        Ok(context)
    }

    /// Pushes output and auto-list settings from the loaded config.
    pub fn apply_preferences(&self) {
        output::set_preferences(OutputPreferences {
            high_contrast_mode: self.config.high_contrast,
            quiet_mode: self.config.quiet,
        });
        self.auto_list.set(self.config.auto_list);
    }

    pub fn export_dir(&self) -> PathBuf {
        self.config
            .export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn prompt(&self) -> String {
        format!(
            "expenses [{} | sort:{} filter:{}] > ",
            self.app.store().len(),
            self.app.sort(),
            self.app.filter()
        )
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }
}
