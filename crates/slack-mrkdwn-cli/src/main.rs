mod args;
mod export;
mod output;
mod tui_renderer;

use anyhow::Result;
use args::{Args, Format};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use export::{Entry, Export};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use slack_mrkdwn_config::Config;
use slack_mrkdwn_engine::{EmojiTable, ParseOptions, PlainTextRenderer, Renderer, SpecialLabels};
use std::{env, io::stdout, path::PathBuf, process};
use tui_renderer::TuiRenderer;

struct App {
    title: String,
    entries: Vec<Entry>,
    previews: Vec<String>,
    list_state: ListState,
}

impl App {
    fn new(title: String, entries: Vec<Entry>) -> Self {
        let previews = entries.iter().map(preview).collect();
        let mut list_state = ListState::default();
        if !entries.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            title,
            entries,
            previews,
            list_state,
        }
    }

    fn next_message(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_message(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.entries.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn selected(&self) -> Option<&Entry> {
        self.list_state
            .selected()
            .and_then(|index| self.entries.get(index))
    }
}

/// First line of the plain-text rendering, for the message list.
fn preview(entry: &Entry) -> String {
    let plain = PlainTextRenderer::default().render(&entry.nodes);
    let first_line = plain.lines().next().unwrap_or_default();
    format!("{}: {first_line}", entry.author)
}

fn labels_from_config(config: &Config) -> SpecialLabels {
    SpecialLabels {
        here: config.labels.here.clone(),
        channel: config.labels.channel.clone(),
        everyone: config.labels.everyone.clone(),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("slack-mrkdwn-cli");
    let config_path = Config::config_path();

    let cli = match Args::parse(args.get(1..).unwrap_or_default()) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", Args::usage(program));
            process::exit(1);
        }
    };

    // Logging goes to stderr, which would draw over the TUI
    if cli.format != Format::Tui {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    if cli.init_config {
        if config_path.exists() {
            eprintln!("Config file already exists at {}", config_path.display());
            process::exit(1);
        }
        Config::default().save()?;
        println!("Wrote default config to {}", config_path.display());
        return Ok(());
    }

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let export_path: PathBuf = match cli.export_path.or_else(|| config.export_path.clone()) {
        Some(path) => path,
        None => {
            eprintln!("Error: No export file provided and none configured");
            eprintln!("{}", Args::usage(program));
            eprintln!(
                "Or set export_path in a config file at {}",
                config_path.display()
            );
            process::exit(1);
        }
    };

    let export = match Export::load_from_path(&export_path) {
        Ok(export) => export,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    log::info!(
        "Loaded {} messages from {}",
        export.messages.len(),
        export_path.display()
    );

    let emoji = EmojiTable::with_custom(&config.emoji);
    let options = ParseOptions {
        max_depth: config.max_depth,
    };
    let entries = export.entries(&emoji, &labels_from_config(&config), options);

    if cli.format != Format::Tui {
        let mut stdout = stdout().lock();
        output::write_entries(&mut stdout, &entries, cli.format, config.show_link_urls)?;
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let title = export_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Messages".to_string());
    let mut app = App::new(title, entries);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_message(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_message(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);

    // Message list panel
    let items: Vec<ListItem> = app
        .previews
        .iter()
        .map(|preview| ListItem::new(Line::from(Span::raw(preview.clone()))))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(app.title.clone()))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    // Rendered message panel
    let (title, content) = match app.selected() {
        Some(entry) => (entry.author.clone(), TuiRenderer.render(&entry.nodes)),
        None => (
            "Message".to_string(),
            Text::from("No messages in this export"),
        ),
    };

    let message = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(message, chunks[1]);

    // Instructions
    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]));

    f.render_widget(help, rows[1]);
}
