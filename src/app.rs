use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::action::Action;
use crate::event::{self, AppEvent, EventHandler};
use crate::models::dataset::Datasets;
use crate::models::feed::FeedSelection;
use crate::models::filter::filter_posts;
use crate::models::post::Platform;
use crate::models::state::ViewStateController;
use crate::models::tab::Tab;
use crate::panel::{panel_spec, select_panel, ChartEncoding, ChartKind, Panel, PanelKind};
use crate::publish::{LogSink, PublishOutcome, PublishSink};
use crate::tui::Tui;
use crate::ui::publish_form::PublishForm;
use crate::ui::search::SearchBar;
use crate::ui::theme::{self, Palette};
use crate::ui::{charts, posts, statusbar, tabs, Component};

const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Search,
    Compose,
}

pub struct App<S: PublishSink = LogSink> {
    should_quit: bool,
    controller: ViewStateController,
    datasets: Datasets,
    feed: FeedSelection,
    sink: S,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    notice: Option<(String, Instant)>,

    // Input components
    search_bar: SearchBar,
    publish_form: PublishForm,
}

impl App<LogSink> {
    pub fn new(controller: ViewStateController, datasets: Datasets) -> Self {
        Self::with_sink(controller, datasets, LogSink)
    }
}

impl<S: PublishSink> App<S> {
    pub fn with_sink(controller: ViewStateController, datasets: Datasets, sink: S) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        App {
            should_quit: false,
            controller,
            datasets,
            feed: FeedSelection::new(),
            sink,
            action_tx,
            action_rx,
            notice: None,
            search_bar: SearchBar::new(),
            publish_form: PublishForm::new(),
        }
    }

    pub async fn run(&mut self, terminal: &mut Tui, tick_rate: Duration) -> Result<()> {
        info!(tab = %self.controller.state().active_tab, "dashboard started");
        let mut events = EventHandler::new(tick_rate);

        loop {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                Some(event) = events.next() => {
                    self.handle_event(event);
                }
                Some(action) = self.action_rx.recv() => {
                    self.update(action);
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!("dashboard closed");
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        if self.search_bar.is_focused() {
            Mode::Search
        } else if self.publish_form.is_focused()
            && self.controller.state().active_tab == Tab::Publish
        {
            Mode::Compose
        } else {
            Mode::Browse
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) => self.handle_key(key),
            AppEvent::Input(_) => {}
            AppEvent::Tick => self.dispatch(Action::Tick),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let mode = self.mode();
        let state = self.controller.state();
        // Focused inputs see keys first
        let action = match mode {
            Mode::Search => self.search_bar.handle_key_event(key, state),
            Mode::Compose => self.publish_form.handle_key_event(key, state),
            Mode::Browse => event::key_to_action(key, state.active_tab),
        };
        // Applied before the next key is read, so focus and edits never
        // see a stale state.
        if let Some(action) = action {
            self.update(action);
        }
    }

    fn dispatch(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    fn visible_post_count(&self) -> usize {
        let state = self.controller.state();
        filter_posts(&self.datasets.recent_posts, &state.search_term).len()
    }

    fn set_notice(&mut self, msg: String) {
        self.notice = Some((msg, Instant::now()));
    }

    fn update(&mut self, action: Action) {
        if action != Action::Tick {
            debug!(?action, "update");
        }

        match action {
            Action::Quit => self.should_quit = true,

            Action::Tick => {
                if self
                    .notice
                    .as_ref()
                    .is_some_and(|(_, since)| since.elapsed() >= NOTICE_TTL)
                {
                    self.notice = None;
                }
            }

            Action::SwitchTab(tab) => self.controller.set_active_tab(tab),
            Action::NextTab => self.controller.next_tab(),
            Action::PrevTab => self.controller.prev_tab(),

            Action::SelectNext => {
                if self.controller.state().active_tab == Tab::Posts {
                    let len = self.visible_post_count();
                    self.feed.select_next(len);
                }
            }
            Action::SelectPrev => {
                if self.controller.state().active_tab == Tab::Posts {
                    self.feed.select_prev();
                }
            }
            Action::ScrollToTop => {
                if self.controller.state().active_tab == Tab::Posts {
                    self.feed.select_first();
                }
            }
            Action::ScrollToBottom => {
                if self.controller.state().active_tab == Tab::Posts {
                    let len = self.visible_post_count();
                    self.feed.select_last(len);
                }
            }

            Action::ToggleTheme => self.controller.toggle_theme(),

            Action::FocusSearch | Action::BlurSearch => self.search_bar.update(&action),
            Action::SearchChanged(term) => {
                self.controller.set_search_term(term);
                let len = self.visible_post_count();
                self.feed.clamp(len);
            }

            Action::FocusPublishForm | Action::BlurPublishForm => {
                self.publish_form.update(&action)
            }
            Action::CyclePlatform { forward } => {
                let next = Platform::cycle(self.controller.state().draft_platform, forward);
                self.controller.set_draft_platform(next);
            }
            Action::DraftContentChanged(text) => self.controller.set_draft_content(text),
            Action::Publish => {
                if let PublishOutcome::Published(submission) =
                    self.controller.publish(&mut self.sink)
                {
                    self.dispatch(Action::Published(submission));
                }
            }
            Action::Published(ref submission) => {
                self.publish_form.update(&action);
                self.set_notice(format!("Posted to {}", submission.platform));
            }

            Action::ClearNotice => self.notice = None,
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let state = self.controller.state();
        let palette = theme::palette(state.is_dark_mode);
        let area = frame.area();
        frame.render_widget(Block::default().style(palette.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        // Theme switch + search
        self.search_bar.draw(frame, chunks[0], state);

        // Tab bar
        tabs::draw_tabs(frame, chunks[1], state.active_tab, &palette);

        // Active panel
        self.draw_panel(frame, chunks[2], &palette);

        // Status bar
        statusbar::draw_statusbar(
            frame,
            chunks[3],
            self.mode(),
            state.active_tab,
            self.notice.as_ref().map(|(msg, _)| msg.as_str()),
            &palette,
        );
    }

    fn draw_panel(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let state = self.controller.state();
        let spec = panel_spec(state.active_tab);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(false))
            .title(format!(" {} ", spec.heading))
            .title_style(palette.heading())
            .padding(Padding::horizontal(1));
        if let Some(dataset) = spec.dataset {
            block = block.title_bottom(
                Line::styled(format!(" {} ", dataset.name()), palette.muted()).right_aligned(),
            );
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let encoding = match spec.kind {
            PanelKind::Chart(encoding) => Some(encoding),
            PanelKind::PostList | PanelKind::Form => None,
        };

        match (select_panel(state, &self.datasets), encoding) {
            (Panel::Overview(data), Some(enc @ ChartEncoding { kind: ChartKind::Bar, .. })) => {
                charts::draw_bar_chart(frame, inner, data, &enc, palette)
            }
            (Panel::Engagement(data), Some(enc @ ChartEncoding { kind: ChartKind::GroupedBar, .. })) => {
                charts::draw_grouped_bar_chart(frame, inner, data, &enc, palette)
            }
            (Panel::Trends(data), Some(enc @ ChartEncoding { kind: ChartKind::Line, .. })) => {
                charts::draw_line_chart(frame, inner, data, &enc, palette)
            }
            (Panel::Demographics(data), Some(enc @ ChartEncoding { kind: ChartKind::Pie, .. })) => {
                charts::draw_proportions(frame, inner, data, &enc, palette)
            }
            (Panel::Posts(visible), _) => posts::draw_posts(
                frame,
                inner,
                &visible,
                &self.feed,
                &state.search_term,
                palette,
            ),
            (Panel::Publish, _) => self.publish_form.draw(frame, inner, state),
            // Data without a matching encoding has nothing to draw.
            _ => {}
        }
    }
}
