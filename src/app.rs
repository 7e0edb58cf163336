use anyhow::Result;
use async_trait::async_trait;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    prelude::Frame,
    widgets::Clear,
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::{AddressRecord, GenerationApi, ImageResponse, RecipeResponse, RemoteCallFailed};
use crate::config::AppConfig;
use crate::generation::{ImageTicket, RecipeTicket};
use crate::launch::{FileLaunchSink, LaunchSink, LogLaunchSink};
use crate::lookup::LookupTicket;
use crate::notify::Toasts;
use crate::screens::ConfirmQuitScreen;
use crate::wallet::WalletState;

pub enum Transition {
    Stay,
    Push(Box<dyn ScreenWidget>),
    Pop,
    Quit,
}

/// Completions of background requests, delivered back to the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    ImageDone { ticket: ImageTicket, result: Result<ImageResponse, RemoteCallFailed> },
    RecipeDone { ticket: RecipeTicket, result: Result<RecipeResponse, RemoteCallFailed> },
    LookupDone { ticket: LookupTicket, result: Result<AddressRecord, RemoteCallFailed> },
}

/// Which screen the app opens on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Launch,
    Lookup(String),
}

pub struct AppCtx {
    pub api: Arc<dyn GenerationApi>,
    pub config: AppConfig,
    pub toasts: Toasts,
    pub wallet: WalletState,
    pub launch_sink: Box<dyn LaunchSink + Send>,
    events: UnboundedSender<AppEvent>,
}

impl AppCtx {
    pub fn new(api: Arc<dyn GenerationApi>, config: AppConfig) -> (Self, UnboundedReceiver<AppEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let launch_sink: Box<dyn LaunchSink + Send> = match &config.launch_out_dir {
            Some(dir) => Box::new(FileLaunchSink { out_dir: dir.clone() }),
            None => Box::new(LogLaunchSink),
        };
        let ctx = Self {
            api,
            config,
            toasts: Toasts::default(),
            wallet: WalletState::default(),
            launch_sink,
            events,
        };
        (ctx, rx)
    }

    /// Simulated wallet provider: connect with the configured address.
    pub fn connect_wallet(&mut self) {
        self.wallet = WalletState::connected(self.config.wallet_address.clone());
        tracing::info!(address = %self.config.wallet_address, "wallet connected");
    }

    pub fn spawn_image(&self, ticket: ImageTicket) {
        let api = Arc::clone(&self.api);
        let tx = self.events.clone();
        tokio::spawn(async move {
            let result = api.generate_image(&ticket.request()).await;
            let _ = tx.send(AppEvent::ImageDone { ticket, result });
        });
    }

    pub fn spawn_recipe(&self, ticket: RecipeTicket) {
        let api = Arc::clone(&self.api);
        let tx = self.events.clone();
        tokio::spawn(async move {
            let result = api.generate_recipe(&ticket.request()).await;
            let _ = tx.send(AppEvent::RecipeDone { ticket, result });
        });
    }

    pub fn spawn_lookup(&self, ticket: LookupTicket) {
        let api = Arc::clone(&self.api);
        let tx = self.events.clone();
        tokio::spawn(async move {
            let result = api.fetch_address(&ticket.address).await;
            let _ = tx.send(AppEvent::LookupDone { ticket, result });
        });
    }
}

#[async_trait]
pub trait ScreenWidget: Send {
    fn title(&self) -> &str { "Food Meme Factory" }
    fn draw(&self, f: &mut Frame<'_>, area: Rect, ctx: &AppCtx);

    async fn on_key(&mut self, key: KeyEvent, ctx: &mut AppCtx) -> Result<Transition>;

    /// Background completions are offered to every screen on the stack;
    /// a screen ignores events whose tickets it did not issue.
    fn on_event(&mut self, _event: &AppEvent, _ctx: &mut AppCtx) {}
}

pub fn root_screen(route: &Route, ctx: &mut AppCtx) -> Box<dyn ScreenWidget> {
    match route {
        Route::Launch => Box::new(crate::screens::GenerateScreen::new()),
        Route::Lookup(address) => Box::new(crate::screens::LookupScreen::open(address, ctx)),
    }
}

pub async fn run_app(route: Route, api: Arc<dyn GenerationApi>, config: AppConfig) -> Result<()> {
    // terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?; // clean start

    let (mut ctx, rx) = AppCtx::new(api, config);
    let res = event_loop(&mut terminal, &route, &mut ctx, rx).await;

    // restore
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    route: &Route,
    ctx: &mut AppCtx,
    mut rx: UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let mut stack: Vec<Box<dyn ScreenWidget>> = vec![root_screen(route, ctx)];

    loop {
        while let Ok(ev) = rx.try_recv() {
            for screen in stack.iter_mut().rev() {
                screen.on_event(&ev, ctx);
            }
        }
        ctx.toasts.prune(Instant::now());

        terminal.draw(|f| {
            let size = f.size();
            if let Some(top) = stack.last() {
                top.draw(f, size, ctx);
            } else {
                f.render_widget(Clear, size);
            }
            crate::ui::toast::draw_toasts(f, size, &ctx.toasts);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                // GLOBAL HOTKEY: Ctrl+Q shows confirm quit from anywhere
                if k.modifiers.contains(KeyModifiers::CONTROL) && matches!(k.code, KeyCode::Char('q' | 'Q')) {
                    stack.push(Box::new(ConfirmQuitScreen::new()));
                    continue;
                }

                if let Some(top) = stack.last_mut() {
                    match top.on_key(k, ctx).await? {
                        Transition::Stay => {}
                        Transition::Push(s) => stack.push(s),
                        Transition::Pop => {
                            stack.pop();
                            if stack.is_empty() {
                                break;
                            }
                        }
                        Transition::Quit => break,
                    }
                }
            }
        }
    }
    Ok(())
}
