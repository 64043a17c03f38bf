// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc, Arc, Mutex},
    thread,
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    config::{options::AppOptions, state::AppState},
    loader::{self, LoadError},
    model::Dataset,
    session::{Session, Status},
};

use super::{components, progress::GuiProgress};

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Offerings",
        native,
        Box::new(move |cc| Ok(Box::new(App::new(cc.egui_ctx.clone(), AppState::new(options))))),
    )?;
    Ok(())
}

/// The initial fetch gates everything else.
pub enum LoadState {
    Loading(mpsc::Receiver<Result<Dataset, LoadError>>),
    Loaded(Session),
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // status line (the loader thread writes here)
    pub status: Arc<Mutex<String>>,

    pub load: LoadState,
}

impl App {
    pub fn new(ctx: egui::Context, state: AppState) -> Self {
        let status = Arc::new(Mutex::new(s!("Loading offerings…")));
        let (tx, rx) = mpsc::channel();

        let source = state.options.source.data_source();
        let year = state.options.source.year;
        let thread_status = status.clone();

        logf!("Init: source={} year={}", source, year);

        thread::spawn(move || {
            let mut prog = GuiProgress::new(thread_status, ctx.clone());
            let res = loader::load(&source, year, Some(&mut prog));
            // Receiver gone means the window closed first; nothing to do.
            let _ = tx.send(res);
            ctx.request_repaint();
        });

        Self { state, status, load: LoadState::Loading(rx) }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Swap in the session as soon as the loader thread reports back.
    fn poll_load(&mut self) {
        let LoadState::Loading(rx) = &self.load else { return };
        let res = match rx.try_recv() {
            Ok(res) => res,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => {
                loge!("Init: Loader thread exited without a result");
                Err(LoadError::Io {
                    path: s!("<loader>").into(),
                    source: std::io::Error::other("loader thread exited"),
                })
            }
        };
        let session = Session::from_load(res, &self.state.options.ui);
        logf!("Init: Session status {:?}", session.status());
        self.load = LoadState::Loaded(session);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        let status_text = self.status_text();
        let session = match &mut self.load {
            LoadState::Loading(_) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    components::status::loading(ui, &status_text);
                });
                ctx.request_repaint_after(Duration::from_millis(100));
                return;
            }
            LoadState::Loaded(session) => session,
        };

        match session.status().clone() {
            Status::Failed(cause) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    components::status::failed(ui, &cause);
                });
            }
            Status::Empty => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    components::status::empty(ui);
                });
            }
            Status::Ready => {
                session.tick(Instant::now());

                egui::TopBottomPanel::top("filters").show(ctx, |ui| {
                    components::filter_bar::draw(ui, session, &mut self.state.gui);
                });

                egui::CentralPanel::default().show(ctx, |ui| {
                    components::card_grid::draw(ui, session);
                });

                let _ = components::modal_view::draw(ctx, session);

                // Typing this frame may have armed the debounce
                if let Some(wait) = session.wake_after(Instant::now()) {
                    ctx.request_repaint_after(wait);
                }
            }
        }
    }
}
