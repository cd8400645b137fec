#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod assets;
mod colors;
mod constants;
mod cursor;
mod header;
mod sections;
mod tour;
mod ui;

use assets::{AssetLoadState, PanoramaSource, load_panorama, load_site_content};
use clap::Parser;
use constants::WINDOW_SIZE;
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use flik_studio::contact::ContactForm;
use flik_studio::cursor::{CursorFollower, HoverTracker};
use flik_studio::viewer::ViewerState;
use flik_studio::{SectionId, SiteContent};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::thread;

/// Showcase of the Flik architectural visualization studio.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Panorama image to show in the virtual tour instead of the bundled one
    #[arg(long, value_name = "PATH")]
    panorama: Option<PathBuf>,
    /// Start with the virtual tour open
    #[arg(long)]
    tour: bool,
}

/// Main application state for the studio showcase.
pub struct FlikStudioApp {
    content: SiteContent,
    viewer: ViewerState,
    hover: HoverTracker,
    cursor: CursorFollower,
    active_section: SectionId,
    pending_scroll: Option<SectionId>,
    revealed: HashSet<SectionId>,
    contact_form: ContactForm,
    panorama: AssetLoadState,
    panorama_texture: Option<TextureHandle>,
    toasts: Toasts,
}

impl FlikStudioApp {
    fn new(cc: &eframe::CreationContext<'_>, args: Args) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let content = match load_site_content() {
            Ok(content) => {
                log::info!("Loaded site content for {}", content.studio_name);
                content
            }
            Err(err) => {
                log::error!("{err}");
                toasts.add(Toast {
                    kind: ToastKind::Error,
                    text: err.to_string().into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(10.0)
                        .show_icon(true),
                    ..Default::default()
                });
                SiteContent::default()
            }
        };

        let source = match args.panorama {
            Some(path) => PanoramaSource::File(path),
            None => PanoramaSource::Embedded(content.panorama_path.clone()),
        };

        // Decode the panorama in the background so the page shows immediately
        let (tx, rx) = mpsc::channel();
        let ctx = cc.egui_ctx.clone();
        let thread_source = source.clone();
        thread::spawn(move || {
            let result = load_panorama(&thread_source);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
        log::debug!("Loading panorama from {source:?}");

        let mut app = Self::with_content(content, AssetLoadState::Loading(rx), toasts);
        if args.tour {
            app.open_tour();
        }
        app
    }

    /// App state around already loaded content, with the tour closed.
    fn with_content(content: SiteContent, panorama: AssetLoadState, toasts: Toasts) -> Self {
        Self {
            content,
            viewer: ViewerState::new(),
            hover: HoverTracker::default(),
            cursor: CursorFollower::default(),
            active_section: SectionId::Home,
            pending_scroll: None,
            revealed: HashSet::new(),
            contact_form: ContactForm::default(),
            panorama,
            panorama_texture: None,
            toasts,
        }
    }

    /// Polls the panorama loader and uploads the texture once decoded.
    fn poll_panorama(&mut self, ctx: &egui::Context) {
        if let AssetLoadState::Loading(rx) = &self.panorama {
            let next = match rx.try_recv() {
                Ok(Ok(decoded)) => Some(AssetLoadState::Ready(decoded)),
                Ok(Err(err)) => Some(AssetLoadState::Error(err.to_string())),
                Err(mpsc::TryRecvError::Disconnected) => {
                    Some(AssetLoadState::Error("panorama loader disconnected".to_owned()))
                }
                Err(mpsc::TryRecvError::Empty) => None,
            };

            if let Some(state) = next {
                self.panorama = state;
                if let AssetLoadState::Error(msg) = &self.panorama {
                    log::error!("{msg}");
                    self.toasts.add(Toast {
                        kind: ToastKind::Error,
                        text: msg.clone().into(),
                        options: ToastOptions::default()
                            .duration_in_seconds(8.0)
                            .show_icon(true),
                        ..Default::default()
                    });
                }
            }
        }

        if let AssetLoadState::Ready(decoded) = &self.panorama {
            let image = ColorImage::from_rgba_unmultiplied(
                [decoded.width as usize, decoded.height as usize],
                &decoded.pixels,
            );
            self.panorama_texture =
                Some(ctx.load_texture("panorama", image, TextureOptions::LINEAR));
            self.panorama = AssetLoadState::Uploaded;
            log::info!("Panorama ready");
        }
    }
}

impl eframe::App for FlikStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_panorama(ctx);
        self.hover.begin_frame();

        if self.viewer.is_open() {
            self.handle_tour_keys(ctx);
            self.show_tour(ctx);
        } else {
            self.show_page(ctx);
            self.show_navigation(ctx);
        }

        let role = self.hover.end_frame();
        // The tour uses the system pointer; the page gets the decorated one.
        if !self.viewer.is_open() {
            cursor::show_cursor(ctx, &mut self.cursor, role);
        }

        self.toasts.show(ctx);
    }
}

fn load_icon() -> egui::IconData {
    let icon_bytes = include_bytes!("../../../assets/flik-studio-icon.ico");
    let icon_dir =
        ico::IconDir::read(std::io::Cursor::new(icon_bytes)).expect("Failed to read icon");
    let entry = icon_dir
        .entries()
        .iter()
        .max_by_key(|entry| entry.width())
        .expect("Icon has no entries");
    let image = entry.decode().expect("Failed to decode icon");
    egui::IconData {
        rgba: image.rgba_data().to_vec(),
        width: image.width(),
        height: image.height(),
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title("Flik - Architectural Visualization Studio")
            .with_icon(Arc::new(load_icon())),
        ..Default::default()
    };

    eframe::run_native(
        "Flik Studio",
        options,
        Box::new(|cc| Ok(Box::new(FlikStudioApp::new(cc, args)))),
    )
}
