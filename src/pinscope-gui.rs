//! Pinout Viewer GUI Application
//!
//! Interactive viewer for hardware connector pinout documents using the
//! egui framework. The viewer features:
//! - Connector images with clickable, proximity-sized pin markers
//! - Full pinout tables per connector and a details table per selection
//! - Type-based highlighting across every connector on the page
//! - Asynchronous document parsing and per-connector image decoding
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - Background pinout parsing and image decoding
//! - `presentation/` - Pin type color mapping (separated from domain logic)
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `rendering/` - Low-level marker rendering
//! - `state/` - State management for documents, selection and layout
//! - `utils/` - Formatting utilities

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod utils;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::AsyncLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};

const SPLIT_RATIO_KEY: &str = "layout_split";
const DEFAULT_SPLIT_RATIO: f32 = 0.72;

/// Main application entry point that initializes and launches the pinout viewer GUI.
fn main() -> eframe::Result {
    // Parse command-line arguments to check for an initial file to load
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Pinscope Pinout Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Pinscope Pinout Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(PinscopeApp::new(cc, initial_file)))),
    )
}

/// The main pinout viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles loading, overlay installation and
///   selection logic
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct PinscopeApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous pinout loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl Default for PinscopeApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
            loader: AsyncLoader::new(),
            pending_file_load: None,
        }
    }
}

impl PinscopeApp {
    /// Creates a new viewer instance with theme and layout settings loaded
    /// from persistent storage. Optionally accepts an initial file path to
    /// load on startup.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let split_ratio: f32 =
            SettingsCoordinator::load_setting_or(cc.storage, SPLIT_RATIO_KEY, DEFAULT_SPLIT_RATIO);

        Self {
            state: AppState::with_theme_and_layout(current_theme_name, split_ratio),
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenDemoRequested => {
                ApplicationCoordinator::open_demo(&mut self.state, ctx);
            }
            PanelInteraction::MarkerClicked { marker } => {
                ApplicationCoordinator::handle_marker_click(&mut self.state, marker);
            }
        }
    }
}

impl eframe::App for PinscopeApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(
            storage,
            SPLIT_RATIO_KEY,
            &self.state.layout.split_ratio(),
        );
    }

    /// Main update loop that renders all UI panels and handles application state.
    ///
    /// 1. Apply background loading results
    /// 2. Apply theme
    /// 3. Load initial file if specified via command line
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader, ctx);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist preferences during frame (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            storage.set_string(
                "theme_preference",
                self.state.theme.current_theme_name().to_string(),
            );
            SettingsCoordinator::save_setting(
                storage,
                SPLIT_RATIO_KEY,
                &self.state.layout.split_ratio(),
            );
        }

        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        // Render all panels and get interaction result
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader)
        {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
