use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::charts::RenderOptions;
use crate::data::filter::Selector;
use crate::data::loader::load_file;
use crate::state::DashboardState;
use crate::ui::plot::EguiRenderer;

// ---------------------------------------------------------------------------
// Left side panel – workout type selector
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut DashboardState) {
    ui.heading("Filters");
    ui.separator();

    let (Some(dataset), Some(view)) = (&state.dataset, state.view()) else {
        ui.label("No dataset loaded.");
        return;
    };

    let current = view.selector.label().to_string();
    let mut options = vec![Selector::ALL_LABEL.to_string()];
    options.extend(dataset.workout_types.iter().cloned());

    let mut picked = None;
    ui.strong("Workout type");
    egui::ComboBox::from_id_salt("workout_type")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for option in &options {
                if ui.selectable_label(current == *option, option).clicked() && current != *option {
                    picked = Some(option.clone());
                }
            }
        });

    if let Some(value) = picked {
        state.on_filter_change(&value);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut DashboardState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(view)) = (&state.dataset, state.view()) {
            ui.label(format!(
                "{} records loaded, {} shown",
                ds.len(),
                view.shown
            ));
        }

        ui.separator();

        let interactive = state.render_options.interactive;
        if ui.selectable_label(interactive, "Interactive").clicked() {
            state.render_options = RenderOptions {
                interactive: !interactive,
            };
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – the three charts
// ---------------------------------------------------------------------------

pub fn chart_panel(ui: &mut Ui, state: &DashboardState) {
    let Some(view) = state.view() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a fitness CSV to see the dashboard  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            view.render_all(&mut EguiRenderer::new(ui), &state.render_options);
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut DashboardState) {
    let file = rfd::FileDialog::new()
        .set_title("Open fitness data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Opening {}", path.display());
        state.on_load_complete(load_file(&path));
    }
}
