use eframe::egui::{self, Color32, RichText, Sense, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::normalize::BlankPolicy;
use crate::projection::LayoutKind;
use crate::state::AppState;
use crate::style::{ClassStyle, MarkerShape, Rgb, SHAPE_PALETTE};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        egui::ComboBox::from_id_salt("layout_kind")
            .selected_text(state.layout.label())
            .show_ui(ui, |ui: &mut Ui| {
                for layout in LayoutKind::ALL {
                    if ui
                        .selectable_label(state.layout == layout, layout.label())
                        .clicked()
                    {
                        state.layout = layout;
                    }
                }
            });

        ui.separator();

        let tolerant = state.blank_policy == BlankPolicy::Tolerant;
        if ui
            .selectable_label(tolerant, "Skip blank cells")
            .on_hover_text(
                "On: blank cells are left out of the range and their rows are not drawn. \
                 Off: a single blank cell makes the whole column categorical.",
            )
            .clicked()
        {
            state.blank_policy = if tolerant {
                BlankPolicy::Strict
            } else {
                BlankPolicy::Tolerant
            };
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows × {} columns, {} selected",
                ds.len(),
                ds.column_count(),
                state.selection.len()
            ));
        }

        if !state.selection.is_empty() && ui.small_button("Clear selection").clicked() {
            state.clear_selection();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – legend, column order, row table
// ---------------------------------------------------------------------------

/// Render the left data panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = state.dataset.as_ref() else {
        ui.label("No dataset loaded.");
        return;
    };

    let n_rows = dataset.len();
    let column_names = dataset.column_names.clone();
    let legend: Vec<(String, ClassStyle)> = state.registry.legend_entries().to_vec();

    // Mutations are collected while the dataset is borrowed and applied at
    // the end of the frame.
    let mut override_request: Option<(String, ClassStyle)> = None;
    let mut move_request: Option<(usize, isize)> = None;
    let mut clicked_row: Option<usize> = None;

    egui::CollapsingHeader::new(RichText::new("Classes").strong())
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            if legend.is_empty() {
                ui.label("No class column.");
            }
            for (label, style) in &legend {
                ui.horizontal(|ui: &mut Ui| {
                    let mut rgb = [style.color.r, style.color.g, style.color.b];
                    if ui.color_edit_button_srgb(&mut rgb).changed() {
                        override_request = Some((
                            label.clone(),
                            ClassStyle {
                                color: Rgb::new(rgb[0], rgb[1], rgb[2]),
                                shape: style.shape,
                            },
                        ));
                    }
                    egui::ComboBox::from_id_salt(("class_shape", label))
                        .selected_text(shape_name(style.shape))
                        .show_ui(ui, |ui: &mut Ui| {
                            for shape in SHAPE_PALETTE {
                                if ui
                                    .selectable_label(style.shape == shape, shape_name(shape))
                                    .clicked()
                                {
                                    override_request = Some((
                                        label.clone(),
                                        ClassStyle {
                                            color: style.color,
                                            shape,
                                        },
                                    ));
                                }
                            }
                        });
                    if label.is_empty() {
                        ui.label(RichText::new("(unlabeled)").italics());
                    } else {
                        ui.label(label);
                    }
                });
            }
        });

    egui::CollapsingHeader::new(RichText::new("Column order").strong())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            for (pos, &col) in state.column_order.iter().enumerate() {
                ui.horizontal(|ui: &mut Ui| {
                    if ui.small_button("⬆").clicked() {
                        move_request = Some((pos, -1));
                    }
                    if ui.small_button("⬇").clicked() {
                        move_request = Some((pos, 1));
                    }
                    let name = column_names.get(col).map(String::as_str).unwrap_or("?");
                    ui.label(name);
                });
            }
        });

    ui.separator();
    ui.strong("Rows");
    ui.label("Click a row to toggle its selection.");

    TableBuilder::new(ui)
        .striped(true)
        .sense(Sense::click())
        .columns(Column::auto().at_least(40.0), state.column_order.len())
        .header(18.0, |mut header| {
            for &col in &state.column_order {
                header.col(|ui: &mut Ui| {
                    let name = column_names.get(col).map(String::as_str).unwrap_or("?");
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, n_rows, |mut row| {
                let idx = row.index();
                row.set_selected(state.selection.contains(&idx));
                for &col in &state.column_order {
                    row.col(|ui: &mut Ui| {
                        ui.label(dataset.cell(idx, col).unwrap_or(""));
                    });
                }
                if row.response().clicked() {
                    clicked_row = Some(idx);
                }
            });
        });

    if let Some((label, style)) = override_request {
        state.set_override(&label, style);
    }
    if let Some((pos, delta)) = move_request {
        state.move_column(pos, delta);
    }
    if let Some(row) = clicked_row {
        state.toggle_row_selection(row);
    }
}

fn shape_name(shape: MarkerShape) -> &'static str {
    match shape {
        MarkerShape::Circle => "circle",
        MarkerShape::Square => "square",
        MarkerShape::Triangle => "triangle",
        MarkerShape::Star4 => "4-point star",
        MarkerShape::Star5 => "5-point star",
        MarkerShape::Star6 => "6-point star",
        MarkerShape::Star7 => "7-point star",
        MarkerShape::Star8 => "8-point star",
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open tabular data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.len(),
                    dataset.column_names
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
