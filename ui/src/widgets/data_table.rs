//! Generic list table.
//!
//! Columns are driven by the page's current field selection (insertion order
//! is column order), with an optional trailing Actions column holding an
//! Edit button per row.

use biblio_business::EntityField;
use egui::Ui;
use egui_extras::{Column, TableBuilder};

pub const ROW_HEIGHT: f32 = 26.0;
pub const HEADER_HEIGHT: f32 = 24.0;
pub const ACTIONS_WIDTH: f32 = 80.0;

/// Renders the table. `cell_text` resolves the display text of one cell;
/// `on_edit` receives the row index when its Edit button is clicked. Pass
/// `on_edit: None` for read-only tables.
pub fn data_table<F: EntityField>(
    ui: &mut Ui,
    id_salt: &str,
    selected_fields: &[F],
    row_count: usize,
    mut cell_text: impl FnMut(usize, F) -> String,
    mut on_edit: Option<&mut dyn FnMut(usize)>,
) {
    let mut builder = TableBuilder::new(ui)
        .id_salt(id_salt)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));

    for _ in selected_fields {
        builder = builder.column(Column::remainder().at_least(60.0));
    }
    if on_edit.is_some() {
        builder = builder.column(Column::exact(ACTIONS_WIDTH));
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            for field in selected_fields {
                header.col(|ui| {
                    ui.strong(field.as_str().to_uppercase());
                });
            }
            if on_edit.is_some() {
                header.col(|ui| {
                    ui.strong("ACTIONS");
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, row_count, |mut row| {
                let index = row.index();
                for field in selected_fields {
                    row.col(|ui| {
                        ui.label(cell_text(index, *field));
                    });
                }
                if let Some(on_edit) = on_edit.as_deref_mut() {
                    row.col(|ui| {
                        if ui.small_button("Edit").clicked() {
                            on_edit(index);
                        }
                    });
                }
            });
        });
}
