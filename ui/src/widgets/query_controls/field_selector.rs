//! Field visibility selector.

use biblio_business::EntityField;
use egui::Ui;

/// One checkbox per entity field. Checking a field appends it to the
/// selection, so column order is the order fields were picked in.
pub fn field_selector<F: EntityField>(ui: &mut Ui, selected: &mut Vec<F>) {
    ui.horizontal_wrapped(|ui| {
        for &field in F::ALL {
            let mut checked = selected.contains(&field);
            if ui.checkbox(&mut checked, field.label()).changed() {
                if checked {
                    selected.push(field);
                } else {
                    selected.retain(|f| *f != field);
                }
            }
        }
    });
}
