use eframe::egui::{self, Align2, Color32, FontId, RichText, ScrollArea, Sense, Stroke, Ui};

use exposure_viewer::color::{label_color, outline_for};
use exposure_viewer::state::AppState;

const NAME_WIDTH: f32 = 160.0;
const BAR_HEIGHT: f32 = 24.0;
const TRACK: Color32 = Color32::from_rgb(0xf3, 0xf4, 0xf6);

// ---------------------------------------------------------------------------
// Exposure rows (central panel)
// ---------------------------------------------------------------------------

/// One clickable bar per visible record, coloured by the global metric.
pub fn exposure_rows(ui: &mut Ui, state: &mut AppState) {
    let metric = state.options().metric;
    ui.heading(format!("{} – {}", state.options().dataset.label(), metric.label()));
    ui.add_space(4.0);

    let rows: Vec<(String, u8)> = state
        .visible_rows()
        .into_iter()
        .map(|r| (r.name.clone(), r.metric(metric)))
        .collect();

    if rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new("No matches").weak());
        });
        return;
    }

    let mut clicked = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (name, value) in &rows {
                let selected = state.display().is_selected(name);
                let color = state.color_for(*value, None).color();
                let response = ui
                    .horizontal(|ui: &mut Ui| {
                        let mut text = RichText::new(name);
                        if selected {
                            text = text.strong();
                        }
                        let label = ui.add_sized(
                            [NAME_WIDTH, BAR_HEIGHT],
                            egui::Label::new(text).truncate().sense(Sense::click()),
                        );
                        label.union(bar(ui, *value, color, selected))
                    })
                    .inner;
                if response.clicked() {
                    clicked = Some(name.clone());
                }
            }
        });

    if let Some(name) = clicked {
        state.select_or_toggle(&name);
    }
}

/// Horizontal bar: full-width track, filled to `value` percent, label at the end.
fn bar(ui: &mut Ui, value: u8, color: Color32, selected: bool) -> egui::Response {
    let width = ui.available_width().max(40.0);
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, BAR_HEIGHT), Sense::click());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 4.0, TRACK);

    let mut fill = rect;
    fill.set_width(rect.width() * f32::from(value.min(100)) / 100.0);
    painter.rect_filled(fill, 4.0, color);

    if selected {
        painter.rect_stroke(
            rect,
            4.0,
            Stroke::new(2.0, outline_for(color)),
            egui::StrokeKind::Inside,
        );
    }

    let text_pos = if value >= 15 {
        fill.right_center() - egui::vec2(8.0, 0.0)
    } else {
        fill.right_center() + egui::vec2(28.0, 0.0)
    };
    let text_color = if value >= 15 { label_color(value) } else { Color32::BLACK };
    painter.text(
        text_pos,
        Align2::RIGHT_CENTER,
        format!("{value}%"),
        FontId::proportional(13.0),
        text_color,
    );

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}
