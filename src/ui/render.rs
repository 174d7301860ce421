use crate::ui::app::App;
use crate::ui::detail::render_detail_modal;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::table::render_table;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let table = app.table();

    frame.render_widget(Header::new(app.source()).widget(table), header);
    frame.render_widget(Clear, body);
    render_table(frame, body, table);
    frame.render_widget(Footer::new(table.is_modal_open()).widget(footer), footer);

    if let Some(detail) = table.open_detail() {
        render_detail_modal(frame, detail);
    }
}
