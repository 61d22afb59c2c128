use termdom::layout::measure;
use termdom::text::display_width;
use termdom::{Border, CheckState, Element, Role, Size, Style};

use crate::record::Record;

use super::{DataGrid, GridAction, RenderState};

/// Width of the checkbox column.
const CHECKBOX_WIDTH: u16 = 3;

/// Auto-sized columns never grow past this.
const MAX_AUTO_WIDTH: u16 = 40;

impl<T: Record> DataGrid<T> {
    pub(super) fn render(&self) -> Element {
        let state = self.render_state();
        log::trace!("[grid] {} render {state:?}", self.id);

        let mut table = Element::col().id(self.id.clone()).role(Role::Table);
        if let Some(class) = &self.class {
            table = table.class(class.clone());
        }

        if state == RenderState::Loading {
            return table.child(
                Element::text("Loading...")
                    .id(format!("{}-loading", self.id))
                    .role(Role::Status)
                    .style(Style::new().foreground(self.theme.text_muted)),
            );
        }

        let order = self.display_order();
        let cells: Vec<Vec<Element>> = order
            .iter()
            .enumerate()
            .map(|(display, &index)| {
                self.columns
                    .iter()
                    .map(|column| column.cell(&self.rows[index], display))
                    .collect()
            })
            .collect();
        let widths = self.column_widths(&cells);

        table = table.child(self.header_row(&widths));

        if state == RenderState::Empty {
            return table.child(
                Element::text(self.empty_message.clone())
                    .id(format!("{}-empty", self.id))
                    .style(Style::new().foreground(self.theme.text_muted)),
            );
        }

        for (display, (index, row_cells)) in order.into_iter().zip(cells).enumerate() {
            table = table.child(self.body_row(display, index, row_cells, &widths));
        }
        table
    }

    fn column_widths(&self, cells: &[Vec<Element>]) -> Vec<u16> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                if let Some(width) = column.width {
                    return width;
                }
                // Room for the sort arrow
                let title = (display_width(&column.title) as u16).saturating_add(2);
                cells
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| measure(cell).0)
                    .fold(title, u16::max)
                    .min(MAX_AUTO_WIDTH)
            })
            .collect()
    }

    fn header_row(&self, widths: &[u16]) -> Element {
        let mut header = Element::row()
            .id(format!("{}-header", self.id))
            .role(Role::Row)
            .gap(1)
            .style(
                Style::new()
                    .foreground(self.theme.text)
                    .border(Border::Bottom)
                    .border_color(self.theme.border)
                    .bold(),
            );

        if self.selectable {
            if self.multi_select {
                header = header.child(
                    Element::checkbox(self.select_all_state())
                        .id(GridAction::ToggleAll.target_id(&self.id))
                        .aria_label("Select all rows")
                        .style_focused(self.focus_style()),
                );
            } else {
                header = header.child(Element::box_().width(Size::Fixed(CHECKBOX_WIDTH)));
            }
        }

        for (column, &width) in self.columns.iter().zip(widths) {
            let direction = self.sort.direction_for(column.field);
            let label = match direction {
                Some(direction) => format!("{} {}", column.title, direction.arrow()),
                None => column.title.clone(),
            };

            let mut cell = Element::text(label)
                .id(GridAction::Sort(column.key.clone()).target_id(&self.id))
                .role(Role::ColumnHeader)
                .width(Size::Fixed(width));
            if column.sortable {
                cell = cell
                    .focusable(true)
                    .clickable(true)
                    .sort(direction.map(Into::into))
                    .style_focused(self.focus_style());
            }
            header = header.child(cell);
        }
        header
    }

    fn body_row(&self, display: usize, index: usize, cells: Vec<Element>, widths: &[u16]) -> Element {
        let key = self.row_key(&self.rows[index], index);
        let selected = self.selectable && self.is_selected(&key);

        let mut style = Style::new().foreground(self.theme.text);
        if selected {
            style = style.background(self.theme.selected);
        }
        let mut row = Element::row()
            .id(format!("{}-row-{display}", self.id))
            .role(Role::Row)
            .gap(1)
            .style(style)
            .data("key", key.to_string());

        if self.selectable {
            let state = if selected {
                CheckState::Checked
            } else {
                CheckState::Unchecked
            };
            row = row.child(
                Element::checkbox(state)
                    .id(GridAction::ToggleRow(display).target_id(&self.id))
                    .aria_label(format!("Select row {}", display + 1))
                    .style_focused(self.focus_style()),
            );
        }

        for (content, &width) in cells.into_iter().zip(widths) {
            row = row.child(
                Element::row()
                    .role(Role::Cell)
                    .width(Size::Fixed(width))
                    .child(content),
            );
        }
        row
    }

    fn focus_style(&self) -> Style {
        Style::new().foreground(self.theme.primary).reversed()
    }
}
