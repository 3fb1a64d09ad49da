#![forbid(unsafe_code)]

//! The demo scene: a framed box with labels on each side, a status tag in
//! its corner and a tab-aligned table in the top-left of the canvas.

use anchortext_core::geometry::{Point, Rect, Size};
use anchortext_layout::Corner;
use anchortext_layout::positioner::{center_sized, corner_uniform};
use anchortext_render::{Result, TextPainter, Widget};
use anchortext_text::MonospaceMetrics;

use crate::canvas::CellCanvas;
use crate::cli::Opts;

/// Text of the corner tag.
const TAG: &str = "ok";

/// Box placement for a canvas: half the width and a third of the height,
/// centered.
#[must_use]
pub fn frame_rect(area: Rect) -> Rect {
    center_sized(area, (area.width / 2).max(2), (area.height / 3).max(2))
}

/// Draw the scene described by `opts` and return the finished canvas.
///
/// # Errors
///
/// Propagates [`anchortext_render::RenderError`] from the draw pass.
pub fn draw(opts: &Opts) -> Result<CellCanvas> {
    let canvas = CellCanvas::new(opts.cols, opts.rows);
    let area = canvas.area();
    let mut painter = TextPainter::with_tab_setting(MonospaceMetrics::cells(), canvas, &opts.tab);

    let frame = frame_rect(area);
    painter.sink_mut().draw_frame(frame);
    let widget = Widget::new(frame);

    let table = format!("key\tvalue\ncols\t{}\nrows\t{}", opts.cols, opts.rows);
    painter.draw_formatted_lines(&table, 1, -1)?;

    painter.top_text_of(&opts.label, &widget)?;
    painter.left_text_of("left", &widget)?;
    painter.right_text_of("right", &widget)?;
    painter.bottom_text_of("bottom", &widget)?;

    let tag = corner_uniform(
        frame,
        Size::new(painter.width(TAG), painter.line_height()),
        Corner::BottomRight,
        1,
    );
    painter.draw_lines([TAG], Point::new(tag.x, tag.y));

    tracing::info!(
        cols = opts.cols,
        rows = opts.rows,
        frame_x = frame.x,
        frame_y = frame.y,
        "scene drawn"
    );
    let (_, canvas) = painter.into_parts();
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchortext_text::TabSetting;
    use tracing_test::traced_test;

    fn row(canvas: &CellCanvas, row: u16) -> String {
        canvas.row_text(row)
    }

    #[test]
    fn frame_is_centered() {
        assert_eq!(frame_rect(Rect::new(0, 0, 60, 16)), Rect::new(15, 6, 30, 5));
    }

    #[test]
    fn default_scene_layout() {
        let canvas = draw(&Opts::default()).unwrap();
        // Table drawn one line below y = -1, with 8-cell tabs.
        assert_eq!(row(&canvas, 0), " key     value");
        assert_eq!(row(&canvas, 1), " cols    60");
        assert_eq!(row(&canvas, 2), " rows    16");
        // Label centered above the frame.
        assert_eq!(&row(&canvas, 5)[25..], "anchortext");
        // Side labels on the frame's middle row.
        let middle = row(&canvas, 8);
        assert_eq!(&middle[11..15], "left");
        assert_eq!(&middle[45..], "right");
        // Tag inside the bottom-right corner, bottom label under the frame.
        assert_eq!(&row(&canvas, 9)[42..44], "ok");
        assert_eq!(row(&canvas, 11), format!("{}bottom", " ".repeat(15)));
    }

    #[test]
    fn frame_is_drawn() {
        let canvas = draw(&Opts::default()).unwrap();
        assert_eq!(canvas.get(15, 6), Some('+'));
        assert_eq!(canvas.get(44, 10), Some('+'));
        assert_eq!(canvas.get(20, 6), Some('-'));
        assert_eq!(canvas.get(15, 8), Some('|'));
    }

    #[test]
    fn measured_tabs_use_font_width() {
        let opts = Opts {
            tab: TabSetting::Measured,
            ..Opts::default()
        };
        let canvas = draw(&opts).unwrap();
        // Measured tab length on a cell grid is 4.
        assert_eq!(row(&canvas, 0), " key value");
        assert_eq!(row(&canvas, 1), " cols    60");
    }

    #[test]
    fn tiny_canvas_clips_without_error() {
        let opts = Opts {
            cols: 3,
            rows: 2,
            ..Opts::default()
        };
        let canvas = draw(&opts).unwrap();
        assert_eq!(canvas.rows(), 2);
    }

    #[test]
    #[traced_test]
    fn logs_scene() {
        let _ = draw(&Opts::default());
        assert!(logs_contain("scene drawn"));
    }
}
