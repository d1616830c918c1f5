//! CPU-side glyph mesh building.
//!
//! Headline text becomes two triangle lists in text-local space: filled
//! cell quads, and thin boundary quads tracing the letterforms (the
//! outline that stays visible when no light faces the text). The block is
//! centered on its origin both ways; the model transform does the rest.

use crate::font::{cell_on, glyph, GLYPH_COLS, GLYPH_ROWS};
use limelight_core::constants::{
    TEXT_FONT_SIZE, TEXT_LETTER_SPACING, TEXT_LINE_HEIGHT, TEXT_MAX_WIDTH, TEXT_OUTLINE_WIDTH,
};
use limelight_core::types::TextAlign;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TextVertex {
    pub position: [f32; 3],
}

/// Triangle-list geometry for one text block.
pub struct TextMesh {
    pub fill_vertices: Vec<TextVertex>,
    pub outline_vertices: Vec<TextVertex>,
}

fn cell_size() -> f32 {
    TEXT_FONT_SIZE / GLYPH_ROWS as f32
}

fn glyph_advance() -> f32 {
    GLYPH_COLS as f32 * cell_size() + TEXT_LETTER_SPACING
}

fn word_width(word: &str) -> f32 {
    let n = word.chars().count() as f32;
    (n * glyph_advance() - TEXT_LETTER_SPACING).max(0.0)
}

struct LineLayout<'a> {
    words: Vec<&'a str>,
    width: f32,
}

/// Greedy word wrap within `max_width`. Explicit newlines always break;
/// a word wider than the limit gets its own line rather than splitting.
fn wrap(text: &str, max_width: f32) -> Vec<LineLayout<'_>> {
    let space = glyph_advance();
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current: Vec<&str> = Vec::new();
        let mut width = 0.0;
        for word in paragraph.split_whitespace() {
            let w = word_width(word);
            let extended = if current.is_empty() { w } else { width + space + w };
            if !current.is_empty() && extended > max_width {
                lines.push(LineLayout {
                    words: std::mem::take(&mut current),
                    width,
                });
                width = w;
            } else {
                width = extended;
            }
            current.push(word);
        }
        if !current.is_empty() {
            lines.push(LineLayout {
                words: current,
                width,
            });
        }
    }
    lines
}

fn push_quad(out: &mut Vec<TextVertex>, x0: f32, y0: f32, x1: f32, y1: f32) {
    let v = |x: f32, y: f32| TextVertex {
        position: [x, y, 0.0],
    };
    out.push(v(x0, y0));
    out.push(v(x1, y0));
    out.push(v(x1, y1));
    out.push(v(x0, y0));
    out.push(v(x1, y1));
    out.push(v(x0, y1));
}

/// A boundary edge becomes a thin quad centered on the edge.
fn push_edge(out: &mut Vec<TextVertex>, ax: f32, ay: f32, bx: f32, by: f32) {
    let half = TEXT_OUTLINE_WIDTH / 2.0;
    if (ay - by).abs() < f32::EPSILON {
        // Horizontal edge
        push_quad(out, ax.min(bx), ay - half, ax.max(bx), ay + half);
    } else {
        // Vertical edge
        push_quad(out, ax - half, ay.min(by), ax + half, ay.max(by));
    }
}

/// Build the fill and outline meshes for a text block.
pub fn build_text_mesh(text: &str, align: TextAlign) -> TextMesh {
    build_text_mesh_with_width(text, align, TEXT_MAX_WIDTH)
}

pub fn build_text_mesh_with_width(text: &str, align: TextAlign, max_width: f32) -> TextMesh {
    let cell = cell_size();
    let advance = glyph_advance();
    let space = advance;
    let line_h = TEXT_FONT_SIZE * TEXT_LINE_HEIGHT;

    let lines = wrap(text, max_width);
    let box_w = lines.iter().map(|l| l.width).fold(0.0, f32::max);
    let total_h = lines.len() as f32 * line_h;

    let mut fill = Vec::new();
    let mut outline = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let top = total_h / 2.0 - i as f32 * line_h - (line_h - TEXT_FONT_SIZE) / 2.0;
        let last = i + 1 == lines.len();
        let gaps = line.words.len().saturating_sub(1) as f32;

        let (mut pen, gap) = match align {
            TextAlign::Left => (-box_w / 2.0, space),
            TextAlign::Right => (box_w / 2.0 - line.width, space),
            TextAlign::Center => (-line.width / 2.0, space),
            TextAlign::Justify if gaps > 0.0 && !last => {
                (-box_w / 2.0, space + (box_w - line.width) / gaps)
            }
            TextAlign::Justify => (-box_w / 2.0, space),
        };

        for (w, word) in line.words.iter().enumerate() {
            if w > 0 {
                pen += gap;
            }
            for c in word.chars() {
                if let Some(rows) = glyph(c) {
                    for row in 0..GLYPH_ROWS {
                        for col in 0..GLYPH_COLS {
                            if !cell_on(rows, col, row) {
                                continue;
                            }
                            let x0 = pen + col as f32 * cell;
                            let x1 = x0 + cell;
                            let y1 = top - row as f32 * cell;
                            let y0 = y1 - cell;
                            push_quad(&mut fill, x0, y0, x1, y1);

                            if col == 0 || !cell_on(rows, col - 1, row) {
                                push_edge(&mut outline, x0, y0, x0, y1);
                            }
                            if !cell_on(rows, col + 1, row) {
                                push_edge(&mut outline, x1, y0, x1, y1);
                            }
                            if row == 0 || !cell_on(rows, col, row - 1) {
                                push_edge(&mut outline, x0, y1, x1, y1);
                            }
                            if !cell_on(rows, col, row + 1) {
                                push_edge(&mut outline, x0, y0, x1, y0);
                            }
                        }
                    }
                }
                pen += advance;
            }
            pen -= TEXT_LETTER_SPACING;
        }
    }

    TextMesh {
        fill_vertices: fill,
        outline_vertices: outline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(vertices: &[TextVertex]) -> (f32, f32, f32, f32) {
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (f32::MAX, f32::MIN, f32::MAX, f32::MIN);
        for v in vertices {
            min_x = min_x.min(v.position[0]);
            max_x = max_x.max(v.position[0]);
            min_y = min_y.min(v.position[1]);
            max_y = max_y.max(v.position[1]);
        }
        (min_x, max_x, min_y, max_y)
    }

    #[test]
    fn test_fill_quad_count_matches_glyph_cells() {
        // 'I' has 11 on cells, each a 6-vertex quad
        let mesh = build_text_mesh("I", TextAlign::Left);
        assert_eq!(mesh.fill_vertices.len(), 11 * 6);
    }

    #[test]
    fn test_outline_follows_cell_boundaries() {
        // The I-beam has 24 boundary edges (44 cell edges, 10 shared)
        let mesh = build_text_mesh("I", TextAlign::Left);
        assert_eq!(mesh.outline_vertices.len(), 24 * 6);
    }

    #[test]
    fn test_unknown_characters_render_blank() {
        let mesh = build_text_mesh("@#!", TextAlign::Left);
        assert!(mesh.fill_vertices.is_empty());
        assert!(mesh.outline_vertices.is_empty());
    }

    #[test]
    fn test_block_is_centered() {
        let mesh = build_text_mesh_with_width("OO", TextAlign::Center, 10.0);
        let (min_x, max_x, min_y, max_y) = bounds(&mesh.fill_vertices);
        assert!((min_x + max_x).abs() < 1e-5);
        assert!((min_y + max_y).abs() < 1e-5);
    }

    #[test]
    fn test_narrow_wrap_stacks_each_word() {
        // Default wrap width is narrower than one glyph
        let single = build_text_mesh("HI", TextAlign::Center);
        let stacked = build_text_mesh("HI HI", TextAlign::Center);
        let (_, _, s_min_y, s_max_y) = bounds(&single.fill_vertices);
        let (_, _, d_min_y, d_max_y) = bounds(&stacked.fill_vertices);
        let line_h = TEXT_FONT_SIZE * TEXT_LINE_HEIGHT;
        assert!((s_max_y - s_min_y) < line_h + 1e-5);
        assert!((d_max_y - d_min_y) > line_h, "two words should stack");
    }

    #[test]
    fn test_left_and_right_alignment_offsets() {
        // Two explicit lines of different widths; 'L' fills its leftmost
        // column on rows above the baseline, so the line edge is exact
        let left = build_text_mesh_with_width("L\nAM", TextAlign::Left, 10.0);
        let right = build_text_mesh_with_width("L\nAM", TextAlign::Right, 10.0);

        // The two lines meet at y = 0; keep clear of rounding there
        let top_line_min_x = |mesh: &TextMesh| {
            mesh.fill_vertices
                .iter()
                .filter(|v| v.position[1] > 0.01)
                .map(|v| v.position[0])
                .fold(f32::MAX, f32::min)
        };

        let (box_min, box_max, _, _) = bounds(&left.fill_vertices);
        let box_w = box_max - box_min;
        let narrow_w = word_width("L");

        assert!((top_line_min_x(&left) - (-box_w / 2.0)).abs() < 1e-5);
        assert!((top_line_min_x(&right) - (box_w / 2.0 - narrow_w)).abs() < 1e-5);
    }

    #[test]
    fn test_justify_stretches_non_final_lines() {
        let justified = build_text_mesh_with_width("GO ON\nFARTHER", TextAlign::Justify, 10.0);
        let flush = build_text_mesh_with_width("GO ON\nFARTHER", TextAlign::Left, 10.0);

        let top_line_max_x = |mesh: &TextMesh| {
            mesh.fill_vertices
                .iter()
                .filter(|v| v.position[1] > 0.01)
                .map(|v| v.position[0])
                .fold(f32::MIN, f32::max)
        };

        let (_, box_max, _, _) = bounds(&justified.fill_vertices);
        assert!((top_line_max_x(&justified) - box_max).abs() < 1e-4);
        assert!(top_line_max_x(&flush) < top_line_max_x(&justified));
    }

    #[test]
    fn test_single_word_justify_falls_back_to_flush_left() {
        let justified = build_text_mesh_with_width("SOLO\nLINES", TextAlign::Justify, 10.0);
        let left = build_text_mesh_with_width("SOLO\nLINES", TextAlign::Left, 10.0);
        assert_eq!(justified.fill_vertices, left.fill_vertices);
    }
}
