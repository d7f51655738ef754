//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches on the session's current screen. The drill word is drawn
//! cell by cell so overlapping glyphs can share columns.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::drill::Glyph;
use crate::fireworks::Particle;
use crate::session::{FINISHED_TEXT, Notice, RenderState, Screen};

use super::state::{App, MenuItem};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render<S>(app: &App<S>, frame: &mut Frame)
where
    S: crate::store::KeyValueStore,
{
    let area = frame.area();
    let screen = app.session.screen();

    // Common layout: title, content, notice, help
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // notice
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(screen), chunks[0]);
    frame.render_widget(render_help(screen), chunks[3]);
    if let Some(notice) = app.session.notice() {
        frame.render_widget(render_notice(notice), chunks[2]);
    }

    let content_area = chunks[1];
    match screen {
        Screen::Menu => render_menu(app.ui.menu_cursor, app.session.words().len(), frame, content_area),
        Screen::Editor => render_editor(
            &app.ui.input,
            app.session.editor_list(),
            app.ui.list_cursor,
            frame,
            content_area,
        ),
        Screen::Drill => render_drill(&app.session.render_state(), &app.sparks, frame, content_area),
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(screen: Screen) -> Paragraph<'static> {
    let title_text = match screen {
        Screen::Menu => "글겹",
        Screen::Editor => "제작",
        Screen::Drill => "연습",
    };

    Paragraph::new(Line::from(vec![Span::styled(title_text, theme::STYLE_TITLE)]))
}

fn render_help(screen: Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Menu => "[j/k] move  [Enter] select  [1] start  [2] words  [q] quit",
        Screen::Editor => "[Enter] add  [↑/↓] move  [Del] remove  [^S] save  [Esc] back",
        Screen::Drill => "[→] next  [←] prev  [r] reveal  [Esc] menu  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn render_notice(notice: &Notice) -> Paragraph<'static> {
    let style = match notice {
        Notice::EmptyWordList => theme::STYLE_WARNING,
        Notice::SaveFailed(_) => theme::STYLE_DANGER,
    };
    Paragraph::new(Span::styled(format!("  {}", notice.message()), style))
}

// ============================================================================
// SCREEN: MENU
// ============================================================================

fn render_menu(cursor: usize, word_count: usize, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  글자 겹침 읽기", theme::STYLE_TITLE)),
        Line::from(""),
    ];

    for (i, item) in MenuItem::ALL.iter().enumerate() {
        let line = Line::from(vec![
            Span::styled(format!("  [{}] ", i + 1), theme::STYLE_INTERACTIVE),
            Span::raw(item.label()),
        ]);
        lines.push(if i == cursor {
            line.style(theme::STYLE_CURSOR)
        } else {
            line
        });
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  저장된 단어: {}개", word_count),
        theme::STYLE_DIM,
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

// ============================================================================
// SCREEN: EDITOR
// ============================================================================

fn render_editor(input: &str, words: &[String], cursor: usize, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(2), // input + spacer
        Constraint::Min(0),    // list
    ])
    .split(area);

    let input_line = Line::from(vec![
        Span::styled("  단어: ", theme::STYLE_INTERACTIVE),
        Span::styled(input.to_string(), theme::STYLE_INPUT),
        Span::styled("_", theme::STYLE_DIM),
    ]);
    frame.render_widget(Paragraph::new(input_line), chunks[0]);

    let mut lines: Vec<Line> = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let line = Line::from(vec![
                Span::styled(format!("  {:>3}. ", i + 1), theme::STYLE_DIM),
                Span::raw(word.clone()),
                Span::styled("  x", theme::STYLE_DIM),
            ]);
            if i == cursor {
                line.style(theme::STYLE_CURSOR)
            } else {
                line
            }
        })
        .collect();

    if words.is_empty() {
        lines.push(Line::from(Span::styled("  (단어 없음)", theme::STYLE_DIM)));
    }

    // Scroll: keep the cursor row visible
    let visible_height = chunks[1].height as usize;
    let scroll_offset = if cursor >= visible_height {
        cursor - visible_height + 1
    } else {
        0
    };

    let list = Paragraph::new(lines).scroll((scroll_offset as u16, 0));
    frame.render_widget(list, chunks[1]);
}

// ============================================================================
// SCREEN: DRILL
// ============================================================================

fn render_drill(state: &RenderState, sparks: &[Particle], frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // counters
        Constraint::Min(3),    // word stage
        Constraint::Length(1), // controls
    ])
    .split(area);

    if let (Some(question), Some(stage)) = (state.question_label(), state.stage_label()) {
        let counters = Line::from(vec![
            Span::styled(format!("  {}", question), theme::STYLE_COUNTER),
            Span::raw("   "),
            Span::styled(stage, theme::STYLE_COUNTER),
        ]);
        frame.render_widget(Paragraph::new(counters), chunks[0]);
    }

    let stage_area = chunks[1];
    let buf = frame.buffer_mut();
    draw_sparks(sparks, stage_area, buf);
    if state.finished {
        draw_centered_text(FINISHED_TEXT, stage_area, buf);
    } else {
        draw_glyphs(&state.glyphs, state.widest, stage_area, buf);
    }

    frame.render_widget(Paragraph::new(render_controls(state)), chunks[2]);
}

fn render_controls(state: &RenderState) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    if state.show_back {
        spans.push(Span::styled("[←] ", theme::STYLE_INTERACTIVE));
        spans.push(Span::raw("이전   "));
    }
    spans.push(Span::styled("[→] ", theme::STYLE_INTERACTIVE));
    spans.push(Span::raw(state.next_label.text()));
    if state.show_reveal {
        spans.push(Span::styled("   [r] ", theme::STYLE_INTERACTIVE));
        spans.push(Span::raw("정답"));
    }
    if !state.finished {
        spans.push(Span::styled("   [Esc] ", theme::STYLE_INTERACTIVE));
        spans.push(Span::raw("메인"));
    }
    Line::from(spans)
}

/// Display width of one character in terminal cells (1 or 2).
fn cell_width(ch: char) -> u16 {
    Span::raw(ch.to_string()).width().max(1) as u16
}

/// Upper bound on the horizontal stretch of a character-width unit.
/// At five steps per unit the 0.1 gaps between stage multipliers still
/// move a two-cell glyph by a whole column.
pub const MAX_STRETCH: f64 = 5.0;

/// Columns per character-width step for a word, as large as
/// [`MAX_STRETCH`] while the word still fits `width` at its widest stage.
pub fn stretch_for(glyphs: &[Glyph], widest: f64, width: u16) -> f64 {
    let glyph_width = glyphs.iter().map(|g| cell_width(g.ch)).max().unwrap_or(1) as f64;
    let span = (glyphs.len().saturating_sub(1)) as f64 * widest * glyph_width;
    if span <= 0.0 {
        return MAX_STRETCH;
    }
    ((width as f64 - glyph_width) / span).clamp(1.0, MAX_STRETCH)
}

/// Leftmost column of each glyph, for a word centered on `center_x`.
///
/// One character-width unit is the glyph's own display width times
/// `stretch`; with a stretch of 1.0 a multiplier of 1.0 sets characters
/// side by side.
pub fn glyph_columns(glyphs: &[Glyph], center_x: i32, stretch: f64) -> Vec<(i32, char)> {
    glyphs
        .iter()
        .map(|g| {
            let width = cell_width(g.ch) as f64;
            let left = center_x as f64 + g.offset * width * stretch - width / 2.0;
            (left.round() as i32, g.ch)
        })
        .collect()
}

fn draw_glyphs(glyphs: &[Glyph], widest: f64, area: Rect, buf: &mut Buffer) {
    let center_x = area.x as i32 + area.width as i32 / 2;
    let y = area.y + area.height / 2;
    let stretch = stretch_for(glyphs, widest, area.width);
    // Later glyphs overwrite earlier ones where they overlap.
    for (x, ch) in glyph_columns(glyphs, center_x, stretch) {
        put_char(buf, area, x, y as i32, ch, theme::STYLE_WORD);
    }
}

fn draw_centered_text(text: &str, area: Rect, buf: &mut Buffer) {
    let width = Span::raw(text).width() as i32;
    let x = area.x as i32 + (area.width as i32 - width) / 2;
    let y = area.y + area.height / 2;
    if area.height > 0 && x >= area.x as i32 {
        buf.set_string(x as u16, y, text, theme::STYLE_WORD);
    }
}

fn draw_sparks(sparks: &[Particle], area: Rect, buf: &mut Buffer) {
    let center_x = area.x as i32 + area.width as i32 / 2;
    let center_y = area.y as i32 + area.height as i32 / 2;
    for spark in sparks {
        let (dx, dy) = spark.cell_offset();
        put_char(buf, area, center_x + dx, center_y + dy, '*', Style::new().fg(spark.color));
    }
}

/// Write one character if it fits entirely inside `area`.
fn put_char(buf: &mut Buffer, area: Rect, x: i32, y: i32, ch: char, style: Style) {
    let width = cell_width(ch) as i32;
    let inside_x = x >= area.x as i32 && x + width <= (area.x + area.width) as i32;
    let inside_y = y >= area.y as i32 && y < (area.y + area.height) as i32;
    if inside_x && inside_y {
        buf.set_string(x as u16, y as u16, ch.to_string(), style);
    }
}

// ============================================================================
// TESTS
// ============================================================================
