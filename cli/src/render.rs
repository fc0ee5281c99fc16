//! Terminal rendering of the view state.

use colored::{Color, Colorize};
use notes_core::{Category, Note};

use crate::commands::format_timestamp;
use crate::view::{Theme, ViewState};

/// Colours used for one theme.
struct Palette {
    heading: Color,
    label: Color,
    text: Color,
    muted: Color,
    accent: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            heading: Color::Blue,
            label: Color::Cyan,
            text: Color::Black,
            muted: Color::BrightBlack,
            accent: Color::Magenta,
        },
        Theme::Dark => Palette {
            heading: Color::BrightYellow,
            label: Color::BrightCyan,
            text: Color::BrightWhite,
            muted: Color::White,
            accent: Color::BrightMagenta,
        },
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Work => Color::Blue,
        Category::Personal => Color::Green,
        Category::Ideas => Color::Magenta,
        Category::Others => Color::BrightBlack,
    }
}

fn render_note(out: &mut String, index: usize, note: &Note, p: &Palette) {
    out.push_str(&format!(
        "  {:>2}. {} {}\n",
        index,
        note.title.color(p.text).bold(),
        format!("[{}]", note.category).color(category_color(note.category))
    ));
    for line in note.content.lines() {
        out.push_str(&format!("      {}\n", line.color(p.text)));
    }
    out.push_str(&format!(
        "      {}\n",
        format_timestamp(&note.created_at).color(p.muted)
    ));
}

/// Render the whole view.
pub fn render(state: &ViewState) -> String {
    let p = palette(state.theme);
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Notes".color(p.heading).bold()));
    out.push_str(&format!(
        "{} {}   {} {}\n",
        "Search:".color(p.label),
        if state.filter.query.is_empty() {
            "-".to_string()
        } else {
            state.filter.query.clone()
        },
        "Category:".color(p.label),
        state.filter.category
    ));

    if let Some(status) = status_line(state) {
        out.push_str(&format!("{}\n", status.color(p.muted)));
    }

    if let Some(error) = &state.error {
        out.push_str(&format!("{}", error.red().bold()));
        if state.can_retry {
            out.push_str(&format!("  {}", "(type 'retry')".color(p.muted)));
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!("{}\n", "Form".color(p.accent).bold()));
    out.push_str(&format!("  {} {}\n", "Title:".color(p.label), state.draft.title));
    out.push_str(&format!("  {} {}\n", "Content:".color(p.label), state.draft.content));
    out.push_str(&format!(
        "  {} {}\n",
        "Category:".color(p.label),
        state
            .draft
            .category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "(select)".to_string())
    ));
    out.push_str(&format!("  [{}]\n", state.submit_label().color(p.accent)));

    out.push('\n');
    let visible = state.visible_notes();
    if visible.is_empty() {
        out.push_str(&format!("  {}\n", "(No notes)".color(p.muted)));
    }
    for (i, note) in visible.iter().enumerate() {
        render_note(&mut out, i + 1, note, &p);
    }

    if state.confirm_delete.is_some() {
        out.push('\n');
        out.push_str(&format!(
            "{} {}\n",
            "Are you sure you want to delete?".yellow().bold(),
            "[yes/no]".color(p.muted)
        ));
    }

    out
}

/// Loading indicator text, if a request is in flight.
pub fn status_line(state: &ViewState) -> Option<&'static str> {
    state.loading.then_some("Loading...")
}
