use crate::app::{App, GridLayout, ScreenState};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use wordsearch_core::Position;

pub fn render<W: Write>(out: &mut W, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = app.term_size;

    execute!(out, Hide)?;

    match app.screen_state {
        // Redraws every cell, so no clear
        ScreenState::Win => render_win_screen(out, app, term_width, term_height)?,
        ScreenState::Playing => {
            queue!(
                out,
                SetBackgroundColor(app.theme.bg),
                Clear(ClearType::All)
            )?;
            render_game_screen(out, app, term_width)?;
        }
    }

    queue!(out, SetAttribute(Attribute::Reset))?;
    execute!(out, Show)?;
    Ok(())
}

fn render_game_screen<W: Write>(out: &mut W, app: &App, term_width: u16) -> io::Result<()> {
    let layout = app.layout();

    render_grid(out, app, &layout)?;

    let panel_x = layout.x + layout.width() + 3;
    render_word_list(out, app, panel_x, layout.y)?;

    let controls_y = layout.y + layout.height() + 1;
    render_controls(out, app, layout.x, controls_y)?;

    if let Some(ref msg) = app.message {
        render_message(out, app, msg, term_width)?;
    }

    Ok(())
}

fn render_grid<W: Write>(out: &mut W, app: &App, layout: &GridLayout) -> io::Result<()> {
    let theme = &app.theme;
    let inner = "─".repeat(layout.size * GridLayout::CELL_WIDTH as usize);

    queue!(
        out,
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.border),
        MoveTo(layout.x, layout.y),
        Print(format!("┌{}┐", inner)),
        MoveTo(layout.x, layout.y + layout.height() - 1),
        Print(format!("└{}┘", inner))
    )?;

    for row in 0..layout.size {
        let (_, y) = layout.cell_origin(Position::new(row, 0));
        queue!(
            out,
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.border),
            MoveTo(layout.x, y),
            Print("│"),
            MoveTo(layout.x + layout.width() - 1, y),
            Print("│")
        )?;

        for col in 0..layout.size {
            let pos = Position::new(row, col);
            let (x, y) = layout.cell_origin(pos);
            queue!(out, MoveTo(x, y))?;
            render_cell(out, app, pos)?;
        }
    }

    Ok(())
}

fn render_cell<W: Write>(out: &mut W, app: &App, pos: Position) -> io::Result<()> {
    let theme = &app.theme;
    let session = &app.session;
    let letter = session.grid().get(pos).unwrap_or(' ');

    let in_selection = session.selection().contains(&pos);
    let is_found = session.is_found_cell(pos);
    let is_cursor = pos == app.cursor;

    let (fg, bg) = if in_selection {
        (theme.selection_fg, theme.selection_bg)
    } else if is_cursor {
        (theme.fg, theme.cursor_bg)
    } else if is_found {
        (theme.found, theme.found_bg)
    } else {
        (theme.letter, theme.bg)
    };

    queue!(
        out,
        SetForegroundColor(fg),
        SetBackgroundColor(bg),
        Print(format!(" {} ", letter))
    )
}

fn render_word_list<W: Write>(out: &mut W, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let session = &app.session;

    queue!(
        out,
        SetBackgroundColor(theme.bg),
        MoveTo(x, y),
        SetForegroundColor(theme.key),
        Print("═══ WORD SEARCH ═══"),
        MoveTo(x, y + 2),
        SetForegroundColor(theme.info),
        Print(format!(
            "Found: {:>5}",
            format!("{}/{}", session.found_words().len(), session.word_list().len())
        ))
    )?;

    for (i, word) in session.word_list().iter().enumerate() {
        let row = y + 4 + i as u16;
        queue!(out, MoveTo(x, row))?;

        if session.is_found(word) {
            queue!(
                out,
                SetForegroundColor(theme.found),
                SetAttribute(Attribute::CrossedOut),
                Print(format!("✓ {}", word)),
                SetAttribute(Attribute::NotCrossedOut)
            )?;
        } else if session.unplaced().contains(word) {
            queue!(
                out,
                SetForegroundColor(Color::DarkGrey),
                Print(format!("· {} (not hidden)", word))
            )?;
        } else {
            queue!(
                out,
                SetForegroundColor(theme.fg),
                Print(format!("  {}", word))
            )?;
        }
    }

    if session.is_complete() {
        let row = y + 5 + session.word_list().len() as u16;
        queue!(
            out,
            MoveTo(x, row),
            SetForegroundColor(theme.success),
            Print("All words found!")
        )?;
    }

    Ok(())
}

fn render_controls<W: Write>(out: &mut W, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    let controls = [
        ("Drag", "Select"),
        ("hjkl/Arrows", "Move"),
        ("Space/Enter", "Anchor/Check"),
        ("Esc", "Cancel"),
        ("n", "New puzzle"),
        ("t", "Theme"),
        ("q", "Quit"),
    ];

    // Two rows of controls
    for (i, (key, desc)) in controls.iter().enumerate() {
        let col = i / 2;
        let row = i % 2;
        let cx = x + (col as u16) * 24;
        let cy = y + row as u16;

        queue!(
            out,
            MoveTo(cx, cy),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.key),
            Print(format!("{:>11}", key)),
            SetForegroundColor(theme.info),
            Print(format!(" {}", desc))
        )?;
    }

    Ok(())
}

fn render_message<W: Write>(out: &mut W, app: &App, msg: &str, term_width: u16) -> io::Result<()> {
    let theme = &app.theme;
    let padded = format!("  {}  ", msg);
    let x = term_width.saturating_sub(padded.chars().count() as u16) / 2;

    queue!(
        out,
        MoveTo(x, 0),
        SetForegroundColor(theme.fg),
        SetBackgroundColor(theme.cursor_bg),
        Print(&padded)
    )
}

fn render_win_screen<W: Write>(
    out: &mut W,
    app: &mut App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    app.win_screen.resize(term_width, term_height);

    let bg_base = Color::Rgb { r: 8, g: 12, b: 20 };

    queue!(out, SetBackgroundColor(bg_base), Clear(ClearType::All))?;

    for particle in app.win_screen.particles() {
        if particle.is_visible(term_width, term_height) {
            queue!(
                out,
                MoveTo(particle.x as u16, particle.y as u16),
                SetForegroundColor(particle.color),
                Print(particle.glyph)
            )?;
        }
    }

    let lines: Vec<&str> = app
        .win_screen
        .banner()
        .lines()
        .filter(|l| !l.is_empty())
        .collect();
    let banner_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let banner_x = term_width.saturating_sub(banner_width) / 2;
    let banner_y = 3;

    for (i, line) in lines.iter().enumerate() {
        queue!(
            out,
            MoveTo(banner_x, banner_y + i as u16),
            SetForegroundColor(app.win_screen.banner_color(i)),
            Print(line)
        )?;
    }

    let msg = app.win_screen.current_message();
    let msg_x = term_width.saturating_sub(msg.len() as u16) / 2;
    let msg_y = banner_y + lines.len() as u16 + 2;
    queue!(
        out,
        MoveTo(msg_x, msg_y),
        SetForegroundColor(app.win_screen.banner_color(lines.len())),
        Print(msg)
    )?;

    let summary = format!(
        "{} words in a {}x{} grid",
        app.session.word_list().len(),
        app.session.size(),
        app.session.size()
    );
    let hint = "Any key: new puzzle  |  Esc: view grid  |  q: quit";
    queue!(
        out,
        MoveTo(term_width.saturating_sub(summary.len() as u16) / 2, msg_y + 2),
        SetForegroundColor(Color::White),
        Print(&summary),
        MoveTo(term_width.saturating_sub(hint.len() as u16) / 2, msg_y + 4),
        SetForegroundColor(Color::DarkGrey),
        Print(hint)
    )?;

    Ok(())
}
