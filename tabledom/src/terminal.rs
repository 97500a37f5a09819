//! Crossterm-backed terminal: raw mode setup, double-buffered drawing,
//! input polling. This is the only module that touches the backend.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Rgb};
use crate::event::Event;
use crate::layout::{layout, GridLayout, Rect};
use crate::render::render_to_buffer;
use crate::tree::Tree;

pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
    last_layout: GridLayout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            last_layout: GridLayout::default(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Poll for input, converting to [`Event`]s. Blocks up to `timeout`
    /// (forever when `None`), then drains everything pending.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                if let Some(ev) = Event::from_crossterm(event::read()?) {
                    events.push(ev);
                }
                return Ok(events);
            }
        };

        if has_event {
            if let Some(ev) = Event::from_crossterm(event::read()?) {
                events.push(ev);
            }
            while event::poll(Duration::ZERO)? {
                if let Some(ev) = Event::from_crossterm(event::read()?) {
                    events.push(ev);
                }
            }
        }

        Ok(events)
    }

    /// Lay out and draw the tree over the full terminal, flushing only
    /// cells that changed since the previous frame.
    pub fn render(&mut self, tree: &Tree) -> io::Result<&GridLayout> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
        }

        self.current.clear();
        self.last_layout = layout(tree, Rect::from_size(width, height));
        render_to_buffer(tree, &self.last_layout, &mut self.current);

        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(&self.last_layout)
    }

    /// Grid geometry from the last render, for hit-testing.
    pub fn layout(&self) -> &GridLayout {
        &self.last_layout
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_bold = false;
        let mut last_underline = false;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.wide_continuation {
                continue;
            }
            queue!(self.stdout, cursor::MoveTo(x, y))?;
            if last_fg != Some(cell.fg) {
                queue!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: cell.fg.r,
                        g: cell.fg.g,
                        b: cell.fg.b,
                    })
                )?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: cell.bg.r,
                        g: cell.bg.g,
                        b: cell.bg.b,
                    })
                )?;
                last_bg = Some(cell.bg);
            }
            if cell.bold != last_bold {
                queue!(
                    self.stdout,
                    SetAttribute(if cell.bold {
                        Attribute::Bold
                    } else {
                        Attribute::NormalIntensity
                    })
                )?;
                last_bold = cell.bold;
            }
            if cell.underline != last_underline {
                queue!(
                    self.stdout,
                    SetAttribute(if cell.underline {
                        Attribute::Underlined
                    } else {
                        Attribute::NoUnderline
                    })
                )?;
                last_underline = cell.underline;
            }
            queue!(self.stdout, crossterm::style::Print(cell.ch))?;
        }

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        if let Err(e) = self.stdout.flush() {
            log::warn!("failed to restore terminal: {e}");
        }
    }
}
