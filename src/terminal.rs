use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, stdout, Write};
use std::time::Duration;

/// Terminal abstraction for rendering
pub struct Terminal {
    width: u16,
    height: u16,
    buffer: Vec<Vec<Cell>>,
    alternate_screen: bool,
}

/// A single cell in the terminal buffer
#[derive(Clone)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bold: bool,
    pub blink: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bold: false,
            blink: false,
        }
    }
}

impl Terminal {
    /// Initialize the terminal for drawing
    pub fn new(alternate_screen: bool) -> io::Result<Self> {
        let (width, height) = size()?;

        if alternate_screen {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen, Hide)?;
        }

        let buffer = vec![vec![Cell::default(); width as usize]; height as usize];

        Ok(Self {
            width,
            height,
            buffer,
            alternate_screen,
        })
    }

    /// Get terminal dimensions
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        for row in &mut self.buffer {
            for cell in row {
                *cell = Cell::default();
            }
        }
    }

    /// Clear the actual terminal
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All))?;
        Ok(())
    }

    /// Set a character at position. Out-of-range writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, ch: char, fg: Option<Color>, bold: bool, blink: bool) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.buffer[y as usize][x as usize] = Cell { ch, fg, bold, blink };
        }
    }

    /// Set a string starting at position
    pub fn set_str(&mut self, x: i32, y: i32, s: &str, fg: Option<Color>, bold: bool, blink: bool) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i as i32, y, ch, fg, bold, blink);
        }
    }

    /// Render the entire buffer to screen
    pub fn present(&self) -> io::Result<()> {
        let mut stdout = stdout();

        for (y, row) in self.buffer.iter().enumerate() {
            queue!(stdout, MoveTo(0, y as u16))?;

            for cell in row {
                if cell.bold {
                    queue!(stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.blink {
                    queue!(stdout, SetAttribute(Attribute::SlowBlink))?;
                }

                if let Some(color) = cell.fg {
                    queue!(stdout, SetForegroundColor(color), Print(cell.ch), ResetColor)?;
                } else {
                    queue!(stdout, Print(cell.ch))?;
                }

                if cell.bold || cell.blink {
                    queue!(stdout, SetAttribute(Attribute::Reset))?;
                }
            }
        }

        stdout.flush()?;
        Ok(())
    }

    /// Sleep for specified duration
    pub fn sleep(&self, seconds: f32) {
        if seconds > 0.0 {
            std::thread::sleep(Duration::from_secs_f32(seconds));
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.alternate_screen {
            let _ = execute!(stdout(), Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Terminal};
    use crossterm::style::Color;

    /// Buffer-only terminal that never touches the real tty.
    fn headless(width: u16, height: u16) -> Terminal {
        Terminal {
            width,
            height,
            buffer: vec![vec![Cell::default(); width as usize]; height as usize],
            alternate_screen: false,
        }
    }

    #[test]
    fn set_writes_in_range() {
        let mut term = headless(80, 24);
        term.set(40, 12, '*', Some(Color::Red), true, false);
        let cell = &term.buffer[12][40];
        assert_eq!(cell.ch, '*');
        assert!(cell.bold);
        assert!(!cell.blink);
    }

    #[test]
    fn set_drops_out_of_range() {
        let mut term = headless(80, 24);
        term.set(-1, 0, 'x', None, false, false);
        term.set(0, -1, 'x', None, false, false);
        term.set(80, 0, 'x', None, false, false);
        term.set(0, 24, 'x', None, false, false);
        term.set(10_000, 10_000, 'x', None, false, false);
        for row in &term.buffer {
            for cell in row {
                assert_eq!(cell.ch, ' ');
            }
        }
    }

    #[test]
    fn set_str_clips_at_right_edge() {
        let mut term = headless(10, 2);
        term.set_str(7, 0, "abcdef", None, false, false);
        assert_eq!(term.buffer[0][7].ch, 'a');
        assert_eq!(term.buffer[0][9].ch, 'c');
        // 'd'..'f' fell off the edge; nothing wrapped to the next row
        for cell in &term.buffer[1] {
            assert_eq!(cell.ch, ' ');
        }
    }

    #[test]
    fn clear_resets_all_cells() {
        let mut term = headless(4, 4);
        term.set(1, 1, '#', Some(Color::Cyan), true, true);
        term.clear();
        assert_eq!(term.buffer[1][1].ch, ' ');
        assert!(term.buffer[1][1].fg.is_none());
    }
}
