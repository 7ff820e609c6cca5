use crate::TermInt;
use crate::board::Board;
use crate::snake::Coords;
use std::collections::HashSet;
use std::io::{Stdout, Write, stdout};

use anyhow::{Context, Result, ensure};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read};

pub const SNAKE_CHAR: char = '#';
pub const EMPTY_CHAR: char = '.';
pub const DEAD_SNAKE_CHAR: char = 'X';

/// Lines reserved under the board for messages.
pub const MESSAGE_ROWS: TermInt = 4;

/// Board rows as text, `#` for cells in `occupied` and `.` elsewhere.
pub fn render_grid(board: &Board, occupied: &HashSet<Coords>) -> Vec<String> {
    let n = i32::from(board.size());

    (0..n)
        .map(|row| {
            (0..n)
                .map(|col| if occupied.contains(&Coords::new(row, col)) {SNAKE_CHAR} else {EMPTY_CHAR})
                .collect::<String>()
        })
        .collect()
}

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    message_top: TermInt,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        Ok(TermManager { width, height, stdout: stdout(), message_top: 0 })
    }

    /// Fails if `board` plus its border and the message area do not fit.
    pub fn fit(&mut self, board: &Board) -> Result<()> {
        let needed_w = board.size().saturating_add(2);
        let needed_h = board.size().saturating_add(3 + MESSAGE_ROWS);

        ensure!(
            self.width >= needed_w && self.height >= needed_h,
            "terminal is {}x{}, a board of {} needs at least {}x{}",
            self.width, self.height, board.size(), needed_w, needed_h
        );

        self.message_top = board.size() + 3;
        Ok(())
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, terminal::Clear(ClearType::All))
            .context("Error preparing screen")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error disabling raw mode")?;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen).context("Error leaving alt screen")?;
        Ok(())
    }

    /// Blocks until a key is pressed.
    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read().context("Error reading input")? {
                return Ok(ev);
            }
        }
    }

    /// Draws the title line, the border and every cell of the board.
    pub fn draw_board(&mut self, board: &Board, occupied: &HashSet<Coords>, score: u32, dead: bool) -> Result<()> {
        self.print_line(0, &format!("Snake  |  Score: {}", score))?;
        self.draw_borders(board.size())?;

        for (y, line) in render_grid(board, occupied).iter().enumerate() {
            let line = if dead {line.replace(SNAKE_CHAR, &DEAD_SNAKE_CHAR.to_string())} else {line.clone()};
            queue!(self.stdout, cursor::MoveTo(1, y as TermInt + 2), style::Print(line))?;
        }

        self.flush()
    }

    /// Replaces the message area under the board with `lines`.
    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        for i in 0..MESSAGE_ROWS {
            let text = lines.get(i as usize).copied().unwrap_or("");
            self.print_line(self.message_top + i, text)?;
        }

        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_borders(&mut self, size: TermInt) -> Result<()> {
        let (top, bottom) = (1, size + 2);
        let end_x = size + 1;

        for x in 0..=end_x {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.print_at((x, top), ch)?;
            self.print_at((x, bottom), ch)?;
        }

        for y in top + 1..bottom {
            self.print_at((0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        Ok(())
    }

    fn print_at(&mut self, pos: (TermInt, TermInt), ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }

    fn print_line(&mut self, y: TermInt, text: &str) -> Result<()> {
        let text: String = text.chars().take(self.width as usize).collect();
        queue!(
            self.stdout,
            cursor::MoveTo(0, y),
            terminal::Clear(ClearType::CurrentLine),
            style::Print(text)
        )?;
        Ok(())
    }
}
