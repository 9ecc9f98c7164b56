use super::fabric::Fabric;

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo as MoveCursorTo;
use crossterm::style::{Color, Print, SetBackgroundColor, SetForegroundColor};
use crossterm::QueueableCommand;

pub struct Renderer {
    stdout: Stdout,
}

impl Renderer {
    pub fn new() -> Self {
        let stdout = io::stdout();
        Renderer { stdout }
    }

    pub fn render(&mut self, fabric: Fabric) {
        for (row_number, row) in fabric.rows().iter().enumerate() {
            self.lazy_move_cursor(row_number, 0);

            let colors = row.colors();
            let backgrounds = row.backgrounds();
            for (column, character) in row.characters().iter().enumerate() {
                match colors.get(column) {
                    Some(Some(color)) => self.lazy_start_text_color(*color),
                    _ => self.lazy_reset_text_color(),
                }
                match backgrounds.get(column) {
                    Some(Some(color)) => self.lazy_start_background_color(*color),
                    _ => self.lazy_reset_background_color(),
                }
                self.lazy_print_character(character);
            }
            self.lazy_reset_text_color();
            self.lazy_reset_background_color();
        }

        self.update_terminal();
    }

    fn lazy_move_cursor(&mut self, row: usize, column: usize) {
        self.stdout
            .queue(MoveCursorTo(
                column.try_into().unwrap(),
                row.try_into().unwrap(),
            ))
            .unwrap();
    }

    fn lazy_print_character(&mut self, character: &char) {
        self.stdout.queue(Print(character)).unwrap();
    }

    fn lazy_start_text_color(&mut self, color: Color) {
        self.stdout.queue(SetForegroundColor(color)).unwrap();
    }

    fn lazy_reset_text_color(&mut self) {
        self.stdout.queue(SetForegroundColor(Color::Reset)).unwrap();
    }

    fn lazy_start_background_color(&mut self, color: Color) {
        self.stdout.queue(SetBackgroundColor(color)).unwrap();
    }

    fn lazy_reset_background_color(&mut self) {
        self.stdout.queue(SetBackgroundColor(Color::Reset)).unwrap();
    }

    fn update_terminal(&mut self) {
        self.stdout.flush().unwrap();
    }
}
