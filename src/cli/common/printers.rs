// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Pretty printers for reporting results and warnings.
use std::{borrow::Cow, sync::Mutex};

const VERTICAL: char = '│';
const UP_AND_RIGHT: char = '└';
const VERTICAL_AND_RIGHT: char = '├';

lazy_static::lazy_static! {
    static ref WARNING_PRINTER: Mutex<BlockPrinter> = Mutex::new(BlockPrinter::default());
}

/// Lines grouped into blocks, drawn as a tree under a title.
#[derive(Default)]
struct BlockPrinter {
    blocks: Vec<Vec<Cow<'static, str>>>,
}

impl BlockPrinter {
    fn push_line(&mut self, line: Cow<'static, str>) {
        self.blocks.push(vec![line]);
    }

    fn push_block(&mut self, block: Vec<Cow<'static, str>>) {
        self.blocks.push(block);
    }

    /// Every line prefixed with its tree symbol.
    fn lines(&self) -> Vec<String> {
        let num_blocks = self.blocks.len();
        let mut lines = vec![];
        for (i_block, block) in self.blocks.iter().enumerate() {
            let num_lines = block.len();
            for (i_line, line) in block.iter().enumerate() {
                let symbol = match (i_line, i_line + 1 == num_lines, i_block + 1 == num_blocks) {
                    (0, false, _) => VERTICAL_AND_RIGHT,
                    (0, _, false) => VERTICAL_AND_RIGHT,
                    (0, true, true) => UP_AND_RIGHT,
                    _ => VERTICAL,
                };
                lines.push(format!("{symbol} {line}"));
            }
        }
        lines
    }
}

pub(crate) struct InfoPrinter {
    title: Cow<'static, str>,
    printer: BlockPrinter,
}

impl InfoPrinter {
    pub(crate) fn new(title: Cow<'static, str>) -> Self {
        Self {
            title,
            printer: BlockPrinter::default(),
        }
    }

    pub(crate) fn push_line(&mut self, line: Cow<'static, str>) {
        self.printer.push_line(line);
    }

    pub(crate) fn push_block(&mut self, block: Vec<Cow<'static, str>>) {
        self.printer.push_block(block);
    }

    pub(crate) fn display(self) {
        log::info!("{}", console::style(self.title).bold());
        for line in self.printer.lines() {
            log::info!("{line}");
        }
        log::info!("");
    }
}

pub(crate) trait Warn {
    fn warn(self);
}

impl Warn for &'static str {
    fn warn(self) {
        push_warning_line(self.into());
    }
}

impl Warn for String {
    fn warn(self) {
        push_warning_line(self.into());
    }
}

impl Warn for Cow<'static, str> {
    fn warn(self) {
        push_warning_line(self);
    }
}

impl Warn for Vec<Cow<'static, str>> {
    fn warn(self) {
        if let Ok(mut printer) = WARNING_PRINTER.lock() {
            printer.push_block(self);
        }
    }
}

fn push_warning_line(line: Cow<'static, str>) {
    if let Ok(mut printer) = WARNING_PRINTER.lock() {
        printer.push_line(line);
    }
}

/// Print out any warnings that have been collected as CLI arguments have been
/// parsed. This should only be called once before results are displayed.
pub(crate) fn display_warnings() {
    log::debug!("Displaying warnings");
    let Ok(mut printer) = WARNING_PRINTER.lock() else {
        return;
    };
    if printer.blocks.is_empty() {
        return;
    }

    log::warn!("{}", console::style("Warnings").bold());
    for line in printer.lines() {
        log::warn!("{line}");
    }
    log::warn!("");
    printer.blocks.clear();
}
