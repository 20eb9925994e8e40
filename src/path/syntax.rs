//! Tokenizer for SVG path data (`d` attribute) strings.

/// Drawing commands of the path mini-language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalTo,
    VerticalTo,
    CubicTo,
    SmoothCubicTo,
    QuadTo,
    SmoothQuadTo,
    ArcTo,
    Close,
}

/// A command letter, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathCommand {
    pub kind: CommandKind,
    pub absolute: bool,
}

impl PathCommand {
    pub fn new(kind: CommandKind, absolute: bool) -> Self {
        Self { kind, absolute }
    }

    /// Classify a command letter; `None` for anything unsupported.
    pub fn from_letter(c: char) -> Option<Self> {
        let kind = match c.to_ascii_lowercase() {
            'm' => CommandKind::MoveTo,
            'l' => CommandKind::LineTo,
            'h' => CommandKind::HorizontalTo,
            'v' => CommandKind::VerticalTo,
            'c' => CommandKind::CubicTo,
            's' => CommandKind::SmoothCubicTo,
            'q' => CommandKind::QuadTo,
            't' => CommandKind::SmoothQuadTo,
            'a' => CommandKind::ArcTo,
            'z' => CommandKind::Close,
            _ => return None,
        };
        Some(Self::new(kind, c.is_ascii_uppercase()))
    }

    pub fn letter(&self) -> char {
        let c = match self.kind {
            CommandKind::MoveTo => 'm',
            CommandKind::LineTo => 'l',
            CommandKind::HorizontalTo => 'h',
            CommandKind::VerticalTo => 'v',
            CommandKind::CubicTo => 'c',
            CommandKind::SmoothCubicTo => 's',
            CommandKind::QuadTo => 'q',
            CommandKind::SmoothQuadTo => 't',
            CommandKind::ArcTo => 'a',
            CommandKind::Close => 'z',
        };
        if self.absolute {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Command implied by bare operands following this one.
    ///
    /// Coordinate pairs after a moveto are linetos of the same case.
    pub fn repeated(&self) -> Self {
        match self.kind {
            CommandKind::MoveTo => Self::new(CommandKind::LineTo, self.absolute),
            _ => *self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A command letter (possibly not a supported one)
    Command(char),
    /// Operands with no preceding letter; repeat the previous command
    Operands,
}

pub struct PathSyntax<'a> {
    data: &'a [u8],
    index: usize,
}

impl<'a> PathSyntax<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            data: data.as_bytes(),
            index: 0,
        }
    }

    fn current(&self) -> Option<u8> {
        self.data.get(self.index).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn advance_digits(&mut self) -> bool {
        let start = self.index;
        while matches!(self.current(), Some(b'0'..=b'9')) {
            self.advance();
        }
        self.index > start
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    fn at_number_start(&self) -> bool {
        matches!(self.current(), Some(b'0'..=b'9' | b'+' | b'-' | b'.'))
    }

    /// Skip spaces, tabs, line breaks and commas
    pub fn skip_separators(&mut self) {
        while matches!(self.current(), Some(b' ' | b'\t' | b'\n' | b'\r' | b',')) {
            self.advance();
        }
    }

    /// Next command letter, or an indication that operands follow
    /// directly. `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_separators();
        if self.at_number_start() {
            return Some(Token::Operands);
        }
        let c = self.current()?;
        self.advance();
        Some(Token::Command(char::from(c)))
    }

    /// Read a number per the SVG grammar: optional sign, digits, optional
    /// fraction, optional exponent. At least one mantissa digit is needed.
    ///
    /// The read position is never rewound, even on failure.
    pub fn read_number(&mut self) -> Option<f64> {
        self.skip_separators();
        let start = self.index;
        if matches!(self.current(), Some(b'+' | b'-')) {
            self.advance();
        }
        let mut seen = self.advance_digits();
        if self.current() == Some(b'.') {
            self.advance();
            seen |= self.advance_digits();
        }
        if !seen {
            return None;
        }
        if matches!(self.current(), Some(b'e' | b'E')) {
            self.advance();
            if matches!(self.current(), Some(b'+' | b'-')) {
                self.advance();
            }
            self.advance_digits();
        }
        std::str::from_utf8(&self.data[start..self.index])
            .ok()?
            .parse()
            .ok()
    }

    /// Read `N` numbers, failing if any is missing.
    pub fn read_numbers<const N: usize>(&mut self) -> Option<[f64; N]> {
        let mut values = [0.; N];
        for v in values.iter_mut() {
            *v = self.read_number()?;
        }
        Some(values)
    }

    /// Read an arc flag: a single `0` or `1` character.
    ///
    /// Flags need no separator, so `a1 1 0 01 5 5` holds two flags `0` `1`.
    pub fn read_flag(&mut self) -> Option<bool> {
        self.skip_separators();
        let flag = match self.current()? {
            b'0' => false,
            b'1' => true,
            _ => return None,
        };
        self.advance();
        Some(flag)
    }

    /// Discard a run of operands which no command can use.
    ///
    /// Returns whether anything was skipped.
    pub fn skip_operands(&mut self) -> bool {
        let start = self.index;
        loop {
            self.skip_separators();
            if !self.at_number_start() {
                break;
            }
            let before = self.index;
            if self.read_number().is_none() && self.index == before {
                self.advance();
            }
        }
        self.index > start
    }
}
