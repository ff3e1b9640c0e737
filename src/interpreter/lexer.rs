use logos::{Logos, Skip};

/// Represents the kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized token kinds in the language: literals,
/// identifiers, the full Spanish keyword set, operators (simple and
/// compound-assignment), delimiters, and the `Eof`/`Illegal` sentinels.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Identifier tokens; variable, function or class names such as `x`,
    /// `saludar` or `Persona`. Unicode letters and `_` start an identifier;
    /// letters, digits and `_` continue it.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Ident,
    /// Numeric literal tokens such as `42`, `3.14` or `7.`. At most one `.`
    /// is consumed; whether the literal is an integer or a decimal is decided
    /// by the parser.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Num,
    /// String literal tokens, delimited by `"` or `'`. The lexeme is the raw
    /// byte sequence between the quotes; a backslash placed before the
    /// closing quote keeps that quote inside the lexeme. An unterminated
    /// string consumes the rest of the input.
    #[token("\"", |lex| scan_string(lex, b'"'))]
    #[token("'", |lex| scan_string(lex, b'\''))]
    Str,

    /// `// Comentario de línea.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// `/* Comentario de bloque. */` Never nests; if the closing `*/` is
    /// missing the comment swallows the rest of the input.
    #[token("/*", skip_block_comment)]
    BlockComment,

    // Operadores
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Mod,
    /// `^`
    #[token("^")]
    Power,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,

    // Asignaciones compuestas
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `%=`
    #[token("%=")]
    ModAssign,
    /// `^=`
    #[token("^=")]
    PowAssign,
    /// `:=`
    #[token(":=")]
    Declare,

    // Delimitadores
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    // Palabras clave
    /// `fun`
    #[token("fun")]
    Function,
    /// `clase`
    #[token("clase")]
    Class,
    /// `proto` (reservada)
    #[token("proto")]
    Proto,
    /// `si`
    #[token("si")]
    If,
    /// `sino`
    #[token("sino")]
    Else,
    /// `cuando` (reservada)
    #[token("cuando")]
    When,
    /// `devolver`
    #[token("devolver")]
    Return,
    /// `verdad`
    #[token("verdad")]
    True,
    /// `falso`
    #[token("falso")]
    False,
    /// `nulo`
    #[token("nulo")]
    Null,
    /// `mientras`
    #[token("mientras")]
    While,
    /// `para`
    #[token("para")]
    For,
    /// `repetir` (reservada)
    #[token("repetir")]
    Repeat,
    /// `haz` (reservada)
    #[token("haz")]
    Do,
    /// `romper` (reservada)
    #[token("romper")]
    Break,
    /// `continuar` (reservada)
    #[token("continuar")]
    Continue,
    /// `evaluar` (reservada)
    #[token("evaluar")]
    Switch,
    /// `caso` (reservada)
    #[token("caso")]
    Case,
    /// `defecto` (reservada)
    #[token("defecto")]
    Default,
    /// `en` (reservada)
    #[token("en")]
    In,
    /// `desde` (reservada)
    #[token("desde")]
    From,
    /// `hasta` (reservada)
    #[token("hasta")]
    To,
    /// `y`
    #[token("y", priority = 3)]
    And,
    /// `o`
    #[token("o", priority = 3)]
    Or,
    /// `no` (reservada)
    #[token("no")]
    Not,
    /// `es` (reservada)
    #[token("es")]
    Is,
    /// `no_es` (reservada)
    #[token("no_es")]
    IsNot,
    /// `nuevo`
    #[token("nuevo")]
    New,
    /// `extiende`
    #[token("extiende")]
    Extends,
    /// `implementa`
    #[token("implementa")]
    Implements,
    /// `guarda`
    #[token("guarda")]
    Var,
    /// `publico` (reservada)
    #[token("publico")]
    Public,
    /// `privado` (reservada)
    #[token("privado")]
    Private,
    /// `protegido` (reservada)
    #[token("protegido")]
    Protected,
    /// `estatico` (reservada)
    #[token("estatico")]
    Static,
    /// `final` (reservada)
    #[token("final")]
    Final,
    /// `esto`
    #[token("esto")]
    This,
    /// `super` (reservada)
    #[token("super")]
    Super,
    /// `intentar` (reservada)
    #[token("intentar")]
    Try,
    /// `atrapar` (reservada)
    #[token("atrapar")]
    Catch,
    /// `finalmente` (reservada)
    #[token("finalmente")]
    Finally,
    /// `lanzar` (reservada)
    #[token("lanzar")]
    Throw,

    /// A NUL byte reads as end-of-input, exactly as a plain byte cursor
    /// would see it. The wrapper also produces this kind when the input is
    /// exhausted.
    #[token("\x00")]
    Eof,
    /// Any byte the lexer does not recognize.
    #[regex(r".", priority = 0)]
    Illegal,

    /// Line feeds are skipped like any other whitespace, but they advance the
    /// line counter and reset the column origin.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        Skip
    })]
    Newline,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ident => "IDENT",
            Self::Num => "NUM",
            Self::Str => "STRING",
            Self::Comment | Self::BlockComment | Self::Newline | Self::Ignored => "",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Mod => "%",
            Self::Power => "^",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::PowAssign => "^=",
            Self::Declare => ":=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Class => "CLASS",
            Self::Proto => "PROTO",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::When => "WHEN",
            Self::Return => "RETURN",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Null => "NULL",
            Self::While => "WHILE",
            Self::For => "FOR",
            Self::Repeat => "REPEAT",
            Self::Do => "DO",
            Self::Break => "BREAK",
            Self::Continue => "CONTINUE",
            Self::Switch => "SWITCH",
            Self::Case => "CASE",
            Self::Default => "DEFAULT",
            Self::In => "IN",
            Self::From => "FROM",
            Self::To => "TO",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Is => "IS",
            Self::IsNot => "ISNOT",
            Self::New => "NEW",
            Self::Extends => "EXTENDS",
            Self::Implements => "IMPLEMENTS",
            Self::Var => "VAR",
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
            Self::Protected => "PROTECTED",
            Self::Static => "STATIC",
            Self::Final => "FINAL",
            Self::This => "THIS",
            Self::Super => "SUPER",
            Self::Try => "TRY",
            Self::Catch => "CATCH",
            Self::Finally => "FINALLY",
            Self::Throw => "THROW",
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset where that line begins,
/// so every token can report a 1-based line and column. String literals may
/// span several lines, so their starting position and processed lexeme are
/// recorded here by the scanning callback and picked up by [`Lexer`].
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset at which the current line starts.
    pub line_start: usize,
    str_literal:    String,
    str_line:       usize,
    str_column:     usize,
}

/// Scans a string literal after its opening quote has been matched.
///
/// The lexeme is everything up to the matching quote; a backslash directly
/// before that quote escapes it (the quote stays in the lexeme, backslash
/// included), no other escape sequences are processed, and a missing closing
/// quote consumes the rest of the input.
///
/// The processed lexeme and the position of the opening quote are left in the
/// lexer extras because the literal may span newlines.
fn scan_string(lex: &mut logos::Lexer<'_, TokenKind>, quote: u8) {
    let span = lex.span();
    lex.extras.str_line = lex.extras.line;
    lex.extras.str_column = span.start - lex.extras.line_start + 1;

    let remainder = lex.remainder();
    let bytes = remainder.as_bytes();

    let mut end = bytes.len();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 1 < bytes.len() && bytes[i + 1] == quote {
            i += 2;
            continue;
        }
        if bytes[i] == quote {
            end = i;
            break;
        }
        i += 1;
    }

    lex.extras.str_literal = remainder[..end].to_string();

    // Consume the closing quote too, unless the input ran out first.
    let consumed = if end < bytes.len() { end + 1 } else { end };
    for (offset, byte) in bytes[..consumed].iter().enumerate() {
        if *byte == b'\n' {
            lex.extras.line += 1;
            lex.extras.line_start = span.end + offset + 1;
        }
    }
    lex.bump(consumed);
}

/// Skips a block comment after its opening `/*` has been matched.
///
/// The comment ends at the first `*/`; comments do not nest. Without a
/// terminator the rest of the input is consumed without complaint.
fn skip_block_comment(lex: &mut logos::Lexer<'_, TokenKind>) -> Skip {
    let span = lex.span();
    let remainder = lex.remainder();
    let end = remainder.find("*/").map_or(remainder.len(), |at| at + 2);

    for (offset, byte) in remainder.as_bytes()[..end].iter().enumerate() {
        if *byte == b'\n' {
            lex.extras.line += 1;
            lex.extras.line_start = span.end + offset + 1;
        }
    }
    lex.bump(end);
    Skip
}

/// A lexical token: its kind, raw lexeme and source position.
///
/// `line` and `column` are 1-based and point at the first byte of the token.
/// For string literals the lexeme excludes the delimiting quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The raw text of the token.
    pub literal: String,
    /// Line where the token starts.
    pub line:    usize,
    /// Column where the token starts.
    pub column:  usize,
}

impl Token {
    /// Builds an end-of-input token at the given position.
    #[must_use]
    pub const fn eof(line: usize, column: usize) -> Self {
        Self { kind: TokenKind::Eof,
               literal: String::new(),
               line,
               column }
    }
}

/// The lexical analyzer: turns a source string into a stream of [`Token`]s.
///
/// The lexer is lazy and restartable only from the start;
/// [`Lexer::next_token`] produces one token per call and an endless tail of
/// `Eof` tokens once the input is exhausted. It never fails: unknown bytes
/// come back as `Illegal` tokens and every diagnosis is left to the parser.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(input,
                                                   LexerExtras { line: 1,
                                                                 ..LexerExtras::default() }), }
    }

    /// Reads the next token from the input.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(TokenKind::Str)) => {
                let extras = &mut self.inner.extras;
                Token { kind:    TokenKind::Str,
                        literal: std::mem::take(&mut extras.str_literal),
                        line:    extras.str_line,
                        column:  extras.str_column, }
            },
            Some(Ok(TokenKind::Eof)) | None => {
                let (line, column) = self.position();
                Token::eof(line, column)
            },
            Some(Ok(kind)) => self.spanned(kind),
            Some(Err(())) => self.spanned(TokenKind::Illegal),
        }
    }

    fn spanned(&self, kind: TokenKind) -> Token {
        let span = self.inner.span();
        Token { kind,
                literal: self.inner.slice().to_string(),
                line: self.inner.extras.line,
                column: span.start - self.inner.extras.line_start + 1 }
    }

    fn position(&self) -> (usize, usize) {
        let extras = &self.inner.extras;
        (extras.line, self.inner.span().end - extras.line_start + 1)
    }
}
