use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`. The raw digit string is kept;
    /// numeric conversion happens in the parser so that out-of-range
    /// literals can be reported as parse errors.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// String literal tokens, delimited by `"`. The stored text is the
    /// content between the quotes; no escape processing is performed. An
    /// unterminated string runs to the end of input.
    #[regex(r#""[^"]*""#, parse_terminated_string)]
    #[regex(r#""[^"]*"#, parse_unterminated_string)]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; variable or function names such as `x` or
    /// `fibonacci`. Keywords win over this rule by token priority, which
    /// acts as the fixed keyword table of the language.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
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
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
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

    /// Any character no other rule matches. The lexer itself never fails;
    /// illegal input is carried along as a token and reported by the
    /// parser.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),

    /// Newlines are skipped but counted for diagnostics.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Extracts the content of a terminated string literal, dropping both
/// quotes and counting any newlines the literal spans.
fn parse_terminated_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
    slice[1..slice.len() - 1].to_string()
}

/// Extracts the content of a string literal that reaches the end of input
/// without a closing quote. Only the opening quote is dropped.
fn parse_unterminated_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
    slice[1..].to_string()
}

/// Tokenizes an entire source string into `(Token, line)` pairs.
///
/// The lexer itself never fails: input that matches no rule surfaces as
/// [`Token::Illegal`] and becomes a parse error later. The end of input is
/// simply the end of the returned sequence.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// All tokens paired with the line they start on, in source order.
///
/// # Example
/// ```
/// use minima::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let five = 5;");
///
/// assert_eq!(tokens[0].0, Token::Let);
/// assert_eq!(tokens[1].0, Token::Identifier("five".to_string()));
/// assert_eq!(tokens[2].0, Token::Assign);
/// assert_eq!(tokens[3].0, Token::Integer("5".to_string()));
/// assert_eq!(tokens[4].0, Token::Semicolon);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => tokens.push((Token::Illegal(lexer.slice().to_string()), line)),
        }
    }

    tokens
}
