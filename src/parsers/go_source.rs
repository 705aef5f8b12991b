//! Scanner for Go source files.
//!
//! Recovers the package clause and every type declaration of a file, with
//! field names and raw tags for struct types. This is not a Go parser: it
//! understands just enough of the grammar to walk struct bodies and skips
//! everything else.
//!
//! # Key Features
//! - Line and block comments, rune, interpreted and raw string literals
//! - Automatic statement terminators at line ends, as the Go lexer inserts
//! - Single and grouped (`type ( ... )`) declarations, generic type parameters
//! - Multi-name fields (`A, B int`), embedded fields, nested struct types
//!
//! # Implementation Notes
//! - Interpreted-string tags are unescaped and re-wrapped in backticks so
//!   tag parsers always see one delimiter convention
//! - Type declarations inside function bodies are reported as well

use std::fmt;

use log::debug;

use crate::models::{FieldDecl, GoFile, TypeDecl, TypeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The file does not start with a `package` clause.
    MissingPackage,

    UnterminatedString { line: usize },

    UnterminatedComment { line: usize },

    /// A closing bracket without its opener, or an opener never closed.
    UnbalancedBracket { line: usize, bracket: char },

    /// Tokens ran out in the middle of a declaration.
    UnexpectedEnd,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPackage => write!(f, "Missing package clause"),
            Self::UnterminatedString { line } => {
                write!(f, "Unterminated string literal at line {}", line)
            }
            Self::UnterminatedComment { line } => {
                write!(f, "Unterminated block comment at line {}", line)
            }
            Self::UnbalancedBracket { line, bracket } => {
                write!(f, "Unbalanced '{}' at line {}", bracket, line)
            }
            Self::UnexpectedEnd => write!(f, "Unexpected end of file"),
        }
    }
}

impl std::error::Error for SourceError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    /// String literal exactly as written, delimiters included.
    Str(String),
    /// Numbers and rune literals.
    Literal,
    Punct(char),
    /// Explicit `;` or one inserted at a line end.
    Semi,
}

/// Parses Go source text into its package name and type declarations.
pub fn parse_go_source(source: &str) -> Result<GoFile, SourceError> {
    let tokens = tokenize(source)?;
    let mut scanner = Scanner { tokens, pos: 0 };

    scanner.skip_semis();
    if !scanner.eat_ident("package") {
        return Err(SourceError::MissingPackage);
    }
    let package = match scanner.bump() {
        Some(Token::Ident(name)) => name,
        _ => return Err(SourceError::MissingPackage),
    };

    let mut types = Vec::new();
    while let Some(token) = scanner.peek() {
        let starts_decl = matches!(token, Token::Ident(word) if word == "type")
            && matches!(
                scanner.peek_at(1),
                Some(Token::Ident(_)) | Some(Token::Punct('('))
            );
        if !starts_decl {
            scanner.pos += 1;
            continue;
        }
        scanner.pos += 1;
        scanner.type_decl(&mut types)?;
    }

    debug!(
        "Scanned package {} with {} type declarations",
        package,
        types.len()
    );
    Ok(GoFile { package, types })
}

struct Scanner {
    tokens: Vec<Token>,
    pos: usize,
}

impl Scanner {
    fn peek(&self) -> Option<&Token> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn skip_semis(&mut self) {
        while self.peek() == Some(&Token::Semi) {
            self.pos += 1;
        }
    }

    fn eat_ident(&mut self, word: &str) -> bool {
        if matches!(self.peek(), Some(Token::Ident(ident)) if ident == word) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_punct(&mut self, c: char) -> bool {
        if self.peek() == Some(&Token::Punct(c)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Everything after the `type` keyword.
    fn type_decl(&mut self, types: &mut Vec<TypeDecl>) -> Result<(), SourceError> {
        if !self.eat_punct('(') {
            types.push(self.type_spec()?);
            return Ok(());
        }
        loop {
            self.skip_semis();
            match self.peek() {
                Some(Token::Punct(')')) => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(Token::Ident(_)) => types.push(self.type_spec()?),
                Some(_) => self.skip_type_expr(),
                None => return Err(SourceError::UnexpectedEnd),
            }
        }
    }

    fn type_spec(&mut self) -> Result<TypeDecl, SourceError> {
        let name = match self.bump() {
            Some(Token::Ident(name)) => name,
            _ => return Err(SourceError::UnexpectedEnd),
        };

        if self.at_type_params() {
            self.skip_balanced();
        }
        self.eat_punct('=');

        let is_struct = matches!(self.peek(), Some(Token::Ident(word)) if word == "struct")
            && self.peek_at(1) == Some(&Token::Punct('{'));
        if !is_struct {
            self.skip_type_expr();
            return Ok(TypeDecl {
                name,
                kind: TypeKind::Other,
            });
        }

        self.pos += 1;
        let fields = self.struct_body()?;
        Ok(TypeDecl {
            name,
            kind: TypeKind::Struct(fields),
        })
    }

    /// `[T any]` and `[K comparable, V any]` open a type parameter list;
    /// `[4]` or `[N]` open an array type.
    fn at_type_params(&self) -> bool {
        self.peek() == Some(&Token::Punct('['))
            && matches!(self.peek_at(1), Some(Token::Ident(_)))
            && matches!(
                self.peek_at(2),
                Some(Token::Ident(_)) | Some(Token::Punct(',')) | Some(Token::Punct('~'))
            )
    }

    /// Skips one bracketed group starting at the current opener.
    fn skip_balanced(&mut self) {
        let mut depth = 0usize;
        while let Some(token) = self.bump() {
            match token {
                Token::Punct('(' | '[' | '{') => depth += 1,
                Token::Punct(')' | ']' | '}') => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    /// Skips a non-struct type expression up to the end of its spec.
    fn skip_type_expr(&mut self) {
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            match token {
                Token::Semi if depth == 0 => return,
                Token::Punct(')') if depth == 0 => return,
                Token::Punct('(' | '[' | '{') => depth += 1,
                Token::Punct(')' | ']' | '}') => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.pos += 1;
        }
    }

    fn struct_body(&mut self) -> Result<Vec<FieldDecl>, SourceError> {
        if !self.eat_punct('{') {
            return Err(SourceError::UnexpectedEnd);
        }

        let mut fields = Vec::new();
        loop {
            self.skip_semis();
            match self.peek() {
                Some(Token::Punct('}')) => {
                    self.pos += 1;
                    return Ok(fields);
                }
                Some(_) => {
                    let tokens = self.field_tokens();
                    if let Some(field) = field_decl(&tokens) {
                        fields.push(field);
                    }
                }
                None => return Err(SourceError::UnexpectedEnd),
            }
        }
    }

    /// Tokens of one field declaration, without the terminator.
    fn field_tokens(&mut self) -> Vec<Token> {
        let mut depth = 0usize;
        let mut tokens = Vec::new();
        while let Some(token) = self.peek() {
            match token {
                Token::Semi if depth == 0 => break,
                Token::Punct('}') if depth == 0 => break,
                Token::Punct('(' | '[' | '{') => depth += 1,
                Token::Punct(')' | ']' | '}') => depth = depth.saturating_sub(1),
                _ => {}
            }
            tokens.push(token.clone());
            self.pos += 1;
        }
        tokens
    }
}

fn field_decl(tokens: &[Token]) -> Option<FieldDecl> {
    let (tag, tokens) = match tokens.split_last() {
        Some((Token::Str(raw), rest)) => (Some(normalize_tag(raw)), rest),
        _ => (None, tokens),
    };
    if tokens.is_empty() {
        return None;
    }

    Some(FieldDecl {
        names: field_names(tokens),
        tag,
    })
}

/// Declared names of a field, empty for embedded fields.
fn field_names(tokens: &[Token]) -> Vec<String> {
    let Some(Token::Ident(first)) = tokens.first() else {
        // `*Base` or `*pkg.Base`
        return Vec::new();
    };

    match tokens.get(1) {
        None | Some(Token::Punct('.')) => Vec::new(),
        Some(Token::Punct(',')) => {
            let mut names = Vec::new();
            let mut rest = tokens.iter();
            while let Some(Token::Ident(name)) = rest.next() {
                names.push(name.clone());
                if rest.next() != Some(&Token::Punct(',')) {
                    break;
                }
            }
            names
        }
        // `Base[T]` is embedded, `Items [4]int` is a named array field.
        Some(Token::Punct('[')) if closes_at_end(&tokens[1..]) => Vec::new(),
        Some(_) => vec![first.clone()],
    }
}

fn closes_at_end(tokens: &[Token]) -> bool {
    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Punct('[') => depth += 1,
            Token::Punct(']') => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return index == tokens.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

/// Brings a tag literal to its backtick-delimited form.
fn normalize_tag(raw: &str) -> String {
    if raw.starts_with('`') {
        return raw.to_string();
    }

    let inner = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    let mut tag = String::with_capacity(inner.len() + 2);
    tag.push('`');
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            tag.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => tag.push('\n'),
            Some('t') => tag.push('\t'),
            Some('r') => tag.push('\r'),
            Some(escaped @ ('"' | '\\' | '\'')) => tag.push(escaped),
            Some(other) => {
                tag.push('\\');
                tag.push(other);
            }
            None => tag.push('\\'),
        }
    }
    tag.push('`');
    tag
}

fn needs_terminator(last: Option<&Token>) -> bool {
    matches!(
        last,
        Some(Token::Ident(_))
            | Some(Token::Str(_))
            | Some(Token::Literal)
            | Some(Token::Punct(')' | ']' | '}'))
    )
}

fn tokenize(source: &str) -> Result<Vec<Token>, SourceError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut brackets: Vec<(char, usize)> = Vec::new();
    let mut line = 1;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\n' {
            if needs_terminator(tokens.last()) {
                tokens.push(Token::Semi);
            }
            line += 1;
            i += 1;
            continue;
        }
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c == '/' && chars.get(i + 1) == Some(&'/') {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }

        if c == '/' && chars.get(i + 1) == Some(&'*') {
            let start_line = line;
            let mut newlines = 0;
            i += 2;
            loop {
                match chars.get(i) {
                    None => return Err(SourceError::UnterminatedComment { line: start_line }),
                    Some('*') if chars.get(i + 1) == Some(&'/') => {
                        i += 2;
                        break;
                    }
                    Some('\n') => newlines += 1,
                    Some(_) => {}
                }
                i += 1;
            }
            if newlines > 0 && needs_terminator(tokens.last()) {
                tokens.push(Token::Semi);
            }
            line += newlines;
            continue;
        }

        if c == '`' {
            let start_line = line;
            let start = i;
            i += 1;
            while i < chars.len() && chars[i] != '`' {
                if chars[i] == '\n' {
                    line += 1;
                }
                i += 1;
            }
            if i >= chars.len() {
                return Err(SourceError::UnterminatedString { line: start_line });
            }
            i += 1;
            tokens.push(Token::Str(chars[start..i].iter().collect()));
            continue;
        }

        if c == '"' || c == '\'' {
            let start = i;
            i = quoted_end(&chars, i, c).ok_or(SourceError::UnterminatedString { line })?;
            let token = if c == '"' {
                Token::Str(chars[start..i].iter().collect())
            } else {
                Token::Literal
            };
            tokens.push(token);
            continue;
        }

        if c.is_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            tokens.push(Token::Ident(chars[start..i].iter().collect()));
            continue;
        }

        if c.is_ascii_digit() {
            while i < chars.len() && (chars[i].is_alphanumeric() || matches!(chars[i], '_' | '.'))
            {
                i += 1;
            }
            tokens.push(Token::Literal);
            continue;
        }

        match c {
            '(' | '[' | '{' => brackets.push((c, line)),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match brackets.pop() {
                    Some((open, _)) if open == expected => {}
                    _ => return Err(SourceError::UnbalancedBracket { line, bracket: c }),
                }
            }
            _ => {}
        }
        let token = if c == ';' { Token::Semi } else { Token::Punct(c) };
        tokens.push(token);
        i += 1;
    }

    if let Some((bracket, line)) = brackets.pop() {
        return Err(SourceError::UnbalancedBracket { line, bracket });
    }
    if needs_terminator(tokens.last()) {
        tokens.push(Token::Semi);
    }
    Ok(tokens)
}

/// Index just past the closing `quote`, honouring backslash escapes.
/// Interpreted strings and runes may not span lines.
fn quoted_end(chars: &[char], start: usize, quote: char) -> Option<usize> {
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '\n' => return None,
            c if c == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}
