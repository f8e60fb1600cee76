use super::{token::*, Error};
use crate::error;

/// Lex an entire source text. The returned `Lexer` is a lazy, forward-only
/// token sequence; the iterator ends before the synthetic end-of-input token
/// that `next_token` yields forever after.
pub fn lex(source: &str) -> Lexer {
    Lexer::new(source)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
    remark: bool,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_more() {
            return None;
        }
        // A remark tail or trailing whitespace lexes to nothing but Eof.
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => None,
            item => Some(item),
        }
    }
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
            remark: false,
        }
    }

    pub fn has_more(&mut self) -> bool {
        self.chars.peek().is_some()
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            let (line, column) = (self.line, self.column);
            let pk = match self.peek() {
                Some(ch) => ch,
                None => return Ok(Token::new("", TokenKind::Eof, line, column)),
            };
            if pk == '\n' {
                self.take();
                self.remark = false;
                return Ok(Token::new("\n", TokenKind::Newline, line, column));
            }
            if self.remark || is_basic_whitespace(pk) {
                self.take();
                continue;
            }
            if is_basic_digit(pk) {
                return Ok(self.number(line, column));
            }
            if is_basic_alphabetic(pk) {
                return self.alphabetic(line, column);
            }
            if pk == '"' {
                return self.string(line, column);
            }
            self.take();
            return self.operator(pk, line, column);
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn peek2(&self) -> Option<char> {
        let mut ahead = self.chars.clone();
        ahead.next();
        ahead.next()
    }

    fn take(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn number(&mut self, line: usize, column: usize) -> Token {
        let mut s = String::new();
        let mut decimal = false;
        while let Some(ch) = self.peek() {
            if is_basic_digit(ch) {
                s.push(ch);
                self.take();
                continue;
            }
            // A decimal point belongs to the number only when a digit follows.
            if ch == '.' && !decimal && matches!(self.peek2(), Some(d) if is_basic_digit(d)) {
                decimal = true;
                s.push(ch);
                self.take();
                continue;
            }
            break;
        }
        Token::new(s, TokenKind::Number, line, column)
    }

    fn alphabetic(&mut self, line: usize, column: usize) -> Result<Token, Error> {
        let mut s = String::new();
        while let Some(ch) = self.peek() {
            if is_basic_alphabetic(ch) || is_basic_digit(ch) {
                s.push(ch);
                self.take();
            } else {
                break;
            }
        }
        if let Some(kind) = TokenKind::keyword(&s) {
            if kind == TokenKind::Rem {
                self.remark = true;
            }
            return Ok(Token::new(s, kind, line, column));
        }
        if self.peek() == Some('$') {
            self.take();
            if s.len() != 1 {
                let msg = "STRING VARIABLE NAMES ARE ONE LETTER";
                return Err(error!(SyntaxError, ..(line, column); msg));
            }
            s.push('$');
            return Ok(Token::new(s, TokenKind::SVar, line, column));
        }
        Ok(Token::new(s, TokenKind::Var, line, column))
    }

    fn string(&mut self, line: usize, column: usize) -> Result<Token, Error> {
        let mut s = String::new();
        self.take();
        loop {
            match self.take() {
                Some('"') => return Ok(Token::new(s, TokenKind::String, line, column)),
                Some(ch) => s.push(ch),
                None => {
                    return Err(error!(SyntaxError, ..(line, column); "UNTERMINATED STRING"));
                }
            }
        }
    }

    fn operator(&mut self, ch: char, line: usize, column: usize) -> Result<Token, Error> {
        use TokenKind::*;
        let kind = match ch {
            '=' => Equal,
            '+' => Plus,
            '-' => Minus,
            '*' => Multiply,
            '/' => Divide,
            '(' => LParen,
            ')' => RParen,
            ',' => Comma,
            ':' => Colon,
            ';' => Semicolon,
            '<' => {
                if self.peek() == Some('=') {
                    self.take();
                    return Ok(Token::new("<=", LessEqual, line, column));
                }
                if self.peek() == Some('>') {
                    self.take();
                    return Ok(Token::new("<>", NotEqual, line, column));
                }
                Less
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.take();
                    return Ok(Token::new(">=", GreaterEqual, line, column));
                }
                Greater
            }
            _ => {
                let msg = format!("UNEXPECTED CHARACTER '{}'", ch);
                return Err(error!(SyntaxError, ..(line, column); msg));
            }
        };
        Ok(Token::new(ch.to_string(), kind, line, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).map(|r| r.unwrap().kind).collect()
    }

    #[test]
    fn test_print_line() {
        use TokenKind::*;
        assert_eq!(
            kinds("10 PRINT \"HI\"\n"),
            vec![Number, Print, String, Newline]
        );
    }

    #[test]
    fn test_minus_keeps_its_own_lexeme() {
        let tokens: Vec<Token> = lex("1-2").map(|r| r.unwrap()).collect();
        assert_eq!(tokens[1].kind, TokenKind::Minus);
        assert_eq!(tokens[1].lexeme, "-");
    }

    #[test]
    fn test_two_char_operators() {
        use TokenKind::*;
        assert_eq!(
            kinds("<= >= <> < > ="),
            vec![LessEqual, GreaterEqual, NotEqual, Less, Greater, Equal]
        );
    }

    #[test]
    fn test_number_forms() {
        let tokens: Vec<Token> = lex("12 3.25").map(|r| r.unwrap()).collect();
        assert_eq!(tokens[0].lexeme, "12");
        assert_eq!(tokens[1].lexeme, "3.25");
    }

    #[test]
    fn test_trailing_dot_is_not_a_number() {
        let mut tokens = lex("5.");
        let five = tokens.next().unwrap().unwrap();
        assert_eq!(five.lexeme, "5");
        assert!(tokens.next().unwrap().is_err());
    }

    #[test]
    fn test_go_to_is_two_words() {
        use TokenKind::*;
        assert_eq!(kinds("GO TO 10"), vec![Go, To, Number]);
        assert_eq!(kinds("GOTO 10"), vec![Var, Number]);
    }

    #[test]
    fn test_string_variable() {
        let tokens: Vec<Token> = lex("A$").map(|r| r.unwrap()).collect();
        assert_eq!(tokens[0].kind, TokenKind::SVar);
        assert_eq!(tokens[0].lexeme, "A$");
        let mut tokens = lex("AB$");
        assert!(tokens.next().unwrap().is_err());
    }

    #[test]
    fn test_remark_discards_to_end_of_line() {
        use TokenKind::*;
        assert_eq!(
            kinds("10 REM ignore *)( everything\n20 STOP"),
            vec![Number, Rem, Newline, Number, Stop]
        );
    }

    #[test]
    fn test_iterator_ends_before_end_of_input() {
        use TokenKind::*;
        assert_eq!(kinds("10 REM tail with no newline"), vec![Number, Rem]);
        assert_eq!(kinds("10 STOP   "), vec![Number, Stop]);
        assert!(lex("").next().is_none());
    }

    #[test]
    fn test_unterminated_string() {
        let result: Result<Vec<Token>, Error> = lex("10 PRINT \"HI").collect();
        assert_eq!(
            result.unwrap_err().to_string(),
            "SYNTAX ERROR IN 1:10; UNTERMINATED STRING"
        );
    }

    #[test]
    fn test_positions() {
        let tokens: Vec<Token> = lex("10 LET X=1\n20 STOP\n").map(|r| r.unwrap()).collect();
        let stop = tokens.iter().find(|t| t.kind == TokenKind::Stop).unwrap();
        assert_eq!((stop.line, stop.column), (2, 4));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        use TokenKind::*;
        assert_eq!(kinds("print PRINT"), vec![Var, Print]);
    }

    #[test]
    fn test_relexing_is_identical() {
        let source = "10 LET A=1.5\n20 PRINT A;\"OK\"\n30 GO TO 10\n";
        let first: Vec<Token> = lex(source).map(|r| r.unwrap()).collect();
        let again: Vec<Token> = lex(source).map(|r| r.unwrap()).collect();
        assert_eq!(first, again);
    }
}
