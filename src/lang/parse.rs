use super::program::{Line, Program};
use super::{ast::*, lex::lex, lex::Lexer, token::*, Error, Position};
use crate::error;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Parse an entire source text into a `Program`. The whole token stream is
/// consumed in one pass; the first grammar violation aborts the parse and no
/// partial program is produced.
pub fn parse(source: &str) -> Result<Program> {
    Parser::parse(source)
}

struct Parser<'a> {
    tokens: Lexer<'a>,
    peeked: Option<Token>,
}

impl<'a> Parser<'a> {
    fn parse(source: &'a str) -> Result<Program> {
        let mut parser = Parser {
            tokens: lex(source),
            peeked: None,
        };
        let mut program = Program::new();
        loop {
            while parser.peek()?.kind == TokenKind::Newline {
                parser.next()?;
            }
            if parser.peek()?.kind == TokenKind::Eof {
                return Ok(program);
            }
            let (position, line) = parser.line()?;
            program.insert(line).map_err(|e| e.in_position(position))?;
        }
    }

    fn next(&mut self) -> Result<Token> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.tokens.next_token(),
        }
    }

    fn peek(&mut self) -> Result<&Token> {
        if self.peeked.is_none() {
            self.peeked = Some(self.tokens.next_token()?);
        }
        match &self.peeked {
            Some(token) => Ok(token),
            None => Err(error!(InternalError)),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        let token = self.next()?;
        if token.kind == kind {
            return Ok(token);
        }
        use TokenKind::*;
        let msg = match kind {
            Number => "EXPECTED NUMBER",
            String => "EXPECTED STRING",
            Var => "EXPECTED VARIABLE",
            Equal => "EXPECTED EQUALS SIGN",
            To => "EXPECTED TO",
            Then => "EXPECTED THEN",
            LParen => "EXPECTED LEFT PARENTHESIS",
            RParen => "EXPECTED RIGHT PARENTHESIS",
            Newline => "EXPECTED END OF LINE",
            _ => "UNEXPECTED TOKEN",
        };
        Err(error!(SyntaxError, ..token.position(); msg))
    }

    fn line(&mut self) -> Result<(Position, Line)> {
        let token = self.next()?;
        let position = token.position();
        let number = match token.kind {
            TokenKind::Number => u16::try_from(&token).map_err(|e| e.in_position(position))?,
            _ => return Err(error!(SyntaxError, ..position; "EXPECTED LINE NUMBER")),
        };
        let mut statements = vec![self.statement()?];
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::Colon => statements.push(self.statement()?),
                TokenKind::Newline | TokenKind::Eof => break,
                _ => {
                    return Err(error!(SyntaxError, ..token.position(); "EXPECTED END OF LINE"));
                }
            }
        }
        Ok((position, Line { number, statements }))
    }

    fn statement(&mut self) -> Result<Statement> {
        let token = self.next()?;
        use TokenKind::*;
        match token.kind {
            Data => Statement::data(self),
            Dim => Statement::dim(self),
            For => Statement::r#for(self),
            Go => Statement::go(self),
            If => Statement::r#if(self),
            Input => Statement::input(self),
            Let => Statement::r#let(self),
            Next => Statement::next(self),
            Print => Statement::print(self),
            Read => Statement::read(self),
            Rem => Ok(Statement::Rem),
            Restore => Statement::restore(self),
            Return => Ok(Statement::Return),
            Stop => Ok(Statement::Stop),
            _ => Err(error!(SyntaxError, ..token.position(); "EXPECTED STATEMENT")),
        }
    }

    /// expression ::= term [('+'|'-') expression]
    /// Additive chains associate to the right.
    fn expression(&mut self) -> Result<Expression> {
        let lhs = self.term()?;
        match self.peek()?.kind {
            TokenKind::Plus => {
                self.next()?;
                let rhs = self.expression()?;
                Ok(Expression::Add(Box::new(lhs), Box::new(rhs)))
            }
            TokenKind::Minus => {
                self.next()?;
                let rhs = self.expression()?;
                Ok(Expression::Subtract(Box::new(lhs), Box::new(rhs)))
            }
            _ => Ok(lhs),
        }
    }

    /// term ::= unary {('*'|'/') unary}
    /// Multiplicative chains associate to the left.
    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.unary()?;
        loop {
            match self.peek()?.kind {
                TokenKind::Multiply => {
                    self.next()?;
                    let rhs = self.unary()?;
                    lhs = Expression::Multiply(Box::new(lhs), Box::new(rhs));
                }
                TokenKind::Divide => {
                    self.next()?;
                    let rhs = self.unary()?;
                    lhs = Expression::Divide(Box::new(lhs), Box::new(rhs));
                }
                _ => return Ok(lhs),
            }
        }
    }

    /// unary ::= ['+'|'-'] primary
    fn unary(&mut self) -> Result<Expression> {
        match self.peek()?.kind {
            TokenKind::Plus => {
                self.next()?;
                self.primary()
            }
            TokenKind::Minus => {
                self.next()?;
                Ok(Expression::Negate(Box::new(self.primary()?)))
            }
            _ => self.primary(),
        }
    }

    /// primary ::= NUMBER | STRING [qualifier] | var [qualifier]
    /// There is no parenthesized grouping in this grammar.
    fn primary(&mut self) -> Result<Expression> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Number => Ok(Expression::Number(Parser::number(&token)?)),
            TokenKind::String => {
                let qualifier = self.qualifier()?;
                Ok(Expression::String(token.lexeme.into(), qualifier))
            }
            TokenKind::Var => {
                let qualifier = self.qualifier()?;
                Ok(Expression::Var(Ident::Plain(token.lexeme.into()), qualifier))
            }
            TokenKind::SVar => {
                let qualifier = self.qualifier()?;
                Ok(Expression::Var(Ident::String(token.lexeme.into()), qualifier))
            }
            _ => Err(error!(SyntaxError, ..token.position(); "EXPECTED EXPRESSION")),
        }
    }

    /// qualifier ::= '(' expr-list ')' | '(' [expression] TO [expression] ')'
    /// After the opening parenthesis, TO before or after the first expression
    /// selects the slice form; a comma or closing parenthesis selects the
    /// subscript form.
    fn qualifier(&mut self) -> Result<Option<Qualifier>> {
        if self.peek()?.kind != TokenKind::LParen {
            return Ok(None);
        }
        self.next()?;
        if self.peek()?.kind == TokenKind::To {
            self.next()?;
            let finish = self.slice_bound()?;
            self.expect(TokenKind::RParen)?;
            return Ok(Some(Qualifier::Slice(None, finish)));
        }
        let first = self.expression()?;
        match self.peek()?.kind {
            TokenKind::To => {
                self.next()?;
                let finish = self.slice_bound()?;
                self.expect(TokenKind::RParen)?;
                Ok(Some(Qualifier::Slice(Some(Box::new(first)), finish)))
            }
            _ => {
                let mut subscripts = vec![first];
                while self.peek()?.kind == TokenKind::Comma {
                    self.next()?;
                    subscripts.push(self.expression()?);
                }
                self.expect(TokenKind::RParen)?;
                Ok(Some(Qualifier::Index(subscripts)))
            }
        }
    }

    fn slice_bound(&mut self) -> Result<Option<Box<Expression>>> {
        if self.peek()?.kind == TokenKind::RParen {
            return Ok(None);
        }
        Ok(Some(Box::new(self.expression()?)))
    }

    /// comparison ::= expression relop expression
    /// Comparisons appear only as the condition of IF.
    fn comparison(&mut self) -> Result<Comparison> {
        let lhs = self.expression()?;
        let token = self.next()?;
        let relop = match token.kind {
            TokenKind::Equal => Relop::Equal,
            TokenKind::NotEqual => Relop::NotEqual,
            TokenKind::Less => Relop::Less,
            TokenKind::LessEqual => Relop::LessEqual,
            TokenKind::Greater => Relop::Greater,
            TokenKind::GreaterEqual => Relop::GreaterEqual,
            _ => {
                let msg = "EXPECTED RELATIONAL OPERATOR";
                return Err(error!(SyntaxError, ..token.position(); msg));
            }
        };
        let rhs = self.expression()?;
        Ok(Comparison { lhs, relop, rhs })
    }

    /// An assignment or READ/INPUT target: scalar name or array element.
    fn variable(&mut self) -> Result<Variable> {
        let token = self.next()?;
        let ident = match token.kind {
            TokenKind::Var => Ident::Plain(token.lexeme.into()),
            TokenKind::SVar => Ident::String(token.lexeme.into()),
            _ => return Err(error!(SyntaxError, ..token.position(); "EXPECTED VARIABLE")),
        };
        if self.peek()?.kind == TokenKind::LParen {
            self.next()?;
            let mut subscripts = vec![self.expression()?];
            while self.peek()?.kind == TokenKind::Comma {
                self.next()?;
                subscripts.push(self.expression()?);
            }
            self.expect(TokenKind::RParen)?;
            return Ok(Variable::Element(ident, subscripts));
        }
        Ok(Variable::Scalar(ident))
    }

    fn variable_list(&mut self) -> Result<Vec<Variable>> {
        let mut variables = vec![self.variable()?];
        while self.peek()?.kind == TokenKind::Comma {
            self.next()?;
            variables.push(self.variable()?);
        }
        Ok(variables)
    }

    /// FOR and NEXT control variables are plain numeric names.
    fn ident(&mut self) -> Result<Ident> {
        let token = self.expect(TokenKind::Var)?;
        Ok(Ident::Plain(token.lexeme.into()))
    }

    fn literal(&mut self) -> Result<Literal> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Number => Ok(Literal::Number(Parser::number(&token)?)),
            TokenKind::String => Ok(Literal::String(token.lexeme.into())),
            _ => Err(error!(SyntaxError, ..token.position(); "EXPECTED LITERAL")),
        }
    }

    fn number(token: &Token) -> Result<f64> {
        match token.lexeme.parse::<f64>() {
            Ok(n) => Ok(n),
            Err(_) => Err(error!(SyntaxError, ..token.position(); "INVALID NUMBER")),
        }
    }

    fn at_end_of_statement(&mut self) -> Result<bool> {
        Ok(matches!(
            self.peek()?.kind,
            TokenKind::Colon | TokenKind::Newline | TokenKind::Eof
        ))
    }
}

impl Statement {
    fn data(parse: &mut Parser) -> Result<Statement> {
        let mut literals = vec![parse.literal()?];
        while parse.peek()?.kind == TokenKind::Comma {
            parse.next()?;
            literals.push(parse.literal()?);
        }
        Ok(Statement::Data(literals))
    }

    fn dim(parse: &mut Parser) -> Result<Statement> {
        let position = parse.peek()?.position();
        match parse.variable()? {
            Variable::Element(ident, sizes) => Ok(Statement::Dim(ident, sizes)),
            Variable::Scalar(_) => {
                Err(error!(SyntaxError, ..position; "EXPECTED DIMENSIONS"))
            }
        }
    }

    fn r#for(parse: &mut Parser) -> Result<Statement> {
        let ident = parse.ident()?;
        parse.expect(TokenKind::Equal)?;
        let from = parse.expression()?;
        parse.expect(TokenKind::To)?;
        let to = parse.expression()?;
        let mut step = None;
        if parse.peek()?.kind == TokenKind::Step {
            parse.next()?;
            step = Some(parse.expression()?);
        }
        Ok(Statement::For(ident, from, to, step))
    }

    fn go(parse: &mut Parser) -> Result<Statement> {
        let token = parse.next()?;
        match token.kind {
            TokenKind::To => Ok(Statement::Goto(parse.expression()?)),
            TokenKind::Sub => Ok(Statement::Gosub(parse.expression()?)),
            _ => Err(error!(SyntaxError, ..token.position(); "EXPECTED TO OR SUB")),
        }
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let comparison = parse.comparison()?;
        parse.expect(TokenKind::Then)?;
        let statement = parse.statement()?;
        Ok(Statement::If(comparison, Box::new(statement)))
    }

    fn input(parse: &mut Parser) -> Result<Statement> {
        let mut prompt: Option<Rc<str>> = None;
        if parse.peek()?.kind == TokenKind::String {
            let token = parse.next()?;
            prompt = Some(token.lexeme.into());
            let sep = parse.next()?;
            match sep.kind {
                TokenKind::Semicolon | TokenKind::Comma => {}
                _ => {
                    let msg = "EXPECTED COMMA OR SEMICOLON";
                    return Err(error!(SyntaxError, ..sep.position(); msg));
                }
            }
        }
        Ok(Statement::Input(prompt, parse.variable_list()?))
    }

    fn r#let(parse: &mut Parser) -> Result<Statement> {
        let variable = parse.variable()?;
        parse.expect(TokenKind::Equal)?;
        let expr = parse.expression()?;
        Ok(Statement::Let(variable, expr))
    }

    fn next(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Next(parse.ident()?))
    }

    /// printlist ::= { expression [';' | ','] }
    /// Items need no separator at all; two adjacent expressions are two items.
    fn print(parse: &mut Parser) -> Result<Statement> {
        let mut items: Vec<PrintItem> = vec![];
        loop {
            if parse.at_end_of_statement()? {
                return Ok(Statement::Print(items));
            }
            let expr = parse.expression()?;
            let semicolon = match parse.peek()?.kind {
                TokenKind::Semicolon => {
                    parse.next()?;
                    true
                }
                TokenKind::Comma => {
                    parse.next()?;
                    false
                }
                _ => false,
            };
            items.push(PrintItem { expr, semicolon });
        }
    }

    fn read(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Read(parse.variable_list()?))
    }

    fn restore(parse: &mut Parser) -> Result<Statement> {
        if parse.peek()?.kind == TokenKind::Number {
            let token = parse.next()?;
            let number = u16::try_from(&token).map_err(|e| e.in_position(token.position()))?;
            return Ok(Statement::Restore(Some(number)));
        }
        Ok(Statement::Restore(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(source: &str) -> Statement {
        match parse(source) {
            Ok(program) => {
                assert_eq!(program.len(), 1, "want exactly one line");
                let line = &program.lines()[0];
                assert_eq!(line.statements.len(), 1, "want exactly one statement");
                line.statements[0].clone()
            }
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    fn parse_err(source: &str) -> String {
        parse(source).unwrap_err().to_string()
    }

    fn num(n: f64) -> Expression {
        Expression::Number(n)
    }

    fn var(name: &str) -> Expression {
        Expression::Var(Ident::Plain(name.into()), None)
    }

    #[test]
    fn test_let() {
        let answer = Statement::Let(
            Variable::Scalar(Ident::Plain("A".into())),
            Expression::Add(Box::new(var("X")), Box::new(num(3.0))),
        );
        assert_eq!(parse_str("10 LET A=X+3"), answer);
    }

    #[test]
    fn test_let_is_mandatory() {
        assert_eq!(parse_err("10 A=1"), "SYNTAX ERROR IN 1:4; EXPECTED STATEMENT");
    }

    #[test]
    fn test_additive_is_right_associative() {
        let answer = Statement::Let(
            Variable::Scalar(Ident::Plain("A".into())),
            Expression::Subtract(
                Box::new(num(5.0)),
                Box::new(Expression::Add(Box::new(num(2.0)), Box::new(num(1.0)))),
            ),
        );
        assert_eq!(parse_str("10 LET A=5-2+1"), answer);
    }

    #[test]
    fn test_term_is_left_associative() {
        let answer = Statement::Let(
            Variable::Scalar(Ident::Plain("A".into())),
            Expression::Divide(
                Box::new(Expression::Divide(Box::new(num(8.0)), Box::new(num(4.0)))),
                Box::new(num(2.0)),
            ),
        );
        assert_eq!(parse_str("10 LET A=8/4/2"), answer);
    }

    #[test]
    fn test_term_binds_tighter_than_additive() {
        let answer = Statement::Let(
            Variable::Scalar(Ident::Plain("A".into())),
            Expression::Add(
                Box::new(num(1.0)),
                Box::new(Expression::Multiply(Box::new(num(2.0)), Box::new(num(3.0)))),
            ),
        );
        assert_eq!(parse_str("10 LET A=1+2*3"), answer);
    }

    #[test]
    fn test_no_parenthesized_grouping() {
        assert_eq!(
            parse_err("10 LET A=(1+2)*3"),
            "SYNTAX ERROR IN 1:10; EXPECTED EXPRESSION"
        );
    }

    #[test]
    fn test_if_then() {
        let answer = Statement::If(
            Comparison {
                lhs: var("A"),
                relop: Relop::LessEqual,
                rhs: num(5.0),
            },
            Box::new(Statement::Print(vec![])),
        );
        assert_eq!(parse_str("10 IF A<=5 THEN PRINT"), answer);
    }

    #[test]
    fn test_comparison_is_not_an_expression() {
        assert_eq!(
            parse_err("10 LET A=B=C"),
            "SYNTAX ERROR IN 1:11; EXPECTED END OF LINE"
        );
    }

    #[test]
    fn test_go() {
        assert_eq!(parse_str("10 GO TO 100"), Statement::Goto(num(100.0)));
        assert_eq!(
            parse_str("10 GO SUB 50+50"),
            Statement::Gosub(Expression::Add(Box::new(num(50.0)), Box::new(num(50.0))))
        );
        assert_eq!(
            parse_err("10 GOTO 100"),
            "SYNTAX ERROR IN 1:4; EXPECTED STATEMENT"
        );
    }

    #[test]
    fn test_for_with_step() {
        let answer = Statement::For(
            Ident::Plain("I".into()),
            num(1.0),
            num(10.0),
            Some(Expression::Negate(Box::new(num(2.0)))),
        );
        assert_eq!(parse_str("10 FOR I=1 TO 10 STEP -2"), answer);
    }

    #[test]
    fn test_subscript_and_slice_disambiguation() {
        let answer = Statement::Let(
            Variable::Scalar(Ident::Plain("A".into())),
            Expression::Var(
                Ident::Plain("B".into()),
                Some(Qualifier::Index(vec![num(1.0), num(2.0)])),
            ),
        );
        assert_eq!(parse_str("10 LET A=B(1,2)"), answer);
        let answer = Statement::Let(
            Variable::Scalar(Ident::String("A$".into())),
            Expression::Var(
                Ident::String("B$".into()),
                Some(Qualifier::Slice(
                    Some(Box::new(num(2.0))),
                    Some(Box::new(num(5.0))),
                )),
            ),
        );
        assert_eq!(parse_str("10 LET A$=B$(2 TO 5)"), answer);
        let answer = Statement::Let(
            Variable::Scalar(Ident::String("A$".into())),
            Expression::String("HELLO".into(), Some(Qualifier::Slice(None, None))),
        );
        assert_eq!(parse_str("10 LET A$=\"HELLO\"(TO)"), answer);
    }

    #[test]
    fn test_data_holds_literals_only() {
        let answer = Statement::Data(vec![
            Literal::Number(1.0),
            Literal::Number(2.5),
            Literal::String("X".into()),
        ]);
        assert_eq!(parse_str("10 DATA 1,2.5,\"X\""), answer);
        assert_eq!(
            parse_err("10 DATA -1"),
            "SYNTAX ERROR IN 1:9; EXPECTED LITERAL"
        );
    }

    #[test]
    fn test_print_list() {
        assert_eq!(parse_str("10 PRINT"), Statement::Print(vec![]));
        let answer = Statement::Print(vec![
            PrintItem {
                expr: var("A"),
                semicolon: true,
            },
            PrintItem {
                expr: var("B"),
                semicolon: false,
            },
        ]);
        assert_eq!(parse_str("10 PRINT A;B"), answer);
        let answer = Statement::Print(vec![PrintItem {
            expr: var("A"),
            semicolon: true,
        }]);
        assert_eq!(parse_str("10 PRINT A;"), answer);
    }

    #[test]
    fn test_print_items_need_no_separator() {
        let answer = Statement::Print(vec![
            PrintItem {
                expr: var("A"),
                semicolon: false,
            },
            PrintItem {
                expr: var("B"),
                semicolon: false,
            },
        ]);
        assert_eq!(parse_str("10 PRINT A B"), answer);
        assert_eq!(parse_str("10 PRINT A,B"), answer);
    }

    #[test]
    fn test_input_with_prompt() {
        let answer = Statement::Input(
            Some("HOW MANY".into()),
            vec![
                Variable::Scalar(Ident::Plain("N".into())),
                Variable::Element(Ident::Plain("B".into()), vec![num(1.0)]),
            ],
        );
        assert_eq!(parse_str("10 INPUT \"HOW MANY\";N,B(1)"), answer);
    }

    #[test]
    fn test_colon_chaining() {
        let program = parse("10 LET A=1:PRINT A\n").unwrap();
        assert_eq!(program.lines()[0].statements.len(), 2);
        assert_eq!(
            parse_err("10 PRINT \"A\":"),
            "SYNTAX ERROR IN 1:14; EXPECTED STATEMENT"
        );
    }

    #[test]
    fn test_line_numbers() {
        assert_eq!(
            parse_err("PRINT \"HI\""),
            "SYNTAX ERROR IN 1:1; EXPECTED LINE NUMBER"
        );
        assert_eq!(
            parse_err("70000 STOP"),
            "SYNTAX ERROR IN 1:1; INVALID LINE NUMBER"
        );
        assert_eq!(
            parse_err("10 STOP\n10 STOP"),
            "SYNTAX ERROR IN 2:1; DUPLICATE LINE NUMBER"
        );
    }

    #[test]
    fn test_listing_round_trip() {
        let source = "10 LET A=B(1,2)\n20 PRINT A;\"X\"\n30 IF A<>1 THEN GO TO 10\n";
        let program = parse(source).unwrap();
        let listing = program.to_string();
        assert_eq!(parse(&listing).unwrap(), program);
    }
}
