//! Recursive-descent parser and type checker for AMPL-2023.
//!
//! One method per non-terminal of the grammar:
//!
//! ```text
//! program    = "program" id ":" { subdef } "main" ":" body .
//! subdef     = id "(" [ type id { "," type id } ] ")" [ "->" type ] ":" body .
//! body       = { vardef } statements .
//! type       = ("bool" | "int") [ "array" ] .
//! vardef     = type id { "," id } ";" .
//! statements = "chillax" | statement { ";" statement } .
//! statement  = assign | call | if | input | output | return | while .
//! ```
//!
//! Expression productions return the synthesized value type; typing
//! rules are enforced while tokens are consumed, and the first violation
//! aborts the parse with a positioned diagnostic. No AST is built: an
//! accepted program yields a [`ProgramInfo`] with the per-subroutine
//! local frame widths a code generator needs.

use crate::frontend::scanner::Scanner;
use crate::frontend::symbol::{IdProps, SymbolTable};
use crate::frontend::token::{Token, TokenKind};
use crate::frontend::types::{BaseType, ValType};
use crate::utils::errors::{CompileError, CompileResult, ErrorKind, Expected};
use crate::utils::location::SourcePos;

/// What the front-end reports for an accepted program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramInfo {
    /// The program name from the header
    pub name: String,
    /// Subroutines in definition order
    pub subroutines: Vec<SubroutineInfo>,
    /// Frame width of the main body
    pub main_frame_width: u32,
}

/// Summary of one accepted subroutine definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubroutineInfo {
    /// The subroutine name
    pub name: String,
    /// The callable type (return kind for a function)
    pub signature: ValType,
    /// Parameter types in header order
    pub params: Vec<ValType>,
    /// Local variable frame width: 1 + number of parameters and locals
    pub frame_width: u32,
}

/// The parser, holding the whole compiler context: the lookahead token,
/// the symbol table, and the return type of the subroutine being parsed.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    token: Token,
    symbols: SymbolTable,
    return_type: ValType,
    subroutines: Vec<SubroutineInfo>,
}

impl<'a> Parser<'a> {
    /// Create a parser and prime the lookahead.
    pub fn new(mut scanner: Scanner<'a>) -> CompileResult<Self> {
        let first = scanner.next_token()?;
        Ok(Self {
            scanner,
            token: first,
            symbols: SymbolTable::new(),
            return_type: ValType::NONE,
            subroutines: Vec::new(),
        })
    }

    /// Parse a complete program.
    ///
    /// `program = "program" id ":" { subdef } "main" ":" body .`
    pub fn parse_program(mut self) -> CompileResult<ProgramInfo> {
        if self.check(TokenKind::Eof) {
            return Err(CompileError::new(
                SourcePos::origin(),
                ErrorKind::Expect {
                    expected: Expected::Token(TokenKind::Program),
                    found: TokenKind::Eof,
                },
            ));
        }
        self.expect(TokenKind::Program)?;
        let name = self.expect_id()?;
        self.expect(TokenKind::Colon)?;

        while self.check(TokenKind::Id) {
            self.parse_subdef()?;
        }

        self.expect(TokenKind::Main)?;
        self.expect(TokenKind::Colon)?;
        self.parse_body()?;

        if !self.check(TokenKind::Eof) {
            return Err(CompileError::new(
                self.token.pos,
                ErrorKind::Unreachable(self.token.kind.name().to_string()),
            ));
        }

        Ok(ProgramInfo {
            name,
            main_frame_width: self.symbols.variables_width(),
            subroutines: self.subroutines,
        })
    }

    /// `subdef = id "(" [ type id { "," type id } ] ")" [ "->" type ] ":" body .`
    fn parse_subdef(&mut self) -> CompileResult<()> {
        let subpos = self.token.pos;
        let subid = self.expect_id()?;
        self.expect(TokenKind::LParen)?;

        let mut params: Vec<(String, ValType, SourcePos)> = Vec::new();
        if self.token.kind.starts_type() {
            loop {
                let ptype = self.parse_type()?;
                let ppos = self.token.pos;
                let pid = self.expect_id()?;
                params.push((pid, ptype, ppos));
                if !self.try_consume(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;

        let mut signature = ValType::procedure();
        if self.try_consume(TokenKind::Arrow)? {
            signature = self.parse_type()?.with_callable();
        }
        self.return_type = signature;

        let param_types: Vec<ValType> = params.iter().map(|&(_, t, _)| t).collect();
        let props = IdProps::subroutine(signature, param_types.clone());
        if !self.symbols.open_subroutine(subid.clone(), props) {
            return Err(CompileError::new(subpos, ErrorKind::MultipleDefinition(subid)));
        }
        for (pid, ptype, ppos) in params {
            if self.symbols.find_name(&pid).is_some() {
                return Err(CompileError::new(ppos, ErrorKind::MultipleDefinition(pid)));
            }
            if !self.symbols.insert_name(pid.clone(), IdProps::variable(ptype)) {
                return Err(CompileError::new(ppos, ErrorKind::MultipleDefinition(pid)));
            }
        }

        self.expect(TokenKind::Colon)?;
        self.parse_body()?;

        self.subroutines.push(SubroutineInfo {
            name: subid,
            signature,
            params: param_types,
            frame_width: self.symbols.variables_width(),
        });
        self.symbols.close_subroutine();
        self.return_type = ValType::NONE;
        Ok(())
    }

    /// `body = { vardef } statements .`
    fn parse_body(&mut self) -> CompileResult<()> {
        while self.token.kind.starts_type() {
            self.parse_vardef()?;
        }
        self.parse_statements()
    }

    /// `type = ("bool" | "int") [ "array" ] .`
    fn parse_type(&mut self) -> CompileResult<ValType> {
        let mut typ = match self.token.kind {
            TokenKind::Bool => ValType::BOOL,
            TokenKind::Int => ValType::INT,
            _ => return Err(self.expect_error(Expected::TypeSpecifier)),
        };
        self.advance()?;
        if self.try_consume(TokenKind::Array)? {
            typ = typ.with_array();
        }
        Ok(typ)
    }

    /// `vardef = type id { "," id } ";" .`
    fn parse_vardef(&mut self) -> CompileResult<()> {
        let typ = self.parse_type()?;
        loop {
            let pos = self.token.pos;
            let id = self.expect_id()?;
            self.define_variable(id, typ, pos)?;
            if !self.try_consume(TokenKind::Comma)? {
                break;
            }
        }
        self.expect(TokenKind::Semicolon)
    }

    /// `statements = "chillax" | statement { ";" statement } .`
    fn parse_statements(&mut self) -> CompileResult<()> {
        if self.try_consume(TokenKind::Chillax)? {
            return Ok(());
        }
        self.parse_statement()?;
        while self.try_consume(TokenKind::Semicolon)? {
            self.parse_statement()?;
        }
        Ok(())
    }

    /// `statement = assign | call | if | input | output | return | while .`
    fn parse_statement(&mut self) -> CompileResult<()> {
        match self.token.kind {
            TokenKind::Let => self.parse_assign(),
            TokenKind::Id => self.parse_call(),
            TokenKind::If => self.parse_if(),
            TokenKind::Input => self.parse_input(),
            TokenKind::Output => self.parse_output(),
            TokenKind::Return => self.parse_return(),
            TokenKind::While => self.parse_while(),
            _ => Err(self.expect_error(Expected::Statement)),
        }
    }

    /// `assign = "let" id [ index ] "=" ( expr | "array" simple ) .`
    ///
    /// The target must be a defined variable. With an index, the target
    /// type is the element type and the right-hand side must match it
    /// exactly; without one, array-ness and base kind must both match.
    /// The `array` form allocates and requires an integer size.
    fn parse_assign(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::Let)?;
        let idpos = self.token.pos;
        let id = self.expect_id()?;

        let full = match self.symbols.find_name(&id).map(|props| props.typ) {
            Some(typ) => typ,
            None => return Err(CompileError::new(idpos, ErrorKind::UnknownIdentifier(id))),
        };
        if full.is_callable() {
            return Err(CompileError::new(idpos, ErrorKind::NotAVariable(id)));
        }

        let mut indexed = false;
        let mut target = full;
        if self.check(TokenKind::LBrack) {
            if !full.is_array() {
                return Err(CompileError::new(idpos, ErrorKind::NotAnArray(id)));
            }
            target = full.elem();
            indexed = true;
            self.parse_index(&id)?;
        }

        self.expect(TokenKind::Eq)?;
        let pos = self.token.pos;
        if self.token.kind.starts_expr() {
            let found = self.parse_expr()?;
            if indexed {
                self.check_types(
                    found,
                    target,
                    pos,
                    format!("for allocation to indexed array '{}'", id),
                )?;
            } else {
                if found.is_array() != full.is_array() {
                    self.check_types(found, full, pos, format!("for assignment to '{}'", id))?;
                }
                let base_mismatch = match full.base() {
                    BaseType::Integer => !found.is_integer(),
                    BaseType::Boolean => !found.is_boolean(),
                    BaseType::None => false,
                };
                if base_mismatch {
                    self.check_types(found, full, pos, format!("for assignment to '{}'", id))?;
                }
            }
        } else if self.check(TokenKind::Array) {
            if !full.is_array() {
                return Err(CompileError::new(idpos, ErrorKind::NotAnArray(id)));
            }
            self.advance()?;
            let pos = self.token.pos;
            let size = self.parse_simple()?;
            self.check_types(size, ValType::INT, pos, format!("for array size of '{}'", id))?;
        } else {
            return Err(self.expect_error(Expected::ExpressionOrArrayAllocation));
        }
        Ok(())
    }

    /// `call = id arglist .`
    ///
    /// Only a procedure can stand as a statement; a function name here
    /// is reported as "not a procedure" before anything else.
    fn parse_call(&mut self) -> CompileResult<()> {
        let idpos = self.token.pos;
        let id = self.expect_id()?;

        let typ = match self.symbols.find_name(&id).map(|props| props.typ) {
            Some(typ) => typ,
            None => return Err(CompileError::new(idpos, ErrorKind::UnknownIdentifier(id))),
        };
        if typ.is_function() {
            return Err(CompileError::new(idpos, ErrorKind::NotAProcedure(id)));
        }
        if !typ.is_callable() {
            return Err(CompileError::new(idpos, ErrorKind::NotAProcedure(id)));
        }

        self.parse_arglist(&id, idpos)
    }

    /// `if = "if" expr ":" statements { "elif" expr ":" statements }
    ///       [ "else" ":" statements ] "end" .`
    fn parse_if(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::If)?;
        let pos = self.token.pos;
        let guard = self.parse_expr()?;
        self.check_types(guard, ValType::BOOL, pos, "for 'if' guard")?;
        self.expect(TokenKind::Colon)?;
        self.parse_statements()?;

        while self.check(TokenKind::Elif) {
            self.advance()?;
            let pos = self.token.pos;
            let guard = self.parse_expr()?;
            self.check_types(guard, ValType::BOOL, pos, "for 'elif' guard")?;
            self.expect(TokenKind::Colon)?;
            self.parse_statements()?;
        }

        if self.try_consume(TokenKind::Else)? {
            self.expect(TokenKind::Colon)?;
            self.parse_statements()?;
        }

        self.expect(TokenKind::End)
    }

    /// `input = "input" "(" id [ index ] ")" .`
    ///
    /// An array must be indexed; a scalar must not be.
    fn parse_input(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::Input)?;
        self.expect(TokenKind::LParen)?;
        let pos = self.token.pos;
        let id = self.expect_id()?;

        let typ = match self.symbols.find_name(&id).map(|props| props.typ) {
            Some(typ) => typ,
            None => return Err(CompileError::new(pos, ErrorKind::UnknownIdentifier(id))),
        };
        if self.check(TokenKind::LBrack) {
            if !typ.is_array() {
                return Err(CompileError::new(pos, ErrorKind::NotAnArray(id)));
            }
            self.parse_index(&id)?;
        } else if typ.is_array() {
            return Err(CompileError::new(pos, ErrorKind::ExpectedScalar(id)));
        }

        self.expect(TokenKind::RParen)
    }

    /// `output = "output" "(" (string | expr) { ".." (string | expr) } ")" .`
    fn parse_output(&mut self) -> CompileResult<()> {
        let mut pos = self.token.pos;
        self.expect(TokenKind::Output)?;
        self.expect(TokenKind::LParen)?;

        self.parse_output_operand(pos)?;
        while self.check(TokenKind::DotDot) {
            pos = self.token.pos;
            self.advance()?;
            self.parse_output_operand(pos)?;
        }

        self.expect(TokenKind::RParen)
    }

    /// One `output` operand: a string, or a non-array expression.
    fn parse_output_operand(&mut self, pos: SourcePos) -> CompileResult<()> {
        if self.check(TokenKind::Str) {
            self.advance()
        } else if self.token.kind.starts_expr() {
            let typ = self.parse_expr()?;
            if typ.is_array() {
                return Err(CompileError::new(
                    pos,
                    ErrorKind::IllegalArrayOperation("'output'".to_string()),
                ));
            }
            Ok(())
        } else {
            Err(self.expect_error(Expected::ExpressionOrString))
        }
    }

    /// `return = "return" [ expr ] .`
    ///
    /// A function requires an expression matching its return kind; a
    /// procedure (and the main body) allows none.
    fn parse_return(&mut self) -> CompileResult<()> {
        let pos = self.token.pos;
        self.expect(TokenKind::Return)?;

        if self.token.kind.starts_expr() {
            if !self.return_type.is_function() {
                return Err(CompileError::new(
                    self.token.pos,
                    ErrorKind::ReturnExpressionNotAllowed,
                ));
            }
            let epos = self.token.pos;
            let found = self.parse_expr()?;
            self.check_types(found, self.return_type.returned(), epos, "for 'return' statement")?;
        } else if self.return_type.is_function() {
            return Err(CompileError::new(pos, ErrorKind::MissingReturnExpression));
        }
        Ok(())
    }

    /// `while = "while" expr ":" statements "end" .`
    fn parse_while(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::While)?;
        let pos = self.token.pos;
        let guard = self.parse_expr()?;
        self.check_types(guard, ValType::BOOL, pos, "for 'while' guard")?;
        self.expect(TokenKind::Colon)?;
        self.parse_statements()?;
        self.expect(TokenKind::End)
    }

    /// `arglist = "(" [ expr { "," expr } ] ")" .`
    ///
    /// Arguments are checked against the callee's parameters left to
    /// right as they are parsed.
    fn parse_arglist(&mut self, id: &str, idpos: SourcePos) -> CompileResult<()> {
        let params = match self.symbols.find_name(id).map(|props| props.params.clone()) {
            Some(params) => params,
            None => {
                return Err(CompileError::new(
                    idpos,
                    ErrorKind::UnknownIdentifier(id.to_string()),
                ));
            }
        };

        self.expect(TokenKind::LParen)?;
        if self.token.kind.starts_expr() {
            let mut index = 0;
            let pos = self.token.pos;
            let found = self.parse_expr()?;
            self.check_argument(id, &params, index, found, pos)?;
            index += 1;

            while self.check(TokenKind::Comma) {
                if index >= params.len() {
                    return Err(CompileError::new(
                        self.token.pos,
                        ErrorKind::TooManyArguments(id.to_string()),
                    ));
                }
                self.advance()?;
                let pos = self.token.pos;
                let found = self.parse_expr()?;
                self.check_argument(id, &params, index, found, pos)?;
                index += 1;
            }
            if index < params.len() {
                return Err(CompileError::new(
                    self.token.pos,
                    ErrorKind::TooFewArguments(id.to_string()),
                ));
            }
        }
        self.expect(TokenKind::RParen)
    }

    /// Check one argument against the corresponding parameter: arrays
    /// must match exactly, scalars must agree on base kind, callables
    /// pass for callables.
    fn check_argument(
        &self,
        id: &str,
        params: &[ValType],
        index: usize,
        found: ValType,
        pos: SourcePos,
    ) -> CompileResult<()> {
        let param = match params.get(index) {
            Some(&param) => param,
            None => {
                return Err(CompileError::new(
                    pos,
                    ErrorKind::TooManyArguments(id.to_string()),
                ));
            }
        };
        let context = format!("for argument {} of call to '{}'", index + 1, id);
        if !found.is_array() && !param.is_array() {
            let compatible = (found.is_integer() && param.is_integer())
                || (found.is_boolean() && param.is_boolean())
                || (found.is_callable() && param.is_callable());
            if !compatible {
                self.check_types(found, param, pos, context)?;
            }
            Ok(())
        } else {
            self.check_types(found, param, pos, context)
        }
    }

    /// `index = "[" simple "]" .`
    fn parse_index(&mut self, id: &str) -> CompileResult<()> {
        self.expect(TokenKind::LBrack)?;
        let pos = self.token.pos;
        let typ = self.parse_simple()?;
        self.check_types(typ, ValType::INT, pos, format!("for array index of '{}'", id))?;
        self.expect(TokenKind::RBrack)
    }

    /// `expr = simple [ relop simple ] .`
    ///
    /// Relational operands must be non-array; `=` and `/=` compare any
    /// matching scalar types, the ordering operators require integers.
    /// The result is boolean.
    fn parse_expr(&mut self) -> CompileResult<ValType> {
        let left = self.parse_simple()?;
        if !self.token.kind.is_relop() {
            return Ok(left);
        }

        let op = self.token.kind;
        if left.is_array() {
            return Err(CompileError::new(
                self.token.pos,
                ErrorKind::IllegalArrayOperation(op.name().to_string()),
            ));
        }
        let pos = self.token.pos;
        self.advance()?;
        let right = self.parse_simple()?;
        if right.is_array() {
            return Err(CompileError::new(
                pos,
                ErrorKind::IllegalArrayOperation(op.name().to_string()),
            ));
        }

        let context = format!("for operator {}", op.name());
        if matches!(op, TokenKind::Eq | TokenKind::Ne) {
            self.check_types(left, right, pos, context)?;
        } else {
            self.check_types(left, ValType::INT, pos, context.clone())?;
            self.check_types(right, ValType::INT, pos, context)?;
        }
        Ok(ValType::BOOL)
    }

    /// `simple = [ "-" ] term { addop term } .`
    ///
    /// Unary minus requires an integer operand; `or` requires booleans,
    /// `+` and `-` integers. Arrays are rejected outright.
    fn parse_simple(&mut self) -> CompileResult<ValType> {
        let first = if self.check(TokenKind::Minus) {
            let mpos = self.token.pos;
            self.advance()?;
            let typ = self.parse_term()?;
            if typ.is_array() {
                return Err(CompileError::new(
                    mpos,
                    ErrorKind::IllegalArrayOperation("unary minus".to_string()),
                ));
            }
            self.check_types(typ, ValType::INT, mpos.next_col(), "for unary minus")?;
            typ
        } else {
            self.parse_term()?
        };

        if self.token.kind.is_addop() && first.is_array() {
            return Err(CompileError::new(
                self.token.pos,
                ErrorKind::IllegalArrayOperation(self.token.kind.name().to_string()),
            ));
        }
        while self.token.kind.is_addop() {
            let op = self.token.kind;
            let pos = self.token.pos;
            self.advance()?;
            let next = self.parse_term()?;
            if next.is_array() {
                return Err(CompileError::new(
                    pos,
                    ErrorKind::IllegalArrayOperation(op.name().to_string()),
                ));
            }
            let context = format!("for operator {}", op.name());
            if op == TokenKind::Or {
                self.check_types(first, ValType::BOOL, pos, context.clone())?;
                self.check_types(next, ValType::BOOL, pos, context)?;
            } else {
                self.check_types(first, ValType::INT, pos, context.clone())?;
                self.check_types(next, ValType::INT, pos, context)?;
            }
        }
        Ok(first)
    }

    /// `term = factor { mulop factor } .`
    ///
    /// `and` requires booleans; `/`, `*`, `rem` require integers.
    fn parse_term(&mut self) -> CompileResult<ValType> {
        let first = self.parse_factor()?;

        if self.token.kind.is_mulop() && first.is_array() {
            return Err(CompileError::new(
                self.token.pos,
                ErrorKind::IllegalArrayOperation(self.token.kind.name().to_string()),
            ));
        }
        while self.token.kind.is_mulop() {
            let op = self.token.kind;
            let pos = self.token.pos;
            self.advance()?;
            let next = self.parse_factor()?;
            if next.is_array() {
                return Err(CompileError::new(
                    pos,
                    ErrorKind::IllegalArrayOperation(op.name().to_string()),
                ));
            }
            let context = format!("for operator {}", op.name());
            if op == TokenKind::And {
                self.check_types(first, ValType::BOOL, pos, context.clone())?;
                self.check_types(next, ValType::BOOL, pos, context)?;
            } else {
                self.check_types(first, ValType::INT, pos, context.clone())?;
                self.check_types(next, ValType::INT, pos, context)?;
            }
        }
        Ok(first)
    }

    /// `factor = id [ index | arglist ] | num | "(" expr ")"
    ///         | "not" factor | "true" | "false" .`
    ///
    /// An indexed name must be an array and yields its base kind; a
    /// called name must be a function and yields its return kind with
    /// the callable attribute cleared.
    fn parse_factor(&mut self) -> CompileResult<ValType> {
        match self.token.kind {
            TokenKind::Id => {
                let pos = self.token.pos;
                let id = self.expect_id()?;
                let typ = match self.symbols.find_name(&id).map(|props| props.typ) {
                    Some(typ) => typ,
                    None => {
                        return Err(CompileError::new(pos, ErrorKind::UnknownIdentifier(id)));
                    }
                };
                if self.check(TokenKind::LBrack) {
                    if !typ.is_array() {
                        return Err(CompileError::new(pos, ErrorKind::NotAnArray(id)));
                    }
                    self.parse_index(&id)?;
                    Ok(typ.base_only())
                } else if self.check(TokenKind::LParen) {
                    if !typ.is_function() {
                        return Err(CompileError::new(pos, ErrorKind::NotAFunction(id)));
                    }
                    self.parse_arglist(&id, pos)?;
                    Ok(typ.base_only())
                } else {
                    Ok(typ)
                }
            }
            TokenKind::Num => {
                self.advance()?;
                Ok(ValType::INT)
            }
            TokenKind::LParen => {
                self.advance()?;
                let typ = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(typ)
            }
            TokenKind::Not => {
                let npos = self.token.pos;
                self.advance()?;
                let pos = self.token.pos;
                let typ = self.parse_factor()?;
                if typ.is_array() {
                    return Err(CompileError::new(
                        npos,
                        ErrorKind::IllegalArrayOperation("'not'".to_string()),
                    ));
                }
                self.check_types(typ, ValType::BOOL, pos, "for 'not'")?;
                Ok(typ)
            }
            TokenKind::True | TokenKind::False => {
                self.advance()?;
                Ok(ValType::BOOL)
            }
            _ => Err(self.expect_error(Expected::Factor)),
        }
    }

    // Helper methods.

    /// Overwrite the lookahead with the next token.
    fn advance(&mut self) -> CompileResult<()> {
        self.token = self.scanner.next_token()?;
        Ok(())
    }

    /// Check the lookahead kind without consuming it.
    fn check(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    /// Consume the lookahead if it has the given kind.
    fn try_consume(&mut self, kind: TokenKind) -> CompileResult<bool> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume the lookahead if it matches, fail otherwise.
    fn expect(&mut self, kind: TokenKind) -> CompileResult<()> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.expect_error(Expected::Token(kind)))
        }
    }

    /// Consume an identifier and return an owned copy of its lexeme.
    fn expect_id(&mut self) -> CompileResult<String> {
        if self.check(TokenKind::Id) {
            let id = self.token.lexeme.clone();
            self.advance()?;
            Ok(id)
        } else {
            Err(self.expect_error(Expected::Token(TokenKind::Id)))
        }
    }

    /// An `expected ..., but found ...` diagnostic at the lookahead.
    fn expect_error(&self, expected: Expected) -> CompileError {
        CompileError::new(
            self.token.pos,
            ErrorKind::Expect { expected, found: self.token.kind },
        )
    }

    /// Fail with a type mismatch unless `found` equals `expected`.
    fn check_types(
        &self,
        found: ValType,
        expected: ValType,
        pos: SourcePos,
        context: impl Into<String>,
    ) -> CompileResult<()> {
        if found != expected {
            Err(CompileError::new(
                pos,
                ErrorKind::TypeMismatch { expected, found, context: context.into() },
            ))
        } else {
            Ok(())
        }
    }

    /// Define a variable in the active scope, rejecting any name that is
    /// already visible.
    fn define_variable(&mut self, id: String, typ: ValType, pos: SourcePos) -> CompileResult<()> {
        if self.symbols.find_name(&id).is_some() {
            return Err(CompileError::new(pos, ErrorKind::MultipleDefinition(id)));
        }
        if !self.symbols.insert_name(id.clone(), IdProps::variable(typ)) {
            return Err(CompileError::new(pos, ErrorKind::MultipleDefinition(id)));
        }
        Ok(())
    }
}
