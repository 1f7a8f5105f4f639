pub mod scan;

use crate::arena::ScratchBuffer;
use crate::constants::{LITERAL_FALSE, LITERAL_NULL, LITERAL_TRUE};
use crate::num::number::decode_number;
use crate::text::string::decode_string;
use crate::types::{Member, Value};
use crate::{ErrorKind, NumberOverflow, ParseOptions, Result, Status};

use self::scan::Cursor;

pub fn from_slice(input: &[u8], options: &ParseOptions) -> Result<Value> {
    tracing::trace!(len = input.len(), "parse started");
    let mut parser = Parser::new(input, options);
    let result = parser.parse_document();
    match &result {
        Ok(_) => tracing::trace!(
            scratch_bytes = parser.scratch.bytes.high_water(),
            scratch_values = parser.scratch.values.high_water(),
            scratch_members = parser.scratch.members.high_water(),
            "parse finished"
        ),
        Err(err) => tracing::debug!(
            kind = ?err.kind,
            offset = err.location.offset,
            line = err.location.line,
            column = err.location.column,
            "parse failed"
        ),
    }
    result
}

pub fn parse_into(out: &mut Value, input: &[u8], options: &ParseOptions) -> Status {
    out.set_null();
    match from_slice(input, options) {
        Ok(value) => {
            *out = value;
            Status::Ok
        }
        Err(err) => err.status(),
    }
}

pub fn validate_slice(input: &[u8], options: &ParseOptions) -> Result<()> {
    from_slice(input, options).map(drop)
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    scratch: ScratchBuffer,
    depth: usize,
    max_depth: Option<usize>,
    number_overflow: NumberOverflow,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8], options: &ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            scratch: ScratchBuffer::new(),
            depth: 0,
            max_depth: options.max_depth,
            number_overflow: options.number_overflow,
        }
    }

    fn parse_document(&mut self) -> Result<Value> {
        self.cursor.skip_whitespace();
        let value = self.parse_value()?;
        self.cursor.skip_whitespace();
        if !self.cursor.is_eof() {
            return Err(self.cursor.error(ErrorKind::RootNotSingular));
        }
        debug_assert!(self.scratch.is_drained());
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.cursor.peek() {
            None => Err(self.cursor.error(ErrorKind::ExpectValue)),
            Some(b'n') => self.parse_literal(LITERAL_NULL, Value::Null),
            Some(b't') => self.parse_literal(LITERAL_TRUE, Value::Bool(true)),
            Some(b'f') => self.parse_literal(LITERAL_FALSE, Value::Bool(false)),
            Some(b'"') => {
                decode_string(&mut self.cursor, &mut self.scratch.bytes).map(Value::String)
            }
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => decode_number(&mut self.cursor, self.number_overflow).map(Value::Number),
        }
    }

    fn parse_literal(&mut self, literal: &[u8], value: Value) -> Result<Value> {
        if self.cursor.eat_slice(literal) {
            Ok(value)
        } else {
            Err(self.cursor.error(ErrorKind::InvalidValue))
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.max_depth.is_some_and(|max| self.depth >= max) {
            return Err(self.cursor.error(ErrorKind::DepthLimitExceeded));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        let mark = self.scratch.values.mark();
        let result = self.parse_array_elements();
        self.depth -= 1;
        match result {
            Ok(()) => Ok(Value::Array(self.scratch.values.take_from(mark))),
            Err(err) => {
                self.scratch.values.rollback(mark);
                Err(err)
            }
        }
    }

    fn parse_array_elements(&mut self) -> Result<()> {
        self.cursor.bump();
        self.cursor.skip_whitespace();
        if self.cursor.eat(b']') {
            return Ok(());
        }
        loop {
            let element = self.parse_value()?;
            self.scratch.values.push(element);
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => {
                    self.cursor.bump();
                    self.cursor.skip_whitespace();
                }
                Some(b']') => {
                    self.cursor.bump();
                    return Ok(());
                }
                _ => return Err(self.cursor.error(ErrorKind::MissCommaOrSquareBracket)),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        let mark = self.scratch.members.mark();
        let result = self.parse_object_members();
        self.depth -= 1;
        match result {
            Ok(()) => Ok(Value::Object(self.scratch.members.take_from(mark))),
            Err(err) => {
                self.scratch.members.rollback(mark);
                Err(err)
            }
        }
    }

    fn parse_object_members(&mut self) -> Result<()> {
        self.cursor.bump();
        self.cursor.skip_whitespace();
        if self.cursor.eat(b'}') {
            return Ok(());
        }
        loop {
            if self.cursor.peek() != Some(b'"') {
                return Err(self.cursor.error(ErrorKind::MissKey));
            }
            let key = decode_string(&mut self.cursor, &mut self.scratch.bytes)?;
            self.cursor.skip_whitespace();
            if !self.cursor.eat(b':') {
                return Err(self.cursor.error(ErrorKind::MissColon));
            }
            self.cursor.skip_whitespace();
            let value = self.parse_value()?;
            self.scratch.members.push(Member { key, value });
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => {
                    self.cursor.bump();
                    self.cursor.skip_whitespace();
                }
                Some(b'}') => {
                    self.cursor.bump();
                    return Ok(());
                }
                _ => return Err(self.cursor.error(ErrorKind::MissCommaOrCurlyBracket)),
            }
        }
    }
}
